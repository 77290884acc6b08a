use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential},
    power::watt,
    ratio::ratio,
};

use super::{CellParameters, CurveError, CurveResult, linspace};

/// Number of samples used when none is specified.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Generates the I-V and P-V curves of a cell.
///
/// The output current is sampled at `sample_count` evenly spaced values over
/// `[0, photocurrent]`, both ends included. For each sample the cell voltage
/// is evaluated with [`cell_voltage`] and the power is `voltage * current`.
///
/// # Errors
///
/// Returns [`CurveError::Configuration`] if the parameters are invalid or
/// `sample_count < 2`, before any point is evaluated.
/// Returns [`CurveError::Domain`] if any point leaves the domain of the
/// diode equation or its power is not finite. No partial curve is returned.
pub fn generate(params: &CellParameters, sample_count: usize) -> Result<CurveResult, CurveError> {
    params.validate()?;
    let currents = linspace(0.0, params.photocurrent.get::<ampere>(), sample_count)?;

    let mut result = CurveResult::with_capacity(sample_count);
    for current in currents {
        let current = ElectricCurrent::new::<ampere>(current);
        let voltage = cell_voltage(params, current)?;
        if !(voltage * current).get::<watt>().is_finite() {
            return Err(CurveError::Domain {
                current: current.get::<ampere>(),
                argument: log_argument(params, current),
            });
        }
        result.push(current, voltage);
    }

    Ok(result)
}

/// Evaluates the cell voltage at a given output current.
///
/// ```text
/// V_C = (n k T / q) ln((I_ph + I_0 - I_C) / I_0) - I_C R_s
/// ```
///
/// Parameters are assumed valid; this function does not call
/// [`CellParameters::validate`].
///
/// # Errors
///
/// Returns [`CurveError::Domain`] if the logarithm argument is not strictly
/// positive or the resulting voltage is not finite.
pub fn cell_voltage(
    params: &CellParameters,
    current: ElectricCurrent,
) -> Result<ElectricPotential, CurveError> {
    let argument = log_argument(params, current);

    let domain_error = || CurveError::Domain {
        current: current.get::<ampere>(),
        argument,
    };

    if argument.is_nan() || argument <= 0.0 {
        return Err(domain_error());
    }

    let voltage =
        params.thermal_voltage() * argument.ln() - current * params.series_resistance;

    if voltage.get::<volt>().is_finite() {
        Ok(voltage)
    } else {
        Err(domain_error())
    }
}

/// Returns `(I_ph + I_0 - I_C) / I_0`, evaluated as `1 + (I_ph - I_C) / I_0`.
///
/// `I_0` can be far below the resolution of `I_ph`, so it is never added to
/// `I_ph` directly. At `I_C == I_ph` the result is exactly 1.
fn log_argument(params: &CellParameters, current: ElectricCurrent) -> f64 {
    1.0 + ((params.photocurrent - current) / params.saturation_current).get::<ratio>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electrical_resistance::ohm,
        f64::{ElectricalResistance, HeatCapacity},
        heat_capacity::joule_per_kelvin,
        power::watt,
    };

    use crate::photovoltaic::ConfigurationError;

    fn amps(values: &[ElectricCurrent]) -> Vec<f64> {
        values.iter().map(|v| v.get::<ampere>()).collect()
    }

    fn volts(values: &[ElectricPotential]) -> Vec<f64> {
        values.iter().map(|v| v.get::<volt>()).collect()
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let params = CellParameters::default();

        let first = generate(&params, DEFAULT_SAMPLE_COUNT).unwrap();
        let second = generate(&params, DEFAULT_SAMPLE_COUNT).unwrap();

        let bits = |r: &CurveResult| -> Vec<(u64, u64, u64)> {
            r.points()
                .map(|p| {
                    (
                        p.current.get::<ampere>().to_bits(),
                        p.voltage.get::<volt>().to_bits(),
                        p.power.get::<watt>().to_bits(),
                    )
                })
                .collect()
        };
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn every_sequence_has_the_requested_length() {
        let params = CellParameters::default();

        for count in [2, 3, 10, 100, 1_000] {
            let result = generate(&params, count).unwrap();
            assert_eq!(result.len(), count);
            assert_eq!(result.current().len(), count);
            assert_eq!(result.voltage().len(), count);
            assert_eq!(result.power().len(), count);
        }
    }

    #[test]
    fn power_is_voltage_times_current() {
        let result = generate(&CellParameters::default(), DEFAULT_SAMPLE_COUNT).unwrap();

        for point in result.points() {
            let expected = point.voltage.get::<volt>() * point.current.get::<ampere>();
            assert_relative_eq!(point.power.get::<watt>(), expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn current_spans_zero_to_photocurrent() {
        let params = CellParameters::default();
        let result = generate(&params, DEFAULT_SAMPLE_COUNT).unwrap();
        let current = amps(result.current());

        assert_eq!(current[0], 0.0);
        assert_eq!(current[DEFAULT_SAMPLE_COUNT - 1], 5.0);
        assert!(current.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn voltage_at_photocurrent_is_the_series_drop() {
        let params = CellParameters::default();
        let result = generate(&params, DEFAULT_SAMPLE_COUNT).unwrap();
        let last = *volts(result.voltage()).last().unwrap();

        let expected =
            -params.photocurrent.get::<ampere>() * params.series_resistance.get::<ohm>();
        assert_eq!(last, expected);
        assert_relative_eq!(last, -0.005, max_relative = 1e-15);
    }

    #[test]
    fn default_cell_regression() {
        let result = generate(&CellParameters::default(), DEFAULT_SAMPLE_COUNT).unwrap();
        let first = result.point(0).unwrap();

        assert_eq!(first.current.get::<ampere>(), 0.0);
        assert_relative_eq!(
            first.voltage.get::<volt>(),
            0.306_869_993_612_413,
            max_relative = 1e-12
        );
        assert_eq!(first.power.get::<watt>(), 0.0);

        let open_circuit = (1.2 * 1.38e-23 * 293.15 / 1.602e-19) * (5.0002_f64 / 0.0002).ln();
        assert_relative_eq!(
            result.open_circuit_voltage().unwrap().get::<volt>(),
            open_circuit,
            max_relative = 1e-12
        );
    }

    #[test]
    fn max_power_point_is_interior() {
        let result = generate(&CellParameters::default(), DEFAULT_SAMPLE_COUNT).unwrap();
        let index = result.max_power_index().unwrap();

        assert!(index > 0);
        assert!(index < DEFAULT_SAMPLE_COUNT - 1);

        let power: Vec<f64> = result.power().iter().map(|p| p.get::<watt>()).collect();
        assert!(power[..=index].iter().all(|p| *p >= 0.0));
        assert!(power[DEFAULT_SAMPLE_COUNT - 1].abs() < 0.1);
    }

    #[test]
    fn rejects_too_few_samples() {
        let error = generate(&CellParameters::default(), 1).unwrap_err();
        assert_eq!(
            error,
            CurveError::Configuration(ConfigurationError::TooFewSamples { count: 1 })
        );
    }

    #[test]
    fn rejects_invalid_parameters_before_computing() {
        let params = CellParameters {
            saturation_current: ElectricCurrent::new::<ampere>(0.0),
            ..CellParameters::default()
        };

        assert!(matches!(
            generate(&params, DEFAULT_SAMPLE_COUNT),
            Err(CurveError::Configuration(ConfigurationError::NonPositive {
                parameter: "saturation_current",
                ..
            }))
        ));
    }

    #[test]
    fn current_beyond_photocurrent_is_a_domain_error() {
        let params = CellParameters::default();
        let error = cell_voltage(&params, ElectricCurrent::new::<ampere>(6.0)).unwrap_err();

        match error {
            CurveError::Domain { current, argument } => {
                assert_eq!(current, 6.0);
                assert!(argument < 0.0);
            }
            CurveError::Configuration(e) => panic!("unexpected configuration error: {e}"),
        }
    }

    #[test]
    fn overflowing_voltage_is_a_domain_error() {
        let params = CellParameters {
            boltzmann_constant: HeatCapacity::new::<joule_per_kelvin>(1e300),
            ..CellParameters::default()
        };

        assert!(matches!(
            generate(&params, DEFAULT_SAMPLE_COUNT),
            Err(CurveError::Domain { current, .. }) if current == 0.0
        ));
    }

    #[test]
    fn tiny_saturation_current_still_reaches_photocurrent() {
        for (photocurrent, saturation_current) in [(8.0, 1e-16), (1e4, 1e-13)] {
            let params = CellParameters {
                photocurrent: ElectricCurrent::new::<ampere>(photocurrent),
                saturation_current: ElectricCurrent::new::<ampere>(saturation_current),
                ..CellParameters::default()
            };
            assert!(params.validate().is_ok());

            let result = generate(&params, DEFAULT_SAMPLE_COUNT).unwrap();
            let last = result.point(DEFAULT_SAMPLE_COUNT - 1).unwrap();

            assert_eq!(last.current.get::<ampere>(), photocurrent);
            assert_eq!(
                last.voltage.get::<volt>(),
                -photocurrent * params.series_resistance.get::<ohm>()
            );
        }
    }

    #[test]
    fn overflowing_power_is_a_domain_error() {
        let params = CellParameters {
            photocurrent: ElectricCurrent::new::<ampere>(1e200),
            saturation_current: ElectricCurrent::new::<ampere>(1e190),
            ..CellParameters::default()
        };

        assert!(matches!(
            generate(&params, 3),
            Err(CurveError::Domain { current, .. }) if current == 5e199
        ));
    }

    #[test]
    fn larger_series_resistance_lowers_every_loaded_voltage() {
        let low = generate(&CellParameters::default(), 20).unwrap();
        let high = generate(
            &CellParameters {
                series_resistance: ElectricalResistance::new::<ohm>(0.01),
                ..CellParameters::default()
            },
            20,
        )
        .unwrap();

        assert_eq!(low.voltage()[0], high.voltage()[0]);
        for (l, h) in low.voltage().iter().zip(high.voltage()).skip(1) {
            assert!(h < l);
        }
    }
}
