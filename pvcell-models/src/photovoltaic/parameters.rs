use uom::si::{
    electric_charge::coulomb,
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{
        ElectricCharge, ElectricCurrent, ElectricPotential, ElectricalResistance, HeatCapacity,
        ThermodynamicTemperature,
    },
    heat_capacity::joule_per_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::ConfigurationError;

/// Physical parameters of a single-diode photovoltaic cell.
///
/// Every value must be finite and strictly positive; see [`Self::validate`].
/// The universal constants are carried alongside the cell properties so the
/// curve can be reproduced exactly with the values it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellParameters {
    /// Light-generated current.
    pub photocurrent: ElectricCurrent,

    /// Diode reverse saturation current.
    pub saturation_current: ElectricCurrent,

    /// Parasitic resistance in the current path.
    pub series_resistance: ElectricalResistance,

    /// Absolute cell temperature.
    pub cell_temperature: ThermodynamicTemperature,

    /// Empirical diode ideality factor (dimensionless).
    pub ideality_factor: f64,

    pub elementary_charge: ElectricCharge,

    pub boltzmann_constant: HeatCapacity,
}

impl Default for CellParameters {
    fn default() -> Self {
        Self {
            photocurrent: ElectricCurrent::new::<ampere>(5.0),
            saturation_current: ElectricCurrent::new::<ampere>(0.0002),
            series_resistance: ElectricalResistance::new::<ohm>(0.001),
            cell_temperature: ThermodynamicTemperature::new::<kelvin>(293.15),
            ideality_factor: 1.2,
            elementary_charge: ElectricCharge::new::<coulomb>(1.602e-19),
            boltzmann_constant: HeatCapacity::new::<joule_per_kelvin>(1.38e-23),
        }
    }
}

impl CellParameters {
    /// Validates that every parameter is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter, checked in declaration order.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_positive("photocurrent", self.photocurrent.get::<ampere>())?;
        check_positive(
            "saturation_current",
            self.saturation_current.get::<ampere>(),
        )?;
        check_positive("series_resistance", self.series_resistance.get::<ohm>())?;
        check_positive("cell_temperature", self.cell_temperature.get::<kelvin>())?;
        check_positive("ideality_factor", self.ideality_factor)?;
        check_positive("elementary_charge", self.elementary_charge.get::<coulomb>())?;
        check_positive(
            "boltzmann_constant",
            self.boltzmann_constant.get::<joule_per_kelvin>(),
        )?;
        Ok(())
    }

    /// Returns the scaled thermal voltage `n k T / q`.
    #[must_use]
    pub fn thermal_voltage(&self) -> ElectricPotential {
        ElectricPotential::new::<volt>(
            self.ideality_factor
                * self.boltzmann_constant.get::<joule_per_kelvin>()
                * self.cell_temperature.get::<kelvin>()
                / self.elementary_charge.get::<coulomb>(),
        )
    }
}

fn check_positive(parameter: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if !value.is_finite() {
        return Err(ConfigurationError::NonFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(ConfigurationError::NonPositive { parameter, value });
    }
    Ok(())
}
