use uom::si::f64::{ElectricCurrent, ElectricPotential, Power};

/// A single operating point on the cell's characteristic curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub current: ElectricCurrent,
    pub voltage: ElectricPotential,

    /// Always `voltage * current`.
    pub power: Power,
}

/// Sampled I-V and P-V curves of a cell.
///
/// Holds three index-aligned sequences of equal length, ordered by ascending
/// output current. Index `i` of each sequence belongs to the same operating
/// point.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveResult {
    current: Vec<ElectricCurrent>,
    voltage: Vec<ElectricPotential>,
    power: Vec<Power>,
}

impl CurveResult {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            current: Vec::with_capacity(capacity),
            voltage: Vec::with_capacity(capacity),
            power: Vec::with_capacity(capacity),
        }
    }

    /// Appends an operating point, deriving its power from current and voltage.
    pub(super) fn push(&mut self, current: ElectricCurrent, voltage: ElectricPotential) {
        self.current.push(current);
        self.voltage.push(voltage);
        self.power.push(voltage * current);
    }

    /// Returns the number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Output current of each sample, strictly increasing.
    #[must_use]
    pub fn current(&self) -> &[ElectricCurrent] {
        &self.current
    }

    /// Cell voltage of each sample.
    #[must_use]
    pub fn voltage(&self) -> &[ElectricPotential] {
        &self.voltage
    }

    /// Output power of each sample.
    #[must_use]
    pub fn power(&self) -> &[Power] {
        &self.power
    }

    /// Returns the point at `index`, if it exists.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<CurvePoint> {
        Some(CurvePoint {
            current: *self.current.get(index)?,
            voltage: *self.voltage.get(index)?,
            power: *self.power.get(index)?,
        })
    }

    /// Iterates over the sampled points in order of ascending current.
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.current
            .iter()
            .zip(&self.voltage)
            .zip(&self.power)
            .map(|((&current, &voltage), &power)| CurvePoint {
                current,
                voltage,
                power,
            })
    }

    /// Returns the index of the sample with the largest power.
    ///
    /// Ties resolve to the lowest index. Returns `None` for an empty curve.
    #[must_use]
    pub fn max_power_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (index, power) in self.power.iter().enumerate() {
            match best {
                Some(b) if *power <= self.power[b] => {}
                _ => best = Some(index),
            }
        }
        best
    }

    /// Returns the sampled maximum power point.
    #[must_use]
    pub fn max_power_point(&self) -> Option<CurvePoint> {
        self.max_power_index().and_then(|index| self.point(index))
    }

    /// Returns the voltage of the first sample, taken at zero output current.
    #[must_use]
    pub fn open_circuit_voltage(&self) -> Option<ElectricPotential> {
        self.voltage.first().copied()
    }
}
