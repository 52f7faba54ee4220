use std::f64::consts::PI;
use std::fmt;
use std::io::{self, Write};
use std::ops::Add;

use tracing::trace;

use super::vector::{Field, FieldVector};
use crate::constants::VACUUM_PERMITTIVITY;
use crate::math::{format_general, Scalar, DISPLAY_PRECISION};

/// Field magnitude `Q / (4π ε₀ r²)` in N/C at distance `distance_m` from a point charge.
///
/// Returns `0.0` when the distance is exactly zero. Negative distances are not rejected.
#[inline]
#[must_use]
pub fn coulomb_field_magnitude(charge_c: Scalar, distance_m: Scalar) -> Scalar {
    if distance_m == 0.0 {
        return 0.0;
    }
    charge_c / (4.0 * PI * VACUUM_PERMITTIVITY * distance_m * distance_m)
}

/// Electric field value: raw components plus a magnitude derived from Coulomb's law.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElectricField {
    vector: FieldVector,
    /// Last value computed by [`ElectricField::calculate_electric_field`] (N/C).
    calculated_e: Scalar,
}

impl ElectricField {
    /// Constructs a field from its components with no calculated magnitude.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::from_vector(FieldVector::new(x, y, z))
    }

    /// Wraps an existing vector.
    #[must_use]
    pub const fn from_vector(vector: FieldVector) -> Self {
        Self {
            vector,
            calculated_e: 0.0,
        }
    }

    /// Mutable access to the raw components.
    pub fn vector_mut(&mut self) -> &mut FieldVector {
        &mut self.vector
    }

    /// Stores the Coulomb's-law magnitude for `charge_c` coulombs at `distance_m` meters.
    pub fn calculate_electric_field(&mut self, charge_c: Scalar, distance_m: Scalar) {
        self.calculated_e = coulomb_field_magnitude(charge_c, distance_m);
        trace!(charge_c, distance_m, calculated_e = self.calculated_e, "electric field calculated");
    }

    /// Calculated magnitude in N/C, `0.0` until calculated.
    #[must_use]
    pub const fn calculated_e(&self) -> Scalar {
        self.calculated_e
    }

    /// One-line description of the calculated magnitude.
    #[must_use]
    pub fn calculated_e_report(&self) -> String {
        self.calculated_e_report_with(DISPLAY_PRECISION)
    }

    /// [`ElectricField::calculated_e_report`] with `precision` significant digits.
    #[must_use]
    pub fn calculated_e_report_with(&self, precision: usize) -> String {
        format!(
            "Calculated Electric Field (E) from Gauss' Law: {} N/C",
            format_general(self.calculated_e, precision)
        )
    }

    /// Writes [`ElectricField::calculated_e_report_with`] followed by a newline.
    pub fn write_calculated_e<W: Write>(
        &self,
        mut writer: W,
        precision: usize,
    ) -> io::Result<()> {
        writeln!(writer, "{}", self.calculated_e_report_with(precision))
    }
}

impl Field for ElectricField {
    fn vector(&self) -> &FieldVector {
        &self.vector
    }
}

/// Sums the components. The calculated magnitude is not carried over: the sum starts at zero.
impl Add for ElectricField {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vector(self.vector + rhs.vector)
    }
}

impl fmt::Display for ElectricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Electric Field: ")?;
        fmt::Display::fmt(&self.vector, f)
    }
}
