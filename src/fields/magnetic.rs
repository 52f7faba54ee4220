use std::f64::consts::PI;
use std::fmt;
use std::io::{self, Write};
use std::ops::Add;

use tracing::trace;

use super::vector::{Field, FieldVector};
use crate::constants::VACUUM_PERMEABILITY;
use crate::math::{format_general, Scalar, DISPLAY_PRECISION};

/// Magnitude `I / (2π r μ₀)` in T for a long straight wire carrying `current_a`.
///
/// Returns `0.0` when the distance is exactly zero.
#[inline]
#[must_use]
pub fn ampere_field_magnitude(current_a: Scalar, distance_m: Scalar) -> Scalar {
    if distance_m == 0.0 {
        return 0.0;
    }
    current_a / (2.0 * PI * distance_m * VACUUM_PERMEABILITY)
}

/// Magnetic field value: raw components plus a magnitude derived from Ampere's law.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MagneticField {
    vector: FieldVector,
    calculated_b: Scalar,
}

impl MagneticField {
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
            calculated_b: 0.0,
        }
    }

    /// Mutable access to the raw components.
    pub fn vector_mut(&mut self) -> &mut FieldVector {
        &mut self.vector
    }

    /// Stores the Ampere's-law magnitude for `current_a` amperes at `distance_m` meters.
    pub fn calculate_magnetic_field(&mut self, current_a: Scalar, distance_m: Scalar) {
        self.calculated_b = ampere_field_magnitude(current_a, distance_m);
        trace!(current_a, distance_m, calculated_b = self.calculated_b, "magnetic field calculated");
    }

    /// Calculated magnitude in T.
    #[must_use]
    pub const fn calculated_b(&self) -> Scalar {
        self.calculated_b
    }

    /// One-line description of the calculated magnitude.
    #[must_use]
    pub fn calculated_b_report(&self) -> String {
        self.calculated_b_report_with(DISPLAY_PRECISION)
    }

    /// [`MagneticField::calculated_b_report`] with `precision` significant digits.
    #[must_use]
    pub fn calculated_b_report_with(&self, precision: usize) -> String {
        format!(
            "Calculated Magnetic Field (B) from Ampere's Law: {} T",
            format_general(self.calculated_b, precision)
        )
    }

    /// Writes [`MagneticField::calculated_b_report_with`] followed by a newline.
    pub fn write_calculated_b<W: Write>(
        &self,
        mut writer: W,
        precision: usize,
    ) -> io::Result<()> {
        writeln!(writer, "{}", self.calculated_b_report_with(precision))
    }
}

impl Field for MagneticField {
    fn vector(&self) -> &FieldVector {
        &self.vector
    }
}

/// Sums the components; the result's calculated magnitude is zero.
impl Add for MagneticField {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vector(self.vector + rhs.vector)
    }
}

impl fmt::Display for MagneticField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magnetic Field: ")?;
        fmt::Display::fmt(&self.vector, f)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn straight_wire_scenario() {
        let mut field = MagneticField::new(0.1, 0.2, 0.3);
        field.calculate_magnetic_field(5.0, 0.02);
        let expected = 5.0 / (2.0 * PI * 0.02 * 4.0 * PI * 1.0e-7);
        assert_relative_eq!(field.calculated_b(), expected, max_relative = 1.0e-9);
        assert_relative_eq!(field.calculated_b(), 3.166_286_989e7, max_relative = 1.0e-9);
        assert_eq!(
            field.calculated_b_report(),
            "Calculated Magnetic Field (B) from Ampere's Law: 3.16629e+07 T"
        );
    }

    #[test]
    fn magnitude_is_inverse_in_distance() {
        assert_relative_eq!(
            ampere_field_magnitude(2.0, 0.5) / ampere_field_magnitude(2.0, 1.0),
            2.0,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn negative_distance_is_not_rejected() {
        let mut field = MagneticField::new(0.1, 0.2, 0.3);
        field.calculate_magnetic_field(5.0, -0.02);
        assert!(field.calculated_b() < 0.0);
        assert_relative_eq!(
            field.calculated_b(),
            -ampere_field_magnitude(5.0, 0.02),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn copy_keeps_calculated_magnitude() {
        let mut original = MagneticField::new(0.1, 0.2, 0.3);
        original.calculate_magnetic_field(5.0, 0.02);
        let mut copy = original;
        copy.vector_mut().set_component(2, 9.0).unwrap();
        assert_eq!(copy.calculated_b(), original.calculated_b());
        assert_eq!(original.vector().component(2).unwrap(), 0.3);
        assert_eq!(copy.vector().component(2).unwrap(), 9.0);
    }

    #[test]
    fn report_precision_is_adjustable() {
        let mut field = MagneticField::default();
        field.calculate_magnetic_field(5.0, 0.02);
        assert_eq!(
            field.calculated_b_report_with(3),
            "Calculated Magnetic Field (B) from Ampere's Law: 3.17e+07 T"
        );
        let sum = field + MagneticField::new(0.123_456, 0.0, 1.0);
        assert_eq!(format!("{sum:.2}"), "Magnetic Field: (0.12, 0, 1)");
    }

    #[test]
    fn zero_distance_yields_zero() {
        let mut field = MagneticField::default();
        field.calculate_magnetic_field(5.0, 0.0);
        assert_eq!(field.calculated_b(), 0.0);
        field.calculate_magnetic_field(5.0, -0.0);
        assert_eq!(field.calculated_b(), 0.0);
    }

    #[test]
    fn sum_resets_calculated_magnitude() {
        let mut a = MagneticField::new(0.1, 0.2, 0.3);
        a.calculate_magnetic_field(5.0, 0.02);
        let b = MagneticField::new(0.01, 0.02, 0.03);

        let sum = a + b;
        assert_eq!(sum.calculated_b(), 0.0);
        for i in 0..3 {
            assert_eq!(
                sum.vector().component(i).unwrap(),
                a.vector().component(i).unwrap() + b.vector().component(i).unwrap()
            );
        }
        assert_eq!(sum.to_string(), "Magnetic Field: (0.11, 0.22, 0.33)");
    }
}
