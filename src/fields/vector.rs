use std::fmt;
use std::io::{self, Write};
use std::ops::Add;

use crate::errors::EmFieldsError;
use crate::math::{format_general, R3, Scalar, DISPLAY_PRECISION};

/// Number of components carried by every field value.
pub const COMPONENTS: usize = 3;

/// Three real components shared by every field type.
///
/// The components live inline, so copies are independent values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldVector(R3);

impl FieldVector {
    /// Constructs a vector from its three components.
    #[must_use]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self(R3::new(x, y, z))
    }

    /// The zero vector (0, 0, 0).
    #[must_use]
    pub fn zeros() -> Self {
        Self(R3::zeros())
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EmFieldsError::OutOfRange`] when `index` is not 0, 1 or 2.
    pub fn component(&self, index: usize) -> Result<Scalar, EmFieldsError> {
        self.0
            .get(index)
            .copied()
            .ok_or(EmFieldsError::OutOfRange {
                index,
                len: COMPONENTS,
            })
    }

    /// Overwrites the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EmFieldsError::OutOfRange`] when `index` is not 0, 1 or 2.
    pub fn set_component(&mut self, index: usize, value: Scalar) -> Result<(), EmFieldsError> {
        let slot = self.0.get_mut(index).ok_or(EmFieldsError::OutOfRange {
            index,
            len: COMPONENTS,
        })?;
        *slot = value;
        Ok(())
    }

    /// Components as a plain array `[x, y, z]`.
    #[must_use]
    pub fn as_array(&self) -> [Scalar; COMPONENTS] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Borrows the underlying `nalgebra` vector.
    #[must_use]
    pub const fn as_r3(&self) -> &R3 {
        &self.0
    }
}

impl From<R3> for FieldVector {
    fn from(vector: R3) -> Self {
        Self(vector)
    }
}

impl From<[Scalar; COMPONENTS]> for FieldVector {
    fn from([x, y, z]: [Scalar; COMPONENTS]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for FieldVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// Prints `(x, y, z)` with [`DISPLAY_PRECISION`] significant digits unless the
/// formatter carries its own precision (`{:.3}`).
impl fmt::Display for FieldVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
        let [x, y, z] = self.as_array();
        write!(
            f,
            "({}, {}, {})",
            format_general(x, precision),
            format_general(y, precision),
            format_general(z, precision)
        )
    }
}

/// Behaviour common to every field type: access to its raw components.
pub trait Field {
    /// The raw three-component vector.
    fn vector(&self) -> &FieldVector;

    /// Human-readable listing of the raw components with `precision` significant digits.
    fn magnitude_report_with(&self, precision: usize) -> String {
        format!("Field components: {:.precision$}", self.vector())
    }

    /// [`Field::magnitude_report_with`] at [`DISPLAY_PRECISION`].
    fn magnitude_report(&self) -> String {
        self.magnitude_report_with(DISPLAY_PRECISION)
    }

    /// Writes [`Field::magnitude_report_with`] followed by a newline.
    fn write_magnitude<W: Write>(&self, mut writer: W, precision: usize) -> io::Result<()>
    where
        Self: Sized,
    {
        writeln!(writer, "{}", self.magnitude_report_with(precision))
    }
}
