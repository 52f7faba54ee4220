//! Convenience re-exports for field calculations.

pub use crate::constants::*;
pub use crate::demo::{run_demo, DemoConfig, DemoOutcome};
pub use crate::errors::EmFieldsError;
pub use crate::fields::{
    ampere_field_magnitude, coulomb_field_magnitude, ElectricField, Field, FieldVector,
    MagneticField, COMPONENTS,
};
pub use crate::math::{format_general, R3, Scalar, DISPLAY_PRECISION};
