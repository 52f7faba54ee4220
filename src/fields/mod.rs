//! Field value types and the point-source formulas that fill them in.

mod electric;
mod magnetic;
mod vector;

pub use electric::{coulomb_field_magnitude, ElectricField};
pub use magnetic::{ampere_field_magnitude, MagneticField};
pub use vector::{Field, FieldVector, COMPONENTS};
