//! Physical constants used by the point-source formulas.
//!
//! These are the rounded values the field calculations have always used, not the
//! full CODATA figures: ε₀ is truncated to four significant figures and μ₀ keeps its
//! pre-2019 exact definition of 4π × 10⁻⁷ H/m.

use std::f64::consts::PI;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.854e-12;
/// Vacuum permeability μ₀ in henries per meter (H/m), 4π × 10⁻⁷.
pub const VACUUM_PERMEABILITY: f64 = 4.0 * PI * 1.0e-7;
