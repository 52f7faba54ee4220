//! The demonstration driver: builds sample fields, runs both calculations and
//! writes the results as six lines of text.

use std::io::Write;

use tracing::{debug, instrument};

use crate::errors::EmFieldsError;
use crate::fields::{ElectricField, Field, FieldVector, MagneticField};
use crate::math::{Scalar, DISPLAY_PRECISION};

/// Inputs for a demonstration run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Components of the first electric field (N/C).
    pub electric: FieldVector,
    /// Components of the first magnetic field (T).
    pub magnetic: FieldVector,
    /// Point charge in coulombs.
    pub charge_c: Scalar,
    /// Distance from the point charge in meters.
    pub charge_distance_m: Scalar,
    /// Wire current in amperes.
    pub current_a: Scalar,
    /// Distance from the wire in meters.
    pub wire_distance_m: Scalar,
    /// Electric field added to the first one.
    pub electric_addend: FieldVector,
    /// Magnetic field added to the first one.
    pub magnetic_addend: FieldVector,
    /// Significant digits for every printed number.
    pub precision: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            electric: FieldVector::new(1.0e3, 2.0e3, 3.0e3),
            magnetic: FieldVector::new(0.1, 0.2, 0.3),
            charge_c: 1.0e-6,
            charge_distance_m: 0.05,
            current_a: 5.0,
            wire_distance_m: 0.02,
            electric_addend: FieldVector::new(100.0, 200.0, 300.0),
            magnetic_addend: FieldVector::new(0.01, 0.02, 0.03),
            precision: DISPLAY_PRECISION,
        }
    }
}

/// Fields produced by [`run_demo`].
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    /// First electric field with its calculated magnitude.
    pub electric: ElectricField,
    /// First magnetic field with its calculated magnitude.
    pub magnetic: MagneticField,
    /// Sum of the electric fields.
    pub electric_sum: ElectricField,
    /// Sum of the magnetic fields.
    pub magnetic_sum: MagneticField,
}

/// Runs the demonstration and writes its report to `writer`.
///
/// Lines, in order: the raw components of both fields, the two calculated
/// magnitudes, then the two summed fields.
///
/// # Errors
///
/// Returns [`EmFieldsError::Io`] if writing to `writer` fails.
#[instrument(level = "debug", skip(writer))]
pub fn run_demo<W: Write>(config: &DemoConfig, mut writer: W) -> Result<DemoOutcome, EmFieldsError> {
    let mut electric = ElectricField::from_vector(config.electric);
    let mut magnetic = MagneticField::from_vector(config.magnetic);

    let precision = config.precision;
    electric.write_magnitude(&mut writer, precision)?;
    magnetic.write_magnitude(&mut writer, precision)?;

    electric.calculate_electric_field(config.charge_c, config.charge_distance_m);
    magnetic.calculate_magnetic_field(config.current_a, config.wire_distance_m);
    debug!(
        calculated_e = electric.calculated_e(),
        calculated_b = magnetic.calculated_b(),
        "calculated field magnitudes"
    );

    electric.write_calculated_e(&mut writer, precision)?;
    magnetic.write_calculated_b(&mut writer, precision)?;

    let electric_sum = electric + ElectricField::from_vector(config.electric_addend);
    let magnetic_sum = magnetic + MagneticField::from_vector(config.magnetic_addend);

    writeln!(writer, "{electric_sum:.precision$}")?;
    writeln!(writer, "{magnetic_sum:.precision$}")?;
    writer.flush()?;

    Ok(DemoOutcome {
        electric,
        magnetic,
        electric_sum,
        magnetic_sum,
    })
}

#[cfg(test)]
mod tests {
    use std::io;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_run_writes_six_lines() {
        let mut out = Vec::new();
        let outcome = run_demo(&DemoConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert_relative_eq!(outcome.electric.calculated_e(), 3.595_096_975e6, max_relative = 1.0e-9);
        assert_eq!(outcome.electric_sum.calculated_e(), 0.0);
        assert_eq!(outcome.magnetic_sum.calculated_b(), 0.0);
    }

    #[test]
    fn zero_distances_print_zero_magnitudes() {
        let config = DemoConfig {
            charge_distance_m: 0.0,
            wire_distance_m: 0.0,
            ..DemoConfig::default()
        };
        let mut out = Vec::new();
        run_demo(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Calculated Electric Field (E) from Gauss' Law: 0 N/C\n"));
        assert!(text.contains("Calculated Magnetic Field (B) from Ampere's Law: 0 T\n"));
    }

    #[test]
    fn precision_applies_to_every_line() {
        let config = DemoConfig {
            precision: 3,
            ..DemoConfig::default()
        };
        let mut out = Vec::new();
        run_demo(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Field components: (1e+03, 2e+03, 3e+03)",
                "Field components: (0.1, 0.2, 0.3)",
                "Calculated Electric Field (E) from Gauss' Law: 3.6e+06 N/C",
                "Calculated Magnetic Field (B) from Ampere's Law: 3.17e+07 T",
                "Electric Field: (1.1e+03, 2.2e+03, 3.3e+03)",
                "Magnetic Field: (0.11, 0.22, 0.33)",
            ]
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_surface_as_io_errors() {
        let err = run_demo(&DemoConfig::default(), BrokenPipe).unwrap_err();
        assert!(matches!(err, EmFieldsError::Io(_)));
    }
}
