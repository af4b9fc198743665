use super::traits::ReportSink;
use crate::core::models::profile::{HalfLifeClass, PhysicochemicalProfile};
use crate::core::utils::numeric::round_to;
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "Length",
    "MW",
    "pI",
    "Extinction",
    "Instability",
    "Aliphatic",
    "Half-life",
];

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    length: usize,
    molecular_weight: f64,
    isoelectric_point: f64,
    extinction: f64,
    instability: f64,
    aliphatic: f64,
    half_life: HalfLifeClass,
}

impl<'a> From<&'a PhysicochemicalProfile> for CsvRow<'a> {
    fn from(p: &'a PhysicochemicalProfile) -> Self {
        Self {
            id: &p.id,
            length: p.length,
            molecular_weight: round_to(p.molecular_weight, 2),
            isoelectric_point: p.isoelectric_point,
            extinction: round_to(p.extinction_coefficient, 2),
            instability: round_to(p.instability_index, 2),
            aliphatic: round_to(p.aliphatic_index, 2),
            half_life: p.half_life,
        }
    }
}

/// Batch report: one header row, then one row per profile. Fractional fields
/// other than pI are rounded to two decimals.
pub struct CsvReport;

impl ReportSink for CsvReport {
    type Error = ReportError;

    fn write_to(
        profiles: &[PhysicochemicalProfile],
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;
        for profile in profiles {
            csv_writer.serialize(CsvRow::from(profile))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Single-record report: one labeled line per property.
pub struct TextReport;

impl ReportSink for TextReport {
    type Error = ReportError;

    fn write_to(
        profiles: &[PhysicochemicalProfile],
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        for (i, p) in profiles.iter().enumerate() {
            if i > 0 {
                writeln!(writer)?;
            }
            writeln!(writer, "Sequence: {}", p.sequence)?;
            writeln!(writer, "Molecular weight: {:.2} Da", p.molecular_weight)?;
            writeln!(writer, "Theoretical pI: {}", p.isoelectric_point)?;
            writeln!(
                writer,
                "Extinction coefficient (reduced): {}",
                p.extinction_coefficient
            )?;
            writeln!(writer, "Instability index: {:.2}", p.instability_index)?;
            writeln!(writer, "Aliphatic index: {:.2}", p.aliphatic_index)?;
            writeln!(writer, "Estimated half-life: {}", p.half_life)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample_profile(id: &str) -> PhysicochemicalProfile {
        PhysicochemicalProfile {
            id: id.to_string(),
            sequence: "AC".to_string(),
            length: 2,
            molecular_weight: 192.23612,
            isoelectric_point: 5.69,
            extinction_coefficient: 0.650233,
            instability_index: 224.7,
            aliphatic_index: 50.0,
            half_life: HalfLifeClass::OverThirtyHours,
        }
    }

    #[test]
    fn csv_report_writes_header_and_rounded_rows() {
        let mut out = Vec::new();
        CsvReport::write_to(&[sample_profile("p1")], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "ID,Length,MW,pI,Extinction,Instability,Aliphatic,Half-life"
        );
        assert_eq!(lines[1], "p1,2,192.24,5.69,0.65,224.7,50.0,>30 hours");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn csv_report_writes_header_even_without_rows() {
        let mut out = Vec::new();
        CsvReport::write_to(&[], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.trim_end(),
            "ID,Length,MW,pI,Extinction,Instability,Aliphatic,Half-life"
        );
    }

    #[test]
    fn csv_report_quotes_identifiers_with_commas() {
        let mut out = Vec::new();
        CsvReport::write_to(&[sample_profile("a,b")], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("\"a,b\",2,"));
    }

    #[test]
    fn csv_report_write_to_path_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out_protparam.csv");
        CsvReport::write_to_path(&[sample_profile("x"), sample_profile("y")], &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn text_report_writes_one_line_per_property() {
        let mut out = Vec::new();
        TextReport::write_to(&[sample_profile("p1")], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "\
Sequence: AC
Molecular weight: 192.24 Da
Theoretical pI: 5.69
Extinction coefficient (reduced): 0.650233
Instability index: 224.70
Aliphatic index: 50.00
Estimated half-life: >30 hours
";
        assert_eq!(text, expected);
    }

    #[test]
    fn text_report_separates_multiple_profiles_with_blank_line() {
        let mut out = Vec::new();
        TextReport::write_to(&[sample_profile("a"), sample_profile("b")], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Sequence: AC").count(), 2);
        assert!(text.contains("\n\nSequence: AC"));
    }
}
