use crate::core::io::traits::SequenceRecord;
use crate::core::models::profile::PhysicochemicalProfile;
use crate::engine::error::EngineError;
use crate::engine::profiler::PropertyEngine;
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordFailure {
    pub id: String,
    pub error: EngineError,
}

/// Outcome of a batch run. Every list keeps input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    pub profiles: Vec<PhysicochemicalProfile>,
    pub failures: Vec<RecordFailure>,
    /// Identifiers of records never profiled because the batch was cancelled.
    pub skipped: Vec<String>,
}

impl BatchResult {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.skipped.is_empty()
    }

    pub fn total(&self) -> usize {
        self.profiles.len() + self.failures.len() + self.skipped.len()
    }
}

enum RecordOutcome {
    Profiled(PhysicochemicalProfile),
    Failed(EngineError),
    Skipped,
}

/// Profiles every record and collects per-record outcomes.
///
/// A failing record never aborts the batch. Records sharing an identifier are
/// collapsed: the last one wins and takes the position of the first. Once
/// `cancel` is set, records not yet started are reported as skipped.
#[instrument(skip_all, name = "batch_workflow", fields(records = records.len()))]
pub fn run(
    records: &[SequenceRecord],
    engine: &PropertyEngine,
    reporter: &ProgressReporter,
    cancel: Option<&AtomicBool>,
) -> BatchResult {
    let unique = dedupe_by_id(records);
    reporter.report(Progress::BatchStart {
        records: unique.len() as u64,
    });

    let is_cancelled = || cancel.is_some_and(|flag| flag.load(Ordering::Relaxed));

    #[cfg(not(feature = "parallel"))]
    let iterator = unique.iter();

    #[cfg(feature = "parallel")]
    let iterator = unique.par_iter();

    let outcomes: Vec<RecordOutcome> = iterator
        .map(|record| {
            if is_cancelled() {
                return RecordOutcome::Skipped;
            }
            match engine.profile_raw(&record.id, &record.sequence) {
                Ok(profile) => {
                    reporter.report(Progress::RecordProfiled {
                        id: record.id.clone(),
                    });
                    RecordOutcome::Profiled(profile)
                }
                Err(error) => {
                    reporter.report(Progress::RecordFailed {
                        id: record.id.clone(),
                        reason: error.to_string(),
                    });
                    RecordOutcome::Failed(error)
                }
            }
        })
        .collect();

    let mut result = BatchResult::default();
    for (record, outcome) in unique.iter().zip(outcomes) {
        match outcome {
            RecordOutcome::Profiled(profile) => result.profiles.push(profile),
            RecordOutcome::Failed(error) => {
                warn!(id = %record.id, kind = error.kind(), "Failed to profile record: {}", error);
                result.failures.push(RecordFailure {
                    id: record.id.clone(),
                    error,
                });
            }
            RecordOutcome::Skipped => result.skipped.push(record.id.clone()),
        }
    }

    if !result.skipped.is_empty() {
        warn!(
            skipped = result.skipped.len(),
            "Batch cancelled before every record was profiled."
        );
    }
    info!(
        profiled = result.profiles.len(),
        failed = result.failures.len(),
        skipped = result.skipped.len(),
        "Batch complete."
    );
    reporter.report(Progress::BatchFinish {
        profiled: result.profiles.len(),
        failed: result.failures.len(),
        skipped: result.skipped.len(),
    });
    result
}

fn dedupe_by_id(records: &[SequenceRecord]) -> Vec<&SequenceRecord> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut unique: Vec<&SequenceRecord> = Vec::with_capacity(records.len());
    for record in records {
        match positions.get(record.id.as_str()) {
            Some(&index) => {
                warn!(id = %record.id, "Duplicate record identifier; keeping the later record.");
                unique[index] = record;
            }
            None => {
                positions.insert(record.id.as_str(), unique.len());
                unique.push(record);
            }
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::report::CsvReport;
    use crate::core::io::traits::ReportSink;
    use crate::core::tables::ReferenceTables;
    use crate::engine::config::EngineConfig;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn engine() -> PropertyEngine<'static> {
        PropertyEngine::new(ReferenceTables::standard(), EngineConfig::default())
    }

    fn records(pairs: &[(&str, &str)]) -> Vec<SequenceRecord> {
        pairs
            .iter()
            .map(|(id, seq)| SequenceRecord::new(*id, *seq))
            .collect()
    }

    #[test]
    fn run_preserves_input_order() {
        let input = records(&[
            ("c", "MKWVTF"),
            ("a", "AC"),
            ("b", "GGGDE"),
            ("d", "LLIV"),
        ]);
        let result = run(&input, &engine(), &ProgressReporter::new(), None);
        let ids: Vec<_> = result.profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b", "d"]);
        assert!(result.is_complete());
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn run_records_failures_and_continues() {
        let poly_arg = "R".repeat(1000);
        let input = records(&[
            ("good1", "AC"),
            ("bad", "ACXB"),
            ("empty", ""),
            ("stuck", poly_arg.as_str()),
            ("good2", "GG"),
        ]);
        let result = run(&input, &engine(), &ProgressReporter::new(), None);

        let ids: Vec<_> = result.profiles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["good1", "good2"]);

        let failures: Vec<_> = result
            .failures
            .iter()
            .map(|f| (f.id.as_str(), f.error.kind()))
            .collect();
        assert_eq!(
            failures,
            vec![
                ("bad", "unknown-residue"),
                ("empty", "empty-sequence"),
                ("stuck", "non-convergence"),
            ]
        );
        assert!(!result.is_complete());
    }

    #[test]
    fn run_keeps_last_duplicate_at_first_position() {
        let input = records(&[("x", "AC"), ("y", "GG"), ("x", "WWW")]);
        let result = run(&input, &engine(), &ProgressReporter::new(), None);
        assert_eq!(result.profiles.len(), 2);
        assert_eq!(result.profiles[0].id, "x");
        assert_eq!(result.profiles[0].sequence, "WWW");
        assert_eq!(result.profiles[1].id, "y");
    }

    #[test]
    fn run_skips_everything_when_already_cancelled() {
        let input = records(&[("a", "AC"), ("b", "GG")]);
        let cancel = AtomicBool::new(true);
        let result = run(&input, &engine(), &ProgressReporter::new(), Some(&cancel));
        assert!(result.profiles.is_empty());
        assert!(result.failures.is_empty());
        assert_eq!(result.skipped, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn run_is_unaffected_by_unset_cancel_flag() {
        let input = records(&[("a", "AC"), ("b", "GG")]);
        let cancel = AtomicBool::new(false);
        let result = run(&input, &engine(), &ProgressReporter::new(), Some(&cancel));
        assert_eq!(result.profiles.len(), 2);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn run_reports_progress_events() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            events.lock().unwrap().push(p);
        }));
        let input = records(&[("a", "AC"), ("bad", "AXC"), ("c", "MK")]);
        run(&input, &engine(), &reporter, None);
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(events.first(), Some(&Progress::BatchStart { records: 3 }));
        assert_eq!(
            events.last(),
            Some(&Progress::BatchFinish {
                profiled: 2,
                failed: 1,
                skipped: 0
            })
        );
        let profiled: HashSet<&str> = events
            .iter()
            .filter_map(|e| match e {
                Progress::RecordProfiled { id } => Some(id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(profiled, HashSet::from(["a", "c"]));
        assert!(events.iter().any(|e| matches!(
            e,
            Progress::RecordFailed { id, .. } if id == "bad"
        )));
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn csv_identifiers_round_trip_input_headers() {
        let input: Vec<SequenceRecord> = (0..50)
            .map(|i| {
                let residues = ["MKT", "ACDE", "WYC", "GGLIV", "HRK"][i % 5];
                SequenceRecord::new(format!("seq{i}"), residues.repeat(i % 7 + 1))
            })
            .collect();
        let result = run(&input, &engine(), &ProgressReporter::new(), None);
        assert!(result.failures.is_empty());

        let mut out = Vec::new();
        CsvReport::write_to(&result.profiles, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let written: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();

        let expected: HashSet<String> = input.iter().map(|r| r.id.clone()).collect();
        let actual: HashSet<String> = written.iter().map(|s| s.to_string()).collect();
        assert_eq!(written.len(), input.len());
        assert_eq!(actual, expected);
    }
}
