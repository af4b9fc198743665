/// Events emitted while a batch of sequences is being profiled.
///
/// `RecordProfiled` and `RecordFailed` are sent from worker threads as each
/// record completes, so their relative order is not the input order.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// Sent once, after duplicate identifiers have been collapsed.
    BatchStart { records: u64 },
    RecordProfiled { id: String },
    RecordFailed { id: String, reason: String },
    BatchFinish {
        profiled: usize,
        failed: usize,
        skipped: usize,
    },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn report_without_callback_is_a_no_op() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::BatchStart { records: 1 });
    }

    #[test]
    fn report_forwards_events_to_callback() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|p| {
            events.lock().unwrap().push(p);
        }));
        reporter.report(Progress::BatchStart { records: 1 });
        reporter.report(Progress::RecordProfiled {
            id: "p1".to_string(),
        });
        reporter.report(Progress::BatchFinish {
            profiled: 1,
            failed: 0,
            skipped: 0,
        });
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert_eq!(
            events,
            vec![
                Progress::BatchStart { records: 1 },
                Progress::RecordProfiled {
                    id: "p1".to_string()
                },
                Progress::BatchFinish {
                    profiled: 1,
                    failed: 0,
                    skipped: 0
                },
            ]
        );
    }
}
