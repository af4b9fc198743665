use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use protparam::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Draws batch profiling as one `indicatif` bar on stderr. The message slot
/// shows the identifier of the record that finished last.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Tracks counts without drawing, for `--quiet` runs.
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_style(Self::bar_style());
        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::BatchStart { records } => {
                    pb.reset();
                    pb.set_length(records);
                    pb.set_message("starting");
                }
                Progress::RecordProfiled { id } => {
                    pb.inc(1);
                    pb.set_message(id);
                }
                Progress::RecordFailed { id, reason } => {
                    pb.inc(1);
                    pb.println(format!("  ✗ {}: {}", id, reason));
                }
                Progress::BatchFinish {
                    profiled,
                    failed,
                    skipped,
                } => {
                    let mut summary = format!("✓ {} profiled, {} failed", profiled, failed);
                    if skipped > 0 {
                        summary.push_str(&format!(", {} skipped", skipped));
                    }
                    pb.finish_with_message(summary);
                }
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("Profiling [{bar:40.cyan/blue}] {pos}/{len} ({rate}) {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "rate",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.0} seq/s", state.per_sec());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
