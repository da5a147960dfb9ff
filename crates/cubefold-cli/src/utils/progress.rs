use cubefold::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Terminal progress bar driven by engine progress events.
///
/// A single run shows its Monte Carlo steps; a batch shows completed runs.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr())
            .with_style(Self::bar_style());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::RunStart { total_steps } => {
                    Self::restart(&pb_guard, total_steps, "Folding");
                }
                Progress::BatchStart { total_runs } => {
                    Self::restart(&pb_guard, total_runs, "Runs");
                }
                Progress::StepCompleted | Progress::RunCompleted => {
                    pb_guard.inc(1);
                }
                Progress::RunFinish | Progress::BatchFinish => {
                    let length = pb_guard.length().unwrap_or(0);
                    if pb_guard.position() < length {
                        pb_guard.set_position(length);
                    }
                    pb_guard.finish();
                }
                Progress::Message(msg) => {
                    if pb_guard.is_finished() {
                        pb_guard.set_message(msg);
                    } else {
                        pb_guard.println(format!("  {}", msg));
                    }
                }
            }
        })
    }

    fn restart(pb: &ProgressBar, length: u64, label: &'static str) {
        pb.reset();
        pb.set_length(length);
        pb.set_position(0);
        pb.set_style(Self::bar_style());
        pb.set_message(label);
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<10} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key("eta", |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            })
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn run_events_drive_the_bar() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::RunStart { total_steps: 100 });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(100));
            assert_eq!(pb.position(), 0);
            assert_eq!(pb.message(), "Folding");
            assert!(!pb.is_finished());
        }

        callback(Progress::StepCompleted);
        callback(Progress::StepCompleted);
        assert_eq!(handler.pb.lock().unwrap().position(), 2);

        callback(Progress::RunFinish);
        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 100);
    }

    #[test]
    fn batch_events_count_runs() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::BatchStart { total_runs: 3 });
        callback(Progress::RunCompleted);
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Runs");
            assert_eq!(pb.position(), 1);
        }
        callback(Progress::BatchFinish);
        assert_eq!(handler.pb.lock().unwrap().position(), 3);
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::BatchStart { total_runs: 2 });
            callback(Progress::RunCompleted);
            callback(Progress::BatchFinish);
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.position(), 2);
    }
}
