use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use noetbl::engine::progress::{Progress, ProgressCallback};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Drives an indicatif bar from library progress events. A known total gets a
/// bar; a total too large for `u64` gets a spinner with a running count.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target).with_message("Writing");
        pb.finish_and_clear();
        Self { pb }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::WriteStart { total } => {
                pb.reset();
                pb.set_position(0);
                match total {
                    Some(total) => {
                        pb.set_length(total);
                        pb.set_style(Self::bar_style());
                    }
                    None => {
                        pb.unset_length();
                        pb.set_style(Self::spinner_style());
                        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    }
                }
                pb.set_message("Writing");
            }
            Progress::FileWritten { .. } => {
                pb.inc(1);
            }
            Progress::WriteFinish { written } => {
                pb.disable_steady_tick();
                pb.set_position(written);
                pb.finish_with_message("✓ Done");
            }
            Progress::Message(msg) => {
                pb.suspend(|| println!("{}", msg));
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg} {pos} files")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<10} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
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
