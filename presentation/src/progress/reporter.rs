//! Progress reporting for provisioning runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::{Mutex, MutexGuard};
use venue_application::{ProvisionProgressNotifier, ProvisionStep};

/// Reports progress during provisioning with fancy progress bars
///
/// Paper group workers report concurrently; the current bar sits behind
/// a mutex.
pub struct ProgressReporter {
    multi: MultiProgress,
    step_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            step_bar: Mutex::new(None),
        }
    }

    fn step_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn bar(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.step_bar
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProvisionProgressNotifier for ProgressReporter {
    fn on_step_start(&self, step: ProvisionStep, total_items: usize) {
        let pb = self.multi.add(ProgressBar::new(total_items as u64));
        pb.set_style(Self::step_style());
        pb.set_prefix(step.display_name());
        pb.set_message("Starting...");

        *self.bar() = Some(pb);
    }

    fn on_item_complete(&self, _step: ProvisionStep, item: &str, success: bool) {
        if let Some(pb) = self.bar().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), item)
            } else {
                format!("{} {}", "x".red(), item)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_step_complete(&self, step: ProvisionStep) {
        if let Some(pb) = self.bar().take() {
            pb.finish_with_message(format!("{} complete!", step.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Used when stderr is not a terminal. Lines go to stderr so JSON output
/// on stdout stays parseable.
pub struct SimpleProgress;

impl ProvisionProgressNotifier for SimpleProgress {
    fn on_step_start(&self, step: ProvisionStep, total_items: usize) {
        eprintln!(
            "{} {} ({} items)",
            "->".cyan(),
            step.display_name().bold(),
            total_items
        );
    }

    fn on_item_complete(&self, _step: ProvisionStep, item: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), item);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), item);
        }
    }

    fn on_step_complete(&self, _step: ProvisionStep) {
        eprintln!();
    }
}
