//! Progress bar utilities for pipeline steps.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar over the pipeline's steps.
pub fn create_step_progress(total_steps: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_steps == 0 {
        return None;
    }

    let pb = ProgressBar::new(total_steps as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} steps - {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Show the step currently running.
pub fn set_step(pb: Option<&ProgressBar>, label: &str) {
    if let Some(pb) = pb {
        pb.set_message(label.to_string());
    }
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

/// Increment a progress bar.
pub fn inc_progress(pb: Option<&ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_progress_is_none() {
        assert!(create_step_progress(5, false).is_none());
        assert!(create_step_progress(0, true).is_none());
    }

    #[test]
    fn test_progress_counts_steps() {
        let pb = create_step_progress(3, true);
        inc_progress(pb.as_ref());
        set_step(pb.as_ref(), "observed scan");
        assert_eq!(pb.as_ref().map(ProgressBar::position), Some(1));
        finish_progress(pb, "Complete");
    }
}
