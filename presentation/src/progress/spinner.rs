//! Loading spinner for gateway calls

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Spinner shown while a gateway request is pending
///
/// Disabled spinners draw nothing, so callers can wrap every request the
/// same way regardless of `--quiet`.
pub struct LoadingSpinner {
    enabled: bool,
}

impl LoadingSpinner {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Await `future` with a spinner labelled `message`.
    pub async fn run<F: Future>(&self, message: &str, future: F) -> F::Output {
        if !self.enabled {
            return future.await;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));

        let output = future.await;
        pb.finish_and_clear();
        output
    }
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_spinner_passes_output_through() {
        let spinner = LoadingSpinner::new(false);
        let value = spinner.run("Loading", async { 42 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_enabled_spinner_passes_output_through() {
        let spinner = LoadingSpinner::new(true);
        let value = spinner.run("Loading", async { "done" }).await;
        assert_eq!(value, "done");
    }
}
