use indicatif::{ProgressBar, ProgressStyle};
use spam_classifier::{InteractionState, TransitionCallback};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Spinner shown while a classification request is in flight
pub struct LoadingIndicator {
    message: String,
    active: Mutex<Option<(ProgressBar, Instant)>>,
    last_elapsed: Mutex<Option<Duration>>,
}

impl LoadingIndicator {
    /// Create a new indicator with the given spinner message
    pub fn new(message: &str) -> Arc<Self> {
        Arc::new(Self {
            message: message.to_string(),
            active: Mutex::new(None),
            last_elapsed: Mutex::new(None),
        })
    }

    /// Transition callback that starts the spinner on `Loading` and stops it otherwise
    pub fn observe(self: &Arc<Self>) -> TransitionCallback {
        let indicator = Arc::clone(self);
        Box::new(move |state: &InteractionState| {
            if state.is_loading() {
                indicator.start();
            } else {
                indicator.stop();
            }
        })
    }

    pub fn start(&self) {
        let mut active = self.active.lock().unwrap_or_else(|p| p.into_inner());
        if active.is_some() {
            return;
        }

        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(self.message.clone());
        bar.enable_steady_tick(Duration::from_millis(100));

        *active = Some((bar, Instant::now()));
    }

    pub fn stop(&self) {
        let finished = self
            .active
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .take();

        if let Some((bar, started)) = finished {
            bar.finish_and_clear();
            *self.last_elapsed.lock().unwrap_or_else(|p| p.into_inner()) = Some(started.elapsed());
        }
    }

    #[cfg(test)]
    fn is_active(&self) -> bool {
        self.active
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .is_some()
    }

    /// How long the most recent request took, formatted for display
    pub fn last_duration(&self) -> Option<String> {
        let elapsed = *self.last_elapsed.lock().unwrap_or_else(|p| p.into_inner());
        elapsed.map(Self::format_duration)
    }

    /// Format a duration in a human-readable way
    fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else if duration.as_secs() < 60 {
            format!("{:.1} seconds", duration.as_secs_f64())
        } else {
            format!(
                "{} minutes {} seconds",
                duration.as_secs() / 60,
                duration.as_secs() % 60
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spam_classifier::Prediction;

    #[test]
    fn test_follows_loading_transitions() {
        let indicator = LoadingIndicator::new("Analyzing email...");
        let callback = indicator.observe();

        callback(&InteractionState::Loading);
        assert!(indicator.is_active());

        callback(&InteractionState::Success(Prediction::spam("x")));
        assert!(!indicator.is_active());
        assert!(indicator.last_duration().is_some());
    }

    #[test]
    fn test_stop_without_start_is_harmless() {
        let indicator = LoadingIndicator::new("Analyzing email...");
        indicator.stop();
        assert!(indicator.last_duration().is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(
            LoadingIndicator::format_duration(Duration::from_millis(250)),
            "250 ms"
        );
        assert_eq!(
            LoadingIndicator::format_duration(Duration::from_millis(2500)),
            "2.5 seconds"
        );
        assert_eq!(
            LoadingIndicator::format_duration(Duration::from_secs(125)),
            "2 minutes 5 seconds"
        );
    }
}
