//! Debouncing of editor bursts.
//!
//! Editors emit a change per keystroke. [`Debouncer`] coalesces a burst of
//! events and releases a single combined event once input has been quiet for
//! the configured interval. The clock is passed in by the caller, so the
//! debouncer never sleeps or spawns anything itself.

use std::time::{Duration, Instant};

use crate::config::AdvisorConfig;
use crate::event::AnalysisEvent;

/// Coalesces events until input goes quiet.
///
/// # Example
///
/// ```rust
/// use std::time::{Duration, Instant};
/// use redactor_core::{Debouncer, EditorEvent};
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(500));
/// let start = Instant::now();
///
/// debouncer.push(EditorEvent::title("Draft"), start);
/// debouncer.push(EditorEvent::title("Draft title"), start + Duration::from_millis(100));
///
/// assert!(debouncer.poll(start + Duration::from_millis(400)).is_none());
/// let ready = debouncer.poll(start + Duration::from_millis(600)).unwrap();
/// assert_eq!(ready.title_text.as_deref(), Some("Draft title"));
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<AnalysisEvent>,
    last_input: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, pending: None, last_input: None }
    }

    /// Uses the configured `debounce_ms` as the quiet interval.
    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(Duration::from_millis(config.debounce_ms))
    }

    pub fn quiet_interval(&self) -> Duration {
        self.quiet
    }

    /// Records an event received at `now`, folding it into any pending one.
    pub fn push(&mut self, event: impl Into<AnalysisEvent>, now: Instant) {
        let event = event.into();
        self.pending = Some(match self.pending.take() {
            Some(pending) => pending.coalesce(event),
            None => event,
        });
        self.last_input = Some(now);
    }

    /// Releases the pending event once the quiet interval has elapsed since
    /// the last push.
    pub fn poll(&mut self, now: Instant) -> Option<AnalysisEvent> {
        let deadline = self.deadline()?;
        if now < deadline {
            return None;
        }
        self.flush()
    }

    /// Releases the pending event immediately.
    pub fn flush(&mut self) -> Option<AnalysisEvent> {
        self.last_input = None;
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending event becomes ready, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        self.last_input.map(|at| at + self.quiet)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::from_config(&AdvisorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EditorEvent;
    use crate::scoring::{RobotsDirective, Status};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_nothing_pending() {
        let mut debouncer = Debouncer::new(ms(100));
        assert!(!debouncer.is_pending());
        assert!(debouncer.deadline().is_none());
        assert!(debouncer.poll(Instant::now()).is_none());
        assert!(debouncer.flush().is_none());
    }

    #[test]
    fn test_each_push_extends_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(100));

        debouncer.push(EditorEvent::title("a"), start);
        assert_eq!(debouncer.deadline(), Some(start + ms(100)));

        debouncer.push(EditorEvent::title("ab"), start + ms(80));
        assert_eq!(debouncer.deadline(), Some(start + ms(180)));
        assert!(debouncer.poll(start + ms(150)).is_none());
        assert!(debouncer.is_pending());

        let event = debouncer.poll(start + ms(180)).unwrap();
        assert_eq!(event.title_text.as_deref(), Some("ab"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_burst_coalesces_fields() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(50));

        debouncer.push(EditorEvent::body("<p>Body</p>"), start);
        debouncer.push(EditorEvent::robots(RobotsDirective::Index, Status::Good), start + ms(10));
        debouncer.push(EditorEvent::keyword("body"), start + ms(20));

        let event = debouncer.flush().unwrap();
        assert!(event.raw_html.is_some());
        assert_eq!(event.robots_index_directive, Some(Status::Good));
        assert_eq!(event.custom_keyword.as_deref(), Some("body"));
    }

    #[test]
    fn test_later_body_drops_earlier_word_count() {
        use crate::aggregator::ReportAggregator;

        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(50));
        debouncer.push(
            EditorEvent::BodyContentChanged {
                raw_html: "<p>counted elsewhere</p>".to_string(),
                plain_text: "counted elsewhere".to_string(),
                word_count: Some(350),
            },
            start,
        );
        debouncer.push(EditorEvent::body("<p>three little words</p>"), start + ms(10));

        let event = debouncer.flush().unwrap();
        assert_eq!(event.word_count, None);

        let mut aggregator = ReportAggregator::new(AdvisorConfig::default());
        let report = aggregator.handle(event);
        assert_eq!(report.content.as_ref().unwrap().length, 3);
    }

    #[test]
    fn test_from_config() {
        let config = AdvisorConfig::builder().debounce_ms(250).build();
        assert_eq!(Debouncer::from_config(&config).quiet_interval(), ms(250));
        assert_eq!(Debouncer::default().quiet_interval(), ms(1000));
    }
}
