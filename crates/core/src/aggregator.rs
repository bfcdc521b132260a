//! Report aggregation.
//!
//! Editor signals arrive independently: a title keystroke, a pasted image, a
//! changed robots setting. The aggregator folds each [`AnalysisEvent`] into
//! the cumulative [`Report`] and then emits the complete snapshot.
//!
//! Merging is split in two:
//!
//! - [`Advisor::merge`] is pure. It takes the previous report and one event
//!   and returns the next report, touching only the sections the event
//!   signals a change for (plus keyword-dependent sub-fields when the focus
//!   keyword itself changes).
//! - [`ReportAggregator`] owns the current report, applies `merge`, and
//!   notifies every [`ReportSink`] exactly once per event, after the merge is
//!   complete.
//!
//! # Example
//!
//! ```rust
//! use redactor_core::{AdvisorConfig, EditorEvent, ReportAggregator, Status};
//!
//! let mut aggregator = ReportAggregator::new(AdvisorConfig::default());
//! aggregator.handle(EditorEvent::title("A practical guide to writing Rust parsers"));
//! let report = aggregator.handle(EditorEvent::description("Short."));
//!
//! assert_eq!(report.title.as_ref().unwrap().length_score.status, Status::Good);
//! assert_eq!(report.description.as_ref().unwrap().length_score.status, Status::Warning);
//! ```

use std::sync::mpsc::Sender;

use crate::config::AdvisorConfig;
use crate::event::AnalysisEvent;
use crate::keywords::{self, KeywordAnalyzer};
use crate::normalize::normalize;
use crate::parse::Document;
use crate::readability::{FleschKincaid, TextStatistics, grade_analysis};
use crate::report::{
    ContentSection, CountSection, FocusKeyword, HeadingsSection, KeywordSource, MetaSection, RawStatistics, Report,
    RobotSection, TextStatisticsSection,
};
use crate::scoring::{self, RobotsDirective};

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// The analysis capabilities a merge needs: configuration, readability
/// statistics and keyword ranking.
pub struct Advisor {
    config: AdvisorConfig,
    stats: Box<dyn TextStatistics>,
    keywords: KeywordAnalyzer,
}

impl Advisor {
    /// Creates an advisor using the built-in Flesch-Kincaid statistics.
    pub fn new(config: AdvisorConfig) -> Self {
        Self::with_statistics(config, Box::new(FleschKincaid))
    }

    /// Creates an advisor with an injected statistics capability.
    pub fn with_statistics(config: AdvisorConfig, stats: Box<dyn TextStatistics>) -> Self {
        let keywords = KeywordAnalyzer::from_config(&config);
        Self { config, stats, keywords }
    }

    /// Folds one event into `prev`, returning the next report.
    ///
    /// Sections the event does not signal a change for are carried over
    /// unchanged. Body text shorter than the configured word threshold
    /// updates the content section but leaves text statistics at their
    /// previous value.
    pub fn merge(&self, prev: &Report, event: &AnalysisEvent) -> Report {
        let mut next = prev.clone();
        let mut changed: Vec<&'static str> = Vec::new();

        if let Some(keyword) = &event.custom_keyword {
            let keyword = normalize(keyword.trim());
            next.inputs.custom_keyword = if keyword.is_empty() { None } else { Some(keyword) };
        }

        if event.touches_title() {
            self.merge_title(&mut next, event);
            changed.push("title");
        }
        if event.touches_description() {
            self.merge_description(&mut next, event);
            changed.push("description");
        }
        if let Some(html) = &event.raw_html {
            self.merge_markup(&mut next, html);
            changed.extend(["rawStatistics", "image", "headings"]);
        }
        if event.touches_body() && self.merge_body(&mut next, event) {
            changed.push("textStatistics");
        }
        if event.touches_body() {
            changed.push("content");
        }
        if let Some(status) = event.robots_index_directive {
            let score = scoring::robots_score(RobotsDirective::Index, status, &self.config.messages);
            next.robot_index = Some(RobotSection { length_score: score });
            changed.push("robotIndex");
        }
        if let Some(status) = event.robots_follow_directive {
            let score = scoring::robots_score(RobotsDirective::Follow, status, &self.config.messages);
            next.robot_follow = Some(RobotSection { length_score: score });
            changed.push("robotFollow");
        }

        next.keyword = resolve_keyword(&next);
        let keyword_changed = next.keyword != prev.keyword;
        self.merge_keyword_usage(&mut next, event, keyword_changed);

        tracing::debug!(
            sections = ?changed,
            keyword = next.focus_keyword().unwrap_or("<none>"),
            keyword_changed,
            "merged analysis event"
        );
        next
    }

    fn merge_title(&self, next: &mut Report, event: &AnalysisEvent) {
        let length = event
            .title_length
            .or_else(|| event.title_text.as_ref().map(|t| t.chars().count()))
            .unwrap_or(0);
        next.inputs.title_text = field_text(event.title_text.as_deref(), length);

        let messages = &self.config.messages;
        let length_score = scoring::title_length_score(length, messages);
        let stop_words = next
            .inputs
            .title_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| self.keywords.stop_word_count(text));
        let stop_word_score = scoring::title_stop_word_score(stop_words, messages);

        match next.title.as_mut() {
            Some(section) => {
                section.length = length;
                section.length_score = length_score;
                section.stop_words = stop_words;
                section.stop_word_score = stop_word_score;
            }
            None => {
                next.title = Some(MetaSection {
                    length,
                    length_score,
                    keyword_usage: None,
                    keyword_score: None,
                    stop_words,
                    stop_word_score,
                });
            }
        }
    }

    fn merge_description(&self, next: &mut Report, event: &AnalysisEvent) {
        let length = event
            .description_length
            .or_else(|| event.description_text.as_ref().map(|t| t.chars().count()))
            .unwrap_or(0);
        next.inputs.description_text = field_text(event.description_text.as_deref(), length);
        let length_score = scoring::description_length_score(length, &self.config.messages);

        match next.description.as_mut() {
            Some(section) => {
                section.length = length;
                section.length_score = length_score;
            }
            None => {
                next.description = Some(MetaSection {
                    length,
                    length_score,
                    keyword_usage: None,
                    keyword_score: None,
                    stop_words: None,
                    stop_word_score: None,
                });
            }
        }
    }

    fn merge_markup(&self, next: &mut Report, html: &str) {
        let doc = Document::parse(html);
        let raw = RawStatistics {
            h1_count: doc.count("h1"),
            h2_count: doc.count("h2"),
            h3_count: doc.count("h3"),
            image_count: doc.count("img"),
        };
        let messages = &self.config.messages;

        next.image = Some(CountSection { length: raw.image_count, length_score: scoring::image_score(raw.image_count, messages) });
        next.headings = Some(HeadingsSection {
            length: raw.h1_count,
            length_score: scoring::h1_score(raw.h1_count, messages),
            keyword_usage: None,
            keyword_score: None,
        });
        next.inputs.heading_texts = doc.texts(HEADING_SELECTOR).iter().map(|t| normalize(t)).collect();
        next.raw_statistics = Some(raw);
    }

    /// Returns whether text statistics were recomputed.
    fn merge_body(&self, next: &mut Report, event: &AnalysisEvent) -> bool {
        let plain_text = event.plain_text.as_deref();
        let word_count = event
            .word_count
            .unwrap_or_else(|| plain_text.map_or(0, |text| self.stats.word_count(text)));

        next.content = Some(ContentSection {
            length: word_count,
            length_score: scoring::content_length_score(word_count, &self.config.messages),
        });

        let Some(text) = plain_text else {
            return false;
        };
        if word_count < self.config.min_keyword_words {
            tracing::debug!(word_count, threshold = self.config.min_keyword_words, "body too short for keyword statistics");
            return false;
        }

        let metrics = self.stats.compute(text);
        next.text_statistics = Some(TextStatisticsSection {
            word_count,
            grade_level: grade_analysis(metrics.flesch_kincaid_grade, &self.config.messages.readability),
            reading_ease: metrics.flesch_reading_ease,
            recommended_keywords: self.keywords.recommended_keywords(text, self.config.recommended_keyword_count),
            keyword_density: None,
        });
        next.inputs.analyzed_text = Some(text.to_string());
        true
    }

    /// Recompute every keyword-dependent sub-field whose inputs changed
    fn merge_keyword_usage(&self, next: &mut Report, event: &AnalysisEvent, keyword_changed: bool) {
        let keyword = next.keyword.as_ref().map(|k| k.word.clone());
        let keyword = keyword.as_deref();
        let messages = &self.config.messages;
        let inputs = &next.inputs;

        if (keyword_changed || event.touches_title())
            && let Some(title) = next.title.as_mut()
        {
            let usage = keyword.zip(inputs.title_text.as_deref()).map(|(k, t)| keywords::occurrence_count(t, k));
            title.keyword_usage = usage;
            title.keyword_score = scoring::title_keyword_score(usage, messages);
        }

        if (keyword_changed || event.touches_description())
            && let Some(description) = next.description.as_mut()
        {
            let usage =
                keyword.zip(inputs.description_text.as_deref()).map(|(k, t)| keywords::occurrence_count(t, k));
            description.keyword_usage = usage;
            description.keyword_score = scoring::description_keyword_score(usage, messages);
        }

        if (keyword_changed || event.raw_html.is_some())
            && let Some(headings) = next.headings.as_mut()
        {
            let usage = keyword.map(|k| keywords::occurrence_count_in(&inputs.heading_texts, k));
            headings.keyword_usage = usage;
            headings.keyword_score = scoring::heading_keyword_score(usage, messages);
        }

        if let Some(stats) = next.text_statistics.as_mut()
            && (keyword_changed || event.touches_body())
        {
            stats.keyword_density = keyword
                .zip(inputs.analyzed_text.as_deref())
                .map(|(k, text)| keywords::density(self.stats.as_ref(), text, k));
        }
    }
}

/// Lower-cased field text after a change. A length-only event leaves the
/// text unknown unless the field was emptied.
fn field_text(text: Option<&str>, length: usize) -> Option<String> {
    match text {
        Some(text) => Some(normalize(text)),
        None if length == 0 => Some(String::new()),
        None => None,
    }
}

/// Custom keyword first, then the top recommended keyword, then nothing
fn resolve_keyword(report: &Report) -> Option<FocusKeyword> {
    if let Some(custom) = &report.inputs.custom_keyword {
        return Some(FocusKeyword { word: custom.clone(), source: KeywordSource::Custom });
    }

    report
        .text_statistics
        .as_ref()
        .and_then(|stats| stats.recommended_keywords.first())
        .map(|top| FocusKeyword { word: top.word.clone(), source: KeywordSource::Recommended })
}

/// Downstream consumer of merged reports, typically the render layer.
pub trait ReportSink {
    fn report_updated(&mut self, report: &Report);
}

impl<F> ReportSink for F
where
    F: FnMut(&Report),
{
    fn report_updated(&mut self, report: &Report) {
        self(report)
    }
}

/// Sends a copy of every snapshot down a channel. A closed channel is ignored.
impl ReportSink for Sender<Report> {
    fn report_updated(&mut self, report: &Report) {
        if self.send(report.clone()).is_err() {
            tracing::trace!("report receiver dropped");
        }
    }
}

/// Owns the session report and fans merged snapshots out to sinks.
pub struct ReportAggregator {
    advisor: Advisor,
    report: Report,
    sinks: Vec<Box<dyn ReportSink>>,
}

impl ReportAggregator {
    pub fn new(config: AdvisorConfig) -> Self {
        Self::with_advisor(Advisor::new(config))
    }

    pub fn with_advisor(advisor: Advisor) -> Self {
        Self { advisor, report: Report::new(), sinks: Vec::new() }
    }

    /// Registers a sink that receives the full report after every event.
    pub fn subscribe(&mut self, sink: impl ReportSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Merges one event, emits the resulting snapshot and returns it.
    pub fn handle(&mut self, event: impl Into<AnalysisEvent>) -> &Report {
        let event = event.into();
        self.report = self.advisor.merge(&self.report, &event);

        for sink in &mut self.sinks {
            sink.report_updated(&self.report);
        }
        &self.report
    }

    /// The current snapshot.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Discards all accumulated state, keeping sinks.
    pub fn reset(&mut self) {
        self.report = Report::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EditorEvent;
    use crate::readability::TextMetrics;
    use crate::scoring::{Reason, Status};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn long_body(words: usize) -> String {
        let sentence = "Rust parsers turn raw text into structured syntax trees quickly.";
        let per_sentence = sentence.split_whitespace().count();
        let mut html = String::from("<h1>Writing Rust parsers</h1>");
        for _ in 0..words.div_ceil(per_sentence) {
            html.push_str("<p>");
            html.push_str(sentence);
            html.push_str("</p>");
        }
        html
    }

    fn aggregator() -> ReportAggregator {
        ReportAggregator::new(AdvisorConfig::default())
    }

    struct FixedWords(usize);

    impl TextStatistics for FixedWords {
        fn compute(&self, _text: &str) -> TextMetrics {
            TextMetrics::from_counts(self.0, 1, self.0)
        }
    }

    #[test]
    fn test_title_only_event_leaves_other_sections() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::description("A meta description that is long enough to count as a warning."));
        agg.handle(EditorEvent::body("<p>Short body.</p>"));
        let before = agg.report().clone();

        let after = agg.handle(EditorEvent::TitleChanged { length: 45, text: None }).clone();

        assert_eq!(after.description, before.description);
        assert_eq!(after.content, before.content);
        assert_eq!(after.image, before.image);
        assert_eq!(after.raw_statistics, before.raw_statistics);
        assert_eq!(after.title.unwrap().length_score.status, Status::Good);
    }

    #[test]
    fn test_title_length_examples() {
        let mut agg = aggregator();
        let report = agg.handle(EditorEvent::TitleChanged { length: 0, text: None });
        assert_eq!(report.title.as_ref().unwrap().length_score.reason, Reason::Empty);

        let report = agg.handle(EditorEvent::TitleChanged { length: 80, text: None });
        let title = report.title.as_ref().unwrap();
        assert_eq!(title.length, 80);
        assert_eq!(title.length_score.status, Status::Bad);
        assert_eq!(title.length_score.reason, Reason::TooLong);
    }

    #[test]
    fn test_markup_statistics() {
        let mut agg = aggregator();
        let report =
            agg.handle(EditorEvent::body("<h1>One</h1><h1>Two</h1><h2>Sub</h2><p>Text <img src=\"a.png\"></p>"));

        assert_eq!(report.raw_statistics, Some(RawStatistics { h1_count: 2, h2_count: 1, h3_count: 0, image_count: 1 }));
        let headings = report.headings.as_ref().unwrap();
        assert_eq!(headings.length_score.status, Status::Bad);
        assert_eq!(headings.length_score.reason, Reason::Multiple);
        assert_eq!(report.image.as_ref().unwrap().length_score.status, Status::Good);
    }

    #[test]
    fn test_short_body_skips_text_statistics() {
        let mut agg = aggregator();
        let report = agg.handle(EditorEvent::body("<p>Only a handful of words here.</p>"));

        assert_eq!(report.content.as_ref().unwrap().length, 6);
        assert_eq!(report.content.as_ref().unwrap().length_score.reason, Reason::TooShort);
        assert!(report.text_statistics.is_none());
        assert!(report.keyword.is_none());
    }

    #[test]
    fn test_short_body_keeps_previous_text_statistics() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::body(long_body(120)));
        let stats_before = agg.report().text_statistics.clone();
        assert!(stats_before.is_some());

        let report = agg.handle(EditorEvent::body("<p>Now it is short.</p>"));
        assert_eq!(report.text_statistics, stats_before);
        assert_eq!(report.content.as_ref().unwrap().length, 4);
    }

    #[test]
    fn test_long_body_recommends_keyword() {
        let mut agg = aggregator();
        let report = agg.handle(EditorEvent::body(long_body(120)));

        let stats = report.text_statistics.as_ref().unwrap();
        assert!(stats.word_count >= 100);
        assert_eq!(stats.recommended_keywords.len(), 1);
        assert_eq!(stats.recommended_keywords[0].word, "rust");
        assert_eq!(report.keyword, Some(FocusKeyword { word: "rust".to_string(), source: KeywordSource::Recommended }));
        assert!(stats.keyword_density.unwrap() > 0.0);
        assert_eq!(report.headings.as_ref().unwrap().keyword_usage, Some(1));
    }

    #[test]
    fn test_custom_keyword_overrides_recommendation() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::title("Parsing text with Rust: syntax trees made simple"));
        agg.handle(EditorEvent::body(long_body(120)));
        let report = agg.handle(EditorEvent::keyword("  Syntax Trees "));

        assert_eq!(report.keyword, Some(FocusKeyword {
            word: "syntax trees".to_string(),
            source: KeywordSource::Custom
        }));
        let title = report.title.as_ref().unwrap();
        assert_eq!(title.keyword_usage, Some(1));
        assert_eq!(title.keyword_score.as_ref().unwrap().status, Status::Good);
        assert_eq!(report.headings.as_ref().unwrap().keyword_usage, Some(0));
    }

    #[test]
    fn test_blank_custom_keyword_falls_back_to_recommendation() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::body(long_body(120)));
        agg.handle(EditorEvent::keyword("parsers"));
        assert_eq!(agg.report().focus_keyword(), Some("parsers"));

        let report = agg.handle(EditorEvent::keyword("   "));
        assert_eq!(report.focus_keyword(), Some("rust"));
        assert_eq!(report.keyword.as_ref().unwrap().source, KeywordSource::Recommended);
    }

    #[test]
    fn test_no_keyword_means_not_applicable() {
        let mut agg = aggregator();
        let report = agg.handle(EditorEvent::title("A title without any body to recommend from"));

        let title = report.title.as_ref().unwrap();
        assert_eq!(title.keyword_usage, None);
        assert_eq!(title.keyword_score, None);
    }

    #[test]
    fn test_keyword_usage_repetitive_title() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::keyword("rust"));
        let report = agg.handle(EditorEvent::title("Rust tips for Rust developers who love rust"));

        let title = report.title.as_ref().unwrap();
        assert_eq!(title.keyword_usage, Some(3));
        assert_eq!(title.keyword_score.as_ref().unwrap().reason, Reason::Repetitive);
    }

    #[test]
    fn test_length_only_title_drops_stale_text() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::keyword("rust"));
        let report = agg.handle(EditorEvent::title("Rust tips"));
        assert_eq!(report.title.as_ref().unwrap().keyword_usage, Some(1));

        let report = agg.handle(EditorEvent::TitleChanged { length: 0, text: None });
        let title = report.title.as_ref().unwrap();
        assert_eq!(title.keyword_usage, Some(0));
        assert_eq!(title.keyword_score.as_ref().unwrap().status, Status::Bad);
        assert_eq!(title.stop_word_score, None);

        let report = agg.handle(EditorEvent::TitleChanged { length: 45, text: None });
        let title = report.title.as_ref().unwrap();
        assert_eq!(title.keyword_usage, None);
        assert_eq!(title.keyword_score, None);
    }

    #[test]
    fn test_length_only_description_drops_stale_text() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::keyword("rust"));
        agg.handle(EditorEvent::description("Rust tips for writing fast parsers."));

        let report = agg.handle(EditorEvent::DescriptionChanged { length: 130, text: None });
        let description = report.description.as_ref().unwrap();
        assert_eq!(description.length_score.status, Status::Good);
        assert_eq!(description.keyword_usage, None);
        assert_eq!(description.keyword_score, None);
    }

    #[test]
    fn test_title_stop_words() {
        let mut agg = aggregator();
        let report = agg.handle(EditorEvent::title("How to Bake Sourdough Bread at Home"));
        let title = report.title.as_ref().unwrap();
        assert_eq!(title.stop_words, Some(3));
        assert_eq!(title.stop_word_score.as_ref().unwrap().status, Status::Warning);
        assert_eq!(title.stop_word_score.as_ref().unwrap().reason, Reason::StopWords);

        let report = agg.handle(EditorEvent::title("Sourdough Bread Baking Basics"));
        let title = report.title.as_ref().unwrap();
        assert_eq!(title.stop_words, Some(0));
        assert_eq!(title.stop_word_score.as_ref().unwrap().status, Status::Good);
        assert!(report.description.is_none());
    }

    #[test]
    fn test_description_keyword_unused() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::keyword("rust"));
        let report = agg.handle(EditorEvent::description("A description about something else entirely."));
        let description = report.description.as_ref().unwrap();
        assert_eq!(description.keyword_score.as_ref().unwrap().status, Status::Bad);
    }

    #[test]
    fn test_robots_directives() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::robots(RobotsDirective::Index, Status::Bad));
        let report = agg.handle(EditorEvent::robots(RobotsDirective::Follow, Status::Good));

        assert_eq!(report.robot_index.as_ref().unwrap().length_score.status, Status::Bad);
        assert_eq!(report.robot_follow.as_ref().unwrap().length_score.status, Status::Good);
    }

    #[test]
    fn test_external_word_count_wins() {
        let mut agg = aggregator();
        let report = agg.handle(EditorEvent::BodyContentChanged {
            raw_html: "<p>three little words</p>".to_string(),
            plain_text: "three little words".to_string(),
            word_count: Some(350),
        });

        assert_eq!(report.content.as_ref().unwrap().length, 350);
        assert_eq!(report.content.as_ref().unwrap().length_score.status, Status::Good);
    }

    #[test]
    fn test_injected_statistics() {
        let advisor = Advisor::with_statistics(AdvisorConfig::default(), Box::new(FixedWords(250)));
        let mut agg = ReportAggregator::with_advisor(advisor);
        let report = agg.handle(EditorEvent::body("<p>whatever words</p>"));

        assert_eq!(report.content.as_ref().unwrap().length, 250);
        assert_eq!(report.content.as_ref().unwrap().length_score.status, Status::Warning);
        assert!(report.text_statistics.is_some());
    }

    #[test]
    fn test_merge_is_pure() {
        let advisor = Advisor::new(AdvisorConfig::default());
        let prev = Report::new();
        let event = AnalysisEvent::from(EditorEvent::title("Same input, same output, every single time"));

        let first = advisor.merge(&prev, &event);
        let second = advisor.merge(&prev, &event);
        assert_eq!(first, second);
        assert_eq!(prev, Report::new());
    }

    #[test]
    fn test_sinks_receive_full_snapshot_once_per_event() {
        let seen: Rc<RefCell<Vec<Report>>> = Rc::new(RefCell::new(Vec::new()));
        let mut agg = aggregator();
        let sink = Rc::clone(&seen);
        agg.subscribe(move |report: &Report| sink.borrow_mut().push(report.clone()));

        agg.handle(EditorEvent::title("A title that is long enough to be good"));
        agg.handle(EditorEvent::description("Short description"));
        agg.handle(AnalysisEvent::default());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[1].title.is_some());
        assert!(seen[1].description.is_some());
        assert_eq!(seen[2], seen[1]);
    }

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut agg = aggregator();
        agg.subscribe(tx);

        agg.handle(EditorEvent::keyword("rust"));
        let received = rx.try_recv().unwrap();
        assert_eq!(received.focus_keyword(), Some("rust"));
    }

    #[test]
    fn test_reset() {
        let mut agg = aggregator();
        agg.handle(EditorEvent::title("Something"));
        agg.reset();
        assert_eq!(agg.report(), &Report::new());
    }
}
