//! Keyword extraction, occurrence counting and density.
//!
//! Matching here is deliberately literal: a keyword occurrence is any
//! non-overlapping substring match, so `cat` is counted inside `category`.
//! Callers lower-case content before counting; [`density`] lower-cases the
//! keyword itself.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::AdvisorConfig;
use crate::readability::TextStatistics;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").expect("token pattern is valid"));

/// A candidate keyword and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub word: String,
    pub occurrence_count: usize,
}

impl Keyword {
    pub fn new(word: impl Into<String>, occurrence_count: usize) -> Self {
        Self { word: word.into(), occurrence_count }
    }
}

/// Counts non-overlapping literal occurrences of `keyword` in `content`.
///
/// Equivalent to the number of segments produced by splitting `content` on
/// `keyword`, minus one. An empty keyword occurs zero times.
///
/// # Example
///
/// ```rust
/// use redactor_core::keywords::occurrence_count;
///
/// assert_eq!(occurrence_count("cat category concatenate", "cat"), 3);
/// assert_eq!(occurrence_count("Cat", "cat"), 0);
/// ```
pub fn occurrence_count(content: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    content.matches(keyword).count()
}

/// Total occurrences of `keyword` across several texts.
pub fn occurrence_count_in<S: AsRef<str>>(texts: &[S], keyword: &str) -> usize {
    texts.iter().map(|text| occurrence_count(text.as_ref(), keyword)).sum()
}

/// Keyword density as a percentage of words, rounded to one decimal place.
///
/// Returns `0.0` when the keyword is blank or the content has no words.
///
/// # Example
///
/// ```rust
/// use redactor_core::keywords::density;
/// use redactor_core::readability::FleschKincaid;
///
/// assert_eq!(density(&FleschKincaid, "the quick fox the quick fox the", "fox"), 28.6);
/// assert_eq!(density(&FleschKincaid, "", "fox"), 0.0);
/// ```
pub fn density(stats: &dyn TextStatistics, content: &str, keyword: &str) -> f64 {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return 0.0;
    }

    let word_count = stats.word_count(content);
    if word_count == 0 {
        return 0.0;
    }

    let percent = occurrence_count(content, &keyword) as f64 / word_count as f64 * 100.0;
    round_tenths(percent)
}

/// Round half-up at the tenths digit
fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Ranks candidate keywords by frequency.
///
/// Tokens are split on runs of non-word characters and lower-cased. Tokens
/// shorter than the minimum length, or in the stop-word set, are never
/// candidates.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    stop_words: HashSet<String>,
    min_length: usize,
}

impl KeywordAnalyzer {
    pub fn new<I, S>(stop_words: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = stop_words.into_iter().map(|w| w.as_ref().trim().to_lowercase()).collect();
        Self { stop_words, min_length }
    }

    pub fn from_config(config: &AdvisorConfig) -> Self {
        Self::new(&config.stop_words, config.min_keyword_length)
    }

    /// Whether a lower-cased token may be recommended.
    pub fn is_candidate(&self, token: &str) -> bool {
        token.chars().count() >= self.min_length && !self.stop_words.contains(token)
    }

    /// Number of tokens in `text` that are configured stop words.
    pub fn stop_word_count(&self, text: &str) -> usize {
        let lowered = text.to_lowercase();
        NON_WORD.split(&lowered).filter(|token| !token.is_empty() && self.stop_words.contains(*token)).count()
    }

    /// Returns the `n` most frequent candidate keywords in `text`.
    ///
    /// Ties keep first-seen order. Empty or stop-word-only text yields an
    /// empty list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use redactor_core::keywords::{Keyword, KeywordAnalyzer};
    ///
    /// let analyzer = KeywordAnalyzer::new(["the", "and"], 3);
    /// let ranked = analyzer.recommended_keywords("The rust book and the rust guide", 2);
    /// assert_eq!(ranked, vec![Keyword::new("rust", 2), Keyword::new("book", 1)]);
    /// ```
    pub fn recommended_keywords(&self, text: &str, n: usize) -> Vec<Keyword> {
        let lowered = text.to_lowercase();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<Keyword> = Vec::new();

        for token in NON_WORD.split(&lowered) {
            if token.is_empty() || !self.is_candidate(token) {
                continue;
            }

            match positions.get(token) {
                Some(&index) => counts[index].occurrence_count += 1,
                None => {
                    positions.insert(token, counts.len());
                    counts.push(Keyword::new(token, 1));
                }
            }
        }

        counts.sort_by(|a, b| b.occurrence_count.cmp(&a.occurrence_count));
        counts.truncate(n);

        tracing::trace!(candidates = positions.len(), returned = counts.len(), "ranked keywords");
        counts
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::from_config(&AdvisorConfig::default())
    }
}
