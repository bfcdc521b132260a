//! Message table for scored diagnostics.
//!
//! Every message shown next to a status comes from a [`MessageTable`], keyed
//! by field and outcome. The defaults are English; a configuration file can
//! replace any subset of them (see [`crate::config`]).

use serde::{Deserialize, Serialize};

/// All user-facing diagnostic messages, grouped by report field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageTable {
    pub title: TitleMessages,
    pub description: MetaFieldMessages,
    pub content: ContentMessages,
    pub image: PresenceMessages,
    pub headings: HeadingMessages,
    pub readability: ReadabilityMessages,
    pub robots: RobotsMessages,
}

/// Title messages: the shared metadata checks plus stop-word use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleMessages {
    pub length: MetaLengthMessages,
    pub keyword_usage: KeywordUsageMessages,
    pub stop_words: StopWordMessages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopWordMessages {
    pub ok: String,
    pub good: String,
}

/// Messages for a metadata field measured in characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaFieldMessages {
    pub length: MetaLengthMessages,
    pub keyword_usage: KeywordUsageMessages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaLengthMessages {
    pub bad_empty: String,
    pub bad_long: String,
    pub ok: String,
    pub good: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordUsageMessages {
    pub bad: String,
    pub ok: String,
    pub good: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMessages {
    pub length: ContentLengthMessages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentLengthMessages {
    pub bad_empty: String,
    pub bad_short: String,
    pub ok: String,
    pub good: String,
}

/// Messages for a binary present/absent check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceMessages {
    pub good: String,
    pub bad: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingMessages {
    pub h1: H1Messages,
    pub keyword_usage: PresenceMessages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct H1Messages {
    pub good: String,
    pub bad_empty: String,
    pub bad_multiple: String,
}

/// One message per grade band, easiest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMessages {
    pub good_high: String,
    pub good_med_high: String,
    pub good_med_low: String,
    pub good_low: String,
    pub ok: String,
    pub bad_high: String,
    pub bad_low: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotsMessages {
    pub index: DirectiveMessages,
    pub follow: DirectiveMessages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectiveMessages {
    pub good: String,
    pub ok: String,
    pub bad: String,
}

fn s(text: &str) -> String {
    text.to_string()
}

impl Default for MessageTable {
    fn default() -> Self {
        Self {
            title: TitleMessages {
                length: MetaLengthMessages {
                    bad_empty: s(
                        "You haven't entered a custom SEO Title to your page, you should consider adding one.",
                    ),
                    bad_long: s(
                        "Your custom SEO Title is longer than the recommended 70 characters, you should consider making it shorter.",
                    ),
                    ok: s("We suggest making your SEO title at least 30 characters."),
                    good: s("Your SEO Title is a good length, and optimized for Search Engines!"),
                },
                keyword_usage: KeywordUsageMessages {
                    bad: s("You should try to use your focus keyword at least one time in your SEO title."),
                    ok: s(
                        "It's great you've used the focus keyword in your title, but you should try to only use that one time.",
                    ),
                    good: s("Your SEO Title is optimized by using your focus keyword!"),
                },
                stop_words: StopWordMessages {
                    ok: s(
                        "Your title makes use of a stop word. We don't recommend using these as they can negatively impact your SEO efforts.",
                    ),
                    good: s("Your title doesn't use any stop words that will negatively impact your SEO ranking! Good Job!"),
                },
            },
            description: MetaFieldMessages {
                length: MetaLengthMessages {
                    bad_empty: s(
                        "You haven't entered a meta description for your page, search engines will pick text for you.",
                    ),
                    bad_long: s(
                        "Your meta description is longer than the recommended 156 characters and may be cut off in search results.",
                    ),
                    ok: s("We suggest making your meta description at least 125 characters."),
                    good: s("Your meta description is a good length, and optimized for Search Engines!"),
                },
                keyword_usage: KeywordUsageMessages {
                    bad: s("You should try to use your focus keyword at least one time in your meta description."),
                    ok: s(
                        "It's great you've used the focus keyword in your description, but you should try to only use that one time.",
                    ),
                    good: s("Your meta description is optimized by using your focus keyword!"),
                },
            },
            content: ContentMessages {
                length: ContentLengthMessages {
                    bad_empty: s("Your page doesn't have any content yet. Start writing to get a content analysis."),
                    bad_short: s("Your content is under 200 words, which search engines may treat as thin content."),
                    ok: s("Your content is getting there. We recommend at least 300 words."),
                    good: s("Your content length is great for search engines!"),
                },
            },
            image: PresenceMessages {
                good: s("Your content has images, which helps engage readers."),
                bad: s("Your content doesn't have any images. Consider adding at least one."),
            },
            headings: HeadingMessages {
                h1: H1Messages {
                    good: s("Your page has exactly one H1 heading."),
                    bad_empty: s("Your page is missing an H1 heading. Add one that describes the content."),
                    bad_multiple: s("Your page has more than one H1 heading. Use a single H1 and H2-H6 for sections."),
                },
                keyword_usage: PresenceMessages {
                    good: s("Your focus keyword appears in your headings."),
                    bad: s("Try using your focus keyword in at least one heading."),
                },
            },
            readability: ReadabilityMessages {
                good_high: s("Your content is very easy to read."),
                good_med_high: s("Your content is easy to read."),
                good_med_low: s("Your content is fairly easy to read."),
                good_low: s("Your content is written in plain English."),
                ok: s("Your content is fairly difficult to read. Try shorter sentences."),
                bad_high: s("Your content is difficult to read. Try shorter sentences and simpler words."),
                bad_low: s("Your content is very difficult to read. Try shorter sentences and simpler words."),
            },
            robots: RobotsMessages {
                index: DirectiveMessages {
                    good: s("Search engines are allowed to index this page."),
                    ok: s("Search engine indexing for this page is restricted."),
                    bad: s("Search engines are told not to index this page, it won't appear in search results."),
                },
                follow: DirectiveMessages {
                    good: s("Search engines are allowed to follow links on this page."),
                    ok: s("Search engine link following for this page is restricted."),
                    bad: s("Search engines are told not to follow links on this page."),
                },
            },
        }
    }
}
