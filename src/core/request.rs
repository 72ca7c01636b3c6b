//! # Essay Request
//!
//! The three user-facing parameters of a generation and the snapshot taken
//! when the user submits them.
//!
//! Both selectors are closed enums so the form can only ever hold a value
//! the product offers. They cycle with `next()` / `prev()` (wrapping), which
//! is all the terminal selectors need.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target length of the essay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WordCount {
    W250,
    #[default]
    W500,
    W1000,
    W1500,
    W2000,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        WordCount::W250,
        WordCount::W500,
        WordCount::W1000,
        WordCount::W1500,
        WordCount::W2000,
    ];

    pub fn words(self) -> u32 {
        match self {
            WordCount::W250 => 250,
            WordCount::W500 => 500,
            WordCount::W1000 => 1000,
            WordCount::W1500 => 1500,
            WordCount::W2000 => 2000,
        }
    }

    /// Selector label, e.g. "500 words".
    pub fn label(self) -> String {
        format!("{} words", self.words())
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl TryFrom<u32> for WordCount {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|w| w.words() == value)
            .ok_or_else(|| format!("unsupported word count {value} (expected 250, 500, 1000, 1500 or 2000)"))
    }
}

impl From<WordCount> for u32 {
    fn from(value: WordCount) -> Self {
        value.words()
    }
}

impl FromStr for WordCount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid word count '{s}'"))?;
        WordCount::try_from(n)
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words())
    }
}

/// Citation style the references are labelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CitationStyle {
    #[default]
    #[serde(rename = "APA")]
    Apa,
    #[serde(rename = "MLA")]
    Mla,
    Chicago,
    Harvard,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 4] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
        CitationStyle::Harvard,
    ];

    /// Short name as shown in "Formatted in APA style".
    pub fn name(self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
            CitationStyle::Chicago => "Chicago",
            CitationStyle::Harvard => "Harvard",
        }
    }

    /// Selector label.
    pub fn label(self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA 7th Edition",
            CitationStyle::Mla => "MLA 9th Edition",
            CitationStyle::Chicago => "Chicago Style",
            CitationStyle::Harvard => "Harvard Style",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl FromStr for CitationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown citation style '{s}' (expected APA, MLA, Chicago or Harvard)"))
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

/// Parameters captured at submission time.
///
/// Later edits to the form never reach an `EssayRequest` that was already
/// taken; the generator and the resulting document only ever see this copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayRequest {
    pub topic: String,
    pub word_count: WordCount,
    pub citation_style: CitationStyle,
}

impl EssayRequest {
    /// Returns `None` when the topic is blank. The topic is kept as typed.
    pub fn new(topic: &str, word_count: WordCount, citation_style: CitationStyle) -> Option<Self> {
        if topic.trim().is_empty() {
            return None;
        }
        Some(Self {
            topic: topic.to_string(),
            word_count,
            citation_style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_form() {
        assert_eq!(WordCount::default(), WordCount::W500);
        assert_eq!(CitationStyle::default(), CitationStyle::Apa);
    }

    #[test]
    fn test_word_count_cycles_both_ways() {
        assert_eq!(WordCount::W2000.next(), WordCount::W250);
        assert_eq!(WordCount::W250.prev(), WordCount::W2000);
        assert_eq!(WordCount::W500.next(), WordCount::W1000);
    }

    #[test]
    fn test_citation_style_cycles_both_ways() {
        assert_eq!(CitationStyle::Harvard.next(), CitationStyle::Apa);
        assert_eq!(CitationStyle::Apa.prev(), CitationStyle::Harvard);
        assert_eq!(CitationStyle::Mla.next(), CitationStyle::Chicago);
    }

    #[test]
    fn test_word_count_parse_rejects_unknown_values() {
        assert_eq!("1500".parse::<WordCount>(), Ok(WordCount::W1500));
        assert!("750".parse::<WordCount>().is_err());
        assert!("lots".parse::<WordCount>().is_err());
    }

    #[test]
    fn test_citation_style_parse_is_case_insensitive() {
        assert_eq!("mla".parse::<CitationStyle>(), Ok(CitationStyle::Mla));
        assert_eq!(" Chicago ".parse::<CitationStyle>(), Ok(CitationStyle::Chicago));
        assert!("IEEE".parse::<CitationStyle>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(WordCount::W1000.label(), "1000 words");
        assert_eq!(CitationStyle::Mla.label(), "MLA 9th Edition");
        assert_eq!(CitationStyle::Harvard.to_string(), "Harvard");
    }

    #[test]
    fn test_request_rejects_blank_topics() {
        for blank in ["", " ", "\t", " \n  "] {
            assert!(EssayRequest::new(blank, WordCount::W500, CitationStyle::Apa).is_none());
        }
    }

    #[test]
    fn test_request_keeps_topic_as_typed() {
        let req = EssayRequest::new("  Climate Policy ", WordCount::W250, CitationStyle::Mla).unwrap();
        assert_eq!(req.topic, "  Climate Policy ");
        assert_eq!(req.word_count, WordCount::W250);
        assert_eq!(req.citation_style, CitationStyle::Mla);
    }
}
