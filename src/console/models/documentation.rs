//! # Endpoint Documentation
//!
//! Supplementary prose shown in an endpoint's overlay. Keywords are written
//! between backticks (`` `min` ``) and rendered with their keyword color.

use regex::Regex;
use std::sync::OnceLock;

/// A run of documentation text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocSegment {
    Text(String),
    Keyword(String),
}

impl DocSegment {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Keyword(text) => text,
        }
    }
}

fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"`([^`]+)`").unwrap())
}

/// Documentation content as an ordered list of paragraphs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Documentation {
    paragraphs: Vec<String>,
}

impl Documentation {
    pub fn new<S: Into<String>>(paragraphs: impl IntoIterator<Item = S>) -> Self {
        Self {
            paragraphs: paragraphs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.trim().is_empty())
    }

    /// Split one paragraph into plain text and keyword segments
    pub fn segments(paragraph: &str) -> Vec<DocSegment> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for captures in keyword_pattern().captures_iter(paragraph) {
            let (Some(whole), Some(keyword)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > last_end {
                segments.push(DocSegment::Text(
                    paragraph[last_end..whole.start()].to_string(),
                ));
            }
            segments.push(DocSegment::Keyword(keyword.as_str().to_string()));
            last_end = whole.end();
        }

        if last_end < paragraph.len() {
            segments.push(DocSegment::Text(paragraph[last_end..].to_string()));
        }

        segments
    }

    /// Every keyword mentioned, in order of first appearance
    pub fn keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for paragraph in &self.paragraphs {
            for segment in Self::segments(paragraph) {
                if let DocSegment::Keyword(keyword) = segment {
                    if !keywords.contains(&keyword) {
                        keywords.push(keyword);
                    }
                }
            }
        }
        keywords
    }
}
