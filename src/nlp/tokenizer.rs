//! Rule-based sentence segmentation and Unicode-aware word tokenization
//!
//! Sentences end at `.`, `!`, `?` or `…` when the terminator run is followed
//! by whitespace or the end of the text, unless the word before a period is a
//! known abbreviation. A blank line always ends a sentence. Words are split
//! on UAX #29 word boundaries.

use super::language::LanguageProfile;
use crate::errors::Result;
use crate::types::{Language, Sentence};
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into [`Sentence`]s with normalized tokens
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    profile: &'a LanguageProfile,
    /// Segments shorter than this (in characters, after trimming) are dropped
    min_sentence_chars: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over a language profile
    pub fn new(profile: &'a LanguageProfile) -> Self {
        Self {
            profile,
            min_sentence_chars: 0,
        }
    }

    /// Set minimum sentence length in characters
    pub fn with_min_sentence_chars(mut self, chars: usize) -> Self {
        self.min_sentence_chars = chars;
        self
    }

    /// Segment text into sentences in reading order
    ///
    /// Empty or whitespace-only text yields no sentences; text without a
    /// terminator yields a single sentence.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        self.sentence_boundaries(text)
            .into_iter()
            .filter(|&(start, end)| text[start..end].chars().count() >= self.min_sentence_chars)
            .enumerate()
            .map(|(index, (start, end))| {
                let sent_text = &text[start..end];
                Sentence::new(index, sent_text, start, end, self.tokenize_words(sent_text))
            })
            .collect()
    }

    /// Normalized content tokens of a piece of text
    ///
    /// Lowercases, drops tokens without any alphabetic character and drops
    /// stop words. Diacritics are kept.
    pub fn tokenize_words(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter_map(|word| {
                let normalized = word.to_lowercase().replace('\u{2019}', "'");
                if !normalized.chars().any(char::is_alphabetic) {
                    return None;
                }
                if self.profile.stopwords().is_stopword(&normalized) {
                    return None;
                }
                Some(normalized)
            })
            .collect()
    }

    /// Find trimmed sentence spans as byte offsets
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut boundaries = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];

            if is_terminal(c) {
                // Swallow the whole terminator run plus closing quotes/brackets
                let mut j = i + 1;
                while j < chars.len() && (is_terminal(chars[j].1) || is_closing(chars[j].1)) {
                    j += 1;
                }
                let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
                let at_break = chars.get(j).map_or(true, |&(_, next)| next.is_whitespace());

                let continues =
                    c == '.' && self.continues_after_period(&text[start..pos], &text[end..]);
                if at_break && !continues {
                    push_trimmed(text, start, end, &mut boundaries);
                    start = end;
                }
                i = j;
                continue;
            }

            if c == '\n' {
                let mut j = i + 1;
                let mut blank_line = false;
                while j < chars.len() && chars[j].1.is_whitespace() {
                    blank_line |= chars[j].1 == '\n';
                    j += 1;
                }
                if blank_line {
                    push_trimmed(text, start, pos, &mut boundaries);
                    start = pos;
                }
                i = j;
                continue;
            }

            i += 1;
        }

        push_trimmed(text, start, text.len(), &mut boundaries);
        boundaries
    }

    /// Whether a period between `before` and `after` belongs to an
    /// abbreviation or a name initial rather than ending the sentence
    fn continues_after_period(&self, before: &str, after: &str) -> bool {
        let mut words = before.split_whitespace().rev();
        let Some(last) = words.next() else {
            return false;
        };
        let previous = words.next();

        if self.profile.is_abbreviation(last) {
            return true;
        }
        if previous.map_or(false, |prev| self.profile.is_abbreviation(&format!("{prev} {last}"))) {
            return true;
        }

        // "J. R. R. Tolkien", "John F. Kennedy"
        self.profile.is_initial(last)
            && (previous.map_or(false, starts_uppercase)
                || after.split_whitespace().next().map_or(false, |next| {
                    next.strip_suffix('.').map_or(false, |w| self.profile.is_initial(w))
                }))
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars()
        .find(|c| c.is_alphabetic())
        .map_or(false, char::is_uppercase)
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '»' | '”' | '’' | '“')
}

fn push_trimmed(text: &str, start: usize, end: usize, boundaries: &mut Vec<(usize, usize)>) {
    let segment = &text[start..end];
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = segment.len() - segment.trim_start().len();
    boundaries.push((start + lead, start + lead + trimmed.len()));
}

/// Segment text with the built-in profile for `language`
pub fn segment(text: &str, language: Language) -> Vec<Sentence> {
    Tokenizer::new(LanguageProfile::builtin(language)).segment(text)
}

/// Segment raw bytes, failing with `InvalidEncoding` unless they are UTF-8
pub fn segment_bytes(bytes: &[u8], language: Language) -> Result<Vec<Sentence>> {
    let text = std::str::from_utf8(bytes)?;
    Ok(segment(text, language))
}
