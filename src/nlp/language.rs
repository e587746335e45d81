//! Per-language segmentation resources
//!
//! A [`LanguageProfile`] bundles the stop-word filter and the abbreviation
//! list used to suppress false sentence breaks. Built-in profiles are
//! constructed once per process and handed out by reference.

use super::stopwords::StopwordFilter;
use crate::types::Language;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Stop words and abbreviations for one language
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageProfile {
    language: Language,
    stopwords: StopwordFilter,
    /// Lowercase, without the trailing period
    abbreviations: FxHashSet<String>,
}

impl LanguageProfile {
    /// Build a fresh profile for a language
    pub fn new(language: Language) -> Self {
        Self {
            language,
            stopwords: StopwordFilter::new(language),
            abbreviations: abbreviations(language).iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The shared built-in profile for a language
    pub fn builtin(language: Language) -> &'static LanguageProfile {
        static ENGLISH: OnceLock<LanguageProfile> = OnceLock::new();
        static POLISH: OnceLock<LanguageProfile> = OnceLock::new();
        static GERMAN: OnceLock<LanguageProfile> = OnceLock::new();

        let cell = match language {
            Language::English => &ENGLISH,
            Language::Polish => &POLISH,
            Language::German => &GERMAN,
        };
        cell.get_or_init(|| LanguageProfile::new(language))
    }

    /// A copy of this profile with extra stop words
    pub fn with_extra_stopwords<S: AsRef<str>>(&self, words: &[S]) -> Self {
        let mut profile = self.clone();
        profile.stopwords.add_stopwords(words);
        profile
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Whether `word` (without its trailing period) is a listed abbreviation
    ///
    /// `word` may span two words, as in "et al".
    pub fn is_abbreviation(&self, word: &str) -> bool {
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        !word.is_empty() && self.abbreviations.contains(&word.to_lowercase())
    }

    /// Whether `word` (without its trailing period) could be a name initial
    ///
    /// Only a single uppercase letter qualifies, and never a one-letter
    /// pronoun such as the English "I".
    pub fn is_initial(&self, word: &str) -> bool {
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.is_uppercase() && !single_letter_words(self.language).contains(&c),
            _ => false,
        }
    }
}

/// Capitalized one-letter words that end sentences like any other word
fn single_letter_words(language: Language) -> &'static [char] {
    match language {
        Language::English => &['I', 'A'],
        Language::Polish => &['A', 'I', 'O', 'U', 'W', 'Z'],
        Language::German => &[],
    }
}

fn abbreviations(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => &[
            "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc",
            "ltd", "corp", "fig", "approx", "dept", "gov", "jan", "feb", "mar", "apr", "jun",
            "jul", "aug", "sep", "sept", "oct", "nov", "dec", "u.s", "u.k", "a.m", "p.m", "ph.d",
            "cf", "et al",
        ],
        Language::Polish => &[
            "np", "tzw", "itd", "itp", "dr", "prof", "mgr", "inż", "ok", "m.in", "tj", "ul",
            "godz", "św", "nr", "tys", "mln", "mld", "wg", "por", "ds", "al", "gen",
            "płk", "ks", "hab", "tzn", "wyd", "ang", "łac", "zob",
        ],
        Language::German => &[
            "z.b", "bzw", "usw", "ca", "dr", "prof", "nr", "vgl", "evtl", "ggf", "u.a", "d.h",
            "etc", "str", "hr", "fr", "inkl", "bspw", "sog", "s.o", "s.u", "u.u", "z.t", "abs",
            "jh", "mio", "mrd",
        ],
    }
}
