//! Stopword filtering
//!
//! Built-in closed-class word lists for every supported [`Language`], with
//! support for extending them from configuration.

use crate::types::Language;
use rustc_hash::FxHashSet;

/// A filter for removing stopwords from text
#[derive(Debug, Clone, PartialEq)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    pub fn new(language: Language) -> Self {
        Self {
            stopwords: Self::built_in(language)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().trim().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// The built-in list for a language, sorted
    pub fn built_in_list(language: Language) -> Vec<String> {
        let mut words: Vec<String> = Self::built_in(language)
            .iter()
            .map(|s| s.to_string())
            .collect();
        words.sort();
        words.dedup();
        words
    }

    fn built_in(language: Language) -> &'static [&'static str] {
        match language {
            Language::English => ENGLISH,
            Language::Polish => POLISH,
            Language::German => GERMAN,
        }
    }
}

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "that'll", "these", "those", "am", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an", "the",
    "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just",
    "don", "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y",
    "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't",
    "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn",
    "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
    "i'm", "i've", "i'd", "i'll", "we're", "we've", "we'd", "we'll", "they're", "they've",
    "they'd", "they'll", "he's", "he'd", "he'll", "she'd", "she'll", "let's", "there's",
    "what's", "can't", "cannot", "could", "would", "might", "must", "shall", "also",
];

const POLISH: &[&str] = &[
    "i", "a", "o", "e", "w", "z", "u", "na", "do", "za", "się", "nie", "że", "to", "jest",
    "są", "było", "były", "był", "była", "być", "będzie", "będą", "ma", "mają", "miał",
    "miała", "może", "można", "oraz", "lub", "albo", "ale", "gdy", "jak", "gdzie", "dlaczego",
    "co", "kto", "które", "która", "który", "których", "którym", "przez", "przed", "po",
    "pod", "nad", "przy", "bez", "dla", "od", "bardzo", "też", "już", "jeszcze", "tylko",
    "także", "również", "więc", "więcej", "wszystko", "wszystkie", "każdy", "każda", "każde",
    "tego", "tej", "tych", "tym", "te", "ta", "ten", "tak", "czy", "jego", "jej", "ich", "je",
    "go", "mu", "im", "ja", "ty", "on", "ona", "ono", "my", "wy", "oni", "one", "mnie", "mi",
    "nas", "was", "sobie", "siebie", "jako", "aby", "żeby", "jednak", "ze", "we", "ku",
    "bo", "ani", "lecz", "natomiast", "oraz", "czyli", "jeśli", "jeżeli", "gdyż", "ponieważ",
];

const GERMAN: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einer", "eines", "einem",
    "einen", "und", "oder", "aber", "doch", "sondern", "denn", "weil", "dass", "wenn", "als",
    "wie", "ob", "ist", "sind", "war", "waren", "sein", "bin", "bist", "seid", "wird",
    "werden", "wurde", "wurden", "hat", "haben", "hatte", "hatten", "habe", "kann", "können",
    "muss", "müssen", "soll", "sollen", "will", "wollen", "ich", "du", "er", "sie", "es",
    "wir", "ihr", "mich", "dich", "sich", "uns", "euch", "ihm", "ihn", "ihnen", "mein",
    "dein", "sein", "unser", "euer", "nicht", "kein", "keine", "auch", "noch", "nur", "schon",
    "sehr", "so", "zu", "zum", "zur", "in", "im", "an", "am", "auf", "aus", "bei", "mit",
    "nach", "von", "vom", "vor", "über", "unter", "um", "durch", "für", "gegen", "ohne",
    "bis", "seit", "hier", "dort", "da", "dann", "man", "was", "wer", "wo", "dieser", "diese",
    "dieses", "diesem", "diesen", "jener", "jede", "jeder", "jedes", "alle", "alles",
];
