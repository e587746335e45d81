//! Pipeline runner: orchestrates the summarization stages.
//!
//! [`Summarizer`] owns a validated [`SummarizerConfig`] and the language
//! profile it implies. Each call to [`Summarizer::summarize`] runs the
//! stages in order:
//!
//! 1. segment: text into sentences and tokens
//! 2. vectorize: TF-IDF vectors over the document vocabulary
//! 3. graph: cosine similarity graph
//! 4. rank: TextRank, or the frequency fallback on degenerate graphs
//! 5. select: top sentences, back in document order
//! 6. keywords: top terms by the configured method
//!
//! An optional [`PipelineObserver`] is notified at every stage boundary.

use crate::errors::Result;
use crate::graph::similarity::build_similarity_graph_parallel;
use crate::keywords::KeywordExtractor;
use crate::nlp::language::LanguageProfile;
use crate::nlp::tokenizer::Tokenizer;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_GRAPH,
    STAGE_KEYWORDS, STAGE_RANK, STAGE_SEGMENT, STAGE_SELECT, STAGE_VECTORIZE,
};
use crate::summarizer::ranker::SentenceRanker;
use crate::summarizer::selector::SentenceSelector;
use crate::summarizer::tfidf::vectorize;
use crate::types::{Language, Summary, SummarizerConfig, SummarySentence};
use std::borrow::Cow;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Extractive summarizer for one configuration
///
/// Construction validates the configuration, so summarizing itself cannot
/// fail on `&str` input.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    profile: Cow<'static, LanguageProfile>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self {
            config: SummarizerConfig::default(),
            profile: Cow::Borrowed(LanguageProfile::builtin(Language::default())),
        }
    }
}

impl Summarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer, validating the configuration first
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;

        let builtin = LanguageProfile::builtin(config.language);
        let profile = if config.stopwords.is_empty() {
            Cow::Borrowed(builtin)
        } else {
            Cow::Owned(builtin.with_extra_stopwords(&config.stopwords))
        };

        Ok(Self { config, profile })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    /// Summarize a document
    ///
    /// Empty or whitespace-only text yields [`Summary::empty`].
    pub fn summarize(&self, text: &str) -> Summary {
        self.summarize_with_observer(text, &mut NoopObserver)
    }

    /// Summarize raw bytes, failing with `InvalidEncoding` unless they are UTF-8
    pub fn summarize_bytes(&self, bytes: &[u8]) -> Result<Summary> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.summarize(text))
    }

    /// Summarize a document, reporting each stage to `observer`
    pub fn summarize_with_observer(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Summary {
        let cfg = &self.config;

        // Stage 1: Segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = Tokenizer::new(&self.profile)
            .with_min_sentence_chars(cfg.min_sentence_chars)
            .segment(text);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);

        if sentences.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("no sentences found, returning empty summary");
            return Summary::empty();
        }

        // Stage 2: Vectorize
        trace_stage!(STAGE_VECTORIZE);
        observer.on_stage_start(STAGE_VECTORIZE);
        let clock = StageClock::start();
        let (vocabulary, vectors) = vectorize(&sentences);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_VECTORIZE, &report);

        // Stage 3: Build similarity graph
        trace_stage!(STAGE_GRAPH);
        observer.on_stage_start(STAGE_GRAPH);
        let clock = StageClock::start();
        let graph = build_similarity_graph_parallel(
            &vectors,
            cfg.similarity_threshold,
            cfg.parallel_threshold,
        );
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(graph.num_nodes)
            .edges(graph.num_edges() / 2)
            .build();
        observer.on_stage_end(STAGE_GRAPH, &report);
        observer.on_graph(&graph);

        // Stage 4: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let ranker = SentenceRanker::select(&graph, cfg);
        let rank_output = ranker.rank(&graph, &vectors);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            strategy = %rank_output.strategy,
            iterations = rank_output.iterations,
            converged = rank_output.converged,
            residual = rank_output.residual,
            "sentences ranked"
        );
        let report = StageReportBuilder::new(clock.elapsed())
            .iterations(rank_output.iterations)
            .converged(rank_output.converged)
            .residual(rank_output.residual)
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_rank(&rank_output);

        // Stage 5: Select sentences
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selected: Vec<SummarySentence> = SentenceSelector::new(cfg.num_sentences)
            .select_indices(&rank_output.scores)
            .into_iter()
            .map(|i| {
                let sentence = &sentences[i];
                SummarySentence {
                    index: sentence.index,
                    text: sentence.text.clone(),
                    start: sentence.start,
                    end: sentence.end,
                    score: rank_output.scores[i],
                }
            })
            .collect();
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_SELECT, &report);

        // Stage 6: Extract keywords
        trace_stage!(STAGE_KEYWORDS);
        observer.on_stage_start(STAGE_KEYWORDS);
        let clock = StageClock::start();
        let keywords = KeywordExtractor::from_config(cfg).extract(
            &vocabulary,
            &sentences,
            &vectors,
            cfg.num_keywords,
        );
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_KEYWORDS, &report);
        observer.on_keywords(&keywords);

        Summary {
            sentences: selected,
            keywords,
            total_sentences: sentences.len(),
            strategy: rank_output.strategy,
            iterations: rank_output.iterations,
            converged: rank_output.converged,
        }
    }
}

/// Summarize `text` with default settings apart from the given ones
///
/// `language` is a tag such as `"en"` or `"polish"`; unknown tags fail with
/// `UnsupportedLanguage`.
pub fn summarize(
    text: &str,
    language: &str,
    num_sentences: usize,
    num_keywords: usize,
) -> Result<Summary> {
    let config = SummarizerConfig::default()
        .with_language(language.parse()?)
        .with_num_sentences(num_sentences)
        .with_num_keywords(num_keywords);

    Ok(Summarizer::with_config(config)?.summarize(text))
}
