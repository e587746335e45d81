//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. [`NoopObserver`] compiles away entirely; [`StageTimingObserver`]
//! records a [`StageReport`] per stage.

use crate::graph::similarity::SimilarityGraph;
use crate::summarizer::ranker::RankOutput;
use crate::types::{Keyword, Sentence};
use std::time::{Duration, Instant};

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_VECTORIZE: &str = "vectorize";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_KEYWORDS: &str = "keywords";

/// All stages in execution order
pub const STAGES: [&str; 6] = [
    STAGE_SEGMENT,
    STAGE_VECTORIZE,
    STAGE_GRAPH,
    STAGE_RANK,
    STAGE_SELECT,
    STAGE_KEYWORDS,
];

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it finishes
///
/// Only the graph and rank stages fill in the optional metrics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    duration: Duration,
    nodes: Option<usize>,
    edges: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    residual: Option<f64>,
}

impl StageReport {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn nodes(&self) -> Option<usize> {
        self.nodes
    }

    pub fn edges(&self) -> Option<usize> {
        self.edges
    }

    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    pub fn residual(&self) -> Option<f64> {
        self.residual
    }
}

/// Builder for reports that carry stage metrics
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    pub fn nodes(mut self, nodes: usize) -> Self {
        self.report.nodes = Some(nodes);
        self
    }

    pub fn edges(mut self, edges: usize) -> Self {
        self.report.edges = Some(edges);
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.report.iterations = Some(iterations);
        self
    }

    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks fired while a document is summarized
///
/// Every method has an empty default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_graph(&mut self, _graph: &SimilarityGraph) {}

    fn on_rank(&mut self, _output: &RankOutput) {}

    fn on_keywords(&mut self, _keywords: &[Keyword]) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records one report per finished stage
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in the order the stages finished
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a given stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all recorded stage durations
    pub fn total_duration(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.duration()).sum()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}
