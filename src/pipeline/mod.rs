//! Pipeline execution and observation.
//!
//! ## Submodules
//!
//! - [`runner`]: the [`Summarizer`] that runs all stages for one document
//! - [`observer`]: timing and debug hooks fired at stage boundaries

pub mod observer;
pub mod runner;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{summarize, Summarizer};
