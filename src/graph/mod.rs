//! Graph construction and representation
//!
//! This module provides graph building and storage for the sentence
//! similarity graph and the word co-occurrence graph.

pub mod builder;
pub mod csr;
pub mod similarity;
