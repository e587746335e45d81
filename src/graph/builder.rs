//! Graph builder with efficient edge handling
//!
//! This module provides a mutable undirected graph builder that uses
//! FxHashMap for O(1) edge lookups during construction. Sentence similarity
//! graphs and word co-occurrence graphs are both assembled here before being
//! frozen into a [`CsrGraph`](super::csr::CsrGraph).

use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The label for this node (a term, or a sentence index)
    pub label: String,
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    /// Create a new node
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edges: FxHashMap::default(),
        }
    }
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps label -> node ID
    label_to_id: FxHashMap<String, u32>,
    /// Node storage
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            label_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Create a builder with `n` nodes labelled `"0"` .. `"n-1"`
    pub fn with_indexed_nodes(n: usize) -> Self {
        let mut builder = Self::with_capacity(n);
        for i in 0..n {
            builder.get_or_create_node(&i.to_string());
        }
        builder
    }

    /// Get or create a node for the given label, returning its ID
    pub fn get_or_create_node(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.label_to_id.insert(label.to_string(), id);
        self.nodes.push(BuilderNode::new(label));
        id
    }

    /// Increment the edge weight between two nodes
    ///
    /// If the edge doesn't exist, it's created with the given weight.
    /// If it exists, the weight is added to the existing weight.
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Set the edge weight between two nodes, replacing any previous weight
    pub fn set_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.edges.insert(to, weight);
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            node.edges.insert(from, weight);
        }
    }

    /// Build a word co-occurrence graph from sentence tokens
    ///
    /// Tokens within `window_size` positions of each other in the same
    /// sentence are connected; edge weights count co-occurrences. Node IDs
    /// follow first appearance in the document.
    pub fn from_sentences(sentences: &[Sentence], window_size: usize) -> Self {
        let token_count: usize = sentences.iter().map(|s| s.tokens.len()).sum();
        let mut builder = Self::with_capacity(token_count / 2);

        // Edges never cross sentence boundaries
        for sentence in sentences {
            let ids: Vec<u32> = sentence
                .tokens
                .iter()
                .map(|t| builder.get_or_create_node(t))
                .collect();

            for j in 0..ids.len() {
                for k in (j + 1)..std::cmp::min(j + window_size, ids.len()) {
                    builder.increment_edge(ids[j], ids[k], 1.0);
                }
            }
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by label
    pub fn get_node_id(&self, label: &str) -> Option<u32> {
        self.label_to_id.get(label).copied()
    }

    /// Get the label for a node ID
    pub fn get_label(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.label.as_str())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
