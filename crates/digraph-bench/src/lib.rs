//! Random graph generator and benchmark utilities for digraph.
//!
//! This crate provides deterministic generation of weighted directed graphs
//! for benchmarking and property-based testing of `digraph-core`.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_file, generate_graph, generate_json};
