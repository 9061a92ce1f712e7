//! GraphAlgo - weighted graph representations and classic graph algorithms
//!
//! This crate provides a single `Graph` abstraction with adjacency-list and
//! adjacency-matrix backends, plus traversal, shortest-path and
//! minimum-spanning-tree algorithms that work against either backend.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;
