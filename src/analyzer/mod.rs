//! Analyzer module - speech grading engine

pub mod criteria;
pub mod engine;
pub mod scoring;

pub use engine::ScoreEngine;
pub use scoring::ScoreCalculator;
