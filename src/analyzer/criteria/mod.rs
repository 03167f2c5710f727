//! Scoring criteria for the self-introduction rubric
//!
//! Each module scores one criterion (the keyword module scores two). Every
//! analyzer is a pure function of the transcript (plus duration or a
//! capability provider where noted) and returns a clamped sub-score with
//! feedback; no analyzer depends on another's output.

pub mod filler_words;
pub mod flow;
pub mod grammar;
pub mod keywords;
pub mod salutation;
pub mod sentiment;
pub mod speech_rate;
pub mod vocabulary;
