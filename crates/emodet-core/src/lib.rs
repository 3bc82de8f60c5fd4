//! emodet-core — classifier, quiz state machine, and content parsing.
//!
//! This crate defines the fundamental data model, the rule-based sentiment
//! classifier, and the quiz evaluation logic that the rest of emodet builds on.

pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod report;
