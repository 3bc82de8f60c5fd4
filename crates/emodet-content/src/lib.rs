//! emodet-content — built-in static content and the config layer.
//!
//! Supplies the default lexicons, the built-in exercise set, and the guided
//! story script, plus the configuration that lets users swap in their own
//! content files.

pub mod config;
pub mod exercises;
pub mod lexicons;
pub mod story;

pub use config::{load_config, load_config_from, EmodetConfig};
pub use exercises::builtin_exercises;
pub use lexicons::default_lexicon;
