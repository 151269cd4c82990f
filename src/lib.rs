//! CAH Ollama - a Cards Against Humanity table where a local model plays
//!
//! The model acts as a player (picking white cards from a hand to answer a
//! black card) or as a judge (picking the funniest submission). Model output is
//! free text; everything it says is extracted and validated before the hand is
//! touched.

pub mod client;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod loader;
pub mod logging;
pub mod prompt;
pub mod shell;

pub use error::{CahError, Result};
