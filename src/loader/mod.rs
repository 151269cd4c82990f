//! Loaders for on-disk game resources
//!
//! Word lists (newline-delimited card text) and prompt templates.

pub mod template;
pub mod word_list;

pub use template::TemplateSet;
pub use word_list::WordListLoader;
