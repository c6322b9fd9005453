//! Core text modules
//!
//! Sanitization, chunking and translation of post text ahead of synthesis.

pub mod sanitizer;
pub mod text_processor;
pub mod translate;

pub use sanitizer::{sanitize_text, sanitize_thread_id, split_text, thread_audio_dir};
pub use text_processor::TextProcessor;
pub use translate::{GoogleTranslator, Translator};
