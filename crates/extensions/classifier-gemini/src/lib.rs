//! Gemini-backed conversation classifier.
//!
//! Sends a scraped transcript to the Gemini `generateContent` API with a
//! structured-output schema and returns a 300-word summary plus an intent
//! classification.

mod classifier;
mod client;
mod types;

pub use classifier::GeminiClassifier;
pub use client::GeminiClient;
pub use types::*;
