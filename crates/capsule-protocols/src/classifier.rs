//! Summarize-and-classify seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;
use crate::intent::Intent;

/// Structured result of the remote summarize-and-classify call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Bounded-length summary (target ~300 words).
    pub summary: String,
    /// One of the closed intent set, or [`Intent::Unknown`] when the response
    /// omitted the field.
    pub intent: Intent,
}

/// Remote summarize-and-classify service.
///
/// One request, one structured response; no retry policy. Any network,
/// parse, or schema failure surfaces as a [`ClassifierError`].
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, context: &str) -> Result<ClassificationResult, ClassifierError>;
}
