use serde::{Deserialize, Serialize};

use isaac_core::{LearningStage, Subject};

/// A page context derived from the URL path on subject-scoped routes, where
/// the URL is the source of truth (`/physics/a_level/...`).
///
/// URL routes address the coarse [`LearningStage`] grouping rather than raw
/// API stages, so this is a distinct type from the audience-derived
/// [`PageContext`](crate::PageContext).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlPageContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<LearningStage>,
}

impl UrlPageContext {
    pub fn new(subject: Option<Subject>, stage: Option<LearningStage>) -> Self {
        Self { subject, stage }
    }

    /// Parse a context from a URL path. The first two non-empty segments are
    /// tried as subject and learning stage; anything unrecognised leaves
    /// that axis undefined.
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let subject = segments.next().and_then(|s| s.parse().ok());
        let stage = segments.next().and_then(|s| s.parse().ok());
        Self { subject, stage }
    }

    /// Either axis is defined.
    pub fn is_defined(&self) -> bool {
        self.subject.is_some() || self.stage.is_some()
    }

    /// Both axes are defined.
    pub fn is_fully_defined(&self) -> bool {
        self.subject.is_some() && self.stage.is_some()
    }

    /// The context names a single stage (and a subject to show it under).
    pub fn is_single_stage(&self) -> bool {
        self.is_fully_defined()
    }

    /// Whether this subject/stage pairing is one the navigation exposes.
    pub fn is_valid_pair(&self) -> bool {
        match (self.subject, self.stage) {
            (Some(subject), Some(stage)) => subject.valid_stages().contains(&stage),
            _ => false,
        }
    }
}
