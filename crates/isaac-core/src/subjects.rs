use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::stages::LearningStage;

/// One of the four themed subjects.
///
/// Declaration order is the theming priority: where a document is tagged with
/// several subjects and no other rule applies, the earliest wins.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Physics,
    Maths,
    Chemistry,
    Biology,
}

/// Subjects in theming priority order.
pub const SUBJECT_PRIORITY: [Subject; 4] =
    [Subject::Physics, Subject::Maths, Subject::Chemistry, Subject::Biology];

impl Subject {
    /// The tag string denoting this subject on content documents.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Physics => "physics",
            Self::Maths => "maths",
            Self::Chemistry => "chemistry",
            Self::Biology => "biology",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Physics => "Physics",
            Self::Maths => "Maths",
            Self::Chemistry => "Chemistry",
            Self::Biology => "Biology",
        }
    }

    /// Filter arbitrary content tags down to subjects, in priority order.
    ///
    /// Iterating the priority list rather than the tags is what preserves the
    /// precedence ordering for callers taking the first element.
    pub fn filter_tags<S: AsRef<str>>(tags: &[S]) -> Vec<Subject> {
        SUBJECT_PRIORITY
            .into_iter()
            .filter(|subject| tags.iter().any(|t| t.as_ref() == subject.tag()))
            .collect()
    }

    /// The learning stages the navigation exposes for this subject.
    pub fn valid_stages(&self) -> &'static [LearningStage] {
        match self {
            Self::Physics => &[
                LearningStage::ElevenToFourteen,
                LearningStage::Gcse,
                LearningStage::ALevel,
                LearningStage::University,
            ],
            Self::Maths | Self::Chemistry => &[
                LearningStage::Gcse,
                LearningStage::ALevel,
                LearningStage::University,
            ],
            Self::Biology => &[LearningStage::ALevel],
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Subject {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUBJECT_PRIORITY
            .iter()
            .find(|subject| subject.tag() == s)
            .copied()
            .ok_or_else(|| ParseError::Subject(s.to_owned()))
    }
}

impl LearningStage {
    /// Subjects taught at this learning stage, in priority order. The
    /// inverse of [`Subject::valid_stages`].
    pub fn subjects(&self) -> Vec<Subject> {
        SUBJECT_PRIORITY
            .into_iter()
            .filter(|subject| subject.valid_stages().contains(self))
            .collect()
    }
}

/// A display theme: a subject, or `neutral` when none applies.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteTheme {
    Physics,
    Maths,
    Chemistry,
    Biology,
    #[default]
    Neutral,
}

impl SiteTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physics => "physics",
            Self::Maths => "maths",
            Self::Chemistry => "chemistry",
            Self::Biology => "biology",
            Self::Neutral => "neutral",
        }
    }

    /// The subject behind this theme, if it is not neutral.
    pub fn subject(&self) -> Option<Subject> {
        match self {
            Self::Physics => Some(Subject::Physics),
            Self::Maths => Some(Subject::Maths),
            Self::Chemistry => Some(Subject::Chemistry),
            Self::Biology => Some(Subject::Biology),
            Self::Neutral => None,
        }
    }
}

impl From<Subject> for SiteTheme {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Physics => Self::Physics,
            Subject::Maths => Self::Maths,
            Subject::Chemistry => Self::Chemistry,
            Subject::Biology => Self::Biology,
        }
    }
}

impl fmt::Display for SiteTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteTheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutral" => Ok(Self::Neutral),
            _ => s
                .parse::<Subject>()
                .map(Self::from)
                .map_err(|_| ParseError::Theme(s.to_owned())),
        }
    }
}
