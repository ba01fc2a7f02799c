use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::site::Site;

/// An academic stage as it appears on the API, plus the `all` sentinel.
///
/// The set is the union of both site variants' stages; which subset a given
/// deployment actually offers comes from [`Stage::for_site`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[serde(rename = "year_7_and_8")]
    Year7And8,
    #[serde(rename = "year_9")]
    Year9,
    Gcse,
    ALevel,
    FurtherA,
    University,
    #[serde(rename = "scotland_national_5")]
    ScotlandNational5,
    ScotlandHigher,
    ScotlandAdvancedHigher,
    Core,
    Advanced,
    #[serde(rename = "post_18")]
    Post18,
    /// Sentinel: no single stage could be determined (unthemed/multi-stage view).
    All,
}

/// Canonical declaration order, `all` last. Used for sorting.
pub const STAGES: [Stage; 13] = [
    Stage::Year7And8,
    Stage::Year9,
    Stage::Gcse,
    Stage::ALevel,
    Stage::FurtherA,
    Stage::University,
    Stage::ScotlandNational5,
    Stage::ScotlandHigher,
    Stage::ScotlandAdvancedHigher,
    Stage::Core,
    Stage::Advanced,
    Stage::Post18,
    Stage::All,
];

const STAGES_PHY: [Stage; 6] = [
    Stage::Year7And8,
    Stage::Year9,
    Stage::Gcse,
    Stage::ALevel,
    Stage::FurtherA,
    Stage::University,
];

const STAGES_ADA: [Stage; 8] = [
    Stage::Gcse,
    Stage::ALevel,
    Stage::ScotlandNational5,
    Stage::ScotlandHigher,
    Stage::ScotlandAdvancedHigher,
    Stage::Core,
    Stage::Advanced,
    Stage::Post18,
];

impl Stage {
    /// The snake_case API form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year7And8 => "year_7_and_8",
            Self::Year9 => "year_9",
            Self::Gcse => "gcse",
            Self::ALevel => "a_level",
            Self::FurtherA => "further_a",
            Self::University => "university",
            Self::ScotlandNational5 => "scotland_national_5",
            Self::ScotlandHigher => "scotland_higher",
            Self::ScotlandAdvancedHigher => "scotland_advanced_higher",
            Self::Core => "core",
            Self::Advanced => "advanced",
            Self::Post18 => "post_18",
            Self::All => "all",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Year7And8 => "Year 7&8",
            Self::Year9 => "Year 9",
            Self::Gcse => "GCSE",
            Self::ALevel => "A Level",
            Self::FurtherA => "Further A",
            Self::University => "University",
            Self::ScotlandNational5 => "N5",
            Self::ScotlandHigher => "Higher",
            Self::ScotlandAdvancedHigher => "Adv Higher",
            Self::Core => "Core",
            Self::Advanced => "Advanced",
            Self::Post18 => "Post-18",
            Self::All => "All stages",
        }
    }

    /// Whether this is a concrete stage (anything but the `all` sentinel).
    pub fn is_concrete(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// The coarse display grouping this stage belongs to. `all` has none.
    pub fn learning_stage(&self) -> Option<LearningStage> {
        match self {
            Self::Year7And8 | Self::Year9 => Some(LearningStage::ElevenToFourteen),
            Self::Gcse | Self::ScotlandNational5 | Self::Core => Some(LearningStage::Gcse),
            Self::ALevel
            | Self::FurtherA
            | Self::ScotlandHigher
            | Self::ScotlandAdvancedHigher
            | Self::Advanced => Some(LearningStage::ALevel),
            Self::University | Self::Post18 => Some(LearningStage::University),
            Self::All => None,
        }
    }

    /// The concrete stages a site variant offers, in display order.
    pub fn for_site(site: Site) -> &'static [Stage] {
        match site {
            Site::Phy => &STAGES_PHY,
            Site::Ada => &STAGES_ADA,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STAGES
            .iter()
            .find(|stage| stage.as_str() == s)
            .copied()
            .ok_or_else(|| ParseError::Stage(s.to_owned()))
    }
}

/// A site's stage options in display order, with the `all` sentinel last.
pub fn stages_ordered(site: Site) -> Vec<Stage> {
    let mut stages = Stage::for_site(site).to_vec();
    stages.push(Stage::All);
    stages
}

/// Sort stages into canonical order (`all` last). Stable for duplicates.
pub fn sort_stages(stages: &mut [Stage]) {
    stages.sort_by_key(|s| STAGES.iter().position(|c| c == s));
}

/// The coarse stage grouping used for theming and navigation
/// (several API stages collapse into one of these).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStage {
    #[serde(rename = "11_14")]
    ElevenToFourteen,
    Gcse,
    ALevel,
    University,
}

/// All learning stages, in display order.
pub const LEARNING_STAGES: [LearningStage; 4] = [
    LearningStage::ElevenToFourteen,
    LearningStage::Gcse,
    LearningStage::ALevel,
    LearningStage::University,
];

impl LearningStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ElevenToFourteen => "11_14",
            Self::Gcse => "gcse",
            Self::ALevel => "a_level",
            Self::University => "university",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ElevenToFourteen => "11-14",
            Self::Gcse => "GCSE",
            Self::ALevel => "A Level",
            Self::University => "University",
        }
    }

    /// The concrete API stages that collapse into this grouping.
    pub fn stages(&self) -> &'static [Stage] {
        match self {
            Self::ElevenToFourteen => &[Stage::Year7And8, Stage::Year9],
            Self::Gcse => &[Stage::Gcse, Stage::ScotlandNational5, Stage::Core],
            Self::ALevel => &[
                Stage::ALevel,
                Stage::FurtherA,
                Stage::ScotlandHigher,
                Stage::ScotlandAdvancedHigher,
                Stage::Advanced,
            ],
            Self::University => &[Stage::University, Stage::Post18],
        }
    }
}

impl fmt::Display for LearningStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LEARNING_STAGES
            .iter()
            .find(|stage| stage.as_str() == s)
            .copied()
            .ok_or_else(|| ParseError::LearningStage(s.to_owned()))
    }
}
