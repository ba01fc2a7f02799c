use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::site::Site;
use crate::stages::Stage;

/// An exam board a user context can be registered against.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamBoard {
    Aqa,
    Cie,
    Edexcel,
    Eduqas,
    Ocr,
    Wjec,
    Sqa,
    Ada,
    /// Sentinel: no specific board.
    All,
}

pub const EXAM_BOARDS: [ExamBoard; 9] = [
    ExamBoard::Aqa,
    ExamBoard::Cie,
    ExamBoard::Edexcel,
    ExamBoard::Eduqas,
    ExamBoard::Ocr,
    ExamBoard::Wjec,
    ExamBoard::Sqa,
    ExamBoard::Ada,
    ExamBoard::All,
];

impl ExamBoard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aqa => "aqa",
            Self::Cie => "cie",
            Self::Edexcel => "edexcel",
            Self::Eduqas => "eduqas",
            Self::Ocr => "ocr",
            Self::Wjec => "wjec",
            Self::Sqa => "sqa",
            Self::Ada => "ada",
            Self::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Aqa => "AQA",
            Self::Cie => "CIE",
            Self::Edexcel => "EDEXCEL",
            Self::Eduqas => "EDUQAS",
            Self::Ocr => "OCR",
            Self::Wjec => "WJEC",
            Self::Sqa => "SQA",
            Self::Ada => "Ada CS",
            Self::All => "All exam boards",
        }
    }

    /// Boards offered for a computer-science stage. Stages outside the CS
    /// curriculum have no board options.
    pub fn for_cs_stage(stage: Stage) -> &'static [ExamBoard] {
        match stage {
            Stage::Gcse => &[
                ExamBoard::Aqa,
                ExamBoard::Edexcel,
                ExamBoard::Eduqas,
                ExamBoard::Ocr,
                ExamBoard::Wjec,
            ],
            Stage::ALevel => &[
                ExamBoard::Aqa,
                ExamBoard::Cie,
                ExamBoard::Ocr,
                ExamBoard::Eduqas,
                ExamBoard::Wjec,
            ],
            Stage::ScotlandNational5 | Stage::ScotlandHigher | Stage::ScotlandAdvancedHigher => {
                &[ExamBoard::Sqa]
            }
            Stage::Core | Stage::Advanced | Stage::Post18 => &[ExamBoard::Ada],
            _ => &[],
        }
    }

    /// The board a fresh registration defaults to on each site variant.
    pub fn default_for(site: Site) -> ExamBoard {
        match site {
            Site::Phy => ExamBoard::All,
            Site::Ada => ExamBoard::Ada,
        }
    }
}

impl fmt::Display for ExamBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamBoard {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EXAM_BOARDS
            .iter()
            .find(|board| board.as_str() == s)
            .copied()
            .ok_or_else(|| ParseError::ExamBoard(s.to_owned()))
    }
}
