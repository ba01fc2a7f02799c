use serde::{Deserialize, Serialize};

use crate::stages::Stage;
use crate::subjects::Subject;

/// A stage + exam-board pairing a user declares during registration, as
/// fetched from the user profile. One per qualification they study or teach.
///
/// Fields stay as wire strings; typed accessors parse on demand so that an
/// unrecognised value degrades to "no match" rather than a deserialise error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub exam_board: Option<String>,
}

impl UserContext {
    pub fn new(stage: &str, exam_board: &str) -> Self {
        Self {
            stage: Some(stage.to_owned()),
            exam_board: Some(exam_board.to_owned()),
        }
    }

    /// The registered stage, if present and recognised.
    pub fn parsed_stage(&self) -> Option<Stage> {
        self.stage.as_deref().and_then(|s| s.parse().ok())
    }

    /// The registered exam board, if present and recognised.
    pub fn parsed_exam_board(&self) -> Option<crate::boards::ExamBoard> {
        self.exam_board.as_deref().and_then(|s| s.parse().ok())
    }
}

/// One stage/exam-board combination a content document is intended for.
/// Only the stage axis participates in context resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceContext {
    #[serde(default)]
    pub stage: Vec<String>,
}

impl AudienceContext {
    pub fn stages(stages: &[&str]) -> Self {
        Self {
            stage: stages.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// The subset of a fetched content document the context resolver consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub audience: Option<Vec<AudienceContext>>,
}

impl ContentDocument {
    /// The distinct, recognised, concrete stages across the whole audience
    /// set, in first-appearance order. Unknown strings and the `all`
    /// sentinel contribute nothing.
    pub fn distinct_stages(&self) -> Vec<Stage> {
        let mut stages = Vec::new();
        for audience in self.audience.iter().flatten() {
            for raw in &audience.stage {
                if let Ok(stage) = raw.parse::<Stage>() {
                    if stage.is_concrete() && !stages.contains(&stage) {
                        stages.push(stage);
                    }
                }
            }
        }
        stages
    }

    /// The document's subject tags, in theming priority order.
    pub fn subject_tags(&self) -> Vec<Subject> {
        Subject::filter_tags(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tags: &[&str], audiences: &[&[&str]]) -> ContentDocument {
        ContentDocument {
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            audience: Some(audiences.iter().map(|a| AudienceContext::stages(a)).collect()),
        }
    }

    #[test]
    fn distinct_stages_dedup_keeps_first_appearance() {
        let doc = doc(&[], &[&["gcse", "a_level"], &["a_level", "university"]]);
        assert_eq!(
            doc.distinct_stages(),
            vec![Stage::Gcse, Stage::ALevel, Stage::University]
        );
    }

    #[test]
    fn distinct_stages_skips_unknown_and_sentinel() {
        let doc = doc(&[], &[&["all", "key_stage_97", "gcse"]]);
        assert_eq!(doc.distinct_stages(), vec![Stage::Gcse]);
    }

    #[test]
    fn no_audience_means_no_stages() {
        let doc = ContentDocument::default();
        assert!(doc.distinct_stages().is_empty());
    }

    #[test]
    fn subject_tags_in_priority_order() {
        let doc = doc(&["maths", "mechanics", "physics"], &[]);
        assert_eq!(doc.subject_tags(), vec![Subject::Physics, Subject::Maths]);
    }

    #[test]
    fn document_deserialises_from_api_shape() {
        let json = r#"{
            "tags": ["physics", "mechanics"],
            "audience": [{"stage": ["gcse"], "examBoard": ["aqa"]}]
        }"#;
        let doc: ContentDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.distinct_stages(), vec![Stage::Gcse]);
        assert_eq!(doc.subject_tags(), vec![Subject::Physics]);
    }

    #[test]
    fn user_context_parses_known_values_only() {
        let uc: UserContext =
            serde_json::from_str(r#"{"stage": "a_level", "examBoard": "aqa"}"#).unwrap();
        assert_eq!(uc.parsed_stage(), Some(Stage::ALevel));
        assert_eq!(uc.parsed_exam_board(), Some(crate::boards::ExamBoard::Aqa));

        let odd = UserContext::new("key_stage_97", "homemade");
        assert_eq!(odd.parsed_stage(), None);
        assert_eq!(odd.parsed_exam_board(), None);
    }
}
