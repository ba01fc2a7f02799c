/// Typed parse errors for the string → enum boundary.
/// Resolution logic never surfaces these: an unparseable stage or tag is
/// simply "no match" and falls through to the next rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unrecognised stage: {0}")]
    Stage(String),
    #[error("unrecognised learning stage: {0}")]
    LearningStage(String),
    #[error("unrecognised subject: {0}")]
    Subject(String),
    #[error("unrecognised theme: {0}")]
    Theme(String),
    #[error("unrecognised exam board: {0}")]
    ExamBoard(String),
    #[error("unrecognised site: {0}")]
    Site(String),
}
