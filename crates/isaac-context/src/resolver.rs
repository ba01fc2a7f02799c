use serde::{Deserialize, Serialize};

use isaac_core::{ContentDocument, Stage, Subject, UserContext};

/// The active subject/stage context for the page being displayed.
///
/// Immutable value object: recomputed from scratch on each navigation, held
/// in memory only for the duration of that page view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub stage: Stage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
}

impl PageContext {
    pub fn new(stage: Stage, subject: Option<Subject>) -> Self {
        Self { stage, subject }
    }
}

impl Default for PageContext {
    /// The unthemed multi-stage view.
    fn default() -> Self {
        Self {
            stage: Stage::All,
            subject: None,
        }
    }
}

/// Which stage rule produced the resolved stage.
///
/// Kept as an explicit tagged variant so the precedence order is auditable
/// and each rule independently testable, rather than buried in a chain of
/// boolean expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageRule {
    /// The previous page's stage is still in the new document's audience.
    PreviousStage,
    /// A registered user context's stage matched the audience; the first
    /// match in the user's own list order wins.
    UserContext,
    /// The audience reduced to exactly one distinct stage.
    SingleAudienceStage,
    /// Nothing matched; fell back to `all`.
    Default,
}

/// Which subject rule produced the resolved subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectRule {
    /// The previous page's subject is still among the new document's tags.
    PreviousSubject,
    /// Highest-priority subject tag on the document.
    TagPriority,
    /// No subject tag; neutral theming.
    Default,
}

/// A resolved context together with the rule that fired on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub context: PageContext,
    pub stage_rule: StageRule,
    pub subject_rule: SubjectRule,
}

/// Compute the page context for a newly loaded document.
///
/// Pure and total: absent or malformed inputs fall through to the default
/// branch (`all` stage, no subject). Stage and subject resolve independently,
/// both preferring stability — if the previous context still applies to the
/// new document, it is kept even where a different rule would pick another
/// value.
pub fn resolve(
    previous: Option<&PageContext>,
    user_contexts: Option<&[UserContext]>,
    doc: Option<&ContentDocument>,
) -> PageContext {
    resolve_explained(previous, user_contexts, doc).context
}

/// As [`resolve`], but reporting which rule fired on each axis.
pub fn resolve_explained(
    previous: Option<&PageContext>,
    user_contexts: Option<&[UserContext]>,
    doc: Option<&ContentDocument>,
) -> Resolution {
    let audience_stages = doc.map(ContentDocument::distinct_stages).unwrap_or_default();

    let (stage, stage_rule) = resolve_stage(previous, user_contexts, &audience_stages);
    let (subject, subject_rule) = resolve_subject(previous, doc);

    tracing::debug!(
        stage = %stage,
        stage_rule = ?stage_rule,
        subject = ?subject,
        subject_rule = ?subject_rule,
        "resolved page context"
    );

    Resolution {
        context: PageContext { stage, subject },
        stage_rule,
        subject_rule,
    }
}

fn resolve_stage(
    previous: Option<&PageContext>,
    user_contexts: Option<&[UserContext]>,
    audience_stages: &[Stage],
) -> (Stage, StageRule) {
    // Stability: the stage hasn't actually changed, so don't re-theme.
    if let Some(prev) = previous {
        if prev.stage.is_concrete() && audience_stages.contains(&prev.stage) {
            return (prev.stage, StageRule::PreviousStage);
        }
    }

    // User preference over document default: first match in the user's own
    // list order. This can land on a stage the single-stage rule below would
    // not have chosen, which is intended.
    if let Some(contexts) = user_contexts {
        let matched = contexts
            .iter()
            .filter_map(UserContext::parsed_stage)
            .filter(Stage::is_concrete)
            .find(|stage| audience_stages.contains(stage));
        if let Some(stage) = matched {
            return (stage, StageRule::UserContext);
        }
    }

    // Unambiguous fallback: the document targets exactly one stage.
    if let [only] = audience_stages {
        return (*only, StageRule::SingleAudienceStage);
    }

    (Stage::All, StageRule::Default)
}

fn resolve_subject(
    previous: Option<&PageContext>,
    doc: Option<&ContentDocument>,
) -> (Option<Subject>, SubjectRule) {
    let Some(doc) = doc else {
        return (None, SubjectRule::Default);
    };

    if let Some(prev_subject) = previous.and_then(|p| p.subject) {
        if doc.tags.iter().any(|t| t == prev_subject.tag()) {
            return (Some(prev_subject), SubjectRule::PreviousSubject);
        }
    }

    if let Some(first) = doc.subject_tags().first() {
        return (Some(*first), SubjectRule::TagPriority);
    }

    (None, SubjectRule::Default)
}
