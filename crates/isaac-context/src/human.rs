use crate::url::UrlPageContext;

/// Human-readable label for a URL-derived context, e.g. "GCSE Physics".
///
/// The stage prefix only appears when the context names a single stage with
/// a subject to pair it with; a subject-only context is just the subject
/// label, and an empty context yields an empty string.
pub fn human_context(context: &UrlPageContext) -> String {
    let stage = context
        .stage
        .filter(|_| context.is_single_stage())
        .map(|s| format!("{} ", s.label()))
        .unwrap_or_default();
    let subject = context.subject.map(|s| s.label()).unwrap_or_default();
    format!("{stage}{subject}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use isaac_core::{LearningStage, Subject};

    #[test]
    fn full_context_has_stage_prefix() {
        let ctx = UrlPageContext::new(Some(Subject::Physics), Some(LearningStage::Gcse));
        assert_eq!(human_context(&ctx), "GCSE Physics");
    }

    #[test]
    fn subject_only_context_is_just_the_subject() {
        let ctx = UrlPageContext::new(Some(Subject::Chemistry), None);
        assert_eq!(human_context(&ctx), "Chemistry");
    }

    #[test]
    fn stage_only_context_has_no_label() {
        // A stage with no subject is not a single-stage context, so neither
        // part renders.
        let ctx = UrlPageContext::new(None, Some(LearningStage::ALevel));
        assert_eq!(human_context(&ctx), "");
    }

    #[test]
    fn eleven_to_fourteen_label() {
        let ctx = UrlPageContext::new(Some(Subject::Physics), Some(LearningStage::ElevenToFourteen));
        assert_eq!(human_context(&ctx), "11-14 Physics");
    }
}
