//! End-to-end resolution scenarios across navigation sequences.

use isaac_context::{resolve, select_theme, ContextStore, PageContext};
use isaac_core::{AudienceContext, ContentDocument, SiteTheme, Stage, Subject, UserContext};

fn doc(tags: &[&str], audiences: &[&[&str]]) -> ContentDocument {
    ContentDocument {
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        audience: Some(audiences.iter().map(|a| AudienceContext::stages(a)).collect()),
    }
}

#[test]
fn stability_wins_on_both_axes() {
    let previous = PageContext::new(Stage::Gcse, Some(Subject::Physics));
    let users = vec![UserContext::new("a_level", "aqa")];
    let doc = doc(&["physics", "maths"], &[&["gcse", "a_level"]]);

    let resolved = resolve(Some(&previous), Some(&users), Some(&doc));
    assert_eq!(resolved, PageContext::new(Stage::Gcse, Some(Subject::Physics)));
}

#[test]
fn user_preference_applies_when_stage_changes() {
    let previous = PageContext::new(Stage::Gcse, None);
    let users = vec![UserContext::new("a_level", "aqa")];
    let doc = doc(&["maths"], &[&["a_level"]]);

    let resolved = resolve(Some(&previous), Some(&users), Some(&doc));
    assert_eq!(resolved, PageContext::new(Stage::ALevel, Some(Subject::Maths)));
}

#[test]
fn anonymous_user_on_multi_stage_page_sees_all() {
    let doc = doc(&["physics"], &[&["gcse", "a_level", "university"]]);
    let resolved = resolve(None, None, Some(&doc));
    assert_eq!(resolved, PageContext::new(Stage::All, Some(Subject::Physics)));
}

#[test]
fn browsing_session_keeps_stage_across_related_pages() {
    let users = vec![UserContext::new("gcse", "aqa")];
    let store = ContextStore::new();

    // Land on a GCSE-only physics question.
    let first = store.enter_page(Some(&users), Some(&doc(&["physics"], &[&["gcse"]])));
    assert_eq!(first.stage, Stage::Gcse);

    // Navigate to a multi-stage maths page: stage sticks, subject re-themes.
    store.leave_page();
    let second = store.enter_page(
        Some(&users),
        Some(&doc(&["maths"], &[&["gcse", "a_level"]])),
    );
    assert_eq!(second, PageContext::new(Stage::Gcse, Some(Subject::Maths)));

    // Then an a_level-only page: stage finally changes.
    store.leave_page();
    let third = store.enter_page(
        Some(&users),
        Some(&doc(&["maths", "chemistry"], &[&["a_level"]])),
    );
    assert_eq!(third.stage, Stage::ALevel);
    // maths carried over from the previous page.
    assert_eq!(third.subject, Some(Subject::Maths));
}

#[test]
fn theme_selection_matches_resolution_examples() {
    let physics_maths: Vec<String> = vec!["physics".into(), "maths".into()];
    assert_eq!(
        select_theme(&|| Some(SiteTheme::Physics), &physics_maths),
        SiteTheme::Physics
    );

    let maths_biology: Vec<String> = vec!["maths".into(), "biology".into()];
    assert_eq!(
        select_theme(&|| Some(SiteTheme::Neutral), &maths_biology),
        SiteTheme::Maths
    );
}

#[test]
fn documents_straight_from_json() {
    let doc: ContentDocument = serde_json::from_str(
        r#"{
            "tags": ["chemistry", "biology", "periodic_table"],
            "audience": [
                {"stage": ["a_level"]},
                {"stage": ["a_level", "university"]}
            ]
        }"#,
    )
    .unwrap();

    let users: Vec<UserContext> =
        serde_json::from_str(r#"[{"stage": "university", "examBoard": "all"}]"#).unwrap();

    let resolved = resolve(None, Some(&users), Some(&doc));
    assert_eq!(resolved, PageContext::new(Stage::University, Some(Subject::Chemistry)));
}
