use isaac_core::{SiteTheme, Subject};

/// Read-only lookup for the nearest enclosing themed ancestor.
///
/// In the rendering layer this is a DOM ancestry query; here it is an
/// injected dependency so theme selection stays pure. Any closure returning
/// the ancestor theme works.
pub trait ThemeAncestry {
    fn current_theme(&self) -> Option<SiteTheme>;
}

impl<F> ThemeAncestry for F
where
    F: Fn() -> Option<SiteTheme>,
{
    fn current_theme(&self) -> Option<SiteTheme> {
        self()
    }
}

/// Pick the display theme for a content element from its tags and the theme
/// of its nearest themed ancestor.
///
/// A non-neutral ancestor theme wins whenever it is among the element's own
/// subject tags: inside a maths context, every maths-and-x element stays
/// themed as maths. Otherwise the highest-priority subject tag wins
/// (physics > maths > chemistry > biology), and with no subject tags at all
/// the element renders neutral.
pub fn select_theme(ancestry: &dyn ThemeAncestry, tags: &[String]) -> SiteTheme {
    let subject_tags = Subject::filter_tags(tags);

    if let Some(current) = ancestry.current_theme() {
        if let Some(subject) = current.subject() {
            if subject_tags.contains(&subject) {
                return current;
            }
        }
    }

    subject_tags
        .first()
        .map(|subject| SiteTheme::from(*subject))
        .unwrap_or(SiteTheme::Neutral)
}

/// Theme from tags alone, for elements with no themed ancestry
/// (listings, search results).
pub fn theme_from_tags(tags: &[String]) -> SiteTheme {
    Subject::filter_tags(tags)
        .first()
        .map(|subject| SiteTheme::from(*subject))
        .unwrap_or(SiteTheme::Neutral)
}
