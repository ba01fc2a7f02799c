use parking_lot::RwLock;

use isaac_core::{ContentDocument, UserContext};

use crate::resolver::{self, PageContext};

#[derive(Debug, Default)]
struct StoreState {
    current: Option<PageContext>,
    previous: Option<PageContext>,
}

/// Holds the current and previous page contexts across navigations.
///
/// This is the explicit-state replacement for a global store slice: all
/// logic lives in the pure [`resolver`], and the store only feeds each
/// navigation's result back in as the next navigation's previous context.
#[derive(Debug, Default)]
pub struct ContextStore {
    state: RwLock<StoreState>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve and record the context for a newly loaded page.
    pub fn enter_page(
        &self,
        user_contexts: Option<&[UserContext]>,
        doc: Option<&ContentDocument>,
    ) -> PageContext {
        let mut state = self.state.write();
        let resolved = resolver::resolve(state.previous.as_ref(), user_contexts, doc);
        state.current = Some(resolved);
        resolved
    }

    /// Record leaving the current page: it becomes the previous context for
    /// the next navigation.
    pub fn leave_page(&self) {
        let mut state = self.state.write();
        state.previous = state.current.take();
        tracing::debug!(previous = ?state.previous, "left page");
    }

    pub fn current(&self) -> Option<PageContext> {
        self.state.read().current
    }

    pub fn previous(&self) -> Option<PageContext> {
        self.state.read().previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isaac_core::{AudienceContext, Stage, Subject};

    fn doc(tags: &[&str], stages: &[&str]) -> ContentDocument {
        ContentDocument {
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            audience: Some(vec![AudienceContext::stages(stages)]),
        }
    }

    #[test]
    fn enter_page_records_current() {
        let store = ContextStore::new();
        let resolved = store.enter_page(None, Some(&doc(&["physics"], &["gcse"])));
        assert_eq!(resolved, PageContext::new(Stage::Gcse, Some(Subject::Physics)));
        assert_eq!(store.current(), Some(resolved));
        assert_eq!(store.previous(), None);
    }

    #[test]
    fn departed_context_feeds_next_navigation() {
        let store = ContextStore::new();
        store.enter_page(None, Some(&doc(&["physics"], &["gcse"])));
        store.leave_page();
        assert_eq!(store.current(), None);

        // gcse is still in the new audience, so stability keeps it even
        // though the document is multi-stage.
        let next = store.enter_page(None, Some(&doc(&["physics"], &["gcse", "a_level"])));
        assert_eq!(next.stage, Stage::Gcse);
    }

    #[test]
    fn context_does_not_persist_across_two_departures() {
        let store = ContextStore::new();
        store.enter_page(None, Some(&doc(&["physics"], &["gcse"])));
        store.leave_page();
        store.leave_page();
        assert_eq!(store.previous(), None);

        let next = store.enter_page(None, Some(&doc(&[], &["gcse", "a_level"])));
        assert_eq!(next.stage, Stage::All);
    }
}
