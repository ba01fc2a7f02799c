//! Page-context inference for the Isaac platform.
//!
//! On every navigation the client derives an "active" subject/stage context
//! from three inputs: the previous page's context, the signed-in user's
//! registered learning contexts, and the audience/tag metadata of the newly
//! loaded content document. That context drives theming and navigation
//! filtering.
//!
//! The derivation is pure and total: every rule has a defined fallback
//! (`all` / `neutral` / no subject), so malformed input degrades to "no
//! match" and can never fail. [`resolver::resolve`] is the entry point;
//! [`store::ContextStore`] is the thin stateful shell that feeds each
//! navigation's result back in as the next navigation's previous context.

pub mod human;
pub mod resolver;
pub mod store;
pub mod theme;
pub mod url;

pub use resolver::{resolve, PageContext, Resolution, StageRule, SubjectRule};
pub use store::ContextStore;
pub use theme::{select_theme, theme_from_tags, ThemeAncestry};
pub use url::UrlPageContext;
