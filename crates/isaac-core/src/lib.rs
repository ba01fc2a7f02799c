//! Core domain types for the Isaac page-context model.
//!
//! Everything here is a plain value type mirroring the platform's wire
//! vocabulary: academic stages, subjects, exam boards, and the subset of a
//! content document the context resolver consumes. All enums use their
//! snake_case API form on the wire; unrecognised strings parse to a typed
//! [`ParseError`] which callers treat as "no match", never as a failure.

pub mod boards;
pub mod content;
pub mod error;
pub mod site;
pub mod stages;
pub mod subjects;

pub use boards::ExamBoard;
pub use content::{AudienceContext, ContentDocument, UserContext};
pub use error::ParseError;
pub use site::Site;
pub use stages::{LearningStage, Stage};
pub use subjects::{SiteTheme, Subject};
