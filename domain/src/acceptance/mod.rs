//! Acceptance cases checked against a live answer server.
//!
//! A case pairs a question with the expected answer type (a regular answer
//! or a fallback) and substring constraints on the answer text.

mod case;
mod evaluation;

pub use case::{AcceptanceCase, Expected, ExpectedKind};
pub use evaluation::{CaseVerdict, evaluate};
