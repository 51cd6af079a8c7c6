//! Acceptance case files
//!
//! Cases live in a YAML document of the form:
//!
//! ```yaml
//! cases:
//!   - name: deadline
//!     question: 申請の締切はいつですか？
//!     expected:
//!       type: answer            # or "fallback"
//!       must_include: ["3月31日"]
//!       must_not_include: []
//! ```

mod loader;

pub use loader::{AcceptanceSuiteLoader, SuiteLoadError};
