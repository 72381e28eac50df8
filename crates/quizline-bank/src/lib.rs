//! Quizline — question bank.
//!
//! Responsible for the immutable question records, the ordered bank a
//! session walks through, and loading banks from YAML or JSON files.

pub mod application;
pub mod domain;

pub use application::defaults::default_bank;
pub use application::loader::{BankFormat, load_bank, parse_bank};
pub use domain::bank::QuestionBank;
pub use domain::question::Question;
