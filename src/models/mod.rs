pub mod answer_key;
pub mod loaders;
pub mod question;
pub mod verdict;

pub use answer_key::AnswerKey;
pub use loaders::load_questions;
pub use question::{Choice, Question};
pub use verdict::{ProviderResponse, ScoreSummary, Verdict, VerdictKind};
