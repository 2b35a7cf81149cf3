pub mod graphql;
pub mod language;
pub mod problem;

pub use graphql::{GraphQlRequest, GraphQlResponse, QuestionNode};
pub use language::Language;
pub use problem::ProblemRecord;
