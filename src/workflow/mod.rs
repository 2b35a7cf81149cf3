pub mod problem_flow;

pub use problem_flow::{FlowOutcome, ProblemFlow, ProblemSource};
