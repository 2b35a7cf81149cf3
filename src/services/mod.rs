pub mod index_writer;
pub mod scaffolder;
pub mod slug;

pub use index_writer::{IndexUpdate, IndexWriter};
pub use scaffolder::{ProblemScaffolder, ScaffoldReport};
pub use slug::extract_slug;
