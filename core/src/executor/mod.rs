pub mod rows;
pub mod run;

pub use rows::{batches_to_rows, Row};
pub use run::execute;
