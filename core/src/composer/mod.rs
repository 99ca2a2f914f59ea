pub mod compose;
pub mod prompt;

pub use compose::Composer;
