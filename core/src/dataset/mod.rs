pub mod load;
pub mod schema;

pub use load::Dataset;
pub use schema::load_schema_description;
