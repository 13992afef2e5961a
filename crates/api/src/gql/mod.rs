pub mod domains;
pub mod error;
pub mod mutations;
pub mod queries;
pub mod schema;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;
pub use schema::build_schema;
