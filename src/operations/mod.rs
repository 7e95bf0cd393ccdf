pub mod adjacency;
pub mod creation;
pub mod query;
