pub mod catalog;
pub mod load;
pub mod query;
