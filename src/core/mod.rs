pub mod error;
pub mod normalize;
pub mod resolve;
pub mod text;
pub mod types;
