pub mod query;
pub mod render;
pub mod session;
