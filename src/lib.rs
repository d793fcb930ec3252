pub mod config;
pub mod error;
pub mod expression;
pub mod parameter;
pub mod result;
pub mod serialize;
pub mod types;
