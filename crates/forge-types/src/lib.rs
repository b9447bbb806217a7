pub mod project;
pub mod chat;
pub mod notice;
pub mod event;
pub mod config;
pub mod error;


pub use error::ForgeError;
pub type Result<T> = std::result::Result<T, ForgeError>;
