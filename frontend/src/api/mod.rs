mod auth;
pub mod client;
mod employees;
mod skills;
pub mod types;

pub use client::*;
pub use types::*;
