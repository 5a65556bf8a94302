pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;
