pub mod actuators;
pub mod config;
pub mod infer;
pub mod prompts;
pub mod service;
