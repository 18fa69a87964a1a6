pub mod command;
pub mod config;
pub mod dirs;
pub mod env_var;
