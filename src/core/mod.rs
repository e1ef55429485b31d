pub mod alphabet;
pub mod builtin;
pub mod config;
