pub mod config;
pub mod engine;
pub mod menubar;
pub mod renderer;
pub mod runtime;
pub mod types;
