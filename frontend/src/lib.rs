pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod state;
pub mod utils;
