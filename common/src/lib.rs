pub mod config;
pub mod editor;
pub mod games;
pub mod logger;
