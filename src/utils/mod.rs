//! Utility modules for the wiki generator.

pub mod files;
pub mod minify;
