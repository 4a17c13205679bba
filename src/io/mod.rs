//! Input/Output operations
//!
//! This module handles logging setup and writing the generated files.

mod files;
mod output;

pub use files::{append_file, create_dir, write_file, write_script};
pub use output::setup_output;
