//! Terraform Provider Documentation Linter
//!
//! Checks the documentation of a Terraform Provider checkout.
//!
//! This library provides:
//! - Markdown block reading and frontmatter extraction
//! - Section-by-section contents validation of a single page
//! - Directory layout, file and schema mismatch checks
//! - Configuration management

pub mod check;
pub mod config;
pub mod contents;
pub mod parser;

pub use check::{Check, ErrorReport, RunOptions};
pub use config::Config;
pub use contents::{CheckOptions, ContentsError, Document};
pub use parser::{Block, read_blocks};
