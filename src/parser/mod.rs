//! Markdown Parser
//!
//! Thin layer over `pulldown-cmark` that produces the flat, top-level block
//! stream the section locator works from, plus frontmatter extraction.

pub mod ast;
pub mod blocks;
pub mod frontmatter;

pub use ast::{Block, FencedCodeBlock, Heading, List, ListItem, Paragraph};
pub use blocks::read_blocks;
pub use frontmatter::extract_frontmatter;
