//! Block-level view of a markdown document
//!
//! Plain data types for the top-level blocks of a page. No section or
//! validation logic lives here.

use std::ops::Range;

/// A top-level block of a markdown document
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    FencedCodeBlock(FencedCodeBlock),
    List(List),
}

/// An ATX or setext heading
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// Heading level, 1 through 6
    pub level: u8,
    /// Inline text with markup removed
    pub text: String,
    /// Byte range of the heading in the source
    pub span: Range<usize>,
}

/// A paragraph outside of any container block
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub span: Range<usize>,
}

/// A fenced code block (```lang ... ```)
#[derive(Debug, Clone, PartialEq)]
pub struct FencedCodeBlock {
    /// First word of the info string, empty when absent
    pub language: String,
    /// Raw code, including the trailing newline of the last line
    pub body: String,
    pub span: Range<usize>,
}

/// A bullet or ordered list
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub items: Vec<ListItem>,
    pub span: Range<usize>,
}

/// A single list item
///
/// `text` keeps code spans wrapped in backticks so that schema attribute
/// names (`` `name` - (Optional) ...``) can be recognized. Text of lists
/// nested inside the item is not included.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub text: String,
    pub span: Range<usize>,
}

impl Block {
    /// Byte range of the block in the source
    pub fn span(&self) -> &Range<usize> {
        match self {
            Block::Heading(h) => &h.span,
            Block::Paragraph(p) => &p.span,
            Block::FencedCodeBlock(c) => &c.span,
            Block::List(l) => &l.span,
        }
    }
}
