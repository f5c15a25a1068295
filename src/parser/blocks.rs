//! Markdown block reader
//!
//! Walks the `pulldown-cmark` event stream and keeps only what the section
//! locator needs: top-level headings, paragraphs, fenced code blocks and
//! lists, each with its source span. Anything nested inside another
//! container (block quotes, list items, tables) is folded into its parent
//! or dropped.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::parser::ast::{Block, FencedCodeBlock, Heading, List, ListItem, Paragraph};

/// Block currently being collected at the top level
enum Collector {
    Heading {
        level: u8,
        text: String,
        start: usize,
    },
    Paragraph {
        text: String,
        start: usize,
    },
    Code {
        language: String,
        body: String,
        start: usize,
    },
    List {
        items: Vec<ListItem>,
        current: Option<(String, usize)>,
        nested_lists: usize,
        /// Inside a code block nested in an item
        in_code_block: bool,
        start: usize,
    },
    /// Top-level block we do not model (block quote, table, html, frontmatter)
    Skip,
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Read the top-level blocks of a markdown document in source order
pub fn read_blocks(source: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut depth = 0usize;
    let mut collector: Option<Collector> = None;

    for (event, range) in Parser::new_ext(source, parser_options()).into_offset_iter() {
        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    collector = Some(start_collector(&tag, range.start));
                } else if let Some(c) = collector.as_mut() {
                    nested_start(c, &tag, range.start);
                }
                depth += 1;
            }
            Event::End(tag_end) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(block) = collector.take().and_then(|c| finish(c, range.end)) {
                        blocks.push(block);
                    }
                } else if let Some(c) = collector.as_mut() {
                    nested_end(c, &tag_end, range.end);
                }
            }
            Event::Text(text) => push_text(collector.as_mut(), &text),
            Event::Code(code) => push_code(collector.as_mut(), &code),
            Event::SoftBreak | Event::HardBreak => push_break(collector.as_mut()),
            _ => {}
        }
    }

    blocks
}

fn start_collector(tag: &Tag<'_>, start: usize) -> Collector {
    match tag {
        Tag::Heading { level, .. } => Collector::Heading {
            level: *level as u8,
            text: String::new(),
            start,
        },
        Tag::Paragraph => Collector::Paragraph {
            text: String::new(),
            start,
        },
        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => Collector::Code {
            language: info.split_whitespace().next().unwrap_or("").to_string(),
            body: String::new(),
            start,
        },
        Tag::List(_) => Collector::List {
            items: Vec::new(),
            current: None,
            nested_lists: 0,
            in_code_block: false,
            start,
        },
        _ => Collector::Skip,
    }
}

fn nested_start(collector: &mut Collector, tag: &Tag<'_>, start: usize) {
    if let Collector::List {
        current,
        nested_lists,
        in_code_block,
        ..
    } = collector
    {
        match tag {
            Tag::Item if current.is_none() => *current = Some((String::new(), start)),
            Tag::List(_) => *nested_lists += 1,
            Tag::CodeBlock(_) => *in_code_block = true,
            _ => {}
        }
    }
}

fn nested_end(collector: &mut Collector, tag_end: &TagEnd, end: usize) {
    if let Collector::List {
        items,
        current,
        nested_lists,
        in_code_block,
        ..
    } = collector
    {
        match tag_end {
            TagEnd::List(_) => *nested_lists = nested_lists.saturating_sub(1),
            TagEnd::CodeBlock => *in_code_block = false,
            TagEnd::Item if *nested_lists == 0 => {
                if let Some((text, start)) = current.take() {
                    items.push(ListItem {
                        text: text.trim().to_string(),
                        span: start..end,
                    });
                }
            }
            // Loose list items wrap their text in paragraphs
            TagEnd::Paragraph if *nested_lists == 0 => {
                if let Some((text, _)) = current.as_mut() {
                    if !text.is_empty() && !text.ends_with(' ') {
                        text.push(' ');
                    }
                }
            }
            _ => {}
        }
    }
}

fn finish(collector: Collector, end: usize) -> Option<Block> {
    match collector {
        Collector::Heading { level, text, start } => Some(Block::Heading(Heading {
            level,
            text: text.trim().to_string(),
            span: start..end,
        })),
        Collector::Paragraph { text, start } => Some(Block::Paragraph(Paragraph {
            text: text.trim().to_string(),
            span: start..end,
        })),
        Collector::Code {
            language,
            body,
            start,
        } => Some(Block::FencedCodeBlock(FencedCodeBlock {
            language,
            body,
            span: start..end,
        })),
        Collector::List { items, start, .. } => Some(Block::List(List {
            items,
            span: start..end,
        })),
        Collector::Skip => None,
    }
}

/// Text buffer that inline content should be appended to, if any
fn inline_target(collector: Option<&mut Collector>) -> Option<&mut String> {
    match collector? {
        Collector::Heading { text, .. } | Collector::Paragraph { text, .. } => Some(text),
        Collector::Code { body, .. } => Some(body),
        Collector::List {
            current: Some((text, _)),
            nested_lists: 0,
            in_code_block: false,
            ..
        } => Some(text),
        _ => None,
    }
}

fn push_text(collector: Option<&mut Collector>, text: &str) {
    if let Some(buf) = inline_target(collector) {
        buf.push_str(text);
    }
}

fn push_code(collector: Option<&mut Collector>, code: &str) {
    let Some(collector) = collector else {
        return;
    };
    let in_list = matches!(collector, Collector::List { .. });
    if let Some(buf) = inline_target(Some(collector)) {
        if in_list {
            buf.push('`');
            buf.push_str(code);
            buf.push('`');
        } else {
            buf.push_str(code);
        }
    }
}

fn push_break(collector: Option<&mut Collector>) {
    if let Some(buf) = inline_target(collector) {
        buf.push(' ');
    }
}
