//! Section locator
//!
//! Groups the top-level block stream of a page under the headings that name
//! the logical sections of provider documentation.

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::schema::SchemaAttributeList;
use crate::parser::{Block, FencedCodeBlock, Heading, Paragraph};

/// Heading prefixes naming the non-title sections, checked in order
const SECTION_PREFIXES: &[(&str, SectionKind)] = &[
    ("Example", SectionKind::Example),
    ("Argument", SectionKind::Arguments),
    ("Attribute", SectionKind::Attributes),
    ("Timeout", SectionKind::Timeouts),
    ("Import", SectionKind::Import),
    ("Signature", SectionKind::Signature),
];

/// Deepest heading level that can start a non-title section
const MAX_SECTION_LEVEL: u8 = 2;

/// A logical section: its heading and the blocks up to the next section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: Heading,
    pub paragraphs: Vec<Paragraph>,
    pub fenced_code_blocks: Vec<FencedCodeBlock>,
    /// One entry per markdown list, `None` for lists that are not schema lists
    pub schema_attribute_lists: Vec<Option<SchemaAttributeList>>,
}

impl Section {
    pub fn new(heading: Heading) -> Self {
        Self {
            heading,
            paragraphs: Vec::new(),
            fenced_code_blocks: Vec::new(),
            schema_attribute_lists: Vec::new(),
        }
    }

    /// Lists that parsed as schema attribute lists
    pub fn schema_lists(&self) -> impl Iterator<Item = &SchemaAttributeList> {
        self.schema_attribute_lists.iter().flatten()
    }

    /// Markdown list at `index`, when it is a schema attribute list
    pub fn schema_list(&self, index: usize) -> Option<&SchemaAttributeList> {
        self.schema_attribute_lists.get(index)?.as_ref()
    }

    /// First paragraph after the heading
    pub fn byline(&self) -> Option<&str> {
        self.paragraphs.first().map(|p| p.text.as_str())
    }

    pub(crate) fn expect_level(&self, kind: SectionKind, expected: u8) -> Result<(), ContentsError> {
        if self.heading.level == expected {
            Ok(())
        } else {
            Err(ContentsError::HeadingLevel {
                section: kind,
                actual: self.heading.level,
                expected,
            })
        }
    }

    pub(crate) fn expect_heading_text(
        &self,
        kind: SectionKind,
        allowed: &[&str],
    ) -> Result<(), ContentsError> {
        if allowed.contains(&self.heading.text.as_str()) {
            Ok(())
        } else {
            Err(ContentsError::HeadingText {
                section: kind,
                actual: self.heading.text.clone(),
                expected: allowed.iter().map(|s| s.to_string()).collect(),
            })
        }
    }

    /// Every schema attribute list must be sorted by name
    pub(crate) fn expect_sorted(&self, kind: SectionKind) -> Result<(), ContentsError> {
        for list in self.schema_lists() {
            if let Some((before, after)) = list.first_unsorted() {
                return Err(ContentsError::Unsorted {
                    section: kind,
                    before: before.to_string(),
                    after: after.to_string(),
                });
            }
        }
        Ok(())
    }

    fn push(&mut self, block: &Block) {
        match block {
            Block::Paragraph(p) => self.paragraphs.push(p.clone()),
            Block::FencedCodeBlock(c) => self.fenced_code_blocks.push(c.clone()),
            Block::List(list) => self
                .schema_attribute_lists
                .push(SchemaAttributeList::from_list(list)),
            Block::Heading(_) => {}
        }
    }
}

/// Every recognized section of a page; `None` when the page lacks it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub title: Option<Section>,
    pub example: Option<Section>,
    pub arguments: Option<Section>,
    pub attributes: Option<Section>,
    pub timeouts: Option<Section>,
    pub import: Option<Section>,
    pub signature: Option<Section>,
}

impl Sections {
    /// No section has been located yet
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.example.is_none()
            && self.arguments.is_none()
            && self.attributes.is_none()
            && self.timeouts.is_none()
            && self.import.is_none()
            && self.signature.is_none()
    }

    pub fn get(&self, kind: SectionKind) -> Option<&Section> {
        self.slot(kind).as_ref()
    }

    fn slot(&self, kind: SectionKind) -> &Option<Section> {
        match kind {
            SectionKind::Title => &self.title,
            SectionKind::Example => &self.example,
            SectionKind::Arguments => &self.arguments,
            SectionKind::Attributes => &self.attributes,
            SectionKind::Timeouts => &self.timeouts,
            SectionKind::Import => &self.import,
            SectionKind::Signature => &self.signature,
        }
    }

    fn slot_mut(&mut self, kind: SectionKind) -> &mut Option<Section> {
        match kind {
            SectionKind::Title => &mut self.title,
            SectionKind::Example => &mut self.example,
            SectionKind::Arguments => &mut self.arguments,
            SectionKind::Attributes => &mut self.attributes,
            SectionKind::Timeouts => &mut self.timeouts,
            SectionKind::Import => &mut self.import,
            SectionKind::Signature => &mut self.signature,
        }
    }
}

/// Section kind a heading starts, if any
pub fn classify_heading(heading: &Heading) -> Option<SectionKind> {
    if heading.level <= MAX_SECTION_LEVEL {
        let named = SECTION_PREFIXES
            .iter()
            .find(|(prefix, _)| heading.text.starts_with(prefix))
            .map(|(_, kind)| *kind);
        if named.is_some() {
            return named;
        }
    }

    (heading.level == 1).then_some(SectionKind::Title)
}

/// Whether `heading` closes an open section of `kind` started at `level`
fn closes(kind: SectionKind, level: u8, heading: &Heading) -> bool {
    match kind {
        SectionKind::Title => true,
        _ => heading.level <= level,
    }
}

/// Group blocks into sections
///
/// The first heading of each kind wins; later duplicates and unrecognized
/// headings contribute nothing. An unrecognized heading of any level that
/// precedes every section starts the title, so a misleveled title is still
/// located.
pub fn locate(blocks: &[Block]) -> Sections {
    let mut sections = Sections::default();
    let mut open: Option<(SectionKind, u8)> = None;

    for block in blocks {
        let Block::Heading(heading) = block else {
            if let Some((kind, _)) = open {
                if let Some(section) = sections.slot_mut(kind).as_mut() {
                    section.push(block);
                }
            }
            continue;
        };

        if let Some((kind, level)) = open {
            if !closes(kind, level, heading) {
                continue;
            }
        }

        open = None;
        let kind = classify_heading(heading)
            .or_else(|| sections.is_empty().then_some(SectionKind::Title));
        if let Some(kind) = kind {
            let slot = sections.slot_mut(kind);
            if slot.is_none() {
                *slot = Some(Section::new(heading.clone()));
                open = Some((kind, heading.level));
            }
        }
    }

    sections
}
