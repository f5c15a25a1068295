//! Title section validator

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::options::{DEFAULT_TITLE_PREFIXES, TitleSectionOptions, or_defaults};
use crate::contents::sections::Section;

pub fn check_title(
    section: Option<&Section>,
    resource_name: &str,
    opts: &TitleSectionOptions,
) -> Result<(), ContentsError> {
    let Some(section) = section else {
        return Err(ContentsError::MissingSection {
            section: SectionKind::Title,
            expected: format!("# Resource: {resource_name}"),
        });
    };

    section.expect_level(SectionKind::Title, 1)?;

    let prefixes = or_defaults(&opts.allowed_prefixes, DEFAULT_TITLE_PREFIXES);
    let text = section.heading.text.as_str();
    let has_prefix = prefixes.iter().any(|prefix| {
        text.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with(": "))
    });

    if !has_prefix {
        return Err(ContentsError::TitlePrefix {
            actual: text.to_string(),
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
        });
    }

    if !section.fenced_code_blocks.is_empty() {
        return Err(ContentsError::TitleCodeBlock);
    }

    Ok(())
}
