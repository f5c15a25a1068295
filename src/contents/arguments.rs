//! Argument Reference section validator
//!
//! Besides heading and byline rules, a page split into "required" and
//! "optional" argument lists must keep each list honest about the
//! requiredness of its items.

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::options::{
    ArgumentsSectionOptions, DEFAULT_ARGUMENTS_BYLINE_TEXTS, DEFAULT_ARGUMENTS_HEADING_TEXTS,
    OPTIONAL_ARGUMENTS_BYLINE, REQUIRED_ARGUMENTS_BYLINE, or_defaults,
};
use crate::contents::sections::Section;

const REGION_ARGUMENT: &str = "region";

/// Check the arguments section
///
/// `region_aware` is the effective region awareness for this document, which
/// may be switched off by the region ignore lists.
pub fn check_arguments(
    section: Option<&Section>,
    opts: &ArgumentsSectionOptions,
    region_aware: bool,
) -> Result<(), ContentsError> {
    let Some(section) = section else {
        return Err(ContentsError::MissingSection {
            section: SectionKind::Arguments,
            expected: "## Argument Reference".to_string(),
        });
    };

    section.expect_level(SectionKind::Arguments, 2)?;
    section.expect_heading_text(
        SectionKind::Arguments,
        &or_defaults(&opts.allowed_heading_texts, DEFAULT_ARGUMENTS_HEADING_TEXTS),
    )?;

    check_byline(section, opts)?;

    if opts.enhanced_region_checks && region_aware {
        let documents_region = section.schema_lists().any(|list| {
            list.items
                .iter()
                .any(|item| item.name == REGION_ARGUMENT && item.is_optional())
        });
        if !documents_region {
            return Err(ContentsError::MissingRegionArgument);
        }
    }

    if opts.require_schema_ordering {
        section.expect_sorted(SectionKind::Arguments)?;
    }

    Ok(())
}

fn check_byline(section: &Section, opts: &ArgumentsSectionOptions) -> Result<(), ContentsError> {
    let bylines = or_defaults(&opts.expected_byline_texts, DEFAULT_ARGUMENTS_BYLINE_TEXTS);

    let Some(byline) = section.byline() else {
        if opts.allow_missing_byline {
            return Ok(());
        }
        return Err(ContentsError::MissingByline {
            section: SectionKind::Arguments,
            expected: bylines.iter().map(|s| s.to_string()).collect(),
        });
    };

    if !bylines.contains(&byline) {
        return Err(ContentsError::Byline {
            section: SectionKind::Arguments,
            actual: byline.to_string(),
            expected: bylines.iter().map(|s| s.to_string()).collect(),
        });
    }

    if byline == REQUIRED_ARGUMENTS_BYLINE {
        check_required_split(section)?;
    }

    Ok(())
}

/// Requiredness rules for a "required:" / "optional:" split
///
/// The optional list is the markdown list at the same index as the optional
/// byline paragraph; lists that are not schema lists still hold their slot.
fn check_required_split(section: &Section) -> Result<(), ContentsError> {
    if let Some(item) = section
        .schema_list(0)
        .and_then(|list| list.items.iter().find(|item| item.is_optional()))
    {
        return Err(ContentsError::OptionalInRequiredList {
            name: item.name.clone(),
        });
    }

    if section.paragraphs.len() < 2 {
        return Ok(());
    }

    let Some(index) = section
        .paragraphs
        .iter()
        .skip(1)
        .position(|p| p.text == OPTIONAL_ARGUMENTS_BYLINE)
        .map(|i| i + 1)
    else {
        return Err(ContentsError::MissingOptionalByline {
            actual: REQUIRED_ARGUMENTS_BYLINE.to_string(),
            expected: OPTIONAL_ARGUMENTS_BYLINE.to_string(),
        });
    };

    if let Some(item) = section
        .schema_list(index)
        .and_then(|list| list.items.iter().find(|item| item.is_required()))
    {
        return Err(ContentsError::RequiredInOptionalList {
            name: item.name.clone(),
        });
    }

    Ok(())
}
