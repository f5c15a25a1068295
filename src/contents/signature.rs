//! Signature section validator (function documentation)

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::options::{
    DEFAULT_SIGNATURE_HEADING_TEXTS, SignatureSectionOptions, or_defaults,
};
use crate::contents::sections::Section;

pub fn check_signature(
    section: Option<&Section>,
    opts: &SignatureSectionOptions,
) -> Result<(), ContentsError> {
    let Some(section) = opts
        .require_section
        .check(SectionKind::Signature, section, "## Signature")?
    else {
        return Ok(());
    };

    section.expect_level(SectionKind::Signature, 2)?;
    section.expect_heading_text(
        SectionKind::Signature,
        &or_defaults(&opts.allowed_heading_texts, DEFAULT_SIGNATURE_HEADING_TEXTS),
    )?;

    if opts.require_code_block && section.fenced_code_blocks.is_empty() {
        return Err(ContentsError::SignatureCodeBlock);
    }

    Ok(())
}
