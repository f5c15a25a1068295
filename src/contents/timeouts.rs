//! Timeouts section validator

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::options::TimeoutsSectionOptions;
use crate::contents::sections::Section;

/// Presence is the only rule for timeouts
pub fn check_timeouts(
    section: Option<&Section>,
    opts: &TimeoutsSectionOptions,
) -> Result<(), ContentsError> {
    opts.require_section
        .check(SectionKind::Timeouts, section, "## Timeouts")
        .map(|_| ())
}
