//! Attribute Reference section validator

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::options::{
    AttributesSectionOptions, DEFAULT_ATTRIBUTES_BYLINE_TEXTS,
    DEFAULT_ATTRIBUTES_DISALLOWED_MESSAGE, DEFAULT_ATTRIBUTES_HEADING_TEXTS, or_defaults,
};
use crate::contents::sections::Section;

pub fn check_attributes(
    section: Option<&Section>,
    opts: &AttributesSectionOptions,
) -> Result<(), ContentsError> {
    if opts.disallowed {
        return match section {
            Some(_) => Err(ContentsError::DisallowedSection {
                section: SectionKind::Attributes,
                message: opts
                    .disallowed_message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ATTRIBUTES_DISALLOWED_MESSAGE.to_string()),
            }),
            None => Ok(()),
        };
    }

    let Some(section) = opts.require_section.check(
        SectionKind::Attributes,
        section,
        "## Attribute Reference",
    )?
    else {
        return Ok(());
    };

    section.expect_level(SectionKind::Attributes, 2)?;
    section.expect_heading_text(
        SectionKind::Attributes,
        &or_defaults(&opts.allowed_heading_texts, DEFAULT_ATTRIBUTES_HEADING_TEXTS),
    )?;

    let bylines = or_defaults(&opts.expected_byline_texts, DEFAULT_ATTRIBUTES_BYLINE_TEXTS);
    match section.byline() {
        None => {
            return Err(ContentsError::MissingByline {
                section: SectionKind::Attributes,
                expected: bylines.iter().map(|s| s.to_string()).collect(),
            });
        }
        Some(byline) if !bylines.contains(&byline) => {
            return Err(ContentsError::Byline {
                section: SectionKind::Attributes,
                actual: byline.to_string(),
                expected: bylines.iter().map(|s| s.to_string()).collect(),
            });
        }
        Some(_) => {}
    }

    if opts.require_schema_ordering {
        section.expect_sorted(SectionKind::Attributes)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::options::SectionRequirement;
    use crate::contents::sections::locate;
    use crate::parser::read_blocks;

    fn check(source: &str, opts: &AttributesSectionOptions) -> Result<(), ContentsError> {
        let sections = locate(&read_blocks(source));
        check_attributes(sections.attributes.as_ref(), opts)
    }

    const VALID: &str = "## Attribute Reference\n\nThis resource exports the following attributes in addition to the arguments above:\n\n* `arn` - ARN of the widget.\n* `id` - Name of the widget.\n";

    #[test]
    fn test_valid_attributes() {
        assert!(check(VALID, &AttributesSectionOptions::default()).is_ok());
    }

    #[test]
    fn test_attributes_required_by_default() {
        let err = check("# Resource: test_widget\n", &AttributesSectionOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            ContentsError::MissingSection {
                section: SectionKind::Attributes,
                expected: "## Attribute Reference".to_string(),
            }
        );
    }

    #[test]
    fn test_plural_heading_accepted() {
        let source = "## Attributes Reference\n\nNo additional attributes are exported.\n";
        assert!(check(source, &AttributesSectionOptions::default()).is_ok());
    }

    #[test]
    fn test_byline_is_exact() {
        let source = "## Attribute Reference\n\nThis resource exports no additional attributes\n";
        let err = check(source, &AttributesSectionOptions::default()).unwrap_err();
        assert!(matches!(err, ContentsError::Byline { .. }));
    }

    #[test]
    fn test_missing_byline() {
        let source = "## Attribute Reference\n\n* `arn` - ARN.\n";
        let err = check(source, &AttributesSectionOptions::default()).unwrap_err();
        assert!(matches!(err, ContentsError::MissingByline { .. }));
    }

    #[test]
    fn test_disallowed_message() {
        let opts = AttributesSectionOptions {
            disallowed: true,
            ..Default::default()
        };
        assert_eq!(
            check(VALID, &opts).unwrap_err().to_string(),
            "attribute section is not allowed"
        );
        assert!(check("# Action: test_reboot\n", &opts).is_ok());

        let custom = AttributesSectionOptions {
            disallowed: true,
            disallowed_message: Some(
                "actions documentation cannot include an attributes section".to_string(),
            ),
            ..Default::default()
        };
        assert_eq!(
            check(VALID, &custom).unwrap_err().to_string(),
            "actions documentation cannot include an attributes section"
        );
    }

    #[test]
    fn test_forbidden() {
        let opts = AttributesSectionOptions {
            require_section: SectionRequirement::Forbidden,
            ..Default::default()
        };
        assert_eq!(
            check(VALID, &opts).unwrap_err().to_string(),
            "attributes section should not be present"
        );
    }

    #[test]
    fn test_schema_ordering() {
        let source = "## Attribute Reference\n\nThis resource exports the following attributes in addition to the arguments above:\n\n* `id` - ID.\n* `arn` - ARN.\n";
        let opts = AttributesSectionOptions {
            require_schema_ordering: true,
            ..Default::default()
        };
        assert_eq!(
            check(source, &opts).unwrap_err().to_string(),
            "attributes section is not sorted by name (id should come after arn)"
        );
        assert!(check(source, &AttributesSectionOptions::default()).is_ok());
    }
}
