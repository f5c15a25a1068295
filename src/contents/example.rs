//! Example Usage section validator

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::options::{
    DEFAULT_EXAMPLE_CODE_BLOCK_LANGUAGE, DEFAULT_EXAMPLE_HEADING_TEXTS, ExampleSectionOptions,
    or_defaults,
};
use crate::contents::sections::Section;

pub fn check_example(
    section: Option<&Section>,
    opts: &ExampleSectionOptions,
) -> Result<(), ContentsError> {
    let Some(section) = opts
        .require_section
        .check(SectionKind::Example, section, "## Example Usage")?
    else {
        return Ok(());
    };

    section.expect_level(SectionKind::Example, 2)?;
    section.expect_heading_text(
        SectionKind::Example,
        &or_defaults(&opts.allowed_heading_texts, DEFAULT_EXAMPLE_HEADING_TEXTS),
    )?;

    let expected = opts
        .expected_code_block_language
        .as_deref()
        .unwrap_or(DEFAULT_EXAMPLE_CODE_BLOCK_LANGUAGE);

    if let Some(block) = section
        .fenced_code_blocks
        .iter()
        .find(|block| block.language != expected)
    {
        return Err(ContentsError::ExampleLanguage {
            actual: block.language.clone(),
            expected: expected.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::options::SectionRequirement;
    use crate::contents::sections::locate;
    use crate::parser::read_blocks;

    fn check(source: &str, opts: &ExampleSectionOptions) -> Result<(), ContentsError> {
        let sections = locate(&read_blocks(source));
        check_example(sections.example.as_ref(), opts)
    }

    #[test]
    fn test_terraform_examples_pass() {
        let source = "## Example Usage\n\n```terraform\nresource \"a\" \"b\" {}\n```\n\n```terraform\n# second\n```\n";
        assert!(check(source, &ExampleSectionOptions::default()).is_ok());
    }

    #[test]
    fn test_wrong_language() {
        let source = "## Example Usage\n\n```hcl\nresource \"a\" \"b\" {}\n```\n";
        let err = check(source, &ExampleSectionOptions::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "example section code block language (hcl) should be: ```terraform"
        );
    }

    #[test]
    fn test_missing_language() {
        let source = "## Example Usage\n\n```\nresource \"a\" \"b\" {}\n```\n";
        assert!(matches!(
            check(source, &ExampleSectionOptions::default()),
            Err(ContentsError::ExampleLanguage { .. })
        ));
    }

    #[test]
    fn test_binding_language() {
        let opts = ExampleSectionOptions {
            expected_code_block_language: Some("python".to_string()),
            ..Default::default()
        };
        let source = "## Example Usage\n\n```python\nWidget(self, \"example\")\n```\n";
        assert!(check(source, &opts).is_ok());

        let source = "## Example Usage\n\n```terraform\nresource \"a\" \"b\" {}\n```\n";
        assert!(check(source, &opts).is_err());
    }

    #[test]
    fn test_absent_example_is_optional_by_default() {
        assert!(check("# Resource: test_widget\n", &ExampleSectionOptions::default()).is_ok());

        let opts = ExampleSectionOptions {
            require_section: SectionRequirement::Required,
            ..Default::default()
        };
        let err = check("# Resource: test_widget\n", &opts).unwrap_err();
        assert_eq!(err.to_string(), "missing example section: ## Example Usage");
    }

    #[test]
    fn test_heading_text() {
        let err = check("## Examples\n", &ExampleSectionOptions::default()).unwrap_err();
        assert!(matches!(err, ContentsError::HeadingText { .. }));
    }
}
