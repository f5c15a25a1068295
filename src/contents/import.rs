//! Import section validator
//!
//! Enforces active-voice wording and the layout of the import examples:
//! `terraform` import blocks first, then `console` commands.

use crate::contents::error::{ContentsError, SectionKind};
use crate::contents::options::{
    DEFAULT_IMPORT_DISALLOWED_MESSAGE, IMPORT_HEADING_TEXT, ImportSectionOptions,
};
use crate::contents::sections::Section;

/// Phrases the first paragraph must avoid, with the suggested fix
const WORDING_PROBLEMS: &[(&str, &str)] = &[
    (
        "can be imported",
        "use active voice instead: Import X using A, B, C.",
    ),
    ("e.g", "instead use \"For example:\""),
    ("E.g", "instead use \"For example:\""),
];

const EXAMPLE_SUFFIX: &str = ". For example:";
const CANNOT_IMPORT: &str = "cannot import";

const TERRAFORM: &str = "terraform";
const CONSOLE: &str = "console";

pub fn check_import(
    section: Option<&Section>,
    resource_name: &str,
    opts: &ImportSectionOptions,
) -> Result<(), ContentsError> {
    if opts.disallowed {
        return match section {
            Some(_) => Err(ContentsError::DisallowedSection {
                section: SectionKind::Import,
                message: opts
                    .disallowed_message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_IMPORT_DISALLOWED_MESSAGE.to_string()),
            }),
            None => Ok(()),
        };
    }

    let Some(section) = opts
        .require_section
        .check(SectionKind::Import, section, "## Import")?
    else {
        return Ok(());
    };

    section.expect_level(SectionKind::Import, 2)?;
    section.expect_heading_text(SectionKind::Import, &[IMPORT_HEADING_TEXT])?;

    if let Some(text) = section.byline() {
        check_wording(text)?;

        let cannot_import = text.contains(CANNOT_IMPORT);
        if !cannot_import && !text.ends_with(EXAMPLE_SUFFIX) {
            return Err(ContentsError::ImportSuffix {
                suffix: EXAMPLE_SUFFIX,
            });
        }
        if !cannot_import && section.fenced_code_blocks.is_empty() {
            return Err(ContentsError::ImportMissingCodeBlock);
        }
    }

    check_code_blocks(section, resource_name)
}

fn check_wording(text: &str) -> Result<(), ContentsError> {
    match WORDING_PROBLEMS
        .iter()
        .find(|(problem, _)| text.contains(problem))
    {
        Some(&(problem, fix)) => Err(ContentsError::ImportWording { problem, fix }),
        None => Ok(()),
    }
}

fn check_code_blocks(section: &Section, resource_name: &str) -> Result<(), ContentsError> {
    let mut seen_console = false;

    for (i, block) in section.fenced_code_blocks.iter().enumerate() {
        if !block.body.contains(resource_name) {
            return Err(ContentsError::ImportResourceName {
                resource_name: resource_name.to_string(),
            });
        }

        let language = block.language.as_str();

        if i == 0 && (language != TERRAFORM || !block.body.starts_with("import {")) {
            return Err(ContentsError::ImportFirstCodeBlock);
        }

        match language {
            CONSOLE if !block.body.starts_with("% ") => {
                return Err(ContentsError::ImportConsolePrefix);
            }
            CONSOLE => seen_console = true,
            TERRAFORM if seen_console && block.body.starts_with("import ") => {
                return Err(ContentsError::ImportCodeBlockOrder);
            }
            TERRAFORM => {}
            other => {
                return Err(ContentsError::ImportCodeBlockLanguage {
                    actual: other.to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::options::SectionRequirement;
    use crate::contents::sections::locate;
    use crate::parser::read_blocks;

    fn check(source: &str, opts: &ImportSectionOptions) -> Result<(), ContentsError> {
        let sections = locate(&read_blocks(source));
        check_import(sections.import.as_ref(), "test_widget", opts)
    }

    fn check_default(source: &str) -> Result<(), ContentsError> {
        check(source, &ImportSectionOptions::default())
    }

    const TERRAFORM_BLOCK: &str =
        "```terraform\nimport {\n  to = test_widget.example\n  id = \"w-1\"\n}\n```\n";
    const CONSOLE_BLOCK: &str = "```console\n% terraform import test_widget.example w-1\n```\n";
    const INTRO: &str = "## Import\n\nIn Terraform v1.5.0 and later, use an `import` block to import widgets using the `id`. For example:\n\n";

    #[test]
    fn test_terraform_then_console_passes() {
        let source = format!(
            "{INTRO}{TERRAFORM_BLOCK}\nUsing `terraform import`, import widgets using the `id`. For example:\n\n{CONSOLE_BLOCK}"
        );
        assert!(check_default(&source).is_ok());
    }

    #[test]
    fn test_console_then_terraform_fails() {
        // Terraform block first so the first-block rule is satisfied
        let source = format!("{INTRO}{TERRAFORM_BLOCK}\n{CONSOLE_BLOCK}\n{TERRAFORM_BLOCK}");
        assert_eq!(
            check_default(&source).unwrap_err(),
            ContentsError::ImportCodeBlockOrder
        );
    }

    #[test]
    fn test_console_first_fails() {
        let source = format!("{INTRO}{CONSOLE_BLOCK}\n{TERRAFORM_BLOCK}");
        assert_eq!(
            check_default(&source).unwrap_err(),
            ContentsError::ImportFirstCodeBlock
        );
    }

    #[test]
    fn test_passive_voice() {
        let source = "## Import\n\nWidgets can be imported using the `id`. For example:\n";
        assert_eq!(
            check_default(source).unwrap_err().to_string(),
            "import section should not include \"can be imported\", use active voice instead: Import X using A, B, C."
        );
    }

    #[test]
    fn test_abbreviation() {
        let source = "## Import\n\nImport widgets using the `id`, e.g. For example:\n";
        assert!(matches!(
            check_default(source),
            Err(ContentsError::ImportWording { problem: "e.g", .. })
        ));
    }

    #[test]
    fn test_suffix() {
        let source = format!("## Import\n\nImport widgets using the `id`:\n\n{TERRAFORM_BLOCK}");
        assert_eq!(
            check_default(&source).unwrap_err(),
            ContentsError::ImportSuffix {
                suffix: EXAMPLE_SUFFIX
            }
        );
    }

    #[test]
    fn test_cannot_import() {
        let source = "## Import\n\nYou cannot import widgets.\n";
        assert!(check_default(source).is_ok());
    }

    #[test]
    fn test_cannot_import_still_checks_code_blocks() {
        let valid = format!("## Import\n\nYou cannot import widgets.\n\n{TERRAFORM_BLOCK}");
        assert!(check_default(&valid).is_ok());

        let console_first = format!("## Import\n\nYou cannot import widgets.\n\n{CONSOLE_BLOCK}");
        assert_eq!(
            check_default(&console_first).unwrap_err(),
            ContentsError::ImportFirstCodeBlock
        );

        let other_resource = "## Import\n\nYou cannot import widgets.\n\n```terraform\nimport {\n  to = test_gadget.example\n}\n```\n";
        assert!(matches!(
            check_default(other_resource),
            Err(ContentsError::ImportResourceName { .. })
        ));
    }

    #[test]
    fn test_missing_code_block() {
        let source = "## Import\n\nImport widgets using the `id`. For example:\n";
        assert_eq!(
            check_default(source).unwrap_err(),
            ContentsError::ImportMissingCodeBlock
        );
    }

    #[test]
    fn test_resource_name_in_code_block() {
        let source = format!(
            "{INTRO}```terraform\nimport {{\n  to = test_gadget.example\n}}\n```\n"
        );
        assert_eq!(
            check_default(&source).unwrap_err().to_string(),
            "import section code block text should contain resource name: test_widget"
        );
    }

    #[test]
    fn test_console_prefix() {
        let source = format!(
            "{INTRO}{TERRAFORM_BLOCK}\n```console\n$ terraform import test_widget.example w-1\n```\n"
        );
        assert_eq!(
            check_default(&source).unwrap_err(),
            ContentsError::ImportConsolePrefix
        );
    }

    #[test]
    fn test_code_block_language() {
        let source = format!(
            "{INTRO}{TERRAFORM_BLOCK}\n```shell\n% terraform import test_widget.example w-1\n```\n"
        );
        assert_eq!(
            check_default(&source).unwrap_err(),
            ContentsError::ImportCodeBlockLanguage {
                actual: "shell".to_string()
            }
        );
    }

    #[test]
    fn test_heading_text_exact() {
        let source = "## Importing\n\nYou cannot import widgets.\n";
        assert!(matches!(
            check_default(source),
            Err(ContentsError::HeadingText { .. })
        ));
    }

    #[test]
    fn test_disallowed_and_forbidden() {
        let source = "## Import\n\nYou cannot import widgets.\n";

        let disallowed = ImportSectionOptions {
            disallowed: true,
            ..Default::default()
        };
        assert_eq!(
            check(source, &disallowed).unwrap_err().to_string(),
            "import section is not allowed"
        );

        let forbidden = ImportSectionOptions {
            require_section: SectionRequirement::Forbidden,
            ..Default::default()
        };
        assert_eq!(
            check(source, &forbidden).unwrap_err().to_string(),
            "import section should not be present"
        );

        let required = ImportSectionOptions {
            require_section: SectionRequirement::Required,
            ..Default::default()
        };
        assert_eq!(
            check("# Resource: test_widget\n", &required)
                .unwrap_err()
                .to_string(),
            "missing import section: ## Import"
        );
    }
}
