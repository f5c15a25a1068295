//! Per-kind contents check options

use crate::check::RunOptions;
use crate::check::kind::DocKind;
use crate::contents::{
    ArgumentsSectionOptions, AttributesSectionOptions, CheckOptions, ExampleSectionOptions,
    ImportSectionOptions, SectionRequirement, SignatureSectionOptions, TimeoutsSectionOptions,
    TitleSectionOptions,
};

pub const ACTION_ARGUMENTS_BYLINE_TEXTS: &[&str] = &[
    "This action supports the following arguments:",
    "The following arguments are required:",
    "The following arguments are optional:",
    "This action does not support any arguments.",
];

pub const FUNCTION_ARGUMENTS_BYLINE_TEXTS: &[&str] = &[
    "This function supports the following arguments:",
    "This function does not support any arguments.",
];

pub const ACTION_ATTRIBUTES_DISALLOWED_MESSAGE: &str =
    "actions documentation cannot include an attributes section";
pub const ACTION_IMPORT_DISALLOWED_MESSAGE: &str =
    "actions documentation cannot include an import section";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Contents options for a documentation kind
///
/// Returns `None` when the kind's contents are not checked: guides and index
/// pages never are, and other kinds only with the contents check enabled.
/// Action pages are always checked.
pub fn contents_options(
    kind: DocKind,
    run: &RunOptions,
    example_language: &str,
) -> Option<CheckOptions> {
    if !kind.has_schema() || (!run.enable_contents_check && kind != DocKind::Action) {
        return None;
    }

    let title_prefix = match kind {
        DocKind::Action => "Action",
        DocKind::DataSource => "Data Source",
        DocKind::Ephemeral => "Ephemeral",
        DocKind::Function => "Function",
        DocKind::ListResource => "List Resource",
        _ => "Resource",
    };

    let mut opts = CheckOptions {
        title: TitleSectionOptions {
            allowed_prefixes: vec![title_prefix.to_string()],
        },
        example: ExampleSectionOptions {
            expected_code_block_language: Some(example_language.to_string()),
            ..Default::default()
        },
        arguments: ArgumentsSectionOptions {
            enhanced_region_checks: run.enable_enhanced_region_check,
            region_aware: true,
            require_schema_ordering: run.require_schema_ordering,
            ..Default::default()
        },
        attributes: AttributesSectionOptions {
            require_schema_ordering: run.require_schema_ordering,
            ..Default::default()
        },
        ignore_contents_check: run.ignore_contents_check.get(kind).cloned().unwrap_or_default(),
        ignore_region_check: run
            .ignore_enhanced_region_check
            .get(kind)
            .cloned()
            .unwrap_or_default(),
        ignore_region_check_subcategories: run.ignore_enhanced_region_check_subcategories.clone(),
        ..Default::default()
    };

    match kind {
        DocKind::Action => {
            opts.arguments.region_aware = false;
            opts.arguments.expected_byline_texts = strings(ACTION_ARGUMENTS_BYLINE_TEXTS);
            opts.attributes.disallowed = true;
            opts.attributes.disallowed_message =
                Some(ACTION_ATTRIBUTES_DISALLOWED_MESSAGE.to_string());
            opts.import.disallowed = true;
            opts.import.disallowed_message = Some(ACTION_IMPORT_DISALLOWED_MESSAGE.to_string());
            opts.ignore_region_check_subcategories.clear();
        }
        DocKind::DataSource | DocKind::Ephemeral => {
            opts.import = forbidden_import();
        }
        DocKind::Function => {
            opts.arguments = ArgumentsSectionOptions {
                allowed_heading_texts: vec!["Arguments".to_string()],
                allow_missing_byline: true,
                expected_byline_texts: strings(FUNCTION_ARGUMENTS_BYLINE_TEXTS),
                ..Default::default()
            };
            opts.attributes.require_section = SectionRequirement::Optional;
            opts.import = forbidden_import();
            opts.signature = Some(SignatureSectionOptions {
                require_section: SectionRequirement::Required,
                allowed_heading_texts: vec!["Signature".to_string()],
                require_code_block: true,
            });
        }
        DocKind::ListResource => {
            opts.arguments.require_schema_ordering = true;
            opts.attributes.require_section = SectionRequirement::Forbidden;
            opts.attributes.require_schema_ordering = true;
            opts.timeouts = TimeoutsSectionOptions {
                require_section: SectionRequirement::Forbidden,
            };
            opts.import = forbidden_import();
        }
        _ => {}
    }

    Some(opts)
}

fn forbidden_import() -> ImportSectionOptions {
    ImportSectionOptions {
        require_section: SectionRequirement::Forbidden,
        ..Default::default()
    }
}
