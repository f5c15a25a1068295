//! Whole-provider checks over temporary documentation trees
use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tfdocs_lint::check::directory::LayoutError;
use tfdocs_lint::check::kind::PerKind;
use tfdocs_lint::check::schema::ProvidersSchema;
use tfdocs_lint::check::{Check, ErrorReport, RunOptions, discover};

const INDEX_PAGE: &str = "---\npage_title: \"Provider: Test\"\n---\n\n# Test Provider\n";

const RESOURCE_PAGE: &str = "---\nsubcategory: \"Widgets\"\n---\n\n# Resource: test_widget\n\n## Argument Reference\n\nThis resource supports the following arguments:\n\n* `name` - (Required) Name.\n\n## Attribute Reference\n\nThis resource exports the following attributes in addition to the arguments above:\n\n* `id` - Identifier.\n";

const DATA_SOURCE_PAGE: &str = "---\nsubcategory: \"Widgets\"\n---\n\n# Data Source: test_widget\n\n## Argument Reference\n\nThis data source supports the following arguments:\n\n* `name` - (Required) Name.\n\n## Attribute Reference\n\nThis data source exports the following attributes in addition to the arguments above:\n\n* `id` - Identifier.\n";

const LEGACY_RESOURCE_PAGE: &str = "---\nsubcategory: \"Widgets\"\nlayout: \"test\"\npage_title: \"Test: test_widget\"\ndescription: |-\n  Manages a widget.\n---\n\n# Resource: test_widget\n\n## Argument Reference\n\nThis resource supports the following arguments:\n\n* `name` - (Required) Name.\n\n## Attribute Reference\n\nThis resource exports no additional attributes.\n";

struct Provider {
    dir: TempDir,
}

impl Provider {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, path: &str, content: &str) -> &Self {
        let full = self.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
        self
    }

    fn options(&self) -> RunOptions {
        RunOptions {
            base_path: self.path().to_path_buf(),
            provider_name: "test".to_string(),
            enable_contents_check: true,
            ..Default::default()
        }
    }

    fn check(&self, options: RunOptions) -> anyhow::Result<()> {
        let directories = discover(self.path())?;
        Check::new(options).run(&directories)
    }
}

fn report(result: anyhow::Result<()>) -> Vec<String> {
    let err = result.expect_err("check should fail");
    err.downcast_ref::<ErrorReport>()
        .unwrap_or_else(|| panic!("expected error report, got: {err:#}"))
        .errors
        .clone()
}

#[test]
fn test_registry_provider_passes() {
    let provider = Provider::new();
    provider
        .write("docs/index.md", INDEX_PAGE)
        .write("docs/resources/widget.md", RESOURCE_PAGE)
        .write("docs/data-sources/widget.md", DATA_SOURCE_PAGE)
        .write("docs/guides/getting-started.md", "---\nsubcategory: \"Guides\"\n---\n\n# Getting Started\n");

    provider.check(provider.options()).unwrap();
}

#[test]
fn test_legacy_provider_passes() {
    let provider = Provider::new();
    provider
        .write("website/docs/r/widget.html.markdown", LEGACY_RESOURCE_PAGE)
        .write("website/docs/r/layout.erb", "<%= yield %>");

    provider.check(provider.options()).unwrap();
}

#[test]
fn test_legacy_frontmatter_requirements() {
    let provider = Provider::new();
    provider.write("website/docs/r/widget.html.markdown", RESOURCE_PAGE);

    assert_eq!(
        report(provider.check(provider.options())),
        vec![
            "website/docs/r/widget.html.markdown: error checking file frontmatter: YAML frontmatter missing required description"
        ]
    );
}

#[test]
fn test_every_failing_file_reported_sorted() {
    let provider = Provider::new();
    provider
        .write("docs/resources/widget.md", RESOURCE_PAGE)
        .write("docs/resources/gadget.md", &RESOURCE_PAGE.replace("# Resource", "# Resources"))
        .write("docs/resources/gizmo.markdown", RESOURCE_PAGE)
        .write("docs/data-sources/widget.md", "# Data Source: test_widget\n");

    let errors = report(provider.check(provider.options()));
    assert_eq!(errors.len(), 3, "{errors:#?}");
    assert!(errors[0].starts_with("docs/data-sources/widget.md: error checking file frontmatter"));
    assert!(errors[1].starts_with("docs/resources/gadget.md: error checking file contents"));
    assert!(errors[2].starts_with("docs/resources/gizmo.markdown: error checking file extension"));

    let mut sorted = errors.clone();
    sorted.sort();
    assert_eq!(errors, sorted);
}

#[test]
fn test_invalid_directory_aborts() {
    let provider = Provider::new();
    provider
        .write("docs/resources/widget.md", "not checked")
        .write("website/docs/widgets/widget.md", "not checked");

    let err = provider.check(provider.options()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<LayoutError>(),
        Some(&LayoutError::InvalidDirectory("website/docs/widgets".to_string()))
    );
}

#[test]
fn test_mixed_layouts_abort() {
    let provider = Provider::new();
    provider
        .write("docs/resources/widget.md", RESOURCE_PAGE)
        .write("website/docs/r/widget.html.markdown", LEGACY_RESOURCE_PAGE);

    let err = provider.check(provider.options()).unwrap_err();
    assert_eq!(err.downcast_ref::<LayoutError>(), Some(&LayoutError::MixedLayouts));
}

#[test]
fn test_contents_check_disabled() {
    let provider = Provider::new();
    provider.write("docs/resources/widget.md", "---\nsubcategory: \"Widgets\"\n---\n\nAnything goes.\n");

    let options = RunOptions {
        enable_contents_check: false,
        ..provider.options()
    };
    provider.check(options).unwrap();
}

#[test]
fn test_cdktf_examples_use_binding_language() {
    let provider = Provider::new();
    let python_page = RESOURCE_PAGE.replace(
        "## Argument Reference",
        "## Example Usage\n\n```python\nWidget(self, \"example\", name=\"example\")\n```\n\n## Argument Reference",
    );
    provider.write("docs/cdktf/python/resources/widget.md", &python_page);
    provider.check(provider.options()).unwrap();

    let terraform_page = RESOURCE_PAGE.replace(
        "## Argument Reference",
        "## Example Usage\n\n```terraform\nresource \"test_widget\" \"example\" {}\n```\n\n## Argument Reference",
    );
    provider.write("docs/cdktf/python/resources/widget.md", &terraform_page);
    let errors = report(provider.check(provider.options()));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("python"), "{}", errors[0]);
}

#[test]
fn test_schema_mismatch_from_providers_schema() {
    let provider = Provider::new();
    provider
        .write("docs/resources/widget.md", RESOURCE_PAGE)
        .write("docs/resources/extra.md", &RESOURCE_PAGE.replace("test_widget", "test_extra"));

    let schema = ProvidersSchema::parse(
        r#"{
            "format_version": "1.0",
            "provider_schemas": {
                "registry.terraform.io/example/test": {
                    "resource_schemas": {
                        "test_gadget": {},
                        "test_widget": {}
                    }
                }
            }
        }"#,
    )
    .unwrap();

    let options = RunOptions {
        schema_names: Some(schema.names(None, "test")),
        ..provider.options()
    };
    assert_eq!(
        report(provider.check(options.clone())),
        vec![
            "matching resource for documentation file (docs/resources/extra.md) not found, file is extraneous or incorrectly named",
            "missing documentation file for resource: test_gadget",
        ]
    );

    let options = RunOptions {
        ignore_file_mismatch: PerKind {
            resource: vec!["test_extra".to_string()],
            ..Default::default()
        },
        ignore_file_missing: PerKind {
            resource: vec!["test_gadget".to_string()],
            ..Default::default()
        },
        ..options
    };
    provider.check(options).unwrap();
}
