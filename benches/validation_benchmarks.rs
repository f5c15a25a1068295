use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tfdocs_lint::check::frontmatter::{FrontMatterOptions, check_frontmatter};
use tfdocs_lint::contents::{ArgumentsSectionOptions, AttributesSectionOptions, CheckOptions, Document};

fn generate_page(arguments: usize) -> String {
    let mut page = String::from(
        "---\nsubcategory: \"Widgets\"\n---\n\n# Resource: test_widget\n\n## Argument Reference\n\nThis resource supports the following arguments:\n\n* `region` - (Optional) Region where this resource will be managed.\n",
    );

    for i in 0..arguments {
        page.push_str(&format!(
            "* `setting_{i:05}` - (Optional) Description of setting {i}.\n"
        ));
    }

    page.push_str("\n## Attribute Reference\n\nThis resource exports the following attributes in addition to the arguments above:\n\n* `id` - Identifier.\n\n## Import\n\nIn Terraform v1.5.0 and later, use an `import` block to import widgets using the `id`. For example:\n\n```terraform\nimport {\n  to = test_widget.example\n  id = \"w-1\"\n}\n```\n");
    page
}

fn strict_options() -> CheckOptions {
    CheckOptions {
        arguments: ArgumentsSectionOptions {
            enhanced_region_checks: true,
            region_aware: true,
            require_schema_ordering: true,
            ..Default::default()
        },
        attributes: AttributesSectionOptions {
            require_schema_ordering: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bench_document_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_check");
    let opts = strict_options();

    for size in [10, 100, 1000] {
        let page = generate_page(size);
        let doc = Document::parse(page.as_bytes(), "test_widget", "test")
            .expect("benchmark page should parse");
        assert!(doc.check(&opts, Some("Widgets")).is_ok());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("arguments", size), &doc, |b, doc| {
            b.iter(|| doc.check(black_box(&opts), black_box(Some("Widgets"))))
        });
    }

    group.finish();
}

fn bench_parse_and_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_check");
    let opts = strict_options();

    for size in [10, 100, 1000] {
        let page = generate_page(size);
        group.throughput(Throughput::Bytes(page.len() as u64));
        group.bench_with_input(BenchmarkId::new("arguments", size), &page, |b, page| {
            b.iter(|| {
                Document::parse(black_box(page.as_bytes()), "test_widget", "test")
                    .map(|doc| doc.check(&opts, None))
            })
        });
    }

    group.finish();
}

fn bench_frontmatter(c: &mut Criterion) {
    let page = generate_page(10);
    let opts = FrontMatterOptions {
        require_subcategory: true,
        allowed_subcategories: vec!["Gadgets".to_string(), "Widgets".to_string()],
        no_layout: true,
        no_sidebar_current: true,
        ..Default::default()
    };

    c.bench_function("check_frontmatter", |b| {
        b.iter(|| check_frontmatter(black_box(&page), black_box(&opts)))
    });
}

criterion_group!(
    benches,
    bench_document_check,
    bench_parse_and_check,
    bench_frontmatter
);
criterion_main!(benches);
