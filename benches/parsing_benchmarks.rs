use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tfdocs_lint::contents::sections::locate;
use tfdocs_lint::parser::{extract_frontmatter, read_blocks};

/// Generate a documentation page with `arguments` argument list items
fn generate_page(arguments: usize) -> String {
    let mut page = String::from(
        "---\nsubcategory: \"Widgets\"\n---\n\n# Resource: test_widget\n\nManages a widget.\n\n## Example Usage\n\n```terraform\nresource \"test_widget\" \"example\" {}\n```\n\n## Argument Reference\n\nThis resource supports the following arguments:\n\n",
    );

    for i in 0..arguments {
        page.push_str(&format!(
            "* `argument_{i:05}` - (Optional) Description of argument {i}, see [docs](https://example.com/{i}).\n"
        ));
    }

    page.push_str("\n## Attribute Reference\n\nThis resource exports the following attributes in addition to the arguments above:\n\n* `id` - Identifier.\n");
    page
}

fn bench_read_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_blocks");

    for size in [10, 100, 1000] {
        let page = generate_page(size);
        group.throughput(Throughput::Bytes(page.len() as u64));
        group.bench_with_input(BenchmarkId::new("arguments", size), &page, |b, page| {
            b.iter(|| read_blocks(black_box(page)))
        });
    }

    group.finish();
}

fn bench_locate_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_sections");

    for size in [10, 100, 1000] {
        let blocks = read_blocks(&generate_page(size));
        group.throughput(Throughput::Elements(blocks.len() as u64));
        group.bench_with_input(BenchmarkId::new("arguments", size), &blocks, |b, blocks| {
            b.iter(|| locate(black_box(blocks)))
        });
    }

    group.finish();
}

fn bench_extract_frontmatter(c: &mut Criterion) {
    let page = generate_page(100);
    c.bench_function("extract_frontmatter", |b| {
        b.iter(|| extract_frontmatter(black_box(&page)))
    });
}

criterion_group!(
    benches,
    bench_read_blocks,
    bench_locate_sections,
    bench_extract_frontmatter
);
criterion_main!(benches);
