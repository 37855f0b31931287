//! Benchmarks for secparse classification and tree building.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the default pipeline over synthetic filings.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use secparse::{build_tree, render, Document, RenderOptions, SecParser};

/// Creates a synthetic filing with the given number of sections.
fn create_test_filing(section_count: usize) -> String {
    let mut html = String::from("<html><body><div>");

    for i in 0..section_count {
        if i % 5 == 0 {
            html.push_str(&format!("<h1>PART {}</h1>", i / 5 + 1));
        }
        html.push_str(&format!("<h2>Item {}. Section heading</h2>", i + 1));
        html.push_str(
            "<p>Total net sales decreased compared to the same quarter of the prior year, \
             driven by lower sales of hardware products.</p>",
        );
        html.push_str("<p>&nbsp;</p>");
        html.push_str("<div><div><table>");
        for row in 0..10 {
            html.push_str(&format!(
                "<tr><td>Line item {}</td><td>$</td><td>{},{:03}</td></tr>",
                row,
                row + 1,
                row * 7
            ));
        }
        html.push_str("</table></div></div>");
    }

    html.push_str("</div></body></html>");
    html
}

fn bench_pipeline(c: &mut Criterion) {
    let html = create_test_filing(50);
    let doc = Document::parse(&html);
    let parser = SecParser::new();

    c.bench_function("classify_50_sections", |b| {
        b.iter(|| parser.parse_elements(black_box(&doc)).unwrap())
    });
}

fn bench_tree(c: &mut Criterion) {
    let html = create_test_filing(50);
    let doc = Document::parse(&html);
    let parser = SecParser::new();

    c.bench_function("build_and_render_50_sections", |b| {
        b.iter(|| {
            let elements = parser.parse_elements(&doc).unwrap();
            let tree = build_tree(elements);
            render::to_text(&tree, &RenderOptions::default())
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let documents: Vec<String> = (0..16).map(|_| create_test_filing(10)).collect();
    let parser = SecParser::new();

    c.bench_function("render_batch_16_documents", |b| {
        b.iter(|| parser.render_batch(black_box(&documents), &RenderOptions::default()))
    });
}

criterion_group!(benches, bench_pipeline, bench_tree, bench_batch);
criterion_main!(benches);
