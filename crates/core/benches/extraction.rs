use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sitelift_core::{Document, OutlineConfig, collect_blocks, contacts_from_html, outline_from_html};
use sitelift_core::outline::outline_blocks;

fn generated_page(sections: usize) -> String {
    let mut html = String::from("<html><head><title>Generated</title></head><body>");
    for i in 0..sections {
        html.push_str(&format!("<h2>Section {i}</h2>"));
        html.push_str(&format!("<p>Paragraph {i} describes the section in a handful of words.</p>"));
        for j in 0..12 {
            html.push_str(&format!("<li>Point {j} <a href=\"/page/{i}/{j}\">link</a></li>"));
        }
    }
    html.push_str("<a href=\"mailto:hello@example.com\">mail</a></body></html>");
    html
}

fn bench_parse(c: &mut Criterion) {
    let small = std::fs::read_to_string("../../tests/fixtures/landing.html").unwrap();
    let medium = generated_page(50);
    let large = generated_page(500);

    let mut group = c.benchmark_group("parse");

    group.bench_with_input(BenchmarkId::new("small", "landing"), &small, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("medium", "50 sections"), &medium, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.bench_with_input(BenchmarkId::new("large", "500 sections"), &large, |b, html| {
        b.iter(|| Document::parse(black_box(html)))
    });

    group.finish();
}

fn bench_outline(c: &mut Criterion) {
    let html = generated_page(200);

    c.bench_function("outline_from_html", |b| b.iter(|| outline_from_html(black_box(&html), "bench")));
}

fn bench_outline_walk(c: &mut Criterion) {
    let html = generated_page(200);
    let blocks = collect_blocks(&Document::parse(&html));
    let config = OutlineConfig::default();

    c.bench_function("outline_walk", |b| b.iter(|| outline_blocks(black_box(&blocks), black_box(&config))));
}

fn bench_contacts(c: &mut Criterion) {
    let html = generated_page(200);

    c.bench_function("contacts_from_html", |b| b.iter(|| contacts_from_html(black_box(&html))));
}

criterion_group!(benches, bench_parse, bench_outline, bench_outline_walk, bench_contacts);
criterion_main!(benches);
