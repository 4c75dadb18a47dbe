use criterion::{black_box, criterion_group, criterion_main, Criterion};
use webnav::manager::{error_page, parse_address};
use webnav::NetworkError;

/// Address bar input parsing
fn benchmark_parse_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_address");

    group.bench_function("full_url", |b| {
        b.iter(|| parse_address(black_box("https://example.com/docs/index.html?q=1"), true))
    });

    group.bench_function("bare_host", |b| {
        b.iter(|| parse_address(black_box("example.com/docs"), true))
    });

    group.bench_function("malformed", |b| {
        b.iter(|| parse_address(black_box("not a url"), true))
    });

    group.finish();
}

/// Error page rendering
fn benchmark_error_page(c: &mut Criterion) {
    let error = NetworkError::Other("<script>alert('x')</script> & more".to_string());
    let url = url::Url::parse("https://example.com/").ok();

    c.bench_function("error_page_render", |b| {
        b.iter(|| error_page::render(black_box(&error), url.as_ref()))
    });
}

criterion_group!(benches, benchmark_parse_address, benchmark_error_page);
criterion_main!(benches);
