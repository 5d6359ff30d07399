use criterion::{criterion_group, criterion_main, Criterion};
use linedit::config::Settings;
use linedit::document::{Document, Location};
use rand::random;

const LINE: &str = "fn main() {\tprintln!(\"hello\");\t}\n";
const PASTE: &[u8] = b"first pasted line\n\tsecond pasted line\nthird";

fn document() -> Document {
    Document::from_text(LINE.repeat(10_000).as_bytes(), Settings::default())
}

fn random_location(document: &Document) -> Location {
    let line = random::<usize>() % document.line_count();
    let offset = random::<usize>() % (document.line(line).size() + 1);
    Location::new(line, offset)
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("insert_random_byte", |b| {
        let document = &mut document();
        b.iter(|| {
            let location = random_location(document);
            document.insert(location, b'a');
        });
    });
    c.bench_function("insert_random_text", |b| {
        let document = &mut document();
        b.iter(|| {
            let location = random_location(document);
            document.insert_text(location, PASTE);
        });
    });
    c.bench_function("split_random", |b| {
        let document = &mut document();
        b.iter(|| {
            let location = random_location(document);
            document.split(location);
        });
    });

    c.bench_function("insert_start_byte", |b| {
        let document = &mut document();
        b.iter(|| {
            document.insert(Location::new(0, 0), b'a');
        });
    });
    c.bench_function("insert_end_text", |b| {
        let document = &mut document();
        b.iter(|| {
            let end = document.end();
            document.insert_text(end, PASTE);
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
