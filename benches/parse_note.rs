//! This bench test parses a large synthetic checklist note.

#![allow(missing_docs)]

use std::fmt::Write;
use std::hint::black_box;
use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};
use nudge::storage::note;

/// Generates a note with many entries, children and embedded links, mixed
/// with prose and blank lines the parser has to skip.
fn synthetic_note(entries: usize) -> String {
    let mut content = String::from("# Synthetic note\n\nIntro prose.\n\n");
    for index in 0..entries {
        let marker = if index % 3 == 0 { 'x' } else { ' ' };
        writeln!(
            content,
            "- [{marker}] Entry {index} with [a link](https://example.com/{index})"
        )
        .unwrap();
        for child in 0..3 {
            writeln!(content, "  - [ ] Child {child} of entry {index}").unwrap();
        }
        if index % 7 == 0 {
            content.push('\n');
        }
    }
    content
}

fn parse_note(c: &mut Criterion) {
    let content = synthetic_note(1000);

    c.bench_function("parse note", |b| {
        b.iter(|| note::read(Cursor::new(black_box(content.as_bytes()))).unwrap());
    });
}

criterion_group!(benches, parse_note);
criterion_main!(benches);
