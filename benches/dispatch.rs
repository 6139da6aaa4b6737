// benches/dispatch.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use np_scrape::core::query::Document;
use np_scrape::dispatch::{Dispatcher, Subject};
use np_scrape::extract::multi_table;
use np_scrape::overrides::OverrideRegistry;

/// A country page with `tables` regional tables of `rows` parks each, plus an
/// unrelated climate table the multi-table extractor has to skip.
fn sample_page(tables: usize, rows: usize) -> String {
    let mut html = String::from(r#"<html><body><div class="mw-parser-output"><p>Intro</p>"#);
    html.push_str(r#"<table class="wikitable"><tr><th>Month</th><th>Rain</th></tr><tr><td>Jan</td><td>3</td></tr></table>"#);
    for t in 0..tables {
        html.push_str(r#"<table class="wikitable"><tr><th>Name</th><th>Location</th><th>Area</th></tr>"#);
        for r in 0..rows {
            html.push_str(&format!(
                r#"<tr><td><a href="/wiki/Park_{t}_{r}">Park {t}-{r}</a><sup><a href="#cite_note-{r}">[{r}]</a></sup></td>
                   <td><span class="geo-inline"><span class="latitude">{}°{}′N</span> <span class="longitude">{}°{}′E</span></span></td>
                   <td>{}</td></tr>"#,
                r % 90,
                r % 60,
                (t * 7 + r) % 180,
                (t + r) % 60,
                r * 10
            ));
        }
        html.push_str("</table>");
    }
    html.push_str("</div></body></html>");
    html
}

fn bench_dispatch(c: &mut Criterion) {
    let html = sample_page(4, 60);
    let doc = Document::parse(&html);
    let registry = OverrideRegistry::builtin();
    let dispatcher = Dispatcher::new(&registry);

    c.bench_function("parse_document", |b| {
        b.iter(|| black_box(Document::parse(black_box(&html))))
    });

    c.bench_function("multi_table_extract", |b| {
        b.iter(|| black_box(multi_table(doc.root()).len()))
    });

    c.bench_function("dispatch_document_route", |b| {
        b.iter(|| {
            let subject = Subject { name: "Benchland", declared: Some(240), root: doc.root() };
            black_box(dispatcher.dispatch(black_box(&subject)).areas.len())
        })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
