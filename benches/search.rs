use criterion::{criterion_group, criterion_main, Criterion};
use edge_bookmarks::plugins::bookmarks::source::{filter, Roots};
use serde_json::{json, Value};

fn bench_search(c: &mut Criterion) {
    let folders: Vec<Value> = (0..100)
        .map(|f| {
            let children: Vec<Value> = (0..100)
                .map(|i| {
                    json!({
                        "type": "url",
                        "name": format!("Item {f}-{i}"),
                        "url": format!("https://example.com/{f}/{i}"),
                    })
                })
                .collect();
            json!({ "type": "folder", "name": format!("Folder {f}"), "children": children })
        })
        .collect();
    let doc = json!({
        "roots": {
            "bookmark_bar": { "type": "folder", "children": folders },
            "other": { "type": "folder", "children": [] },
        }
    });
    let roots = Roots::from_value(&doc).unwrap();
    c.bench_function("flatten_filter_10k", |b| {
        b.iter(|| filter(roots.entries(), "item 99-99"))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
