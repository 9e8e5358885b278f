// benches/labels.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use bugguide::specs::tree::TreePage;
use bugguide::taxon::label::{lineage_split, split_label};
use bugguide::taxon::lineage;

const LABELS: &[&str] = &[
    "Trichocnemis spiculatus (Ponderous Borer)",
    "fusca group subsericea (Formica subsericea)",
    "Trichocnemis (Big-headed Borers)",
    "subgenus Prionus lecontei (Prionus lecontei)",
    "Formicidae",
];

const LINEAGE_LABELS: &[&str] = &[
    "Arthropods (Arthropoda)",
    "Ants, Bees, Wasps and Sawflies (Hymenoptera)",
    "Asiloidea - Asiloid Flies",
    "Brachycera",
];

fn bench_labels(c: &mut Criterion) {
    c.bench_function("split_label", |b| {
        b.iter(|| {
            for l in LABELS {
                black_box(split_label(black_box(l)));
            }
        })
    });

    c.bench_function("lineage_split", |b| {
        b.iter(|| {
            for l in LINEAGE_LABELS {
                black_box(lineage_split(black_box(l)));
            }
        })
    });

    let page = include_str!("../tests/fixtures/bombyliidae_tree.html");
    c.bench_function("tree_page_ancestors", |b| {
        b.iter(|| {
            let parsed = TreePage::parse(black_box(page)).expect("parse fixture");
            black_box(lineage::ancestors(&parsed, Some("Bombyliidae"), "https://bugguide.net").len())
        })
    });
}

criterion_group!(benches, bench_labels);
criterion_main!(benches);
