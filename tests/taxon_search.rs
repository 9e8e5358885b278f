// tests/taxon_search.rs
mod common;

use bugguide::Taxon;
use common::MockFetch;

const BODY: &str = "\
185|Bombyliidae|Bee Flies|4120
117327||Apoid Wasps (Apoidea)- traditional Sphecidae|2302
|orphan row without id|
171|Cerambycidae (Longhorn Beetles)||900
";

#[test]
fn rows_become_unresolved_taxa() {
    let fetch = MockFetch::new()
        .route("https://bugguide.net/adv_search/taxon.php?q=bee", BODY);
    let taxa = Taxon::search(&fetch, "bee").unwrap();

    assert_eq!(taxa.len(), 3);

    assert_eq!(taxa[0].id(), Some("185"));
    assert_eq!(taxa[0].scientific_name(), Some("Bombyliidae"));
    assert_eq!(taxa[0].common_name(), Some("Bee Flies"));
    assert_eq!(taxa[0].url(), Some("https://bugguide.net/node/view/185"));

    assert_eq!(taxa[1].id(), Some("117327"));
    assert_eq!(taxa[1].name(), Some("Apoid Wasps (Apoidea)- traditional Sphecidae"));

    assert_eq!(taxa[2].scientific_name(), Some("Cerambycidae"));
    assert_eq!(taxa[2].common_name(), Some("Longhorn Beetles"));

    assert!(taxa.iter().all(|t| !t.is_resolved()));
    assert_eq!(fetch.count(), 1);
}

#[test]
fn query_is_url_encoded() {
    let fetch = MockFetch::new();
    assert!(Taxon::search(&fetch, "Elachista new #2").is_err());
    assert_eq!(
        fetch.requests(),
        vec!["https://bugguide.net/adv_search/taxon.php?q=Elachista+new+%232".to_string()]
    );
}

#[test]
fn empty_body_gives_no_taxa() {
    let fetch = MockFetch::new().route("https://bugguide.net/adv_search/taxon.php?q=zzz", "");
    assert!(Taxon::search(&fetch, "zzz").unwrap().is_empty());
}

#[test]
fn urls_follow_the_configured_site() {
    let base = "http://mirror.test";
    let fetch = MockFetch::new()
        .with_base_url(base)
        .route("http://mirror.test/adv_search/taxon.php?q=bee", BODY)
        .route("http://mirror.test/node/view/185/tree", common::BOMBYLIIDAE_TREE);

    let taxa = Taxon::search(&fetch, "bee").unwrap();
    assert_eq!(taxa[0].url(), Some("http://mirror.test/node/view/185"));

    let found = Taxon::find(&fetch, "185").unwrap();
    assert_eq!(found.url(), Some("http://mirror.test/node/view/185"));
    let ancestors = found.ancestors(&fetch).unwrap();
    assert_eq!(ancestors[0].url(), Some("http://mirror.test/node/view/3/tree"));
}
