use partscope_catalog::{CatalogSnapshot, load_snapshot, parse_catalog};
use partscope_core::{SearchConfig, Threshold};
use partscope_search::{CatalogBrowser, FilterIntent};

const CATALOG: &str = r#"[
    {"partNumber": "B006700770010", "type": "Brake", "OEM": "Brembo", "compatibleWith": "Golf Mk7", "name": "Front Brake Disc"},
    {"partNumber": "B006700770020", "type": "BRAKE", "OEM": "Brembo", "compatibleWith": "Polo", "name": "Rear Brake Disc"},
    {"partNumber": "F004400120001", "type": "Filter", "OEM": "Mahle", "compatibleWith": "Golf Mk7", "name": "Oil Filter"},
    {"partNumber": "P001", "type": "Pump", "OEM": null, "name": "Water Pump", "price": 129.5},
    {"name": "Catalogue placeholder"}
]"#;

fn parts(browser: &CatalogBrowser) -> Vec<String> {
    browser
        .results()
        .iter()
        .map(|p| p.part_number.clone())
        .collect()
}

#[test]
fn full_browsing_session() {
    let snapshot = load_snapshot(CATALOG.as_bytes()).unwrap();
    let mut browser = CatalogBrowser::with_catalog(SearchConfig::default(), snapshot);

    // Baseline: everything, in catalog order.
    assert_eq!(
        parts(&browser),
        vec!["B006700770010", "B006700770020", "F004400120001", "P001", ""]
    );

    // Toggles: one per lower-cased type, blank type left out.
    let tokens: Vec<String> = browser.type_toggles().into_iter().map(|t| t.token).collect();
    assert_eq!(tokens, vec!["brake", "filter", "pump"]);

    // Filter by brake matches both casings in the source data.
    browser.dispatch(&FilterIntent::Toggle("brake".to_string()));
    assert_eq!(parts(&browser), vec!["B006700770010", "B006700770020"]);

    // Query for a compatible model narrows within the filter.
    browser.dispatch(&FilterIntent::SetQuery("golf".to_string()));
    assert_eq!(parts(&browser), vec!["B006700770010"]);

    // Drop the filter: the filter product for the same model appears too.
    browser.dispatch(&FilterIntent::Toggle("brake".to_string()));
    assert_eq!(parts(&browser), vec!["B006700770010", "F004400120001"]);

    // A typo in the OEM still finds it.
    browser.set_query("Mahel");
    assert_eq!(parts(&browser), vec!["F004400120001"]);

    // Catalog replacement keeps the query and re-derives everything.
    let replacement = parse_catalog(
        r#"[{"partNumber": "F9", "type": "Filter", "OEM": "Mahle"}, {"partNumber": "H1", "type": "Hose"}]"#,
    )
    .unwrap();
    browser.replace_catalog(Some(CatalogSnapshot::new(replacement)));
    assert_eq!(browser.state().query(), "Mahel");
    assert_eq!(parts(&browser), vec!["F9"]);

    let tokens: Vec<String> = browser.type_toggles().into_iter().map(|t| t.token).collect();
    assert_eq!(tokens, vec!["filter", "hose"]);

    // Clearing the query shows the whole new catalog.
    browser.set_query("");
    assert_eq!(parts(&browser), vec!["F9", "H1"]);
}

#[test]
fn strict_threshold_disables_typo_tolerance() {
    let snapshot = load_snapshot(CATALOG.as_bytes()).unwrap();
    let config = SearchConfig::default().with_threshold(Threshold::new(0.0).unwrap());
    let mut browser = CatalogBrowser::with_catalog(config, snapshot);

    browser.set_query("Mahel");
    assert!(browser.results().is_empty());

    browser.set_query("mahle");
    assert_eq!(parts(&browser), vec!["F004400120001"]);
}

#[test]
fn view_serializes_for_presentation() {
    let snapshot = load_snapshot(CATALOG.as_bytes()).unwrap();
    let mut browser = CatalogBrowser::with_catalog(SearchConfig::default(), snapshot);
    browser.toggle("Pump");

    let view = serde_json::to_value(browser.view()).unwrap();
    assert_eq!(view["query"], "");
    assert_eq!(view["active_filters"], serde_json::json!(["pump"]));
    assert_eq!(view["results"][0]["product"]["partNumber"], "P001");
    assert_eq!(view["results"][0]["slug"], "water-pump");
    assert_eq!(view["results"][0]["product"]["price"], 129.5);
    assert!(view["results"][0].get("score").is_none());
}
