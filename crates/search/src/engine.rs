//! Resolution: combine the fuzzy index with the filter state.
//!
//! ```text
//! base   = query empty ? catalog order : index.search(query)
//! result = no active filters ? base : base where lower(type) in active
//! ```
//!
//! Resolution is a pure function of the index (and therefore its catalog
//! snapshot) and the filter state. Nothing is cached between calls.

use partscope_catalog::Product;

use crate::filter::FilterState;
use crate::index::FuzzyIndex;

/// One visible product with its match score (absent when there is no query).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub product: &'a Product,
    pub score: Option<f64>,
}

/// Visible products with scores, in display order.
pub fn resolve_scored<'a>(index: &'a FuzzyIndex, state: &FilterState) -> Vec<Resolved<'a>> {
    let products = index.products();

    let resolved: Vec<Resolved<'a>> = if state.has_query() {
        index
            .search_scored(state.query())
            .into_iter()
            .map(|hit| Resolved {
                product: &products[hit.position],
                score: Some(hit.score),
            })
            .filter(|r| state.admits(r.product))
            .collect()
    } else {
        products
            .iter()
            .filter(|product| state.admits(product))
            .map(|product| Resolved {
                product,
                score: None,
            })
            .collect()
    };

    tracing::trace!(
        snapshot = %index.snapshot_id(),
        query = state.query(),
        active_filters = state.active_filters().len(),
        results = resolved.len(),
        "resolved"
    );

    resolved
}

/// Visible products in display order.
pub fn resolve<'a>(index: &'a FuzzyIndex, state: &FilterState) -> Vec<&'a Product> {
    resolve_scored(index, state)
        .into_iter()
        .map(|r| r.product)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use partscope_catalog::CatalogSnapshot;
    use partscope_core::SearchConfig;

    fn scenario_index() -> FuzzyIndex {
        FuzzyIndex::build(
            CatalogSnapshot::new(vec![
                Product::new("B1", "Brake"),
                Product::new("F1", "Filter"),
            ]),
            &SearchConfig::default(),
        )
    }

    fn parts(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.part_number.clone()).collect()
    }

    fn state(query: &str, filters: &[&str]) -> FilterState {
        let mut state = FilterState::new();
        state.set_query(query);
        for f in filters {
            state.toggle(f);
        }
        state
    }

    #[test]
    fn scenario_a_no_query_no_filters_keeps_catalog_order() {
        let index = scenario_index();
        assert_eq!(parts(&resolve(&index, &state("", &[]))), vec!["B1", "F1"]);
    }

    #[test]
    fn scenario_b_filter_only() {
        let index = scenario_index();
        assert_eq!(parts(&resolve(&index, &state("", &["brake"]))), vec!["B1"]);
    }

    #[test]
    fn scenario_c_query_only() {
        let index = scenario_index();
        assert_eq!(parts(&resolve(&index, &state("B1", &[]))), vec!["B1"]);
    }

    #[test]
    fn scenario_d_query_excluded_by_filter() {
        let index = scenario_index();
        assert!(resolve(&index, &state("B1", &["filter"])).is_empty());
    }

    #[test]
    fn scenario_e_double_toggle_is_a_no_op() {
        let index = scenario_index();
        let baseline = resolve(&index, &FilterState::new());

        let mut s = FilterState::new();
        s.toggle("brake");
        s.toggle("brake");

        assert!(s.active_filters().is_empty());
        assert_eq!(resolve(&index, &s), baseline);
    }

    #[test]
    fn filters_compose_as_union_of_types() {
        let index = FuzzyIndex::build(
            CatalogSnapshot::new(vec![
                Product::new("B1", "Brake"),
                Product::new("F1", "Filter"),
                Product::new("P1", "Pump"),
            ]),
            &SearchConfig::default(),
        );
        assert_eq!(
            parts(&resolve(&index, &state("", &["pump", "brake"]))),
            vec!["B1", "P1"]
        );
    }

    #[test]
    fn upper_case_type_matches_lower_case_token() {
        let index = FuzzyIndex::build(
            CatalogSnapshot::new(vec![Product::new("B9", "BRAKE")]),
            &SearchConfig::default(),
        );
        assert_eq!(parts(&resolve(&index, &state("", &["Brake"]))), vec!["B9"]);
    }

    #[test]
    fn query_results_keep_match_order_after_filtering() {
        let index = FuzzyIndex::build(
            CatalogSnapshot::new(vec![
                Product::new("BRKE-1", "Pad"),
                Product::new("X", "Filter").with_oem("brake systems"),
                Product::new("BRAKE-2", "Pad"),
            ]),
            &SearchConfig::default(),
        );

        let resolved = resolve_scored(&index, &state("brake", &["pad"]));
        let parts: Vec<&str> = resolved.iter().map(|r| r.product.part_number.as_str()).collect();
        assert_eq!(parts, vec!["BRAKE-2", "BRKE-1"]);
        assert_eq!(resolved[0].score, Some(0.0));
    }

    #[test]
    fn no_query_has_no_scores() {
        let index = scenario_index();
        assert!(resolve_scored(&index, &FilterState::new())
            .iter()
            .all(|r| r.score.is_none()));
    }

    #[test]
    fn stale_filter_yields_empty_result() {
        let index = scenario_index();
        assert!(resolve(&index, &state("", &["discontinued"])).is_empty());
    }

    #[test]
    fn empty_catalog_resolves_to_nothing() {
        let index = FuzzyIndex::build(CatalogSnapshot::empty(), &SearchConfig::default());
        assert!(resolve(&index, &state("", &[])).is_empty());
        assert!(resolve(&index, &state("B1", &["brake"])).is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const TYPES: [&str; 4] = ["Brake", "FILTER", "pump", "Hose"];

        fn arb_product() -> impl Strategy<Value = Product> {
            ("[A-Z][0-9]{1,4}", 0..TYPES.len(), "[a-z ]{0,10}", "[a-z ]{0,10}").prop_map(
                |(part, ty, oem, compat)| {
                    Product::new(part, TYPES[ty])
                        .with_oem(oem)
                        .with_compatible_with(compat)
                },
            )
        }

        fn arb_filters() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::vec(
                prop_oneof![
                    (0..TYPES.len()).prop_map(|i| TYPES[i].to_string()),
                    "[a-z]{3,6}",
                ],
                0..4,
            )
        }

        fn build(products: Vec<Product>) -> FuzzyIndex {
            FuzzyIndex::build(CatalogSnapshot::new(products), &SearchConfig::default())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: with no query, resolution is the catalog filtered by type, in order.
            #[test]
            fn empty_query_equals_filtered_catalog(
                products in proptest::collection::vec(arb_product(), 0..20),
                filters in arb_filters()
            ) {
                let index = build(products);
                let mut s = FilterState::new();
                for f in &filters {
                    s.toggle(f);
                }

                let expected: Vec<&Product> = index
                    .products()
                    .iter()
                    .filter(|p| s.active_filters().is_empty()
                        || s.active_filters().contains(&p.product_type.to_lowercase()))
                    .collect();

                prop_assert_eq!(resolve(&index, &s), expected);
            }

            /// Property: query results are a filtered subsequence of the search results.
            #[test]
            fn query_results_are_filtered_search_results(
                products in proptest::collection::vec(arb_product(), 0..20),
                filters in arb_filters(),
                query in "[a-z0-9]{1,5}"
            ) {
                let index = build(products);
                let mut s = FilterState::new();
                s.set_query(query.clone());
                for f in &filters {
                    s.toggle(f);
                }

                let searched = index.search(&query);
                let expected: Vec<&Product> = searched
                    .iter()
                    .copied()
                    .filter(|p| s.admits(p))
                    .collect();
                let resolved = resolve(&index, &s);

                prop_assert_eq!(&resolved, &expected);
                for p in &resolved {
                    prop_assert!(s.active_filters().is_empty()
                        || s.active_filters().contains(&p.type_token()));
                }
            }

            /// Property: resolving twice with unchanged inputs is identical.
            #[test]
            fn resolution_is_deterministic(
                products in proptest::collection::vec(arb_product(), 0..20),
                filters in arb_filters(),
                query in "[a-z0-9]{0,5}"
            ) {
                let index = build(products);
                let mut s = FilterState::new();
                s.set_query(query);
                for f in &filters {
                    s.toggle(f);
                }

                let first = resolve_scored(&index, &s);
                let second = resolve_scored(&index, &s);
                prop_assert_eq!(first, second);
            }

            /// Property: a double toggle leaves the resolved output unchanged.
            #[test]
            fn double_toggle_preserves_output(
                products in proptest::collection::vec(arb_product(), 0..20),
                filters in arb_filters(),
                token in "[A-Za-z]{1,8}",
                query in "[a-z0-9]{0,4}"
            ) {
                let index = build(products);
                let mut s = FilterState::new();
                s.set_query(query);
                for f in &filters {
                    s.toggle(f);
                }
                let before: Vec<&Product> = resolve(&index, &s);

                s.toggle(&token);
                s.toggle(&token);

                prop_assert_eq!(resolve(&index, &s), before);
            }
        }
    }
}
