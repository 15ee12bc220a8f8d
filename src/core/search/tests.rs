//! Tests for the search pipeline

#[cfg(test)]
mod tests {
    use super::super::diversifier::{diversify_by_dealer, should_apply_diversification};
    use super::super::sort::apply_sort;
    use super::super::types::{SortMode, Vehicle};

    fn vehicle(id: &str, dealer_id: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            dealer_id: dealer_id.to_string(),
            dealer_name: format!("Dealer {}", dealer_id),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2021,
            price: Some(25_000),
            mileage: Some(30_000),
            distance_miles: Some(12.5),
            detail_url: format!("/vehicle/{}", id),
        }
    }

    fn ids(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(diversify_by_dealer(Vec::new(), 10).is_empty());
    }

    #[test]
    fn test_zero_max_results_gives_empty_output() {
        let input = vec![vehicle("v1", "a"), vehicle("v2", "b")];
        assert!(diversify_by_dealer(input, 0).is_empty());
    }

    #[test]
    fn test_output_length_is_min_of_bounds() {
        let input: Vec<Vehicle> = (0..10)
            .map(|i| vehicle(&format!("v{}", i), &format!("d{}", i % 3)))
            .collect();

        assert_eq!(diversify_by_dealer(input.clone(), 4).len(), 4);
        assert_eq!(diversify_by_dealer(input.clone(), 10).len(), 10);
        assert_eq!(diversify_by_dealer(input, 50).len(), 10);
    }

    #[test]
    fn test_no_duplication_or_fabrication() {
        let input: Vec<Vehicle> = (0..8)
            .map(|i| vehicle(&format!("v{}", i), &format!("d{}", i % 2)))
            .collect();

        let output = diversify_by_dealer(input.clone(), 8);
        let mut output_ids = ids(&output);
        output_ids.sort_unstable();
        let mut input_ids = ids(&input);
        input_ids.sort_unstable();
        assert_eq!(output_ids, input_ids);
    }

    #[test]
    fn test_fairness_two_dealers() {
        // A and B interleaved as ranked, 5 records each
        let input = vec![
            vehicle("a1", "A"),
            vehicle("b1", "B"),
            vehicle("a2", "A"),
            vehicle("b2", "B"),
            vehicle("a3", "A"),
            vehicle("b3", "B"),
            vehicle("a4", "A"),
            vehicle("b4", "B"),
            vehicle("a5", "A"),
            vehicle("b5", "B"),
        ];

        let output = diversify_by_dealer(input, 4);
        let from_a: Vec<&str> = output
            .iter()
            .filter(|v| v.dealer_id == "A")
            .map(|v| v.id.as_str())
            .collect();
        let from_b: Vec<&str> = output
            .iter()
            .filter(|v| v.dealer_id == "B")
            .map(|v| v.id.as_str())
            .collect();

        assert_eq!(from_a, vec!["a1", "a2"]);
        assert_eq!(from_b, vec!["b1", "b2"]);
    }

    #[test]
    fn test_round_robin_spreads_leading_slots() {
        // Dealer A holds the top 3 ranks but B and C have inventory, so the
        // first three output slots must cover three distinct dealers.
        let input = vec![
            vehicle("a1", "A"),
            vehicle("a2", "A"),
            vehicle("a3", "A"),
            vehicle("b1", "B"),
            vehicle("c1", "C"),
        ];

        let output = diversify_by_dealer(input, 5);
        assert_eq!(ids(&output), vec!["a1", "b1", "c1", "a2", "a3"]);
    }

    #[test]
    fn test_single_dealer_degrades_to_prefix() {
        let input: Vec<Vehicle> = (0..10)
            .map(|i| vehicle(&format!("v{}", i), "solo"))
            .collect();

        let output = diversify_by_dealer(input, 3);
        assert_eq!(ids(&output), vec!["v0", "v1", "v2"]);
    }

    #[test]
    fn test_exhausted_bucket_is_skipped() {
        let input = vec![
            vehicle("a1", "A"),
            vehicle("b1", "B"),
            vehicle("b2", "B"),
            vehicle("b3", "B"),
        ];

        let output = diversify_by_dealer(input, 4);
        assert_eq!(ids(&output), vec!["a1", "b1", "b2", "b3"]);
    }

    #[test]
    fn test_idempotent_when_already_spread() {
        let input = vec![
            vehicle("a1", "A"),
            vehicle("b1", "B"),
            vehicle("c1", "C"),
            vehicle("a2", "A"),
            vehicle("b2", "B"),
            vehicle("c2", "C"),
        ];

        let once = diversify_by_dealer(input, 6);
        let twice = diversify_by_dealer(once.clone(), 6);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let input: Vec<Vehicle> = (0..20)
            .map(|i| vehicle(&format!("v{}", i), &format!("d{}", i % 4)))
            .collect();

        let first = diversify_by_dealer(input.clone(), 12);
        let second = diversify_by_dealer(input, 12);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_dealer_id_forms_own_bucket() {
        let input = vec![
            vehicle("a1", "A"),
            vehicle("x1", ""),
            vehicle("a2", "A"),
            vehicle("x2", ""),
        ];

        let output = diversify_by_dealer(input, 4);
        assert_eq!(ids(&output), vec!["a1", "x1", "a2", "x2"]);
    }

    #[test]
    fn test_gating_allow_list() {
        assert!(should_apply_diversification(None));
        assert!(should_apply_diversification(Some("")));
        assert!(should_apply_diversification(Some("relevance")));
        assert!(should_apply_diversification(Some("distance")));
        assert!(should_apply_diversification(Some("year_desc")));
        assert!(should_apply_diversification(Some("year_asc")));
    }

    #[test]
    fn test_gating_strict_intent_sorts() {
        assert!(!should_apply_diversification(Some("price_asc")));
        assert!(!should_apply_diversification(Some("price_desc")));
        assert!(!should_apply_diversification(Some("mileage_asc")));
        assert!(!should_apply_diversification(Some("mileage_desc")));
    }

    #[test]
    fn test_gating_unknown_sort_key() {
        assert!(!should_apply_diversification(Some("unknown_value")));
    }

    #[test]
    fn test_sort_price_asc_missing_last() {
        let mut vehicles = vec![
            Vehicle {
                price: Some(30_000),
                ..vehicle("v1", "a")
            },
            Vehicle {
                price: None,
                ..vehicle("v2", "b")
            },
            Vehicle {
                price: Some(20_000),
                ..vehicle("v3", "c")
            },
        ];

        apply_sort(&mut vehicles, SortMode::PriceAsc);
        assert_eq!(ids(&vehicles), vec!["v3", "v1", "v2"]);
    }

    #[test]
    fn test_sort_price_desc_missing_still_last() {
        let mut vehicles = vec![
            Vehicle {
                price: None,
                ..vehicle("v1", "a")
            },
            Vehicle {
                price: Some(20_000),
                ..vehicle("v2", "b")
            },
            Vehicle {
                price: Some(30_000),
                ..vehicle("v3", "c")
            },
        ];

        apply_sort(&mut vehicles, SortMode::PriceDesc);
        assert_eq!(ids(&vehicles), vec!["v3", "v2", "v1"]);
    }

    #[test]
    fn test_sort_year_desc() {
        let mut vehicles = vec![
            Vehicle {
                year: 2019,
                ..vehicle("v1", "a")
            },
            Vehicle {
                year: 2023,
                ..vehicle("v2", "b")
            },
            Vehicle {
                year: 2021,
                ..vehicle("v3", "c")
            },
        ];

        apply_sort(&mut vehicles, SortMode::YearDesc);
        assert_eq!(ids(&vehicles), vec!["v2", "v3", "v1"]);
    }

    #[test]
    fn test_sort_distance_missing_last() {
        let mut vehicles = vec![
            Vehicle {
                distance_miles: Some(40.0),
                ..vehicle("v1", "a")
            },
            Vehicle {
                distance_miles: None,
                ..vehicle("v2", "b")
            },
            Vehicle {
                distance_miles: Some(5.0),
                ..vehicle("v3", "c")
            },
        ];

        apply_sort(&mut vehicles, SortMode::Distance);
        assert_eq!(ids(&vehicles), vec!["v3", "v1", "v2"]);
    }

    #[test]
    fn test_sort_relevance_preserves_order() {
        let mut vehicles = vec![vehicle("v1", "a"), vehicle("v2", "b"), vehicle("v3", "c")];
        apply_sort(&mut vehicles, SortMode::Relevance);
        assert_eq!(ids(&vehicles), vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut vehicles = vec![
            Vehicle {
                year: 2021,
                ..vehicle("v1", "a")
            },
            Vehicle {
                year: 2021,
                ..vehicle("v2", "b")
            },
            Vehicle {
                year: 2021,
                ..vehicle("v3", "c")
            },
        ];

        apply_sort(&mut vehicles, SortMode::YearAsc);
        assert_eq!(ids(&vehicles), vec!["v1", "v2", "v3"]);
    }
}
