use roofline_core::{crawl_locations, Coordinate, CrawlConfig};

fn config(max_requests: usize, max_crawl_depth: usize) -> CrawlConfig {
    CrawlConfig {
        max_requests,
        max_crawl_depth,
        ..CrawlConfig::default()
    }
}

fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    ((a.lat - b.lat).powi(2) + (a.lon - b.lon).powi(2)).sqrt()
}

#[test]
fn single_seed_single_request_returns_the_seed() {
    let result = crawl_locations(&[(10.12345, 20.54321)], &config(1, 4));
    assert_eq!(result, vec![Coordinate::new(10.12345, 20.54321, 6)]);
}

#[test]
fn depth_one_visits_each_seed_once() {
    let seeds = [(10.12345, 20.54321), (30.98765, 40.12345)];
    let result = crawl_locations(&seeds, &config(10, 1));
    assert_eq!(
        result,
        vec![
            Coordinate::new(10.12345, 20.54321, 6),
            Coordinate::new(30.98765, 40.12345, 6),
        ]
    );
}

#[test]
fn empty_seeds_yield_empty_result() {
    assert!(crawl_locations(&[], &CrawlConfig::default()).is_empty());
}

#[test]
fn zero_budgets_yield_empty_result() {
    let seeds = [(10.12345, 20.54321)];
    assert!(crawl_locations(&seeds, &config(0, 4)).is_empty());
    assert!(crawl_locations(&seeds, &config(10, 0)).is_empty());
}

#[test]
fn request_budget_truncates_the_result() {
    let seeds = [(10.12345, 20.54321), (30.98765, 40.12345)];
    let result = crawl_locations(&seeds, &config(5, 10));
    assert_eq!(result.len(), 5);
}

#[test]
fn depth_limits_produce_the_ring_sequence() {
    // One seed on a 4-neighbor lattice: 1, then +4, then +8 minus overlap.
    for (depth, expected) in [(1, 1), (2, 5), (3, 13)] {
        let result = crawl_locations(&[(10.12345, 20.54321)], &config(1000, depth));
        assert_eq!(result.len(), expected, "depth {depth}");
    }
}

#[test]
fn coordinates_hold_the_configured_precision() {
    let crawl_config = CrawlConfig {
        precision: 3,
        ..config(50, 4)
    };
    let result = crawl_locations(&[(10.12345, 20.54999), (30.9, 40.18901)], &crawl_config);

    for coord in result {
        let scale = 10f64.powi(3);
        assert_eq!((coord.lat * scale).round() / scale, coord.lat);
        assert_eq!((coord.lon * scale).round() / scale, coord.lon);
    }
}

#[test]
fn result_contains_no_duplicates() {
    // Seeds coincide after rounding.
    let seeds = [(10.12345, 20.54321), (10.12345, 20.54321)];
    let result = crawl_locations(&seeds, &config(100, 3));

    for (i, a) in result.iter().enumerate() {
        for b in &result[i + 1..] {
            assert!(a.lat != b.lat || a.lon != b.lon, "duplicate {a:?}");
        }
    }
}

#[test]
fn seeds_straddling_zero_collapse_to_one_location() {
    // Both seeds round to latitude 0; the sign of the tiny remainder must
    // not leak into the dedup key.
    let seeds = [(-1e-9, 5.0), (1e-9, 5.0)];
    let result = crawl_locations(&seeds, &config(10, 1));
    assert_eq!(result, vec![Coordinate::new(0.0, 5.0, 6)]);
}

#[test]
fn visit_order_is_breadth_first_from_the_seed() {
    let seed = Coordinate::new(10.12345, 20.54321, 6);
    let result = crawl_locations(&[(seed.lat, seed.lon)], &config(13, 3));

    assert_eq!(distance(&result[0], &seed), 0.0);
    assert!(
        distance(&result[0], &result[1]) < distance(&result[0], result.last().unwrap()),
        "later coordinates should be farther from the seed"
    );
}

#[test]
fn config_round_trips_through_toml() {
    let crawl_config = CrawlConfig {
        max_requests: 40,
        max_crawl_depth: 7,
        step: 0.002,
        precision: 5,
    };
    let text = toml::to_string(&crawl_config).unwrap();
    let back: CrawlConfig = toml::from_str(&text).unwrap();
    assert_eq!(back.max_requests, 40);
    assert_eq!(back.max_crawl_depth, 7);
    assert_eq!(back.precision, 5);
}
