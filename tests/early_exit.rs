use selector_golf::{fingerprint, search, SearchOptions};

// golf5%d() first reaches a golden selector at index 12272 (000000ef).
// Before that the best even count is 0000540b at index 8376.
const TEMPLATE: &str = "golf5%d()";

#[test]
fn golden_selector_stops_single_worker() {
    let options = SearchOptions::default()
        .with_workers(1)
        .with_max_index(1_000_000);
    let result = search(TEMPLATE, &options).unwrap();

    assert!(result.is_golden());
    assert_eq!(result.name, "golf512272()");
    assert_eq!(result.selector, "000000ef");
    assert_eq!(result.index, 12272);
    assert_eq!(fingerprint(&result.name), result.selector);
    // Indices 0..=12272 and nothing after
    assert_eq!(result.candidates, 12273);
}

#[test]
fn golden_selector_stops_other_workers() {
    // Worker 0 covers [0, 100000), worker 1 covers [100000, 200000),
    // which contains no golden selector.
    let options = SearchOptions::default()
        .with_workers(2)
        .with_max_index(200_000);
    let result = search(TEMPLATE, &options).unwrap();

    assert_eq!(result.name, "golf512272()");
    assert_eq!(result.selector, "000000ef");
    assert!(result.candidates < 200_000);
}

#[test]
fn bound_below_golden_keeps_best_even_count() {
    let options = SearchOptions::default()
        .with_workers(1)
        .with_max_index(12272);
    let result = search(TEMPLATE, &options).unwrap();

    assert!(!result.is_golden());
    assert_eq!(result.name, "golf58376()");
    assert_eq!(result.selector, "0000540b");
    assert_eq!(result.candidates, 12272);
}
