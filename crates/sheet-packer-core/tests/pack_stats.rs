use sheet_packer_core::{pack, DesignSpec, SheetConfig};

#[test]
fn stats_basic() {
    let items = vec![DesignSpec::new("poster", "A4 poster", 10.0, 20.0, 3)];
    let cfg = SheetConfig::new(58.0);

    let result = pack(&items, &cfg);
    let stats = result.stats(cfg.sheet_width);

    assert_eq!(stats.num_placed, 3);
    assert_eq!(stats.num_rotated, 0);
    assert_eq!(stats.num_unplaced, 0);
    assert_eq!(stats.total_length, 20.0);
    assert_eq!(stats.total_area_used, 600.0);
    // 600 used of 58 * 20 consumed.
    let expected = 600.0 / 1160.0;
    assert!((stats.occupancy - expected).abs() < 1e-9);
    assert!(stats.occupancy > 0.0 && stats.occupancy <= 1.0);
}

#[test]
fn stats_counts_rotated_units() {
    let items = vec![DesignSpec::new("banner", "Door banner", 70.0, 10.0, 2)];
    let cfg = SheetConfig::new(58.0);

    let stats = pack(&items, &cfg).stats(cfg.sheet_width);

    assert_eq!(stats.num_placed, 2);
    assert_eq!(stats.num_rotated, 2);
}

#[test]
fn stats_of_an_empty_result() {
    let items: Vec<DesignSpec> = vec![];
    let cfg = SheetConfig::new(58.0);

    let result = pack(&items, &cfg);
    let stats = result.stats(cfg.sheet_width);

    assert_eq!(stats.num_placed, 0);
    assert_eq!(stats.total_length, 0.0);
    assert_eq!(stats.total_area_used, 0.0);
    assert_eq!(stats.occupancy, 0.0);
}

#[test]
fn stats_summary_contains_key_information() {
    let items = vec![DesignSpec::new("poster", "A4 poster", 10.0, 20.0, 3)];
    let cfg = SheetConfig::new(58.0);

    let summary = pack(&items, &cfg).stats(cfg.sheet_width).summary();

    assert!(summary.contains("Placed: 3"));
    assert!(summary.contains("Length: 20.00"));
    assert!(summary.contains("Occupancy:"));
}

#[test]
fn unplaced_specs_show_up_in_stats() {
    let items = vec![
        DesignSpec::new("board", "Rigid board", 100.0, 90.0, 2),
        DesignSpec::new("card", "Business card", 9.0, 5.0, 1),
    ];
    let cfg = SheetConfig::new(58.0);

    let stats = pack(&items, &cfg).stats(cfg.sheet_width);

    assert_eq!(stats.num_placed, 1);
    assert_eq!(stats.num_unplaced, 1);
}
