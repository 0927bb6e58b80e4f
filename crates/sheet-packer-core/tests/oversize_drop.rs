use sheet_packer_core::{pack, DesignSpec, SheetConfig};

#[test]
fn drops_specs_that_fit_in_neither_orientation() {
    let items = vec![
        DesignSpec::new("board", "Rigid board", 100.0, 90.0, 2),
        DesignSpec::new("card", "Business card", 9.0, 5.0, 1),
    ];
    let cfg = SheetConfig::new(58.0);

    let result = pack(&items, &cfg);

    // The board contributes nothing to placements, length, or area.
    assert_eq!(result.placed.len(), 1);
    assert_eq!(result.placed[0].original_id, "card");
    assert_eq!(result.total_length, 5.0);
    assert_eq!(result.total_area_used, 45.0);
    assert_eq!(result.unplaced, vec!["board".to_string()]);
}

#[test]
fn all_oversize_input_yields_an_empty_result_with_diagnostic() {
    let items = vec![DesignSpec::new("board", "Rigid board", 100.0, 90.0, 5)];
    let cfg = SheetConfig::new(58.0);

    let result = pack(&items, &cfg);

    assert!(result.placed.is_empty());
    assert_eq!(result.total_length, 0.0);
    assert_eq!(result.total_area_used, 0.0);
    assert_eq!(result.unplaced, vec!["board".to_string()]);
}

#[test]
fn dropped_spec_is_reported_once_regardless_of_quantity() {
    let items = vec![
        DesignSpec::new("big-a", "Big A", 60.0, 70.0, 3),
        DesignSpec::new("big-b", "Big B", 59.0, 80.0, 4),
    ];
    let cfg = SheetConfig::new(58.0);

    let result = pack(&items, &cfg);

    assert_eq!(
        result.unplaced,
        vec!["big-a".to_string(), "big-b".to_string()]
    );
}
