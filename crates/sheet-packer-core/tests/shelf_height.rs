use sheet_packer_core::packer::skyline::SkylinePacker;

#[test]
fn unit_rests_on_the_tallest_segment_in_its_footprint() {
    let mut packer = SkylinePacker::new(18.0, 0.0);

    let a = packer.place("a", 10.0, 2.0).expect("fits");
    assert_eq!((a.x, a.y), (0.0, 0.0));
    let b = packer.place("b", 8.0, 6.0).expect("fits");
    assert_eq!((b.x, b.y), (10.0, 0.0));

    // c spans both columns (heights 2 and 6). It must rest on the taller one:
    // y = 6, not the first segment's 2 and not any averaged height.
    let c = packer.place("c", 12.0, 4.0).expect("fits");
    assert_eq!(c.x, 0.0);
    assert_eq!(c.y, 6.0);
}

#[test]
fn leftmost_wins_among_equal_shelf_heights() {
    let mut packer = SkylinePacker::new(30.0, 0.0);

    let a = packer.place("a", 10.0, 4.0).expect("fits");
    assert_eq!((a.x, a.y), (0.0, 0.0));
    // Remaining flat region spans [10, 30); both starts at the same height
    // resolve to the leftmost feasible x.
    let b = packer.place("b", 10.0, 4.0).expect("fits");
    assert_eq!((b.x, b.y), (10.0, 0.0));
}

#[test]
fn profile_merges_back_to_a_single_segment_on_a_level_row() {
    let mut packer = SkylinePacker::new(30.0, 0.0);
    packer.place("a", 10.0, 5.0).expect("fits");
    packer.place("b", 10.0, 5.0).expect("fits");
    packer.place("c", 10.0, 5.0).expect("fits");

    // Three equal-height units complete a level row; adjacent equal-height
    // segments must collapse to one.
    assert_eq!(packer.segments().len(), 1);
    assert_eq!(packer.segments()[0].x, 0.0);
    assert_eq!(packer.segments()[0].width, 30.0);
    assert_eq!(packer.segments()[0].y, 5.0);
}
