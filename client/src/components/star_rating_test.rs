use super::*;

#[test]
fn stars_fill_from_the_left() {
    assert_eq!(stars(4), "★★★★☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
}

#[test]
fn stars_cap_at_five() {
    assert_eq!(stars(9), "★★★★★");
}
