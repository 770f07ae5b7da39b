use super::*;

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("Dr. Sarah"), "DS");
    assert_eq!(initials("John Smith"), "JS");
    assert_eq!(initials("Mary Ann Lee"), "MA");
}

#[test]
fn initials_are_uppercase_and_skip_symbols() {
    assert_eq!(initials("emily davis"), "ED");
    assert_eq!(initials("- max"), "M");
}

#[test]
fn blank_name_has_no_initials() {
    assert_eq!(initials("   "), "");
}
