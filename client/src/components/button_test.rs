use super::*;

#[test]
fn default_variant_is_primary() {
    assert_eq!(button_class(ButtonVariant::default()), "btn btn--primary");
}

#[test]
fn every_variant_has_its_own_modifier() {
    let classes = [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Ghost, ButtonVariant::Danger]
        .map(button_class);
    for (i, class) in classes.iter().enumerate() {
        assert!(class.starts_with("btn btn--"));
        assert!(classes[i + 1..].iter().all(|other| other != class));
    }
}
