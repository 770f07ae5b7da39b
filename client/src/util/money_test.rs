use super::*;

#[test]
fn parse_amount_accepts_decimals_and_trims() {
    assert_eq!(parse_amount("amount", " 75.5 "), Ok(75.5));
    assert_eq!(parse_amount("amount", "0"), Ok(0.0));
}

#[test]
fn parse_amount_rejects_negative_blank_and_text() {
    for raw in ["-1", "", "abc", "NaN", "inf"] {
        assert_eq!(
            parse_amount("amount", raw),
            Err(ActionError::InvalidNumber { field: "amount", value: raw.to_owned() })
        );
    }
}

#[test]
fn parse_whole_rejects_fractions() {
    assert_eq!(parse_whole("price", "45"), Ok(45));
    assert!(parse_whole("price", "4.5").is_err());
    assert!(parse_whole("price", "-3").is_err());
}

#[test]
fn lenient_amount_reads_bad_input_as_zero() {
    assert_eq!(lenient_amount("12.25"), 12.25);
    assert_eq!(lenient_amount(""), 0.0);
    assert_eq!(lenient_amount("-5"), 0.0);
    assert_eq!(lenient_amount("ten"), 0.0);
}

#[test]
fn format_money_uses_two_decimals() {
    assert_eq!(format_money(80.0), "$80.00");
    assert_eq!(format_money(4.5), "$4.50");
}

#[test]
fn format_with_currency_prefixes_code() {
    assert_eq!(format_with_currency("LKR", 19.875), "LKR 19.88");
}

#[test]
fn exact_ties_round_away_from_zero() {
    assert_eq!(format_money(0.125), "$0.13");
    assert_eq!(format_with_currency("LKR", 0.375), "LKR 0.38");
    assert_eq!(format_with_currency("LKR", 19.875), "LKR 19.88");
}

#[test]
fn round_cents_keeps_whole_cents() {
    assert_eq!(round_cents(80.0), 80.0);
    assert_eq!(round_cents(53.0), 53.0);
    assert_eq!(round_cents(0.004), 0.0);
}
