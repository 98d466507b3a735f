use crate::parsing::parse_price_to_million;

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn negotiable_price_is_absent() {
    assert_eq!(parse_price_to_million("Thỏa thuận"), None);
    assert_eq!(parse_price_to_million("Giá thoa thuan"), None);
    assert_eq!(parse_price_to_million("THỎA THUẬN"), None);
    assert_eq!(parse_price_to_million("Thoả thuận 5 tỷ"), None);
}

#[test]
fn million_unit() {
    assert_close(parse_price_to_million("58 Triệu"), 58.0);
    assert_close(parse_price_to_million("850 trieu"), 850.0);
}

#[test]
fn billion_with_decimal_comma() {
    assert_close(parse_price_to_million("12,5 Tỷ"), 12500.0);
}

#[test]
fn range_collapses_to_mean() {
    assert_close(parse_price_to_million("5 - 5,2 Tỷ"), 5100.0);
    assert_close(parse_price_to_million("5 – 6 tỷ"), 5500.0);
    assert_close(parse_price_to_million("5—7 tỷ"), 6000.0);
}

#[test]
fn dot_is_kept_as_decimal_separator() {
    // Known ambiguity: a Vietnamese thousands dot is read as a decimal point.
    assert_close(parse_price_to_million("12.500 triệu"), 12.5);
}

#[test]
fn nbsp_between_number_and_unit() {
    assert_close(parse_price_to_million("3,2\u{a0}Tỷ"), 3200.0);
}

#[test]
fn unit_inferred_without_unit_word() {
    // > 1000 is taken to be millions already.
    assert_close(parse_price_to_million("2500"), 2500.0);
    // Small bare figures default to billions.
    assert_close(parse_price_to_million("4,5"), 4500.0);
}

#[test]
fn million_word_with_plain_e_circumflex() {
    // "triêu" is not an explicit unit word; the second scan still finds it.
    assert_close(parse_price_to_million("850 triêu"), 850.0);
}

#[test]
fn range_with_a_large_figure_is_in_millions() {
    assert_close(parse_price_to_million("500 - 1500"), 1000.0);
}

#[test]
fn standalone_t_token_is_billion() {
    assert_close(parse_price_to_million("Giá 3 t"), 3000.0);
}

#[test]
fn word_to_does_not_split_ranges() {
    assert_close(parse_price_to_million("5 to 6 tỷ"), 5000.0);
}

#[test]
fn empty_and_symbol_only_inputs_are_absent() {
    assert_eq!(parse_price_to_million(""), None);
    assert_eq!(parse_price_to_million("   "), None);
    assert_eq!(parse_price_to_million("--- ???"), None);
    assert_eq!(parse_price_to_million("Liên hệ"), None);
}

#[test]
fn results_are_finite_non_negative_and_deterministic() {
    let inputs = [
        "12,5 Tỷ",
        "58 Triệu",
        "5 - 5,2 Tỷ",
        "Thỏa thuận",
        "999999999999999999999999999999 tỷ",
        "-3 tỷ",
        "1.234,5",
        "abc",
    ];
    for input in inputs {
        let first = parse_price_to_million(input);
        if let Some(v) = first {
            assert!(v.is_finite() && v >= 0.0, "{input:?} -> {v}");
        }
        assert_eq!(first, parse_price_to_million(input));
    }
}
