//! Integration tests for the public validation predicates
//!
//! Covers the symbol, chart-type, time-series and date predicates as a caller
//! sees them from the crate root.

use stock_query::{
    validate_chart_type, validate_date, validate_date_range, validate_symbol,
    validate_time_series, ChartQuery,
};

/// Reference rule for symbols: 1 to 7 characters, all `A`-`Z`.
fn symbol_rule(text: &str) -> bool {
    let len = text.chars().count();
    (1..=7).contains(&len) && text.chars().all(|c| c.is_ascii_uppercase())
}

/// All strings over `alphabet` with up to `max_len` characters.
fn strings_over(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &frontier {
            for c in alphabet {
                let mut s = prefix.clone();
                s.push(*c);
                next.push(s);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

#[test]
fn test_valid_symbols() {
    for symbol in ["AAPL", "GOOGL", "MSFT", "A", "ABCDEFG"] {
        assert!(validate_symbol(symbol), "{} should be accepted", symbol);
    }
}

#[test]
fn test_lowercase_symbols_rejected() {
    for symbol in ["aapl", "Aapl", "AaPl"] {
        assert!(!validate_symbol(symbol), "{} should be rejected", symbol);
    }
}

#[test]
fn test_symbols_with_numbers_rejected() {
    for symbol in ["AAPL1", "123", "A1B2"] {
        assert!(!validate_symbol(symbol), "{} should be rejected", symbol);
    }
}

#[test]
fn test_symbols_with_special_characters_rejected() {
    for symbol in ["AAP$L", "GO@GL", "MSF-T", "BRK.B", " AAPL", "AAPL\n"] {
        assert!(!validate_symbol(symbol), "{:?} should be rejected", symbol);
    }
}

#[test]
fn test_symbol_length_requirements() {
    assert!(!validate_symbol(""));
    assert!(validate_symbol("A"));
    assert!(validate_symbol("ABCDEFG"));
    assert!(!validate_symbol("ABCDEFGH"));
}

#[test]
fn test_symbol_matches_rule_for_short_strings() {
    let alphabet = ['A', 'Z', 'q', '7', '-', ' ', 'É'];
    for text in strings_over(&alphabet, 3) {
        assert_eq!(
            validate_symbol(&text),
            symbol_rule(&text),
            "mismatch for {:?}",
            text
        );
    }
}

#[test]
fn test_symbol_matches_rule_around_length_limit() {
    for len in 0..=10 {
        let upper = "Q".repeat(len);
        assert_eq!(validate_symbol(&upper), symbol_rule(&upper), "len {}", len);

        let mixed = format!("{}x", "Q".repeat(len));
        assert!(!validate_symbol(&mixed), "{:?} should be rejected", mixed);
    }
}

#[test]
fn test_valid_chart_types() {
    assert!(validate_chart_type(1));
    assert!(validate_chart_type(2));
    assert!(validate_chart_type("1"));
    assert!(validate_chart_type("2"));
}

#[test]
fn test_invalid_chart_type_numbers() {
    assert!(!validate_chart_type(0));
    assert!(!validate_chart_type(3));
    assert!(!validate_chart_type(10));
    assert!(!validate_chart_type(-1));
}

#[test]
fn test_non_numeric_chart_types_rejected() {
    assert!(!validate_chart_type("bar"));
    assert!(!validate_chart_type("line"));
    assert!(!validate_chart_type("abc"));
    assert!(!validate_chart_type(""));
}

#[test]
fn test_chart_type_accepts_any_integer_reading() {
    assert!(validate_chart_type(2u64));
    assert!(validate_chart_type(1.0f64));
    assert!(validate_chart_type(" 2 "));
    assert!(validate_chart_type(&String::from("+1")));
    assert!(!validate_chart_type("2.0"));
    assert!(!validate_chart_type(f64::NAN));
}

#[test]
fn test_valid_time_series() {
    for code in [1, 2, 3, 4] {
        assert!(validate_time_series(code), "{} should be accepted", code);
    }
    for text in ["1", "2", "3", "4"] {
        assert!(validate_time_series(text), "{:?} should be accepted", text);
    }
}

#[test]
fn test_invalid_time_series_numbers() {
    assert!(!validate_time_series(0));
    assert!(!validate_time_series(5));
    assert!(!validate_time_series(10));
    assert!(!validate_time_series(-1));
}

#[test]
fn test_non_numeric_time_series_rejected() {
    assert!(!validate_time_series("daily"));
    assert!(!validate_time_series("weekly"));
    assert!(!validate_time_series("abc"));
    assert!(!validate_time_series(""));
}

#[test]
fn test_valid_start_and_end_dates() {
    assert!(validate_date("2025-11-21"));
    assert!(validate_date("2024-12-31"));
}

#[test]
fn test_invalid_start_dates() {
    assert!(!validate_date("01-01-2024"));
    assert!(!validate_date("2024-13-01"));
    assert!(!validate_date(""));
}

#[test]
fn test_invalid_end_dates() {
    assert!(!validate_date("2024/12/31"));
    assert!(!validate_date("2024-00-10"));
    assert!(!validate_date("2024-02-30"));
}

#[test]
fn test_date_range_order() {
    assert!(validate_date_range("2025-01-01", "2025-11-21"));
    assert!(!validate_date_range("2025-11-21", "2025-01-01"));
}

#[test]
fn test_predicates_are_idempotent() {
    let symbols = ["AAPL", "aapl", "", "ABCDEFGH"];
    for s in symbols {
        assert_eq!(validate_symbol(s), validate_symbol(s));
    }

    let codes = ["1", "2", "3", "bar", ""];
    for c in codes {
        assert_eq!(validate_chart_type(c), validate_chart_type(c));
        assert_eq!(validate_time_series(c), validate_time_series(c));
    }

    let dates = ["2025-11-21", "2024-02-30", "2024/12/31"];
    for d in dates {
        assert_eq!(validate_date(d), validate_date(d));
    }
}

#[test]
fn test_chart_query_from_json() {
    let query = ChartQuery::from_json(
        r#"{
            "symbol": "AAPL",
            "chart_type": 2,
            "time_series": "line",
            "start_date": "2024-01-01",
            "end_date": "2024-02-30"
        }"#,
    )
    .unwrap();

    let report = query.validate();
    assert!(!report.valid);
    assert_eq!(report.failed_fields(), vec!["time_series", "end_date"]);
}
