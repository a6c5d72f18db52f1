// Tests for CommaDelimitedParser
// Test cases:
// - Splits on the first comma only (description keeps any further commas)
// - Trims both fields
// - Skips lines with no comma or an empty code
// - Empty input yields no records

use super::*;

#[test]
fn test_splits_on_first_comma_only() {
    let records = CommaDelimitedParser.parse("X,uses arms, legs and trunk");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code, "X");
    assert_eq!(records[0].description, "uses arms, legs and trunk");
}

#[test]
fn test_trims_fields() {
    let records = CommaDelimitedParser.parse("  KAB.DB.AD  ,  Therapeutic exercise  ");

    assert_eq!(records[0].code, "KAB.DB.AD");
    assert_eq!(records[0].description, "Therapeutic exercise");
}

#[test]
fn test_skips_lines_without_comma() {
    let records = CommaDelimitedParser.parse("A,first\njust-one-field\nB,second");

    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, ["A", "B"]);
}

#[test]
fn test_skips_empty_code() {
    let records = CommaDelimitedParser.parse("  ,description without code\nA,kept");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code, "A");
}

#[test]
fn test_empty_description_is_allowed() {
    let records = CommaDelimitedParser.parse("A,");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "");
}

#[test]
fn test_empty_input_yields_no_records() {
    assert!(CommaDelimitedParser.parse("").is_empty());
    assert!(CommaDelimitedParser.parse("\n\n").is_empty());
}
