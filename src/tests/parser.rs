use crate::{parse_title, ExtractError, ParsedAttributes, ParserConfig, TitleParser};

#[test]
fn dimensions_from_separator() {
    let attrs = parse_title("Wire 2.5X100mm");
    assert_eq!(attrs.diameter, Some(2.5));
    assert_eq!(attrs.length, Some(100.0));
    assert_eq!(attrs.color, "");
}

#[test]
fn length_from_unit_marker() {
    let attrs = parse_title("Rod 150мм");
    assert_eq!(attrs.diameter, None);
    assert_eq!(attrs.length, Some(150.0));
}

#[test]
fn all_attributes_together() {
    assert_eq!(
        parse_title("Саморез 4,2х19 т-синий цинк"),
        ParsedAttributes {
            length: Some(19.0),
            diameter: Some(4.2),
            color: "темно-синий цинк".to_string(),
        }
    );
}

#[test]
fn numbers_away_from_markers_are_ignored() {
    let attrs = parse_title("Набор 12 шт x мм / 5 штук");
    assert_eq!(attrs.diameter, None);
    assert_eq!(attrs.length, None);
}

#[test]
fn fault_keeps_defaults_and_is_reported() {
    let parser = TitleParser::default();
    let outcome = parser.parse_outcome("Шайба 5²x10 синий");

    assert_eq!(outcome.attributes, ParsedAttributes::default());
    assert_eq!(
        outcome.fault,
        Some(ExtractError::InvalidNumber {
            text: "5²".to_string()
        })
    );
}

#[test]
fn parser_uses_its_config() {
    let parser = TitleParser::new(ParserConfig {
        unit_markers: vec!["mm".into()],
        ..ParserConfig::standard()
    });
    assert_eq!(parser.parse("Rod 150мм").length, None);
    assert_eq!(parser.parse("Rod 150mm").length, Some(150.0));
}

#[test]
fn fractions_beside_a_separator_are_not_numbers() {
    let parser = TitleParser::default();
    for title in ["Кран ½x10 синий", "Кран Ⅻx10 синий"] {
        let outcome = parser.parse_outcome(title);
        assert_eq!(outcome.fault, None);
        assert_eq!(outcome.attributes.diameter, None);
        assert_eq!(outcome.attributes.length, None);
        assert_eq!(outcome.attributes.color, "синий");
    }
}

#[test]
fn decimal_digits_of_other_scripts() {
    let attrs = parse_title("Кольцо ٣x١٠ синий");
    assert_eq!(attrs.diameter, Some(3.0));
    assert_eq!(attrs.length, Some(10.0));
    assert_eq!(attrs.color, "синий");
}
