use conversion::{
    digits_of_precision, format_compound, format_double, parse_compound, parse_double,
    parse_editor_double, parse_ratio, parse_version, to_camel_case, to_human_readable,
    to_pascal_case, try_parse_double, FormatError, Point, Rect, Size, Version,
};

#[test]
fn formatted_doubles_parse_back_to_the_same_value() {
    let samples = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.1,
        1.8,
        3.141_592_653_589_793,
        -2.5e-7,
        123_456_789.125,
        1.0e15,
        f64::MIN_POSITIVE,
        f64::MAX,
    ];
    for value in samples {
        let text = format_double(value);
        assert_eq!(parse_double(&text), Ok(value), "round trip of {text}");
    }
    assert_eq!(format_double(0.0), "0.0");
}

#[test]
fn ratio_syntaxes_are_equivalent() {
    assert_eq!(parse_ratio("9:5"), Ok(1.8));
    assert_eq!(parse_ratio("9/5"), Ok(1.8));
    assert_eq!(parse_editor_double("9:5"), parse_editor_double("9/5"));
}

#[test]
fn ratio_with_three_parts_is_a_format_error() {
    assert_eq!(
        parse_ratio("1:2:3"),
        Err(FormatError::InvalidRatio("1:2:3".to_string()))
    );
    assert!(parse_ratio("1").is_err());
    assert!(parse_ratio("x/2").is_err());
}

#[test]
fn empty_text_strict_and_permissive() {
    assert!(parse_double("").is_err());
    assert_eq!(try_parse_double(""), None);
    assert_eq!(parse_editor_double(""), Ok(0.0));
}

#[test]
fn compound_literals_round_trip() {
    let point = Point::new(12.5, -3.0);
    let text = format_compound(&point);
    assert_eq!(text, "12.5, -3");
    assert_eq!(parse_compound::<Point>(&text), Ok(point));

    let rect = Rect::new(0.0, 0.0, 320.0, 44.5);
    assert_eq!(rect.to_string().parse::<Rect>(), Ok(rect));

    let size: Size = "9:5, 2".parse().unwrap();
    assert_eq!(size, Size::new(1.8, 2.0));
}

#[test]
fn precision_follows_shortest_form() {
    assert_eq!(digits_of_precision(12.0), 0);
    assert_eq!(digits_of_precision(0.5), 1);
    assert_eq!(digits_of_precision(1.8), 1);
    assert_eq!(digits_of_precision(2.375), 3);
}

#[test]
fn case_transforms() {
    assert_eq!(to_camel_case("Name"), "name");
    assert_eq!(to_pascal_case("name"), "Name");
    assert_eq!(to_human_readable("IsEnabled"), "Is Enabled");
}

#[test]
fn version_parsing() {
    assert_eq!(parse_version("3035"), Ok(Version::new(3035, 0)));
    assert_eq!(parse_version("3035.24"), Ok(Version::new(3035, 24)));
    assert_eq!(parse_version(""), Ok(Version::new(0, 0)));
}
