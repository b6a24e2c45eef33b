use super::*;

#[test]
fn missing_element_names_the_tag() {
    assert_eq!(WidgetError::MissingElement("body").to_string(), "document has no <body> element");
}

#[test]
fn dom_error_carries_message() {
    let err = WidgetError::Dom("NotFoundError".to_owned());
    assert_eq!(err.to_string(), "DOM operation failed: NotFoundError");
}

#[test]
fn regex_error_converts_into_pattern_variant() {
    let Err(source) = regex::Regex::new("(") else {
        panic!("unbalanced group should not compile");
    };
    let err = WidgetError::from(source);
    assert!(matches!(err, WidgetError::Pattern(_)));
    assert!(err.to_string().starts_with("failed to compile pattern"));
}
