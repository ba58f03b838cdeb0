//! Tests for the schema parser.

use super::*;

/// Typed fields keep their declared type and order.
#[test]
fn binary_declaration_keeps_field_order() {
    let variant = parse_declaration("Binary   : Expr left, Token operator, Expr right").unwrap();
    assert_eq!(variant.name, "Binary");
    assert_eq!(
        variant.fields,
        vec![
            FieldDescriptor {
                declared_type: Some("Expr".to_string()),
                name: "left".to_string(),
            },
            FieldDescriptor {
                declared_type: Some("Token".to_string()),
                name: "operator".to_string(),
            },
            FieldDescriptor {
                declared_type: Some("Expr".to_string()),
                name: "right".to_string(),
            },
        ]
    );
}

/// A bare field has no declared type.
#[test]
fn untyped_field_has_no_declared_type() {
    let variant = parse_declaration("Literal  : value").unwrap();
    assert_eq!(variant.fields.len(), 1);
    assert_eq!(variant.fields[0].declared_type, None);
    assert_eq!(variant.fields[0].name, "value");
}

/// Generic wrappers are kept verbatim as the declared type.
#[test]
fn wrapper_types_are_kept_verbatim() {
    let variant = parse_declaration("If : Expr condition, Stmt thenBranch, Option<Stmt> elseBranch").unwrap();
    assert_eq!(variant.fields[2].declared_type.as_deref(), Some("Option<Stmt>"));
    assert_eq!(variant.fields[2].name, "elseBranch");
}

/// Extra whitespace between type and name is ignored.
#[test]
fn extra_whitespace_is_trimmed() {
    let variant = parse_declaration("  Get :Expr    object ,  Token name  ").unwrap();
    assert_eq!(variant.name, "Get");
    assert_eq!(variant.field_names(), ["object", "name"]);
}

/// Only the first colon splits the declaration.
#[test]
fn split_happens_on_first_colon_only() {
    let err = parse_declaration("Odd : Expr a:b").unwrap_err();
    assert_eq!(
        err,
        SchemaError::InvalidIdentifier {
            declaration: "Odd : Expr a:b".to_string(),
            name: "a:b".to_string(),
        }
    );
}

#[test]
fn missing_separator_is_rejected() {
    let err = parse_declaration("Binary Expr left").unwrap_err();
    assert!(matches!(err, SchemaError::MissingSeparator { .. }));
}

#[test]
fn empty_variant_name_is_rejected() {
    let err = parse_declaration(" : Expr left").unwrap_err();
    assert!(matches!(err, SchemaError::EmptyVariantName { .. }));
}

#[test]
fn empty_field_list_is_rejected() {
    let err = parse_declaration("Nothing :").unwrap_err();
    assert!(matches!(err, SchemaError::EmptyFieldName { .. }));
}

#[test]
fn trailing_comma_is_rejected() {
    let err = parse_declaration("Get : Expr object, Token name,").unwrap_err();
    assert!(matches!(err, SchemaError::EmptyFieldName { .. }));
}

#[test]
fn field_name_with_spaces_is_rejected() {
    let err = parse_declaration("Get : Expr the object").unwrap_err();
    assert!(matches!(
        err,
        SchemaError::InvalidIdentifier { ref name, .. } if name == "the object"
    ));
}

#[test]
fn duplicate_field_is_rejected() {
    let err = parse_declaration("Binary : Expr left, Expr left").unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateField { ref field, .. } if field == "left"));
}

/// Grammar parsing keeps schema order and does not sort.
#[test]
fn grammar_preserves_schema_order() {
    let grammar = parse_grammar("Expr", &["Variable : Token name", "Assign : Token name, Expr value"]).unwrap();
    assert_eq!(grammar.base_name, "Expr");
    let names: Vec<&str> = grammar.variants.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["Variable", "Assign"]);
    assert!(grammar.variant("Assign").is_some());
    assert!(grammar.variant("Binary").is_none());
}

#[test]
fn grammar_reports_position_of_bad_line() {
    let err = parse_grammar("Stmt", &["Print : Expr expression", "Broken"]).unwrap_err();
    match &err {
        SchemaError::InGrammar { base_name, index, .. } => {
            assert_eq!(base_name, "Stmt");
            assert_eq!(*index, 2);
        }
        other => panic!("expected positioned error, got {other:?}"),
    }
    assert!(matches!(err.root(), SchemaError::MissingSeparator { .. }));
}

#[test]
fn grammar_rejects_duplicate_variant() {
    let err = parse_grammar("Expr", &["This : Token keyword", "This : Token keyword"]).unwrap_err();
    assert!(matches!(
        err.root(),
        SchemaError::DuplicateVariant { variant } if variant == "This"
    ));
}

#[test]
fn identifier_check() {
    assert!(is_identifier("thenBranch"));
    assert!(is_identifier("_private"));
    assert!(is_identifier("x1"));
    assert!(!is_identifier("1x"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("a-b"));
}
