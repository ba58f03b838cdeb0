//! Tests for the code emitter.
//!
//! Generated source is parsed back with `syn` and inspected structurally so
//! the assertions do not depend on pretty-printer layout.

use quote::ToTokens;

use super::*;
use crate::grammar::lox_grammars;
use crate::schema::parse_grammar;

fn lox_file() -> syn::File {
    let grammars = lox_grammars().unwrap();
    let source = generate(&grammars, &Imports::default()).unwrap();
    syn::parse_file(&source).unwrap()
}

fn tokens(node: &impl ToTokens) -> String {
    node.to_token_stream().to_string().replace(' ', "")
}

fn find_struct<'f>(file: &'f syn::File, name: &str) -> &'f syn::ItemStruct {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Struct(s) if s.ident == name => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| panic!("struct {name} not generated"))
}

fn inherent_fn<'f>(file: &'f syn::File, type_name: &str, fn_name: &str) -> &'f syn::ImplItemFn {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Impl(i) if i.trait_.is_none() && tokens(&i.self_ty) == type_name => Some(i),
            _ => None,
        })
        .flat_map(|i| i.items.iter())
        .find_map(|item| match item {
            syn::ImplItem::Fn(f) if f.sig.ident == fn_name => Some(f),
            _ => None,
        })
        .unwrap_or_else(|| panic!("{type_name}::{fn_name} not generated"))
}

fn trait_methods(file: &syn::File, name: &str) -> Vec<String> {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Trait(t) if t.ident == name => Some(t),
            _ => None,
        })
        .unwrap_or_else(|| panic!("trait {name} not generated"))
        .items
        .iter()
        .filter_map(|item| match item {
            syn::TraitItem::Fn(f) => Some(f.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

fn field_names(item: &syn::ItemStruct) -> Vec<String> {
    item.fields
        .iter()
        .map(|f| f.ident.as_ref().map(ToString::to_string).unwrap_or_default())
        .collect()
}

fn item_position(file: &syn::File, name: &str) -> usize {
    file.items
        .iter()
        .position(|item| match item {
            syn::Item::Enum(e) => e.ident == name,
            syn::Item::Trait(t) => t.ident == name,
            syn::Item::Struct(s) => s.ident == name,
            _ => false,
        })
        .unwrap_or_else(|| panic!("{name} not generated"))
}

// =============================================================================
// NAMING
// =============================================================================

#[test]
fn snake_case_conversion() {
    assert_eq!(to_snake_case("thenBranch"), "then_branch");
    assert_eq!(to_snake_case("Binary"), "binary");
    assert_eq!(to_snake_case("Expr"), "expr");
    assert_eq!(to_snake_case("IfStmt"), "if_stmt");
    assert_eq!(to_snake_case("already_snake"), "already_snake");
    assert_eq!(to_snake_case("HTTPRequest"), "http_request");
}

#[test]
fn visit_method_combines_variant_and_base() {
    assert_eq!(visit_method("Binary", "Expr").to_string(), "visit_binary_expr");
    assert_eq!(visit_method("Expression", "Stmt").to_string(), "visit_expression_stmt");
}

#[test]
fn keywords_become_raw_identifiers() {
    assert_eq!(field_ident("type").unwrap().to_string(), "r#type");
    assert_eq!(field_ident("left").unwrap().to_string(), "left");
    assert!(field_ident("self").is_none());
}

// =============================================================================
// OUTPUT SHAPE
// =============================================================================

#[test]
fn output_is_deterministic() {
    let grammars = lox_grammars().unwrap();
    let first = generate(&grammars, &Imports::default()).unwrap();
    let second = generate(&grammars, &Imports::default()).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with(GENERATED_HEADER));
}

#[test]
fn binary_fields_and_constructor_follow_schema_order() {
    let file = lox_file();
    let binary = find_struct(&file, "BinaryExpr");
    assert_eq!(field_names(binary), ["left", "operator", "right"]);

    let new = inherent_fn(&file, "BinaryExpr", "new");
    let inputs: Vec<String> = new.sig.inputs.iter().map(tokens).collect();
    assert_eq!(inputs, ["left:Expr", "operator:Rc<Token>", "right:Expr"]);
}

#[test]
fn base_then_visitor_then_nodes() {
    let file = lox_file();
    let base = item_position(&file, "Expr");
    let visitor = item_position(&file, "ExprVisitor");
    let first_node = item_position(&file, "AssignExpr");
    let last_node = item_position(&file, "VariableExpr");
    assert!(base < visitor && visitor < first_node && first_node < last_node);

    // Statements come after every expression item.
    assert!(last_node < item_position(&file, "Stmt"));
}

#[test]
fn one_visitor_method_per_variant_in_schema_order() {
    let grammars = lox_grammars().unwrap();
    let file = lox_file();
    for grammar in &grammars {
        let expected: Vec<String> = grammar
            .variants
            .iter()
            .map(|v| visit_method(&v.name, &grammar.base_name).to_string())
            .collect();
        let visitor = format!("{}{}", grammar.base_name, VISITOR_SUFFIX);
        assert_eq!(trait_methods(&file, &visitor), expected);
    }
}

#[test]
fn each_accept_calls_only_its_own_method() {
    let grammars = lox_grammars().unwrap();
    let file = lox_file();
    for grammar in &grammars {
        for variant in &grammar.variants {
            let type_name = format!("{}{}", variant.name, grammar.base_name);
            let accept = inherent_fn(&file, &type_name, "accept");
            assert_eq!(accept.block.stmts.len(), 1, "{type_name}::accept has extra statements");
            match &accept.block.stmts[0] {
                syn::Stmt::Expr(syn::Expr::MethodCall(call), None) => {
                    assert_eq!(call.method, visit_method(&variant.name, &grammar.base_name));
                    assert_eq!(tokens(&call.receiver), "visitor");
                    assert_eq!(call.args.len(), 1);
                    assert_eq!(tokens(&call.args[0]), "self");
                }
                other => panic!("{type_name}::accept is not a single call: {}", tokens(other)),
            }
        }
    }
}

#[test]
fn optional_and_list_fields_map_to_rust_types() {
    let file = lox_file();
    let if_stmt = find_struct(&file, "IfStmt");
    assert_eq!(field_names(if_stmt), ["condition", "then_branch", "else_branch"]);
    let types: Vec<String> = if_stmt.fields.iter().map(|f| tokens(&f.ty)).collect();
    assert_eq!(types, ["Box<Expr>", "Box<Stmt>", "Option<Box<Stmt>>"]);

    let call = find_struct(&file, "CallExpr");
    let types: Vec<String> = call.fields.iter().map(|f| tokens(&f.ty)).collect();
    assert_eq!(types, ["Box<Expr>", "Rc<Token>", "Vec<Expr>"]);

    let literal = find_struct(&file, "LiteralExpr");
    assert_eq!(tokens(&literal.fields.iter().next().unwrap().ty), "LiteralValue");
}

#[test]
fn both_families_share_one_algorithm() {
    // The same declaration under two base names yields the same shape.
    // Names of equal length keep the pretty-printer's line breaks aligned.
    let a = parse_grammar("Alfa", &["Pair : Alfa left, Token op"]).unwrap();
    let b = parse_grammar("Beta", &["Pair : Beta left, Token op"]).unwrap();
    let alfa = generate(&[a], &Imports::default()).unwrap();
    let beta = generate(&[b], &Imports::default()).unwrap();
    assert_eq!(
        alfa.replace("Alfa", "X").replace("alfa", "x"),
        beta.replace("Beta", "X").replace("beta", "x")
    );
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn unsupported_type_is_rejected() {
    let grammar = parse_grammar("Expr", &["Odd : Map<A,B> pairs"]);
    // The comma splits the field list before types are looked at.
    assert!(grammar.is_err());

    let grammar = parse_grammar("Expr", &["Odd : List< thing"]).unwrap();
    let err = generate(&[grammar], &Imports::default()).unwrap_err();
    assert!(matches!(err, GenerateError::UnsupportedType { ref field, .. } if field == "thing"));
}

#[test]
fn reserved_field_name_is_rejected() {
    let grammar = parse_grammar("Expr", &["Odd : Expr self"]).unwrap();
    let err = generate(&[grammar], &Imports::default()).unwrap_err();
    assert!(matches!(err, GenerateError::ReservedName { .. }));
}

#[test]
fn duplicate_base_is_rejected() {
    let grammar = parse_grammar("Expr", &["This : Token keyword"]).unwrap();
    let err = generate(&[grammar.clone(), grammar], &Imports::default()).unwrap_err();
    assert!(matches!(err, GenerateError::DuplicateBase(ref name) if name == "Expr"));
}

#[test]
fn import_must_name_expected_type() {
    let grammar = parse_grammar("Expr", &["This : Token keyword"]).unwrap();
    let imports = Imports {
        token: "crate::token::Lexeme".to_string(),
        ..Imports::default()
    };
    let err = generate(&[grammar], &imports).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidImport(_)));
}

#[test]
fn empty_grammar_still_renders() {
    let grammar = parse_grammar("Expr", &[]).unwrap();
    let source = generate(&[grammar], &Imports::default()).unwrap();
    let file = syn::parse_file(&source).unwrap();
    assert!(item_position(&file, "Expr") < item_position(&file, "ExprVisitor"));
    assert!(trait_methods(&file, "ExprVisitor").is_empty());
}

#[test]
fn nested_option_is_rejected() {
    let grammar = parse_grammar("Expr", &["Maybe : Option<Option<Expr>> inner"]).unwrap();
    let err = generate(&[grammar], &Imports::default()).unwrap_err();
    assert!(matches!(err, GenerateError::UnsupportedType { ref field, .. } if field == "inner"));
}

// =============================================================================
// NAME COLLISIONS
// =============================================================================

fn collision(grammars: &[GrammarDescriptor]) -> (String, String) {
    match generate(grammars, &Imports::default()).unwrap_err() {
        GenerateError::NameCollision { variant, name } => (variant, name),
        other => panic!("expected a name collision, got {other}"),
    }
}

#[test]
fn fields_colliding_after_snake_case_are_rejected() {
    let grammar = parse_grammar("Expr", &["Pair : Expr fooBar, Expr foo_bar"]).unwrap();
    assert_eq!(collision(&[grammar]), ("Pair".to_string(), "foo_bar".to_string()));
}

#[test]
fn visit_methods_colliding_after_snake_case_are_rejected() {
    let grammar = parse_grammar("Expr", &["FooBar : Token a", "Foo_Bar : Token b"]).unwrap();
    assert_eq!(
        collision(&[grammar]),
        ("Foo_Bar".to_string(), "visit_foo_bar_expr".to_string())
    );
}

#[test]
fn node_type_colliding_with_another_base_is_rejected() {
    let expr = parse_grammar("Expr", &["This : Token keyword"]).unwrap();
    let other = parse_grammar("ThisExpr", &["Leaf : Token name"]).unwrap();
    assert_eq!(collision(&[expr, other]), ("ThisExpr".to_string(), "ThisExpr".to_string()));
}

#[test]
fn node_type_colliding_with_visitor_trait_is_rejected() {
    // `Visitor` + base `Visitor` spells the trait name `VisitorVisitor`.
    let grammar = parse_grammar("Visitor", &["Visitor : Token name"]).unwrap();
    assert_eq!(collision(&[grammar]), ("Visitor".to_string(), "VisitorVisitor".to_string()));
}

#[test]
fn base_colliding_with_imported_name_is_rejected() {
    let grammar = parse_grammar("Token", &["Leaf : Expr inner"]).unwrap();
    assert_eq!(collision(&[grammar]), ("Token".to_string(), "Token".to_string()));
}
