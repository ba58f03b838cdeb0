//! # Field Types
//!
//! Maps declared schema types onto the Rust types of the generated model.
//!
//! | Declared        | Stored field             | Constructor argument |
//! |-----------------|--------------------------|----------------------|
//! | `Expr` (a base) | `Box<Expr>`              | `Expr`               |
//! | `Token`         | `Rc<Token>`              | `Rc<Token>`          |
//! | `List<T>`       | `Vec<T>`                 | `Vec<T>`             |
//! | `Option<Expr>`  | `Option<Box<Expr>>`      | `Option<Expr>`       |
//! | other name      | that name                | that name            |
//! | *(none)*        | `LiteralValue`           | `LiteralValue`       |
//!
//! `Option` may not directly wrap another `Option`.

use config::constants::{LIST_TYPE, OPTION_TYPE, TOKEN_TYPE};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::schema::is_identifier;

/// Resolved type of one generated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A node of one of the generated families, owned by its parent.
    Node(String),
    /// A shared lexical token.
    Token,
    /// An ordered sequence of owned values.
    List(Box<FieldType>),
    /// A value that may be absent.
    Optional(Box<FieldType>),
    /// Any other type, used verbatim.
    Named(String),
    /// Untyped literal payload.
    Literal,
}

impl FieldType {
    /// Resolves a declared type.
    ///
    /// `node_bases` lists the base names of every family generated in the
    /// same run. Returns `None` when the declaration is outside the
    /// vocabulary.
    pub fn resolve(declared: Option<&str>, node_bases: &[String]) -> Option<FieldType> {
        let Some(declared) = declared else {
            return Some(FieldType::Literal);
        };

        if let Some(inner) = unwrap_generic(declared, LIST_TYPE) {
            return FieldType::resolve(Some(inner), node_bases)
                .map(|inner| FieldType::List(Box::new(inner)));
        }
        if let Some(inner) = unwrap_generic(declared, OPTION_TYPE) {
            // Only a node directly under `Option` is boxed, so nesting would
            // leave a recursive node unsized.
            return match FieldType::resolve(Some(inner), node_bases)? {
                FieldType::Optional(_) => None,
                inner => Some(FieldType::Optional(Box::new(inner))),
            };
        }
        if !is_identifier(declared) {
            return None;
        }
        if declared == TOKEN_TYPE {
            Some(FieldType::Token)
        } else if node_bases.iter().any(|base| base == declared) {
            Some(FieldType::Node(declared.to_string()))
        } else {
            Some(FieldType::Named(declared.to_string()))
        }
    }

    /// Type of the field inside the generated struct.
    pub fn storage(&self) -> TokenStream {
        match self {
            FieldType::Node(_) => {
                let element = self.element();
                quote!(Box<#element>)
            }
            FieldType::Optional(inner) if self.is_boxed() => {
                let element = inner.element();
                quote!(Option<Box<#element>>)
            }
            _ => self.element(),
        }
    }

    /// Type accepted by the generated constructor.
    pub fn parameter(&self) -> TokenStream {
        self.element()
    }

    /// Returns true when the stored value is boxed by the constructor.
    pub fn is_boxed(&self) -> bool {
        match self {
            FieldType::Node(_) => true,
            FieldType::Optional(inner) => matches!(**inner, FieldType::Node(_)),
            _ => false,
        }
    }

    /// Expression converting a constructor argument into the stored value.
    pub fn initializer(&self, arg: &Ident) -> TokenStream {
        match self {
            FieldType::Node(_) => quote!(Box::new(#arg)),
            FieldType::Optional(_) if self.is_boxed() => quote!(#arg.map(Box::new)),
            _ => quote!(#arg),
        }
    }

    /// Unboxed form, as used inside collections and for arguments.
    fn element(&self) -> TokenStream {
        match self {
            FieldType::Node(name) | FieldType::Named(name) => {
                let ident = Ident::new(name, Span::call_site());
                quote!(#ident)
            }
            FieldType::Token => quote!(Rc<Token>),
            FieldType::List(inner) => {
                let element = inner.element();
                quote!(Vec<#element>)
            }
            FieldType::Optional(inner) => {
                let element = inner.element();
                quote!(Option<#element>)
            }
            FieldType::Literal => quote!(LiteralValue),
        }
    }
}

/// Returns `T` for `Wrapper<T>`, tolerating spaces around `T`.
fn unwrap_generic<'a>(declared: &'a str, wrapper: &str) -> Option<&'a str> {
    declared
        .strip_prefix(wrapper)?
        .strip_prefix('<')?
        .strip_suffix('>')
        .map(str::trim)
}
