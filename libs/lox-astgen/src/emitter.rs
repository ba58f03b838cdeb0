//! # Code Emitter
//!
//! Turns grammar descriptors into the Rust source of the node model.
//!
//! For every grammar the emitter produces, in this order:
//!
//! 1. the base enum (`Expr`), one tuple variant per schema variant, with an
//!    `accept` method forwarding to the concrete node;
//! 2. the visitor trait (`ExprVisitor`), one `visit_<variant>_<base>` method
//!    per variant in schema order;
//! 3. one struct per variant (`BinaryExpr`) with public fields in declared
//!    order, a `new` constructor taking them in the same order, and an
//!    `accept` method calling exactly its own visitor method.
//!
//! The same algorithm serves every grammar; nothing is special-cased by base
//! name, and output order is schema order.

use std::collections::HashSet;

use config::constants::{
    GENERATED_HEADER, LITERAL_PAYLOAD_TYPE, TOKEN_TYPE, VISITOR_SUFFIX, VISIT_METHOD_PREFIX,
};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};

use crate::error::GenerateError;
use crate::schema::{GrammarDescriptor, VariantDescriptor};
use crate::types::FieldType;

// =============================================================================
// IMPORTS
// =============================================================================

/// Paths the generated file imports its shared types from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imports {
    /// Path of the token type; must end in `Token`.
    pub token: String,
    /// Path of the literal payload type; must end in `LiteralValue`.
    pub literal: String,
}

impl Default for Imports {
    fn default() -> Self {
        Self {
            token: format!("crate::token::{TOKEN_TYPE}"),
            literal: format!("crate::value::{LITERAL_PAYLOAD_TYPE}"),
        }
    }
}

// =============================================================================
// EMITTER
// =============================================================================

/// Emits the node model for a set of grammars generated together.
///
/// Grammars see each other's base names, so a statement field declared as
/// `Expr` resolves to a boxed expression node.
pub struct Emitter<'a> {
    grammars: &'a [GrammarDescriptor],
    imports: &'a Imports,
    node_bases: Vec<String>,
}

/// Resolved pieces of one concrete node type.
struct NodeParts {
    variant: Ident,
    type_name: Ident,
    method: Ident,
    fields: Vec<(Ident, FieldType)>,
    declaration: String,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter, rejecting grammars that share a base name and
    /// any two generated types that would end up with the same name.
    pub fn new(grammars: &'a [GrammarDescriptor], imports: &'a Imports) -> Result<Self, GenerateError> {
        let mut seen = HashSet::new();
        for grammar in grammars {
            if !seen.insert(grammar.base_name.as_str()) {
                return Err(GenerateError::DuplicateBase(grammar.base_name.clone()));
            }
        }

        // Imported names share the module namespace with generated types.
        let mut types: HashSet<String> = ["Rc", TOKEN_TYPE, LITERAL_PAYLOAD_TYPE]
            .into_iter()
            .map(String::from)
            .collect();
        for grammar in grammars {
            let base = &grammar.base_name;
            claim(&mut types, base, base.clone())?;
            claim(&mut types, base, format!("{base}{VISITOR_SUFFIX}"))?;
            for variant in &grammar.variants {
                claim(&mut types, &variant.name, format!("{}{base}", variant.name))?;
            }
        }

        Ok(Self {
            grammars,
            imports,
            node_bases: grammars.iter().map(|g| g.base_name.clone()).collect(),
        })
    }

    /// Emits the whole file: imports, then every grammar in order.
    pub fn emit_file(&self) -> Result<TokenStream, GenerateError> {
        let mut tokens = self.emit_imports()?;
        for grammar in self.grammars {
            tokens.extend(self.emit_grammar(grammar)?);
        }
        Ok(tokens)
    }

    /// Emits the `use` items the generated types rely on.
    pub fn emit_imports(&self) -> Result<TokenStream, GenerateError> {
        let token = import_path(&self.imports.token, TOKEN_TYPE)?;
        let literal = import_path(&self.imports.literal, LITERAL_PAYLOAD_TYPE)?;
        Ok(quote! {
            #[allow(unused_imports)]
            use std::rc::Rc;
            #[allow(unused_imports)]
            use #token;
            #[allow(unused_imports)]
            use #literal;
        })
    }

    /// Emits base enum, visitor trait and node structs for one grammar.
    pub fn emit_grammar(&self, grammar: &GrammarDescriptor) -> Result<TokenStream, GenerateError> {
        log::debug!(
            "emitting {} with {} variant(s)",
            grammar.base_name,
            grammar.variants.len()
        );

        let nodes = grammar
            .variants
            .iter()
            .map(|variant| self.resolve_node(&grammar.base_name, variant))
            .collect::<Result<Vec<_>, _>>()?;

        let mut methods = HashSet::new();
        for (variant, node) in grammar.variants.iter().zip(&nodes) {
            claim(&mut methods, &variant.name, node.method.to_string())?;
        }

        let base = Ident::new(&grammar.base_name, Span::call_site());
        let visitor = format_ident!("{}{}", grammar.base_name, VISITOR_SUFFIX);

        let mut tokens = emit_base(&base, &visitor, &nodes);
        tokens.extend(emit_visitor(&grammar.base_name, &visitor, &nodes));
        for node in &nodes {
            tokens.extend(emit_node(&base, &visitor, node));
        }
        Ok(tokens)
    }

    fn resolve_node(&self, base_name: &str, variant: &VariantDescriptor) -> Result<NodeParts, GenerateError> {
        let reserved = |name: &str| GenerateError::ReservedName {
            variant: variant.name.clone(),
            name: name.to_string(),
        };

        if variant.name == "Self" {
            return Err(reserved(&variant.name));
        }

        let mut fields = Vec::with_capacity(variant.fields.len());
        let mut field_names = HashSet::new();
        for field in &variant.fields {
            let ty = FieldType::resolve(field.declared_type.as_deref(), &self.node_bases).ok_or_else(|| {
                GenerateError::UnsupportedType {
                    variant: variant.name.clone(),
                    field: field.name.clone(),
                    declared: field.declared_type.clone().unwrap_or_default(),
                }
            })?;
            let name = field_ident(&to_snake_case(&field.name)).ok_or_else(|| reserved(&field.name))?;
            claim(&mut field_names, &variant.name, name.to_string())?;
            fields.push((name, ty));
        }

        let declaration = variant
            .fields
            .iter()
            .map(|f| match &f.declared_type {
                Some(ty) => format!("{ty} {}", f.name),
                None => f.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        Ok(NodeParts {
            variant: Ident::new(&variant.name, Span::call_site()),
            type_name: format_ident!("{}{}", variant.name, base_name),
            method: visit_method(&variant.name, base_name),
            fields,
            declaration: format!("{} : {}", variant.name, declaration),
        })
    }
}

// =============================================================================
// ITEM EMISSION
// =============================================================================

fn emit_base(base: &Ident, visitor: &Ident, nodes: &[NodeParts]) -> TokenStream {
    let doc = format!(" A `{base}` node. The set of variants is closed; behavior lives in [`{visitor}`] implementations.");
    let variants = nodes.iter().map(|node| {
        let variant = &node.variant;
        let type_name = &node.type_name;
        quote!(#variant(#type_name))
    });
    let arms = nodes.iter().map(|node| {
        let variant = &node.variant;
        quote!(#base::#variant(node) => node.accept(visitor))
    });
    // An empty family is uninhabited; matching through the reference would
    // not be exhaustive.
    let scrutinee = if nodes.is_empty() { quote!(*self) } else { quote!(self) };

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        pub enum #base {
            #(#variants,)*
        }

        impl #base {
            #[doc = " Dispatches to the visitor method matching this node's variant."]
            pub fn accept<V: #visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                match #scrutinee {
                    #(#arms,)*
                }
            }
        }
    }
}

fn emit_visitor(base_name: &str, visitor: &Ident, nodes: &[NodeParts]) -> TokenStream {
    let doc = format!(" One operation over `{base_name}` trees: a method per variant.");
    let param = Ident::new(&to_snake_case(base_name), Span::call_site());
    let methods = nodes.iter().map(|node| {
        let method = &node.method;
        let type_name = &node.type_name;
        quote!(fn #method(&mut self, #param: &#type_name) -> Self::Output;)
    });

    quote! {
        #[doc = #doc]
        pub trait #visitor {
            type Output;

            #(#methods)*
        }
    }
}

fn emit_node(base: &Ident, visitor: &Ident, node: &NodeParts) -> TokenStream {
    let NodeParts {
        variant,
        type_name,
        method,
        fields,
        declaration,
    } = node;

    let doc = format!(" `{declaration}`");
    let definitions = fields.iter().map(|(name, ty)| {
        let storage = ty.storage();
        quote!(pub #name: #storage)
    });
    let params = fields.iter().map(|(name, ty)| {
        let parameter = ty.parameter();
        quote!(#name: #parameter)
    });
    let inits = fields.iter().map(|(name, ty)| {
        if ty.is_boxed() {
            let value = ty.initializer(name);
            quote!(#name: #value)
        } else {
            quote!(#name)
        }
    });

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        pub struct #type_name {
            #(#definitions,)*
        }

        impl #type_name {
            #[doc = " Builds the node from its fields in declaration order."]
            pub fn new(#(#params),*) -> Self {
                Self { #(#inits),* }
            }

            #[doc = " Calls the matching visitor method and returns its result."]
            pub fn accept<V: #visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
                visitor.#method(self)
            }
        }

        impl From<#type_name> for #base {
            fn from(node: #type_name) -> Self {
                #base::#variant(node)
            }
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Renders grammars into a formatted Rust source file.
///
/// The output starts with the generated-file header, is pretty-printed, and
/// is byte-identical for identical input.
pub fn generate(grammars: &[GrammarDescriptor], imports: &Imports) -> Result<String, GenerateError> {
    let tokens = Emitter::new(grammars, imports)?.emit_file()?;
    let file: syn::File = syn::parse2(tokens)?;
    Ok(format!("{GENERATED_HEADER}\n\n{}", prettyplease::unparse(&file)))
}

// =============================================================================
// NAMING
// =============================================================================

/// Converts `thenBranch` / `IfStmt` style names to `then_branch` / `if_stmt`.
pub(crate) fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `visit_binary_expr` for variant `Binary` of base `Expr`.
fn visit_method(variant: &str, base_name: &str) -> Ident {
    format_ident!(
        "{}_{}_{}",
        VISIT_METHOD_PREFIX,
        to_snake_case(variant),
        to_snake_case(base_name)
    )
}

/// Records `name` as taken, failing if an earlier item already took it.
fn claim(taken: &mut HashSet<String>, owner: &str, name: String) -> Result<(), GenerateError> {
    if taken.contains(&name) {
        return Err(GenerateError::NameCollision {
            variant: owner.to_string(),
            name,
        });
    }
    taken.insert(name);
    Ok(())
}

/// Parses an import path and checks it names the expected type.
fn import_path(path: &str, expected: &str) -> Result<syn::Path, GenerateError> {
    let parsed: syn::Path =
        syn::parse_str(path).map_err(|_| GenerateError::InvalidImport(path.to_string()))?;
    match parsed.segments.last() {
        Some(last) if last.ident == expected => Ok(parsed),
        _ => Err(GenerateError::InvalidImport(path.to_string())),
    }
}

/// Keywords that must be emitted as raw identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers at all.
const UNRAWABLE_KEYWORDS: &[&str] = &["self", "Self", "super", "crate"];

/// Builds a field identifier, escaping keywords. Returns `None` for names
/// Rust cannot express.
fn field_ident(name: &str) -> Option<Ident> {
    if UNRAWABLE_KEYWORDS.contains(&name) {
        None
    } else if RUST_KEYWORDS.contains(&name) {
        Some(Ident::new_raw(name, Span::call_site()))
    } else {
        Some(Ident::new(name, Span::call_site()))
    }
}

#[cfg(test)]
mod tests;
