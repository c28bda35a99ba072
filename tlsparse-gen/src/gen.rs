//! Emits decode routines from [`RecordSchema`]s.
//!
//! Each record becomes one function:
//!
//! ```text
//! pub fn hpke_key_config_parser(input: &[u8]) -> Result<HpkeKeyConfig, ::tlsparse::Malformed> {
//!     let mut __reader_0 = ::tlsparse::Reader::new(input);
//!     let config_id = __reader_0.read_u8()?;
//!     let public_key = __reader_0.read_u16_length_prefixed()?.as_slice().to_vec();
//!     let mut __reader_1 = __reader_0.read_u16_length_prefixed()?;
//!     let mut __items_1 = Vec::new();
//!     while !__reader_1.is_empty() {
//!         let kdf_id = __reader_1.read_u16()?;
//!         let aead_id = __reader_1.read_u16()?;
//!         __items_1.push(HpkeCiphersuite { kdf_id, aead_id });
//!     }
//!     let ciphersuites = __items_1;
//!     Ok(HpkeKeyConfig { config_id, public_key, ciphersuites })
//! }
//! ```
//!
//! Every field is decoded into a local before the record is built, so an error can never leave a
//! partially filled record behind. Records declared inside modules are named by their module path
//! (`suites::Suite { .. }`), relative to where the declarations live.

use convert_case::{Case, Casing};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use syn::{parse_quote, Path, Visibility};
use tracing::trace;

use crate::schema::{Field, FieldKind, RecordSchema};

/// Knobs for the emitted code.
#[derive(Clone, Debug)]
pub struct GenOptions {
    /// Path to the `tlsparse` runtime crate as seen from the generated code.
    pub runtime: Path,
    /// Visibility of the generated functions.
    pub visibility: Visibility,
    /// Appended to the snake case record name to name the generated function.
    pub suffix: String,
    /// Fail with `Malformed::TrailingBytes` when input is left after the top level record.
    pub check_complete: bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            runtime: parse_quote!(::tlsparse),
            visibility: parse_quote!(pub),
            suffix: "_parser".to_owned(),
            check_complete: false,
        }
    }
}

/// Names used in generated code.
///
/// Internal locals start with `__` and carry the list nesting depth, field names starting with
/// `__` are rejected during reflection so the two can never collide.
struct Namer;

impl Namer {
    fn input() -> Ident {
        format_ident!("input")
    }

    /// Reader over the region holding records at `depth`; depth 0 is the whole input.
    fn reader(depth: usize) -> Ident {
        format_ident!("__reader_{depth}")
    }

    /// Accumulator for the list elements decoded at `depth`.
    fn items(depth: usize) -> Ident {
        format_ident!("__items_{depth}")
    }

    fn field(field: &Field) -> Ident {
        format_ident!("{}", field.name)
    }

    /// Path to the record type, qualified by the modules it was declared in.
    fn record(schema: &RecordSchema) -> TokenStream {
        let modules = schema.module.iter().map(|module| format_ident!("{module}"));
        let name = format_ident!("{}", schema.name);
        quote! { #(#modules::)* #name }
    }

    fn parser_fn(schema: &RecordSchema, suffix: &str) -> Ident {
        format_ident!("{}{}", schema.name.to_case(Case::Snake), suffix)
    }
}

/// Name of the function [`decoder`] emits for `schema`.
#[must_use]
pub fn parser_name(schema: &RecordSchema, options: &GenOptions) -> String {
    Namer::parser_fn(schema, &options.suffix).to_string()
}

/// Emits the decode routine for `schema`.
///
/// The output only depends on its arguments.
#[must_use]
pub fn decoder(schema: &RecordSchema, options: &GenOptions) -> TokenStream {
    let runtime = &options.runtime;
    let vis = &options.visibility;
    let input = Namer::input();
    let record = Namer::record(schema);
    let fn_name = Namer::parser_fn(schema, &options.suffix);
    let doc = format!(" Decodes a [`{}`] from its wire encoding.", schema.path());

    let body = if schema.fields.is_empty() {
        if options.check_complete {
            quote! {
                #runtime::Reader::new(#input).finish()?;
            }
        } else {
            quote! {
                let _ = #input;
            }
        }
    } else {
        let reader = Namer::reader(0);
        let fields = fields_quote(&schema.fields, 0, runtime);
        let finish = if options.check_complete {
            quote! {
                #reader.finish()?;
            }
        } else {
            TokenStream::new()
        };
        quote! {
            let mut #reader = #runtime::Reader::new(#input);
            #fields
            #finish
        }
    };
    let construct = construct_quote(schema);
    trace!(record = %schema.name, function = %fn_name, "generated decoder");
    quote! {
        #[doc = #doc]
        #vis fn #fn_name(#input: &[u8]) -> Result<#record, #runtime::Malformed> {
            #body
            Ok(#construct)
        }
    }
}

/// Statements decoding `fields`, in order, from the reader at `depth`.
fn fields_quote(fields: &[Field], depth: usize, runtime: &Path) -> TokenStream {
    let reader = Namer::reader(depth);
    let mut output = TokenStream::new();
    for field in fields {
        let name = Namer::field(field);
        let statements = match &field.kind {
            FieldKind::Uint(width) => {
                let read = width.read_fn();
                quote! {
                    let #name = #reader.#read()?;
                }
            }
            FieldKind::Bytes { prefix } => {
                let read = prefix.read_fn();
                quote! {
                    let #name = #reader.#read()?.as_slice().to_vec();
                }
            }
            FieldKind::List { prefix, element } => {
                let read = prefix.read_fn();
                let region = Namer::reader(depth + 1);
                let items = Namer::items(depth + 1);
                let element_fields = fields_quote(&element.fields, depth + 1, runtime);
                let construct = construct_quote(element);
                quote! {
                    let mut #region = #reader.#read()?;
                    let mut #items = Vec::new();
                    while !#region.is_empty() {
                        #element_fields
                        #items.push(#construct);
                    }
                    let #name = #items;
                }
            }
        };
        output.extend(statements);
    }
    output
}

/// `Record { a, b, .. }` built from the locals of the same names.
fn construct_quote(schema: &RecordSchema) -> TokenStream {
    let record = Namer::record(schema);
    let names = schema.fields.iter().map(Namer::field);
    quote! {
        #record { #(#names),* }
    }
}

/// Pretty prints generated items.
///
/// # Panics
/// If `tokens` is not a valid Rust file. Generated code always is, so this is a generator bug.
#[must_use]
pub fn format(tokens: TokenStream) -> String {
    let file: syn::File = match syn::parse2(tokens) {
        Ok(file) => file,
        Err(err) => panic!("generated decoder is not valid Rust, this is a tlsparse-gen bug: {err}"),
    };
    prettyplease::unparse(&file)
}
