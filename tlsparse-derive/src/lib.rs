//! Derive support for records declared for `tlsparse-gen`.
//!
//! Decoders are generated ahead of time from the declarations, so deriving [`Record`] adds no code.
//! It makes `#[tls(...)]` a known attribute on the struct's fields and rejects malformed uses of it
//! at compile time, the same ones `tlsparse-gen` would refuse to read.
use syn::{
    parse_macro_input, punctuated::Punctuated, spanned::Spanned, Data, DeriveInput, Expr, ExprLit,
    Fields, Lit, Meta, Token,
};

fn check_attr(attr: &syn::Attribute) -> syn::Result<()> {
    match &attr.meta {
        Meta::List(_) => attr
            .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
            .map(|_| ()),
        Meta::NameValue(value) => match &value.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(_), ..
            }) => Ok(()),
            other => Err(syn::Error::new(
                other.span(),
                "tls requires a string literal. example: `#[tls = \"uint16prefixed\"]`",
            )),
        },
        Meta::Path(path) => Err(syn::Error::new(
            path.span(),
            "tls requires a list of tokens. example: `#[tls(uint16prefixed)]`",
        )),
    }
}

fn check(input: &DeriveInput) -> syn::Result<()> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields,
            Fields::Unit => return Ok(()),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "records must have named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "`Record` can only be derived for structs",
            ))
        }
    };
    if let Some(attr) = input.attrs.iter().find(|a| a.path().is_ident("tls")) {
        return Err(syn::Error::new(
            attr.span(),
            "`tls` belongs on fields, not on the record",
        ));
    }
    let mut errors: Option<syn::Error> = None;
    for field in &fields.named {
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("tls")) {
            if let Err(err) = check_attr(attr) {
                match errors.as_mut() {
                    Some(errors) => errors.combine(err),
                    None => errors = Some(err),
                }
            }
        }
    }
    errors.map_or(Ok(()), Err)
}

/// Marks a struct as a record and registers the `tls` field attribute.
///
/// ```
/// #[derive(tlsparse::Record)]
/// pub struct KeyShare {
///     pub group: u16,
///     #[tls(uint16prefixed)]
///     pub key_exchange: Vec<u8>,
/// }
/// ```
///
/// The attribute takes bare words, `#[tls(uint16prefixed)]`, or a string holding the same words
/// separated by commas, `#[tls = "uint16prefixed"]`.
///
/// ```compile_fail
/// #[derive(tlsparse::Record)]
/// pub struct KeyShare {
///     #[tls]
///     pub key_exchange: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(tls))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match check(&input) {
        Ok(()) => proc_macro::TokenStream::new(),
        Err(err) => proc_macro::TokenStream::from(err.to_compile_error()),
    }
}
