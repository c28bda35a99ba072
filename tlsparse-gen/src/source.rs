//! Type declarations the reflector works from.
//!
//! [`TypeSource`] is the only thing the reflector needs: a way to look a type up by name and see
//! either its fields (with their declared types and annotations), the type it aliases, or that it
//! is some other kind of type. [`SourceIndex`] implements it by parsing Rust source files.

use std::{
    collections::BTreeMap,
    fmt,
    path::{Path, PathBuf},
};

use quote::ToTokens;
use syn::{
    punctuated::Punctuated, Expr, ExprLit, Fields, GenericArgument, Item, Lit, Meta,
    PathArguments, Token, Type,
};
use tracing::{debug, trace};

use crate::error::{Error, FieldLocation, Result};

/// Built in types that can never name a record.
const SCALARS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize", "f32",
    "f64", "bool", "char", "str", "String",
];

/// The type a field was declared with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclaredType {
    /// A built in scalar, by name (`u16`, `bool`, ...).
    Scalar(String),
    /// A type referred to by name, to be looked up in the [`TypeSource`].
    Named(String),
    /// A growable list of the inner type (`Vec<T>`).
    List(Box<DeclaredType>),
    /// An unnamed type built inline out of other types, such as a tuple or array.
    Composite(String),
    /// Anything else (references, generic wrappers, function pointers, ...).
    Unsupported(String),
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(name) | Self::Named(name) => f.write_str(name),
            Self::List(element) => write!(f, "Vec<{element}>"),
            Self::Composite(text) | Self::Unsupported(text) => f.write_str(text),
        }
    }
}

/// A field as declared, before any framing rules are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    pub ty: DeclaredType,
    /// Raw annotation text, see [`crate::annotation`].
    pub annotation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDecl {
    /// A struct with named fields, in declaration order. Unit structs are records without fields.
    Record {
        /// Inline modules enclosing the struct, outermost first.
        module: Vec<String>,
        fields: Vec<FieldDecl>,
    },
    /// Another name for the inner type.
    Alias(DeclaredType),
    /// A type that exists but cannot be decoded as a record (enum, tuple struct, union, ...).
    Other,
}

/// Looks up type declarations by name.
pub trait TypeSource {
    fn lookup(&self, name: &str) -> Option<&TypeDecl>;
}

#[derive(Debug)]
struct Entry {
    decl: TypeDecl,
    origin: PathBuf,
}

/// Every struct, enum, union and type alias declared in a set of Rust source files.
///
/// Types are keyed by their bare name, so two types with the same name in different files or
/// modules are rejected. Records declared in inline `mod` blocks remember their module path, and
/// generated code names them by that path relative to the file they were declared in.
#[derive(Debug, Default)]
pub struct SourceIndex {
    types: BTreeMap<String, Entry>,
}

impl SourceIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes a single in memory source file.
    ///
    /// # Errors
    /// If the source does not parse or declares a type twice.
    pub fn from_source(source: &str) -> Result<Self> {
        let mut index = Self::new();
        index.add_source("<input>", source)?;
        Ok(index)
    }

    /// Reads and indexes the file at `path`.
    ///
    /// # Errors
    /// If the file cannot be read or parsed, or declares a type that is already indexed.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        self.add_source(path, &source)
    }

    /// Indexes `source`, reporting errors against `origin`.
    ///
    /// # Errors
    /// If the source does not parse or declares a type that is already indexed.
    pub fn add_source(&mut self, origin: impl Into<PathBuf>, source: &str) -> Result<()> {
        let origin = origin.into();
        let file = syn::parse_file(source).map_err(|source| Error::Parse {
            path: origin.clone(),
            source,
        })?;
        self.add_items(&file.items, &[], &origin)?;
        debug!(origin = %origin.display(), types = self.types.len(), "indexed source");
        Ok(())
    }

    /// Number of indexed types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Indexed type names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    fn add_items(&mut self, items: &[Item], module: &[String], origin: &Path) -> Result<()> {
        for item in items {
            match item {
                Item::Struct(item) => {
                    let name = item.ident.to_string();
                    let decl = match &item.fields {
                        Fields::Named(fields) => TypeDecl::Record {
                            module: module.to_vec(),
                            fields: fields
                                .named
                                .iter()
                                .map(|field| field_decl(&name, field))
                                .collect::<Result<_>>()?,
                        },
                        Fields::Unit => TypeDecl::Record {
                            module: module.to_vec(),
                            fields: Vec::new(),
                        },
                        Fields::Unnamed(_) => TypeDecl::Other,
                    };
                    self.insert(name, decl, origin)?;
                }
                Item::Type(item) => {
                    let decl = TypeDecl::Alias(declared_type(&item.ty));
                    self.insert(item.ident.to_string(), decl, origin)?;
                }
                Item::Enum(item) => self.insert(item.ident.to_string(), TypeDecl::Other, origin)?,
                Item::Union(item) => self.insert(item.ident.to_string(), TypeDecl::Other, origin)?,
                Item::Mod(item) => {
                    if let Some((_, items)) = &item.content {
                        let mut inner = module.to_vec();
                        inner.push(item.ident.to_string());
                        self.add_items(items, &inner, origin)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn insert(&mut self, name: String, decl: TypeDecl, origin: &Path) -> Result<()> {
        if let Some(existing) = self.types.get(&name) {
            return Err(Error::DuplicateType {
                name,
                first: existing.origin.clone(),
                second: origin.to_owned(),
            });
        }
        trace!(%name, ?decl, "indexed type");
        self.types.insert(
            name,
            Entry {
                decl,
                origin: origin.to_owned(),
            },
        );
        Ok(())
    }
}

impl TypeSource for SourceIndex {
    fn lookup(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name).map(|entry| &entry.decl)
    }
}

fn field_decl(record: &str, field: &syn::Field) -> Result<FieldDecl> {
    // named fields always carry an ident.
    let name = field
        .ident
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let annotation = annotation(field).map_err(|source| Error::Attribute {
        at: FieldLocation::new(record, &name),
        source,
    })?;
    Ok(FieldDecl {
        ty: declared_type(&field.ty),
        name,
        annotation,
    })
}

/// Joins the contents of every `tls` attribute on a field into one annotation string.
fn annotation(field: &syn::Field) -> syn::Result<Option<String>> {
    let mut parts = Vec::new();
    for attr in &field.attrs {
        if !attr.path().is_ident("tls") {
            continue;
        }
        match &attr.meta {
            Meta::List(_) => {
                let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
                for meta in &nested {
                    parts.push(match meta.path().get_ident() {
                        Some(ident) => ident.to_string(),
                        None => meta.path().to_token_stream().to_string(),
                    });
                }
            }
            Meta::NameValue(value) => {
                if let Expr::Lit(ExprLit {
                    lit: Lit::Str(ref text),
                    ..
                }) = value.value
                {
                    parts.push(text.value());
                } else {
                    return Err(syn::Error::new_spanned(
                        &value.value,
                        "tls requires a string literal. example: `#[tls = \"uint16prefixed\"]`",
                    ));
                }
            }
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "tls requires a list of tokens. example: `#[tls(uint16prefixed)]`",
                ));
            }
        }
    }
    Ok(if parts.is_empty() {
        None
    } else {
        Some(parts.join(","))
    })
}

fn declared_type(ty: &Type) -> DeclaredType {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            let Some(last) = path.path.segments.last() else {
                return DeclaredType::Unsupported(type_text(ty));
            };
            let name = last.ident.to_string();
            match &last.arguments {
                PathArguments::None if SCALARS.contains(&name.as_str()) => {
                    DeclaredType::Scalar(name)
                }
                PathArguments::None => DeclaredType::Named(name),
                PathArguments::AngleBracketed(args) if name == "Vec" && args.args.len() == 1 => {
                    match args.args.first() {
                        Some(GenericArgument::Type(element)) => {
                            DeclaredType::List(Box::new(declared_type(element)))
                        }
                        _ => DeclaredType::Unsupported(type_text(ty)),
                    }
                }
                _ => DeclaredType::Unsupported(type_text(ty)),
            }
        }
        Type::Paren(inner) => declared_type(&inner.elem),
        Type::Group(inner) => declared_type(&inner.elem),
        Type::Tuple(_) | Type::Array(_) => DeclaredType::Composite(type_text(ty)),
        _ => DeclaredType::Unsupported(type_text(ty)),
    }
}

fn type_text(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}
