use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Names the field a generation error was found on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLocation {
    pub record: String,
    pub field: String,
}

impl FieldLocation {
    pub(crate) fn new(record: &str, field: &str) -> Self {
        Self {
            record: record.to_owned(),
            field: field.to_owned(),
        }
    }
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}.{}`", self.record, self.field)
    }
}

/// Errors that stop code generation. None of these can happen while decoding.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
    #[error("malformed `tls` attribute on {at}: {source}")]
    Attribute {
        at: FieldLocation,
        #[source]
        source: syn::Error,
    },
    #[error("type `{name}` is defined in both {} and {}", .first.display(), .second.display())]
    DuplicateType {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("type `{0}` was not found")]
    TypeNotFound(String),
    #[error("type `{0}` is not a struct with named fields")]
    NotARecord(String),
    #[error("{at} has unsupported type `{ty}`")]
    UnsupportedType { at: FieldLocation, ty: String },
    #[error("{at} has unsupported list element type `{ty}`")]
    UnsupportedElement { at: FieldLocation, ty: String },
    #[error("{at} is missing a length prefix annotation")]
    MissingLengthPrefix { at: FieldLocation },
    #[error("{at} is a list of an anonymous type, list elements must be a named struct")]
    AnonymousElement { at: FieldLocation },
    #[error("{at} has an inline composite type `{ty}`, nest records through a named struct")]
    InlineComposite { at: FieldLocation, ty: String },
    #[error("{at} holds record `{ty}` directly, records can only be nested in a length-prefixed list")]
    BareRecord { at: FieldLocation, ty: String },
    #[error("{at} is annotated `{token}` which does not fit type `{ty}`")]
    WidthMismatch {
        at: FieldLocation,
        token: String,
        ty: String,
    },
    #[error("{at} is a list of `{ty}` which has no fields")]
    EmptyElement { at: FieldLocation, ty: String },
    #[error("{at} uses a name starting with `__`, which is reserved for generated code")]
    ReservedName { at: FieldLocation },
    #[error("cyclic type reference: {}", .0.join(" -> "))]
    Cycle(Vec<String>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
