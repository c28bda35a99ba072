use std::fmt;

use proc_macro2::Ident;
use quote::format_ident;

/// Wire width of a fixed size unsigned integer field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UintWidth {
    U8,
    U16,
    U24,
    U32,
    U48,
    U64,
}

impl UintWidth {
    /// Amount of bytes the field occupies on the wire.
    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U24 => 3,
            Self::U32 => 4,
            Self::U48 => 6,
            Self::U64 => 8,
        }
    }

    #[must_use]
    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }

    /// Name of the `tlsparse::Reader` method decoding this width.
    pub(crate) fn read_fn(self) -> Ident {
        format_ident!("read_u{}", self.bits())
    }
}

impl fmt::Display for UintWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uint{}", self.bits())
    }
}

/// Width of the length that precedes a variable sized field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrefixWidth {
    U8,
    U16,
    U24,
}

impl PrefixWidth {
    #[must_use]
    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }

    #[must_use]
    pub const fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U24 => 3,
        }
    }

    /// Name of the `tlsparse::Reader` method splitting off a region with this prefix.
    pub(crate) fn read_fn(self) -> Ident {
        format_ident!("read_u{}_length_prefixed", self.bits())
    }
}

impl fmt::Display for PrefixWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uint{}prefixed", self.bits())
    }
}

/// How a single field is laid out on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Big-endian unsigned integer.
    Uint(UintWidth),
    /// Length prefix followed by that many raw bytes.
    Bytes { prefix: PrefixWidth },
    /// Length prefix followed by back to back encodings of `element`, as many as fit the region.
    List {
        prefix: PrefixWidth,
        element: RecordSchema,
    },
}

impl FieldKind {
    /// Smallest amount of bytes a valid encoding of this field can take.
    #[must_use]
    pub fn min_len(&self) -> usize {
        match self {
            Self::Uint(width) => width.bytes(),
            Self::Bytes { prefix } | Self::List { prefix, .. } => prefix.bytes(),
        }
    }
}

/// One field of a record, in the order it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Struct member name, also used for the local holding the decoded value.
    pub name: String,
    pub kind: FieldKind,
}

/// A named record and its fields in decode order.
///
/// The order of `fields` is the wire order and is never changed after reflection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: String,
    /// Modules the record is declared in, outermost first. Empty at the top of a source file.
    pub module: Vec<String>,
    pub fields: Vec<Field>,
}

impl RecordSchema {
    /// `name` qualified by `module`, as written in generated code.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        for module in &self.module {
            path.push_str(module);
            path.push_str("::");
        }
        path.push_str(&self.name);
        path
    }

    /// Smallest amount of bytes a valid encoding of this record can take.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.fields.iter().map(|field| field.kind.min_len()).sum()
    }

    /// Deepest list nesting inside this record, 0 when it holds no lists.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.fields
            .iter()
            .map(|field| match &field.kind {
                FieldKind::List { element, .. } => element.depth() + 1,
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}
