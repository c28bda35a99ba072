#![allow(clippy::module_name_repetitions)]
//! Generates decoders for TLS-style length-prefixed records.
//!
//! Records are ordinary Rust structs. Fields may be unsigned integers, byte strings (`Vec<u8>`) or
//! lists of other records (`Vec<Record>`); the variable sized ones must say how wide their length
//! prefix is with a `tls` attribute.
//!
//! ```
//! // Declarations, typically read from a source file with `SourceIndex::add_file`.
//! let declarations = r#"
//!     pub struct HpkeCiphersuite {
//!         pub kdf_id: u16,
//!         pub aead_id: u16,
//!     }
//!
//!     pub struct HpkeKeyConfig {
//!         pub config_id: u8,
//!         pub kem_id: u16,
//!         #[tls(uint16prefixed)]
//!         pub public_key: Vec<u8>,
//!         #[tls(uint16prefixed)]
//!         pub ciphersuites: Vec<HpkeCiphersuite>,
//!     }
//! "#;
//! let index = tlsparse_gen::SourceIndex::from_source(declarations)?;
//! let code = tlsparse_gen::generate(&index, &["HpkeKeyConfig"], &Default::default())?;
//! assert!(code.contains("pub fn hpke_key_config_parser(\n    input: &[u8],\n)"));
//! # Ok::<(), tlsparse_gen::Error>(())
//! ```
//!
//! # Supported Field Types
//!
//! - `u8`, `u16`, `u32` and `u64`, read big-endian. `#[tls(uint24)]` on a `u32` or `#[tls(uint48)]`
//!     on a `u64` reads 3 or 6 bytes instead.
//! - `Vec<u8>` with `#[tls(uint8prefixed)]`, `#[tls(uint16prefixed)]` or `#[tls(uint24prefixed)]`: a
//!     length followed by that many bytes.
//! - `Vec<Record>` with one of the same prefixes: a length followed by that many bytes of back to
//!     back `Record` encodings. `Record` must be a named struct and may itself contain lists.
//!
//! Type aliases are followed. Anything else stops generation with an [`Error`] naming the
//! offending record and field.
//!
//! # Generated Code
//!
//! Every requested record `Name` gets a `name_parser(input: &[u8]) -> Result<Name, Malformed>`
//! function using the [`tlsparse`](https://docs.rs/tlsparse) runtime. It reads fields strictly in
//! declaration order and returns `Malformed` instead of panicking on any input it cannot decode.

use proc_macro2::TokenStream;
use tracing::{debug, warn};

pub mod annotation;
mod error;
pub mod gen;
pub mod reflect;
pub mod schema;
pub mod source;

pub use error::{Error, FieldLocation, Result};
pub use gen::GenOptions;
pub use reflect::reflect;
pub use schema::{Field, FieldKind, PrefixWidth, RecordSchema, UintWidth};
pub use source::{SourceIndex, TypeSource};

/// Start of every file the `tlsparse-gen` binary writes, ahead of the [`generate`] output.
pub const HEADER: &str = "// Code generated by tlsparse-gen. DO NOT EDIT.\n\n";

/// `names` in request order, each name once. Repeats are logged and dropped.
#[must_use]
pub fn unique_names<N: AsRef<str>>(names: &[N]) -> Vec<&str> {
    let mut unique: Vec<&str> = Vec::new();
    for name in names {
        let name = name.as_ref();
        if unique.contains(&name) {
            warn!(record = name, "record requested more than once");
        } else {
            unique.push(name);
        }
    }
    unique
}

/// Reflects every record in `names` and returns the formatted source of their decoders, in the
/// order requested. Names requested more than once are generated once.
///
/// # Errors
/// On the first record that cannot be reflected; no code is returned in that case.
pub fn generate<S, N>(source: &S, names: &[N], options: &GenOptions) -> Result<String>
where
    S: TypeSource + ?Sized,
    N: AsRef<str>,
{
    let mut tokens = TokenStream::new();
    for name in unique_names(names) {
        let schema = reflect(source, name)?;
        debug!(
            record = name,
            function = %gen::parser_name(&schema, options),
            "generating decoder"
        );
        tokens.extend(gen::decoder(&schema, options));
    }
    Ok(gen::format(tokens))
}
