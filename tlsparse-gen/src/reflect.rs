//! Turns declared records into [`RecordSchema`]s.

use tracing::{debug, trace};

use crate::{
    annotation::Annotation,
    error::{Error, FieldLocation, Result},
    schema::{Field, FieldKind, RecordSchema, UintWidth},
    source::{DeclaredType, FieldDecl, TypeDecl, TypeSource},
};

/// Derives the schema of the record called `name`, recursing into the element records of its lists.
///
/// # Errors
/// If `name` is not a struct with named fields or a unit struct, or any field (at any depth) cannot
/// be framed: unsupported types, missing length prefixes, anonymous list elements, records that
/// reference themselves, and so on. The first problem found is returned.
pub fn reflect<S: TypeSource + ?Sized>(source: &S, name: &str) -> Result<RecordSchema> {
    let (module, fields) = match source.lookup(name) {
        Some(TypeDecl::Record { module, fields }) => (module, fields),
        Some(TypeDecl::Alias(_) | TypeDecl::Other) => {
            return Err(Error::NotARecord(name.to_owned()))
        }
        None => return Err(Error::TypeNotFound(name.to_owned())),
    };
    let schema = Reflector {
        source,
        stack: Vec::new(),
    }
    .record(name, module, fields)?;
    debug!(
        record = %schema.path(),
        fields = schema.fields.len(),
        min_len = schema.min_len(),
        depth = schema.depth(),
        "reflected record"
    );
    Ok(schema)
}

/// A declared type with aliases followed.
enum Resolved<'s> {
    Scalar(String),
    Record(String, &'s [String], &'s [FieldDecl]),
    List(DeclaredType),
    Composite(String),
    Unsupported(String),
}

struct Reflector<'s, S: ?Sized> {
    source: &'s S,
    /// Records currently being reflected, outermost first.
    stack: Vec<String>,
}

impl<'s, S: TypeSource + ?Sized> Reflector<'s, S> {
    fn record(
        &mut self,
        name: &str,
        module: &[String],
        fields: &'s [FieldDecl],
    ) -> Result<RecordSchema> {
        if let Some(start) = self.stack.iter().position(|entered| entered == name) {
            let mut path = self.stack[start..].to_vec();
            path.push(name.to_owned());
            return Err(Error::Cycle(path));
        }
        self.stack.push(name.to_owned());
        let fields = fields
            .iter()
            .map(|field| self.field(name, field))
            .collect::<Result<Vec<_>>>();
        self.stack.pop();
        Ok(RecordSchema {
            name: name.to_owned(),
            module: module.to_vec(),
            fields: fields?,
        })
    }

    fn field(&mut self, record: &str, decl: &FieldDecl) -> Result<Field> {
        let at = || FieldLocation::new(record, &decl.name);
        if decl.name.starts_with("__") {
            return Err(Error::ReservedName { at: at() });
        }
        let annotation = decl
            .annotation
            .as_deref()
            .map(Annotation::parse)
            .unwrap_or_default();
        let kind = match self.resolve(&decl.ty)? {
            Resolved::Scalar(ty) => FieldKind::Uint(uint_width(&ty, &annotation, at)?),
            Resolved::List(element) => self.list(&element, &annotation, at)?,
            Resolved::Record(ty, ..) => return Err(Error::BareRecord { at: at(), ty }),
            Resolved::Composite(ty) => return Err(Error::InlineComposite { at: at(), ty }),
            Resolved::Unsupported(ty) => return Err(Error::UnsupportedType { at: at(), ty }),
        };
        trace!(record, field = %decl.name, ?kind, "reflected field");
        Ok(Field {
            name: decl.name.clone(),
            kind,
        })
    }

    fn list(
        &mut self,
        element: &DeclaredType,
        annotation: &Annotation,
        at: impl Fn() -> FieldLocation,
    ) -> Result<FieldKind> {
        let prefix = || {
            annotation
                .length_prefix()
                .ok_or_else(|| Error::MissingLengthPrefix { at: at() })
        };
        match self.resolve(element)? {
            Resolved::Scalar(ty) if ty == "u8" => Ok(FieldKind::Bytes { prefix: prefix()? }),
            Resolved::Record(ty, module, fields) => {
                let prefix = prefix()?;
                if fields.is_empty() {
                    return Err(Error::EmptyElement { at: at(), ty });
                }
                Ok(FieldKind::List {
                    prefix,
                    element: self.record(&ty, module, fields)?,
                })
            }
            Resolved::Composite(_) => Err(Error::AnonymousElement { at: at() }),
            Resolved::Scalar(_) | Resolved::List(_) | Resolved::Unsupported(_) => {
                Err(Error::UnsupportedElement {
                    at: at(),
                    ty: element.to_string(),
                })
            }
        }
    }

    fn resolve(&self, ty: &DeclaredType) -> Result<Resolved<'s>> {
        let source = self.source;
        let mut aliases: Vec<String> = Vec::new();
        let mut ty = ty.clone();
        loop {
            return Ok(match ty {
                DeclaredType::Named(name) => {
                    if aliases.contains(&name) {
                        aliases.push(name);
                        return Err(Error::Cycle(aliases));
                    }
                    match source.lookup(&name) {
                        Some(TypeDecl::Record { module, fields }) => {
                            Resolved::Record(name, module, fields)
                        }
                        Some(TypeDecl::Alias(target)) => {
                            aliases.push(name);
                            ty = target.clone();
                            continue;
                        }
                        Some(TypeDecl::Other) => Resolved::Unsupported(name),
                        None => return Err(Error::TypeNotFound(name)),
                    }
                }
                DeclaredType::Scalar(name) => Resolved::Scalar(name),
                DeclaredType::List(element) => Resolved::List(*element),
                DeclaredType::Composite(text) => Resolved::Composite(text),
                DeclaredType::Unsupported(text) => Resolved::Unsupported(text),
            });
        }
    }
}

fn uint_width(
    ty: &str,
    annotation: &Annotation,
    at: impl Fn() -> FieldLocation,
) -> Result<UintWidth> {
    let natural = match ty {
        "u8" => UintWidth::U8,
        "u16" => UintWidth::U16,
        "u32" => UintWidth::U32,
        "u64" => UintWidth::U64,
        _ => {
            return Err(Error::UnsupportedType {
                at: at(),
                ty: ty.to_owned(),
            })
        }
    };
    match (annotation.uint_width(), natural) {
        (None, _) => Ok(natural),
        (Some(UintWidth::U24), UintWidth::U32) => Ok(UintWidth::U24),
        (Some(UintWidth::U48), UintWidth::U64) => Ok(UintWidth::U48),
        (Some(width), _) => Err(Error::WidthMismatch {
            at: at(),
            token: width.to_string(),
            ty: ty.to_owned(),
        }),
    }
}
