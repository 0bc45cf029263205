use std::fmt;
use std::path::PathBuf;

/// Error during a generation run.
///
/// Every error is terminal: a run either produces one complete generated
/// unit or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No type with the requested name exists in the loaded package
    TypeNotFound { type_name: String },
    /// The name resolves to a declaration that is not a struct
    TypeNotRecord { type_name: String },
    /// Two members resolve to the same constructor-facing name
    DuplicateFieldName { type_name: String, field: String },
    /// A `#[constructor(...)]` attribute carries an unrecognized directive
    UnknownDirective {
        type_name: String,
        field: String,
        directive: String,
    },
    /// A requested constructor type is not one of "all-args" / "builder"
    UnknownConstructorType { given: String },
    /// The source loader failed to read or parse a file
    SourceLoad { path: PathBuf, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeNotFound { type_name } => {
                write!(f, "type `{}` not found in the loaded package", type_name)
            }
            Error::TypeNotRecord { type_name } => {
                write!(f, "type `{}` is not a struct", type_name)
            }
            Error::DuplicateFieldName { type_name, field } => {
                write!(
                    f,
                    "duplicate constructor-facing field name `{}` on type `{}`",
                    field, type_name
                )
            }
            Error::UnknownDirective {
                type_name,
                field,
                directive,
            } => {
                write!(
                    f,
                    "unknown constructor directive `{}` on field `{}` of type `{}`",
                    directive, field, type_name
                )
            }
            Error::UnknownConstructorType { given } if given.is_empty() => {
                write!(f, "no constructor type requested")
            }
            Error::UnknownConstructorType { given } => {
                write!(
                    f,
                    "unknown constructor type `{}` (expected \"all-args\" or \"builder\")",
                    given
                )
            }
            Error::SourceLoad { path, message } => {
                write!(f, "failed to load {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for Error {}
