use crate::ast::{BaseTypeName, SectionClass};
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum MsonError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Refract(#[from] RefractError),
}

/// Failures while reading a serialized schema AST.
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Could not read {}", path.display())]
    #[diagnostic(code(load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON schema AST")]
    #[diagnostic(
        code(load::json),
        help("The input must be a data structure in the structured AST JSON shape.")
    )]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML schema AST")]
    #[diagnostic(
        code(load::yaml),
        help("The input must be a data structure in the structured AST shape.")
    )]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown schema AST format for {}", path.display())]
    #[diagnostic(
        code(load::unknown_format),
        help("Use a `.json`, `.yaml` or `.yml` extension.")
    )]
    UnknownFormat { path: PathBuf },
}

/// Failures while rendering a schema AST into refract elements. All of them
/// abort the whole render.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum RefractError {
    #[error("Cannot extract values from empty container")]
    #[diagnostic(
        code(refract::empty_value),
        help("A value or member type section was expected to carry at least one value.")
    )]
    EmptyValue,

    #[error("Primitive types support exactly one value, found {count}")]
    #[diagnostic(
        code(refract::cardinality),
        help("Use an array or enum type to list several values.")
    )]
    Cardinality { count: usize },

    #[error("Element content was already set, cannot also set it from 'memberType'")]
    #[diagnostic(
        code(refract::content_conflict),
        help("Give either inline values or a member type section, not both.")
    )]
    ContentConflict,

    #[error("Unexpected '{class}' section for {node}")]
    #[diagnostic(code(refract::unexpected_section))]
    UnexpectedSection { class: SectionClass, node: &'static str },

    #[error("Unhandled type '{type_name}' for {node}")]
    #[diagnostic(code(refract::type_dispatch))]
    TypeDispatch {
        node: &'static str,
        type_name: BaseTypeName,
    },

    #[error("Unsupported element '{class}'")]
    #[diagnostic(
        code(refract::unsupported_element),
        help("Groups cannot be rendered into refract elements yet.")
    )]
    UnsupportedElement { class: &'static str },

    #[error("Cannot coerce '{literal}' into a number")]
    #[diagnostic(
        code(refract::coercion),
        help("Strict number coercion is enabled; use a decimal literal or lenient coercion.")
    )]
    Coercion { literal: String },
}
