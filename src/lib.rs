pub mod api;
pub mod ast;
pub mod attributes;
pub mod config;
pub mod element;
pub mod error;
pub mod literal;
pub mod refract;
pub mod sections;
pub mod serialization;
pub mod values;

pub use api::{analyze, analyze_file, analyze_with, load, render, render_with, RenderResult, SourceFormat};
pub use config::{Config, NumberCoercion};
pub use element::{Content, Element, ElementKind, Scalar};
pub use error::{LoadError, MsonError, RefractError};
