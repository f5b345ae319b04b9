use crate::ast::DataStructure;
use crate::config::Config;
use crate::element::Element;
use crate::error::{LoadError, MsonError, RefractError};
use crate::refract::data_structure_to_element;
use crate::serialization::to_value;
use serde::{Serialize, Serializer};
use std::path::Path;

/// Serialized form of an input schema AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(SourceFormat::Json),
            "yaml" | "yml" => Some(SourceFormat::Yaml),
            _ => None,
        }
    }
}

/// A data structure together with its rendered element tree.
pub struct RenderResult {
    pub data_structure: DataStructure,
    pub element: Element,
}

impl Serialize for RenderResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.element.serialize(serializer)
    }
}

impl RenderResult {
    /// Encodes the element tree into a generic JSON value.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        to_value(&self.element)
    }

    /// Encodes the element tree into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Encodes the element tree into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }
}

/// Renders a data structure with the default options.
///
/// # Errors
/// Returns a `RefractError` if any node of the data structure cannot be rendered.
pub fn render(data_structure: &DataStructure) -> Result<Element, RefractError> {
    render_with(data_structure, &Config::default())
}

/// Renders a data structure with explicit options.
///
/// # Errors
/// Returns a `RefractError` if any node of the data structure cannot be rendered.
pub fn render_with(data_structure: &DataStructure, config: &Config) -> Result<Element, RefractError> {
    data_structure_to_element(data_structure, config)
}

/// Reads a serialized data structure AST.
///
/// # Errors
/// Returns a `LoadError` if the source is not a valid data structure.
pub fn load(source: &str, format: SourceFormat) -> Result<DataStructure, LoadError> {
    let data_structure = match format {
        SourceFormat::Json => serde_json::from_str(source)?,
        SourceFormat::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(data_structure)
}

/// Loads a serialized data structure AST and renders it.
///
/// This is the primary entry point for processing serialized ASTs. The
/// returned `RenderResult` keeps the input and offers JSON/YAML encodings of
/// the element tree.
///
/// # Errors
/// Returns a `MsonError` if loading or rendering fails.
pub fn analyze(source: &str, format: SourceFormat) -> Result<RenderResult, MsonError> {
    analyze_with(source, format, &Config::default())
}

/// [`analyze`] with explicit options.
///
/// # Errors
/// Returns a `MsonError` if loading or rendering fails.
pub fn analyze_with(
    source: &str,
    format: SourceFormat,
    config: &Config,
) -> Result<RenderResult, MsonError> {
    let data_structure = load(source, format)?;
    let element = render_with(&data_structure, config)?;
    Ok(RenderResult {
        data_structure,
        element,
    })
}

/// Reads and renders a `.json`, `.yaml` or `.yml` AST file.
///
/// # Errors
/// Returns a `MsonError` if the file cannot be read, has an unknown extension,
/// or fails to load or render.
pub fn analyze_file(path: impl AsRef<Path>, config: &Config) -> Result<RenderResult, MsonError> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path).ok_or_else(|| LoadError::UnknownFormat {
        path: path.to_path_buf(),
    })?;
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded {} as {format:?}", path.display());
    analyze_with(&source, format, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str = r#"{
        "element": "dataStructure",
        "name": { "literal": "User", "variable": false },
        "typeDefinition": {
            "typeSpecification": { "name": "object", "nestedTypes": [] },
            "attributes": []
        },
        "sections": [
            {
                "class": "memberType",
                "content": [
                    {
                        "class": "property",
                        "content": {
                            "name": { "literal": "name" },
                            "description": "",
                            "valueDefinition": {
                                "values": [{ "literal": "alice", "variable": false }],
                                "typeDefinition": {
                                    "typeSpecification": { "name": "string", "nestedTypes": [] },
                                    "attributes": ["required"]
                                }
                            },
                            "sections": []
                        }
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_simple_render_to_json() {
        let expected_json = serde_json::json!({
            "element": "object",
            "meta": { "id": "User", "title": "User" },
            "content": [
                {
                    "element": "string",
                    "meta": { "name": "name" },
                    "attributes": { "typeAttributes": ["required"] },
                    "content": "alice"
                }
            ]
        });

        let render_result = analyze(USER_JSON, SourceFormat::Json).unwrap();
        let result = render_result.to_json().unwrap();
        let result_json: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(result_json, expected_json);
        assert_eq!(render_result.to_value(), expected_json);
    }

    #[test]
    fn test_simple_render_to_yaml() {
        let source = "name: { literal: Empty }\n";

        let expected_yaml = "element: object\nmeta:\n  id: Empty\n  title: Empty\n";

        let render_result = analyze(source, SourceFormat::Yaml).unwrap();
        let result = render_result.to_yaml().unwrap();

        assert_eq!(result, expected_yaml);
    }

    #[test]
    fn test_empty_property_name_renders() {
        let source = r#"{
            "name": { "literal": "Blank" },
            "sections": [{
                "class": "memberType",
                "content": [{
                    "class": "property",
                    "content": {
                        "name": {},
                        "valueDefinition": {
                            "values": [{ "literal": "x" }],
                            "typeDefinition": { "typeSpecification": { "name": "string" } }
                        }
                    }
                }]
            }]
        }"#;

        let render_result = analyze(source, SourceFormat::Json).unwrap();
        assert_eq!(
            render_result.to_value()["content"][0],
            serde_json::json!({ "element": "string", "meta": { "name": "" }, "content": "x" })
        );
    }

    #[test]
    fn test_source_format_from_path() {
        assert_eq!(SourceFormat::from_path(Path::new("a.json")), Some(SourceFormat::Json));
        assert_eq!(SourceFormat::from_path(Path::new("a.yml")), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path(Path::new("a.yaml")), Some(SourceFormat::Yaml));
        assert_eq!(SourceFormat::from_path(Path::new("a.apib")), None);
        assert_eq!(SourceFormat::from_path(Path::new("noext")), None);
    }
}
