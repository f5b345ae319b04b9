//! The generic refract element tree produced by the builder.

use indexmap::IndexMap;
use std::fmt::{self, Display};

/// Ordered `key -> element` mapping used for both `meta` and `attributes`.
pub type ElementMap = IndexMap<String, Element>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ElementKind {
    Boolean,
    Number,
    String,
    Array,
    Object,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ScalarKind {
    Boolean,
    Number,
    String,
}

/// Whether an element kind holds one scalar or a sequence of child elements.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Shape {
    Scalar(ScalarKind),
    Composite,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Boolean => "boolean",
            ElementKind::Number => "number",
            ElementKind::String => "string",
            ElementKind::Array => "array",
            ElementKind::Object => "object",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            ElementKind::Boolean => Shape::Scalar(ScalarKind::Boolean),
            ElementKind::Number => Shape::Scalar(ScalarKind::Number),
            ElementKind::String => Shape::Scalar(ScalarKind::String),
            ElementKind::Array | ElementKind::Object => Shape::Composite,
        }
    }
}

impl From<ScalarKind> for ElementKind {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Boolean => ElementKind::Boolean,
            ScalarKind::Number => ElementKind::Number,
            ScalarKind::String => ElementKind::String,
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Scalar {
    Boolean(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::Number(_) => ScalarKind::Number,
            Scalar::String(_) => ScalarKind::String,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Content {
    Scalar(Scalar),
    Elements(Vec<Element>),
}

/// A kind-tagged node of the generic document model.
///
/// `element_name` overrides the rendered element name ("enum", "ref",
/// "select", "option", ...) without introducing a new kind. `compact` asks the
/// encoder to render this element's content in compact form.
#[derive(Debug, PartialEq, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub element_name: Option<String>,
    pub meta: ElementMap,
    pub attributes: ElementMap,
    pub content: Option<Content>,
    pub compact: bool,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            element_name: None,
            meta: ElementMap::new(),
            attributes: ElementMap::new(),
            content: None,
            compact: false,
        }
    }

    pub fn scalar(scalar: Scalar) -> Self {
        let mut element = Element::new(scalar.kind().into());
        element.content = Some(Content::Scalar(scalar));
        element
    }

    pub fn string(value: impl Into<String>) -> Self {
        Element::scalar(Scalar::String(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Element::scalar(Scalar::Number(value))
    }

    pub fn boolean(value: bool) -> Self {
        Element::scalar(Scalar::Boolean(value))
    }

    pub fn array(children: Vec<Element>) -> Self {
        Element::new(ElementKind::Array).with_content(Content::Elements(children))
    }

    pub fn object(children: Vec<Element>) -> Self {
        Element::new(ElementKind::Object).with_content(Content::Elements(children))
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_element_name(mut self, name: impl Into<String>) -> Self {
        self.element_name = Some(name.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: Element) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    /// Rendered element name: the override if present, the kind otherwise.
    pub fn element_name(&self) -> &str {
        self.element_name.as_deref().unwrap_or(self.kind.as_str())
    }

    /// The `meta.name` string, if any.
    pub fn name(&self) -> Option<&str> {
        match self.meta.get("name")?.content.as_ref()? {
            Content::Scalar(Scalar::String(name)) => Some(name),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Some(Content::Elements(children)) => children,
            _ => &[],
        }
    }

    /// Appends a child, turning empty content into a sequence first.
    pub fn push(&mut self, child: Element) {
        match &mut self.content {
            Some(Content::Elements(children)) => children.push(child),
            _ => self.content = Some(Content::Elements(vec![child])),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match &self.content {
            Some(Content::Scalar(scalar)) => Some(scalar),
            _ => None,
        }
    }
}
