//! Refract encoding of the element tree.
//!
//! Full form is `{"element", "meta", "attributes", "content"}` with empty
//! parts left out. Meta and attribute values, and the content of elements
//! flagged `compact`, use the compact form: bare scalars, arrays of values, and
//! objects keyed by member name.

use crate::element::{Content, Element, ElementKind, ElementMap, Scalar};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::HashSet;

impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("element", self.element_name())?;
        if !self.meta.is_empty() {
            map.serialize_entry("meta", &CompactMap(&self.meta))?;
        }
        if !self.attributes.is_empty() {
            map.serialize_entry("attributes", &CompactMap(&self.attributes))?;
        }
        match &self.content {
            None => {}
            Some(Content::Scalar(scalar)) => map.serialize_entry("content", scalar)?,
            Some(Content::Elements(children)) if self.compact => {
                map.serialize_entry("content", &CompactChildren(self.kind, children))?
            }
            Some(Content::Elements(children)) => map.serialize_entry("content", children)?,
        }
        map.end()
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Boolean(value) => serializer.serialize_bool(*value),
            Scalar::Number(value) if is_integral(*value) => serializer.serialize_i64(*value as i64),
            Scalar::Number(value) => serializer.serialize_f64(*value),
            Scalar::String(value) => serializer.serialize_str(value),
        }
    }
}

/// Whole numbers within the exactly representable range are written as integers.
fn is_integral(value: f64) -> bool {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT
}

/// Compact form of a single element.
pub struct Compact<'a>(pub &'a Element);

impl Serialize for Compact<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0.content {
            None => serializer.serialize_none(),
            Some(Content::Scalar(scalar)) => scalar.serialize(serializer),
            Some(Content::Elements(children)) => {
                CompactChildren(self.0.kind, children).serialize(serializer)
            }
        }
    }
}

struct CompactMap<'a>(&'a ElementMap);

impl Serialize for CompactMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, &Compact(value))?;
        }
        map.end()
    }
}

struct CompactChildren<'a>(ElementKind, &'a [Element]);

impl Serialize for CompactChildren<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let CompactChildren(kind, children) = *self;
        let keyed = kind == ElementKind::Object && has_unique_names(children);

        if keyed {
            let mut map = serializer.serialize_map(Some(children.len()))?;
            for child in children {
                map.serialize_entry(child.name().unwrap_or_default(), &Compact(child))?;
            }
            map.end()
        } else {
            let mut seq = serializer.serialize_seq(Some(children.len()))?;
            for child in children {
                seq.serialize_element(&Compact(child))?;
            }
            seq.end()
        }
    }
}

/// Every child is named and no two share a name.
fn has_unique_names(children: &[Element]) -> bool {
    let mut seen = HashSet::with_capacity(children.len());
    children
        .iter()
        .all(|child| child.name().is_some_and(|name| seen.insert(name)))
}

/// Encodes an element tree into an order-preserving JSON value.
pub fn to_value(element: &Element) -> serde_json::Value {
    // Element keys are strings and numbers are finite or null, so this cannot fail.
    serde_json::to_value(element).unwrap_or(serde_json::Value::Null)
}
