//! Extraction of element content from inline values and type sections.
//!
//! Scalar kinds take exactly one literal. Composite kinds (array, object)
//! become a sequence of children: inline literals are coerced into leaves
//! whose kind comes from the declared nested type, while member sections are
//! rendered recursively.

use crate::ast::{BaseTypeName, TypeSection, ValueDefinition};
use crate::element::{Content, Element, ElementKind, ScalarKind, Shape};
use crate::error::RefractError;
use crate::literal::coerce;
use crate::refract::ElementBuilder;

/// Content for `kind` from the literals of `definition`.
pub fn extract_values(
    builder: &ElementBuilder<'_>,
    definition: &ValueDefinition,
    kind: ElementKind,
) -> Result<Content, RefractError> {
    let values = &definition.values;
    if values.is_empty() {
        return Err(RefractError::EmptyValue);
    }

    match kind.shape() {
        Shape::Scalar(scalar_kind) => {
            if values.len() > 1 {
                return Err(RefractError::Cardinality {
                    count: values.len(),
                });
            }
            let scalar = coerce(scalar_kind, &values[0].literal, builder.number_coercion())?;
            Ok(Content::Scalar(scalar))
        }
        Shape::Composite => {
            let item_kind = nested_scalar_kind(definition)?;
            let items = values
                .iter()
                .map(|value| {
                    coerce(item_kind, &value.literal, builder.number_coercion())
                        .map(Element::scalar)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Content::Elements(items))
        }
    }
}

/// Content for `kind` from a member type, sample or default section.
pub fn extract_section(
    builder: &ElementBuilder<'_>,
    section: &TypeSection,
    kind: ElementKind,
) -> Result<Content, RefractError> {
    match kind.shape() {
        Shape::Scalar(scalar_kind) => {
            let scalar = coerce(scalar_kind, section.content.value(), builder.number_coercion())?;
            Ok(Content::Scalar(scalar))
        }
        Shape::Composite => {
            let elements = section.content.elements();
            if elements.is_empty() {
                return Err(RefractError::EmptyValue);
            }
            let children = elements
                .iter()
                .map(|element| builder.build(element))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Content::Elements(children))
        }
    }
}

/// Kind of the leaves of a composite value: the single declared nested type,
/// or string when zero or several are declared.
pub fn nested_scalar_kind(definition: &ValueDefinition) -> Result<ScalarKind, RefractError> {
    let nested = &definition.type_definition.type_specification.nested_types;
    let [only] = nested.as_slice() else {
        return Ok(ScalarKind::String);
    };

    match only.base {
        BaseTypeName::Boolean => Ok(ScalarKind::Boolean),
        BaseTypeName::Number => Ok(ScalarKind::Number),
        BaseTypeName::String => Ok(ScalarKind::String),
        other => Err(RefractError::TypeDispatch {
            node: "nested type",
            type_name: other,
        }),
    }
}
