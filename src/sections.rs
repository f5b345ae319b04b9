//! Folding of member type, sample and default sections into an element.

use crate::ast::{SectionClass, TypeSection};
use crate::element::{Element, ElementKind};
use crate::error::RefractError;
use crate::refract::ElementBuilder;
use crate::values::extract_section;

/// Merges `sections` into `element`.
///
/// A member type section becomes the element's content and conflicts with
/// content already set from inline values. Samples and defaults are rendered
/// as elements of the same kind and attached under `sample` / `default`.
pub fn merge_sections(
    builder: &ElementBuilder<'_>,
    element: &mut Element,
    sections: &[TypeSection],
) -> Result<(), RefractError> {
    let mut samples = Vec::new();
    let mut defaults = Vec::new();

    for section in sections {
        match section.class {
            SectionClass::MemberType => {
                if !element.is_empty() {
                    return Err(RefractError::ContentConflict);
                }
                element.content = Some(extract_section(builder, section, element.kind)?);
            }
            SectionClass::Sample => samples.push(section_element(builder, section, element.kind)?),
            SectionClass::Default => defaults.push(section_element(builder, section, element.kind)?),
            SectionClass::BlockDescription => {
                return Err(RefractError::UnexpectedSection {
                    class: section.class,
                    node: "member",
                });
            }
        }
    }

    if let Some(sample) = collapse(samples) {
        element.attributes.insert("sample".to_string(), sample);
    }
    if let Some(default) = collapse(defaults) {
        element.attributes.insert("default".to_string(), default);
    }
    Ok(())
}

fn section_element(
    builder: &ElementBuilder<'_>,
    section: &TypeSection,
    kind: ElementKind,
) -> Result<Element, RefractError> {
    Ok(Element::new(kind).with_content(extract_section(builder, section, kind)?))
}

/// Nothing for no elements, the element itself for one, an array otherwise.
pub fn collapse(mut elements: Vec<Element>) -> Option<Element> {
    match elements.len() {
        0 => None,
        1 => elements.pop(),
        _ => Some(Element::array(elements)),
    }
}
