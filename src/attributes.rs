use crate::ast::TypeAttributes;
use crate::element::Element;

/// Maps a flag set to the `typeAttributes` value: an array of tag strings in
/// fixed order. `None` means the attribute is omitted.
pub fn type_attributes_element(attributes: TypeAttributes) -> Option<Element> {
    let tags: Vec<Element> = attributes.tags().map(Element::string).collect();
    if tags.is_empty() {
        return None;
    }
    Some(Element::array(tags))
}
