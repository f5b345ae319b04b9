//! Rendering of MSON schema nodes into refract elements.

use crate::ast::{
    BaseTypeName, DataStructure, Element as MsonElement, PropertyMember, SectionClass,
    SectionContent, TypeDefinition, ValueMember,
};
use crate::attributes::type_attributes_element;
use crate::config::{Config, NumberCoercion};
use crate::element::{Element, ElementKind};
use crate::error::RefractError;
use crate::sections::merge_sections;
use crate::values::extract_values;

/// How a member's declared type is rendered.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MemberKind {
    Plain(ElementKind),
    /// Rendered as an array tagged `enum`, wrapped in an object.
    Enum,
}

/// Recursive, single-pass builder. Holds no state besides the options, so a
/// failing call leaves nothing behind.
#[derive(Debug, Clone, Copy)]
pub struct ElementBuilder<'c> {
    config: &'c Config,
}

impl<'c> ElementBuilder<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    pub fn number_coercion(&self) -> NumberCoercion {
        self.config.number_coercion
    }

    pub fn build(&self, element: &MsonElement) -> Result<Element, RefractError> {
        log::trace!("rendering {} element", element.class_name());
        match element {
            MsonElement::Property(property) => self.property(property),
            MsonElement::Value(value) => self.value(value),
            MsonElement::Mixin(definition) => Ok(mixin(definition)),
            MsonElement::OneOf(alternatives) => self.one_of(alternatives),
            MsonElement::Group(_) => Err(RefractError::UnsupportedElement {
                class: element.class_name(),
            }),
        }
    }

    fn property(&self, property: &PropertyMember) -> Result<Element, RefractError> {
        let member = property.as_value();
        self.member(&member, member_kind(&member), Some(property.name.text()))
    }

    fn value(&self, value: &ValueMember) -> Result<Element, RefractError> {
        self.member(value, member_kind(value), None)
    }

    fn member(
        &self,
        member: &ValueMember,
        kind: MemberKind,
        name: Option<&str>,
    ) -> Result<Element, RefractError> {
        match kind {
            MemberKind::Plain(kind) => self.typed_member(member, kind, name),
            MemberKind::Enum => {
                let array = self
                    .typed_member(member, ElementKind::Array, name)?
                    .with_element_name("enum");
                Ok(Element::object(vec![array]))
            }
        }
    }

    fn typed_member(
        &self,
        member: &ValueMember,
        kind: ElementKind,
        name: Option<&str>,
    ) -> Result<Element, RefractError> {
        let definition = &member.value_definition;
        let mut element = Element::new(kind);

        if let Some(name) = name {
            element.meta.insert("name".to_string(), Element::string(name));
        }

        if !definition.values.is_empty() {
            element.content = Some(extract_values(self, definition, kind)?);
        }

        if let Some(attributes) = type_attributes_element(definition.type_definition.attributes) {
            element
                .attributes
                .insert("typeAttributes".to_string(), attributes);
        }

        if !member.description.is_empty() {
            element
                .meta
                .insert("description".to_string(), Element::string(&member.description));
        }

        merge_sections(self, &mut element, &member.sections)?;
        Ok(element)
    }

    fn one_of(&self, alternatives: &[MsonElement]) -> Result<Element, RefractError> {
        let options = alternatives
            .iter()
            .map(|alternative| {
                let built = self.build(alternative)?;
                Ok(Element::object(vec![built]).with_element_name("option"))
            })
            .collect::<Result<Vec<_>, RefractError>>()?;
        Ok(Element::array(options).with_element_name("select"))
    }

    /// Renders a named data structure into its root object.
    pub fn data_structure(&self, data_structure: &DataStructure) -> Result<Element, RefractError> {
        let id = &data_structure.name.symbol.literal;
        log::debug!("rendering data structure '{id}'");

        let mut root = Element::new(ElementKind::Object);
        let inherited = &data_structure
            .type_definition
            .type_specification
            .name
            .symbol
            .literal;
        if !inherited.is_empty() {
            root.element_name = Some(inherited.clone());
        }

        root.meta.insert("id".to_string(), Element::string(id));
        root.meta.insert("title".to_string(), Element::string(id));

        for section in &data_structure.sections {
            if section.class == SectionClass::BlockDescription {
                let description = match &section.content {
                    SectionContent::Description(text) => text.as_str(),
                    other => other.value(),
                };
                root.meta
                    .insert("description".to_string(), Element::string(description));
                continue;
            }

            for element in section.content.elements() {
                root.push(self.build(element)?);
            }
        }

        Ok(root)
    }
}

/// Kind a value or property member renders as, from its declared base type.
pub fn member_kind(member: &ValueMember) -> MemberKind {
    let base = member.value_definition.type_definition.base();
    let kind = match base {
        BaseTypeName::Boolean => MemberKind::Plain(ElementKind::Boolean),
        BaseTypeName::Number => MemberKind::Plain(ElementKind::Number),
        BaseTypeName::String => MemberKind::Plain(ElementKind::String),
        BaseTypeName::Array => MemberKind::Plain(ElementKind::Array),
        BaseTypeName::Object => MemberKind::Plain(ElementKind::Object),
        BaseTypeName::Enum => MemberKind::Enum,
        BaseTypeName::Undefined => MemberKind::Plain(undefined_kind(member)),
    };
    log::trace!("member of type '{base}' renders as {kind:?}");
    kind
}

/// Untyped members with several values or a member type section are objects,
/// everything else is a string.
pub fn undefined_kind(member: &ValueMember) -> ElementKind {
    if member.value_definition.values.len() > 1 || member.has_member_type() {
        ElementKind::Object
    } else {
        ElementKind::String
    }
}

fn mixin(definition: &TypeDefinition) -> Element {
    let href = &definition.type_specification.name.symbol.literal;

    let mut reference = Element::object(vec![
        Element::string("content").with_meta("name", Element::string("path")),
        Element::string(href).with_meta("name", Element::string("href")),
    ])
    .with_element_name("ref");
    reference.compact = true;
    reference
}

/// Renders a single schema node.
pub fn mson_element_to_element(
    element: &MsonElement,
    config: &Config,
) -> Result<Element, RefractError> {
    ElementBuilder::new(config).build(element)
}

/// Renders a named data structure into its root object.
pub fn data_structure_to_element(
    data_structure: &DataStructure,
    config: &Config,
) -> Result<Element, RefractError> {
    ElementBuilder::new(config).data_structure(data_structure)
}
