//! The parsed MSON schema AST consumed by the element builder.
//!
//! These types mirror what an MSON parser hands over after a successful parse.
//! They deserialize from the structured-AST JSON shape (camelCase keys, schema
//! nodes tagged by `class`), so fixtures and external parsers can feed the
//! renderer without a Rust-side parser.

use serde::Deserialize;
use std::fmt::{self, Display};
use std::ops::{BitOr, BitOrAssign};

/// A raw literal as written in the schema, e.g. `42` in `- count: 42 (number)`.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Value {
    pub literal: String,
    /// `true` when the literal is a template variable (`*42*`).
    pub variable: bool,
}

impl Value {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            variable: false,
        }
    }
}

/// A reference to a named type.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Symbol {
    pub literal: String,
    pub variable: bool,
}

impl Symbol {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            variable: false,
        }
    }
}

/// The built-in MSON base types.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTypeName {
    Boolean,
    String,
    Number,
    Array,
    Enum,
    Object,
    #[default]
    Undefined,
}

impl Display for BaseTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BaseTypeName::Boolean => "boolean",
            BaseTypeName::String => "string",
            BaseTypeName::Number => "number",
            BaseTypeName::Array => "array",
            BaseTypeName::Enum => "enum",
            BaseTypeName::Object => "object",
            BaseTypeName::Undefined => "undefined",
        };
        write!(f, "{name}")
    }
}

/// Either a base type or a symbol naming another type. Both are empty when
/// the schema left the type out.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(from = "Option<RawTypeName>")]
pub struct TypeName {
    pub base: BaseTypeName,
    pub symbol: Symbol,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeName {
    Base(BaseTypeName),
    Symbol(Symbol),
}

impl From<Option<RawTypeName>> for TypeName {
    fn from(raw: Option<RawTypeName>) -> Self {
        match raw {
            Some(RawTypeName::Base(base)) => TypeName::base(base),
            Some(RawTypeName::Symbol(symbol)) => TypeName::symbol(symbol.literal),
            None => TypeName::default(),
        }
    }
}

impl TypeName {
    pub fn base(base: BaseTypeName) -> Self {
        Self {
            base,
            symbol: Symbol::default(),
        }
    }

    pub fn symbol(literal: impl Into<String>) -> Self {
        Self {
            base: BaseTypeName::Undefined,
            symbol: Symbol::new(literal),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base == BaseTypeName::Undefined && self.symbol.literal.is_empty()
    }
}

/// A single type attribute flag.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeAttribute {
    Required,
    Optional,
    Default,
    Sample,
    Fixed,
}

impl TypeAttribute {
    /// Every attribute in the order tags are emitted.
    pub const ALL: [TypeAttribute; 5] = [
        TypeAttribute::Required,
        TypeAttribute::Optional,
        TypeAttribute::Default,
        TypeAttribute::Sample,
        TypeAttribute::Fixed,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            TypeAttribute::Required => "required",
            TypeAttribute::Optional => "optional",
            TypeAttribute::Default => "default",
            TypeAttribute::Sample => "sample",
            TypeAttribute::Fixed => "fixed",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            TypeAttribute::Required => 1 << 0,
            TypeAttribute::Optional => 1 << 1,
            TypeAttribute::Default => 1 << 2,
            TypeAttribute::Sample => 1 << 3,
            TypeAttribute::Fixed => 1 << 4,
        }
    }
}

/// Set of [`TypeAttribute`] flags. Flags are independent bits.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Deserialize)]
#[serde(from = "Vec<TypeAttribute>")]
pub struct TypeAttributes(u8);

impl TypeAttributes {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, attribute: TypeAttribute) -> bool {
        self.0 & attribute.bit() != 0
    }

    pub fn insert(&mut self, attribute: TypeAttribute) {
        self.0 |= attribute.bit();
    }

    /// Tags of every set flag, in the fixed emission order.
    pub fn tags(self) -> impl Iterator<Item = &'static str> {
        TypeAttribute::ALL
            .into_iter()
            .filter(move |attribute| self.contains(*attribute))
            .map(TypeAttribute::tag)
    }
}

impl From<TypeAttribute> for TypeAttributes {
    fn from(attribute: TypeAttribute) -> Self {
        Self(attribute.bit())
    }
}

impl From<Vec<TypeAttribute>> for TypeAttributes {
    fn from(attributes: Vec<TypeAttribute>) -> Self {
        attributes.into_iter().collect()
    }
}

impl FromIterator<TypeAttribute> for TypeAttributes {
    fn from_iter<I: IntoIterator<Item = TypeAttribute>>(iter: I) -> Self {
        let mut set = TypeAttributes::empty();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

impl BitOr for TypeAttribute {
    type Output = TypeAttributes;

    fn bitor(self, rhs: Self) -> TypeAttributes {
        TypeAttributes(self.bit() | rhs.bit())
    }
}

impl BitOr<TypeAttribute> for TypeAttributes {
    type Output = TypeAttributes;

    fn bitor(self, rhs: TypeAttribute) -> TypeAttributes {
        TypeAttributes(self.0 | rhs.bit())
    }
}

impl BitOrAssign<TypeAttribute> for TypeAttributes {
    fn bitor_assign(&mut self, rhs: TypeAttribute) {
        self.insert(rhs);
    }
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeSpecification {
    pub name: TypeName,
    pub nested_types: Vec<TypeName>,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeDefinition {
    pub type_specification: TypeSpecification,
    pub attributes: TypeAttributes,
}

impl TypeDefinition {
    pub fn of(base: BaseTypeName) -> Self {
        Self {
            type_specification: TypeSpecification {
                name: TypeName::base(base),
                nested_types: Vec::new(),
            },
            attributes: TypeAttributes::empty(),
        }
    }

    pub fn base(&self) -> BaseTypeName {
        self.type_specification.name.base
    }
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueDefinition {
    pub values: Vec<Value>,
    pub type_definition: TypeDefinition,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionClass {
    BlockDescription,
    MemberType,
    Sample,
    Default,
}

impl Display for SectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionClass::BlockDescription => "blockDescription",
            SectionClass::MemberType => "memberType",
            SectionClass::Sample => "sample",
            SectionClass::Default => "default",
        };
        write!(f, "{name}")
    }
}

/// What a type section carries: prose, a scalar literal, or nested nodes.
#[derive(Debug, PartialEq, Clone)]
pub enum SectionContent {
    Description(String),
    Value(String),
    Elements(Vec<Element>),
}

impl SectionContent {
    /// The scalar literal, or `""` when the section holds something else.
    pub fn value(&self) -> &str {
        match self {
            SectionContent::Value(value) => value,
            _ => "",
        }
    }

    pub fn elements(&self) -> &[Element] {
        match self {
            SectionContent::Elements(elements) => elements,
            _ => &[],
        }
    }
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(from = "RawTypeSection")]
pub struct TypeSection {
    pub class: SectionClass,
    pub content: SectionContent,
}

#[derive(Deserialize)]
struct RawTypeSection {
    class: SectionClass,
    #[serde(default)]
    content: Option<RawSectionContent>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSectionContent {
    Text(String),
    Elements(Vec<Element>),
}

impl From<RawTypeSection> for TypeSection {
    fn from(raw: RawTypeSection) -> Self {
        let content = match (raw.class, raw.content) {
            (_, Some(RawSectionContent::Elements(elements))) => SectionContent::Elements(elements),
            (SectionClass::BlockDescription, Some(RawSectionContent::Text(text))) => {
                SectionContent::Description(text)
            }
            (_, Some(RawSectionContent::Text(text))) => SectionContent::Value(text),
            (SectionClass::BlockDescription, None) => SectionContent::Description(String::new()),
            (_, None) => SectionContent::Elements(Vec::new()),
        };
        TypeSection {
            class: raw.class,
            content,
        }
    }
}

impl TypeSection {
    pub fn description(text: impl Into<String>) -> Self {
        Self {
            class: SectionClass::BlockDescription,
            content: SectionContent::Description(text.into()),
        }
    }

    pub fn member_type(elements: Vec<Element>) -> Self {
        Self {
            class: SectionClass::MemberType,
            content: SectionContent::Elements(elements),
        }
    }

    pub fn sample(content: SectionContent) -> Self {
        Self {
            class: SectionClass::Sample,
            content,
        }
    }

    pub fn default_value(content: SectionContent) -> Self {
        Self {
            class: SectionClass::Default,
            content,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(from = "RawPropertyName")]
pub enum PropertyName {
    Literal(String),
    Variable(ValueDefinition),
}

#[derive(Deserialize)]
struct RawPropertyName {
    #[serde(default)]
    literal: Option<String>,
    #[serde(default)]
    variable: Option<ValueDefinition>,
}

impl From<RawPropertyName> for PropertyName {
    fn from(raw: RawPropertyName) -> Self {
        match (raw.literal, raw.variable) {
            (Some(literal), _) if !literal.is_empty() => PropertyName::Literal(literal),
            (_, Some(variable)) => PropertyName::Variable(variable),
            (literal, None) => PropertyName::Literal(literal.unwrap_or_default()),
        }
    }
}

impl Default for PropertyName {
    fn default() -> Self {
        PropertyName::Literal(String::new())
    }
}

impl PropertyName {
    /// Text used as the element's `name`: the literal, or the first literal of
    /// a variable name's values.
    pub fn text(&self) -> &str {
        match self {
            PropertyName::Literal(literal) => literal,
            PropertyName::Variable(definition) => definition
                .values
                .first()
                .map(|value| value.literal.as_str())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueMember {
    pub description: String,
    pub value_definition: ValueDefinition,
    pub sections: Vec<TypeSection>,
}

impl ValueMember {
    pub fn has_member_type(&self) -> bool {
        self.sections
            .iter()
            .any(|section| section.class == SectionClass::MemberType)
    }
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyMember {
    pub name: PropertyName,
    pub description: String,
    pub value_definition: ValueDefinition,
    pub sections: Vec<TypeSection>,
}

impl PropertyMember {
    /// The property viewed as a plain value member, i.e. without its name.
    pub fn as_value(&self) -> ValueMember {
        ValueMember {
            description: self.description.clone(),
            value_definition: self.value_definition.clone(),
            sections: self.sections.clone(),
        }
    }
}

/// One MSON schema node.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(tag = "class", content = "content", rename_all = "camelCase")]
pub enum Element {
    Property(PropertyMember),
    Value(ValueMember),
    /// Includes the members of the referenced type.
    Mixin(TypeDefinition),
    OneOf(Vec<Element>),
    Group(Vec<Element>),
}

impl Element {
    pub fn class_name(&self) -> &'static str {
        match self {
            Element::Property(_) => "property",
            Element::Value(_) => "value",
            Element::Mixin(_) => "mixin",
            Element::OneOf(_) => "oneOf",
            Element::Group(_) => "group",
        }
    }
}

/// A named top-level data structure, e.g. `# User (object)`.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataStructure {
    pub name: TypeName,
    pub type_definition: TypeDefinition,
    pub sections: Vec<TypeSection>,
}
