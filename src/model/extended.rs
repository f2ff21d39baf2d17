//! Untyped and schema-typed custom data: ExtendedData, Schema

use crate::model::ObjectBase;
use crate::xml::{get, push_attr, push_str, RawXmlElement, RawXmlNode};

/// Custom data attached to a feature (`<ExtendedData>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtendedData {
    pub data: Vec<Data>,
    pub schema_data: Vec<SchemaData>,
    /// Arbitrary foreign-namespace content, preserved opaquely
    pub other: Vec<RawXmlNode>,
}

/// A named untyped value (`<Data name="...">`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Data {
    pub object: ObjectBase,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub value: Option<String>,
}

/// Values typed against a `<Schema>` (`<SchemaData schemaUrl="...">`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaData {
    pub object: ObjectBase,
    pub schema_url: Option<String>,
    pub simple_data: Vec<SimpleData>,
}

/// One field value inside SchemaData (`<SimpleData name="...">`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimpleData {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// Custom field declarations on a Document (`<Schema>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    pub id: Option<String>,
    pub name: Option<String>,
    pub fields: Vec<SimpleField>,
}

/// One field declaration (`<SimpleField type="..." name="...">`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimpleField {
    pub field_type: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
}

impl ExtendedData {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        let other = el
            .children
            .iter()
            .filter(|n| match n {
                RawXmlNode::Element(c) => c.name != "Data" && c.name != "SchemaData",
                _ => false,
            })
            .cloned()
            .collect();
        Some(Self {
            data: el.children_named("Data").filter_map(Data::from_element).collect(),
            schema_data: el
                .children_named("SchemaData")
                .filter_map(SchemaData::from_element)
                .collect(),
            other,
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("ExtendedData");
        for d in &self.data {
            el.push_child(d.to_element());
        }
        for s in &self.schema_data {
            el.push_child(s.to_element());
        }
        el.children.extend(self.other.iter().cloned());
        el
    }
}

impl Data {
    const FIELDS: &'static [&'static str] = &["displayName", "value"];

    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            name: get(el, "@name"),
            display_name: get(el, "displayName"),
            value: get(el, "value"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Data");
        self.object.write_attrs(&mut el);
        push_attr(&mut el, "name", &self.name);
        push_str(&mut el, "displayName", &self.display_name);
        push_str(&mut el, "value", &self.value);
        self.object.write_other(&mut el);
        el
    }
}

impl SchemaData {
    const FIELDS: &'static [&'static str] = &["SimpleData"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            schema_url: get(el, "@schemaUrl"),
            simple_data: el
                .children_named("SimpleData")
                .filter_map(SimpleData::from_element)
                .collect(),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("SchemaData");
        self.object.write_attrs(&mut el);
        push_attr(&mut el, "schemaUrl", &self.schema_url);
        for d in &self.simple_data {
            el.push_child(d.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl SimpleData {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        let text = el.text();
        let trimmed = text.trim();
        Some(Self {
            name: get(el, "@name"),
            value: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("SimpleData");
        push_attr(&mut el, "name", &self.name);
        if let Some(v) = &self.value {
            el = el.with_text(v.clone());
        }
        el
    }
}

impl Schema {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            id: get(el, "@id"),
            name: get(el, "@name"),
            fields: el
                .children_named("SimpleField")
                .filter_map(SimpleField::from_element)
                .collect(),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Schema");
        push_attr(&mut el, "name", &self.name);
        push_attr(&mut el, "id", &self.id);
        for f in &self.fields {
            el.push_child(f.to_element());
        }
        el
    }
}

impl SimpleField {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            field_type: get(el, "@type"),
            name: get(el, "@name"),
            display_name: get(el, "displayName"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("SimpleField");
        push_attr(&mut el, "type", &self.field_type);
        push_attr(&mut el, "name", &self.name);
        push_str(&mut el, "displayName", &self.display_name);
        el
    }
}
