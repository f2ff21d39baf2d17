//! Style selectors and per-aspect sub-styles

use crate::model::{
    ColorMode, DisplayMode, Icon, ItemIconState, ListItemType, ObjectBase, StyleState, Units,
};
use crate::xml::{
    get, get_bool, get_f64, get_i32, get_mode, push_bool, push_f64, push_i32, push_mode, push_str,
    text_element, ModeLiteral, RawXmlElement,
};

/// Screen/image anchor point; all four values are attributes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub x_units: Option<Units>,
    pub y_units: Option<Units>,
}

impl Vec2 {
    pub fn new(x: f64, y: f64, x_units: Units, y_units: Units) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            x_units: Some(x_units),
            y_units: Some(y_units),
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            x: get_f64(el, "@x"),
            y: get_f64(el, "@y"),
            x_units: get_mode(el, "@xunits"),
            y_units: get_mode(el, "@yunits"),
        })
    }

    /// Vec2 appears under several tag names (hotSpot, overlayXY, screenXY,
    /// rotationXY, size)
    pub fn to_element_as(&self, name: &str) -> RawXmlElement {
        let mut el = RawXmlElement::new(name);
        if let Some(x) = self.x {
            el = el.with_attr("x", x.to_string());
        }
        if let Some(y) = self.y {
            el = el.with_attr("y", y.to_string());
        }
        if let Some(u) = self.x_units {
            el = el.with_attr("xunits", u.literal());
        }
        if let Some(u) = self.y_units {
            el = el.with_attr("yunits", u.literal());
        }
        el
    }
}

/// Point icon styling (`<IconStyle>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconStyle {
    pub object: ObjectBase,
    pub color: Option<String>,
    pub color_mode: Option<ColorMode>,
    pub scale: Option<f64>,
    pub heading: Option<f64>,
    pub icon: Option<Icon>,
    pub hot_spot: Option<Vec2>,
}

/// Label styling (`<LabelStyle>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelStyle {
    pub object: ObjectBase,
    pub color: Option<String>,
    pub color_mode: Option<ColorMode>,
    pub scale: Option<f64>,
}

/// Line styling (`<LineStyle>`), including the gx extensions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStyle {
    pub object: ObjectBase,
    pub color: Option<String>,
    pub color_mode: Option<ColorMode>,
    pub width: Option<f64>,
    pub gx_outer_color: Option<String>,
    pub gx_outer_width: Option<f64>,
    pub gx_physical_width: Option<f64>,
    pub gx_label_visibility: Option<bool>,
}

/// Polygon styling (`<PolyStyle>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolyStyle {
    pub object: ObjectBase,
    pub color: Option<String>,
    pub color_mode: Option<ColorMode>,
    pub fill: Option<bool>,
    pub outline: Option<bool>,
}

/// Description balloon styling (`<BalloonStyle>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BalloonStyle {
    pub object: ObjectBase,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub text: Option<String>,
    pub display_mode: Option<DisplayMode>,
}

/// List view styling (`<ListStyle>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListStyle {
    pub object: ObjectBase,
    pub list_item_type: Option<ListItemType>,
    pub bg_color: Option<String>,
    pub item_icons: Vec<ItemIcon>,
    pub max_snippet_lines: Option<i32>,
}

/// Per-state list icon (`<ItemIcon>`); state is a whitespace-separated
/// list of ItemIconState literals
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemIcon {
    pub object: ObjectBase,
    pub states: Vec<ItemIconState>,
    pub href: Option<String>,
}

/// A bundle of per-aspect sub-styles (`<Style>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub object: ObjectBase,
    pub icon_style: Option<IconStyle>,
    pub label_style: Option<LabelStyle>,
    pub line_style: Option<LineStyle>,
    pub poly_style: Option<PolyStyle>,
    pub balloon_style: Option<BalloonStyle>,
    pub list_style: Option<ListStyle>,
}

/// Keyed indirection over styles (`<StyleMap>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    pub object: ObjectBase,
    pub pairs: Vec<Pair>,
}

/// One StyleMap entry: a state key mapped to a styleUrl or an inline
/// selector (which may itself be another StyleMap)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pair {
    pub object: ObjectBase,
    pub key: Option<StyleState>,
    pub style_url: Option<String>,
    pub selector: Option<Box<StyleSelector>>,
}

/// The StyleSelector substitution group
#[derive(Clone, Debug, PartialEq)]
pub enum StyleSelector {
    Style(Style),
    StyleMap(StyleMap),
}

impl IconStyle {
    const FIELDS: &'static [&'static str] =
        &["color", "colorMode", "scale", "heading", "Icon", "hotSpot"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            color: get(el, "color"),
            color_mode: get_mode(el, "colorMode"),
            scale: get_f64(el, "scale"),
            heading: get_f64(el, "heading"),
            icon: el.child("Icon").and_then(Icon::from_element),
            hot_spot: el.child("hotSpot").and_then(Vec2::from_element),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("IconStyle");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "color", &self.color);
        push_mode(&mut el, "colorMode", self.color_mode);
        push_f64(&mut el, "scale", self.scale);
        push_f64(&mut el, "heading", self.heading);
        if let Some(icon) = &self.icon {
            el.push_child(icon.to_element());
        }
        if let Some(spot) = &self.hot_spot {
            el.push_child(spot.to_element_as("hotSpot"));
        }
        self.object.write_other(&mut el);
        el
    }
}

impl LabelStyle {
    const FIELDS: &'static [&'static str] = &["color", "colorMode", "scale"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            color: get(el, "color"),
            color_mode: get_mode(el, "colorMode"),
            scale: get_f64(el, "scale"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("LabelStyle");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "color", &self.color);
        push_mode(&mut el, "colorMode", self.color_mode);
        push_f64(&mut el, "scale", self.scale);
        self.object.write_other(&mut el);
        el
    }
}

impl LineStyle {
    const FIELDS: &'static [&'static str] = &[
        "color",
        "colorMode",
        "width",
        "gx:outerColor",
        "gx:outerWidth",
        "gx:physicalWidth",
        "gx:labelVisibility",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            color: get(el, "color"),
            color_mode: get_mode(el, "colorMode"),
            width: get_f64(el, "width"),
            gx_outer_color: get(el, "gx:outerColor"),
            gx_outer_width: get_f64(el, "gx:outerWidth"),
            gx_physical_width: get_f64(el, "gx:physicalWidth"),
            gx_label_visibility: get_bool(el, "gx:labelVisibility"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("LineStyle");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "color", &self.color);
        push_mode(&mut el, "colorMode", self.color_mode);
        push_f64(&mut el, "width", self.width);
        push_str(&mut el, "gx:outerColor", &self.gx_outer_color);
        push_f64(&mut el, "gx:outerWidth", self.gx_outer_width);
        push_f64(&mut el, "gx:physicalWidth", self.gx_physical_width);
        push_bool(&mut el, "gx:labelVisibility", self.gx_label_visibility);
        self.object.write_other(&mut el);
        el
    }
}

impl PolyStyle {
    const FIELDS: &'static [&'static str] = &["color", "colorMode", "fill", "outline"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            color: get(el, "color"),
            color_mode: get_mode(el, "colorMode"),
            fill: get_bool(el, "fill"),
            outline: get_bool(el, "outline"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("PolyStyle");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "color", &self.color);
        push_mode(&mut el, "colorMode", self.color_mode);
        push_bool(&mut el, "fill", self.fill);
        push_bool(&mut el, "outline", self.outline);
        self.object.write_other(&mut el);
        el
    }
}

impl BalloonStyle {
    const FIELDS: &'static [&'static str] = &["bgColor", "textColor", "text", "displayMode"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            bg_color: get(el, "bgColor"),
            text_color: get(el, "textColor"),
            text: get(el, "text"),
            display_mode: get_mode(el, "displayMode"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("BalloonStyle");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "bgColor", &self.bg_color);
        push_str(&mut el, "textColor", &self.text_color);
        push_str(&mut el, "text", &self.text);
        push_mode(&mut el, "displayMode", self.display_mode);
        self.object.write_other(&mut el);
        el
    }
}

impl ListStyle {
    const FIELDS: &'static [&'static str] =
        &["listItemType", "bgColor", "ItemIcon", "maxSnippetLines"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            list_item_type: get_mode(el, "listItemType"),
            bg_color: get(el, "bgColor"),
            item_icons: el
                .children_named("ItemIcon")
                .filter_map(ItemIcon::from_element)
                .collect(),
            max_snippet_lines: get_i32(el, "maxSnippetLines"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("ListStyle");
        self.object.write_attrs(&mut el);
        push_mode(&mut el, "listItemType", self.list_item_type);
        push_str(&mut el, "bgColor", &self.bg_color);
        for icon in &self.item_icons {
            el.push_child(icon.to_element());
        }
        push_i32(&mut el, "maxSnippetLines", self.max_snippet_lines);
        self.object.write_other(&mut el);
        el
    }
}

impl ItemIcon {
    const FIELDS: &'static [&'static str] = &["state", "href"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        // state holds several literals separated by whitespace; unknown
        // ones are dropped
        let states = get(el, "state")
            .map(|s| {
                s.split_whitespace()
                    .filter_map(ItemIconState::from_literal)
                    .collect()
            })
            .unwrap_or_default();
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            states,
            href: get(el, "href"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("ItemIcon");
        self.object.write_attrs(&mut el);
        if !self.states.is_empty() {
            let joined = self
                .states
                .iter()
                .map(|s| s.literal())
                .collect::<Vec<_>>()
                .join(" ");
            el.push_child(text_element("state", joined));
        }
        push_str(&mut el, "href", &self.href);
        self.object.write_other(&mut el);
        el
    }
}

impl Style {
    const FIELDS: &'static [&'static str] = &[
        "IconStyle",
        "LabelStyle",
        "LineStyle",
        "PolyStyle",
        "BalloonStyle",
        "ListStyle",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            icon_style: el.child("IconStyle").and_then(IconStyle::from_element),
            label_style: el.child("LabelStyle").and_then(LabelStyle::from_element),
            line_style: el.child("LineStyle").and_then(LineStyle::from_element),
            poly_style: el.child("PolyStyle").and_then(PolyStyle::from_element),
            balloon_style: el.child("BalloonStyle").and_then(BalloonStyle::from_element),
            list_style: el.child("ListStyle").and_then(ListStyle::from_element),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Style");
        self.object.write_attrs(&mut el);
        if let Some(s) = &self.icon_style {
            el.push_child(s.to_element());
        }
        if let Some(s) = &self.label_style {
            el.push_child(s.to_element());
        }
        if let Some(s) = &self.line_style {
            el.push_child(s.to_element());
        }
        if let Some(s) = &self.poly_style {
            el.push_child(s.to_element());
        }
        if let Some(s) = &self.balloon_style {
            el.push_child(s.to_element());
        }
        if let Some(s) = &self.list_style {
            el.push_child(s.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl StyleMap {
    const FIELDS: &'static [&'static str] = &["Pair"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            pairs: el.children_named("Pair").filter_map(Pair::from_element).collect(),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("StyleMap");
        self.object.write_attrs(&mut el);
        for pair in &self.pairs {
            el.push_child(pair.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl Pair {
    const FIELDS: &'static [&'static str] = &["key", "styleUrl", "Style", "StyleMap"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            key: get_mode(el, "key"),
            style_url: get(el, "styleUrl"),
            selector: StyleSelector::from_parent(el).map(Box::new),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Pair");
        self.object.write_attrs(&mut el);
        push_mode(&mut el, "key", self.key);
        push_str(&mut el, "styleUrl", &self.style_url);
        if let Some(selector) = &self.selector {
            el.push_child(selector.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl StyleSelector {
    /// Alternative tag names in fixed resolution order
    pub const TAGS: &'static [&'static str] = &["Style", "StyleMap"];

    pub fn from_parent(parent: &RawXmlElement) -> Option<Self> {
        for tag in Self::TAGS {
            if let Some(el) = parent.child(tag) {
                if let Some(s) = Self::from_element(el) {
                    return Some(s);
                }
            }
        }
        None
    }

    /// All selectors among `parent`'s children, in document order
    pub fn seq_from_parent(parent: &RawXmlElement) -> Vec<Self> {
        parent
            .child_elements()
            .filter_map(Self::from_element)
            .collect()
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "Style" => Style::from_element(el).map(StyleSelector::Style),
            "StyleMap" => StyleMap::from_element(el).map(StyleSelector::StyleMap),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            StyleSelector::Style(s) => s.to_element(),
            StyleSelector::StyleMap(s) => s.to_element(),
        }
    }
}
