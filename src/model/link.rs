//! Link-like elements: Link, Icon, atom attribution, Snippet

use crate::model::{ObjectBase, RefreshMode, ViewRefreshMode};
use crate::xml::{
    get, get_f64, get_i32, get_mode, push_attr, push_f64, push_mode, push_str, RawXmlElement,
};

/// A fetchable reference with refresh control (`<Link>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Link {
    pub object: ObjectBase,
    pub href: Option<String>,
    pub refresh_mode: Option<RefreshMode>,
    pub refresh_interval: Option<f64>,
    pub view_refresh_mode: Option<ViewRefreshMode>,
    pub view_refresh_time: Option<f64>,
    pub view_bound_scale: Option<f64>,
    pub view_format: Option<String>,
    pub http_query: Option<String>,
}

/// An overlay/model image reference (`<Icon>`); same shape as Link plus
/// the gx palette offsets
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Icon {
    pub object: ObjectBase,
    pub href: Option<String>,
    pub refresh_mode: Option<RefreshMode>,
    pub refresh_interval: Option<f64>,
    pub view_refresh_mode: Option<ViewRefreshMode>,
    pub view_refresh_time: Option<f64>,
    pub view_bound_scale: Option<f64>,
    pub view_format: Option<String>,
    pub http_query: Option<String>,
    pub gx_x: Option<f64>,
    pub gx_y: Option<f64>,
    pub gx_w: Option<f64>,
    pub gx_h: Option<f64>,
}

/// Feature attribution (`<atom:author>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtomAuthor {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub email: Option<String>,
}

/// Related-resource link (`<atom:link>`); href and rel are attributes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtomLink {
    pub href: Option<String>,
    pub rel: Option<String>,
}

/// Short feature description (`<Snippet maxLines="...">`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snippet {
    pub value: Option<String>,
    pub max_lines: Option<i32>,
}

const LINK_FIELDS: &[&str] = &[
    "href",
    "refreshMode",
    "refreshInterval",
    "viewRefreshMode",
    "viewRefreshTime",
    "viewBoundScale",
    "viewFormat",
    "httpQuery",
];

const ICON_FIELDS: &[&str] = &[
    "href",
    "refreshMode",
    "refreshInterval",
    "viewRefreshMode",
    "viewRefreshTime",
    "viewBoundScale",
    "viewFormat",
    "httpQuery",
    "gx:x",
    "gx:y",
    "gx:w",
    "gx:h",
];

impl Link {
    /// Link pointing at an href
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[LINK_FIELDS]),
            href: get(el, "href"),
            refresh_mode: get_mode(el, "refreshMode"),
            refresh_interval: get_f64(el, "refreshInterval"),
            view_refresh_mode: get_mode(el, "viewRefreshMode"),
            view_refresh_time: get_f64(el, "viewRefreshTime"),
            view_bound_scale: get_f64(el, "viewBoundScale"),
            view_format: get(el, "viewFormat"),
            http_query: get(el, "httpQuery"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Link");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "href", &self.href);
        push_mode(&mut el, "refreshMode", self.refresh_mode);
        push_f64(&mut el, "refreshInterval", self.refresh_interval);
        push_mode(&mut el, "viewRefreshMode", self.view_refresh_mode);
        push_f64(&mut el, "viewRefreshTime", self.view_refresh_time);
        push_f64(&mut el, "viewBoundScale", self.view_bound_scale);
        push_str(&mut el, "viewFormat", &self.view_format);
        push_str(&mut el, "httpQuery", &self.http_query);
        self.object.write_other(&mut el);
        el
    }
}

impl Icon {
    /// Icon pointing at an href
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Default::default()
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[ICON_FIELDS]),
            href: get(el, "href"),
            refresh_mode: get_mode(el, "refreshMode"),
            refresh_interval: get_f64(el, "refreshInterval"),
            view_refresh_mode: get_mode(el, "viewRefreshMode"),
            view_refresh_time: get_f64(el, "viewRefreshTime"),
            view_bound_scale: get_f64(el, "viewBoundScale"),
            view_format: get(el, "viewFormat"),
            http_query: get(el, "httpQuery"),
            gx_x: get_f64(el, "gx:x"),
            gx_y: get_f64(el, "gx:y"),
            gx_w: get_f64(el, "gx:w"),
            gx_h: get_f64(el, "gx:h"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("Icon");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "href", &self.href);
        push_mode(&mut el, "refreshMode", self.refresh_mode);
        push_f64(&mut el, "refreshInterval", self.refresh_interval);
        push_mode(&mut el, "viewRefreshMode", self.view_refresh_mode);
        push_f64(&mut el, "viewRefreshTime", self.view_refresh_time);
        push_f64(&mut el, "viewBoundScale", self.view_bound_scale);
        push_str(&mut el, "viewFormat", &self.view_format);
        push_str(&mut el, "httpQuery", &self.http_query);
        push_f64(&mut el, "gx:x", self.gx_x);
        push_f64(&mut el, "gx:y", self.gx_y);
        push_f64(&mut el, "gx:w", self.gx_w);
        push_f64(&mut el, "gx:h", self.gx_h);
        self.object.write_other(&mut el);
        el
    }
}

impl AtomAuthor {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            name: get(el, "atom:name"),
            uri: get(el, "atom:uri"),
            email: get(el, "atom:email"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("atom:author");
        push_str(&mut el, "atom:name", &self.name);
        push_str(&mut el, "atom:uri", &self.uri);
        push_str(&mut el, "atom:email", &self.email);
        el
    }
}

impl AtomLink {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            href: get(el, "@href"),
            rel: get(el, "@rel"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("atom:link");
        push_attr(&mut el, "href", &self.href);
        push_attr(&mut el, "rel", &self.rel);
        el
    }
}

impl Snippet {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            max_lines: None,
        }
    }

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        let text = el.text();
        let trimmed = text.trim();
        Some(Self {
            value: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            },
            max_lines: get_i32(el, "@maxLines"),
        })
    }

    /// Snippet is used under two tag names (`Snippet` on features,
    /// `linkSnippet` on NetworkLinkControl)
    pub fn to_element_as(&self, name: &str) -> RawXmlElement {
        let mut el = RawXmlElement::new(name);
        if let Some(lines) = self.max_lines {
            el = el.with_attr("maxLines", lines.to_string());
        }
        if let Some(v) = &self.value {
            el = el.with_text(v.clone());
        }
        el
    }
}
