//! Google Earth tours (the gx extension namespace)

use crate::model::{AbstractView, FeaturePart, FlyToMode, ObjectBase, PlayMode, Update};
use crate::xml::{get, get_f64, get_mode, push_f64, push_mode, push_str, RawXmlElement};

/// A scripted camera tour (`<gx:Tour>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tour {
    pub object: ObjectBase,
    pub feature: FeaturePart,
    pub playlist: Option<Playlist>,
}

/// The ordered list of tour primitives (`<gx:Playlist>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Playlist {
    pub object: ObjectBase,
    pub primitives: Vec<TourPrimitive>,
}

/// The TourPrimitive substitution group
#[derive(Clone, Debug, PartialEq)]
pub enum TourPrimitive {
    FlyTo(FlyTo),
    AnimatedUpdate(AnimatedUpdate),
    TourControl(TourControl),
    Wait(Wait),
    SoundCue(SoundCue),
}

/// Move the camera to a view over a duration (`<gx:FlyTo>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlyTo {
    pub object: ObjectBase,
    pub duration: Option<f64>,
    pub fly_to_mode: Option<FlyToMode>,
    pub view: Option<AbstractView>,
}

/// Run a KML update over a duration (`<gx:AnimatedUpdate>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimatedUpdate {
    pub object: ObjectBase,
    pub duration: Option<f64>,
    pub update: Option<Update>,
}

/// Pause/resume control (`<gx:TourControl>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourControl {
    pub object: ObjectBase,
    pub play_mode: Option<PlayMode>,
}

/// Hold the current view (`<gx:Wait>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wait {
    pub object: ObjectBase,
    pub duration: Option<f64>,
}

/// Play a sound file (`<gx:SoundCue>`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SoundCue {
    pub object: ObjectBase,
    pub href: Option<String>,
}

impl Tour {
    const FIELDS: &'static [&'static str] = &["gx:Playlist"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[FeaturePart::FIELDS, Self::FIELDS]),
            feature: FeaturePart::from_element(el),
            playlist: el.child("gx:Playlist").and_then(Playlist::from_element),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("gx:Tour");
        self.object.write_attrs(&mut el);
        self.feature.write_children(&mut el);
        if let Some(playlist) = &self.playlist {
            el.push_child(playlist.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl Playlist {
    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[TourPrimitive::TAGS]),
            primitives: el
                .child_elements()
                .filter_map(TourPrimitive::from_element)
                .collect(),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("gx:Playlist");
        self.object.write_attrs(&mut el);
        for primitive in &self.primitives {
            el.push_child(primitive.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl TourPrimitive {
    /// Alternative tag names in fixed resolution order
    pub const TAGS: &'static [&'static str] = &[
        "gx:FlyTo",
        "gx:AnimatedUpdate",
        "gx:TourControl",
        "gx:Wait",
        "gx:SoundCue",
    ];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        match el.name.as_str() {
            "gx:FlyTo" => FlyTo::from_element(el).map(TourPrimitive::FlyTo),
            "gx:AnimatedUpdate" => {
                AnimatedUpdate::from_element(el).map(TourPrimitive::AnimatedUpdate)
            }
            "gx:TourControl" => TourControl::from_element(el).map(TourPrimitive::TourControl),
            "gx:Wait" => Wait::from_element(el).map(TourPrimitive::Wait),
            "gx:SoundCue" => SoundCue::from_element(el).map(TourPrimitive::SoundCue),
            _ => None,
        }
    }

    pub fn to_element(&self) -> RawXmlElement {
        match self {
            TourPrimitive::FlyTo(p) => p.to_element(),
            TourPrimitive::AnimatedUpdate(p) => p.to_element(),
            TourPrimitive::TourControl(p) => p.to_element(),
            TourPrimitive::Wait(p) => p.to_element(),
            TourPrimitive::SoundCue(p) => p.to_element(),
        }
    }
}

impl FlyTo {
    const FIELDS: &'static [&'static str] =
        &["gx:duration", "gx:flyToMode", "Camera", "LookAt"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            duration: get_f64(el, "gx:duration"),
            fly_to_mode: get_mode(el, "gx:flyToMode"),
            view: AbstractView::from_parent(el),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("gx:FlyTo");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "gx:duration", self.duration);
        push_mode(&mut el, "gx:flyToMode", self.fly_to_mode);
        if let Some(view) = &self.view {
            el.push_child(view.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl AnimatedUpdate {
    const FIELDS: &'static [&'static str] = &["gx:duration", "Update"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            duration: get_f64(el, "gx:duration"),
            update: el.child("Update").and_then(Update::from_element),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("gx:AnimatedUpdate");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "gx:duration", self.duration);
        if let Some(update) = &self.update {
            el.push_child(update.to_element());
        }
        self.object.write_other(&mut el);
        el
    }
}

impl TourControl {
    const FIELDS: &'static [&'static str] = &["gx:playMode"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            play_mode: get_mode(el, "gx:playMode"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("gx:TourControl");
        self.object.write_attrs(&mut el);
        push_mode(&mut el, "gx:playMode", self.play_mode);
        self.object.write_other(&mut el);
        el
    }
}

impl Wait {
    const FIELDS: &'static [&'static str] = &["gx:duration"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            duration: get_f64(el, "gx:duration"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("gx:Wait");
        self.object.write_attrs(&mut el);
        push_f64(&mut el, "gx:duration", self.duration);
        self.object.write_other(&mut el);
        el
    }
}

impl SoundCue {
    const FIELDS: &'static [&'static str] = &["href"];

    pub fn from_element(el: &RawXmlElement) -> Option<Self> {
        if el.is_empty() {
            return None;
        }
        Some(Self {
            object: ObjectBase::from_element(el, &[Self::FIELDS]),
            href: get(el, "href"),
        })
    }

    pub fn to_element(&self) -> RawXmlElement {
        let mut el = RawXmlElement::new("gx:SoundCue");
        self.object.write_attrs(&mut el);
        push_str(&mut el, "href", &self.href);
        self.object.write_other(&mut el);
        el
    }
}
