//! Closed string-valued enumerations of the KML grammar
//!
//! Every mode decodes from its exact canonical literal; an unrecognized
//! string decodes to absent, never an error.

use crate::xml::ModeLiteral;

macro_rules! mode_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $lit:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl ModeLiteral for $name {
            fn from_literal(s: &str) -> Option<Self> {
                match s {
                    $($lit => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn literal(&self) -> &'static str {
                match self {
                    $(Self::$variant => $lit),+
                }
            }
        }
    };
}

mode_enum! {
    /// How altitude components are interpreted
    AltitudeMode {
        ClampToGround => "clampToGround",
        RelativeToGround => "relativeToGround",
        Absolute => "absolute",
    }
}

mode_enum! {
    /// Color application mode for color styles
    ColorMode {
        Normal => "normal",
        Random => "random",
    }
}

mode_enum! {
    /// Balloon display mode
    DisplayMode {
        Default => "default",
        Hide => "hide",
    }
}

mode_enum! {
    /// Image pyramid tile numbering origin
    GridOrigin {
        LowerLeft => "lowerLeft",
        UpperLeft => "upperLeft",
    }
}

mode_enum! {
    /// List item icon state
    ItemIconState {
        Open => "open",
        Closed => "closed",
        Error => "error",
        Fetching0 => "fetching0",
        Fetching1 => "fetching1",
        Fetching2 => "fetching2",
    }
}

mode_enum! {
    /// How a feature is shown in the list view
    ListItemType {
        Check => "check",
        CheckHideChildren => "checkHideChildren",
        CheckOffOnly => "checkOffOnly",
        RadioFolder => "radioFolder",
    }
}

mode_enum! {
    /// Link refresh trigger
    RefreshMode {
        OnChange => "onChange",
        OnInterval => "onInterval",
        OnExpire => "onExpire",
    }
}

mode_enum! {
    /// View-dependent link refresh trigger
    ViewRefreshMode {
        Never => "never",
        OnRequest => "onRequest",
        OnStop => "onStop",
        OnRegion => "onRegion",
    }
}

mode_enum! {
    /// PhotoOverlay projection surface
    Shape {
        Rectangle => "rectangle",
        Cylinder => "cylinder",
        Sphere => "sphere",
    }
}

mode_enum! {
    /// StyleMap pair key
    StyleState {
        Normal => "normal",
        Highlight => "highlight",
    }
}

mode_enum! {
    /// Units for screen/image anchor coordinates
    Units {
        Fraction => "fraction",
        Pixels => "pixels",
        InsetPixels => "insetPixels",
    }
}

mode_enum! {
    /// Tour playback control mode
    PlayMode {
        Pause => "pause",
    }
}

mode_enum! {
    /// Tour fly-to transition mode
    FlyToMode {
        Bounce => "bounce",
        Smooth => "smooth",
    }
}
