//! Runtime configuration: which variant of the blob ring to run.
//!
//! The page selects a variant through its URL query string, e.g.
//! `index.html?variant=clicker&drift=1`. The browser decodes the query;
//! [`Config::from_pairs`] only sees decoded key/value pairs. Unknown keys are
//! ignored and unparsable values fall back to the defaults.

use glam::Vec4;

/// How a blob's base color is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Oscillate between the two user colors.
    TwoColor,
    /// Hue wheel keyed by ring position and a drifting color phase.
    Hue,
}

/// Which weight drives the min/max radius mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeMode {
    /// `(cos(2π·percent + 2·time) + 1) / 2`
    Travelling,
    /// `|cos(π·percent + sizePhase)|`
    Accumulated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Light,
    Dark,
}

impl Background {
    pub fn color(self) -> Vec4 {
        match self {
            Background::Light => Vec4::ONE,
            Background::Dark => Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// Where parameter changes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Controls,
    Clicks,
}

/// Shader-facing mode selection, baked into the fragment source as `#define`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modes {
    pub blend: BlendMode,
    pub size: SizeMode,
    pub background: Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Two color pickers, white background.
    #[default]
    Duo,
    /// Hue wheel with sliders, white background.
    Spectrum,
    /// No controls; clicks cycle blob count and spin speed on black.
    Clicker,
}

impl Variant {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "duo" => Some(Variant::Duo),
            "spectrum" => Some(Variant::Spectrum),
            "clicker" => Some(Variant::Clicker),
            _ => None,
        }
    }

    pub fn modes(self) -> Modes {
        match self {
            Variant::Duo => Modes {
                blend: BlendMode::TwoColor,
                size: SizeMode::Travelling,
                background: Background::Light,
            },
            Variant::Spectrum => Modes {
                blend: BlendMode::Hue,
                size: SizeMode::Travelling,
                background: Background::Light,
            },
            Variant::Clicker => Modes {
                blend: BlendMode::Hue,
                size: SizeMode::Accumulated,
                background: Background::Dark,
            },
        }
    }

    pub fn interaction(self) -> Interaction {
        match self {
            Variant::Clicker => Interaction::Clicks,
            _ => Interaction::Controls,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub variant: Variant,
    /// Move the ring center around the viewport, bouncing off the edges.
    pub drift: bool,
    /// Id of the canvas element to render into.
    pub canvas_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            drift: false,
            canvas_id: "c".to_owned(),
        }
    }
}

impl Config {
    /// Query keys [`Config::from_pairs`] understands.
    pub const KEYS: [&'static str; 3] = ["variant", "drift", "canvas"];

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Config::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "variant" => match Variant::parse(value) {
                    Some(v) => config.variant = v,
                    None => log::warn!("unknown variant {value:?}, keeping {:?}", config.variant),
                },
                "drift" => config.drift = matches!(value, "1" | "true" | "on" | "yes"),
                "canvas" if !value.is_empty() => config.canvas_id = value.to_owned(),
                _ => {}
            }
        }
        config
    }
}
