//! Modal style presets

use crate::{AttributeDescriptor, Value};

/// Stock descriptor for a full-viewport overlay
pub struct ModalStyle;

impl ModalStyle {
    /// `id="parent-modal"` with a fixed, centered flex container that starts
    /// transparent and hidden and fades over one second.
    pub fn default_style() -> AttributeDescriptor {
        AttributeDescriptor::new().attr("id", "parent-modal").style([
            ("display", Value::from("flex")),
            ("position", Value::from("fixed")),
            ("top", Value::from(0)),
            ("width", Value::from("100%")),
            ("height", Value::from("100%")),
            ("fontSize", Value::from("5rem")),
            ("color", Value::from("white")),
            ("alignItems", Value::from("center")),
            ("justifyContent", Value::from("center")),
            ("transition", Value::from("opacity 1s ease, visibility 1s ease")),
            ("opacity", Value::from(0)),
            ("visibility", Value::from("hidden")),
            ("backgroundColor", Value::from("rgba(0,0,0,0.5)")),
        ])
    }

    /// Default style with `overrides` laid over it key by key.
    ///
    /// The merge is shallow: an overriding `style` replaces the whole default
    /// style block, so unspecified default properties are dropped.
    pub fn custom_style<'a>(overrides: impl Into<Option<&'a AttributeDescriptor>>) -> AttributeDescriptor {
        let base = Self::default_style();
        match overrides.into() {
            Some(overrides) => base.merged(overrides),
            None => base,
        }
    }
}
