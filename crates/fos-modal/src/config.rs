//! Modal configuration
//!
//! Loaded from any serde format; every field is optional.
//!
//! ```json
//! {
//!   "class_name": "settings",
//!   "transition": "fade",
//!   "open_keys": ["Control", "k"],
//!   "close_keys": ["Escape"],
//!   "apply_default_style": true
//! }
//! ```

use crate::{AttributeDescriptor, KeyCombo, Transition};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// `class` of the modal element; empty for none
    pub class_name: String,
    pub transition: Transition,
    pub open_keys: KeyCombo,
    pub close_keys: KeyCombo,
    /// Apply the stock overlay style
    pub apply_default_style: bool,
    /// Laid over the stock style; takes precedence over `apply_default_style`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_overrides: Option<AttributeDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_defaults() {
        let config: ModalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ModalConfig::default());
        assert_eq!(config.transition, Transition::display(""));
        assert!(config.open_keys.is_empty());
        assert!(!config.apply_default_style);
    }

    #[test]
    fn test_full_config() {
        let config: ModalConfig = serde_json::from_str(
            r#"{
                "class_name": "settings",
                "transition": {"display": {"visible": "block"}},
                "open_keys": ["Control", "k"],
                "close_keys": ["Escape"],
                "style_overrides": {"style": {"color": "red", "zIndex": 10}}
            }"#,
        )
        .unwrap();

        assert_eq!(config.class_name, "settings");
        assert_eq!(config.transition, Transition::display("block"));
        assert_eq!(config.open_keys, KeyCombo::from(["k", "Control"]));
        let style = config
            .style_overrides
            .as_ref()
            .and_then(|o| o.get("style"))
            .and_then(Value::as_object)
            .unwrap();
        assert_eq!(style.get("zIndex"), Some(&Value::from(10)));
    }

    #[test]
    fn test_rejects_list_attribute() {
        let result: Result<ModalConfig, _> =
            serde_json::from_str(r#"{"style_overrides": {"class": ["a", "b"]}}"#);
        assert!(result.is_err());
    }
}
