//! Inline Style Declaration
//!
//! `element.style` surface: properties are addressed by their CSS name
//! (`font-size`) or the scripting name (`fontSize`). Unknown names are
//! ignored, an empty value removes the property. Names are recognised and
//! `style` attribute text is parsed with lightningcss.

use lightningcss::declaration::DeclarationBlock;
use lightningcss::properties::custom::CustomPropertyName;
use lightningcss::properties::{Property, PropertyId as CssPropertyId};
use lightningcss::stylesheet::{ParserOptions, PrinterOptions};
use lightningcss::traits::ToCss;

/// Legacy properties the host accepts on top of the lightningcss set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Float,
    Clear,
    PointerEvents,
}

impl PropertyId {
    /// Parse a CSS property name into a PropertyId
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "float" => Self::Float,
            "clear" => Self::Clear,
            "pointer-events" => Self::PointerEvents,
            _ => return None,
        })
    }
}

/// Map a scripting name (`backgroundColor`, `cssFloat`) or CSS name to the
/// canonical CSS name. Returns `None` for names the host does not know.
fn canonical_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.starts_with("--") {
        return (name.len() > 2).then(|| name.to_string());
    }
    if name == "cssFloat" {
        return Some("float".to_string());
    }

    let mut css = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            css.push('-');
            css.push(c.to_ascii_lowercase());
        } else {
            css.push(c);
        }
    }
    is_known_property(&css).then_some(css)
}

fn is_known_property(css: &str) -> bool {
    let unknown = matches!(
        CssPropertyId::from(css),
        CssPropertyId::Custom(CustomPropertyName::Unknown(_))
    );
    !unknown || PropertyId::from_name(css).is_some()
}

/// `(name, value)` text of one parsed declaration
fn declaration_text(property: &Property<'_>) -> Option<(String, String)> {
    let name = property.property_id().to_css_string(PrinterOptions::default()).ok()?;
    let value = property.value_to_css_string(PrinterOptions::default()).ok()?;
    Some((name, value))
}

/// Inline style declaration in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    properties: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `a: b; c: d` text (the `style` attribute form). Invalid
    /// declarations are skipped; `!important` is dropped.
    pub fn parse(text: &str) -> Self {
        let mut decl = Self::new();
        let options = ParserOptions {
            error_recovery: true,
            ..ParserOptions::default()
        };
        let block = match DeclarationBlock::parse_string(text, options) {
            Ok(block) => block,
            Err(err) => {
                tracing::trace!(text, error = ?err, "style attribute rejected");
                return decl;
            }
        };

        let properties = block.declarations.iter().chain(block.important_declarations.iter());
        for (name, value) in properties.filter_map(declaration_text) {
            decl.set_property(&name, &value);
        }
        decl
    }

    /// Set a property. Returns false when the name is unknown and nothing
    /// was written. An empty value removes the property.
    pub fn set_property(&mut self, name: &str, value: &str) -> bool {
        let Some(name) = canonical_name(name) else {
            return false;
        };
        let value = value.trim();
        if value.is_empty() {
            self.properties.retain(|(n, _)| *n != name);
            return true;
        }

        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.properties.push((name, value.to_string())),
        }
        true
    }

    /// Get a property value
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        let name = canonical_name(name)?;
        self.properties
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a property, returning its old value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = canonical_name(name)?;
        let index = self.properties.iter().position(|(n, _)| *n == name)?;
        Some(self.properties.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate `(css-name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize as `a: b; c: d;`
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(n, v)| format!("{n}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
