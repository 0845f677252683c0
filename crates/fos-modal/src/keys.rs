//! Key combinations
//!
//! A combo is the exact set of tokens that must be down together:
//! `Control`, `Shift`, `Alt` for the held modifiers plus the literal key
//! value. Matching is set equality and the key value is case sensitive.

use fos_dom::KeyboardEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Unordered set of key tokens, duplicates collapsed
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCombo(BTreeSet<String>);

impl KeyCombo {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Whether the keys held in `event` are exactly this combo
    pub fn matches(&self, event: &KeyboardEvent) -> bool {
        let pressed = pressed_set(event);
        self.0.len() == pressed.len() && self.0.iter().all(|k| pressed.contains(k.as_str()))
    }
}

fn pressed_set(event: &KeyboardEvent) -> BTreeSet<&str> {
    let mut pressed = BTreeSet::new();
    if event.modifiers.ctrl {
        pressed.insert("Control");
    }
    if event.modifiers.shift {
        pressed.insert("Shift");
    }
    if event.modifiers.alt {
        pressed.insert("Alt");
    }
    pressed.insert(event.key.as_str());
    pressed
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.0.iter().map(String::as_str).collect();
        f.write_str(&keys.join("+"))
    }
}

impl<S: Into<String>> FromIterator<S> for KeyCombo {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for KeyCombo {
    fn from(keys: [S; N]) -> Self {
        Self::new(keys)
    }
}

impl From<Vec<String>> for KeyCombo {
    fn from(keys: Vec<String>) -> Self {
        Self::new(keys)
    }
}

impl From<&[&str]> for KeyCombo {
    fn from(keys: &[&str]) -> Self {
        Self::new(keys.iter().copied())
    }
}
