//! Attribute application
//!
//! Writes a descriptor onto an element: `style` objects go property by
//! property to the inline style, everything else through `setAttribute`.

use crate::{AttributeDescriptor, Value};
use fos_dom::{NodeId, SharedDocument};

/// Apply `descriptor` to `target`, in insertion order. `None` is a no-op.
///
/// A `style` entry is only expanded when it holds an object; any other value
/// under that key is written as a plain attribute. `Null` counts as a
/// non-object here even though its `type_name` is `"object"`, so
/// `style: null` becomes the attribute text `"null"`.
pub fn apply<'a>(
    doc: &SharedDocument,
    target: NodeId,
    descriptor: impl Into<Option<&'a AttributeDescriptor>>,
) {
    let Some(descriptor) = descriptor.into() else {
        return;
    };

    for (key, value) in descriptor.iter() {
        match value {
            Value::Object(style) if key == "style" => apply_style(doc, target, style),
            _ => {
                let text = value.to_text();
                tracing::trace!(?target, key, value = %text, "setAttribute");
                doc.set_attribute(target, key, &text);
            }
        }
    }
}

fn apply_style(doc: &SharedDocument, target: NodeId, style: &AttributeDescriptor) {
    for (property, value) in style.iter() {
        let text = value.to_text();
        if !doc.set_style(target, property, &text) {
            tracing::trace!(?target, property, "style property ignored");
        }
    }
}
