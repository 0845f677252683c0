//! Example: a command palette modal driven by keys and buttons

use fos_modal::{
    AttributeDescriptor, ElementBatch, ElementBuilder, Event, KeyboardEvent, Modal, SharedDocument,
    Transition,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let doc = SharedDocument::new("demo://palette");

    // Modal content
    let mut batch = ElementBatch::new(&doc);
    for label in ["Open file", "Save", "Quit"] {
        batch.add(ElementBuilder::new(&doc, "li", &AttributeDescriptor::from([("class", "entry")]), label))?;
    }
    let mut list = ElementBuilder::tag(&doc, "ul");
    let entries = batch.realize_moved()?;
    doc.append_child(list.element(), entries)?;

    let modal = Modal::new(&doc, "palette").with_transition(Transition::Fade);
    modal.set_custom_modal_style(&AttributeDescriptor::new().attr("id", "palette").style([
        ("position", "fixed"),
        ("inset", "0"),
        ("opacity", "0"),
        ("visibility", "hidden"),
        ("transition", "opacity 0.2s ease"),
    ]));
    doc.append_child(modal.element(), list.element())?;
    doc.append_child(doc.body(), modal.element())?;

    let close = ElementBuilder::new(&doc, "button", None, "Close");
    list.add_child(&close)?;

    let _open_keys = modal.open_on_keys(["Control", "p"]);
    let _close_keys = modal.close_on_keys(["Escape"]);
    modal.close_on(&close, "click")?;

    println!("palette open: {}", modal.is_open());
    doc.dispatch_event(&Event::keydown(doc.body(), KeyboardEvent::new("p").ctrl()));
    println!("after Ctrl+P: {}", modal.is_open());
    doc.dispatch_event(&Event::keydown(doc.body(), KeyboardEvent::new("Escape")));
    println!("after Escape: {}", modal.is_open());

    doc.dispatch_event(&Event::click(close.element()));
    println!(
        "after close button: display={:?}",
        doc.style_value(modal.element(), "display")
    );

    Ok(())
}
