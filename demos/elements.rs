//! Rendering UI element trees.
//!
//! Run with: cargo run --example elements

use serialize_as_code::{run, to_string_with_options, value, CodeOptions, Element, ElementMarkers, Value};

fn main() {
    let page = Element::new("div")
        .prop("className", "page")
        .child(
            Element::component("Header")
                .prop("title", "Welcome")
                .flag("sticky")
                .key("header"),
        )
        .child(
            Element::fragment()
                .child(Element::new("p").prop("style", value!({ color: "red" })).child("Hello"))
                .child(
                    Element::new("button")
                        .prop("onClick", Value::function("handleClick"))
                        .ref_value(value!({ current: null }))
                        .child("Click"),
                ),
        )
        .into_value();
    println!("{}", run(&page));

    // Nodes tagged under other markers need matching options.
    let markers = ElementMarkers::new("ui.", "ui.node", "ui.group");
    let node = Element::new("row").child("cell").into_value_with(&markers);
    println!("default markers: {}", run(&node));
    println!(
        "custom markers:  {}",
        to_string_with_options(&node, &CodeOptions::new().with_element_markers(markers))
    );
}
