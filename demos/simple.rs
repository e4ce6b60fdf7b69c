//! Rendering primitives, objects, class instances and cycles.
//!
//! Run with: cargo run --example simple

use serialize_as_code::{run, value, Object, Value};

fn main() {
    let primitives = value!([
        undefined,
        null,
        "it's",
        12,
        (1.5e21),
        (Value::regexp("^abc$", "i")),
        (Value::symbol_for("test")),
        (Value::date_millis(1531052672662))
    ]);
    println!("primitives: {}", run(&primitives));

    let point = Value::from(Object::instance_of("Point").with("y", 2).with("x", 1));
    println!("instance:   {}", run(&point));

    // Mutable composites can refer back to themselves.
    let node = value!({ name: "root", children: [] });
    if let Some(children) = node.get_property("children") {
        children.push(node.clone());
    }
    println!("cycle:      {}", run(&node));

    // `Display` uses the same encoder.
    println!("display:    {}", Value::set_of([Value::from(3), Value::from(3), point]));
}
