//! Rendering `Serialize` types.
//!
//! Run with: cargo run --example serde_values

use serde::Serialize;
use serialize_as_code::{run, to_code, to_value};
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    status: Status,
}

#[derive(Debug, Serialize)]
enum Status {
    Active,
    Suspended { reason: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            status: Status::Active,
        },
        User {
            id: 43,
            name: "Bob O'Neil".to_string(),
            status: Status::Suspended {
                reason: "spam".to_string(),
            },
        },
    ];
    println!("users: {}", to_code(&users)?);

    let mut by_id = BTreeMap::new();
    by_id.insert(42u32, "Alice");
    by_id.insert(43u32, "Bob");
    println!("by id: {}", to_code(&by_id)?);

    // The intermediate value can be inspected or edited before encoding.
    let value = to_value(&users[0])?;
    value.set_property("extra", to_value(&u64::MAX)?);
    println!("value: {}", run(&value));

    Ok(())
}
