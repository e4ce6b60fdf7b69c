//! Overriding the built-in encoders.
//!
//! Run with: cargo run --example custom_encoder

use serialize_as_code::{create, value, CodeOptions, Serializer, Value};

fn main() {
    let credentials = value!({ user: "alice", password: "hunter2" });
    let session = value!({ id: 7, credentials: (credentials.clone()), tokens: ["a1", "b2"] });

    // A custom encoder sees the root and every nested value first.
    let redacted = create(move |v: &Value| (*v == credentials).then(|| "<redacted>".to_string()));
    println!("redacted: {}", redacted(&session));

    // A reusable handle can also carry options.
    let serializer = Serializer::new()
        .with_options(CodeOptions::new().with_host_elements(false))
        .with_custom(|v: &Value| v.is_string().then(|| "\"…\"".to_string()));
    println!("strings:  {}", serializer.run(&session));
    println!("host:     {}", serializer.run(&Value::instance("HTMLCanvasElement")));
}
