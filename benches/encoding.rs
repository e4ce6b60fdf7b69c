use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serialize_as_code::{create, run, to_code, value, Element, Object, Value};

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn wide_object(size: usize) -> Value {
    let mut object = Object::instance_of("Record");
    for i in (0..size).rev() {
        object.insert(format!("field{:04}", i), Value::from(i as i64));
    }
    Value::from(object)
}

fn deep_object(depth: usize) -> Value {
    let root = Value::object();
    let mut current = root.clone();
    for i in 0..depth {
        let next = value!({ level: (i as i64) });
        current.set_property("child", next.clone());
        current = next;
    }
    current.set_property("back", root.clone());
    root
}

fn element_list(size: usize) -> Value {
    (0..size)
        .fold(Element::new("ul").prop("className", "list"), |list, i| {
            list.child(
                Element::new("li")
                    .key(format!("item-{}", i))
                    .child(format!("Item {}", i)),
            )
        })
        .into_value()
}

fn benchmark_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    let string = Value::from("here's a string with a quote");
    let float = Value::from(1.5e-7);
    let date = Value::date_millis(1531052672662);

    group.bench_function("string", |b| b.iter(|| run(black_box(&string))));
    group.bench_function("float", |b| b.iter(|| run(black_box(&float))));
    group.bench_function("date", |b| b.iter(|| run(black_box(&date))));

    group.finish();
}

fn benchmark_wide_objects(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_object");

    for size in [10, 50, 100, 500].iter() {
        let object = wide_object(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &object, |b, object| {
            b.iter(|| run(black_box(object)))
        });
    }
    group.finish();
}

fn benchmark_deep_cycles(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_cycle");

    for depth in [10, 50, 100].iter() {
        let object = deep_object(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &object, |b, object| {
            b.iter(|| run(black_box(object)))
        });
    }
    group.finish();
}

fn benchmark_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_list");

    for size in [10, 100].iter() {
        let list = element_list(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| run(black_box(list)))
        });
    }
    group.finish();
}

fn benchmark_custom_encoder(c: &mut Criterion) {
    let list = element_list(100);
    let serialize = create(|value: &Value| value.is_string().then(|| "S".to_string()));

    c.bench_function("custom_encoder_element_list", |b| {
        b.iter(|| serialize(black_box(&list)))
    });
}

fn benchmark_serde_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("serde_products");

    for size in [10, 100].iter() {
        let items = products(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            b.iter(|| to_code(black_box(items)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_primitives,
    benchmark_wide_objects,
    benchmark_deep_cycles,
    benchmark_elements,
    benchmark_custom_encoder,
    benchmark_serde_bridge
);
criterion_main!(benches);
