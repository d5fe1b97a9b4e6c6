use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use datasynth::config::{DataKind, GeneratorConfig};
use datasynth::generator::DataGenerator;
use serde_json::json;
use std::hint::black_box;

fn bench_free_form_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_form_json");
    let config = GeneratorConfig::new(DataKind::Json, 1000).with_seed(42);
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_records", |b| {
        b.iter(|| {
            let dataset = DataGenerator::new().generate(black_box(&config)).unwrap();
            black_box(dataset)
        })
    });
    group.finish();
}

fn bench_schema_driven_json(c: &mut Criterion) {
    let schema = datasynth::schema::SchemaNode::parse(&json!({
        "type": "object",
        "properties": {
            "id": {"type": "string", "format": "uuid"},
            "name": {"type": "string"},
            "email": {"type": "string", "format": "email"},
            "age": {"type": "integer", "minimum": 18, "maximum": 99},
            "score": {"type": "number"},
            "active": {"type": "boolean"},
            "tags": {
                "type": "array",
                "items": {"type": "string"},
                "minItems": 1,
                "maxItems": 5
            },
            "address": {
                "type": "object",
                "properties": {
                    "street": {"type": "string"},
                    "city": {"type": "string"},
                    "zip": {"type": "string"}
                },
                "required": ["street", "city"]
            }
        },
        "required": ["id", "name", "email"]
    }))
    .unwrap();

    let mut group = c.benchmark_group("schema_driven_json");
    let config = GeneratorConfig::new(DataKind::Json, 1000)
        .with_seed(42)
        .with_schema(schema);
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_records", |b| {
        b.iter(|| {
            let dataset = DataGenerator::new().generate(black_box(&config)).unwrap();
            black_box(dataset)
        })
    });
    group.finish();
}

fn bench_agent_traces(c: &mut Criterion) {
    let mut group = c.benchmark_group("agent_traces");
    let config = GeneratorConfig::new(DataKind::AgentTrace, 500).with_seed(42);
    group.throughput(Throughput::Elements(500));
    group.bench_function("500_traces", |b| {
        b.iter(|| {
            let dataset = DataGenerator::new().generate(black_box(&config)).unwrap();
            black_box(dataset)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_free_form_json,
    bench_schema_driven_json,
    bench_agent_traces
);
criterion_main!(benches);
