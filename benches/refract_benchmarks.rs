use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mson_refract::ast::{
    BaseTypeName, DataStructure, Element as MsonElement, PropertyMember, PropertyName,
    TypeDefinition, TypeName, TypeSection, Value, ValueDefinition,
};
use mson_refract::{analyze, load, render, SourceFormat};

// ============================================================================
// Test Data: Varying Size
// ============================================================================

const USER_JSON: &str = include_str!("../tests/ok/user.json");

fn property(name: String, base: BaseTypeName, literals: Vec<String>) -> MsonElement {
    MsonElement::Property(PropertyMember {
        name: PropertyName::Literal(name),
        value_definition: ValueDefinition {
            values: literals.into_iter().map(Value::new).collect(),
            type_definition: TypeDefinition::of(base),
        },
        ..PropertyMember::default()
    })
}

// Generate a wide data structure: one nested object per item
fn generate_data_structure(size: usize) -> DataStructure {
    let members = (0..size)
        .map(|i| {
            MsonElement::Property(PropertyMember {
                name: PropertyName::Literal(format!("item{i}")),
                value_definition: ValueDefinition {
                    values: Vec::new(),
                    type_definition: TypeDefinition::of(BaseTypeName::Object),
                },
                sections: vec![TypeSection::member_type(vec![
                    property("id".to_string(), BaseTypeName::Number, vec![i.to_string()]),
                    property("name".to_string(), BaseTypeName::String, vec![format!("Item {i}")]),
                    property("active".to_string(), BaseTypeName::Boolean, vec![(i % 2 == 0).to_string()]),
                    property(
                        "tags".to_string(),
                        BaseTypeName::Enum,
                        vec!["a".to_string(), "b".to_string(), "c".to_string()],
                    ),
                ])],
                ..PropertyMember::default()
            })
        })
        .collect();

    DataStructure {
        name: TypeName::symbol("Items"),
        type_definition: TypeDefinition::of(BaseTypeName::Object),
        sections: vec![TypeSection::member_type(members)],
    }
}

// ============================================================================
// Render Benchmarks
// ============================================================================

fn bench_render_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_member_scaling");

    for size in [10, 50, 100, 500, 1000] {
        let data_structure = generate_data_structure(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data_structure, |b, ds| {
            b.iter(|| render(black_box(ds)))
        });
    }

    group.finish();
}

// ============================================================================
// End-to-End Benchmarks
// ============================================================================

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_user_json", |b| {
        b.iter(|| load(black_box(USER_JSON), SourceFormat::Json))
    });
}

fn bench_e2e_with_serialization(c: &mut Criterion) {
    c.bench_function("e2e_user_to_json", |b| {
        b.iter(|| {
            let result = analyze(black_box(USER_JSON), SourceFormat::Json).unwrap();
            result.to_json()
        })
    });
}

criterion_group!(
    benches,
    bench_render_scaling,
    bench_load,
    bench_e2e_with_serialization
);
criterion_main!(benches);
