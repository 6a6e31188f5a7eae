use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jon::{dump, dump_pretty, parse};

fn sample_document(entries: usize) -> String {
    let mut source = String::from("// generated fixture\n");
    for i in 0..entries {
        source.push_str(&format!(
            "service_{i}: {{ host: 'node-{i}.internal', port: {}, weights: [0x{:X}, {i}, {}.5], enabled: {} }}\n",
            8000 + i,
            i * 7,
            i,
            i % 2 == 0,
        ));
    }
    source
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for entries in [10usize, 100, 1000] {
        let source = sample_document(entries);
        group.bench_with_input(
            BenchmarkId::from_parameter(entries),
            &source,
            |b, source| b.iter(|| parse(black_box(source)).unwrap()),
        );
    }
    group.finish();
}

fn benchmark_dump(c: &mut Criterion) {
    let doc = parse(&sample_document(100)).unwrap();

    c.bench_function("dump_compact", |b| b.iter(|| dump(black_box(&doc))));
    c.bench_function("dump_pretty", |b| b.iter(|| dump_pretty(black_box(&doc))));
}

fn benchmark_validate(c: &mut Criterion) {
    let doc = parse(&sample_document(100)).unwrap();
    let schema = parse(
        "type: 'object'
         extras: true
         props: {
           service_0: {
             props: {
               host: { type: 'string', minLen: 1 }
               port: { type: 'int', minInt: 1, maxInt: 65535 }
               weights: { type: 'array', items: 'any' }
               enabled: 'bool'
             }
           }
         }",
    )
    .unwrap();

    c.bench_function("validate", |b| {
        b.iter(|| jon::validate(black_box(&doc), black_box(&schema)).unwrap())
    });
}

criterion_group!(benches, benchmark_parse, benchmark_dump, benchmark_validate);
criterion_main!(benches);
