use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dxfcodec::document::DxfDocument;
use dxfcodec::entities::{Circle, Line};
use dxfcodec::inspect::TagStreamScanner;
use dxfcodec::sections::EntitiesSection;
use dxfcodec::types::{AcadVersion, HandleAllocator, Vector3};

fn drawing(version: AcadVersion, entity_count: usize) -> String {
    let mut alloc = HandleAllocator::default();
    let mut doc = DxfDocument::standard(version, &mut alloc);
    let mut entities = EntitiesSection::new();
    for i in 0..entity_count {
        let offset = i as f64;
        entities.add_entity(
            &Line::from_points(
                Vector3::new(offset, 0.0, 0.0),
                Vector3::new(offset, 10.0, 0.0),
                version,
            )
            .with_handle(alloc.next()),
        );
        entities.add_entity(
            &Circle::from_center_radius(Vector3::new(offset, 15.0, 0.0), 2.0, version)
                .with_handle(alloc.next()),
        );
    }
    doc.set_entities(entities.finish());
    doc.build()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_r2000_1000_entities", |b| {
        b.iter(|| drawing(black_box(AcadVersion::R2000), black_box(500)))
    });
    c.bench_function("build_r10_1000_entities", |b| {
        b.iter(|| drawing(black_box(AcadVersion::R10), black_box(500)))
    });
}

fn bench_scan(c: &mut Criterion) {
    let text = drawing(AcadVersion::R2000, 500);
    c.bench_function("scan_r2000_1000_entities", |b| {
        b.iter(|| TagStreamScanner::scan(black_box(&text)))
    });
}

criterion_group!(benches, bench_build, bench_scan);
criterion_main!(benches);
