use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sealkit_core::{StampParameters, StampShape};
use sealkit_designer::{
    layout_circular_text, layout_elliptical_text, render_stamp, render_svg, RecordingSurface,
    TextBand,
};

fn bench_layout(c: &mut Criterion) {
    let text = "广州顺丰速运有限公司";
    c.bench_function("layout_circular_10_chars", |b| {
        b.iter(|| layout_circular_text(black_box(text), 150.0, 150.0, 110.0, TextBand::Top))
    });
    c.bench_function("layout_elliptical_10_chars", |b| {
        b.iter(|| layout_elliptical_text(black_box(text), 200.0, 140.0, 165.0, 105.0))
    });
}

fn bench_compose(c: &mut Criterion) {
    let circle = StampParameters::default().with_texts("广州顺丰速运有限公司", "4401060001");
    let oval = StampParameters::for_shape(StampShape::Oval).with_texts("广州顺丰速运有限公司", "合同专用章");

    c.bench_function("compose_circle_recording", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new();
            render_stamp(black_box(&circle), &mut surface).map(|_| surface.commands().len())
        })
    });
    c.bench_function("compose_oval_svg", |b| b.iter(|| render_svg(black_box(&oval))));
}

criterion_group!(benches, bench_layout, bench_compose);
criterion_main!(benches);
