use criterion::{criterion_group, criterion_main, Criterion};

use inkpad::{rasterize, Canvas, SourceBitmap};

fn bench_rasterize_sparse(c: &mut Criterion) {
    let mut canvas = Canvas::default();
    canvas.begin_stroke(0.0, 0.0);
    canvas.line_to(279.0, 279.0);
    canvas.end_stroke();
    let bitmap = canvas.bitmap().clone();

    c.bench_function("rasterize_sparse", |b| b.iter(|| rasterize(&bitmap)));
}

fn bench_rasterize_dense(c: &mut Criterion) {
    let bitmap = SourceBitmap::filled(255);
    c.bench_function("rasterize_dense", |b| b.iter(|| rasterize(&bitmap)));
}

fn bench_paint_and_rasterize(c: &mut Criterion) {
    c.bench_function("paint_and_rasterize", |b| {
        b.iter(|| {
            let mut canvas = Canvas::default();
            canvas.begin_stroke(20.0, 240.0);
            canvas.line_to(140.0, 30.0);
            canvas.line_to(260.0, 240.0);
            canvas.end_stroke();
            rasterize(canvas.bitmap())
        })
    });
}

fn bench_encode_grid(c: &mut Criterion) {
    let grid = rasterize(&SourceBitmap::filled(255));
    c.bench_function("encode_grid_json", |b| {
        b.iter(|| serde_json::to_string(&grid).unwrap())
    });
}

criterion_group!(
    benches,
    bench_rasterize_sparse,
    bench_rasterize_dense,
    bench_paint_and_rasterize,
    bench_encode_grid
);
criterion_main!(benches);
