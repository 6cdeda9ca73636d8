//! Benchmark for canvas primitives.
//!
//! TARGET: a full 320x240 clear plus 100 rounded rects well under one
//! 16 ms frame on the host.
//!
//! Run with: cargo bench --package glint_ui --bench canvas_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use glint_ui::{draw, Canvas, MemoryDisplay, Painter, Rect, Rgb565};

const W: u16 = 320;
const H: u16 = 240;

fn benchmark_fill_screen(c: &mut Criterion) {
    let mut fb = vec![0u16; usize::from(W) * usize::from(H)];
    let mut canvas = Canvas::new(MemoryDisplay::new(W, H), &mut fb);

    let mut group = c.benchmark_group("fill");
    group.throughput(Throughput::Elements(u64::from(W) * u64::from(H)));
    group.bench_function("fill_screen_320x240", |b| {
        b.iter(|| canvas.fill_screen(black_box(Rgb565::BLUE)));
    });
    group.bench_function("fill_rect_clipped", |b| {
        canvas.set_clip(Rect::new(40, 40, 200, 120));
        b.iter(|| canvas.fill_rect(black_box(0), black_box(0), 320, 240, Rgb565::RED));
        canvas.clear_clip();
    });
    group.finish();
}

fn benchmark_shapes(c: &mut Criterion) {
    let mut fb = vec![0u16; usize::from(W) * usize::from(H)];
    let mut canvas = Canvas::new(MemoryDisplay::new(W, H), &mut fb);

    c.bench_function("rounded_rect_fill_100", |b| {
        b.iter(|| {
            for i in 0..100i16 {
                let r = Rect::new(i % 200, (i * 7) % 180, 100, 40);
                draw::rounded_rect_fill(&mut canvas, black_box(r), 6, Rgb565::ORANGE);
            }
        });
    });

    c.bench_function("gradient_button", |b| {
        let r = Rect::new(10, 10, 120, 30);
        b.iter(|| {
            draw::rounded_rect_gradient_v(&mut canvas, black_box(r), 4, Rgb565::CYAN, Rgb565::BLUE);
        });
    });

    c.bench_function("gauge_arc_r40", |b| {
        b.iter(|| draw::arc_fill(&mut canvas, 160, 120, black_box(40), 30, 135, 45, Rgb565::GREEN));
    });
}

fn benchmark_text(c: &mut Criterion) {
    let mut fb = vec![0u16; usize::from(W) * usize::from(H)];
    let mut canvas = Canvas::new(MemoryDisplay::new(W, H), &mut fb);
    let line = "The quick brown fox jumps over the lazy dog";

    let mut group = c.benchmark_group("text");
    for size in [1u8, 2, 3] {
        group.bench_function(format!("print_size_{size}"), |b| {
            b.iter(|| {
                canvas.set_text_size(size);
                canvas.set_cursor(0, 100);
                canvas.print(black_box(line));
            });
        });
    }
    group.finish();
}

fn benchmark_flush(c: &mut Criterion) {
    let mut fb = vec![0u16; usize::from(W) * usize::from(H)];
    let mut canvas = Canvas::new(MemoryDisplay::new(W, H), &mut fb);

    c.bench_function("flush_24_row_band", |b| {
        b.iter(|| {
            canvas.fill_rect(0, 100, 320, 24, Rgb565::GRAY);
            canvas.flush();
        });
    });
}

criterion_group!(
    benches,
    benchmark_fill_screen,
    benchmark_shapes,
    benchmark_text,
    benchmark_flush,
);
criterion_main!(benches);
