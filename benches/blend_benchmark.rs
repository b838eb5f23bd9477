//! Blend benchmark: Measure color mixing and alpha-blended draws.
//!
//! Target: < 5ns per mix

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use termanim::buffer::mix;
use termanim::drawable::{block, Drawable, Style};
use termanim::{Named, NamedScreen, Rgb, RgbScreen};

fn mix_present(c: &mut Criterion) {
    let base = Some(Rgb::new(255.0, 128.0, 64.0));
    let top = Some(Rgb::new(32.0, 32.0, 32.0));

    c.bench_function("mix_rgb_present", |b| {
        b.iter(|| mix(black_box(base), black_box(top), black_box(0.35)))
    });
}

fn mix_absent(c: &mut Criterion) {
    let base = Some(Rgb::new(255.0, 128.0, 64.0));

    c.bench_function("mix_rgb_absent_top", |b| {
        b.iter(|| mix(black_box(base), black_box(None), black_box(0.35)))
    });
}

fn gradient_box(c: &mut Criterion) {
    let shape = block(' ', 0..20, 0..41, Style::new().bg(Rgb::RED)).materialize();

    c.bench_function("gradient_20x41", |b| {
        b.iter(|| {
            black_box(&shape)
                .gradient_right(None, Some(Rgb::BLUE), 1.0)
                .gradient_down(None, Some(Rgb::GREEN), 0.8)
        })
    });
}

fn draw_translucent_rgb(c: &mut Criterion) {
    let mut screen = RgbScreen::new(50, 200).with_background(Rgb::BLACK);
    let shape = block(
        ' ',
        0..50,
        0..200,
        Style::new().bg(Rgb::new(128.0, 128.0, 255.0)).alpha(0.5),
    )
    .materialize();

    c.bench_function("draw_rgb_200x50_alpha", |b| {
        b.iter(|| screen.draw_shape(black_box(&shape)))
    });
}

fn draw_named(c: &mut Criterion) {
    let mut screen = NamedScreen::new(50, 200);
    let shape = block('#', 0..50, 0..200, Style::new().fg(Named::BrightRed)).materialize();

    c.bench_function("draw_named_200x50", |b| {
        b.iter(|| screen.draw_shape(black_box(&shape)))
    });
}

criterion_group!(
    benches,
    mix_present,
    mix_absent,
    gradient_box,
    draw_translucent_rgb,
    draw_named,
);
criterion_main!(benches);
