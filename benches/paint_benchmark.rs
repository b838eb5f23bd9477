//! Paint benchmark: Measure draw + render cost per frame.
//!
//! Target: < 500µs for a fully dirty 200×50 screen

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use termanim::buffer::diff::render_dirty;
use termanim::drawable::{block, text, Drawable, Style};
use termanim::terminal::OutputBuffer;
use termanim::{Rgb, RgbScreen, Shape};

/// A screen-sized block with a different color in every cell.
fn create_test_shape(width: i32, height: i32, seed: i32) -> Shape<Rgb> {
    block(' ', 0..height, 0..width, Style::new().bg(Rgb::new(20.0, 20.0, 30.0)))
        .map(|mut cell| {
            cell.ch = char::from(b'A' + ((cell.row + cell.col + seed) % 26) as u8);
            cell.fg = Some(Rgb::new(
                ((cell.col * 3 + seed) % 256) as f32,
                ((cell.row * 7 + seed) % 256) as f32,
                ((cell.row + cell.col + seed) % 256) as f32,
            ));
            cell
        })
        .materialize()
}

/// A screen whose first full-screen flush is already out of the way.
fn settled_screen(width: usize, height: usize) -> RgbScreen {
    let mut screen = RgbScreen::new(height, width).with_background(Rgb::BLACK);
    screen.paint(&mut std::io::sink()).unwrap();
    screen.paint(&mut std::io::sink()).unwrap();
    screen
}

fn paint_idle(c: &mut Criterion) {
    let mut screen = settled_screen(200, 50);

    c.bench_function("paint_200x50_idle", |b| {
        b.iter(|| screen.paint(black_box(&mut std::io::sink())).unwrap())
    });
}

fn paint_text_line(c: &mut Criterion) {
    let mut screen = settled_screen(200, 50);
    let hello = text("Hello World!", 25, 94, Style::new().fg(Rgb::WHITE)).materialize();

    c.bench_function("paint_200x50_text", |b| {
        b.iter(|| {
            screen.draw_shape(black_box(&hello));
            screen.paint(&mut std::io::sink()).unwrap()
        })
    });
}

fn paint_full_screen(c: &mut Criterion) {
    let mut screen = settled_screen(200, 50);
    let shape = create_test_shape(200, 50, 0);

    c.bench_function("paint_200x50_full", |b| {
        b.iter(|| {
            screen.draw_shape(black_box(&shape));
            screen.paint(&mut std::io::sink()).unwrap()
        })
    });
}

fn render_full_screen(c: &mut Criterion) {
    let mut screen = settled_screen(200, 50);
    screen.draw_shape(&create_test_shape(200, 50, 0));

    c.bench_function("render_200x50_full", |b| {
        b.iter(|| {
            let mut output = OutputBuffer::with_capacity(65536);
            render_dirty(black_box(&screen), &mut output)
        })
    });
}

fn paint_various_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_by_size");

    for (width, height) in [(80, 24), (120, 40), (200, 50), (300, 80)] {
        let shape = create_test_shape(width, height, 1);
        let mut screen = settled_screen(width as usize, height as usize);

        group.bench_with_input(
            BenchmarkId::new("full_change", format!("{width}x{height}")),
            &shape,
            |b, shape| {
                b.iter(|| {
                    screen.draw_shape(black_box(shape));
                    screen.paint(&mut std::io::sink()).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    paint_idle,
    paint_text_line,
    paint_full_screen,
    render_full_screen,
    paint_various_sizes,
);
criterion_main!(benches);
