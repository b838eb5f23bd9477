//! Translucent boxes fading in and drifting across a wrapping screen, under
//! a pulsing greeting.
//!
//! Run with: cargo run --example blocks -- --boxes 12
//! Stop with Ctrl-C.

mod common;

use clap::Parser;
use rand::Rng;
use std::f32::consts::PI;
use termanim::drawable::{block, text, Drawable, Style};
use termanim::effect::{AlphaFade, Chain, Drift, Forever, Repeat, Scene, Static};
use termanim::{Player, PlayerConfig, Rgb, RgbScreen, Shape};

#[derive(Parser, Debug)]
#[command(about = "Animations with Rust in the terminal")]
struct Args {
    /// Foreground colour, e.g. 000000 for black, ffffff for white
    #[arg(long, default_value = "ffffff")]
    fg: Rgb,
    /// Background colour
    #[arg(long, default_value = "000000")]
    bg: Rgb,
    /// Frames printed per second
    #[arg(long, default_value_t = 30.0)]
    fps: f64,
    /// Number of boxes
    #[arg(short = 'n', long, default_value_t = 8)]
    boxes: usize,
    /// Opacity of boxes, between 0.0 and 1.0
    #[arg(long, default_value_t = 0.9)]
    box_alpha: f32,
    /// Do not put gradients on the boxes
    #[arg(long)]
    no_grad: bool,
}

fn random_rgb(rng: &mut impl Rng) -> Rgb {
    Rgb::from((rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>()))
}

fn random_sign(rng: &mut impl Rng) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// An invisible box somewhere on a `lines × columns` screen.
fn random_box(rng: &mut impl Rng, lines: usize, columns: usize) -> Shape<Rgb> {
    let size = rng.gen_range(4..=6);
    let (height, width) = (size, 2 * size + 1);
    let row = rng.gen_range(0..=lines.saturating_sub(5)) as i32;
    let col = rng.gen_range(0..=columns.saturating_sub(10)) as i32;
    block(
        ' ',
        0..height,
        0..width,
        Style::new().bg(random_rgb(rng)).alpha(0.0),
    )
    .translate(row, col)
    .materialize()
}

/// Rows or columns per second, along one axis only.
fn random_velocity(rng: &mut impl Rng) -> (f64, f64) {
    let speed = f64::from(rng.gen_range(5..=15_i32)) * random_sign(rng);
    if rng.gen_bool(0.5) {
        (0.5 * speed, 0.0)
    } else {
        (0.0, speed)
    }
}

/// Wait `delay` seconds, fade in to `alpha`, then hold, drifting throughout.
fn fade_in_move(
    fps: f64,
    alpha: f32,
    delay: f64,
    velocity: (f64, f64),
) -> Drift<Chain<'static, Rgb>> {
    let fade_in = Chain::new()
        .then(Static::new(fps, delay))
        .then(AlphaFade::new(fps, 1.0).to(alpha))
        .then(Forever);
    Drift::new(fade_in, fps, velocity)
}

fn main() -> termanim::Result<()> {
    common::init_tracing();
    let args = Args::parse();
    let fps = args.fps;
    let box_alpha = args.box_alpha.clamp(0.0, 1.0);
    let mut rng = rand::thread_rng();

    let screen = RgbScreen::fit_terminal()?
        .with_wrap(true)
        .with_background(args.bg);
    let (lines, columns) = (screen.lines(), screen.columns());

    let mut boxes: Vec<_> = (0..args.boxes)
        .map(|_| random_box(&mut rng, lines, columns))
        .collect();
    if !args.no_grad {
        boxes = boxes
            .into_iter()
            .map(|shape| {
                shape.gradient(None, Some(random_rgb(&mut rng)), |y, x| {
                    0.7 / ((1.0 - x).powi(2) + (1.0 - y).powi(2) + 1.0)
                })
            })
            .collect();
    }
    let effects: Vec<_> = boxes
        .iter()
        .map(|_| {
            let delay = 6.0 * rng.gen::<f64>();
            fade_in_move(fps, box_alpha, delay, random_velocity(&mut rng))
        })
        .collect();

    let greeting = "Hello World!";
    let hello = text(
        greeting,
        (lines / 2) as i32 - 1,
        columns.saturating_sub(greeting.len()) as i32 / 2,
        Style::new().fg(args.fg),
    )
    .materialize();
    let pulse = AlphaFade::new(fps, 2.0)
        .with_curve(|t| 0.5 + 0.5 * (1.0 + (2.0 * PI * t).cos()) * 0.5);
    let fade_pulse = Chain::new()
        .then(AlphaFade::new(fps, 1.0))
        .then(Repeat::new(pulse));

    let mut scene = Scene::new();
    for (effect, shape) in effects.iter().zip(boxes) {
        scene = scene.animate(effect, shape);
    }
    let scene = scene.animate(&fade_pulse, hello);

    let config = PlayerConfig {
        frame_rate: fps,
        ..PlayerConfig::default()
    };
    let mut player = Player::stdout(screen, config)?;
    let stats = player.play(scene)?;
    tracing::info!(frames = stats.frames, bytes = stats.bytes, "blocks finished");
    Ok(())
}
