//! A gradient box under a translucent slider and a pulsing greeting, in
//! true color.
//!
//! Run with: cargo run --example shm_rgb
//! Stop with Ctrl-C.

mod common;

use clap::Parser;
use std::f64::consts::PI;
use termanim::drawable::{block, text, Drawable, Style};
use termanim::{Player, PlayerConfig, Rgb, RgbScreen};

#[derive(Parser, Debug)]
#[command(about = "Gradients and translucency in true color")]
struct Args {
    /// Frames printed per second
    #[arg(long, default_value_t = 30.0)]
    fps: f64,
    /// Seconds per pulse of the greeting
    #[arg(long, default_value_t = 2.0)]
    period: f64,
}

fn main() -> termanim::Result<()> {
    common::init_tracing();
    let args = Args::parse();
    let fps = args.fps;

    let screen = RgbScreen::fit_terminal()?;
    let (lines, columns) = (screen.lines() as i32, screen.columns() as i32);

    let size = ((columns / 2).min(lines) - 10).max(1);
    let (width, height) = (size * 2 + 1, size);
    let backdrop = block(
        ' ',
        (lines - height) / 2..(lines + height) / 2,
        (columns - width) / 2..(columns + width) / 2,
        Style::new().bg(Rgb::RED),
    )
    .materialize()
    .gradient_right(None, Some(Rgb::BLUE), 1.0)
    .gradient_down(None, Some(Rgb::GREEN), 0.8);

    let hello = text(
        "Hello World!",
        lines / 2 - 1,
        (columns - 12) / 2,
        Style::new().fg(Rgb::WHITE),
    )
    .materialize();

    let (slider_width, slider_height) = (10, 5);
    let slider = block(
        ' ',
        (lines - slider_height) / 2..(lines + slider_height) / 2,
        0..slider_width,
        Style::new().bg(Rgb::new(128.0, 128.0, 255.0)).alpha(0.5),
    )
    .materialize();

    let omega = 2.0 * PI / args.period;
    let config = PlayerConfig {
        frame_rate: fps,
        clear_on_exit: false,
        ..PlayerConfig::default()
    };
    let mut player = Player::stdout(screen, config)?;
    player.play_with(|tick, screen| {
        let t = tick.frame as f64 / fps;
        let alpha = (2.0 + (omega * t).cos()) / 3.0;
        let x = f64::from(columns - slider_width) * (1.0 - (omega / 5.0 * t).sin()) / 2.0;

        screen.draw_shape(&backdrop);
        screen.draw_shape(&slider.translate(0, x.round() as i32));
        screen.draw_shape(&hello.with_alpha(alpha as f32));
        screen.draw_many([text(&format!("{x:.2}"), 0, 0, Style::new().fg(Rgb::WHITE))]);
        true
    })?;
    Ok(())
}
