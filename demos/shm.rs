//! A block in simple harmonic motion, drawn in the 16-color palette.
//!
//! The greeting turns bright red while the block overlaps it.
//!
//! Run with: cargo run --example shm
//! Stop with Ctrl-C.

mod common;

use clap::Parser;
use std::f64::consts::PI;
use termanim::drawable::{block, intersection, text, Drawable, Style};
use termanim::{Named, NamedScreen, Player, PlayerConfig};

#[derive(Parser, Debug)]
#[command(about = "A block in simple harmonic motion")]
struct Args {
    /// Frames printed per second
    #[arg(long, default_value_t = 30.0)]
    fps: f64,
    /// Seconds per full swing
    #[arg(long, default_value_t = 10.0)]
    period: f64,
}

fn main() -> termanim::Result<()> {
    common::init_tracing();
    let args = Args::parse();
    let fps = args.fps;

    let screen = NamedScreen::fit_terminal()?;
    let columns = screen.columns() as i32;

    // Block size in lines and columns.
    let (width, height) = (10, 5);
    let delta = f64::from((columns - width).max(0));
    let omega = 2.0 * PI / args.period;

    let config = PlayerConfig {
        frame_rate: fps,
        clear_on_exit: false,
        ..PlayerConfig::default()
    };
    let mut player = Player::stdout(screen, config)?;
    player.play_with(|tick, screen| {
        let t = tick.frame as f64 / fps;
        let x = delta * (1.0 + (omega * t).sin()) / 2.0;
        let speed = delta * omega / fps * (omega * t).cos() / 2.0;
        let column = x.round() as i32;

        let body = block(
            ' ',
            0..height,
            column..column + width,
            Style::new().bg(Named::White),
        )
        .materialize();
        let mut hello = text(
            "Hello World!",
            height / 2,
            (columns - 12) / 2,
            Style::new().bold(),
        )
        .materialize();

        let overlap = intersection([&body, &hello]);
        if !overlap.is_empty() {
            hello = hello.with_fg(Some(Named::BrightRed));
        }

        let indicator = format!("Box has x coordinate {x:.2} and speed {speed:.2}");
        let summary = format!("Text and box intersect at {} cells", overlap.len());

        // Later shapes land on top: the greeting is drawn over the block.
        screen.draw_shape(&body);
        screen.draw_shape(&hello);
        screen.draw_many([
            text(&indicator, height + 1, 0, Style::new()),
            text(&summary, height + 2, 0, Style::new()),
        ]);
        true
    })?;
    Ok(())
}
