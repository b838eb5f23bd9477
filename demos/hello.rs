//! Two lines of text fading in, changing color and fading out again.
//!
//! Run with: cargo run --example hello

mod common;

use clap::Parser;
use termanim::drawable::{text, Drawable, Style};
use termanim::effect::{AlphaFade, Chain, ColorFade, Scene, Static};
use termanim::{Player, PlayerConfig, Rgb, RgbScreen};

#[derive(Parser, Debug)]
#[command(about = "Chained fades on two lines of text")]
struct Args {
    /// Frames printed per second
    #[arg(long, default_value_t = 30.0)]
    fps: f64,
}

fn main() -> termanim::Result<()> {
    common::init_tracing();
    let args = Args::parse();
    let fps = args.fps;

    let hello = text("Hello World!", 2, 4, Style::new().fg(Rgb::WHITE)).materialize();
    let caption = text(
        "This is animation",
        4,
        8,
        Style::new().fg(Rgb::WHITE).alpha(0.0),
    )
    .materialize();

    let fade_fg = Chain::new()
        .then(AlphaFade::new(fps, 1.0))
        .then(ColorFade::<Rgb>::fg(fps, 1.0, Rgb::WHITE, Rgb::new(255.0, 128.0, 0.0)))
        .then(Static::new(fps, 1.0))
        .then(AlphaFade::new(fps, 1.5).from(1.0).to(0.0))
        .then(Static::new(fps, 1.0));
    let fade_bg = Chain::new()
        .then(Static::new(fps, 0.5))
        .then(AlphaFade::new(fps, 1.0))
        .then(ColorFade::<Rgb>::bg(fps, 1.0, Rgb::BLACK, Rgb::new(0.0, 128.0, 255.0)))
        .then(Static::new(fps, 0.5))
        .then(AlphaFade::new(fps, 1.5).from(1.0).to(0.0))
        .then(Static::new(fps, 0.5));

    let scene = Scene::new()
        .animate(&fade_fg, hello)
        .animate(&fade_bg, caption);

    let config = PlayerConfig {
        frame_rate: fps,
        ..PlayerConfig::default()
    };
    let mut player = Player::stdout(RgbScreen::new(8, 32), config)?;
    let stats = player.play(scene)?;
    tracing::info!(frames = stats.frames, bytes = stats.bytes, "hello finished");
    Ok(())
}
