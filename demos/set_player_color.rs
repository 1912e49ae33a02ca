//! Change the player color of a video and hide its comments.
//!
//! Run with: WISTIA_API_TOKEN=... cargo run --example set_player_color -- <video-id> [color]

use wistia_rs::models::{Customizations, Private};
use wistia_rs::WistiaClient;

fn main() -> wistia_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let video_id = args.next().expect("usage: set_player_color <video-id> [color]");
    let color = args.next().unwrap_or_else(|| "#e7fad1".to_string());

    let client = WistiaClient::from_env();

    let before = client.customizations().get(&video_id)?;
    println!("Current player color: {}", before.player_color.as_deref().unwrap_or("(default)"));

    let patch = Customizations::new()
        .with_player_color(color)
        .with_private(Private::new().with_show_comments(false));
    let after = client.customizations().update(&video_id, &patch)?;

    println!("New player color: {}", after.player_color.as_deref().unwrap_or("(default)"));

    Ok(())
}
