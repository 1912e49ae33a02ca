//! List the medias of one project.
//!
//! The project listing embeds its medias, so this is a single request no
//! matter how many medias there are (up to 500).
//!
//! Run with: WISTIA_API_TOKEN=... cargo run --example list_medias_in_project -- <project-id>

use wistia_rs::api::ListOptions;
use wistia_rs::{request_count, reset_request_count, WistiaClient};

fn main() -> wistia_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let project_id = std::env::args()
        .nth(1)
        .expect("usage: list_medias_in_project <project-id>");

    let client = WistiaClient::from_env();

    reset_request_count();
    let medias = client.projects().list_medias(&project_id, ListOptions::new())?;

    println!("Project {} has {} media(s):", project_id, medias.len());
    for media in medias.iter().filter(|m| m.is_video()) {
        let size = media.original_asset().map(|a| a.file_size).unwrap_or(0);
        println!("  - {} ({} bytes)", media, size);
    }
    println!("Requests made: {}", request_count());

    // Also available as JSON for piping into other tools
    if std::env::var("AS_JSON").is_ok() {
        println!("{}", medias.to_json_pretty().unwrap_or_default());
    }

    Ok(())
}
