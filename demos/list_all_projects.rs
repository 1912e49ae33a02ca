//! List every project in the account.
//!
//! Pages through the whole listing and reports how many API calls that took.
//!
//! Run with: WISTIA_API_TOKEN=... cargo run --example list_all_projects

use wistia_rs::api::ListOptions;
use wistia_rs::models::{SortBy, SortDirection};
use wistia_rs::{request_count, reset_request_count, WistiaClient};

fn main() -> wistia_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client = WistiaClient::from_env();

    reset_request_count();
    let options = ListOptions::new().with_sort(SortBy::Name, SortDirection::Ascending);
    let projects = client.projects().list(options)?;

    println!("Found {} project(s) in {} request(s):", projects.len(), request_count());
    for project in &projects {
        println!("  - {}", project);
    }

    Ok(())
}
