use std::process::exit;

use brainz_client::http::{Client, Paging};
use brainz_client::prelude::*;
use brainz_client::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG=brainz_client=debug shows the rendered queries and requests
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Expect a contact address for the User-Agent as the first argument,
    // and optionally a base URL for a mirror after it
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <contact> [base_url]", args[0]);
        exit(1);
    }

    let user_agent = format!("brainz-client-demo/0.1 ({})", args[1]);
    let client = match args.get(2) {
        Some(base_url) => Client::new(base_url),
        None => Client::musicbrainz(),
    }
    .with_user_agent(&user_agent);

    // Studio albums by an artist, without compilations or live records
    let mut albums = ReleaseGroupSearch::default();
    albums.artist("Jethro Tull");
    albums.primary_type(ReleaseGroupType::Album);
    let compilation = albums.secondary_type(ReleaseGroupType::Compilation);
    let live = albums.secondary_type(ReleaseGroupType::Live);
    let either = albums.or(compilation, live);
    albums.not(either);

    println!("Query: {}", albums);
    let page = client.search_with(&albums, Paging::new().limit(10))?;
    println!("{} release groups match, showing {}", page.count, page.items.len());
    for item in &page.items {
        println!(
            "  {} {}",
            item["first-release-date"].as_str().unwrap_or("????"),
            item["title"].as_str().unwrap_or_default()
        );
    }

    // Recordings close to a given duration, through the closure form
    let query = RecordingSearch::compose(|s| {
        s.recording("Locomotive Breath");
        s.duration_with(|t| t.inclusive(250_000, 290_000));
    });
    println!("Query: {}", query);
    let page = client.search(Entity::Recording, &query, Paging::new().limit(5))?;
    println!("{} recordings match", page.count);

    // An empty builder is refused before anything is sent
    match client.search_with(&ArtistSearch::default(), Paging::new()) {
        Err(err) => println!("Empty search: {}", err),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
