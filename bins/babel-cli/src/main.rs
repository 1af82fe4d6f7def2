//! Library of Babel - command-line interface

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use babel_core::{Library, Location};
use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Run the appropriate command
    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let library = Library::new();

    match cli.command {
        Command::Search {
            text,
            offset,
            limit,
            stream,
        } => {
            if stream {
                search_stream(&library, &text, limit).await?;
            } else {
                search_paginated(&library, &text, offset, limit)?;
            }
        }
        Command::Browse { address } => {
            let location = Location::parse(&address)
                .with_context(|| format!("invalid address: {address}"))?;
            let content = library.browse(&location)?;
            output::print_page(&location, &content);
        }
        Command::Count { text } => {
            println!("{}", library.occurrence_count(&text));
        }
        Command::Random => {
            let location = Location::random();
            let content = library.browse(&location)?;
            output::print_page(&location, &content);
        }
        Command::Serve { host, port, config } => {
            serve(host, port, config).await?;
        }
    }

    Ok(())
}

/// Paginated search: stable variant order, page-through friendly
fn search_paginated(library: &Library, text: &str, offset: i64, limit: i64) -> Result<()> {
    let locations = library
        .search_paginated(text, offset, limit)
        .with_context(|| format!("search failed for {text:?}"))?;

    output::print_locations(&locations, offset);
    output::print_search_summary(library, text, locations.len());
    Ok(())
}

/// Streaming search: unordered, prints hits as the workers find them
async fn search_stream(library: &Library, text: &str, limit: i64) -> Result<()> {
    let mut results = library
        .search_stream(text)
        .await
        .with_context(|| format!("search failed for {text:?}"))?;

    let mut shown = 0usize;
    while shown < limit.max(0) as usize {
        let Some(location) = results.recv().await else {
            break;
        };
        shown += 1;
        println!("{:>4}. {location}", shown);
    }

    output::print_search_summary(library, text, shown);
    Ok(())
}

/// Run the HTTP JSON API server
async fn serve(host: Option<String>, port: Option<u16>, config: Option<std::path::PathBuf>) -> Result<()> {
    let mut config = match config {
        Some(path) => babel_web::Config::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => babel_web::Config::default(),
    };
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    babel_web::run(config).await.context("server failed")?;
    Ok(())
}
