use anyhow::Context;
use booksearch::cli::{Cli, Commands};
use booksearch::results::{format_result_item, render_results, results_header};
use booksearch::search::{BoolMode, SearchIndex, SearchOptions, parse_query};
use booksearch::stem::english_stemmer;
use booksearch::teaser::build_teaser;
use clap::Parser;

fn main() -> booksearch::error::Result<()> {
    booksearch::tracing::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            index,
            limit,
            any,
            html,
        } => {
            let index = SearchIndex::load(&index)?;
            let stemmer = english_stemmer();

            let options = SearchOptions {
                bool_mode: if any { BoolMode::Or } else { BoolMode::And },
                ..SearchOptions::default()
            };

            let hits = index.search(&query, &options, &stemmer);
            let terms = parse_query(&query);

            if html {
                println!("{}", render_results(&hits, &query, &terms, &stemmer, limit));
            } else {
                // The header counts every hit; only the listing is capped.
                println!("{}", results_header(hits.len(), &query));
                for hit in hits.iter().take(limit) {
                    let item = format_result_item(hit, &terms, &stemmer);
                    println!("{} ({})", item.title, item.reference);
                    println!("  {}", item.teaser);
                }
            }
        }
        Commands::Teaser { body, terms } => {
            let text = std::fs::read_to_string(&body)
                .with_context(|| format!("failed to read body from {}", body.display()))?;
            println!("{}", build_teaser(&text, &terms, &english_stemmer()));
        }
    }

    Ok(())
}
