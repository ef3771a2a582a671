use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trakzapp::api::{AddOptions, EditOptions, ListOptions, MarkAction, TrakzApi};
use trakzapp::config::TrakzConfig;
use trakzapp::store::fs::FsBackend;

use super::render;
use super::setup::{Cli, Commands};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = TrakzConfig::load();
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    let mut api = TrakzApi::open(FsBackend::new(data_dir));

    let result = match cli.command {
        Commands::List {
            category,
            tab,
            all,
            search,
            tag,
            sort,
        } => {
            let options = ListOptions {
                tab: tab.map(Into::into),
                all,
                search,
                tag,
                sort: sort.into(),
            };
            api.list(category.into(), &options, config.top_tags)?
        }
        Commands::Add {
            category,
            title,
            status,
            rating,
            date,
            tags,
            memo,
            url,
            cover,
            channel,
        } => {
            let options = AddOptions {
                title,
                status: status.map(Into::into),
                rating,
                date_watched: date,
                tags,
                memo,
                url,
                cover_url: cover,
                channel_name: channel,
            };
            api.add(category.into(), options)?
        }
        Commands::Edit {
            category,
            selector,
            title,
            status,
            rating,
            date,
            add_tags,
            remove_tags,
            memo,
            url,
            cover,
            channel,
        } => {
            let options = EditOptions {
                title,
                status: status.map(Into::into),
                rating,
                date_watched: date,
                add_tags,
                remove_tags,
                memo,
                url,
                cover_url: cover,
                channel_name: channel,
            };
            api.edit(category.into(), &selector, options)?
        }
        Commands::Done { category, selector } => {
            api.mark(category.into(), &selector, MarkAction::Done)?
        }
        Commands::Start { category, selector } => {
            api.mark(category.into(), &selector, MarkAction::Start)?
        }
        Commands::Delete {
            category,
            selector,
            yes,
        } => {
            if !yes && !confirm(&format!("Delete \"{}\"? This cannot be undone.", selector)) {
                println!("Aborted.");
                return Ok(());
            }
            api.remove(category.into(), &selector)?
        }
        Commands::Tags { category } => api.tags(category.into())?,
    };

    render::print_result(&result);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().ok();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}
