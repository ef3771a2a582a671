use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use trakzapp::model::{Category, Status};
use trakzapp::query::SortKey;

#[derive(Parser, Debug)]
#[command(
    name = "trakz",
    bin_name = "trakz",
    version,
    about = "Track movies, anime, books and videos from the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the data directory (also: TRAKZ_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a category view
    List {
        category: CategoryArg,
        /// Status tab to show (defaults to the category's usual tab)
        #[arg(long, value_enum)]
        tab: Option<StatusArg>,
        /// Show every item regardless of tab
        #[arg(long)]
        all: bool,
        /// Match against title, memo and tags
        #[arg(short, long)]
        search: Option<String>,
        /// Only items carrying this exact tag
        #[arg(long)]
        tag: Option<String>,
        #[arg(long, value_enum, default_value = "date_desc")]
        sort: SortArg,
    },
    /// Add an item
    Add {
        category: CategoryArg,
        title: String,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        /// 0.5 to 5 in half-star steps
        #[arg(long)]
        rating: Option<f32>,
        /// Date watched / finished (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,
        #[arg(long)]
        memo: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long, value_name = "URL")]
        cover: Option<String>,
        /// Channel name (videos only)
        #[arg(long)]
        channel: Option<String>,
    },
    /// Edit an item's fields
    Edit {
        category: CategoryArg,
        /// Display index or title substring
        selector: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(long)]
        rating: Option<f32>,
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
        #[arg(long = "add-tag", value_name = "TAG")]
        add_tags: Vec<String>,
        #[arg(long = "remove-tag", value_name = "TAG")]
        remove_tags: Vec<String>,
        /// Pass an empty string to clear
        #[arg(long)]
        memo: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long, value_name = "URL")]
        cover: Option<String>,
        #[arg(long)]
        channel: Option<String>,
    },
    /// Mark an item watched / completed
    Done {
        category: CategoryArg,
        selector: String,
    },
    /// Mark an item as currently watching / reading
    Start {
        category: CategoryArg,
        selector: String,
    },
    /// Delete an item (this cannot be undone)
    Delete {
        category: CategoryArg,
        selector: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show a category's tags, most used first
    Tags { category: CategoryArg },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CategoryArg {
    Movie,
    Anime,
    Book,
    Video,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Movie => Category::Movie,
            CategoryArg::Anime => Category::Anime,
            CategoryArg::Book => Category::Book,
            CategoryArg::Video => Category::Video,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum StatusArg {
    WantToWatch,
    Watching,
    Watched,
    WantToRead,
    Reading,
    Completed,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::WantToWatch => Status::WantToWatch,
            StatusArg::Watching => Status::Watching,
            StatusArg::Watched => Status::Watched,
            StatusArg::WantToRead => Status::WantToRead,
            StatusArg::Reading => Status::Reading,
            StatusArg::Completed => Status::Completed,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SortArg {
    DateDesc,
    DateAsc,
    RatingDesc,
    RatingAsc,
    TitleAsc,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::DateDesc => SortKey::DateDesc,
            SortArg::DateAsc => SortKey::DateAsc,
            SortArg::RatingDesc => SortKey::RatingDesc,
            SortArg::RatingAsc => SortKey::RatingAsc,
            SortArg::TitleAsc => SortKey::TitleAsc,
        }
    }
}
