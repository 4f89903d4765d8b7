use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use dehkhoda::{info_time, process::process_site, Config, Result};

/// Scrape the Dehkhoda dictionary listing into one csv file per page.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Listing address, `{page}` and `{per_page}` are substituted
    #[arg(long)]
    url: Option<String>,

    /// Total number of words in the dictionary
    #[arg(long)]
    word_count: Option<usize>,

    /// Words requested per page
    #[arg(long)]
    per_page: Option<usize>,

    /// Output directory, also scanned to resume
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Keep pages that come back with an error status instead of aborting
    #[arg(long)]
    allow_error_status: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let default = Config::default();
        Config {
            url_template: args.url.unwrap_or(default.url_template),
            word_count: args.word_count.unwrap_or(default.word_count),
            words_per_page: args.per_page.unwrap_or(default.words_per_page),
            words_path: args.out_dir.unwrap_or(default.words_path),
            check_status: !args.allow_error_status,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let config = Config::from(Args::parse());
    process_site(&config).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
