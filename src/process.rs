use reqwest::Client;
use tokio::fs;

use crate::parse::parse_page;
use crate::request::fetch_page;
use crate::store::{next_page, write_page};
use crate::{info_time, Config, Result};

/// Scrapes every page not yet on disk, one after another.
///
/// Resumes after the highest page file in `config.words_path`. The first
/// error stops the run; pages written before it stay on disk for the next
/// run to pick up. Returns the number of pages processed.
pub async fn process_site(config: &Config) -> Result<usize> {
    let client = Client::new();
    let page_count = config.page_count();
    let fill = config.fill();

    fs::create_dir_all(&config.words_path).await?;
    let start_page = next_page(&config.words_path).await;

    let mut done = 0;
    for page_num in start_page..=page_count {
        let html = fetch_page(&client, config, page_num).await?;
        let records = parse_page(html).await?;
        write_page(&config.words_path, page_num, fill, &records).await?;

        info_time!("Page {page_num} is done");
        done += 1;
    }

    info_time!("Done");
    Ok(done)
}
