use reqwest::Client;

use crate::{Config, Error, Result};

/// Requests a listing page and returns a `Result<String>` containing the HTML.
///
/// With `config.check_status` off the body is returned whatever the status,
/// so an error page only fails later when its table can't be found.
pub async fn fetch_page(client: &Client, config: &Config, page_num: usize) -> Result<String> {
    let res = client.get(config.page_url(page_num)).send().await?;

    let status = res.status();
    if config.check_status && !status.is_success() {
        return Err(Error::HttpStatus {
            page: page_num,
            status,
        });
    }

    let html = res.text().await?;
    Ok(html)
}
