use std::path::{Path, PathBuf};

use crate::{FILE_PREFIX, FILE_SUFFIX, PAGE_URL, WORDS_PATH, WORDS_PER_PAGE, WORD_COUNT};

/// Everything a run needs to know. `Default` gives the real site.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listing address with `{page}` and `{per_page}` placeholders.
    pub url_template: String,
    pub word_count: usize,
    pub words_per_page: usize,
    /// Directory the csv files are written to and resumed from.
    pub words_path: PathBuf,
    /// Reject pages that come back with a non-success HTTP status.
    pub check_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url_template: PAGE_URL.to_string(),
            word_count: WORD_COUNT,
            words_per_page: WORDS_PER_PAGE,
            words_path: PathBuf::from(WORDS_PATH),
            check_status: true,
        }
    }
}

impl Config {
    /// Number of listing pages, `floor(word_count / words_per_page) + 1`.
    ///
    /// The site always has a trailing page, so this is not a ceiling division.
    pub fn page_count(&self) -> usize {
        self.word_count / self.words_per_page.max(1) + 1
    }

    /// Width the page number is zero-padded to in file names.
    pub fn fill(&self) -> usize {
        digit_count(self.page_count())
    }

    pub fn page_url(&self, page_num: usize) -> String {
        self.url_template
            .replace("{page}", &page_num.to_string())
            .replace("{per_page}", &self.words_per_page.to_string())
    }
}

/// `<dir>/words-<page_num padded to fill>.csv`
pub fn page_path(dir: &Path, page_num: usize, fill: usize) -> PathBuf {
    dir.join(format!("{FILE_PREFIX}{page_num:0fill$}{FILE_SUFFIX}"))
}

#[inline]
fn digit_count(n: usize) -> usize {
    n.checked_ilog10().unwrap_or(0) as usize + 1
}
