//! Resumable scraper for the Dehkhoda dictionary listing.
//!
//! Every listing page is fetched, its word table is turned into [`Record`]s and
//! the records are written to `words-<page>.csv`. On the next run scraping
//! continues after the highest page already on disk.

pub mod config;
mod error;
mod macros;
pub mod parse;
pub mod process;
mod record;
pub mod request;
pub mod store;
pub mod text;

pub use config::Config;
pub use error::{Error, Result};
pub use record::Record;

const PAGE_URL: &str = "https://dehkhoda.ut.ac.ir/fa/dictionary?page={page}&per-page={per_page}";
const WORD_COUNT: usize = 343_318;
const WORDS_PER_PAGE: usize = 30;
const WORDS_PATH: &str = "dehkhoda/words/";

const FILE_PREFIX: &str = "words-";
const FILE_SUFFIX: &str = ".csv";
