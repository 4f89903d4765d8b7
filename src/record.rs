use serde::{Deserialize, Serialize};

/// One dictionary entry as listed on a page.
/// Field order is the column order of the output files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub num: u64,
    pub word: String,
    pub summary: String,
}
