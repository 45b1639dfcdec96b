pub mod download;
pub mod storage;
pub mod time;

pub use download::trigger_csv_download;
