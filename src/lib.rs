pub mod columns;
pub mod download;
pub mod fetch;
pub mod query;
pub mod table;

pub use columns::ColumnFlags;
pub use download::{DownloadError, ExoplanetDownloader, Outcome};
