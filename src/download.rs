// src/download.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::info;

use crate::columns::{self, ColumnFlags};
use crate::fetch;
use crate::query;
use crate::table::Table;

/// Default file name of the confirmed-planets export. Caller-overridable.
pub static CONFIRMED_PLANETS_FILE: &str = "exoplanetas.csv";

/// Fixed file name of the references export.
pub static REFERENCES_FILE: &str = "referencias.csv";

static REFERENCES_NAME_COLUMN: &str = "pl_name";
static REFLINK_SUFFIX: &str = "reflink";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("fetching from the archive: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("reading or writing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("expected column {0:?} missing from the archive response")]
    MissingColumn(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What a download operation did. Skipping an existing file is a normal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    SkippedExisting(PathBuf),
}

/// Downloads exoplanet catalog CSVs from the NASA Exoplanet Archive into
/// `output_dir`. Configuration is fixed at construction; each download is a
/// single blocking fetch → filter → write sequence.
pub struct ExoplanetDownloader {
    client: Client,
    output_dir: PathBuf,
    overwrite: bool,
}

impl ExoplanetDownloader {
    /// Create a downloader writing into `output_dir`, creating the directory
    /// if needed. With `overwrite` false, downloads whose target file
    /// already exists are skipped.
    pub fn new(output_dir: impl Into<PathBuf>, overwrite: bool) -> Result<Self, DownloadError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            client: Client::new(),
            output_dir,
            overwrite,
        })
    }

    /// Fetch every confirmed planet's default parameter set, drop the column
    /// groups not selected by `flags`, and write the result to
    /// `{output_dir}/{file_name}`.
    ///
    /// The overwrite gate runs before the fetch: an existing target file
    /// with overwrite off means no network traffic at all.
    pub fn download_confirmed_planets(
        &self,
        flags: &ColumnFlags,
        file_name: &str,
    ) -> Result<Outcome, DownloadError> {
        let target = self.output_dir.join(file_name);
        if let Some(skipped) = self.skip_existing(&target) {
            return Ok(skipped);
        }

        let body = fetch::fetch_csv(&self.client, &query::confirmed_planets_url())?;
        let table = Table::from_csv(&body)?;
        let filtered = filter_confirmed_planets(&table, flags);
        self.write(&filtered, target)
    }

    /// Fetch the PSCompPars table and write only the planet-name column plus
    /// every `*reflink` column to `{output_dir}/referencias.csv`.
    pub fn download_references(&self) -> Result<Outcome, DownloadError> {
        let target = self.output_dir.join(REFERENCES_FILE);
        if let Some(skipped) = self.skip_existing(&target) {
            return Ok(skipped);
        }

        let body = fetch::fetch_csv(&self.client, &query::composite_parameters_url())?;
        let table = Table::from_csv(&body)?;
        let references = select_references(&table)?;
        self.write(&references, target)
    }

    fn skip_existing(&self, target: &Path) -> Option<Outcome> {
        if !self.overwrite && target.exists() {
            info!(path = %target.display(), "target exists and overwrite is off; skipping");
            return Some(Outcome::SkippedExisting(target.to_path_buf()));
        }
        None
    }

    fn write(&self, table: &Table, target: PathBuf) -> Result<Outcome, DownloadError> {
        table.write_csv(&target)?;
        info!(path = %target.display(), rows = table.n_rows(), "saved");
        Ok(Outcome::Written(target))
    }
}

/// Apply the flag-driven drop set to a confirmed-planets table. Pure; the
/// input table is not modified.
pub fn filter_confirmed_planets(table: &Table, flags: &ColumnFlags) -> Table {
    let drops = columns::drop_set(flags);
    table.filter_columns(|name| !drops.matches(name))
}

/// Reduce a PSCompPars table to the planet-name column plus every column
/// ending in `reflink`, preserving column order. The name column must be
/// present; reflink columns are whatever the response happens to carry.
pub fn select_references(table: &Table) -> Result<Table, DownloadError> {
    if !table.headers().iter().any(|h| h == REFERENCES_NAME_COLUMN) {
        return Err(DownloadError::MissingColumn(
            REFERENCES_NAME_COLUMN.to_string(),
        ));
    }
    Ok(table
        .filter_columns(|name| name == REFERENCES_NAME_COLUMN || name.ends_with(REFLINK_SUFFIX)))
}
