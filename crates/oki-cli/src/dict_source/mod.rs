//! Dictionary ETL: TSV exports of the printed dictionary → JSON records.

mod o2y;
mod y2o;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use oki_engine::ConvertError;
use serde::Serialize;
use tracing::{debug_span, info, warn};

pub use o2y::{OkiToYamato, OkiToYamatoRecord};
pub use y2o::{parse_contents, split_related_words, Translations, YamatoToOki, YamatoToOkiRecord};

/// One direction of the dictionary, turning a TSV row into a JSON record.
pub trait DictSource {
    type Record: Serialize;

    fn convert_row(&self, row: &Row<'_>) -> Result<Self::Record, DictSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing column: {0:?}")]
    MissingColumn(String),

    #[error("cannot convert headword {headword:?}: {source}")]
    Convert {
        headword: String,
        #[source]
        source: ConvertError,
    },

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<DictSourceError>,
    },
}

impl DictSourceError {
    fn is_conversion(&self) -> bool {
        matches!(self, DictSourceError::Convert { .. })
    }
}

/// A TSV row addressed by header name.
pub struct Row<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    pub fn new(headers: &'a StringRecord, record: &'a StringRecord) -> Self {
        Self { headers, record }
    }

    pub fn get(&self, column: &str) -> Result<&'a str, DictSourceError> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| DictSourceError::MissingColumn(column.to_string()))?;
        // Short rows read as empty cells.
        Ok(self.record.get(idx).unwrap_or(""))
    }
}

#[derive(Serialize)]
struct Numbered<'a, R> {
    id: usize,
    #[serde(flatten)]
    record: &'a R,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub written: usize,
    pub skipped: usize,
}

/// Default output path: the input path with a `.json` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// Convert every row of `input` and write the records as one JSON array.
///
/// Records are numbered by row position. When `skip_invalid` is set, rows
/// whose headword cannot be converted are logged and left out; any other
/// failure aborts the build.
pub fn build_dict<S: DictSource>(
    source: &S,
    input: &Path,
    output: &Path,
    skip_invalid: bool,
) -> Result<BuildStats, DictSourceError> {
    let _span = debug_span!("build_dict", input = %input.display()).entered();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_path(input)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    let mut stats = BuildStats::default();
    for (id, result) in reader.records().enumerate() {
        let record = result?;
        match source.convert_row(&Row::new(&headers, &record)) {
            Ok(r) => records.push((id, r)),
            Err(e) if skip_invalid && e.is_conversion() => {
                warn!(row = id, "skipping row: {e}");
                stats.skipped += 1;
            }
            Err(e) => {
                return Err(DictSourceError::Row {
                    row: id,
                    source: Box::new(e),
                })
            }
        }
    }

    let numbered: Vec<Numbered<'_, S::Record>> = records
        .iter()
        .map(|(id, record)| Numbered { id: *id, record })
        .collect();
    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer(&mut writer, &numbered)?;
    writer.flush()?;

    stats.written = numbered.len();
    info!(
        written = stats.written,
        skipped = stats.skipped,
        output = %output.display(),
        "dictionary written"
    );
    Ok(stats)
}
