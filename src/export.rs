use crate::api::models::ResultRow;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Header row, fixed by the export contract
pub const CSV_HEADER: &str = "UniProt ID,Cosine Similarity,Sequence Identity (%),Pfam Domains";

/// Default filename offered in the save dialog
pub const EXPORT_FILE_NAME: &str = "esmfinder_results.csv";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the current rows as a CSV document.
///
/// Pfam domains are flattened into one field with `;` between entries.
/// Fields are emitted bare unless they contain a separator, quote, or
/// newline, in which case they are quoted with embedded quotes doubled.
pub fn rows_to_csv(rows: &[ResultRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    for row in rows {
        let pfam = row.entry.pfam.join(";");
        out.push('\n');
        out.push_str(&escape_field(&row.entry.id));
        out.push(',');
        out.push_str(&row.entry.similarity.to_string());
        out.push(',');
        out.push_str(&row.entry.identity.to_string());
        out.push(',');
        out.push_str(&escape_field(&pfam));
    }
    out
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', ';', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write the CSV for `rows` to `path`.
pub fn write_csv_file(path: &Path, rows: &[ResultRow]) -> Result<(), ExportError> {
    std::fs::write(path, rows_to_csv(rows))?;
    info!("Exported {} row(s) to {}", rows.len(), path.display());
    Ok(())
}

/// Ask the user where to save the export, then write it.
///
/// Returns the chosen path, or `None` if the dialog was cancelled.
/// Cancellation is not an error.
pub async fn save_results(rows: &[ResultRow]) -> Result<Option<PathBuf>, ExportError> {
    let picked = rfd::AsyncFileDialog::new()
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file()
        .await;

    match picked {
        Some(handle) => {
            let path = handle.path().to_path_buf();
            write_csv_file(&path, rows)?;
            Ok(Some(path))
        }
        None => Ok(None),
    }
}
