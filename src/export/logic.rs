// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::RecordExport;
use crate::models::SearchRow;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of search results.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(rows: &[SearchRow], format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if rows.is_empty() {
            warning("No records to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        let records: Vec<RecordExport> = rows.iter().map(RecordExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&records, path),
            ExportFormat::Json => export_json(&records, path),
        }
    }
}
