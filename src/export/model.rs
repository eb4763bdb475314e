// src/export/model.rs

use crate::models::SearchRow;
use crate::utils::date::format_for_display;
use serde::Serialize;

/// Flat export row for a search result. Timestamps are written the way
/// operators read them (`dd-mm-yyyy HH:MM`).
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub sin: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub subcategorie: String,
    pub merk: String,
    pub os: String,
    pub dienst: String,
    pub lccu_lid: String,
    pub datum_in_behandeling: String,
    pub start_bijstand: String,
    pub einde_bijstand: String,
}

impl From<&SearchRow> for RecordExport {
    fn from(r: &SearchRow) -> Self {
        Self {
            id: r.id,
            sin: r.sin.clone(),
            object_type: r.object_type.clone().unwrap_or_default(),
            subcategorie: r.subcategorie.clone().unwrap_or_default(),
            merk: r.merk.clone().unwrap_or_default(),
            os: r.os.clone().unwrap_or_default(),
            dienst: r.dienst.clone().unwrap_or_default(),
            lccu_lid: r.lccu_lid.clone().unwrap_or_default(),
            datum_in_behandeling: format_for_display(r.datum_in_behandeling.as_deref()),
            start_bijstand: format_for_display(r.start_bijstand.as_deref()),
            einde_bijstand: format_for_display(r.einde_bijstand.as_deref()),
        }
    }
}
