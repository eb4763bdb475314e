use crate::utils::sin::is_bijstand_sin;
use serde::Serialize;

/// One row of `objecten`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectRecord {
    pub id: i64,
    pub sin: String,
    pub object_type: Option<String>, // ⇔ objecten.type
    pub subcategorie: Option<String>,
    pub merk: Option<String>,
    pub os: Option<String>,
    pub dienst: Option<String>,
    pub datum_ingave: Option<String>, // "YYYY-MM-DD HH:MM:SS"
    pub unique_id: Option<i64>,
    pub soort_bijstand: Option<String>,
    pub lccu_lid: Option<String>,
    pub datum_in_behandeling: Option<String>,
    pub aantal_medewerkers: Option<i64>,
    pub start_bijstand: Option<String>,
    pub einde_bijstand: Option<String>,
}

impl ObjectRecord {
    /// Assistance records are recognised by their type or their marker SIN.
    pub fn is_bijstand(&self) -> bool {
        is_bijstand_sin(&self.sin)
            || self
                .object_type
                .as_deref()
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("bijstand"))
    }
}

/// Values for a fresh `objecten` row.
#[derive(Debug, Clone, Default)]
pub struct NewObject {
    pub sin: String,
    pub object_type: String,
    pub subcategorie: String,
    pub merk: String,
    pub os: String,
    pub dienst: String,
    pub datum_ingave: String,
    pub unique_id: Option<i64>,
    pub soort_bijstand: Option<String>,
    pub aantal_medewerkers: Option<i64>,
    pub start_bijstand: Option<String>,
    pub einde_bijstand: Option<String>,
}

/// Columns rewritten by an edit. `id`, `datum_ingave`, `unique_id` and
/// `aantal_medewerkers` are left alone.
#[derive(Debug, Clone, Default)]
pub struct ObjectUpdate {
    pub sin: String,
    pub object_type: String,
    pub subcategorie: String,
    pub merk: String,
    pub os: String,
    pub dienst: String,
    pub soort_bijstand: String,
    pub lccu_lid: String,
    pub datum_in_behandeling: Option<String>,
    pub start_bijstand: Option<String>,
    pub einde_bijstand: Option<String>,
}

/// Columns shown in the search result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRow {
    pub id: i64,
    pub sin: String,
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    pub subcategorie: Option<String>,
    pub merk: Option<String>,
    pub os: Option<String>,
    pub dienst: Option<String>,
    pub lccu_lid: Option<String>,
    pub datum_in_behandeling: Option<String>,
    pub start_bijstand: Option<String>,
    pub einde_bijstand: Option<String>,
}
