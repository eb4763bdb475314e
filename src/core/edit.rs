//! Update-in-place of an existing record.
//!
//! For assistance records the satellite `medewerkers_bijstand` rows are
//! rebuilt on every save: the names are read, all rows deleted, and one row
//! per name inserted again with the (possibly changed) time window. Names
//! survive, row ids do not. Everything happens in one transaction.

use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_participants, insert_participant, load_object, load_participants, set_participant_count,
    update_object,
};
use crate::errors::{AppError, AppResult};
use crate::models::{ObjectRecord, ObjectType, ObjectUpdate};
use crate::utils::date::{format_for_display, parse_dutch_to_iso};
use crate::utils::sin::{is_bijstand_sin, normalize_sin};

use super::bijstand::parse_time_window;

/// State of the edit form. Timestamps are kept in display format
/// (`dd-mm-yyyy HH:MM`), exactly as the operator sees and types them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditForm {
    pub sin: String,
    pub object_type: String,
    pub subcategorie: String,
    pub merk: String,
    pub os: String,
    pub dienst: String,
    pub soort_bijstand: String,
    pub lccu_lid: String,
    /// "In behandeling" checkbox.
    pub in_behandeling: bool,
    pub datum_in_behandeling: String,
    pub start_bijstand: String,
    pub einde_bijstand: String,
    /// Replacement participant list; `None` keeps the stored one.
    pub medewerkers: Option<Vec<String>>,
}

impl EditForm {
    pub fn from_record(rec: &ObjectRecord) -> Self {
        let type_value = rec.object_type.clone().unwrap_or_default();
        let known_type = ObjectType::from_db_str(&type_value).is_some();
        let is_bijstand = is_bijstand_sin(&rec.sin) || !known_type;

        let object_type = if is_bijstand {
            ObjectType::Bijstand.as_str().to_string()
        } else {
            type_value
        };

        let soort_bijstand = if is_bijstand {
            rec.soort_bijstand.clone().unwrap_or_default()
        } else {
            String::new()
        };

        let datum_in_behandeling = format_for_display(rec.datum_in_behandeling.as_deref());

        Self {
            sin: rec.sin.clone(),
            object_type,
            subcategorie: rec.subcategorie.clone().unwrap_or_default(),
            merk: rec.merk.clone().unwrap_or_default(),
            os: rec.os.clone().unwrap_or_default(),
            dienst: rec.dienst.clone().unwrap_or_default(),
            soort_bijstand,
            lccu_lid: rec.lccu_lid.clone().unwrap_or_default(),
            in_behandeling: !datum_in_behandeling.is_empty(),
            datum_in_behandeling,
            start_bijstand: format_for_display(rec.start_bijstand.as_deref()),
            einde_bijstand: format_for_display(rec.einde_bijstand.as_deref()),
            medewerkers: None,
        }
    }
}

/// What an edit wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub sin: String,
    pub is_bijstand: bool,
    /// Participant names written back (assistance records only).
    pub medewerkers: Vec<String>,
    /// Participant rows removed because the record is no longer an
    /// assistance record.
    pub dropped_participants: usize,
}

pub struct EditLogic;

impl EditLogic {
    /// Load a record into the edit form.
    pub fn load(pool: &mut DbPool, id: i64) -> AppResult<EditForm> {
        let rec = load_object(&pool.conn, id)?.ok_or(AppError::RecordNotFound(id))?;
        Ok(EditForm::from_record(&rec))
    }

    /// Validate the form into the column values to store.
    pub fn prepare(form: &EditForm) -> AppResult<ObjectUpdate> {
        let datum_input = form.datum_in_behandeling.trim();
        if form.in_behandeling && datum_input.is_empty() {
            return Err(AppError::Validation(
                "Datum in behandeling may not be empty while the record is marked in behandeling."
                    .into(),
            ));
        }

        let (start_bijstand, einde_bijstand) =
            parse_time_window(Some(&form.start_bijstand), Some(&form.einde_bijstand))?;

        let datum_in_behandeling = if form.in_behandeling {
            parse_dutch_to_iso(Some(datum_input))?
        } else {
            None
        };

        let sin = normalize_sin(&form.sin)?;

        let object_type = ObjectType::from_input(&form.object_type)
            .ok_or_else(|| AppError::InvalidType(form.object_type.clone()))?;

        Ok(ObjectUpdate {
            sin,
            object_type: object_type.as_str().to_string(),
            subcategorie: form.subcategorie.trim().to_string(),
            merk: form.merk.trim().to_string(),
            os: form.os.trim().to_string(),
            dienst: form.dienst.trim().to_string(),
            soort_bijstand: form.soort_bijstand.trim().to_string(),
            lccu_lid: form.lccu_lid.trim().to_string(),
            datum_in_behandeling,
            start_bijstand,
            einde_bijstand,
        })
    }

    /// Save the form over record `id`.
    pub fn apply(pool: &mut DbPool, id: i64, form: &EditForm) -> AppResult<EditOutcome> {
        let upd = Self::prepare(form)?;
        let is_bijstand =
            upd.object_type.trim().eq_ignore_ascii_case("bijstand") || is_bijstand_sin(&upd.sin);

        let replacement: Option<Vec<String>> = form.medewerkers.as_ref().map(|list| {
            list.iter()
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect()
        });

        let (medewerkers, dropped_participants) = pool.transaction(|tx| {
            let names: Vec<String> = match (&replacement, is_bijstand) {
                (_, false) => Vec::new(),
                (Some(list), true) => list.clone(),
                (None, true) => load_participants(tx, id)?
                    .into_iter()
                    .map(|p| p.medewerker)
                    .collect(),
            };

            if update_object(tx, id, &upd)? == 0 {
                return Err(AppError::RecordNotFound(id));
            }

            if is_bijstand {
                delete_participants(tx, id)?;
                for name in &names {
                    insert_participant(
                        tx,
                        id,
                        name,
                        upd.start_bijstand.as_deref(),
                        upd.einde_bijstand.as_deref(),
                    )?;
                }
                set_participant_count(tx, id, names.len())?;
                return Ok((names, 0));
            }

            // A device never keeps participants
            let dropped = delete_participants(tx, id)?;
            if dropped > 0 {
                set_participant_count(tx, id, 0)?;
            }

            Ok((names, dropped))
        })?;

        write_log_or_warn(
            &pool.conn,
            "edit",
            &upd.sin,
            &format!("Updated record {} ({})", id, upd.object_type),
        );

        Ok(EditOutcome {
            sin: upd.sin,
            is_bijstand,
            medewerkers,
            dropped_participants,
        })
    }
}
