use crate::config::Config;
use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_object, insert_participant};
use crate::errors::{AppError, AppResult};
use crate::models::{NewObject, ObjectType};
use crate::ui::messages::warning;
use crate::utils::date::{current_iso_timestamp, datetime_to_iso, parse_dutch_datetime};
use crate::utils::sin::BIJSTAND_SIN;
use rand::Rng;
use rusqlite::Connection;

/// Fields of the assistance popup, as typed by the operator.
#[derive(Debug, Clone, Default)]
pub struct BijstandForm {
    pub soort_bijstand: String,
    pub dienst: String,
    pub medewerkers: Vec<String>,
    /// Announced number of participants; must match `medewerkers` when set.
    pub aantal: Option<usize>,
    pub start: Option<String>, // dd-mm-yyyy HH:MM
    pub einde: Option<String>, // dd-mm-yyyy HH:MM
}

/// A validated assistance record ready to be stored.
#[derive(Debug, Clone)]
pub struct BijstandRecord {
    pub sin: String,
    pub soort_bijstand: String,
    pub dienst: String,
    pub medewerkers: Vec<String>,
    pub start_bijstand: Option<String>, // YYYY-MM-DD HH:MM:SS
    pub einde_bijstand: Option<String>, // YYYY-MM-DD HH:MM:SS
    pub datum_ingave: Option<String>,
    pub unique_id: Option<i64>,
}

impl BijstandRecord {
    pub fn new(soort_bijstand: &str, dienst: &str, medewerkers: Vec<String>) -> Self {
        Self {
            sin: BIJSTAND_SIN.to_string(),
            soort_bijstand: soort_bijstand.to_string(),
            dienst: dienst.to_string(),
            medewerkers,
            start_bijstand: None,
            einde_bijstand: None,
            datum_ingave: None,
            unique_id: None,
        }
    }
}

/// Random display number shown to operators for assistance records.
pub fn random_unique_id() -> i64 {
    rand::thread_rng().gen_range(1000..=9999)
}

/// Parse an optional start/end pair and check their order.
/// Returns both values in storage format.
pub fn parse_time_window(
    start: Option<&str>,
    einde: Option<&str>,
) -> AppResult<(Option<String>, Option<String>)> {
    let parse = |v: Option<&str>| match v.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_dutch_datetime(s).map(Some),
    };

    let start_dt = parse(start)?;
    let einde_dt = parse(einde)?;

    if let (Some(s), Some(e)) = (start_dt, einde_dt)
        && e < s
    {
        return Err(AppError::InvalidRange {
            start: datetime_to_iso(&s),
            end: datetime_to_iso(&e),
        });
    }

    Ok((
        start_dt.as_ref().map(datetime_to_iso),
        einde_dt.as_ref().map(datetime_to_iso),
    ))
}

/// Insert an assistance record and its participants. Runs on whatever
/// connection it is given; callers wrap it in a transaction.
pub fn insert_bijstand_record(conn: &Connection, rec: &BijstandRecord) -> AppResult<i64> {
    let obj = NewObject {
        sin: rec.sin.clone(),
        object_type: ObjectType::Bijstand.as_str().to_string(),
        subcategorie: String::new(),
        merk: String::new(),
        os: String::new(),
        dienst: rec.dienst.clone(),
        datum_ingave: rec.datum_ingave.clone().unwrap_or_else(current_iso_timestamp),
        unique_id: Some(rec.unique_id.unwrap_or_else(random_unique_id)),
        soort_bijstand: Some(rec.soort_bijstand.clone()),
        aantal_medewerkers: Some(rec.medewerkers.len() as i64),
        start_bijstand: rec.start_bijstand.clone(),
        einde_bijstand: rec.einde_bijstand.clone(),
    };

    let object_id = insert_object(conn, &obj)?;

    for name in &rec.medewerkers {
        insert_participant(
            conn,
            object_id,
            name,
            rec.start_bijstand.as_deref(),
            rec.einde_bijstand.as_deref(),
        )?;
    }

    Ok(object_id)
}

pub struct BijstandLogic;

impl BijstandLogic {
    /// Validate the popup fields.
    pub fn prepare(form: &BijstandForm, cfg: &Config) -> AppResult<BijstandRecord> {
        let (start_bijstand, einde_bijstand) =
            parse_time_window(form.start.as_deref(), form.einde.as_deref())?;

        let medewerkers: Vec<String> = form
            .medewerkers
            .iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        if let Some(n) = form.aantal
            && n != medewerkers.len()
        {
            return Err(AppError::Validation(format!(
                "{} participant(s) announced but {} name(s) given",
                n,
                medewerkers.len()
            )));
        }

        for m in medewerkers.iter().filter(|m| !cfg.is_known_medewerker(m)) {
            warning(format!("'{}' is not in the list of known LCCU staff", m));
        }

        let mut rec = BijstandRecord::new(form.soort_bijstand.trim(), form.dienst.trim(), medewerkers);
        rec.start_bijstand = start_bijstand;
        rec.einde_bijstand = einde_bijstand;
        Ok(rec)
    }

    /// Store a new assistance record; returns its id and display number.
    pub fn apply(pool: &mut DbPool, form: &BijstandForm, cfg: &Config) -> AppResult<(i64, i64)> {
        let mut rec = Self::prepare(form, cfg)?;
        let unique_id = random_unique_id();
        rec.unique_id = Some(unique_id);

        let id = pool.transaction(|tx| insert_bijstand_record(tx, &rec))?;

        write_log_or_warn(
            &pool.conn,
            "bijstand",
            &format!("#{}", unique_id),
            &format!(
                "Added assistance '{}' with {} participant(s) (id {})",
                rec.soort_bijstand,
                rec.medewerkers.len(),
                id
            ),
        );

        Ok((id, unique_id))
    }
}
