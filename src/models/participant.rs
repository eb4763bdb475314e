use serde::Serialize;

/// One row of `medewerkers_bijstand`: a staff member taking part in an
/// assistance record. Start and end are copies of the parent's window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub id: i64,
    pub object_id: i64,
    pub medewerker: String,
    pub start_bijstand: Option<String>,
    pub einde_bijstand: Option<String>,
}
