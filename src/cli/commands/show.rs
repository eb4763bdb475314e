use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_object, load_participants};
use crate::errors::{AppError, AppResult};
use crate::models::{ObjectRecord, Participant};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, colorize_optional};
use crate::utils::date::format_for_display;
use crate::utils::table::Table;

/// Print a single record, followed by its participants for assistance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = DbPool::new(&cfg.db_path)?;
        let rec = load_object(&pool.conn, *id)?.ok_or(AppError::RecordNotFound(*id))?;

        header(format!("RECORD {}", rec.id));
        print_record(&rec);

        if rec.is_bijstand() {
            let participants = load_participants(&pool.conn, rec.id)?;
            println!();
            print_participants(&participants);
        }
    }

    Ok(())
}

fn field(label: &str, value: &str) {
    println!("{}{:<22}{} {}", CYAN, label, RESET, colorize_optional(value));
}

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("")
}

fn print_record(rec: &ObjectRecord) {
    field("SIN", &rec.sin);
    field("Type", opt(&rec.object_type));
    field("Subcategorie", opt(&rec.subcategorie));
    field("Merk", opt(&rec.merk));
    field("OS", opt(&rec.os));
    field("Dienst", opt(&rec.dienst));
    field("Datum ingave", &format_for_display(rec.datum_ingave.as_deref()));
    field(
        "Nummer",
        &rec.unique_id.map(|n| n.to_string()).unwrap_or_default(),
    );
    field("Soort bijstand", opt(&rec.soort_bijstand));
    field("LCCU lid", opt(&rec.lccu_lid));
    field(
        "In behandeling",
        &format_for_display(rec.datum_in_behandeling.as_deref()),
    );
    field(
        "Aantal medewerkers",
        &rec.aantal_medewerkers
            .map(|n| n.to_string())
            .unwrap_or_default(),
    );
    field("Start bijstand", &format_for_display(rec.start_bijstand.as_deref()));
    field("Einde bijstand", &format_for_display(rec.einde_bijstand.as_deref()));
}

fn print_participants(participants: &[Participant]) {
    if participants.is_empty() {
        println!("No participants registered.");
        return;
    }

    let mut table = Table::new(&["#", "Medewerker", "Start", "Einde"][..]);
    for p in participants {
        table.add_row(vec![
            p.id.to_string(),
            p.medewerker.clone(),
            colorize_optional(&format_for_display(p.start_bijstand.as_deref())),
            colorize_optional(&format_for_display(p.einde_bijstand.as_deref())),
        ]);
    }
    print!("{}", table.render());
}
