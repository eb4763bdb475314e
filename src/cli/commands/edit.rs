use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditForm, EditLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date::current_dutch_timestamp;

/// Load a record, overlay the flags that were given and save it back.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        sin,
        object_type,
        subcategorie,
        merk,
        os,
        dienst,
        soort,
        lccu_lid,
        in_behandeling,
        no_in_behandeling,
        start,
        einde,
        clear_start,
        clear_einde,
        medewerkers,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.db_path)?;
        let mut form = EditLogic::load(&mut pool, *id)?;

        overlay(&mut form.sin, sin);
        overlay(&mut form.object_type, object_type);
        overlay(&mut form.subcategorie, subcategorie);
        overlay(&mut form.merk, merk);
        overlay(&mut form.os, os);
        overlay(&mut form.dienst, dienst);
        overlay(&mut form.soort_bijstand, soort);
        overlay(&mut form.lccu_lid, lccu_lid);
        overlay(&mut form.start_bijstand, start);
        overlay(&mut form.einde_bijstand, einde);

        if let Some(value) = in_behandeling {
            form.in_behandeling = true;
            form.datum_in_behandeling = if value.trim().eq_ignore_ascii_case("now") {
                current_dutch_timestamp()
            } else {
                value.clone()
            };
        }
        if *no_in_behandeling {
            form.in_behandeling = false;
            form.datum_in_behandeling.clear();
        }
        if *clear_start {
            form.start_bijstand.clear();
        }
        if *clear_einde {
            form.einde_bijstand.clear();
        }
        if !medewerkers.is_empty() {
            form.medewerkers = Some(medewerkers.clone());
        }

        let outcome = EditLogic::apply(&mut pool, *id, &form)?;

        if !outcome.is_bijstand && !medewerkers.is_empty() {
            warning("Participants are only kept for assistance records; --medewerker ignored.");
        }

        if outcome.dropped_participants > 0 {
            warning(format!(
                "Record {} is no longer an assistance record; removed {} participant(s).",
                id, outcome.dropped_participants
            ));
        }

        if outcome.is_bijstand {
            success(format!(
                "Record {} updated ({} participant(s): {})",
                id,
                outcome.medewerkers.len(),
                outcome.medewerkers.join(", ")
            ));
        } else {
            success(format!("Record {} ({}) updated", id, outcome.sin));
        }
    }

    Ok(())
}

fn overlay(field: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *field = v.clone();
    }
}
