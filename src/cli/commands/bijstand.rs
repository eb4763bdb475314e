use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bijstand::{BijstandForm, BijstandLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register an assistance record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bijstand {
        soort,
        dienst,
        medewerkers,
        aantal,
        start,
        einde,
    } = cmd
    {
        let form = BijstandForm {
            soort_bijstand: soort.clone(),
            dienst: dienst.clone(),
            medewerkers: medewerkers.clone(),
            aantal: *aantal,
            start: start.clone(),
            einde: einde.clone(),
        };

        let mut pool = DbPool::new(&cfg.db_path)?;
        let (id, unique_id) = BijstandLogic::apply(&mut pool, &form, cfg)?;

        success(format!(
            "Assistance record saved with number {} (id {})",
            unique_id, id
        ));
    }

    Ok(())
}
