use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, AssetForm};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register a seized device.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        sin,
        object_type,
        subcategorie,
        merk,
        os,
        dienst,
    } = cmd
    {
        let form = AssetForm {
            sin: sin.clone(),
            object_type: object_type.clone(),
            subcategorie: subcategorie.clone(),
            merk: merk.clone(),
            os: os.clone(),
            dienst: dienst.clone(),
        };

        let mut pool = DbPool::new(&cfg.db_path)?;
        let id = AddLogic::apply(&mut pool, &form, cfg)?;

        success(format!(
            "Object saved: {} (id {})",
            sin.trim().to_uppercase(),
            id
        ));
    }

    Ok(())
}
