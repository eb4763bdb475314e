use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and settings file (skipped with `--test`)
///  - the directory holding the database
///  - the SQLite schema, including legacy migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut cfg = cfg.clone();

    println!("⚙️  Initializing lccudb…");
    cfg.init_all(cli.db.as_deref(), cli.test)?;

    let pool = DbPool::new(&cfg.db_path)?;
    println!("✅ Database initialized at {}", &cfg.db_path);

    write_log_or_warn(
        &pool.conn,
        "init",
        &cfg.db_path,
        &format!("Database initialized ({})", cfg.db_source),
    );

    println!("🎉 lccudb initialization completed!");
    Ok(())
}
