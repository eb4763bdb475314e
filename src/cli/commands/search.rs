use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::search::{SearchCriteria, SearchLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::SearchRow;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_type, colorize_optional};
use crate::utils::date::format_for_display;
use crate::utils::table::Table;

const HEADERS: [&str; 11] = [
    "ID",
    "SIN",
    "Type",
    "Subcategorie",
    "Merk",
    "OS",
    "Dienst",
    "LCCU lid",
    "In behandeling",
    "Start bijstand",
    "Einde bijstand",
];

/// Search the inventory and print (or export) the matches.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search {
        sin,
        from,
        to,
        skip_ingave,
        export,
        file,
        force,
    } = cmd
    {
        let criteria = SearchCriteria {
            sin: sin.clone(),
            from: from.clone(),
            to: to.clone(),
            include_datum_ingave: !skip_ingave,
        };

        let mut pool = DbPool::new(&cfg.db_path)?;
        let rows = SearchLogic::run(&mut pool, &criteria)?;

        if let (Some(format), Some(file)) = (export, file) {
            return ExportLogic::export(&rows, format, file, *force);
        }

        if rows.is_empty() {
            info("No records found.");
            return Ok(());
        }

        header(format!("SEARCH RESULTS ({})", rows.len()));
        print!("{}", render_rows(&rows));
    }

    Ok(())
}

fn cell(v: &Option<String>) -> String {
    colorize_optional(v.as_deref().unwrap_or(""))
}

fn date_cell(v: &Option<String>) -> String {
    colorize_optional(&format_for_display(v.as_deref()))
}

pub(crate) fn render_rows(rows: &[SearchRow]) -> String {
    let mut table = Table::new(&HEADERS[..]).with_max_width(30);

    for r in rows {
        let type_value = r.object_type.clone().unwrap_or_default();
        let type_cell = if type_value.trim().is_empty() {
            colorize_optional("")
        } else {
            format!("{}{}{}", color_for_type(&type_value), type_value, RESET)
        };

        table.add_row(vec![
            r.id.to_string(),
            r.sin.clone(),
            type_cell,
            cell(&r.subcategorie),
            cell(&r.merk),
            cell(&r.os),
            cell(&r.dienst),
            cell(&r.lccu_lid),
            date_cell(&r.datum_in_behandeling),
            date_cell(&r.start_bijstand),
            date_cell(&r.einde_bijstand),
        ]);
    }

    table.render()
}
