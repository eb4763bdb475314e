use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::ObjectType;
use crate::utils::colors::{CYAN, GREY, RESET};

/// Print the picklists the operator can choose from.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Options { object_type } = cmd {
        let types: Vec<ObjectType> = match object_type {
            Some(t) => vec![ObjectType::from_input(t).ok_or_else(|| AppError::InvalidType(t.clone()))?],
            None => ObjectType::ALL.to_vec(),
        };

        for t in &types {
            if *t == ObjectType::Bijstand {
                list(&format!("{} - soort bijstand", t), &cfg.soorten_bijstand);
                list(&format!("{} - medewerkers", t), &cfg.medewerkers);
                continue;
            }
            list(&format!("{} - subcategorie", t), t.subcategorie_options());
            list(&format!("{} - OS", t), t.os_options());
        }

        if object_type.is_none() {
            list("Diensten", &cfg.diensten);
        }
    }

    Ok(())
}

fn list<S: AsRef<str>>(title: &str, items: &[S]) {
    println!("{}{}:{}", CYAN, title, RESET);
    if items.is_empty() {
        println!("  {}(none){}", GREY, RESET);
    }
    for item in items {
        println!("  • {}", item.as_ref());
    }
    println!();
}
