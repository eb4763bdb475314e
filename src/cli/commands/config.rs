use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::resolve::{ENV_VAR_NAME, candidate_directories};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{CYAN, GREEN, RESET};

use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
            println!("{}• Database:{} {} ({})", CYAN, RESET, cfg.db_path, cfg.db_source);
        }

        // ---- CHECK ----
        if *check {
            print_resolution(cfg, &path);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                cfg.save_to(&path)?;
                info(format!("Created {}", path.display()));
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    println!(
                        "✅ Configuration file edited successfully using '{}'",
                        editor_to_use
                    );
                }
                _ => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            println!(
                                "✅ Configuration file edited successfully using fallback '{}'",
                                default_editor
                            );
                        }
                        _ => {
                            eprintln!(
                                "❌ Failed to edit configuration file using fallback '{}'",
                                default_editor
                            );
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_resolution(cfg: &Config, settings_file: &std::path::Path) {
    println!("🔎 Database path resolution (first match wins):\n");
    println!("  1. --db flag");
    println!("  2. environment variable {}", ENV_VAR_NAME);
    println!("  3. config.ini / settings.ini / config.json / settings.json in:");
    for dir in candidate_directories() {
        println!("       {}", dir.display());
    }
    println!("  4. 'database' in {}", settings_file.display());
    println!("  5. built-in network path\n");

    println!(
        "{}• In use:{} {}{}{} (from {})",
        CYAN, RESET, GREEN, cfg.db_path, RESET, cfg.db_source
    );

    if std::path::Path::new(&cfg.db_path).exists() {
        info("Database file found.");
    } else {
        warning("Database file does not exist yet; run `lccudb init`.");
    }
}
