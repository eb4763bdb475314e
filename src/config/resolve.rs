//! Database location resolution.
//!
//! First hit wins: `--db` flag, `LCCU_DB_PATH`, INI/JSON override files next
//! to the binary or in the working directory, the `database` field of the
//! settings file, and finally the shared network location.

use crate::config::Config;
use crate::utils::path::{executable_dir, expand_tilde};
use ini::{Ini, Properties};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Historical network location of the production database.
pub const DEFAULT_DB_PATH: &str = r"\\file01.storage\smB-usr-lrnas\lr-lccu\Bruno\objecten.db";

/// Environment variable overriding the database path.
pub const ENV_VAR_NAME: &str = "LCCU_DB_PATH";

const INI_FILENAMES: [&str; 2] = ["config.ini", "settings.ini"];
const JSON_FILENAMES: [&str; 2] = ["config.json", "settings.json"];

/// Keys holding the database path inside INI/JSON files.
const DB_PATH_KEYS: [&str; 3] = ["path", "db_path", "database_path"];

/// INI sections searched, in order. `DEFAULT` also covers keys placed
/// before any section header.
const INI_SECTIONS: [&str; 4] = ["database", "DATABASE", "Database", "DEFAULT"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DbPathSource {
    CommandLine,
    Environment,
    IniFile(PathBuf),
    JsonFile(PathBuf),
    Settings,
    #[default]
    Fallback,
}

impl fmt::Display for DbPathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbPathSource::CommandLine => write!(f, "--db command line option"),
            DbPathSource::Environment => write!(f, "environment variable {}", ENV_VAR_NAME),
            DbPathSource::IniFile(p) => write!(f, "INI file {}", p.display()),
            DbPathSource::JsonFile(p) => write!(f, "JSON file {}", p.display()),
            DbPathSource::Settings => write!(f, "settings file {}", Config::config_file().display()),
            DbPathSource::Fallback => write!(f, "built-in network location"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDbPath {
    pub path: String,
    pub source: DbPathSource,
}

fn clean(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(expand_tilde(value).to_string_lossy().to_string())
    }
}

/// Database path from the environment, if set to something non-blank.
pub fn load_from_env() -> Option<String> {
    std::env::var(ENV_VAR_NAME).ok().and_then(|v| clean(&v))
}

/// Directories that may hold override files: the binary's own directory,
/// then the working directory.
pub fn candidate_directories() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    let cwd = std::env::current_dir().ok();

    for dir in [executable_dir(), cwd].into_iter().flatten() {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// Read the database path from an INI file. Key names are matched
/// case-insensitively and backslashes are taken literally, so UNC and
/// drive paths survive. Every section inherits the keys of `DEFAULT` (and
/// of section-less lines) it does not set itself. Unreadable files yield
/// `None`.
pub fn load_from_ini_file(file_path: &Path) -> Option<String> {
    let ini = Ini::load_from_file_noescape(file_path).ok()?;

    let lookup = |props: Option<&Properties>, key: &str| -> Option<String> {
        props?
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.to_string())
    };
    let defaults = |key: &str| {
        lookup(ini.section(Some("DEFAULT")), key).or_else(|| lookup(Some(ini.general_section()), key))
    };

    for section in INI_SECTIONS {
        let props = ini.section(Some(section));
        if props.is_none() && section != "DEFAULT" {
            continue;
        }

        for key in DB_PATH_KEYS {
            let value = match section {
                "DEFAULT" => defaults(key),
                _ => lookup(props, key).or_else(|| defaults(key)),
            };
            if let Some(path) = value.as_deref().and_then(clean) {
                return Some(path);
            }
        }
    }
    None
}

/// Read the database path from a JSON file, flat or nested under
/// `"database"`. Non-string values are ignored.
pub fn load_from_json_file(file_path: &Path) -> Option<String> {
    let content = fs::read_to_string(file_path).ok()?;
    let data: Value = serde_json::from_str(&content).ok()?;
    let obj = data.as_object()?;

    let lookup = |map: &serde_json::Map<String, Value>| {
        DB_PATH_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str).and_then(clean))
    };

    lookup(obj).or_else(|| obj.get("database").and_then(Value::as_object).and_then(lookup))
}

/// Scan `dirs` for override files. Within one directory INI files are
/// checked before JSON files.
pub fn search_override_files(dirs: &[PathBuf]) -> Option<ResolvedDbPath> {
    for dir in dirs {
        for name in INI_FILENAMES {
            let path = dir.join(name);
            if path.exists()
                && let Some(value) = load_from_ini_file(&path)
            {
                return Some(ResolvedDbPath {
                    path: value,
                    source: DbPathSource::IniFile(path),
                });
            }
        }
        for name in JSON_FILENAMES {
            let path = dir.join(name);
            if path.exists()
                && let Some(value) = load_from_json_file(&path)
            {
                return Some(ResolvedDbPath {
                    path: value,
                    source: DbPathSource::JsonFile(path),
                });
            }
        }
    }
    None
}

/// Resolve which database file this invocation works on.
pub fn resolve_database_path(cli_override: Option<&str>, settings: &Config) -> ResolvedDbPath {
    if let Some(path) = cli_override.and_then(clean) {
        return ResolvedDbPath {
            path,
            source: DbPathSource::CommandLine,
        };
    }

    if let Some(path) = load_from_env() {
        return ResolvedDbPath {
            path,
            source: DbPathSource::Environment,
        };
    }

    if let Some(found) = search_override_files(&candidate_directories()) {
        return found;
    }

    if let Some(path) = settings.database.as_deref().and_then(clean) {
        return ResolvedDbPath {
            path,
            source: DbPathSource::Settings,
        };
    }

    ResolvedDbPath {
        path: DEFAULT_DB_PATH.to_string(),
        source: DbPathSource::Fallback,
    }
}
