use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod resolve;

pub use resolve::{DbPathSource, ResolvedDbPath};

/// Operator settings, stored as YAML in `lccudb.conf`.
///
/// The database location itself is resolved separately (see [`resolve`]);
/// `database` here is just one of the candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: Option<String>,
    pub diensten: Vec<String>,
    pub medewerkers: Vec<String>,
    pub soorten_bijstand: Vec<String>,

    /// Database file this invocation works on.
    #[serde(skip)]
    pub db_path: String,

    /// Where `db_path` came from.
    #[serde(skip)]
    pub db_source: DbPathSource,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_diensten() -> Vec<String> {
    to_strings(&[
        "DOT",
        "FGP",
        "GOK",
        "GOUDI",
        "INTEL",
        "InternToezicht",
        "ISRA",
        "LR/DGV",
        "LR/DGWLD",
        "LR/DRUGS",
        "LR/ECOFIN",
        "LR/EIG",
        "LR/GWLD",
        "LR/IFG",
        "LR/JCRIM",
        "LR/JEUGD",
        "LR/LM",
        "LR/PERS",
        "LR/PERS/DGV",
        "LR/RESID",
        "LR/RIF",
        "LR/VERDW",
        "LR/ZEDEN",
        "ORIDA",
        "PTA",
        "VERKEER",
        "WIJK Centrum",
        "WIJK City",
        "WIJK Noord",
        "WIJK Oost",
        "WIJK West",
        "WIJK Zuid",
        "WOT Centrum",
        "WOT City",
        "WOT Noord",
        "WOT Oost",
        "WOT West",
        "WOT Zuid",
    ])
}

pub fn default_medewerkers() -> Vec<String> {
    to_strings(&[
        "Annik Van Herck",
        "Bianca Van Loock",
        "Bjorn Broeckx",
        "Bruno Van Der Straten",
        "Carla Winkelmans",
        "Ellen Nuyens",
        "Joeri Haepers",
        "Sabrina Vunckx",
    ])
}

pub fn default_soorten_bijstand() -> Vec<String> {
    to_strings(&["Camerabeelden", "Huiszoeking", "Wacht", "Andere"])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            diensten: default_diensten(),
            medewerkers: default_medewerkers(),
            soorten_bijstand: default_soorten_bijstand(),
            db_path: resolve::DEFAULT_DB_PATH.to_string(),
            db_source: DbPathSource::Fallback,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("lccudb")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".lccudb")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("lccudb.conf")
    }

    /// Load settings from the config file, or defaults if there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Resolve the database location for this run and store it.
    pub fn resolve_database(&mut self, cli_override: Option<&str>) {
        let resolved = resolve::resolve_database_path(cli_override, self);
        self.db_path = resolved.path;
        self.db_source = resolved.source;
    }

    /// Write the settings file (unless in test mode) and make sure the
    /// directory of the database exists.
    pub fn init_all(&mut self, custom_db: Option<&str>, is_test: bool) -> AppResult<()> {
        if let Some(db) = custom_db {
            self.database = Some(db.to_string());
        }

        if !is_test {
            let path = Self::config_file();
            self.save_to(&path)?;
            println!("✅ Config file: {}", path.display());
        }

        let db_path = Path::new(&self.db_path);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Config(format!(
                    "cannot create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        println!("✅ Database:    {}", self.db_path);
        Ok(())
    }

    pub fn is_known_dienst(&self, dienst: &str) -> bool {
        self.diensten.iter().any(|d| d == dienst)
    }

    pub fn is_known_medewerker(&self, name: &str) -> bool {
        self.medewerkers.iter().any(|m| m == name)
    }
}
