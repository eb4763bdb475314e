use crate::config::Config;
use crate::db::log::write_log_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::insert_object;
use crate::errors::{AppError, AppResult};
use crate::models::{NewObject, ObjectType};
use crate::ui::messages::warning;
use crate::utils::date::current_iso_timestamp;
use crate::utils::sin::normalize_sin;

/// Fields of the entry form for a physical item.
#[derive(Debug, Clone, Default)]
pub struct AssetForm {
    pub sin: String,
    pub object_type: String,
    pub subcategorie: String,
    pub merk: String,
    pub os: String,
    pub dienst: String,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the form and turn it into a row ready for insertion.
    pub fn prepare(form: &AssetForm, cfg: &Config) -> AppResult<NewObject> {
        let object_type = ObjectType::from_input(&form.object_type)
            .ok_or_else(|| AppError::InvalidType(form.object_type.clone()))?;

        if object_type == ObjectType::Bijstand {
            return Err(AppError::Validation(
                "Use the `bijstand` command for assistance records.".into(),
            ));
        }

        let sin = normalize_sin(&form.sin)?;

        let dienst = form.dienst.trim();
        if !dienst.is_empty() && !cfg.is_known_dienst(dienst) {
            return Err(AppError::Validation(format!(
                "Unknown dienst '{}'. Run `lccudb options` for the list.",
                dienst
            )));
        }

        // Picklists are suggestions only
        let subcategorie = form.subcategorie.trim();
        if !subcategorie.is_empty() && !object_type.subcategorie_options().iter().any(|o| *o == subcategorie) {
            warning(format!(
                "Subcategorie '{}' is not one of the usual values for {}",
                subcategorie, object_type
            ));
        }
        let os = form.os.trim();
        if !os.is_empty() && !object_type.os_options().iter().any(|o| *o == os) {
            warning(format!(
                "Operating system '{}' is not one of the usual values for {}",
                os, object_type
            ));
        }

        Ok(NewObject {
            sin,
            object_type: object_type.as_str().to_string(),
            subcategorie: subcategorie.to_string(),
            merk: form.merk.trim().to_string(),
            os: os.to_string(),
            dienst: dienst.to_string(),
            datum_ingave: current_iso_timestamp(),
            unique_id: None,
            ..NewObject::default()
        })
    }

    /// Store a new physical item and return its id.
    pub fn apply(pool: &mut DbPool, form: &AssetForm, cfg: &Config) -> AppResult<i64> {
        let obj = Self::prepare(form, cfg)?;
        let id = insert_object(&pool.conn, &obj)?;

        write_log_or_warn(
            &pool.conn,
            "add",
            &obj.sin,
            &format!("Added {} record {} (id {})", obj.object_type, obj.sin, id),
        );

        Ok(id)
    }
}
