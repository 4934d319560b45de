//! In-progress formula form state, independent of any widget toolkit.
//!
//! The dialog owns a [`FormulaDraft`] and funnels every edit through it, so
//! the whole add/remove/validate contract is testable without a window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::formula::{
    Formula, FormulaCategory, FormulaStatus, Ingredient, Unit, formula_id,
};

/// Estimated time substituted when the field is left blank.
pub const DEFAULT_ESTIMATED_TIME: &str = "4 horas";

/// Why a submission attempt was refused. The `Display` strings are the
/// user-facing notices, verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Por favor completa todos los campos requeridos")]
    MissingRequiredField,
    #[error("Debe agregar al menos un ingrediente válido")]
    NoValidIngredients,
}

/// Scalar metadata fields, addressable by name for the field editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Category,
    BatchSize,
    EstimatedTime,
}

/// The five scalar metadata fields, kept as raw strings while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftFields {
    pub name: String,
    pub description: String,
    pub category: String,
    pub batch_size: String,
    pub estimated_time: String,
}

/// One ingredient row while editing. Name and quantity may be transiently
/// empty/zero; invalid rows are dropped at submission, not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub name: String,
    pub required: f64,
    pub unit: Unit,
}

impl Default for IngredientDraft {
    fn default() -> Self {
        Self { name: String::new(), required: 0.0, unit: Unit::Kg }
    }
}

impl IngredientDraft {
    fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.required > 0.0
    }
}

/// Everything the "Nueva Fórmula" dialog holds between open and submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaDraft {
    pub fields: DraftFields,
    pub ingredients: Vec<IngredientDraft>,
}

impl Default for FormulaDraft {
    fn default() -> Self {
        Self { fields: DraftFields::default(), ingredients: vec![IngredientDraft::default()] }
    }
}

impl FormulaDraft {
    /// Overwrite a single scalar field. No validation happens here.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.fields.name = value,
            DraftField::Description => self.fields.description = value,
            DraftField::Category => self.fields.category = value,
            DraftField::BatchSize => self.fields.batch_size = value,
            DraftField::EstimatedTime => self.fields.estimated_time = value,
        }
    }

    /// Append a fresh default row. Always succeeds.
    pub fn add_row(&mut self) {
        self.ingredients.push(IngredientDraft::default());
    }

    /// Remove the row at `index`, unless it is the last one. A formula
    /// under edit always keeps at least one row. Returns whether a row
    /// was actually removed.
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.ingredients.len() > 1 && index < self.ingredients.len() {
            self.ingredients.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set_ingredient_name(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.ingredients.get_mut(index) {
            row.name = value.into();
        }
    }

    pub fn set_ingredient_required(&mut self, index: usize, value: f64) {
        if let Some(row) = self.ingredients.get_mut(index) {
            row.required = value;
        }
    }

    pub fn set_ingredient_unit(&mut self, index: usize, unit: Unit) {
        if let Some(row) = self.ingredients.get_mut(index) {
            row.unit = unit;
        }
    }

    /// Restore the initial state: empty fields, one default row.
    pub fn reset(&mut self) {
        *self = FormulaDraft::default();
    }

    fn parsed_batch_size(&self) -> Option<u32> {
        self.fields.batch_size.trim().parse::<u32>().ok().filter(|size| *size > 0)
    }

    /// Validate the draft and assemble the finished record.
    ///
    /// Checks run in order and short-circuit: required scalars first, then
    /// at least one valid ingredient row. Rows with a blank name or a
    /// non-positive quantity are silently dropped. The draft itself is
    /// left untouched either way; callers reset it after a successful
    /// hand-off.
    pub fn build(&self, now: DateTime<Utc>) -> Result<Formula, DraftError> {
        let fields = &self.fields;
        if fields.name.trim().is_empty()
            || fields.description.trim().is_empty()
            || fields.category.trim().is_empty()
            || fields.batch_size.trim().is_empty()
        {
            return Err(DraftError::MissingRequiredField);
        }

        // A batch size that survives the blank check but does not parse to
        // a positive integer falls under the same generic notice; the typed
        // record cannot carry a not-a-number value.
        let Some(batch_size) = self.parsed_batch_size() else {
            return Err(DraftError::MissingRequiredField);
        };
        let Some(category) = FormulaCategory::from_label(fields.category.trim()) else {
            return Err(DraftError::MissingRequiredField);
        };

        let ingredients: Vec<Ingredient> = self
            .ingredients
            .iter()
            .filter(|row| row.is_valid())
            .map(|row| Ingredient {
                name: row.name.clone(),
                required: row.required,
                unit: row.unit,
                available: 0.0,
            })
            .collect();
        if ingredients.is_empty() {
            return Err(DraftError::NoValidIngredients);
        }

        let estimated_time = if fields.estimated_time.trim().is_empty() {
            DEFAULT_ESTIMATED_TIME.to_string()
        } else {
            fields.estimated_time.clone()
        };

        Ok(Formula {
            id: formula_id(now),
            name: fields.name.clone(),
            description: fields.description.clone(),
            category,
            batch_size,
            status: FormulaStatus::Incomplete,
            estimated_time,
            ingredients,
        })
    }
}
