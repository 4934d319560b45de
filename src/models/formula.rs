// Formula domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fragrance family a formula belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormulaCategory {
    Floral,
    #[serde(rename = "Cítrica")]
    Citrica,
    Amaderada,
    Oriental,
    Fresca,
    Dulce,
}

impl FormulaCategory {
    pub fn all() -> &'static [FormulaCategory] {
        &[
            FormulaCategory::Floral,
            FormulaCategory::Citrica,
            FormulaCategory::Amaderada,
            FormulaCategory::Oriental,
            FormulaCategory::Fresca,
            FormulaCategory::Dulce,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormulaCategory::Floral => "Floral",
            FormulaCategory::Citrica => "Cítrica",
            FormulaCategory::Amaderada => "Amaderada",
            FormulaCategory::Oriental => "Oriental",
            FormulaCategory::Fresca => "Fresca",
            FormulaCategory::Dulce => "Dulce",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|category| category.label() == label)
    }
}

/// Measurement unit for an ingredient quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "g")]
    G,
}

impl Unit {
    pub fn all() -> &'static [Unit] {
        &[Unit::Kg, Unit::L, Unit::Ml, Unit::G]
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::L => "L",
            Unit::Ml => "ml",
            Unit::G => "g",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|unit| unit.label() == label)
    }
}

/// Production lifecycle state. Every formula starts out incomplete and is
/// promoted by the host once its stock has been reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaStatus {
    #[default]
    Incomplete,
    Complete,
}

impl FormulaStatus {
    pub fn label(self) -> &'static str {
        match self {
            FormulaStatus::Incomplete => "Incompleta",
            FormulaStatus::Complete => "Completa",
        }
    }
}

/// One line of a formula's recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub required: f64,
    pub unit: Unit,
    /// Stock on hand. Always zero at creation; the host's inventory is the
    /// source of truth afterwards.
    pub available: f64,
}

/// A complete recipe record as handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formula {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: FormulaCategory,
    /// Total quantity (kg) produced per run.
    pub batch_size: u32,
    pub status: FormulaStatus,
    pub estimated_time: String,
    pub ingredients: Vec<Ingredient>,
}

/// Derive a short formula id from a creation timestamp.
///
/// Matches the legacy scheme: `F` plus the last three digits of the
/// timestamp in milliseconds. Deliberately not collision-free — rapid
/// successive creations can repeat an id, and the host deduplicates on
/// insert if it cares.
pub fn formula_id(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().unsigned_abs().to_string();
    let tail = &millis[millis.len().saturating_sub(3)..];
    format!("F{tail}")
}
