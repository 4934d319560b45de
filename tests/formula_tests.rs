//! Tests for the formula record types and their host-facing JSON shape
//! (`aromalab::models::formula`).

use aromalab::models::{Formula, FormulaCategory, FormulaStatus, Ingredient, Unit, formula_id};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn sample_formula() -> Formula {
    Formula {
        id: "F456".to_string(),
        name: "Lavanda".to_string(),
        description: "x".to_string(),
        category: FormulaCategory::Citrica,
        batch_size: 50,
        status: FormulaStatus::Incomplete,
        estimated_time: "4 horas".to_string(),
        ingredients: vec![Ingredient {
            name: "Aceite".to_string(),
            required: 3.0,
            unit: Unit::Ml,
            available: 0.0,
        }],
    }
}

// =============================================================================
// JSON shape (the host contract)
// =============================================================================

#[test]
fn test_formula_serializes_to_camel_case() {
    let value = serde_json::to_value(sample_formula()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "F456",
            "name": "Lavanda",
            "description": "x",
            "category": "Cítrica",
            "batchSize": 50,
            "status": "incomplete",
            "estimatedTime": "4 horas",
            "ingredients": [
                { "name": "Aceite", "required": 3.0, "unit": "ml", "available": 0.0 }
            ]
        })
    );
}

#[test]
fn test_formula_json_round_trips() {
    let formula = sample_formula();
    let json = serde_json::to_string(&formula).unwrap();
    let parsed: Formula = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, formula);
}

// =============================================================================
// Enumerations
// =============================================================================

#[test]
fn test_category_labels_round_trip() {
    assert_eq!(FormulaCategory::all().len(), 6);
    for category in FormulaCategory::all() {
        assert_eq!(FormulaCategory::from_label(category.label()), Some(*category));
    }
    assert_eq!(FormulaCategory::Citrica.label(), "Cítrica");
    assert_eq!(FormulaCategory::from_label("Especiada"), None);
}

#[test]
fn test_unit_labels_round_trip() {
    assert_eq!(Unit::all().len(), 4);
    for unit in Unit::all() {
        assert_eq!(Unit::from_label(unit.label()), Some(*unit));
    }
    assert_eq!(Unit::default(), Unit::Kg);
    assert_eq!(Unit::from_label("oz"), None);
}

#[test]
fn test_status_serializes_lowercase() {
    assert_eq!(serde_json::to_value(FormulaStatus::Incomplete).unwrap(), json!("incomplete"));
    assert_eq!(serde_json::to_value(FormulaStatus::Complete).unwrap(), json!("complete"));
}

// =============================================================================
// Identifier scheme
// =============================================================================

#[test]
fn test_formula_id_uses_last_three_millis_digits() {
    let now = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
    assert_eq!(formula_id(now), "F456");

    let now = Utc.timestamp_millis_opt(1_700_000_123_000).unwrap();
    assert_eq!(formula_id(now), "F000");
}

#[test]
fn test_formula_id_is_not_unique_across_close_timestamps() {
    // The scheme is deliberately short; one second apart can collide.
    let a = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
    let b = Utc.timestamp_millis_opt(1_700_000_124_456).unwrap();
    assert_eq!(formula_id(a), formula_id(b));
}
