//! Global application state.

use gpui::{Context, EventEmitter};

use crate::models::Formula;
use crate::state::events::AppEvent;

/// Global application state: the formulas created this session.
///
/// Held in memory only. Real storage, uniqueness guarantees, and inventory
/// reconciliation belong to whatever backend eventually consumes the
/// records.
pub struct AppState {
    formulas: Vec<Formula>,
}

impl AppState {
    pub fn new() -> Self {
        Self { formulas: Vec::new() }
    }

    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    pub fn add_formula(&mut self, formula: Formula, cx: &mut Context<Self>) {
        log::info!(
            "Created formula {} ({}, {} ingredients)",
            formula.id,
            formula.name,
            formula.ingredients.len()
        );
        let id = formula.id.clone();
        self.formulas.push(formula);
        cx.emit(AppEvent::FormulaCreated { id });
        cx.notify();
    }

    pub fn remove_formula(&mut self, id: &str, cx: &mut Context<Self>) {
        let before = self.formulas.len();
        self.formulas.retain(|formula| formula.id != id);
        if self.formulas.len() != before {
            log::info!("Removed formula {id}");
            cx.emit(AppEvent::FormulaRemoved { id: id.to_string() });
            cx.notify();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEmitter<AppEvent> for AppState {}
