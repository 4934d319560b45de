//! Application events for reactive UI updates

/// Events emitted by `AppState` so views can react to formula changes.
#[derive(Debug, Clone)]
pub enum AppEvent {
    FormulaCreated { id: String },
    FormulaRemoved { id: String },
}
