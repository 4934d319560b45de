//! Reusable form field component: a label above an arbitrary input element.

use gpui::*;

use crate::theme::{colors, spacing, typography};

/// Renders a label (optionally marked required) above any input element.
#[derive(IntoElement)]
pub struct FormField {
    label: SharedString,
    required: bool,
    compact: bool,
    child: Option<AnyElement>,
}

impl FormField {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self { label: label.into(), required: false, compact: false, child: None }
    }

    /// Mark this field as required (shows asterisk).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Smaller label, for fields packed into a row.
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.child = Some(child.into_any_element());
        self
    }
}

impl RenderOnce for FormField {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut label_text = self.label.to_string();
        if self.required {
            label_text.push_str(" *");
        }

        let label = if self.compact {
            div().text_size(typography::text_xs()).text_color(colors::text_secondary())
        } else {
            div().text_sm().text_color(colors::text_primary())
        };

        let mut field =
            div().flex().flex_col().flex_1().gap(spacing::xs()).child(label.child(label_text));
        if let Some(child) = self.child {
            field = field.child(child);
        }
        field
    }
}
