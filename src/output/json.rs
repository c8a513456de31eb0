//! JSON output of a view.

use crate::models::AddrError;
use crate::output::terminal::{category_label, class_tag, status_led};
use crate::processing::ViewModel;
use serde_json::{json, Value};

/// View plus the display labels a front-end would show.
pub fn view_to_json(view: &ViewModel) -> Result<Value, serde_json::Error> {
    let (led, status) = status_led(view.category);
    Ok(json!({
        "view": serde_json::to_value(view)?,
        "labels": {
            "class": class_tag(view.class),
            "cidr": view.prefix_length.to_string(),
            "led": led.css_class(),
            "status": status,
            "category": category_label(view.category),
        },
    }))
}

/// Render either outcome of [`crate::processing::compute_view`] as pretty JSON.
pub fn render_json(result: &Result<ViewModel, AddrError>) -> Result<String, serde_json::Error> {
    let value = match result {
        Ok(view) => view_to_json(view)?,
        Err(err) => json!({ "error": err.to_string() }),
    };
    serde_json::to_string_pretty(&value)
}
