use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;

use crate::forms::{Form, SUBMIT_ERROR_MESSAGE};
use crate::utils::text::{format_date, format_date_br};

/// Validate the form at `path`, print the outcome and return whether it is
/// ready to submit.
pub fn run_validate(path: &Path, today: NaiveDate) -> Result<bool, Box<dyn Error>> {
    let mut form = Form::load_from_path(path)?;
    let is_valid = form.validate_plan(today);
    for line in report(&form, is_valid, today) {
        println!("{line}");
    }
    Ok(is_valid)
}

pub fn report(form: &Form, is_valid: bool, today: NaiveDate) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(title) = &form.title {
        lines.push(title.clone());
    }
    lines.push(format!("Data de referência: {}", format_date_br(today)));

    for field in &form.fields {
        let shown = format_date(&field.value).unwrap_or_else(|| field.value.trim().to_string());
        match field.state.feedback() {
            Some(message) => lines.push(format!("  ❌ {}: {message}", field.display_name())),
            None => lines.push(format!("  ✅ {}: {shown}", field.display_name())),
        }
    }

    if is_valid {
        lines.push("✅ Formulário válido.".to_string());
    } else {
        lines.push(format!("❌ {SUBMIT_ERROR_MESSAGE}"));
    }
    lines
}
