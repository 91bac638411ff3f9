//! Form validation for the treatment-plan form and any form described in TOML.
//!
//! A form is a list of named fields. Validation marks each field `Valid` or
//! `Invalid(message)`; a field carries at most one feedback message, so
//! marking it again replaces the previous one.

use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::text::is_valid_email;

pub const REQUIRED_MESSAGE: &str = "Este campo é obrigatório.";
pub const PAST_DATE_MESSAGE: &str = "A data não pode ser no passado.";
pub const INVALID_EMAIL_MESSAGE: &str = "Informe um e-mail válido.";
pub const SUBMIT_ERROR_MESSAGE: &str = "Por favor, corrija os erros no formulário.";

/// Field holding the planned start date of a treatment plan.
pub const START_DATE_FIELD: &str = "data_inicio_prevista";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Pristine,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }

    pub fn feedback(&self) -> Option<&str> {
        match self {
            FieldState::Invalid(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(skip)]
    pub state: FieldState,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            value: value.into(),
            required: false,
            kind: FieldKind::Text,
            state: FieldState::Pristine,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Form {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "field")]
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            title: None,
            fields,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Form, FormError> {
        let contents = fs::read_to_string(path).map_err(|source| FormError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| FormError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Validate every field for submission. `today` is the first date that
    /// is not considered past.
    pub fn validate_plan(&mut self, today: NaiveDate) -> bool {
        let mut is_valid = true;

        for field in &mut self.fields {
            if field.required && field.is_blank() {
                field.state = FieldState::Invalid(REQUIRED_MESSAGE.to_string());
                is_valid = false;
            } else if field.kind == FieldKind::Email
                && !field.is_blank()
                && !is_valid_email(field.value.trim())
            {
                field.state = FieldState::Invalid(INVALID_EMAIL_MESSAGE.to_string());
                is_valid = false;
            } else {
                field.state = FieldState::Valid;
            }
        }

        if let Some(field) = self.field_mut(START_DATE_FIELD) {
            // Unparseable dates are left to the required check
            let selected = NaiveDate::parse_from_str(field.value.trim(), "%Y-%m-%d").ok();
            if selected.is_some_and(|date| date < today) {
                field.state = FieldState::Invalid(PAST_DATE_MESSAGE.to_string());
                is_valid = false;
            }
        }

        debug!(is_valid, fields = self.fields.len(), "form validated");
        is_valid
    }

    /// Required-field check run when a single field loses focus.
    pub fn validate_on_blur(&mut self, name: &str) -> Option<&FieldState> {
        let field = self.field_mut(name)?;
        if !field.required {
            return Some(&field.state);
        }
        field.state = if field.is_blank() {
            FieldState::Invalid(REQUIRED_MESSAGE.to_string())
        } else {
            FieldState::Valid
        };
        Some(&field.state)
    }

    pub fn mark_invalid(&mut self, name: &str, message: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.state = FieldState::Invalid(message.into());
                true
            }
            None => false,
        }
    }

    pub fn mark_valid(&mut self, name: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.state = FieldState::Valid;
                true
            }
            None => false,
        }
    }

    pub fn clear_validations(&mut self) {
        for field in &mut self.fields {
            field.state = FieldState::Pristine;
        }
    }

    /// `(field, message)` for every invalid field, in form order.
    pub fn feedback(&self) -> Vec<(&Field, &str)> {
        self.fields
            .iter()
            .filter_map(|f| f.state.feedback().map(|msg| (f, msg)))
            .collect()
    }
}

#[derive(Debug)]
pub enum FormError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Read { path, source } => {
                write!(f, "Failed to read form at {}: {}", path.display(), source)
            }
            FormError::Parse { path, source } => {
                write!(f, "Failed to parse form at {}: {}", path.display(), source)
            }
        }
    }
}

impl StdError for FormError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            FormError::Read { source, .. } => Some(source),
            FormError::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).expect("date")
    }

    fn plan_form(start: &str) -> Form {
        Form::new(vec![
            Field::new("nome", "Plano A").required(),
            Field::new("objetivo", "   ").required(),
            Field::new("observacoes", ""),
            Field::new(START_DATE_FIELD, start)
                .required()
                .with_kind(FieldKind::Date),
        ])
    }

    #[test]
    fn blank_required_fields_are_invalid() {
        let mut form = plan_form("2024-05-10");
        assert!(!form.validate_plan(today()));

        let feedback: Vec<(&str, &str)> = form
            .feedback()
            .into_iter()
            .map(|(f, m)| (f.name.as_str(), m))
            .collect();
        assert_eq!(feedback, vec![("objetivo", REQUIRED_MESSAGE)]);
        assert_eq!(form.field("nome").map(|f| &f.state), Some(&FieldState::Valid));
        assert_eq!(
            form.field("observacoes").map(|f| &f.state),
            Some(&FieldState::Valid)
        );
    }

    #[test]
    fn start_date_in_the_past_is_rejected() {
        let mut form = plan_form("2024-05-09");
        form.mark_valid("objetivo");
        form.fields[1].value = "Reduzir ansiedade".to_string();

        assert!(!form.validate_plan(today()));
        assert_eq!(
            form.field(START_DATE_FIELD).and_then(|f| f.state.feedback()),
            Some(PAST_DATE_MESSAGE)
        );
    }

    #[test]
    fn today_and_unparseable_dates_pass_the_date_check() {
        let mut form = plan_form("2024-05-10");
        form.fields[1].value = "x".to_string();
        assert!(form.validate_plan(today()));

        form.fields[3].value = "10/05/2024".to_string();
        assert!(form.validate_plan(today()));
    }

    #[test]
    fn email_fields_are_checked_when_filled() {
        let mut form = Form::new(vec![
            Field::new("email", "ana@clinica").with_kind(FieldKind::Email),
            Field::new("email2", "").with_kind(FieldKind::Email),
        ]);
        assert!(!form.validate_plan(today()));
        assert_eq!(form.feedback().len(), 1);
        assert_eq!(form.feedback()[0].1, INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn blur_validation_only_checks_required_fields() {
        let mut form = plan_form("2024-06-01");
        assert_eq!(
            form.validate_on_blur("objetivo"),
            Some(&FieldState::Invalid(REQUIRED_MESSAGE.to_string()))
        );
        assert_eq!(
            form.validate_on_blur("observacoes"),
            Some(&FieldState::Pristine)
        );
        assert_eq!(form.validate_on_blur("inexistente"), None);
    }

    #[test]
    fn marking_replaces_previous_feedback_and_clear_resets() {
        let mut form = plan_form("2024-06-01");
        assert!(form.mark_invalid("nome", "primeiro"));
        assert!(form.mark_invalid("nome", "segundo"));
        assert_eq!(form.feedback().len(), 1);
        assert_eq!(form.feedback()[0].1, "segundo");
        assert!(!form.mark_valid("inexistente"));

        form.validate_plan(today());
        form.clear_validations();
        assert!(form
            .fields
            .iter()
            .all(|f| f.state == FieldState::Pristine));
    }

    #[test]
    fn forms_load_from_toml() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("plano.toml");
        fs::write(
            &path,
            r#"
            title = "Plano terapêutico"

            [[field]]
            name = "nome"
            label = "Nome do plano"
            value = "Plano A"
            required = true

            [[field]]
            name = "data_inicio_prevista"
            value = "2030-01-01"
            kind = "date"
            "#,
        )
        .expect("write");

        let form = Form::load_from_path(&path).expect("load");
        assert_eq!(form.title.as_deref(), Some("Plano terapêutico"));
        assert_eq!(form.fields.len(), 2);
        assert_eq!(form.fields[0].display_name(), "Nome do plano");
        assert_eq!(form.fields[1].kind, FieldKind::Date);
        assert_eq!(form.fields[1].state, FieldState::Pristine);
    }

    #[test]
    fn missing_form_file_is_a_read_error() {
        let temp_dir = TempDir::new().expect("temp dir");
        let err = Form::load_from_path(&temp_dir.path().join("nada.toml")).unwrap_err();
        assert!(matches!(err, FormError::Read { .. }));
        assert!(err.source().is_some());
    }
}
