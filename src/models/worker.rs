//! Worker registration models.
//!
//! This module defines the raw [`WorkerForm`] collected from the registration
//! form and the normalized [`WorkerRecord`] produced once it validates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::IdentifierDigits;

/// Where the worker was placed during the fund period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Workplace {
    /// A school unit.
    Escola,
    /// The state education department.
    Seduc,
}

impl Workplace {
    /// Normalizes free text, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use rateio_engine::models::Workplace;
    ///
    /// assert_eq!(Workplace::from_text(" SEDUC "), Some(Workplace::Seduc));
    /// assert_eq!(Workplace::from_text("prefeitura"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "escola" => Some(Workplace::Escola),
            "seduc" => Some(Workplace::Seduc),
            _ => None,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Workplace::Escola => "Escola",
            Workplace::Seduc => "Seduc",
        }
    }
}

/// The worker's current employment situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Still in service.
    Ativo,
    /// Retired.
    Aposentado,
    /// Deceased; the share goes to the estate.
    Falecido,
    /// No longer bound to the administration.
    #[serde(rename = "Sem vínculo")]
    SemVinculo,
}

impl EmploymentStatus {
    /// Normalizes free text, ignoring case and accepting "sem vinculo" without accent.
    ///
    /// # Examples
    ///
    /// ```
    /// use rateio_engine::models::EmploymentStatus;
    ///
    /// assert_eq!(EmploymentStatus::from_text("Sem Vinculo"), Some(EmploymentStatus::SemVinculo));
    /// assert_eq!(EmploymentStatus::from_text("ativo"), Some(EmploymentStatus::Ativo));
    /// ```
    pub fn from_text(text: &str) -> Option<Self> {
        match text.trim().to_lowercase().as_str() {
            "ativo" => Some(EmploymentStatus::Ativo),
            "aposentado" => Some(EmploymentStatus::Aposentado),
            "falecido" => Some(EmploymentStatus::Falecido),
            "sem vínculo" | "sem vinculo" => Some(EmploymentStatus::SemVinculo),
            _ => None,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Ativo => "Ativo",
            EmploymentStatus::Aposentado => "Aposentado",
            EmploymentStatus::Falecido => "Falecido",
            EmploymentStatus::SemVinculo => "Sem vínculo",
        }
    }
}

/// Raw registration form as typed by the user. Every field is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerForm {
    /// Full name.
    pub name: String,
    /// Taxpayer identifier, with or without punctuation.
    pub cpf: String,
    /// General registry number.
    pub rg: String,
    /// Employee registration number.
    pub registration: String,
    /// Workplace ("Escola" or "Seduc").
    pub workplace: String,
    /// Job title.
    pub role: String,
    /// Employment status ("Ativo", "Aposentado", "Falecido", "Sem vínculo").
    pub employment_status: String,
    /// Admission date.
    pub admission_date: String,
    /// Phone number.
    pub phone: String,
    /// E-mail address.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Bank name or code.
    pub bank: String,
    /// Bank agency.
    pub agency: String,
    /// Bank account.
    pub account: String,
    /// Bank account type.
    pub account_type: String,
    /// First day worked in the fund period, `YYYY-MM-DD`.
    pub window_start: String,
    /// Last day worked in the fund period, `YYYY-MM-DD`.
    pub window_end: String,
    /// Declared weekly hours.
    pub weekly_hours: String,
    /// Whether the truthfulness declaration was accepted.
    pub accepted_declaration: bool,
}

/// A validated, normalized worker record ready to be stored by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerRecord {
    /// Full name, trimmed.
    pub name: String,
    /// Checksum-validated identifier digits.
    pub cpf: IdentifierDigits,
    /// General registry number, trimmed.
    pub rg: String,
    /// Employee registration number, trimmed.
    pub registration: String,
    /// Normalized workplace.
    pub workplace: Workplace,
    /// Job title, trimmed.
    pub role: String,
    /// Normalized employment status.
    pub employment_status: EmploymentStatus,
    /// Admission date, trimmed.
    pub admission_date: String,
    /// Phone digits, empty when not given.
    pub phone: String,
    /// E-mail address, trimmed.
    pub email: String,
    /// Postal address, trimmed.
    pub address: String,
    /// Bank name or code, trimmed.
    pub bank: String,
    /// Bank agency, trimmed.
    pub agency: String,
    /// Bank account, trimmed.
    pub account: String,
    /// Bank account type, trimmed.
    pub account_type: String,
    /// First day worked in the fund period.
    pub window_start: NaiveDate,
    /// Last day worked in the fund period.
    pub window_end: NaiveDate,
    /// Weekly hours, always the configured fixed value.
    pub weekly_hours: u32,
    /// Inclusive month count of the period, used as the rateio weight.
    pub months_worked: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workplace_labels_round_trip() {
        for workplace in [Workplace::Escola, Workplace::Seduc] {
            assert_eq!(Workplace::from_text(workplace.label()), Some(workplace));
        }
    }

    #[test]
    fn test_employment_status_labels_round_trip() {
        for status in [
            EmploymentStatus::Ativo,
            EmploymentStatus::Aposentado,
            EmploymentStatus::Falecido,
            EmploymentStatus::SemVinculo,
        ] {
            assert_eq!(EmploymentStatus::from_text(status.label()), Some(status));
        }
    }

    #[test]
    fn test_employment_status_rejects_unknown() {
        assert_eq!(EmploymentStatus::from_text("licenciado"), None);
        assert_eq!(EmploymentStatus::from_text(""), None);
    }

    #[test]
    fn test_status_serializes_with_accent() {
        let json = serde_json::to_string(&EmploymentStatus::SemVinculo).unwrap();
        assert_eq!(json, "\"Sem vínculo\"");
    }

    #[test]
    fn test_form_deserializes_with_missing_fields() {
        let form: WorkerForm = serde_json::from_str(r#"{"name": "Maria"}"#).unwrap();
        assert_eq!(form.name, "Maria");
        assert!(form.cpf.is_empty());
        assert!(!form.accepted_declaration);
    }
}
