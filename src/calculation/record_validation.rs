//! Worker record validation.
//!
//! Checks a raw registration form and, when every check passes, produces the
//! normalized [`WorkerRecord`]. All problems are collected so the caller can
//! show them together.

use crate::config::{EligibilityWindow, EngineConfig};
use crate::error::{EngineError, EngineResult, FieldError};
use crate::models::{DateRange, EmploymentStatus, WorkerForm, WorkerRecord, Workplace};

use super::eligibility_window::{parse_window_dates, validate_date_range};
use super::identifier::{normalize_identifier, only_digits};

/// Validates a registration form against the engine configuration.
///
/// # Errors
///
/// Returns `InvalidRecord` listing every problem found, in form order.
///
/// # Examples
///
/// ```
/// use rateio_engine::calculation::validate_record;
/// use rateio_engine::config::EngineConfig;
/// use rateio_engine::error::EngineError;
/// use rateio_engine::models::WorkerForm;
///
/// let result = validate_record(&WorkerForm::default(), &EngineConfig::default());
/// match result {
///     Err(EngineError::InvalidRecord { errors }) => assert!(errors.len() > 10),
///     _ => panic!("an empty form must not validate"),
/// }
/// ```
pub fn validate_record(form: &WorkerForm, config: &EngineConfig) -> EngineResult<WorkerRecord> {
    let mut errors = Vec::new();

    let required = [
        ("name", "Full name", &form.name),
        ("cpf", "CPF", &form.cpf),
        ("workplace", "Workplace", &form.workplace),
        ("role", "Role", &form.role),
        ("employment_status", "Employment status", &form.employment_status),
        ("admission_date", "Admission date", &form.admission_date),
        ("address", "Address", &form.address),
        ("bank", "Bank", &form.bank),
        ("agency", "Agency", &form.agency),
        ("account", "Account", &form.account),
        ("account_type", "Account type", &form.account_type),
        ("window_start", "Fund period start date", &form.window_start),
        ("window_end", "Fund period end date", &form.window_end),
        ("weekly_hours", "Weekly hours", &form.weekly_hours),
    ];
    for (field, label, value) in required {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, format!("{} is required.", label)));
        }
    }

    let cpf = normalize_identifier(&form.cpf).ok();
    if cpf.is_none() {
        errors.push(FieldError::new("cpf", "Invalid CPF."));
    }

    let workplace = if form.workplace.trim().is_empty() {
        None
    } else {
        let workplace = Workplace::from_text(&form.workplace);
        if workplace.is_none() {
            errors.push(FieldError::new(
                "workplace",
                "Workplace must be \"Escola\" or \"Seduc\".",
            ));
        }
        workplace
    };

    let employment_status = if form.employment_status.trim().is_empty() {
        None
    } else {
        let status = EmploymentStatus::from_text(&form.employment_status);
        if status.is_none() {
            errors.push(FieldError::new(
                "employment_status",
                "Employment status must be \"Ativo\", \"Aposentado\", \"Falecido\" or \"Sem vínculo\".",
            ));
        }
        status
    };

    let phone = only_digits(&form.phone);
    if !phone.is_empty() && !matches!(phone.len(), 10 | 11) {
        errors.push(FieldError::new("phone", "Phone must have 10 or 11 digits."));
    }

    let email = form.email.trim();
    if !email.is_empty() && !looks_like_email(email) {
        errors.push(FieldError::new("email", "Invalid e-mail."));
    }

    let period = if form.window_start.trim().is_empty() || form.window_end.trim().is_empty() {
        None
    } else {
        match check_period(&form.window_start, &form.window_end, &config.window) {
            Ok(period) => Some(period),
            Err(error) => {
                errors.push(error);
                None
            }
        }
    };

    match form.weekly_hours.trim().parse::<u32>() {
        Ok(hours) if hours == config.weekly_hours => {}
        Ok(_) => errors.push(FieldError::new(
            "weekly_hours",
            format!(
                "Weekly hours for the fund period are fixed at {}.",
                config.weekly_hours
            ),
        )),
        Err(_) => errors.push(FieldError::new(
            "weekly_hours",
            "Weekly hours must be numeric.",
        )),
    }

    if !form.accepted_declaration {
        errors.push(FieldError::new(
            "accepted_declaration",
            "The truthfulness declaration must be accepted.",
        ));
    }

    match (cpf, workplace, employment_status, period) {
        (Some(cpf), Some(workplace), Some(employment_status), Some((range, months_worked)))
            if errors.is_empty() =>
        {
            Ok(WorkerRecord {
                name: form.name.trim().to_string(),
                cpf,
                rg: form.rg.trim().to_string(),
                registration: form.registration.trim().to_string(),
                workplace,
                role: form.role.trim().to_string(),
                employment_status,
                admission_date: form.admission_date.trim().to_string(),
                phone,
                email: email.to_string(),
                address: form.address.trim().to_string(),
                bank: form.bank.trim().to_string(),
                agency: form.agency.trim().to_string(),
                account: form.account.trim().to_string(),
                account_type: form.account_type.trim().to_string(),
                window_start: range.start,
                window_end: range.end,
                weekly_hours: config.weekly_hours,
                months_worked,
            })
        }
        _ => Err(EngineError::InvalidRecord { errors }),
    }
}

fn check_period(
    start: &str,
    end: &str,
    window: &EligibilityWindow,
) -> Result<(DateRange, u32), FieldError> {
    let range = parse_window_dates(start, end).map_err(|_| {
        FieldError::new(
            "window_start",
            "Fund period dates must be valid dates (YYYY-MM-DD).",
        )
    })?;

    match validate_date_range(&range, window) {
        Ok(months) => Ok((range, months)),
        Err(EngineError::RangeInverted { .. }) => Err(FieldError::new(
            "window_start",
            "Fund period start date cannot be after the end date.",
        )),
        Err(EngineError::OutsideWindow {
            window_start,
            window_end,
            ..
        }) => Err(FieldError::new(
            "window_end",
            format!(
                "Fund period dates must be between {} and {}.",
                window_start.format("%d/%m/%Y"),
                window_end.format("%d/%m/%Y")
            ),
        )),
        Err(EngineError::OutOfBounds { months, max }) => Err(FieldError::new(
            "window_end",
            format!(
                "The period must span between 1 and {} months, got {}.",
                max, months
            ),
        )),
        Err(other) => Err(FieldError::new("window_end", other.to_string())),
    }
}

/// Matches `local@domain.tld` with no whitespace and a single `@`.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |part: &str| {
        !part.is_empty() && !part.contains('@') && !part.contains(char::is_whitespace)
    };
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_form() -> WorkerForm {
        WorkerForm {
            name: "  Maria da Silva ".to_string(),
            cpf: "529.982.247-25".to_string(),
            rg: "1234567".to_string(),
            registration: "MAT-001".to_string(),
            workplace: "escola".to_string(),
            role: "Professora".to_string(),
            employment_status: "sem vinculo".to_string(),
            admission_date: "1995-03-01".to_string(),
            phone: "(98) 98765-4321".to_string(),
            email: "maria@example.com".to_string(),
            address: "Rua das Flores, 10".to_string(),
            bank: "001".to_string(),
            agency: "1234".to_string(),
            account: "56789-0".to_string(),
            account_type: "corrente".to_string(),
            window_start: "1997-01-15".to_string(),
            window_end: "2006-12-01".to_string(),
            weekly_hours: "20".to_string(),
            accepted_declaration: true,
        }
    }

    fn errors_for(form: &WorkerForm) -> Vec<FieldError> {
        match validate_record(form, &EngineConfig::default()) {
            Err(EngineError::InvalidRecord { errors }) => errors,
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let record = validate_record(&valid_form(), &EngineConfig::default()).unwrap();

        assert_eq!(record.name, "Maria da Silva");
        assert_eq!(record.cpf.as_str(), "52998224725");
        assert_eq!(record.workplace, Workplace::Escola);
        assert_eq!(record.employment_status, EmploymentStatus::SemVinculo);
        assert_eq!(record.phone, "98987654321");
        assert_eq!(record.weekly_hours, 20);
        assert_eq!(record.window_start, NaiveDate::from_ymd_opt(1997, 1, 15).unwrap());
        assert_eq!(record.months_worked, 120);
    }

    #[test]
    fn test_optional_fields_may_be_blank() {
        let mut form = valid_form();
        form.phone.clear();
        form.email.clear();
        form.rg.clear();
        form.registration.clear();

        let record = validate_record(&form, &EngineConfig::default()).unwrap();
        assert!(record.phone.is_empty());
        assert!(record.email.is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = errors_for(&WorkerForm::default());
        let fields = fields(&errors);

        for field in [
            "name",
            "cpf",
            "workplace",
            "bank",
            "window_start",
            "window_end",
            "weekly_hours",
        ] {
            assert!(fields.contains(&field), "missing error for {}", field);
        }
        assert!(fields.contains(&"accepted_declaration"));
    }

    #[test]
    fn test_blank_cpf_and_weekly_hours_report_format_too() {
        let mut form = valid_form();
        form.cpf = "   ".to_string();
        form.weekly_hours = String::new();
        let errors = errors_for(&form);

        assert_eq!(
            errors,
            vec![
                FieldError::new("cpf", "CPF is required."),
                FieldError::new("weekly_hours", "Weekly hours is required."),
                FieldError::new("cpf", "Invalid CPF."),
                FieldError::new("weekly_hours", "Weekly hours must be numeric."),
            ]
        );
    }

    #[test]
    fn test_invalid_cpf() {
        let mut form = valid_form();
        form.cpf = "111.111.111-11".to_string();
        let errors = errors_for(&form);
        assert_eq!(errors, vec![FieldError::new("cpf", "Invalid CPF.")]);
    }

    #[test]
    fn test_unknown_workplace_and_status() {
        let mut form = valid_form();
        form.workplace = "Prefeitura".to_string();
        form.employment_status = "licenciado".to_string();
        let errors = errors_for(&form);
        assert_eq!(fields(&errors), vec!["workplace", "employment_status"]);
    }

    #[test]
    fn test_phone_length() {
        let mut form = valid_form();
        form.phone = "12345".to_string();
        assert_eq!(fields(&errors_for(&form)), vec!["phone"]);

        form.phone = "(98) 3232-1010".to_string();
        assert!(validate_record(&form, &EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_email_shape() {
        for email in [
            "maria",
            "maria@",
            "@example.com",
            "maria@example",
            "ma ria@example.com",
            "a@b@c.com",
            "maria@.com",
            "maria@example.",
        ] {
            let mut form = valid_form();
            form.email = email.to_string();
            assert_eq!(fields(&errors_for(&form)), vec!["email"], "{}", email);
        }
    }

    #[test]
    fn test_period_outside_window() {
        let mut form = valid_form();
        form.window_start = "1996-12-31".to_string();
        let errors = errors_for(&form);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("01/01/1997"));
        assert!(errors[0].message.contains("31/12/2006"));
    }

    #[test]
    fn test_period_inverted() {
        let mut form = valid_form();
        form.window_start = "2000-01-01".to_string();
        form.window_end = "1999-01-01".to_string();
        let errors = errors_for(&form);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("cannot be after"));
    }

    #[test]
    fn test_period_unparsable() {
        let mut form = valid_form();
        form.window_end = "31/12/2006".to_string();
        let errors = errors_for(&form);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_weekly_hours_fixed() {
        let mut form = valid_form();
        form.weekly_hours = "40".to_string();
        let errors = errors_for(&form);
        assert_eq!(errors[0].message, "Weekly hours for the fund period are fixed at 20.");

        form.weekly_hours = "vinte".to_string();
        let errors = errors_for(&form);
        assert_eq!(errors[0].message, "Weekly hours must be numeric.");
    }

    #[test]
    fn test_declaration_required() {
        let mut form = valid_form();
        form.accepted_declaration = false;
        assert_eq!(fields(&errors_for(&form)), vec!["accepted_declaration"]);
    }

    #[test]
    fn test_custom_weekly_hours_config() {
        let config = EngineConfig {
            weekly_hours: 40,
            ..EngineConfig::default()
        };
        let mut form = valid_form();
        form.weekly_hours = "40".to_string();
        let record = validate_record(&form, &config).unwrap();
        assert_eq!(record.weekly_hours, 40);
    }
}
