use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_database_url(field_name: &str, url: &str) -> Result<()> {
    validate_non_empty_string(field_name, url)?;

    if !url.starts_with("sqlite:") {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url.to_string(),
            reason: "Only sqlite: URLs are supported".to_string(),
        });
    }

    if url.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url.to_string(),
            reason: "URL contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Required free-text answer. `message` is what the operator sees on rejection.
pub fn validate_required_text(value: &str, message: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError {
            message: message.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Salary answer: must parse as a finite number greater than zero.
pub fn validate_positive_amount(value: &str, message: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(AppError::ValidationError {
            message: message.to_string(),
        }),
    }
}
