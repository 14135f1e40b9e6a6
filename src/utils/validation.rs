use crate::utils::error::{Result, SupportError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SupportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SupportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    validate_range(field_name, port, 1, u16::MAX)
}

/// Exactly six hex digits, `RRGGBB`, no prefix.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    if value.len() != 6 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SupportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected six hexadecimal digits in RRGGBB format".to_string(),
        });
    }
    Ok(())
}

/// MySQL unquoted identifier: ASCII alphanumerics, `_` or `$`, 1 to 64 chars.
pub fn validate_identifier(field_name: &str, value: &str) -> Result<()> {
    let reason = if value.is_empty() {
        Some("Identifier cannot be empty".to_string())
    } else if value.len() > 64 {
        Some(format!("Identifier is {} chars, maximum is 64", value.len()))
    } else if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$'))
    {
        Some(format!("Character '{}' is not allowed in an identifier", bad))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(SupportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
