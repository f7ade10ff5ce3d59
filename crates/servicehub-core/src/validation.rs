//! # Validation Module
//!
//! Input validation for the signup and job-posting forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty fields)                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Required-field and format checks                                  │
//! │  └── Runs BEFORE any network call; nothing is sent on failure          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Auth backend                                                 │
//! │  ├── Uniqueness (email taken)                                          │
//! │  └── Schema constraints                                                │
//! │                                                                         │
//! │  Defense in depth: each layer catches different errors                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use servicehub_core::validation::{validate_email, validate_name};
//!
//! // Normalized email comes back ready for the request body
//! assert_eq!(validate_email(" JANE@X.com ").unwrap(), "jane@x.com");
//!
//! validate_name("Jane").unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a signup display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates and normalizes an email address.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must look like `name@example.com`: a local part, an `@`, and a dotted
///   domain (the same shape the auth backend enforces)
///
/// ## Returns
/// The trimmed, lowercased email, ready for the signup request body.
///
/// ## Example
/// ```rust
/// use servicehub_core::validation::validate_email;
///
/// assert_eq!(validate_email("JANE@X.com").unwrap(), "jane@x.com");
/// assert!(validate_email("not-an-email").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = email.trim().to_lowercase();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "must look like name@example.com".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() {
        return Err(invalid());
    }

    // Domain needs at least one dot with characters on both sides
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(email),
        _ => Err(invalid()),
    }
}

/// Validates a signup password.
///
/// ## Rules
/// - Must not be empty
///
/// No strength rules beyond that: the auth backend accepts any non-empty
/// password today, and rejecting locally what the server accepts would strand
/// users.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a job budget in paise.
///
/// ## Rules
/// - Must be positive (> 0); a job with no budget attracts no bids
pub fn validate_budget_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "budget".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Jane").is_ok());
        assert!(validate_name("  Jane Doe  ").is_ok());

        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(150)).is_err());
    }

    #[test]
    fn test_validate_email_normalizes() {
        assert_eq!(validate_email("JANE@X.com").unwrap(), "jane@x.com");
        assert_eq!(validate_email("  user@example.com  ").unwrap(), "user@example.com");
    }

    #[test]
    fn test_validate_email_rejects_bad_shapes() {
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@host.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("a").is_ok());

        assert!(validate_password("").is_err());
        assert!(validate_password("   ").is_err());
    }

    #[test]
    fn test_validate_budget_cents() {
        assert!(validate_budget_cents(50000).is_ok());
        assert!(validate_budget_cents(0).is_err());
        assert!(validate_budget_cents(-100).is_err());
    }
}
