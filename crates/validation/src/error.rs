//! Validation error types.

use thiserror::Error;

/// A violated form rule.
///
/// The `Display` text is the message shown next to the field, so each
/// variant maps to exactly one piece of user-facing copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email field left empty.
    #[error("Email es requerido")]
    EmailRequired,

    /// Email does not look like `local@domain.tld`.
    #[error("Email inválido")]
    EmailInvalid,

    /// Password field left empty.
    #[error("Contraseña es requerida")]
    PasswordRequired,

    /// Password shorter than the minimum length.
    #[error("Contraseña debe tener al menos 6 caracteres")]
    PasswordTooShort,

    /// Full name field left empty.
    #[error("Nombre completo es requerido")]
    FullNameRequired,

    /// Full name shorter than the minimum length after trimming.
    #[error("Nombre completo debe tener al menos 3 caracteres")]
    FullNameTooShort,

    /// Amount missing or unparseable.
    #[error("Monto es requerido")]
    AmountRequired,

    /// Amount is zero or negative.
    #[error("Monto debe ser mayor a 0")]
    AmountNotPositive,

    /// Amount above the platform maximum.
    #[error("Monto no puede exceder $1,000,000")]
    AmountTooLarge,

    /// Term missing or unparseable.
    #[error("Plazo es requerido")]
    TermRequired,

    /// Term is zero or negative.
    #[error("Plazo debe ser mayor a 0")]
    TermNotPositive,

    /// Term above the platform maximum.
    #[error("Plazo no puede exceder 360 meses")]
    TermTooLarge,

    /// Term is fractional.
    #[error("Plazo debe ser un número entero")]
    TermNotWhole,
}

/// Result type for validators.
pub type ValidationResult = Result<(), ValidationError>;
