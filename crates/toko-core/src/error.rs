//! # Error Types
//!
//! Domain-specific error types for toko-core.
//!
//! The state containers themselves never fail: cart, wishlist and theme
//! mutations are total, and absent ids are no-ops. Errors arise only at
//! the command boundary — a catalog lookup that misses, or input that
//! fails validation before a mutation runs.
//!
//! Flow: `ValidationError` → `CoreError` → `ApiError` (toko-storefront)

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Command-boundary failures in the storefront domain.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog product carries this id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised before any state mutation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
