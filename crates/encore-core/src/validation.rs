//! # Validation Module
//!
//! Structural validation for gig records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Upstream caller                                              │
//! │  ├── Ownership scoping (user_id), enum decoding                        │
//! │  └── Defaults absent numeric fields to 0                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - structural checks at the write boundary        │
//! │  ├── Identity present and well-formed                                  │
//! │  └── Deal shape within representable range                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculator - defensive clamping                              │
//! │  └── Negative/oversized numerics degrade to defined values;            │
//! │      a report never hard-fails on one bad record                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Gig;
use crate::{MAX_BAND_MEMBERS, MAX_GIG_NAME_LEN};

// =============================================================================
// Gig Validation
// =============================================================================

/// Validates a gig record before it is written to storage.
///
/// This enforces structural validity only. It deliberately does NOT
/// reject negative fees or advances — those degrade through the
/// calculator's clamping so existing bad rows still report — but it
/// stops new malformed rows from being created.
pub fn validate_gig(gig: &Gig) -> ValidationResult<()> {
    validate_uuid("id", &gig.id)?;
    validate_required("user_id", &gig.user_id)?;
    validate_gig_name(&gig.name)?;
    validate_fee_cents("performance_fee", gig.performance_fee_cents)?;
    validate_fee_cents("technical_fee", gig.technical_fee_cents)?;
    validate_fee_cents("technical_fee_claim", gig.technical_fee_claim_cents)?;
    validate_fee_cents("advance_received", gig.advance_received_cents)?;
    validate_fee_cents("advance_to_musicians", gig.advance_to_musicians_cents)?;
    validate_musician_count(gig.number_of_musicians)?;
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a required string field is present and non-blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a gig display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_gig_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)?;

    if name.trim().len() > MAX_GIG_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_GIG_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use encore_core::validation::validate_uuid;
///
/// assert!(validate_uuid("id", "550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("id", "not-a-uuid").is_err());
/// ```
pub fn validate_uuid(field: &str, id: &str) -> ValidationResult<()> {
    validate_required(field, id)?;

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a fee or advance amount in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (fee not negotiated / nothing advanced)
pub fn validate_fee_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates the band size sharing the musician pot.
///
/// ## Rules
/// - Must be at least 1 (the calculator still degrades gracefully on
///   legacy rows with 0, but new rows must name a band)
/// - Must not exceed MAX_BAND_MEMBERS
pub fn validate_musician_count(count: i64) -> ValidationResult<()> {
    if count < 1 || count > MAX_BAND_MEMBERS {
        return Err(ValidationError::OutOfRange {
            field: "number_of_musicians".to_string(),
            min: 1,
            max: MAX_BAND_MEMBERS,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
