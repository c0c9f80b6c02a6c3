//! Unified error codes for the EcoBazaarX pricing workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / cart errors
//! - 5xxx: Eco points errors
//! - 6xxx: Product and carbon rule errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that callers in any
/// language can match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Invalid format
    InvalidFormat = 6,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Line item has an invalid price, quantity or eco points value
    InvalidLineItem = 4101,
    /// Eco points for this order were already credited
    OrderAlreadySettled = 4102,

    // ==================== 5xxx: Eco points ====================
    /// Buyer's accumulated eco points total is invalid
    InvalidPointsTotal = 5001,
    /// Eco points amount is invalid
    InvalidPointsAmount = 5002,

    // ==================== 6xxx: Product ====================
    /// Carbon rules are invalid
    InvalidCarbonRules = 6101,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "OK",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Order
            ErrorCode::InvalidLineItem => "Invalid cart contents",
            ErrorCode::OrderAlreadySettled => "Eco points for this order were already credited",

            // Eco points
            ErrorCode::InvalidPointsTotal => "Eco points total must not be negative",
            ErrorCode::InvalidPointsAmount => "Eco points amount must not be negative",

            // Product
            ErrorCode::InvalidCarbonRules => "Carbon rules are invalid",

            // System
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            6 => Ok(ErrorCode::InvalidFormat),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4101 => Ok(ErrorCode::InvalidLineItem),
            4102 => Ok(ErrorCode::OrderAlreadySettled),

            // Eco points
            5001 => Ok(ErrorCode::InvalidPointsTotal),
            5002 => Ok(ErrorCode::InvalidPointsAmount),

            // Product
            6101 => Ok(ErrorCode::InvalidCarbonRules),

            // System
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
