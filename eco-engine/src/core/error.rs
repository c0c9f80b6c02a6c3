//! Engine error types
//!
//! Domain errors stay small `thiserror` enums; callers that need a code
//! for an API or UI convert them into [`AppError`].

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Which line item field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    UnitPrice,
    Quantity,
    EcoPointsPerUnit,
}

impl LineItemField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnitPrice => "unit_price",
            Self::Quantity => "quantity",
            Self::EcoPointsPerUnit => "eco_points_per_unit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("invalid line item at index {index}: {reason}")]
    InvalidLineItem {
        index: usize,
        field: LineItemField,
        reason: String,
    },

    #[error("eco points total must not be negative, got {0}")]
    InvalidPointsTotal(Decimal),

    #[error("invalid carbon rules: {0}")]
    InvalidCarbonRules(String),

    #[error("{0} exceeds the representable range")]
    AmountOutOfRange(&'static str),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointsError {
    #[error("eco points amount must not be negative, got {0}")]
    InvalidPoints(Decimal),

    #[error("eco points for order {order_id} were already credited")]
    OrderAlreadySettled { order_id: String },

    #[error("eco points balance out of range after adding {0}")]
    PointsOutOfRange(Decimal),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl PricingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidLineItem { .. } => ErrorCode::InvalidLineItem,
            Self::InvalidPointsTotal(_) => ErrorCode::InvalidPointsTotal,
            Self::InvalidCarbonRules(_) => ErrorCode::InvalidCarbonRules,
            Self::AmountOutOfRange(_) => ErrorCode::ValueOutOfRange,
        }
    }
}

impl PointsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPoints(_) => ErrorCode::InvalidPointsAmount,
            Self::OrderAlreadySettled { .. } => ErrorCode::OrderAlreadySettled,
            Self::PointsOutOfRange(_) => ErrorCode::ValueOutOfRange,
            Self::Pricing(e) => e.code(),
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            PricingError::InvalidLineItem { index, field, .. } => app
                .with_detail("index", index)
                .with_detail("field", field.as_str()),
            PricingError::InvalidPointsTotal(points) => {
                app.with_detail("total_points", points.to_string())
            }
            PricingError::AmountOutOfRange(field) => app.with_detail("field", field),
            PricingError::InvalidCarbonRules(_) => app,
        }
    }
}

impl From<PointsError> for AppError {
    fn from(err: PointsError) -> Self {
        if let PointsError::Pricing(e) = err {
            return e.into();
        }
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            PointsError::OrderAlreadySettled { order_id } => app.with_detail("order_id", order_id),
            _ => app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_line_item_to_app_error() {
        let err = PricingError::InvalidLineItem {
            index: 3,
            field: LineItemField::Quantity,
            reason: "quantity must be positive, got 0".to_string(),
        };
        let app: AppError = err.into();

        assert_eq!(app.code, ErrorCode::InvalidLineItem);
        assert_eq!(
            app.message,
            "invalid line item at index 3: quantity must be positive, got 0"
        );
        let details = app.details.unwrap();
        assert_eq!(details.get("index").unwrap(), 3);
        assert_eq!(details.get("field").unwrap(), "quantity");
    }

    #[test]
    fn test_invalid_points_total_to_app_error() {
        let app: AppError = PricingError::InvalidPointsTotal(dec!(-5)).into();
        assert_eq!(app.code, ErrorCode::InvalidPointsTotal);
        assert_eq!(app.details.unwrap().get("total_points").unwrap(), "-5");
    }

    #[test]
    fn test_points_error_codes() {
        assert_eq!(
            PointsError::InvalidPoints(dec!(-1)).code(),
            ErrorCode::InvalidPointsAmount
        );
        assert_eq!(
            PointsError::OrderAlreadySettled {
                order_id: "o-1".into()
            }
            .code(),
            ErrorCode::OrderAlreadySettled
        );
        let wrapped: PointsError = PricingError::InvalidPointsTotal(dec!(-1)).into();
        assert_eq!(wrapped.code(), ErrorCode::InvalidPointsTotal);

        let app: AppError = wrapped.into();
        assert_eq!(app.code, ErrorCode::InvalidPointsTotal);
    }

    #[test]
    fn test_out_of_range_errors_map_to_value_out_of_range() {
        let app: AppError = PricingError::AmountOutOfRange("total_payable").into();
        assert_eq!(app.code, ErrorCode::ValueOutOfRange);
        assert_eq!(app.details.unwrap().get("field").unwrap(), "total_payable");

        let app: AppError = PointsError::PointsOutOfRange(dec!(1)).into();
        assert_eq!(app.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_order_already_settled_detail() {
        let app: AppError = PointsError::OrderAlreadySettled {
            order_id: "o-42".into(),
        }
        .into();
        assert_eq!(app.details.unwrap().get("order_id").unwrap(), "o-42");
    }
}
