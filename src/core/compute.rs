use std::time::Duration;

use crate::domain::model::Scalar;
use crate::utils::error::{Result, ShopkitError};

/// Derived metric for a raw value: character count for text, double for
/// numbers.
pub fn measure(value: &Scalar) -> f64 {
    match value {
        Scalar::Text(text) => text.chars().count() as f64,
        Scalar::Number(number) => number * 2.0,
    }
}

/// Square `value` after waiting out `delay`. Negative input fails, but only
/// after the delay has elapsed, matching the deferred-check shape.
pub async fn square_later(value: i32, delay: Duration) -> Result<i64> {
    tracing::debug!("Squaring {} after {:?}", value, delay);
    tokio::time::sleep(delay).await;

    if value < 0 {
        return Err(ShopkitError::NegativeInput { value });
    }

    Ok(i64::from(value) * i64::from(value))
}
