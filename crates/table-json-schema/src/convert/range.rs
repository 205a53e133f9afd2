//! Range resolution for length-mapped columns.

use crate::core::schema::{Column, ColumnSize};
use crate::dialect::{BoundPair, LengthBounds};

/// Minimum forced onto auto-increment columns; generated keys start at 1.
pub const AUTO_INCREMENT_MINIMUM: i64 = 1;

/// Resolve the effective `[min, max]` for a column.
///
/// Unsigned columns take the unsigned pair when the entry is split by
/// signedness; flat entries are used as-is. An explicit single-length size
/// replaces the maximum, and auto-increment columns are floored at
/// [`AUTO_INCREMENT_MINIMUM`].
pub fn resolve(column: &Column, bounds: &LengthBounds) -> BoundPair {
    let BoundPair(mut min, mut max) = match bounds {
        LengthBounds::Signed { unsigned, .. } if column.is_unsigned() => *unsigned,
        LengthBounds::Flat(pair) => *pair,
        LengthBounds::Signed { signed, .. } => *signed,
    };

    if let Some(ColumnSize::Length(length)) = column.size {
        max = length;
    }
    if column.is_auto_increment {
        min = AUTO_INCREMENT_MINIMUM;
    }

    BoundPair(min, max)
}
