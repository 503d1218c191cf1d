//! Итоги заправки: сумма литров, сумма денег, доля каждой строки.

use crate::{
    derive::round,
    error::EntryError,
    model::{Field, FuelLineEntry},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const SHARE_DP: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub total_liters: Decimal,
    pub total_value: Decimal,
    /// Доля литров по индексу строки, %. `None`, если литров всего ноль.
    pub shares: Vec<Option<Decimal>>,
}

impl Aggregate {
    pub fn share(&self, index: usize) -> Option<Decimal> {
        self.shares.get(index).copied().flatten()
    }
}

fn checked_sum(
    entries: &[FuelLineEntry],
    field: Field,
    value: impl Fn(&FuelLineEntry) -> Decimal,
) -> Result<Decimal, EntryError> {
    entries
        .iter()
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(value(e)))
        .ok_or(EntryError::Overflow { field })
}

/// Переполнение суммы возвращается как `EntryError::Overflow`.
pub fn aggregate(entries: &[FuelLineEntry]) -> Result<Aggregate, EntryError> {
    let total_liters = checked_sum(entries, Field::Liters, |e| e.liters)?;
    let total_value = checked_sum(entries, Field::TotalPrice, |e| e.total_price)?;

    let shares = entries
        .iter()
        .map(|e| {
            if total_liters.is_zero() {
                return None;
            }
            e.liters
                .checked_div(total_liters)
                .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
                .map(|p| round(p, SHARE_DP))
        })
        .collect();

    Ok(Aggregate {
        total_liters,
        total_value,
        shares,
    })
}
