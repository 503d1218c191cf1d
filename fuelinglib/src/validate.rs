//! Проверка строки заправки перед добавлением в список.

use crate::{error::EntryError, model::EntryInput};
use rust_decimal::Decimal;

pub const MAX_LITERS: Decimal = Decimal::ONE_HUNDRED;

/// Возвращает первую нарушенную проверку в порядке:
/// вид топлива, количество полей, литры, цена, сумма.
pub fn validate(input: &EntryInput, require_fuel_type: bool) -> Result<(), EntryError> {
    match check(input, require_fuel_type).next() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Все нарушения в том же порядке; первое совпадает с [`validate`].
pub fn validate_all(input: &EntryInput, require_fuel_type: bool) -> Vec<EntryError> {
    check(input, require_fuel_type).collect()
}

fn check(input: &EntryInput, require_fuel_type: bool) -> impl Iterator<Item = EntryError> + '_ {
    let fuel_type = (require_fuel_type && input.fuel_type.trim().is_empty())
        .then_some(EntryError::MissingFuelType);
    let fields = (input.present_count() < 2).then_some(EntryError::InsufficientFields);
    let liters = input
        .liters
        .filter(|l| *l <= Decimal::ZERO || *l > MAX_LITERS)
        .map(|_| EntryError::LitersOutOfRange);
    let price = input
        .price_per_unit
        .filter(|p| *p <= Decimal::ZERO)
        .map(|_| EntryError::InvalidPrice);
    let total = input
        .total_price
        .filter(|t| *t <= Decimal::ZERO)
        .map(|_| EntryError::InvalidTotal);

    [fuel_type, fields, liters, price, total].into_iter().flatten()
}
