//! Вывод третьего значения из двух известных: литры, цена за литр, сумма.

use crate::{
    error::EntryError,
    locale,
    model::{EntryInput, Field},
};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const CURRENCY_DP: u32 = 2;
pub const LITERS_DP: u32 = 2;
pub const PRICE_PER_UNIT_DP: u32 = 3;

/// Полный набор чисел и какое из них было вычислено (если было).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedValues {
    pub liters: Decimal,
    pub price_per_unit: Decimal,
    pub total_price: Decimal,
    pub derived: Option<Field>,
}

impl DerivedValues {
    /// Подсказка под формой, например `Total: R$ 247,05`.
    pub fn describe(&self) -> Option<String> {
        let s = match self.derived? {
            Field::TotalPrice => format!("Total: {}", locale::format_currency(self.total_price)),
            Field::Liters => format!("Litros: {} L", locale::format_liters(self.liters)),
            Field::PricePerUnit => format!(
                "Preço/L: R$ {}",
                locale::format_price_per_unit(self.price_per_unit)
            ),
        };
        Some(s)
    }
}

pub(crate) fn round(v: Decimal, dp: u32) -> Decimal {
    v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `field` — то, что вычисляется; `den_field` — делитель.
fn checked_div(
    num: Decimal,
    den: Decimal,
    field: Field,
    den_field: Field,
) -> Result<Decimal, EntryError> {
    if den.is_zero() {
        return Err(EntryError::DivisionByZero { field: den_field });
    }
    num.checked_div(den).ok_or(EntryError::Overflow { field })
}

/// Дополняет ввод недостающим значением.
///
/// Если заполнены все три поля, они возвращаются без пересчёта и без
/// проверки согласованности.
pub fn derive(input: &EntryInput) -> Result<DerivedValues, EntryError> {
    let out = match (input.liters, input.price_per_unit, input.total_price) {
        (Some(l), Some(p), None) => {
            let total = l
                .checked_mul(p)
                .map(|t| round(t, CURRENCY_DP))
                .ok_or(EntryError::Overflow { field: Field::TotalPrice })?;
            DerivedValues {
                liters: l,
                price_per_unit: p,
                total_price: total,
                derived: Some(Field::TotalPrice),
            }
        }
        (None, Some(p), Some(t)) => DerivedValues {
            liters: round(checked_div(t, p, Field::Liters, Field::PricePerUnit)?, LITERS_DP),
            price_per_unit: p,
            total_price: t,
            derived: Some(Field::Liters),
        },
        (Some(l), None, Some(t)) => DerivedValues {
            liters: l,
            price_per_unit: round(
                checked_div(t, l, Field::PricePerUnit, Field::Liters)?,
                PRICE_PER_UNIT_DP,
            ),
            total_price: t,
            derived: Some(Field::PricePerUnit),
        },
        (Some(l), Some(p), Some(t)) => DerivedValues {
            liters: l,
            price_per_unit: p,
            total_price: t,
            derived: None,
        },
        _ => return Err(EntryError::Incomplete),
    };
    tracing::debug!(
        liters = %out.liters,
        price_per_unit = %out.price_per_unit,
        total_price = %out.total_price,
        derived = ?out.derived,
        "derived fuel line"
    );
    Ok(out)
}
