//! Граница с интерфейсом: числа с запятой (`42,5`), суммы `R$ 247,05`, пробег `89.450`.

use crate::{
    derive::{round, CURRENCY_DP, LITERS_DP, PRICE_PER_UNIT_DP},
    error::EntryError,
    model::EntryInput,
};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Разбирает число из поля ввода. Пустая строка — поле не заполнено.
///
/// Если в строке есть запятая, она десятичная, а точки считаются
/// разделителями тысяч (`1.234,5`). Без запятой точка десятичная:
/// `1.234` — это 1,234, а не 1234, как в поле ввода мобильного приложения,
/// где все символы кроме цифр и запятой просто выбрасывались.
pub fn parse_decimal(raw: &str) -> Result<Option<Decimal>, EntryError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let canonical = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s.to_string()
    };
    Decimal::from_str(&canonical)
        .map(Some)
        .map_err(|_| EntryError::InvalidNumber(raw.to_string()))
}

impl EntryInput {
    /// Собирает ввод из строк формы.
    pub fn from_locale(
        fuel_type: &str,
        liters: &str,
        price_per_unit: &str,
        total_price: &str,
    ) -> Result<Self, EntryError> {
        Ok(Self {
            fuel_type: fuel_type.trim().to_string(),
            liters: parse_decimal(liters)?,
            price_per_unit: parse_decimal(price_per_unit)?,
            total_price: parse_decimal(total_price)?,
        })
    }
}

/// Значение как есть, только с запятой вместо точки.
pub fn to_locale(value: Decimal) -> String {
    value.to_string().replace('.', ",")
}

/// Ровно `dp` знаков после запятой.
pub fn format_decimal(value: Decimal, dp: u32) -> String {
    let mut v = round(value, dp);
    v.rescale(dp);
    v.to_string().replace('.', ",")
}

pub fn format_liters(value: Decimal) -> String {
    format_decimal(value, LITERS_DP)
}

pub fn format_price_per_unit(value: Decimal) -> String {
    format_decimal(value, PRICE_PER_UNIT_DP)
}

pub fn format_currency(value: Decimal) -> String {
    format!("R$ {}", format_decimal(value, CURRENCY_DP))
}

pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", format_decimal(value, 1))
}

pub fn format_km(km: u32) -> String {
    let digits = km.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Пробег из поля ввода: берутся только цифры.
pub fn parse_km(raw: &str) -> Result<Option<u32>, EntryError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse()
        .map(Some)
        .map_err(|_| EntryError::InvalidNumber(raw.to_string()))
}
