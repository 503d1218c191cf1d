//! Пробег и расход: проверка одометра, км/л, сравнение с прошлой заправкой.

use crate::{derive::round, error::EntryError, event::FuelingEvent};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub fn check_odometer(current_km: u32, last_km: u32) -> Result<(), EntryError> {
    if current_km < last_km {
        return Err(EntryError::OdometerBelowLast { last_km });
    }
    Ok(())
}

/// Расход, км/л, один знак после запятой.
pub fn km_per_liter(distance_km: u32, liters: Decimal) -> Option<Decimal> {
    if distance_km == 0 || liters <= Decimal::ZERO {
        return None;
    }
    Decimal::from(distance_km)
        .checked_div(liters)
        .map(|v| round(v, 1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumptionRating {
    Excellent,
    Good,
    Average,
    Low,
}

impl ConsumptionRating {
    pub fn from_km_per_liter(v: Decimal) -> Self {
        if v >= Decimal::from(12) {
            ConsumptionRating::Excellent
        } else if v >= Decimal::TEN {
            ConsumptionRating::Good
        } else if v >= Decimal::from(8) {
            ConsumptionRating::Average
        } else {
            ConsumptionRating::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsumptionRating::Excellent => "Excelente",
            ConsumptionRating::Good => "Bom",
            ConsumptionRating::Average => "Médio",
            ConsumptionRating::Low => "Baixo",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            ConsumptionRating::Excellent => {
                "Parabéns! Seu veículo está com consumo excelente. Continue dirigindo de forma econômica."
            }
            ConsumptionRating::Good => {
                "Bom consumo! Seu veículo está dentro da média esperada para o modelo."
            }
            ConsumptionRating::Average => {
                "Consumo médio. Considere revisar hábitos de direção e manutenção do veículo."
            }
            ConsumptionRating::Low => {
                "Consumo abaixo do esperado. Recomendamos verificar a manutenção do veículo."
            }
        }
    }
}

/// Заправка с датой и показанием одометра.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelingRecord {
    pub date: NaiveDate,
    pub odometer_km: u32,
    pub event: FuelingEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub distance_km: u32,
    pub days_between: i64,
    /// Пробег / литры прошлой заправки, км/л.
    pub consumption: Option<Decimal>,
    pub avg_daily_km: Option<u32>,
    pub price_change_pct: Option<Decimal>,
    pub value_change_pct: Option<Decimal>,
}

impl Comparison {
    pub fn between(current: &FuelingRecord, previous: &FuelingRecord) -> Result<Self, EntryError> {
        check_odometer(current.odometer_km, previous.odometer_km)?;
        let distance_km = current.odometer_km - previous.odometer_km;
        let days_between = (current.date - previous.date).num_days();

        let prev_total = previous.event.aggregate()?;
        let cur_total = current.event.aggregate()?;

        let avg_daily_km = u64::try_from(days_between)
            .ok()
            .filter(|d| *d > 0)
            .map(|days| {
                // к ближайшему, половина вверх
                let avg = (u64::from(distance_km) + days / 2) / days;
                u32::try_from(avg).unwrap_or(u32::MAX)
            });

        let price_change_pct = match (current.event.entries().first(), previous.event.entries().first()) {
            (Some(c), Some(p)) => change_pct(c.price_per_unit, p.price_per_unit),
            _ => None,
        };

        Ok(Self {
            distance_km,
            days_between,
            consumption: km_per_liter(distance_km, prev_total.total_liters),
            avg_daily_km,
            price_change_pct,
            value_change_pct: change_pct(cur_total.total_value, prev_total.total_value),
        })
    }

    pub fn rating(&self) -> Option<ConsumptionRating> {
        self.consumption.map(ConsumptionRating::from_km_per_liter)
    }
}

fn change_pct(current: Decimal, base: Decimal) -> Option<Decimal> {
    if base.is_zero() {
        return None;
    }
    current
        .checked_sub(base)
        .and_then(|d| d.checked_div(base))
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .map(|v| round(v, 1))
}
