//! Доменные модели: строка заправки, частичный ввод, виды топлива.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Числовое поле строки заправки.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Field {
    Liters,
    PricePerUnit,
    TotalPrice,
}

impl Field {
    /// Подпись поля на экране ввода.
    pub fn label(self) -> &'static str {
        match self {
            Field::Liters => "Litros",
            Field::PricePerUnit => "Preço/L",
            Field::TotalPrice => "Valor total",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Liters => "liters",
            Field::PricePerUnit => "price per unit",
            Field::TotalPrice => "total price",
        })
    }
}

/// Вид топлива. Неизвестные подписи сохраняются как есть.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FuelType {
    GasolinaComum,
    GasolinaAditivada,
    Etanol,
    Diesel,
    Gnv,
    Custom(String),
}

impl FuelType {
    pub const KNOWN: [FuelType; 5] = [
        FuelType::GasolinaComum,
        FuelType::GasolinaAditivada,
        FuelType::Etanol,
        FuelType::Diesel,
        FuelType::Gnv,
    ];

    pub fn label(&self) -> &str {
        match self {
            FuelType::GasolinaComum => "Gasolina Comum",
            FuelType::GasolinaAditivada => "Gasolina Aditivada",
            FuelType::Etanol => "Etanol",
            FuelType::Diesel => "Diesel",
            FuelType::Gnv => "GNV",
            FuelType::Custom(s) => s,
        }
    }

    /// Сопоставление по подписи или по id (`gasolina_comum`), без учёта регистра.
    pub fn from_label(raw: &str) -> Self {
        let s = raw.trim();
        let key = s.to_lowercase().replace('_', " ");
        Self::KNOWN
            .into_iter()
            .find(|t| t.label().to_lowercase() == key)
            .unwrap_or_else(|| FuelType::Custom(s.to_string()))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FuelType::Custom(_))
    }
}

impl From<String> for FuelType {
    fn from(s: String) -> Self {
        FuelType::from_label(&s)
    }
}

impl From<FuelType> for String {
    fn from(t: FuelType) -> Self {
        t.label().to_string()
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// То, что пришло с формы: одно из трёх чисел может отсутствовать.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryInput {
    pub fuel_type: String,
    pub liters: Option<Decimal>,
    pub price_per_unit: Option<Decimal>,
    pub total_price: Option<Decimal>,
}

impl EntryInput {
    pub fn new(fuel_type: impl Into<String>) -> Self {
        Self {
            fuel_type: fuel_type.into(),
            ..Self::default()
        }
    }

    pub fn liters(mut self, v: Decimal) -> Self {
        self.liters = Some(v);
        self
    }

    pub fn price_per_unit(mut self, v: Decimal) -> Self {
        self.price_per_unit = Some(v);
        self
    }

    pub fn total_price(mut self, v: Decimal) -> Self {
        self.total_price = Some(v);
        self
    }

    /// Сколько числовых полей заполнено.
    pub fn present_count(&self) -> usize {
        [self.liters, self.price_per_unit, self.total_price]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

impl From<&FuelLineEntry> for EntryInput {
    fn from(e: &FuelLineEntry) -> Self {
        Self {
            fuel_type: e.fuel_type.label().to_string(),
            liters: Some(e.liters),
            price_per_unit: Some(e.price_per_unit),
            total_price: Some(e.total_price),
        }
    }
}

/// Строка заправки после вывода недостающего поля.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelLineEntry {
    pub fuel_type: FuelType,
    pub liters: Decimal,
    pub price_per_unit: Decimal,
    pub total_price: Decimal,
}
