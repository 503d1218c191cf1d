//! Единый тип ошибок публичного API.

use crate::model::Field;
use thiserror::Error;

/// Ошибки ввода одной строки заправки. Все исправимы пользователем.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("at least two of liters, price per unit and total price are required")]
    Incomplete,

    #[error("cannot derive: {field} is zero")]
    DivisionByZero { field: Field },

    #[error("fuel type is required")]
    MissingFuelType,

    #[error("fill in at least two fields (e.g. liters + price per unit)")]
    InsufficientFields,

    #[error("liters must be greater than 0 and at most 100")]
    LitersOutOfRange,

    #[error("price per unit must be greater than zero")]
    InvalidPrice,

    #[error("total price must be greater than zero")]
    InvalidTotal,

    #[error("no entry at index {0}")]
    NoSuchEntry(usize),

    #[error("odometer reading must be at least {last_km} km")]
    OdometerBelowLast { last_km: u32 },

    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("value out of range: {field} does not fit")]
    Overflow { field: Field },
}

impl EntryError {
    /// Текст для экрана ввода (pt-BR), как в мобильном приложении.
    pub fn user_message(&self) -> String {
        match self {
            EntryError::Incomplete => "Informe mais um valor para calcular".into(),
            EntryError::InsufficientFields => {
                "Preencha pelo menos 2 campos (ex: litros + preço/L)".into()
            }
            EntryError::DivisionByZero { field } => {
                format!("{} não pode ser zero", field.label())
            }
            EntryError::MissingFuelType => "Selecione o tipo de combustível".into(),
            EntryError::LitersOutOfRange => "Litros deve ser entre 0,1 e 100".into(),
            EntryError::InvalidPrice => "Preço deve ser maior que zero".into(),
            EntryError::InvalidTotal => "Valor total deve ser maior que zero".into(),
            EntryError::NoSuchEntry(i) => format!("Item {} não encontrado", i + 1),
            EntryError::OdometerBelowLast { last_km } => format!(
                "KM deve ser maior ou igual a {}",
                crate::locale::format_km(*last_km)
            ),
            EntryError::InvalidNumber(raw) => format!("Valor inválido: {raw}"),
            EntryError::Overflow { field } => {
                format!("{}: valor muito grande", field.label())
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum FuelingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Entry(#[from] EntryError),
}

pub type Result<T> = std::result::Result<T, FuelingError>;
