//! fuelinglib — вывод, проверка и суммирование строк заправки (литры, цена за литр, сумма).
//!
//! Ядро (`derive`, `validate`, `aggregate`) — чистые функции над `Decimal`.
//! Строки с десятичной запятой разбираются и форматируются только в [`locale`].

pub mod aggregate;
pub mod consumption;
pub mod derive;
pub mod error;
pub mod event;
pub mod locale;
pub mod model;
pub mod traits;
pub mod validate;

pub mod formats {
    pub mod csv;
    pub mod xml;
}

pub use aggregate::{aggregate, Aggregate};
pub use derive::{derive, DerivedValues};
pub use error::{EntryError, FuelingError, Result};
pub use event::FuelingEvent;
pub use model::{EntryInput, Field, FuelLineEntry, FuelType};
pub use validate::{validate, validate_all};
