//! Одна заправка: упорядоченный список строк, редактируемый по индексу.

use crate::{
    aggregate::{aggregate, Aggregate},
    derive::derive,
    error::EntryError,
    model::{EntryInput, FuelLineEntry, FuelType},
    validate::validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelingEvent {
    entries: Vec<FuelLineEntry>,
}

/// Проверка + вывод недостающего поля.
pub fn resolve(input: &EntryInput, require_fuel_type: bool) -> Result<FuelLineEntry, EntryError> {
    validate(input, require_fuel_type)?;
    let v = derive(input)?;
    Ok(FuelLineEntry {
        fuel_type: FuelType::from_label(&input.fuel_type),
        liters: v.liters,
        price_per_unit: v.price_per_unit,
        total_price: v.total_price,
    })
}

impl FuelingEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет строку в конец, возвращает её индекс.
    pub fn add(&mut self, input: &EntryInput) -> Result<usize, EntryError> {
        let entry = resolve(input, true)?;
        self.entries.push(entry);
        let index = self.entries.len() - 1;
        tracing::debug!(index, fuel_type = %self.entries[index].fuel_type, "fuel line added");
        Ok(index)
    }

    pub fn update(&mut self, index: usize, input: &EntryInput) -> Result<(), EntryError> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(EntryError::NoSuchEntry(index))?;
        *slot = resolve(input, true)?;
        tracing::debug!(index, "fuel line updated");
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<FuelLineEntry, EntryError> {
        if index >= self.entries.len() {
            return Err(EntryError::NoSuchEntry(index));
        }
        tracing::debug!(index, "fuel line removed");
        Ok(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[FuelLineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn aggregate(&self) -> Result<Aggregate, EntryError> {
        aggregate(&self.entries)
    }
}

impl From<Vec<FuelLineEntry>> for FuelingEvent {
    fn from(entries: Vec<FuelLineEntry>) -> Self {
        Self { entries }
    }
}
