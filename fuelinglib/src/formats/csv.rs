//! CSV с разделителем `;` и десятичной запятой, заголовки:
//! fuel_type;liters;price_per_unit;total_price
//!
//! Пустая ячейка — поле не заполнено; при чтении оно выводится из двух других.

use crate::{
    error::Result,
    event::FuelingEvent,
    locale::to_locale,
    model::EntryInput,
};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::{BufRead, Write};

const DELIMITER: u8 = b';';

#[derive(serde::Deserialize)]
struct CsvRow {
    fuel_type: String,
    liters: Option<String>,
    price_per_unit: Option<String>,
    total_price: Option<String>,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    fuel_type: &'a str,
    liters: String,
    price_per_unit: String,
    total_price: String,
}

pub struct Csv;

impl crate::traits::ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<FuelingEvent> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .trim(csv::Trim::All)
            .from_reader(r);
        let mut event = FuelingEvent::new();

        for (n, rec) in rdr.deserialize::<CsvRow>().enumerate() {
            let row = rec?;
            let input = EntryInput::from_locale(
                &row.fuel_type,
                row.liters.as_deref().unwrap_or_default(),
                row.price_per_unit.as_deref().unwrap_or_default(),
                row.total_price.as_deref().unwrap_or_default(),
            )?;
            if let Err(e) = event.add(&input) {
                // строка 1 — заголовок
                tracing::warn!(line = n + 2, error = %e, "rejected csv row");
                return Err(e.into());
            }
        }

        Ok(event)
    }
}

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, ev: &FuelingEvent) -> Result<()> {
        let mut wrt = WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_writer(&mut w);

        for e in ev.entries() {
            wrt.serialize(CsvOutRow {
                fuel_type: e.fuel_type.label(),
                liters: to_locale(e.liters),
                price_per_unit: to_locale(e.price_per_unit),
                total_price: to_locale(e.total_price),
            })?;
        }
        wrt.flush()?;
        Ok(())
    }
}
