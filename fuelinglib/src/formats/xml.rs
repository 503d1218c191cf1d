//! Простой XML: <FuelingEvent><entries>...</entries></FuelingEvent>

use crate::{
    error::{FuelingError, Result},
    event::FuelingEvent,
    model::EntryInput,
};
use quick_xml::{de::from_reader, se::to_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Serialize, Deserialize, Debug)]
struct XmlEntry {
    fuel_type: String,
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    liters: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    price_per_unit: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing_if = "Option::is_none")]
    total_price: Option<Decimal>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename = "FuelingEvent")]
struct XmlEvent {
    #[serde(default)]
    entries: XmlEntries,
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct XmlEntries {
    #[serde(default, rename = "entry")]
    entry: Vec<XmlEntry>,
}

pub struct SimpleXml;

impl crate::traits::ReadFormat for SimpleXml {
    fn read<R: BufRead>(r: R) -> Result<FuelingEvent> {
        let x: XmlEvent = from_reader(r).map_err(|e| FuelingError::Xml(format!("{e}")))?;

        let mut event = FuelingEvent::new();
        for (n, e) in x.entries.entry.into_iter().enumerate() {
            let input = EntryInput {
                fuel_type: e.fuel_type,
                liters: e.liters,
                price_per_unit: e.price_per_unit,
                total_price: e.total_price,
            };
            if let Err(err) = event.add(&input) {
                tracing::warn!(entry = n, error = %err, "rejected xml entry");
                return Err(err.into());
            }
        }
        Ok(event)
    }
}

impl crate::traits::WriteFormat for SimpleXml {
    fn write<W: Write>(mut w: W, ev: &FuelingEvent) -> Result<()> {
        let entry = ev
            .entries()
            .iter()
            .map(|e| XmlEntry {
                fuel_type: e.fuel_type.label().to_string(),
                liters: Some(e.liters),
                price_per_unit: Some(e.price_per_unit),
                total_price: Some(e.total_price),
            })
            .collect();

        let x = XmlEvent {
            entries: XmlEntries { entry },
        };

        let s = to_string(&x).map_err(|e| FuelingError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
