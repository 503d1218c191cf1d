//! Чтение и запись заправки (`FuelingEvent`) во внешних форматах.

use crate::{error::Result, event::FuelingEvent};
use std::io::{BufRead, Write};

/// Разбор заправки. Каждая строка проходит проверку и вывод
/// недостающего поля, как при ручном вводе через [`FuelingEvent::add`].
pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<FuelingEvent>;
}

/// Запись уже вычисленных строк, в порядке отображения.
pub trait WriteFormat {
    fn write<W: Write>(w: W, ev: &FuelingEvent) -> Result<()>;
}

/// Формат, который умеет и читать, и писать (CSV, XML).
pub trait Format: ReadFormat + WriteFormat {}
impl<T: ReadFormat + WriteFormat> Format for T {}
