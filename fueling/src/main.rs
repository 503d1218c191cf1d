use clap::{Args, Parser, Subcommand, ValueEnum};
use fuelinglib::{
    consumption::{check_odometer, km_per_liter, ConsumptionRating},
    error::{FuelingError, Result},
    event::FuelingEvent,
    formats::{csv::Csv, xml::SimpleXml},
    locale::{self, format_currency, format_liters, format_percentage, format_price_per_unit},
    traits::{ReadFormat, WriteFormat},
    EntryInput,
};
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Xml,
}

#[derive(Parser, Debug)]
#[command(name = "fueling", version, about = "Расчёт и проверка строк заправки")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Поля формы в том виде, как их вводят: `42,5`, `5,49`.
#[derive(Args, Debug)]
struct EntryArgs {
    /// Вид топлива
    #[arg(long = "fuel-type", default_value = "")]
    fuel_type: String,

    /// Литры
    #[arg(long, default_value = "")]
    liters: String,

    /// Цена за литр
    #[arg(long, default_value = "")]
    price: String,

    /// Сумма
    #[arg(long, default_value = "")]
    total: String,
}

impl EntryArgs {
    fn to_input(&self) -> Result<EntryInput> {
        Ok(EntryInput::from_locale(
            &self.fuel_type,
            &self.liters,
            &self.price,
            &self.total,
        )?)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Вычислить недостающее из трёх значений
    Derive(EntryArgs),

    /// Проверить строку заправки
    Validate {
        #[command(flatten)]
        entry: EntryArgs,

        /// Не требовать вид топлива
        #[arg(long)]
        allow_missing_type: bool,

        /// Показать все ошибки, а не только первую
        #[arg(long)]
        all: bool,
    },

    /// Итоги заправки из файла
    Summary {
        /// Входной файл (по умолчанию stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: Fmt,
    },

    /// Конвертация между форматами
    Convert {
        /// Входной файл (по умолчанию stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,

        /// Выходной файл (по умолчанию stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,

        #[arg(long = "in-format", value_enum)]
        in_format: Fmt,

        #[arg(long = "out-format", value_enum)]
        out_format: Fmt,
    },

    /// Расход по показаниям одометра
    Consumption {
        /// Текущий пробег, например 89.450
        #[arg(long)]
        km: String,

        /// Пробег на прошлой заправке
        #[arg(long = "last-km")]
        last_km: String,

        /// Литры прошлой заправки
        #[arg(long)]
        liters: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Derive(entry) => {
            let v = fuelinglib::derive(&entry.to_input()?)?;
            writeln!(
                out,
                "{} L x R$ {} = {}",
                format_liters(v.liters),
                format_price_per_unit(v.price_per_unit),
                format_currency(v.total_price)
            )?;
            if let Some(hint) = v.describe() {
                writeln!(out, "{hint}")?;
            }
        }
        Command::Validate { entry, allow_missing_type, all } => {
            let input = entry.to_input()?;
            let require = !allow_missing_type;
            if all {
                let errs = fuelinglib::validate_all(&input, require);
                for e in &errs {
                    writeln!(out, "{}", e.user_message())?;
                }
                if let Some(first) = errs.into_iter().next() {
                    return Err(first.into());
                }
            } else if let Err(e) = fuelinglib::validate(&input, require) {
                writeln!(out, "{}", e.user_message())?;
                return Err(e.into());
            }
            writeln!(out, "OK")?;
        }
        Command::Summary { input, format } => {
            let ev = read_event(input, format)?;
            let agg = ev.aggregate()?;
            for (i, e) in ev.entries().iter().enumerate() {
                let share = agg
                    .share(i)
                    .map(format_percentage)
                    .unwrap_or_else(|| "-".into());
                writeln!(
                    out,
                    "{:<20} {:>8} L  {:>12}  {:>6}",
                    e.fuel_type,
                    format_liters(e.liters),
                    format_currency(e.total_price),
                    share
                )?;
            }
            writeln!(
                out,
                "{:<20} {:>8} L  {:>12}",
                "Total",
                format_liters(agg.total_liters),
                format_currency(agg.total_value)
            )?;
        }
        Command::Convert { input, output, in_format, out_format } => {
            let ev = read_event(input, in_format)?;
            let mut writer: Box<dyn Write> = match output {
                Some(path) => Box::new(File::create(path)?),
                None => Box::new(io::stdout()),
            };
            match out_format {
                Fmt::Csv => Csv::write(&mut writer, &ev),
                Fmt::Xml => SimpleXml::write(&mut writer, &ev),
            }?;
            writer.flush()?;
        }
        Command::Consumption { km, last_km, liters } => {
            let km = required_km(&km, "km")?;
            let last_km = required_km(&last_km, "last-km")?;
            let liters = locale::parse_decimal(&liters)?
                .ok_or_else(|| FuelingError::Parse("liters is empty".into()))?;
            check_odometer(km, last_km)?;
            match km_per_liter(km - last_km, liters) {
                Some(v) => {
                    let rating = ConsumptionRating::from_km_per_liter(v);
                    writeln!(out, "{} km/L ({})", locale::format_decimal(v, 1), rating.label())?;
                    writeln!(out, "{}", rating.advice())?;
                }
                None => writeln!(out, "-")?,
            }
        }
    }

    out.flush().map_err(FuelingError::from)
}

fn required_km(raw: &str, name: &str) -> Result<u32> {
    locale::parse_km(raw)?.ok_or_else(|| FuelingError::Parse(format!("{name} is empty")))
}

fn read_event(input: Option<String>, format: Fmt) -> Result<FuelingEvent> {
    let reader: Box<dyn io::Read> = match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);
    let ev = match format {
        Fmt::Csv => Csv::read(br),
        Fmt::Xml => SimpleXml::read(br),
    }?;
    tracing::info!(lines = ev.len(), "fueling event loaded");
    Ok(ev)
}
