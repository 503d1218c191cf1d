use fuelinglib::{EntryError, EntryInput, FuelType, FuelingEvent};
use rust_decimal::Decimal;

fn form(t: &str, liters: &str, price: &str, total: &str) -> EntryInput {
    EntryInput::from_locale(t, liters, price, total).expect("parse form")
}

#[test]
fn add_derives_and_keeps_insertion_order() {
    let mut ev = FuelingEvent::new();
    assert_eq!(ev.add(&form("Gasolina Comum", "42,5", "5,49", "")).expect("add"), 0);
    assert_eq!(ev.add(&form("Etanol", "", "3,89", "19,45")).expect("add"), 1);

    let e = ev.entries();
    assert_eq!(e[0].fuel_type, FuelType::GasolinaComum);
    assert_eq!(e[0].total_price, Decimal::new(23333, 2));
    assert_eq!(e[1].fuel_type, FuelType::Etanol);
    assert_eq!(e[1].liters, Decimal::new(5, 0));

    let agg = ev.aggregate().expect("aggregate");
    assert_eq!(agg.total_liters, Decimal::new(475, 1));
}

#[test]
fn rejected_line_is_not_added() {
    let mut ev = FuelingEvent::new();
    assert_eq!(
        ev.add(&form("", "10", "5", "")),
        Err(EntryError::MissingFuelType)
    );
    assert_eq!(
        ev.add(&form("Diesel", "", "0", "100")),
        Err(EntryError::InvalidPrice)
    );
    assert!(ev.is_empty());
}

#[test]
fn update_and_remove_by_index() {
    let mut ev = FuelingEvent::new();
    ev.add(&form("Diesel", "30", "5,99", "")).expect("add");
    ev.add(&form("GNV", "10", "4,10", "")).expect("add");

    ev.update(0, &form("Diesel", "20", "5,99", "")).expect("update");
    assert_eq!(ev.entries()[0].total_price, Decimal::new(11980, 2));

    let removed = ev.remove(1).expect("remove");
    assert_eq!(removed.fuel_type, FuelType::Gnv);
    assert_eq!(ev.len(), 1);

    assert_eq!(ev.remove(5), Err(EntryError::NoSuchEntry(5)));
    assert_eq!(
        ev.update(3, &form("Diesel", "1", "1", "")),
        Err(EntryError::NoSuchEntry(3))
    );
}

#[test]
fn custom_fuel_type_is_kept_verbatim() {
    let mut ev = FuelingEvent::new();
    ev.add(&form("Gasolina Podium", "10", "7,20", "")).expect("add");
    let t = &ev.entries()[0].fuel_type;
    assert!(t.is_custom());
    assert_eq!(t.label(), "Gasolina Podium");
    assert_eq!(FuelType::from_label("gasolina_aditivada"), FuelType::GasolinaAditivada);
}

#[test]
fn bad_number_in_form() {
    assert_eq!(
        EntryInput::from_locale("Etanol", "4x", "", ""),
        Err(EntryError::InvalidNumber("4x".into()))
    );
}
