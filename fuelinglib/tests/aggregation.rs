use fuelinglib::{
    aggregate, EntryError, EntryInput, Field, FuelLineEntry, FuelType, FuelingEvent,
};
use rust_decimal::Decimal;

fn line(t: FuelType, liters: &str, price: &str, total: &str) -> FuelLineEntry {
    FuelLineEntry {
        fuel_type: t,
        liters: Decimal::from_str_exact(liters).unwrap(),
        price_per_unit: Decimal::from_str_exact(price).unwrap(),
        total_price: Decimal::from_str_exact(total).unwrap(),
    }
}

#[test]
fn totals_and_shares_for_two_lines() {
    let entries = vec![
        line(FuelType::GasolinaComum, "42.5", "5.49", "233.32"),
        line(FuelType::Etanol, "5.0", "3.89", "19.45"),
    ];
    let agg = aggregate(&entries).expect("aggregate");
    assert_eq!(agg.total_liters, Decimal::new(475, 1));
    assert_eq!(agg.total_value, Decimal::new(25277, 2));
    assert_eq!(agg.shares, vec![Some(Decimal::new(895, 1)), Some(Decimal::new(105, 1))]);
    assert_eq!(agg.share(1), Some(Decimal::new(105, 1)));
    assert_eq!(agg.share(2), None);
}

#[test]
fn empty_list_sums_to_zero() {
    let agg = aggregate(&[]).expect("aggregate");
    assert_eq!(agg.total_liters, Decimal::ZERO);
    assert_eq!(agg.total_value, Decimal::ZERO);
    assert!(agg.shares.is_empty());
}

#[test]
fn zero_liters_leaves_shares_undefined() {
    let agg = aggregate(&[line(FuelType::Diesel, "0", "0", "0")]).expect("aggregate");
    assert_eq!(agg.total_liters, Decimal::ZERO);
    assert_eq!(agg.shares, vec![None]);
}

#[test]
fn totals_do_not_depend_on_order() {
    let a = line(FuelType::GasolinaComum, "42.5", "5.49", "233.32");
    let b = line(FuelType::Gnv, "12.25", "4.10", "50.23");
    let fwd = aggregate(&[a.clone(), b.clone()]).expect("aggregate");
    let rev = aggregate(&[b, a]).expect("aggregate");
    assert_eq!(fwd.total_liters, rev.total_liters);
    assert_eq!(fwd.total_value, rev.total_value);
    assert_eq!(fwd.shares[0], rev.shares[1]);
}

#[test]
fn huge_totals_report_overflow_instead_of_panicking() {
    let half = Decimal::MAX / Decimal::TWO + Decimal::ONE;
    let mut ev = FuelingEvent::new();
    for _ in 0..2 {
        ev.add(&EntryInput::new("Diesel").liters(Decimal::ONE).total_price(half))
            .expect("accepted line");
    }
    assert_eq!(
        ev.aggregate(),
        Err(EntryError::Overflow { field: Field::TotalPrice })
    );
}
