use fuelinglib::{validate, validate_all, EntryError, EntryInput};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

#[test]
fn hundred_liters_is_the_upper_bound() {
    let ok = EntryInput::new("X").liters(dec("100")).price_per_unit(Decimal::ONE);
    assert_eq!(validate(&ok, true), Ok(()));

    let over = EntryInput::new("X").liters(dec("100.01")).price_per_unit(Decimal::ONE);
    assert_eq!(validate(&over, true), Err(EntryError::LitersOutOfRange));

    let zero = EntryInput::new("X").liters(Decimal::ZERO).price_per_unit(Decimal::ONE);
    assert_eq!(validate(&zero, true), Err(EntryError::LitersOutOfRange));
}

#[test]
fn fuel_type_is_checked_first() {
    let input = EntryInput::new("   ").liters(dec("500"));
    assert_eq!(validate(&input, true), Err(EntryError::MissingFuelType));
    assert_eq!(validate(&input, false), Err(EntryError::InsufficientFields));
}

#[test]
fn any_pair_of_fields_is_enough() {
    let pairs = [
        EntryInput::new("X").liters(dec("10")).price_per_unit(dec("5")),
        EntryInput::new("X").total_price(dec("50")).price_per_unit(dec("5")),
        EntryInput::new("X").total_price(dec("50")).liters(dec("10")),
    ];
    for p in &pairs {
        assert_eq!(validate(p, true), Ok(()));
    }
}

#[test]
fn price_and_total_must_be_positive() {
    let price = EntryInput::new("X").liters(dec("10")).price_per_unit(dec("-1"));
    assert_eq!(validate(&price, true), Err(EntryError::InvalidPrice));

    let total = EntryInput::new("X").liters(dec("10")).total_price(Decimal::ZERO);
    assert_eq!(validate(&total, true), Err(EntryError::InvalidTotal));
}

#[test]
fn validate_all_keeps_order_and_agrees_with_validate() {
    let input = EntryInput {
        fuel_type: String::new(),
        liters: Some(dec("101")),
        price_per_unit: Some(Decimal::ZERO),
        total_price: Some(dec("-3")),
    };
    let all = validate_all(&input, true);
    assert_eq!(
        all,
        vec![
            EntryError::MissingFuelType,
            EntryError::LitersOutOfRange,
            EntryError::InvalidPrice,
            EntryError::InvalidTotal,
        ]
    );
    assert_eq!(validate(&input, true), Err(all[0].clone()));
}

#[test]
fn validation_is_idempotent_and_does_not_touch_input() {
    let input = EntryInput::new("Etanol").liters(dec("150")).price_per_unit(dec("3.89"));
    let before = input.clone();
    let a = validate(&input, true);
    let b = validate(&input, true);
    assert_eq!(a, b);
    assert_eq!(input, before);
}

#[test]
fn every_failure_has_its_own_message() {
    let errs = [
        EntryError::MissingFuelType,
        EntryError::InsufficientFields,
        EntryError::LitersOutOfRange,
        EntryError::InvalidPrice,
        EntryError::InvalidTotal,
    ];
    let mut msgs: Vec<String> = errs.iter().map(|e| e.user_message()).collect();
    assert_eq!(msgs[0], "Selecione o tipo de combustível");
    assert_eq!(msgs[2], "Litros deve ser entre 0,1 e 100");
    msgs.sort();
    msgs.dedup();
    assert_eq!(msgs.len(), errs.len());
}
