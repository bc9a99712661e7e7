mod common;

use common::{income, september, spend};
use spendsphere_core::{
    core::services::{AggregationService, RankingService, ScreenService},
    domain::{AccountSelector, CardAccount, CategoryEntry, Period},
    storage::{builtin, CategoryRepository},
};

fn find<'a>(entries: &'a [CategoryEntry], name: &str) -> &'a CategoryEntry {
    entries
        .iter()
        .find(|entry| entry.name == name)
        .unwrap_or_else(|| panic!("{name} missing"))
}

#[test]
fn merged_list_holds_union_of_names_with_summed_values() {
    let first = vec![
        spend("Продукты", 600.0, &[]),
        spend("Транспорт", 400.0, &[]),
        income("Зарплата", 2700.0),
    ];
    let second = vec![
        spend("Продукты", 500.0, &[]),
        spend("Подарки", 80.0, &[]),
        income("Зарплата", 2200.0),
    ];

    let merged = AggregationService::merge(&first, &second);
    assert_eq!(merged.len(), 4);
    assert_eq!(find(&merged, "Продукты").spend, 1100.0);
    assert_eq!(find(&merged, "Транспорт").spend, 400.0);
    assert_eq!(find(&merged, "Подарки").spend, 80.0);
    assert_eq!(find(&merged, "Зарплата").income, 4900.0);
    assert_eq!(find(&merged, "Зарплата").spend, 0.0);
}

#[test]
fn shared_operations_are_summed_by_name() {
    let first = vec![spend("Продукты", 400.0, &[("Пятерочка", 400.0)])];
    let second = vec![spend(
        "Продукты",
        150.0,
        &[("Пятерочка", 100.0), ("Магнит", 50.0)],
    )];

    let merged = AggregationService::merge(&first, &second);
    let operations: Vec<(&str, f64)> = merged[0]
        .operations
        .iter()
        .map(|op| (op.name.as_str(), op.amount))
        .collect();
    assert_eq!(operations, vec![("Пятерочка", 500.0), ("Магнит", 50.0)]);
}

#[test]
fn ranking_orders_by_magnitude_descending() {
    let ranked = RankingService::rank(vec![
        spend("a", 100.0, &[]),
        income("b", 600.0),
        spend("c", 400.0, &[]),
    ]);
    let magnitudes: Vec<f64> = ranked.iter().map(CategoryEntry::magnitude).collect();
    assert_eq!(magnitudes, vec![600.0, 400.0, 100.0]);
}

#[test]
fn combined_september_groceries_lead_the_spend_categories() {
    let view = ScreenService::analytics(builtin(), AccountSelector::Combined, september());
    let spend_only: Vec<&CategoryEntry> = view
        .categories
        .iter()
        .filter(|entry| !entry.is_income())
        .collect();
    assert_eq!(spend_only[0].name, "Продукты");
    assert_eq!(spend_only[0].spend, 1100.0);

    // salary outweighs every spend category
    assert_eq!(view.categories[0].name, "Зарплата");
    for pair in view.categories.windows(2) {
        assert!(pair[0].magnitude() >= pair[1].magnitude());
    }
    for entry in &view.categories {
        for pair in entry.operations.windows(2) {
            assert!(pair[0].amount >= pair[1].amount);
        }
    }
}

#[test]
fn merging_with_an_empty_account_keeps_values() {
    let visa = builtin().fetch_categories(CardAccount::Visa, september());
    let merged = AggregationService::merge(&visa, &[]);
    assert_eq!(merged.len(), visa.len());
    for entry in &visa {
        let same = find(&merged, &entry.name);
        assert_eq!(same.spend, entry.spend);
        assert_eq!(same.income, entry.income);
    }
}

#[test]
fn months_wrap_in_both_directions() {
    assert_eq!(Period::DECEMBER.next(), Period::JANUARY);
    assert_eq!(Period::JANUARY.prev(), Period::DECEMBER);
    let full_cycle = (0..12).fold(september(), |period, _| period.next());
    assert_eq!(full_cycle, september());
}

#[test]
fn month_without_data_yields_nothing_for_any_account() {
    let march = Period::new(3).unwrap();
    for account in AccountSelector::ALL {
        assert!(ScreenService::resolve_entries(builtin(), account, march).is_empty());
    }
}
