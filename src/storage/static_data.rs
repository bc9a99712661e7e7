//! Built-in sample data shipped with the application.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::domain::{CardAccount, CategoryEntry, Payment, PaymentGroup, Period};

use super::Dataset;

static BUILTIN: Lazy<Dataset> = Lazy::new(build);

/// Shared, immutable copy of the built-in data set.
pub fn builtin() -> &'static Dataset {
    &BUILTIN
}

fn category(
    name: &str,
    icon: &str,
    color: &str,
    spend: f64,
    income: f64,
    operations: &[(&str, f64)],
) -> CategoryEntry {
    operations.iter().fold(
        CategoryEntry::new(name, icon, color)
            .with_spend(spend)
            .with_income(income),
        |entry, (op, amount)| entry.with_operation(*op, *amount),
    )
}

fn groceries(spend: f64, ops: &[(&str, f64)]) -> CategoryEntry {
    category("Продукты", "fast-food-outline", "#FF6384", spend, 0.0, ops)
}

fn transport(spend: f64, ops: &[(&str, f64)]) -> CategoryEntry {
    category("Транспорт", "bus-outline", "#36A2EB", spend, 0.0, ops)
}

fn beauty(spend: f64, ops: &[(&str, f64)]) -> CategoryEntry {
    category("Красота", "brush-outline", "#FFCE56", spend, 0.0, ops)
}

fn health(spend: f64, ops: &[(&str, f64)]) -> CategoryEntry {
    category("Здоровье", "medkit-outline", "#4BC0C0", spend, 0.0, ops)
}

fn utilities(spend: f64, ops: &[(&str, f64)]) -> CategoryEntry {
    category("ЖКХ", "home-outline", "#9966FF", spend, 0.0, ops)
}

fn fuel(spend: f64, ops: &[(&str, f64)]) -> CategoryEntry {
    category("Бензин", "car-sport-outline", "#FF9F40", spend, 0.0, ops)
}

fn salary(income: f64, ops: &[(&str, f64)]) -> CategoryEntry {
    category("Зарплата", "cash-outline", "#EE0ADF", 0.0, income, ops)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn build() -> Dataset {
    let september = Period::new(9).unwrap_or_default();
    let october = september.next();

    let mut dataset = Dataset::default();
    dataset
        .insert_month(
            CardAccount::Mastercard,
            september,
            vec![
                groceries(600.0, &[("Пятерочка", 400.0), ("Мария-Ра", 200.0)]),
                transport(400.0, &[("Проездной", 100.0), ("Такси", 300.0)]),
                beauty(200.0, &[("Салон красоты", 150.0), ("Косметика", 50.0)]),
                health(100.0, &[("Аптека", 60.0), ("Витамины", 40.0)]),
                utilities(100.0, &[("Электричество", 50.0), ("Вода", 50.0)]),
                fuel(100.0, &[("АЗС Лукойл", 70.0), ("АЗС Газпром", 30.0)]),
                salary(2700.0, &[("Основная работа", 2000.0), ("Фриланс", 700.0)]),
            ],
        )
        .insert_month(
            CardAccount::Mastercard,
            october,
            vec![
                groceries(500.0, &[("Лента", 300.0), ("Ашан", 200.0)]),
                transport(350.0, &[("Электричка", 200.0), ("Маршрутка", 150.0)]),
                health(120.0, &[("Терапевт", 70.0), ("Аптека", 50.0)]),
                utilities(120.0, &[("Капремонт", 60.0), ("Вывоз мусора", 60.0)]),
                fuel(150.0, &[("АЗС BP", 100.0), ("АЗС Shell", 50.0)]),
                salary(2600.0, &[("Оклад", 2200.0), ("Премия", 400.0)]),
            ],
        )
        .insert_month(
            CardAccount::Visa,
            september,
            vec![
                groceries(500.0, &[("Дикси", 300.0), ("Магнит", 200.0)]),
                transport(360.0, &[("Автобус", 160.0), ("Такси", 200.0)]),
                beauty(150.0, &[("Парикмахерская", 100.0), ("Крем для лица", 50.0)]),
                health(50.0, &[("Таблетки", 30.0), ("Витамины", 20.0)]),
                utilities(250.0, &[("Электричество", 150.0), ("Вода", 100.0)]),
                fuel(100.0, &[("АЗС Лукойл", 60.0), ("АЗС Роснефть", 40.0)]),
                salary(2200.0, &[("Основная работа", 1700.0), ("Фриланс", 500.0)]),
            ],
        )
        .insert_month(
            CardAccount::Visa,
            october,
            vec![
                groceries(450.0, &[("Перекресток", 250.0), ("Пятерочка", 200.0)]),
                transport(400.0, &[("Проездной", 250.0), ("Такси", 150.0)]),
                beauty(200.0, &[("Маникюр", 120.0), ("Шампунь", 80.0)]),
                health(70.0, &[("Аптека", 50.0), ("Витамины", 20.0)]),
                utilities(230.0, &[("Газ", 130.0), ("Вода", 100.0)]),
                fuel(110.0, &[("АЗС Газпром", 70.0), ("АЗС Shell", 40.0)]),
                salary(2300.0, &[("Основной доход", 1900.0), ("Подработка", 400.0)]),
            ],
        );

    dataset
        .insert_payments(
            PaymentGroup::Subscriptions,
            vec![
                Payment::new(1, "🛒", "Netflix", 15.99, date(2024, 1, 1)),
                Payment::new(2, "🎮", "Xbox Live", 9.99, date(2024, 1, 2)),
                Payment::new(3, "🎧", "Яндекс Плюс", 2.99, date(2024, 1, 5)),
            ],
        )
        .insert_payments(
            PaymentGroup::Bills,
            vec![
                Payment::new(1, "💡", "Электричество", 30.0, date(2024, 1, 1)),
                Payment::new(2, "🌐", "Интернет", 20.0, date(2024, 1, 5)),
            ],
        )
        .insert_payments(
            PaymentGroup::Debts,
            vec![
                Payment::new(1, "💳", "Кредитная карточка", 120.0, date(2024, 1, 1)),
                Payment::new(2, "🏠", "Аренда", 300.0, date(2024, 1, 15)),
            ],
        );

    tracing::debug!(
        months = dataset.periods().len(),
        groups = dataset.payments.len(),
        "built-in dataset ready"
    );
    dataset
}
