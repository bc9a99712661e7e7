//! Text rendering of the three screens and the side menu.
//!
//! Every function returns the lines to print so output can be checked
//! without a terminal.

use colored::Colorize;

use crate::{
    cli::output,
    config::Config,
    core::services::{AnalyticsView, HomeView, LegendItem, PaymentsView},
    currency::{format_currency, format_percentage, LocaleConfig, Precision},
    domain::{AccountSelector, Displayable, PaymentGroup},
    view::{DashboardState, MenuDestination},
};

const FOOTER: &str = "Тут могла быть ваша реклама";
const BAR_CELL: &str = "█";

fn money(config: &Config, locale: &LocaleConfig, amount: f64, precision: Precision) -> String {
    format_currency(amount, &config.currency_symbol, locale, precision)
}

fn top_bar(title: &str, menu_open: bool) -> String {
    let marker = if menu_open { "✕" } else { "☰" };
    format!("{} {}", marker, title.bold())
}

fn account_lines(state: &DashboardState) -> Vec<String> {
    let arrow = if state.dropdown_open { "▲" } else { "▼" };
    let mut lines = vec![format!("Счёт: {} {}", state.account.display_label(), arrow)];
    if state.dropdown_open {
        for option in AccountSelector::ALL {
            let marker = if option == state.account { "•" } else { " " };
            lines.push(format!("  {} {}", marker, option.display_label()));
        }
    }
    lines
}

fn period_line(state: &DashboardState, config: &Config) -> String {
    format!("←  {}  →", state.period.label(config.display_year))
}

fn legend_line(item: &LegendItem, locale: &LocaleConfig, bar_width: usize) -> String {
    let cells = ((item.population / 100.0) * bar_width as f64).round() as usize;
    format!(
        "  {} {:<20} {:>6} {}",
        output::swatch(&item.color),
        item.name,
        format_percentage(locale, item.population),
        BAR_CELL.repeat(cells)
    )
}

pub fn home(view: &HomeView, state: &DashboardState, config: &Config) -> Vec<String> {
    let locale = LocaleConfig::from_tag(&config.locale);
    let mut lines = vec![top_bar("Главная", state.menu_open)];
    lines.extend(account_lines(state));
    lines.push(period_line(state, config));
    lines.push(String::new());
    lines.push(
        money(config, &locale, view.totals.remaining, Precision::Auto)
            .bold()
            .to_string(),
    );
    lines.push(String::new());

    if view.chart.is_empty() {
        lines.push("Нет расходов за этот месяц".dimmed().to_string());
    } else {
        let bar_width = output::terminal_width().saturating_sub(40).max(10);
        for item in view.chart.legend() {
            lines.push(legend_line(item, &locale, bar_width));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Расходы: {}    Доходы: {}",
        money(config, &locale, view.totals.spend, Precision::Auto),
        money(config, &locale, view.totals.income, Precision::Auto)
    ));
    lines.push(FOOTER.dimmed().to_string());
    lines
}

pub fn analytics(view: &AnalyticsView, state: &DashboardState, config: &Config) -> Vec<String> {
    let locale = LocaleConfig::from_tag(&config.locale);
    let mut lines = vec![top_bar("Аналитика", state.menu_open)];
    lines.extend(account_lines(state));
    lines.push(period_line(state, config));
    lines.push(String::new());
    lines.push(format!(
        "Остаток: {}",
        money(config, &locale, view.totals.remaining, Precision::Fixed(2)).bold()
    ));

    if view.categories.is_empty() {
        lines.push(String::new());
        lines.push("Нет операций за этот месяц".dimmed().to_string());
    }

    for entry in &view.categories {
        lines.push(String::new());
        let amount = money(config, &locale, entry.magnitude(), Precision::Auto);
        let amount = if entry.is_income() {
            format!("+{}", amount).green().to_string()
        } else {
            amount
        };
        lines.push(format!(
            "{} [{}] {:<20} {}",
            output::swatch(&entry.color),
            entry.icon,
            entry.name.bold(),
            amount
        ));
        for operation in &entry.operations {
            lines.push(format!(
                "    {:<24} {}",
                operation.name,
                money(config, &locale, operation.amount, Precision::Auto)
            ));
        }
    }

    lines.push(String::new());
    lines.push(FOOTER.dimmed().to_string());
    lines
}

fn tabs_line(selected: PaymentGroup) -> String {
    PaymentGroup::ALL
        .iter()
        .map(|group| {
            if *group == selected {
                format!("[{}]", group.title()).bold().to_string()
            } else {
                format!(" {} ", group.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn payments(view: &PaymentsView, config: &Config) -> Vec<String> {
    let locale = LocaleConfig::from_tag(&config.locale);
    let mut lines = vec![
        top_bar("Регулярные платежи", false),
        tabs_line(view.group),
        String::new(),
        format!("Ваш ежемесячный платеж по {}", view.group.phrase()),
        money(config, &locale, view.total, Precision::Fixed(2))
            .bold()
            .to_string(),
        String::new(),
    ];

    for payment in &view.payments {
        lines.push(format!(
            "  {}  {:<18} {:>12}  {}",
            payment.logo,
            payment.name,
            money(config, &locale, payment.amount, Precision::Fixed(2)),
            payment.date_label()
        ));
    }

    lines.push(String::new());
    lines.push(FOOTER.dimmed().to_string());
    lines
}

pub fn side_menu() -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!("({}) {}", "SS".bold(), "SpendSphere".bold()),
        "     будь уверен".dimmed().to_string(),
        String::new(),
        "(A) Мой профиль".to_string(),
        "    Имя Фамилия  →".to_string(),
        String::new(),
    ];
    for destination in MenuDestination::ALL {
        let title = if destination.screen().is_some() {
            destination.title().to_string()
        } else {
            destination.title().dimmed().to_string()
        };
        lines.push(format!("  {:<10} {}", destination.key(), title));
    }
    lines
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        output::info(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{ChartGeometry, ScreenService};
    use crate::domain::{CardAccount, CategoryEntry, Period};
    use crate::storage::builtin;

    fn plain() {
        colored::control::set_override(false);
    }

    fn september_state() -> DashboardState {
        DashboardState::new(AccountSelector::Combined, Period::new(9).unwrap())
    }

    #[test]
    fn home_shows_period_remaining_and_totals() {
        plain();
        let state = september_state();
        let view = ScreenService::home(
            builtin(),
            state.account,
            state.period,
            &ChartGeometry::default(),
        );
        let lines = home(&view, &state, &Config::default());
        assert!(lines.iter().any(|line| line.contains("Сентябрь 2024")));
        assert!(lines.iter().any(|line| line == "$1 990"));
        assert!(lines
            .iter()
            .any(|line| line.contains("Расходы: $2 910") && line.contains("Доходы: $4 900")));
    }

    #[test]
    fn home_without_spend_shows_empty_state() {
        plain();
        let state = DashboardState::new(AccountSelector::Combined, Period::JANUARY);
        let view = ScreenService::home(
            builtin(),
            state.account,
            state.period,
            &ChartGeometry::default(),
        );
        let lines = home(&view, &state, &Config::default());
        assert!(lines.iter().any(|line| line.contains("Нет расходов")));
    }

    #[test]
    fn open_dropdown_lists_card_labels() {
        plain();
        let mut state = september_state();
        state.dropdown_open = true;
        let lines = account_lines(&state);
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("MasterCard *5993"));
        assert!(lines[3].contains("Visa *6790"));
    }

    #[test]
    fn analytics_lists_largest_category_first() {
        plain();
        let state = DashboardState::new(
            AccountSelector::Card(CardAccount::Mastercard),
            Period::new(9).unwrap(),
        );
        let view = ScreenService::analytics(builtin(), state.account, state.period);
        let lines = analytics(&view, &state, &Config::default());
        let first_card = lines
            .iter()
            .find(|line| line.contains('['))
            .expect("a category card");
        assert!(first_card.contains(&view.categories[0].name));
        assert!(lines.iter().any(|line| line.starts_with("Остаток: $")));
    }

    #[test]
    fn payments_show_phrase_and_fixed_total() {
        plain();
        let view = ScreenService::payments(builtin(), PaymentGroup::Debts);
        let lines = payments(&view, &Config::default());
        assert!(lines.contains(&"Ваш ежемесячный платеж по долгам".to_string()));
        assert!(lines.contains(&"$420,00".to_string()));
        assert!(lines[1].contains("[Долги]"));
    }

    #[test]
    fn malformed_color_renders_without_swatch_color() {
        plain();
        let mut dataset = crate::storage::Dataset::default();
        dataset.insert_month(
            CardAccount::Visa,
            Period::new(9).unwrap(),
            vec![CategoryEntry::new("X", "i", "#aЖbЖ").with_spend(10.0)],
        );
        let state = DashboardState::new(
            AccountSelector::Card(CardAccount::Visa),
            Period::new(9).unwrap(),
        );
        let view = ScreenService::analytics(&dataset, state.account, state.period);
        let lines = analytics(&view, &state, &Config::default());
        assert!(lines.iter().any(|line| line.contains("■ [i] X")));

        let home_view =
            ScreenService::home(&dataset, state.account, state.period, &ChartGeometry::default());
        let lines = home(&home_view, &state, &Config::default());
        assert!(lines.iter().any(|line| line.contains('X')));
    }

    #[test]
    fn side_menu_lists_every_destination() {
        plain();
        let lines = side_menu();
        for destination in MenuDestination::ALL {
            assert!(lines.iter().any(|line| line.contains(destination.title())));
        }
    }
}
