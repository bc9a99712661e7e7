use serde::Serialize;

use crate::domain::{AccountSelector, CardAccount, CategoryEntry, Payment, PaymentGroup, Period};
use crate::storage::{CategoryRepository, PaymentRepository};

use super::{
    aggregation_service::AggregationService,
    chart_service::{ChartGeometry, ChartService, DonutChart},
    ranking_service::RankingService,
    summary_service::{SummaryService, Totals},
};

/// Everything the home dashboard shows for one account and month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub account: AccountSelector,
    pub period: Period,
    pub totals: Totals,
    pub chart: DonutChart,
}

/// Ranked category cards for the analytics screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsView {
    pub account: AccountSelector,
    pub period: Period,
    pub totals: Totals,
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentsView {
    pub group: PaymentGroup,
    pub payments: Vec<Payment>,
    pub total: f64,
}

/// Runs the per-render pipelines against a read-only data source.
pub struct ScreenService;

impl ScreenService {
    /// Category list for the selected account; `Combined` merges every card.
    pub fn resolve_entries(
        repo: &dyn CategoryRepository,
        account: AccountSelector,
        period: Period,
    ) -> Vec<CategoryEntry> {
        match account {
            AccountSelector::Card(card) => repo.fetch_categories(card, period),
            AccountSelector::Combined => {
                let per_card: Vec<Vec<CategoryEntry>> = CardAccount::ALL
                    .iter()
                    .map(|card| repo.fetch_categories(*card, period))
                    .collect();
                AggregationService::merge_all(per_card.iter().map(Vec::as_slice))
            }
        }
    }

    pub fn home(
        repo: &dyn CategoryRepository,
        account: AccountSelector,
        period: Period,
        geometry: &ChartGeometry,
    ) -> HomeView {
        let entries = Self::resolve_entries(repo, account, period);
        HomeView {
            account,
            period,
            totals: SummaryService::totals(&entries),
            chart: ChartService::build(&entries, geometry),
        }
    }

    pub fn analytics(
        repo: &dyn CategoryRepository,
        account: AccountSelector,
        period: Period,
    ) -> AnalyticsView {
        let entries = Self::resolve_entries(repo, account, period);
        let totals = SummaryService::totals(&entries);
        AnalyticsView {
            account,
            period,
            totals,
            categories: RankingService::rank(entries),
        }
    }

    pub fn payments(repo: &dyn PaymentRepository, group: PaymentGroup) -> PaymentsView {
        let payments = repo.fetch_payments(group);
        let total = SummaryService::payments_total(&payments);
        PaymentsView {
            group,
            payments,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::builtin;

    fn september() -> Period {
        Period::new(9).unwrap()
    }

    #[test]
    fn combined_account_merges_both_cards() {
        let entries =
            ScreenService::resolve_entries(builtin(), AccountSelector::Combined, september());
        let groceries = entries
            .iter()
            .find(|entry| entry.name == "Продукты")
            .expect("groceries present");
        assert_eq!(groceries.spend, 1100.0);
        assert_eq!(groceries.operations.len(), 4);
    }

    #[test]
    fn single_card_is_passed_through() {
        let entries = ScreenService::resolve_entries(
            builtin(),
            AccountSelector::Card(CardAccount::Visa),
            september(),
        );
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].spend, 500.0);
    }

    #[test]
    fn home_totals_cover_combined_month() {
        let view = ScreenService::home(
            builtin(),
            AccountSelector::Combined,
            september(),
            &ChartGeometry::default(),
        );
        assert_eq!(view.totals.spend, 2910.0);
        assert_eq!(view.totals.income, 4900.0);
        assert_eq!(view.totals.remaining, 1990.0);
        assert_eq!(view.chart.legend().len(), 6);
    }

    #[test]
    fn month_without_data_shows_empty_state() {
        let view = ScreenService::home(
            builtin(),
            AccountSelector::Combined,
            Period::JANUARY,
            &ChartGeometry::default(),
        );
        assert!(view.chart.is_empty());
        assert_eq!(view.totals, Totals::default());
    }

    #[test]
    fn payments_view_totals_selected_group() {
        let view = ScreenService::payments(builtin(), PaymentGroup::Debts);
        assert_eq!(view.payments.len(), 2);
        assert_eq!(view.total, 420.0);
    }
}
