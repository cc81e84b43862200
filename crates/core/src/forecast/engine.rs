//! Forecast orchestration.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use prognos_shared::config::ForecastConfig;
use prognos_shared::types::{ForecastElementId, ProfitCentreId};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::time::FinancialTime;

use super::aggregator::{aggregate, CategorizedAmount, MonthlyTotals};
use super::base_data::{BaseData, BaseDataCache};
use super::calculators;
use super::entry_key::EntryKey;
use super::error::ForecastError;
use super::repository::ForecastRepository;
use super::types::{ElementCode, ElementType};

/// Key of one recalculation partition: (financial year, profit centre).
type RecalcKey = (i32, ProfitCentreId);

/// Orchestrates forecast recalculation and read-side aggregation.
///
/// Calculators for one profit centre run concurrently; they write disjoint
/// (year, element, profit centre) partitions and never contend. Concurrent
/// recalculation of the *same* partition from two callers is serialized
/// through a per-key mutex.
pub struct ForecastEngine<R> {
    repo: Arc<R>,
    base_data: BaseDataCache,
    locks: DashMap<RecalcKey, Arc<Mutex<()>>>,
}

impl<R: ForecastRepository> ForecastEngine<R> {
    /// Creates an engine with default forecast configuration.
    #[must_use]
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_config(repo, &ForecastConfig::default())
    }

    /// Creates an engine with the given forecast configuration.
    #[must_use]
    pub fn with_config(repo: Arc<R>, config: &ForecastConfig) -> Self {
        Self {
            repo,
            base_data: BaseDataCache::new(config),
            locks: DashMap::new(),
        }
    }

    /// Returns (possibly cached) base data for a profit-centre set.
    pub async fn base_data(
        &self,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<Arc<BaseData>, ForecastError> {
        let base = self
            .base_data
            .get_or_load(self.repo.as_ref(), profit_centre_ids)
            .await?;
        Ok(base)
    }

    /// Drops cached base data, forcing the next recalculation to reload.
    pub fn invalidate_base_data(&self) {
        self.base_data.invalidate_all();
    }

    /// Recalculates every computed element for one profit centre and year.
    pub async fn calculate_for_profit_centre(
        &self,
        financial_year: i32,
        profit_centre_id: ProfitCentreId,
    ) -> Result<(), ForecastError> {
        let base = self.base_data(&[profit_centre_id]).await?;
        self.calculate_scope(&base, financial_year, profit_centre_id)
            .await
    }

    /// Recalculates every profit centre of a company for one year.
    ///
    /// Base data is loaded once and partitioned per profit centre; the
    /// per-centre runs proceed concurrently. A failing centre aborts the
    /// join but does not roll back centres that already completed.
    pub async fn calculate_for_company(
        &self,
        financial_year: i32,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<(), ForecastError> {
        let base = self.base_data(profit_centre_ids).await?;

        futures::future::try_join_all(profit_centre_ids.iter().map(|&profit_centre_id| {
            let base = Arc::clone(&base);
            async move {
                self.calculate_scope(&base, financial_year, profit_centre_id)
                    .await
            }
        }))
        .await?;

        Ok(())
    }

    /// Runs the seven calculators for one profit centre, serialized against
    /// concurrent recalculation of the same (year, profit centre).
    async fn calculate_scope(
        &self,
        base: &BaseData,
        financial_year: i32,
        profit_centre_id: ProfitCentreId,
    ) -> Result<(), ForecastError> {
        let lock = self.recalc_lock(financial_year, profit_centre_id);
        let _guard = lock.lock().await;

        tracing::info!(
            financial_year,
            profit_centre = %profit_centre_id,
            "recalculating forecast"
        );

        let scope = base.scope(profit_centre_id);

        futures::future::try_join_all(ElementCode::ALL.iter().map(|&element| {
            let scope = &scope;
            async move {
                calculators::run(element, self.repo.as_ref(), base, scope, financial_year)
                    .await
                    .map_err(|source| ForecastError::Calculator {
                        element,
                        profit_centre: profit_centre_id,
                        source,
                    })
            }
        }))
        .await?;

        Ok(())
    }

    /// Per-month category totals for a profit-centre set and year.
    pub async fn monthly_totals(
        &self,
        financial_year: i32,
        profit_centre_ids: &[ProfitCentreId],
    ) -> Result<MonthlyTotals, ForecastError> {
        let (entries, elements) = tokio::try_join!(
            self.repo.forecast_entries(financial_year, profit_centre_ids),
            self.repo.forecast_elements(),
        )?;

        let types_by_element: HashMap<ForecastElementId, ElementType> =
            elements.iter().map(|e| (e.id, e.element_type)).collect();

        let categorized = entries.iter().filter_map(|entry| {
            types_by_element
                .get(&entry.forecast_element_id)
                .map(|&element_type| CategorizedAmount {
                    financial_month: entry.financial_month,
                    amount: entry.amount,
                    element_type,
                })
        });

        Ok(aggregate(categorized))
    }

    /// Merged entries map for display: amounts summed over cost-centre
    /// splits, keyed per (year, month, element) cell.
    ///
    /// With `convert_to_calendar` set the keys land in calendar space, the
    /// way matrix views address their cells.
    pub async fn entries_map(
        &self,
        financial_year: i32,
        profit_centre_ids: &[ProfitCentreId],
        convert_to_calendar: bool,
    ) -> Result<HashMap<EntryKey, Decimal>, ForecastError> {
        let entries = self
            .repo
            .forecast_entries(financial_year, profit_centre_ids)
            .await?;

        let mut map: HashMap<EntryKey, Decimal> = HashMap::new();
        for entry in &entries {
            let key = EntryKey::financial(
                FinancialTime {
                    year: entry.financial_year,
                    month: entry.financial_month,
                },
                entry.forecast_element_id.to_string(),
                None,
                convert_to_calendar,
            );
            *map.entry(key).or_insert(Decimal::ZERO) += entry.amount;
        }

        Ok(map)
    }

    fn recalc_lock(&self, financial_year: i32, profit_centre_id: ProfitCentreId) -> Arc<Mutex<()>> {
        self.locks
            .entry((financial_year, profit_centre_id))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl<R> std::fmt::Debug for ForecastEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastEngine")
            .field("locks", &self.locks.len())
            .finish_non_exhaustive()
    }
}
