//! Forecast engine error types.

use prognos_shared::types::ProfitCentreId;
use thiserror::Error;

use super::repository::RepositoryError;
use super::types::ElementCode;

/// Errors surfaced by the forecast engine.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Data access failed outside any single calculator.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// One element's calculator failed for one profit centre.
    #[error("calculator {element} failed for profit centre {profit_centre}")]
    Calculator {
        /// Element whose calculator failed.
        element: ElementCode,
        /// Profit centre being recalculated.
        profit_centre: ProfitCentreId,
        /// Underlying data-access failure.
        #[source]
        source: RepositoryError,
    },
}
