//! Repository implementations for data access.
//!
//! Repositories implement the abstract store traits from `prognos-core`,
//! hiding the `SeaORM` implementation details from the rest of the
//! application.

pub mod forecast;

pub use forecast::SeaOrmForecastRepository;
