//! Forecast domain types.

use chrono::NaiveDate;
use prognos_shared::types::{
    CompanyId, ConsultantId, CostCentreId, ForecastElementId, ForecastEntryId, ProfitCentreId,
    ProjectAssignmentId, ProjectForecastEntryId, ProjectId, RosterEntryId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Roster probability labels that make a contractor day billable.
///
/// These are the display labels of the probability lookup, matched verbatim;
/// the source data keys the threshold on labels, not numeric values.
pub const BILLABLE_PROBABILITIES: [&str; 3] = ["50%", "90%", "100%"];

/// Category of a forecast element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    /// Cost of sales (element type 1).
    CostOfSales,
    /// Revenue (element type 2).
    Revenue,
    /// Overhead (element type 3).
    Overhead,
}

impl ElementType {
    /// Numeric code as stored by the data layer.
    #[must_use]
    pub const fn as_code(self) -> i16 {
        match self {
            Self::CostOfSales => 1,
            Self::Revenue => 2,
            Self::Overhead => 3,
        }
    }

    /// Parses the stored numeric code.
    #[must_use]
    pub const fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::CostOfSales),
            2 => Some(Self::Revenue),
            3 => Some(Self::Overhead),
            _ => None,
        }
    }
}

/// The computed forecast line items.
///
/// Each code has exactly one calculator; elements with other keys are
/// manually maintained rows the engine never recomputes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCode {
    /// Time-and-materials service revenue (`TMREV`).
    ServiceRevenue,
    /// Contractor wages (`CWAGES`).
    ContractorWages,
    /// Consultant salaries (`SAL`).
    ConsultantSalaries,
    /// Bonus provision (`BON`).
    BonusProvision,
    /// Internal revenue for cross-profit-centre work (`INTREV`).
    InternalRevenue,
    /// Internal charge for cross-profit-centre work (`INTCH`).
    InternalCharge,
    /// Fixed-price project revenue (`FIXREV`).
    FixedPriceRevenue,
}

impl ElementCode {
    /// All computed element codes, in calculation order.
    pub const ALL: [Self; 7] = [
        Self::ServiceRevenue,
        Self::ContractorWages,
        Self::ConsultantSalaries,
        Self::BonusProvision,
        Self::InternalRevenue,
        Self::InternalCharge,
        Self::FixedPriceRevenue,
    ];

    /// The reference-data key of this element.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ServiceRevenue => "TMREV",
            Self::ContractorWages => "CWAGES",
            Self::ConsultantSalaries => "SAL",
            Self::BonusProvision => "BON",
            Self::InternalRevenue => "INTREV",
            Self::InternalCharge => "INTCH",
            Self::FixedPriceRevenue => "FIXREV",
        }
    }

    /// Human-readable element name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ServiceRevenue => "Service Revenue",
            Self::ContractorWages => "Contractor Wages",
            Self::ConsultantSalaries => "Consultant Salaries",
            Self::BonusProvision => "Bonus Provision",
            Self::InternalRevenue => "Internal Revenue",
            Self::InternalCharge => "Internal Charge",
            Self::FixedPriceRevenue => "Fixed-Price Revenue",
        }
    }

    /// Category this element's entries are aggregated under.
    #[must_use]
    pub const fn element_type(self) -> ElementType {
        match self {
            Self::ServiceRevenue | Self::FixedPriceRevenue => ElementType::Revenue,
            Self::ContractorWages
            | Self::ConsultantSalaries
            | Self::BonusProvision
            | Self::InternalRevenue
            | Self::InternalCharge => ElementType::CostOfSales,
        }
    }

    /// Looks a code up by its reference-data key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.key() == key)
    }
}

impl std::fmt::Display for ElementCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A forecast line-item type. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastElement {
    /// Unique identifier.
    pub id: ForecastElementId,
    /// Element key (e.g. `TMREV`); computed elements match an [`ElementCode`].
    pub key: String,
    /// Display name.
    pub name: String,
    /// Aggregation category.
    pub element_type: ElementType,
}

impl ForecastElement {
    /// Returns the calculator code for this element, if it is computed.
    #[must_use]
    pub fn code(&self) -> Option<ElementCode> {
        ElementCode::from_key(&self.key)
    }
}

/// Employment type of a consultant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultantType {
    /// Salaried permanent staff.
    Permanent,
    /// Daily-rate contractor.
    Contractor,
}

/// A consultant belonging to a cost centre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultant {
    /// Unique identifier.
    pub id: ConsultantId,
    /// Display name.
    pub name: String,
    /// Employment type.
    pub consultant_type: ConsultantType,
    /// Annual salary (permanent consultants).
    pub annual_salary: Option<Decimal>,
    /// Daily rate (contractors).
    pub daily_rate: Option<Decimal>,
    /// Default internal rate for cross-profit-centre work.
    pub internal_rate: Option<Decimal>,
    /// Annual bonus provision (permanent consultants).
    pub bonus_provision: Option<Decimal>,
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Last day of employment; `None` when open-ended.
    pub end_date: Option<NaiveDate>,
    /// Cost centre the consultant belongs to.
    pub cost_centre_id: CostCentreId,
}

impl Consultant {
    /// Returns true for permanent (salaried) consultants.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.consultant_type == ConsultantType::Permanent
    }

    /// Returns true for daily-rate contractors.
    #[must_use]
    pub fn is_contractor(&self) -> bool {
        self.consultant_type == ConsultantType::Contractor
    }
}

/// Commercial model of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    /// Billed per rostered day.
    TimeAndMaterials,
    /// Billed against a fixed-price schedule.
    FixedPrice,
}

/// A project owned by a profit centre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Owning profit centre.
    pub profit_centre_id: ProfitCentreId,
    /// Commercial model.
    pub project_type: ProjectType,
}

/// Rates for one consultant on one project.
///
/// Preferred over the consultant's own rates when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAssignment {
    /// Unique identifier.
    pub id: ProjectAssignmentId,
    /// Assigned consultant.
    pub consultant_id: ConsultantId,
    /// Assigned project.
    pub project_id: ProjectId,
    /// Billable day rate on this project.
    pub day_rate: Option<Decimal>,
    /// Internal rate on this project.
    pub internal_rate: Option<Decimal>,
}

/// One day of planned or actual work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Unique identifier.
    pub id: RosterEntryId,
    /// Rostered consultant.
    pub consultant_id: ConsultantId,
    /// Project worked on.
    pub project_id: ProjectId,
    /// Calendar day of the work.
    pub date: NaiveDate,
    /// Likelihood label (e.g. "50%", "90%", "100%").
    pub probability: String,
}

/// A cost centre grouping consultants under a profit centre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostCentre {
    /// Unique identifier.
    pub id: CostCentreId,
    /// Display name.
    pub name: String,
    /// Owning profit centre.
    pub profit_centre_id: ProfitCentreId,
}

/// A profit centre: the scope of one forecast calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitCentre {
    /// Unique identifier.
    pub id: ProfitCentreId,
    /// Display name.
    pub name: String,
    /// Owning company.
    pub company_id: CompanyId,
}

/// A company: a set of profit centres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,
    /// Display name.
    pub name: String,
}

/// Kind of a project forecast entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectForecastType {
    /// Forecast revenue.
    Revenue,
    /// Forecast cost.
    Cost,
}

/// A per-project monthly forecast figure, maintained per project.
///
/// Revenue rows of fixed-price projects feed the `FIXREV` element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectForecastEntry {
    /// Unique identifier.
    pub id: ProjectForecastEntryId,
    /// Project this figure belongs to.
    pub project_id: ProjectId,
    /// Financial year.
    pub financial_year: i32,
    /// Financial month, 1-12.
    pub financial_month: u32,
    /// Revenue or cost.
    pub entry_type: ProjectForecastType,
    /// Amount.
    pub amount: Decimal,
}

/// One computed forecast cell: (month x element x profit centre) amount.
///
/// At most one entry exists per (financial year, financial month, element,
/// cost-centre-or-null) within a profit centre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unique identifier.
    pub id: ForecastEntryId,
    /// Financial year.
    pub financial_year: i32,
    /// Financial month, 1-12.
    pub financial_month: u32,
    /// Element this amount belongs to.
    pub forecast_element_id: ForecastElementId,
    /// Profit centre scope.
    pub profit_centre_id: ProfitCentreId,
    /// Cost centre dimension; `None` for undimensioned elements.
    pub cost_centre_id: Option<CostCentreId>,
    /// Amount.
    pub amount: Decimal,
}

/// A forecast entry about to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewForecastEntry {
    /// Financial year.
    pub financial_year: i32,
    /// Financial month, 1-12.
    pub financial_month: u32,
    /// Element this amount belongs to.
    pub forecast_element_id: ForecastElementId,
    /// Profit centre scope.
    pub profit_centre_id: ProfitCentreId,
    /// Cost centre dimension; `None` for undimensioned elements.
    pub cost_centre_id: Option<CostCentreId>,
    /// Amount.
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_code_keys_round_trip() {
        for code in ElementCode::ALL {
            assert_eq!(ElementCode::from_key(code.key()), Some(code));
        }
        assert_eq!(ElementCode::from_key("RENT"), None);
    }

    #[test]
    fn test_element_type_codes() {
        assert_eq!(ElementType::from_code(1), Some(ElementType::CostOfSales));
        assert_eq!(ElementType::from_code(2), Some(ElementType::Revenue));
        assert_eq!(ElementType::from_code(3), Some(ElementType::Overhead));
        assert_eq!(ElementType::from_code(4), None);
        assert_eq!(ElementType::Revenue.as_code(), 2);
    }

    #[test]
    fn test_revenue_elements() {
        assert_eq!(
            ElementCode::ServiceRevenue.element_type(),
            ElementType::Revenue
        );
        assert_eq!(
            ElementCode::FixedPriceRevenue.element_type(),
            ElementType::Revenue
        );
        assert_eq!(
            ElementCode::ContractorWages.element_type(),
            ElementType::CostOfSales
        );
        assert_eq!(
            ElementCode::InternalRevenue.element_type(),
            ElementType::CostOfSales
        );
    }
}
