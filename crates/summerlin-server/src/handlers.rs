//! Request handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use summerlin_core::types::{
    ContactRequest, Lead, ListingStatus, PropertyType, SellRequest, ValuationRequest,
};
use summerlin_core::Listing;
use summerlin_leads::{LeadIntake, LeadRecord};
use summerlin_listings::{ListingFilter, ListingSource};
use summerlin_mortgage::{
    amortization_schedule, monthly_payment, monthly_schedule, AmortizationMonthEntry,
    AmortizationYearEntry, LoanInputs, MonthlyPaymentBreakdown, MortgageCalculator, MortgageQuote,
};

use crate::config::{ServerConfig, DEFAULT_PAGE_SIZE};
use crate::error::ApiError;

/// Application state.
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Listing catalog
    pub listings: Arc<dyn ListingSource>,
    /// Lead intake pipeline
    pub leads: LeadIntake,
}

type ApiResult<T> = Result<T, ApiError>;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// MORTGAGE CALCULATOR
// =============================================================================

/// Loan parameters for payment and schedule requests.
#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    /// Amount financed
    pub loan_amount: f64,
    /// Annual rate in percent
    pub interest_rate: f64,
    /// Term in years
    pub loan_term_years: u32,
}

/// Monthly payment response.
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    /// Principal and interest, rounded to cents
    pub monthly_payment: f64,
}

/// Compute the level monthly payment.
pub async fn calculate_payment(Json(req): Json<PaymentRequest>) -> ApiResult<Json<PaymentResponse>> {
    let payment = monthly_payment(req.loan_amount, req.interest_rate, req.loan_term_years)?;
    Ok(Json(PaymentResponse {
        monthly_payment: summerlin_core::types::round_cents(payment),
    }))
}

/// Row granularity of a schedule.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One row per year
    #[default]
    Yearly,
    /// One row per payment
    Monthly,
}

/// Schedule request.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// Loan parameters
    #[serde(flatten)]
    pub loan: PaymentRequest,
    /// Row granularity
    #[serde(default)]
    pub granularity: Granularity,
}

/// Schedule rows.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScheduleEntries {
    /// Yearly rows
    Yearly(Vec<AmortizationYearEntry>),
    /// Monthly rows
    Monthly(Vec<AmortizationMonthEntry>),
}

/// Schedule response.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Granularity used
    pub granularity: Granularity,
    /// Rows, rounded to cents
    pub entries: ScheduleEntries,
}

/// Build an amortization schedule.
pub async fn calculate_schedule(
    Json(req): Json<ScheduleRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let PaymentRequest {
        loan_amount,
        interest_rate,
        loan_term_years,
    } = req.loan;

    let entries = match req.granularity {
        Granularity::Yearly => ScheduleEntries::Yearly(
            amortization_schedule(loan_amount, interest_rate, loan_term_years)?
                .iter()
                .map(AmortizationYearEntry::rounded)
                .collect(),
        ),
        Granularity::Monthly => ScheduleEntries::Monthly(
            monthly_schedule(loan_amount, interest_rate, loan_term_years)?
                .iter()
                .map(AmortizationMonthEntry::rounded)
                .collect(),
        ),
    };

    Ok(Json(ScheduleResponse {
        granularity: req.granularity,
        entries,
    }))
}

/// Calculator inputs where every field may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    /// Purchase price
    pub home_price: Option<f64>,
    /// Cash down payment
    pub down_payment: Option<f64>,
    /// Down payment as a percentage, used when `down_payment` is absent
    pub down_payment_percent: Option<f64>,
    /// Annual rate in percent
    pub interest_rate: Option<f64>,
    /// Term in years
    pub loan_term_years: Option<u32>,
    /// Annual property tax
    pub annual_property_tax: Option<f64>,
    /// Annual insurance
    pub annual_insurance: Option<f64>,
    /// Monthly HOA dues
    pub monthly_hoa: Option<f64>,
}

impl QuoteRequest {
    /// Fills omitted fields from `defaults`.
    ///
    /// A new home price without a down payment keeps the default down
    /// payment percentage.
    pub fn resolve(&self, defaults: &LoanInputs) -> LoanInputs {
        let mut inputs = *defaults;
        if let Some(price) = self.home_price {
            inputs = inputs.with_home_price_keeping_percent(price);
        }
        match (self.down_payment, self.down_payment_percent) {
            (Some(amount), _) => inputs.down_payment = amount,
            (None, Some(percent)) => inputs = inputs.with_down_payment_percent(percent),
            (None, None) => {}
        }
        if let Some(rate) = self.interest_rate {
            inputs.interest_rate = rate;
        }
        if let Some(years) = self.loan_term_years {
            inputs.loan_term_years = years;
        }
        if let Some(tax) = self.annual_property_tax {
            inputs.annual_property_tax = tax;
        }
        if let Some(insurance) = self.annual_insurance {
            inputs.annual_insurance = insurance;
        }
        if let Some(hoa) = self.monthly_hoa {
            inputs.monthly_hoa = hoa;
        }
        inputs
    }
}

/// Compute the monthly breakdown.
pub async fn calculate_breakdown(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuoteRequest>,
) -> ApiResult<Json<MonthlyPaymentBreakdown>> {
    let inputs = req.resolve(&state.config.calculator_defaults);
    let breakdown = MortgageCalculator::new().breakdown(&inputs)?;
    Ok(Json(breakdown.rounded()))
}

/// Compute the full calculator quote.
pub async fn calculate_quote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuoteRequest>,
) -> ApiResult<Json<MortgageQuote>> {
    let inputs = req.resolve(&state.config.calculator_defaults);
    let quote = MortgageCalculator::new().quote(&inputs)?;
    Ok(Json(quote.rounded()))
}

// =============================================================================
// LISTINGS
// =============================================================================

/// Query parameters for listing search.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    /// Maximum number of listings to return
    pub limit: Option<usize>,
    /// Offset for pagination
    #[serde(default)]
    pub offset: usize,
    /// Village
    pub village: Option<String>,
    /// Minimum price
    pub min_price: Option<u64>,
    /// Maximum price
    pub max_price: Option<u64>,
    /// Minimum bedrooms
    pub min_beds: Option<u8>,
    /// Minimum bathrooms
    pub min_baths: Option<u8>,
    /// Minimum square feet
    pub min_sqft: Option<u32>,
    /// Maximum square feet
    pub max_sqft: Option<u32>,
    /// Property type slug or label
    pub property_type: Option<String>,
    /// Status slug
    pub status: Option<String>,
    /// Only listings still for sale or coming soon
    #[serde(default)]
    pub available: bool,
    /// Comma-separated features, all required
    pub features: Option<String>,
    /// Free text search; `q` is accepted as a short form
    #[serde(alias = "q")]
    pub text: Option<String>,
}

impl ListingQuery {
    fn to_filter(&self) -> ApiResult<ListingFilter> {
        let property_type = parse_opt::<PropertyType>(self.property_type.as_deref())?;
        let status = parse_opt::<ListingStatus>(self.status.as_deref())?;
        let features = self
            .features
            .as_deref()
            .map(|f| {
                f.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ListingFilter {
            village: self.village.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_beds: self.min_beds,
            min_baths: self.min_baths,
            min_sqft: self.min_sqft,
            max_sqft: self.max_sqft,
            property_type,
            status,
            available_only: self.available,
            features,
            text: self.text.clone().filter(|t| !t.trim().is_empty()),
        })
    }
}

fn parse_opt<T>(value: Option<&str>) -> ApiResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.parse::<T>().map_err(|e| ApiError::BadRequest(e.to_string())))
        .transpose()
}

/// Response for listing search.
#[derive(Debug, Serialize)]
pub struct ListingListResponse {
    /// Listings
    pub listings: Vec<Listing>,
    /// Total count (before pagination)
    pub total: u64,
    /// Limit used
    pub limit: usize,
    /// Offset used
    pub offset: usize,
}

/// Search listings with optional filtering and pagination.
pub async fn list_listings(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> ApiResult<Json<ListingListResponse>> {
    let filter = query.to_filter()?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(state.config.max_page_size);

    let total = state.listings.count(&filter).await?;
    let listings = state.listings.search(&filter, limit, query.offset).await?;

    Ok(Json(ListingListResponse {
        listings,
        total,
        limit,
        offset: query.offset,
    }))
}

/// Get a single listing by ID.
pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Listing>> {
    state
        .listings
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Listing not found: {id}")))
}

// =============================================================================
// LEADS
// =============================================================================

async fn accept(state: &AppState, lead: Lead) -> ApiResult<(StatusCode, Json<LeadRecord>)> {
    let record = state.leads.submit(lead).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Contact an agent.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> ApiResult<(StatusCode, Json<LeadRecord>)> {
    accept(&state, req.into()).await
}

/// Request a home valuation.
pub async fn submit_valuation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ValuationRequest>,
) -> ApiResult<(StatusCode, Json<LeadRecord>)> {
    accept(&state, req.into()).await
}

/// Ask to list a home for sale.
pub async fn submit_sell(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SellRequest>,
) -> ApiResult<(StatusCode, Json<LeadRecord>)> {
    accept(&state, req.into()).await
}

/// Leads retained since startup.
pub async fn list_leads(State(state): State<Arc<AppState>>) -> Json<Vec<LeadRecord>> {
    Json(state.leads.recent())
}
