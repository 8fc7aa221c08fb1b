//! FiscalData API integration for average interest rates.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::data::RateSource;
use crate::domain::RateRecord;
use crate::error::AppError;

const BASE_URL: &str = "https://api.fiscaldata.treasury.gov/services/api/fiscal_service";
const ENDPOINT: &str = "/v2/accounting/od/avg_interest_rates";

const ENV_BASE_URL: &str = "TREASURY_RATES_BASE_URL";

/// Blocking client for the average-interest-rates endpoint.
///
/// One GET per queried date; no retries, no caching, transport-default
/// timeouts.
pub struct FiscalDataClient {
    client: Client,
    base_url: String,
}

impl FiscalDataClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Build a client, honoring the base-URL override (`.env` supported).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| BASE_URL.to_string());
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for FiscalDataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for FiscalDataClient {
    /// Fetch every security's average rate published for `date`.
    ///
    /// A well-formed response with no rows for the date is an empty list,
    /// not an error.
    fn fetch_rates(&self, date: NaiveDate) -> Result<Vec<RateRecord>, AppError> {
        let url = format!("{}{ENDPOINT}", self.base_url);
        let filter = format!("record_date:eq:{}", date.format("%Y-%m-%d"));

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("filter", filter.as_str()),
                ("sort", "-record_date,security_desc"),
            ])
            .send()
            .map_err(|e| AppError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::RequestFailed(format!(
                "status {} from {url}",
                resp.status()
            )));
        }

        let body: RatesResponse = resp
            .json()
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        records_from_response(body)
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    data: Option<Vec<RateItem>>,
}

#[derive(Debug, Deserialize)]
struct RateItem {
    record_date: String,
    security_type_desc: String,
    security_desc: String,
    avg_interest_rate_amt: String,
}

fn records_from_response(body: RatesResponse) -> Result<Vec<RateRecord>, AppError> {
    body.data
        .unwrap_or_default()
        .into_iter()
        .map(record_from_item)
        .collect()
}

fn record_from_item(item: RateItem) -> Result<RateRecord, AppError> {
    let record_date = NaiveDate::parse_from_str(&item.record_date, "%Y-%m-%d").map_err(|_| {
        AppError::MalformedResponse(format!("invalid record_date '{}'", item.record_date))
    })?;
    let rate = format_rate(&item.avg_interest_rate_amt)?;
    Ok(RateRecord {
        record_date,
        security_type: item.security_type_desc,
        security_desc: item.security_desc,
        rate,
    })
}

/// Format a raw numeric rate string as a fixed-point percentage (`4.187%`).
fn format_rate(raw: &str) -> Result<String, AppError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        AppError::MalformedResponse(format!("invalid avg_interest_rate_amt '{raw}'"))
    })?;
    if !value.is_finite() {
        return Err(AppError::MalformedResponse(format!(
            "non-finite avg_interest_rate_amt '{raw}'"
        )));
    }
    Ok(format!("{value:.3}%"))
}
