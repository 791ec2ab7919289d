use leptos_api_fetch::{FetchError, FetchValue};
use serde::Deserialize;

/// Base URL of the trading backend. Override at build time with `TRADES_API`.
const API_BASE: &str = match option_env!("TRADES_API") {
    Some(base) => base,
    None => "http://127.0.0.1:8080/api",
};

/// Page size requested from the backend. A full page means older trades may exist.
pub const PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: u64,
    pub symbol: String,
    pub side: Side,
    pub price: f64,
    pub quantity: f64,
    /// Milliseconds since the Unix Epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub usd: f64,
    pub btc: f64,
}

impl FetchValue for Balance {
    type Item = Self;
}

/// Trades for `symbol`, newest first. `before` is the cursor: the timestamp of the oldest trade already shown.
pub async fn get_trades(symbol: String, before: Option<i64>) -> Result<Vec<Trade>, FetchError> {
    let mut url = format!("{API_BASE}/trades?symbol={symbol}&limit={PAGE_SIZE}");
    if let Some(before) = before {
        url.push_str(&format!("&before={before}"));
    }
    get_json(&url).await
}

pub async fn get_trade(id: u64) -> Result<Option<Trade>, FetchError> {
    get_json(&format!("{API_BASE}/trades/{id}")).await
}

pub async fn get_balance() -> Result<Balance, FetchError> {
    get_json(&format!("{API_BASE}/account/balance")).await
}

async fn get_json<T>(url: &str) -> Result<T, FetchError>
where
    T: for<'de> Deserialize<'de>,
{
    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|error| FetchError::from_error(&error))?;

    response
        .json::<T>()
        .await
        .map_err(|error| FetchError::from_error(&error))
}
