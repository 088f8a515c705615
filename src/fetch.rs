use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use crate::config::SheetConfig;

/// Response body of the Sheets values endpoint. Only `values` matters; the
/// field is absent entirely when the range holds no data.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Fetch all rows of the configured sheet. Any transport or decode failure
/// is logged and collapses to an empty row set so the caller treats it as
/// "no data" rather than aborting the run.
pub async fn fetch_sheet_values(client: &Client, config: &SheetConfig) -> Vec<Vec<String>> {
    match try_fetch(client, config).await {
        Ok(rows) => rows,
        Err(err) => {
            error!("error fetching sheet data: {:#}", err);
            Vec::new()
        }
    }
}

async fn try_fetch(client: &Client, config: &SheetConfig) -> Result<Vec<Vec<String>>> {
    let url = config.values_url()?;
    let resp = client
        .get(url.as_str())
        .send()
        .await
        .context("sheet values request failed")?
        .error_for_status()
        .context("sheet values request returned error status")?;
    let body: ValueRange = resp
        .json()
        .await
        .context("sheet values response was not valid JSON")?;
    Ok(body.values)
}
