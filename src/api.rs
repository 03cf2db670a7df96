use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::LookupError;

const API_BASE: &str = "https://api.xrpscan.com/api/v1";

/// Snapshot of one account as returned by the explorer. Keys the explorer
/// omits stay absent here; filling in display defaults is the renderer's job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccountInfo {
    pub account: Option<String>,
    #[serde(rename = "xrpBalance")]
    pub xrp_balance: Option<Balance>,
    #[serde(rename = "accountName")]
    pub account_name: Option<String>,
    pub sequence: Option<u32>,
}

/// The explorer reports balances either as a decimal string or as a bare
/// JSON number depending on the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Balance {
    Text(String),
    Amount(f64),
}

pub fn account_info_url(address: &str) -> String {
    format!("{}/account/{}", API_BASE, address)
}

pub async fn fetch_account(address: &str) -> Result<AccountInfo, LookupError> {
    let url = account_info_url(address);
    debug!(%url, "requesting account info");

    let response = reqwest::get(&url)
        .await
        .map_err(|e| {
            warn!(error = %e, "account request failed");
            LookupError::Network(Some(e.to_string()))
        })?;

    if !response.status().is_success() {
        warn!(status = %response.status(), "explorer returned non-success status");
        return Err(LookupError::InvalidResponse);
    }

    response.json().await.map_err(|e| {
        warn!(error = %e, "failed to decode account response");
        LookupError::Network(Some(e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn url_embeds_the_exact_address() {
        assert_eq!(
            account_info_url("rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH"),
            "https://api.xrpscan.com/api/v1/account/rN7n7otQDd6FczFgLdSqtcsAUxDkw6fzRH"
        );
        // the raw input is path-embedded untouched, whitespace and all
        assert_eq!(
            account_info_url(" rABC "),
            "https://api.xrpscan.com/api/v1/account/ rABC "
        );
    }

    #[test]
    fn parses_a_populated_body() {
        let info: AccountInfo =
            serde_json::from_str(r#"{"account":"rABC","xrpBalance":"123.45","sequence":7}"#)
                .unwrap();
        assert_eq!(info.account.as_deref(), Some("rABC"));
        assert_eq!(info.xrp_balance, Some(Balance::Text("123.45".to_string())));
        assert_eq!(info.sequence, Some(7));
        assert_eq!(info.account_name, None);
    }

    #[test]
    fn parses_an_empty_body() {
        let info: AccountInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info.account, None);
        assert_eq!(info.xrp_balance, None);
        assert_eq!(info.account_name, None);
        assert_eq!(info.sequence, None);
    }

    #[test]
    fn balance_accepts_a_bare_number() {
        let info: AccountInfo = serde_json::from_str(r#"{"xrpBalance":250}"#).unwrap();
        assert_eq!(info.xrp_balance, Some(Balance::Amount(250.0)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let info: AccountInfo = serde_json::from_str(
            r#"{"account":"rABC","ownerCount":3,"parent":"rXYZ","flags":0}"#,
        )
        .unwrap();
        assert_eq!(info.account.as_deref(), Some("rABC"));
    }
}
