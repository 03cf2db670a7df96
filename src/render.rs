use crate::api::{AccountInfo, Balance};
use crate::lookup::{LookupState, Phase};

/// Everything the view needs to put on screen for one state. All display
/// defaulting and number formatting happens here, never in the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayFields {
    pub busy: bool,
    pub error: Option<String>,
    pub result: Option<ResultPanel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub balance: String,
    pub account_name: String,
    pub sequence: String,
    pub address: String,
}

pub fn project(state: &LookupState) -> DisplayFields {
    match state.phase() {
        Phase::Idle => DisplayFields::default(),
        Phase::Loading => DisplayFields {
            busy: true,
            ..DisplayFields::default()
        },
        Phase::Failed(message) => DisplayFields {
            error: Some(message.clone()),
            ..DisplayFields::default()
        },
        Phase::Success(info) => DisplayFields {
            result: Some(ResultPanel::from_info(info)),
            ..DisplayFields::default()
        },
    }
}

impl ResultPanel {
    fn from_info(info: &AccountInfo) -> Self {
        Self {
            balance: info
                .xrp_balance
                .as_ref()
                .map(format_balance)
                .unwrap_or_else(|| "0".to_string()),
            account_name: info
                .account_name
                .clone()
                .unwrap_or_else(|| "Active".to_string()),
            sequence: info
                .sequence
                .map(|s| s.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            address: info.account.clone().unwrap_or_default(),
        }
    }
}

/// Formats a balance with thousands separators. A textual balance that does
/// not parse as a number is shown verbatim.
fn format_balance(balance: &Balance) -> String {
    let value = match balance {
        Balance::Text(text) => match text.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => return text.clone(),
        },
        Balance::Amount(v) => *v,
    };
    group_thousands(&value.to_string())
}

fn group_thousands(text: &str) -> String {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut out = String::from(sign);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
