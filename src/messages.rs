use crate::api::AccountInfo;
use crate::error::LookupError;

#[derive(Debug, Clone)]
pub enum Message {
    AddressChanged(String),
    Track,
    LookupFinished(u64, Result<AccountInfo, LookupError>),
}
