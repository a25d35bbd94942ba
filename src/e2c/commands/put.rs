use crate::commands::CmdResult;
use crate::dict::Dictionary;
use crate::error::Result;
use crate::store::DataStore;

/// Store `value` under `key` in the default intent. Silent on success.
pub fn run<S: DataStore>(dict: &mut Dictionary<S>, key: &str, value: &str) -> Result<CmdResult> {
    dict.set_default(key, value)?;
    Ok(CmdResult::default())
}
