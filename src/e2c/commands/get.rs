use crate::commands::CmdResult;
use crate::dict::Dictionary;
use crate::error::Result;
use crate::store::DataStore;

/// Look `key` up in the default intent. An unknown key yields an empty value.
pub fn run<S: DataStore>(dict: &mut Dictionary<S>, key: &str) -> Result<CmdResult> {
    let value = dict.get_default(key)?;
    Ok(CmdResult::default().with_value(value))
}
