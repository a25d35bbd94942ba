//! Business logic for each CLI verb. Commands operate on a [`Dictionary`] and
//! return a [`CmdResult`]; they never print.
//!
//! [`Dictionary`]: crate::dict::Dictionary

pub mod get;
pub mod put;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CmdResult {
    /// A value to show the user, if the command produced one
    pub value: Option<String>,
}

impl CmdResult {
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
