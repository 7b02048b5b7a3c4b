//! Interaction history records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded interaction. The item name is a soft reference into the
/// catalog and may dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default, alias = "restaurant_name")]
    pub item_name: String,
    /// ISO `YYYY-MM-DD`; kept as text so malformed dates survive loading
    #[serde(default)]
    pub order_date: String,
}

impl HistoryRecord {
    pub fn new(item_name: impl Into<String>, order_date: NaiveDate) -> Self {
        Self {
            item_name: item_name.into(),
            order_date: order_date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Whether both fields are present
    pub fn is_complete(&self) -> bool {
        !self.item_name.is_empty() && !self.order_date.is_empty()
    }
}
