use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub lost_items: u64,
    pub found_items: u64,
    pub matches: u64,
    pub pending: u64,
    pub confirmed: u64,
    pub rejected: u64,
    /// Confirmed share of all matches in percent; absent while there are no matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_rate: Option<f64>,
    pub threshold: u8,
}

impl Statistics {
    pub(crate) fn compute_confirmation_rate(&mut self) {
        self.confirmation_rate = if self.matches == 0 {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            let rate = (self.confirmed as f64 * 100.0) / self.matches as f64;
            Some(rate)
        };
    }
}
