use serde::{Deserialize, Serialize};

use super::Coin;

/// Amount originally placed into a vesting account and its release schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalVestingResponse {
    pub amount: Coin,
    pub number_of_periods: u64,
    /// Length of a single vesting period, in seconds.
    pub period_duration: u64,
}
