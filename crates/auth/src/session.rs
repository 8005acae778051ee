use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use licensedesk_core::UserId;

/// An authenticated session for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}
