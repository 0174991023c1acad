//! Current-user session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user held in the session store.
///
/// Server-shaped data stored as-is; the gateway never inspects it beyond
/// writing it to its slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Backend identifier for the user.
    pub id: String,
    /// Name shown in the header.
    pub display_name: String,
    /// Contact email address.
    pub email: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
