//! The structured booking payload sent to the reservation endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::field::SpaceType;

/// Custom serializer for Option<String> -> "" when absent
fn serialize_optional_text<S>(text: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(text.as_deref().unwrap_or(""))
}

/// Custom deserializer for "" / null -> None
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|t| !t.is_empty()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub name: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub space_type: SpaceType,
    pub guest_count: u32,
    pub reservation_date: NaiveDate,
    pub reservation_time: String,
    pub duration: String,

    #[serde(serialize_with = "serialize_optional_text")]
    #[serde(deserialize_with = "deserialize_optional_text", default)]
    pub purpose: Option<String>,

    #[serde(serialize_with = "serialize_optional_text")]
    #[serde(deserialize_with = "deserialize_optional_text", default)]
    pub requests: Option<String>,

    pub submitted_at: DateTime<Utc>,
}

impl ReservationRequest {
    /// JSON body for the outbound POST
    ///
    /// # Errors
    ///
    /// Returns error if the payload cannot be encoded
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
