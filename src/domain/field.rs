//! Form field identifiers and the space types a guest can book.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

// =============================================================================
// Fields
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Department,
    Email,
    Phone,
    SpaceType,
    GuestCount,
    ReservationDate,
    ReservationTime,
    Duration,
    Purpose,
    Requests,
}

impl Field {
    /// Required fields, in the order the form presents them.
    pub const REQUIRED: [Field; 9] = [
        Field::Name,
        Field::Department,
        Field::Email,
        Field::Phone,
        Field::SpaceType,
        Field::GuestCount,
        Field::ReservationDate,
        Field::ReservationTime,
        Field::Duration,
    ];

    /// Name used as the JSON key and the form control id
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Department => "department",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::SpaceType => "spaceType",
            Self::GuestCount => "guestCount",
            Self::ReservationDate => "reservationDate",
            Self::ReservationTime => "reservationTime",
            Self::Duration => "duration",
            Self::Purpose => "purpose",
            Self::Requests => "requests",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Space Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceType {
    Meeting,
    Party,
    Other,
}

/// Inclusive guest-count bounds for one space type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestRange {
    pub min: u32,
    pub max: u32,
}

impl GuestRange {
    pub fn contains(&self, count: u32) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl SpaceType {
    #[must_use]
    pub fn guest_range(&self) -> GuestRange {
        match self {
            Self::Meeting => GuestRange { min: 1, max: 6 },
            Self::Party | Self::Other => GuestRange { min: 1, max: 15 },
        }
    }

    /// Placeholder shown in the guest-count input once this space is picked
    #[must_use]
    pub fn guest_placeholder(&self) -> String {
        match self {
            Self::Meeting | Self::Party => {
                let range = self.guest_range();
                format!("{}-{}명", range.min, range.max)
            }
            Self::Other => "인원수".to_string(),
        }
    }

    pub fn korean_name(&self) -> &'static str {
        match self {
            Self::Meeting => "미팅 테이블",
            Self::Party => "파티 공간",
            Self::Other => "기타 공간",
        }
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Meeting => "meeting table",
            Self::Party => "party space",
            Self::Other => "other space",
        };
        f.write_str(name)
    }
}

impl FromStr for SpaceType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "meeting" => Ok(Self::Meeting),
            "party" => Ok(Self::Party),
            "other" => Ok(Self::Other),
            other => Err(FieldError::UnknownSpaceType(other.to_string())),
        }
    }
}
