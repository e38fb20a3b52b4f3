use thiserror::Error;

use crate::domain::{Field, SpaceType};

pub type Result<T = (), E = ReservationError> = std::result::Result<T, E>;

/// A single rejected form field. Reported back to the caller, never raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("this field is required")]
    Required(Field),

    #[error("invalid email format")]
    InvalidEmail,

    #[error("invalid phone format")]
    InvalidPhone,

    #[error("unknown space type: {0}")]
    UnknownSpaceType(String),

    #[error("{space} allows {min}-{max} guests")]
    GuestCountOutOfRange {
        space: SpaceType,
        min: u32,
        max: u32,
    },

    #[error("invalid reservation date: {0}")]
    InvalidDate(String),

    #[error("reservations are not available on weekends")]
    Weekend,

    #[error("reservation date must be between {earliest} and {latest}")]
    DateOutOfRange { earliest: String, latest: String },
}

impl FieldError {
    /// Field the error should be rendered next to
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Required(field) => *field,
            Self::InvalidEmail => Field::Email,
            Self::InvalidPhone => Field::Phone,
            Self::UnknownSpaceType(_) => Field::SpaceType,
            Self::GuestCountOutOfRange { .. } => Field::GuestCount,
            Self::InvalidDate(_) | Self::Weekend | Self::DateOutOfRange { .. } => {
                Field::ReservationDate
            }
        }
    }

    /// Translate error to Korean for UI display
    #[must_use]
    pub fn to_korean(&self) -> String {
        match self {
            Self::Required(_) => "이 필드를 입력해주세요.".to_string(),
            Self::InvalidEmail => "올바른 이메일 형식을 입력해주세요.".to_string(),
            Self::InvalidPhone => {
                "올바른 전화번호 형식을 입력해주세요. (예: 010-1234-5678)".to_string()
            }
            Self::UnknownSpaceType(v) => format!("알 수 없는 공간 유형입니다: {}", v),
            Self::GuestCountOutOfRange { space, min, max } => {
                format!("{}은 {}-{}명까지 이용 가능합니다.", space.korean_name(), min, max)
            }
            Self::InvalidDate(v) => format!("올바른 날짜를 입력해주세요: {}", v),
            Self::Weekend => "주말은 예약이 불가능합니다. 평일을 선택해주세요.".to_string(),
            Self::DateOutOfRange { earliest, latest } => {
                format!("예약 가능 기간은 {} ~ {} 입니다.", earliest, latest)
            }
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ReservationError {
    #[error("Form is invalid: {0}")]
    Invalid(#[from] FieldError),

    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Server rejected reservation: HTTP {status}")]
    ServerRejected { status: u16 },

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Failed to serialize reservation: {0}")]
    Serialization(String),
}

impl ReservationError {
    /// Translate error to Korean for UI display
    #[must_use]
    pub fn to_korean(&self) -> String {
        match self {
            Self::Invalid(e) => e.to_korean(),
            Self::Transport(_) | Self::ServerRejected { .. } | Self::Serialization(_) => {
                "예약 처리 중 오류가 발생했습니다. 다시 시도해주세요.".to_string()
            }
            Self::InvalidEndpoint(e) => format!("예약 서버 주소가 올바르지 않습니다: {}", e),
            Self::ClientBuild(e) => format!("HTTP 클라이언트를 만들 수 없습니다: {}", e),
            Self::SubmissionInProgress => {
                "예약을 처리하는 중입니다. 잠시만 기다려주세요.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ReservationError {
    fn from(e: serde_json::Error) -> Self {
        ReservationError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for ReservationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ReservationError::InvalidEndpoint(e.to_string())
        } else {
            ReservationError::Transport(e.to_string())
        }
    }
}
