pub mod config;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod service;
pub mod services;
pub mod status;
pub mod utils;

// Public, stable-ish API surface for consumers (UI / other crates)

pub use crate::service::{
    check_reservation_date, collect_reservation, process_reservation, selectable_dates,
    submit_reservation, validate_form, ReservationFlow,
};

pub use crate::config::{
    Destination, ReservationConfig, SubmitterConfig, TransportMode, ValidatorConfig,
    UNCONFIGURED_ENDPOINT,
};

pub use crate::domain::{Field, ReservationForm, ReservationRequest, SpaceType};

pub use crate::error::{FieldError, ReservationError, Result};

pub use crate::services::{
    date_policy::{DatePolicy, DateWindow},
    submitter::Submitter,
    validator::{is_valid_email, is_valid_phone, Validator},
};

pub use crate::status::{SubmissionOutcome, ValidationResult};

pub mod prelude {
    pub use crate::config::{Destination, ReservationConfig, TransportMode};
    pub use crate::domain::{Field, ReservationForm, ReservationRequest, SpaceType};
    pub use crate::error::{FieldError, ReservationError, Result};
    pub use crate::service::{
        check_reservation_date, collect_reservation, process_reservation, selectable_dates,
        submit_reservation, validate_form, ReservationFlow,
    };
    pub use crate::services::{submitter::Submitter, validator::Validator};
    pub use crate::status::{SubmissionOutcome, ValidationResult};
}
