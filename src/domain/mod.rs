pub mod field;
pub mod form;
pub mod reservation;

pub use field::*;
pub use form::*;
pub use reservation::*;
