//! The conversion core shared by every frontend: currency tables, quantity
//! validation, conversion arithmetic, display formatting, and the result
//! panel state machine. Nothing in this crate touches the UI.

pub mod convert;
pub mod currency;
pub mod format;
pub mod locale;
pub mod presenter;
pub mod quantity;
