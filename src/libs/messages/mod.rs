//! User-facing text for the console.
//!
//! Every line the console prints is a [`Message`] variant; its text lives in
//! [`display`] and the output macros in [`macros`] decide where it goes.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
