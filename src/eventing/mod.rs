//! Eventing — component to host communication for operator feedback.
//!
//! The editor never touches the toast UI directly; it emits
//! [`Notification`] values over a channel the host subscribes to.

mod notification;

pub use notification::*;
