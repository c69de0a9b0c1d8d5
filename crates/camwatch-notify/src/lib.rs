//! Notification channels and dispatch for the CamWatch security monitor.
//!
//! This crate provides:
//! - `NotifyChannel` trait for pluggable notification channels
//! - Telegram and email channel implementations
//! - Dispatcher that tries channels in priority order with fallback

pub mod channel;
pub mod dispatcher;
pub mod email;
pub mod error;
pub mod telegram;

pub use channel::NotifyChannel;
pub use dispatcher::{ChannelTestResult, DeliveryOutcome, Dispatcher};
pub use email::{EmailChannel, EmailConfig};
pub use error::{NotifyError, NotifyResult};
pub use telegram::{TelegramChannel, TelegramConfig};
