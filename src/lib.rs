//! HOMEd Admin Panel — Cloud Service Configuration Editor
//!
//! This crate provides the configuration editor component embedded in the
//! HOMEd router administration panel. It owns the load/edit/save workflow
//! for the cloud service configuration file and nothing else: the host
//! panel supplies page routing, session handling, permission resolution,
//! and toast rendering.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   Host panel                    │
//! │    routing · sessions · permissions · toasts    │
//! └────────┬───────────────────────────▲────────────┘
//!          │ construct / input         │ Notification
//!          ▼                           │
//! ┌─────────────────┐   read/write  ┌──┴──────────────┐
//! │  ConfigEditor   │──────────────▶│  FileTransport  │
//! └─────────────────┘               └─────────────────┘
//! ```

pub mod constants;
pub mod domain;
pub mod editor;
pub mod error;
pub mod eventing;
pub mod transport;

rust_i18n::i18n!("locales", fallback = "en");
