//! Configuration editor component.
//!
//! Owns the edit/save workflow for the cloud service configuration file:
//! fetch current content, describe the editable view, write edited text
//! back, and report the outcome through notifications. The file is an
//! opaque text blob; nothing here parses or validates it.

mod surface;
mod view;

pub use surface::EditSurface;
pub use view::{TextArea, ViewDescription};

use crate::constants::{
    CLOUD_CONFIG_DOC_URL, CLOUD_CONFIG_PATH, DEFAULT_ON_READ_FAILURE, EDIT_SURFACE_ROWS,
};
use crate::domain::ViewPermission;
use crate::eventing::Notification;
use crate::transport::FileTransport;
use crossbeam_channel::Sender;
use rust_i18n::t;
use std::sync::Arc;

/// Single-file text configuration editor.
///
/// One instance per view entry. The permission flag is resolved before
/// construction and stays immutable; the baseline is replaced only by a
/// fresh [`load`](Self::load) or a successful save.
pub struct ConfigEditor {
    /// Permission flag resolved by the host capability check
    permission: ViewPermission,
    /// File access against the managed device
    transport: Arc<dyn FileTransport>,
    /// Channel the host toast subsystem consumes
    notifications: Sender<Notification>,
    /// The live edit surface
    surface: EditSurface,
    /// Baseline text last confirmed read from or written to the device
    loaded: Option<String>,
}

impl ConfigEditor {
    /// Create the editor for the cloud configuration file.
    pub fn new(
        permission: ViewPermission,
        transport: Arc<dyn FileTransport>,
        notifications: Sender<Notification>,
    ) -> Self {
        Self {
            permission,
            transport,
            notifications,
            surface: EditSurface::new(!permission.can_modify()),
            loaded: None,
        }
    }

    /// Path of the managed configuration file
    pub fn path(&self) -> &'static str {
        CLOUD_CONFIG_PATH
    }

    /// The live edit surface
    pub fn surface(&self) -> &EditSurface {
        &self.surface
    }

    /// Mutable surface access for operator input
    pub fn surface_mut(&mut self) -> &mut EditSurface {
        &mut self.surface
    }

    /// Baseline text last confirmed against the device, if loaded
    pub fn loaded(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    /// Fetch the current configuration text and seed the edit surface.
    ///
    /// Never fails: a missing or unreadable file yields
    /// [`DEFAULT_ON_READ_FAILURE`] and the operator simply sees an
    /// empty editor.
    pub async fn load(&mut self) -> String {
        let content = match self.transport.read_file(CLOUD_CONFIG_PATH).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    "Reading {} failed, presenting empty editor: {}",
                    CLOUD_CONFIG_PATH,
                    e
                );
                DEFAULT_ON_READ_FAILURE.to_string()
            }
        };

        self.loaded = Some(content.clone());
        self.surface.display(content.clone());
        content
    }

    /// Describe the current view for the host panel to render.
    ///
    /// Pure presentation: no network or state side effects.
    pub fn render(&self) -> ViewDescription {
        let read_only = !self.permission.can_modify();

        ViewDescription {
            heading: t!("editor.heading").into_owned(),
            description: t!("editor.description").into_owned(),
            doc_url: CLOUD_CONFIG_DOC_URL.to_string(),
            textarea: TextArea {
                value: self.surface.value().to_string(),
                rows: EDIT_SURFACE_ROWS,
                read_only,
            },
            save_available: !read_only,
        }
    }

    /// Write the edit surface's text back to the device, wholesale.
    ///
    /// On success the written text becomes the new baseline and an
    /// informational notification is emitted. On failure an error
    /// notification carries the underlying reason and the unsaved text
    /// stays visible for a manual retry. Failures never propagate to
    /// the caller.
    pub async fn handle_save(&mut self) {
        let value = self.surface.value().to_string();

        match self.transport.write_file(CLOUD_CONFIG_PATH, &value).await {
            Ok(()) => {
                self.surface.display(value.clone());
                self.loaded = Some(value);
                tracing::info!("Configuration saved to {}", CLOUD_CONFIG_PATH);
                self.notify(Notification::info(t!("editor.saved")));
            }
            Err(e) => {
                tracing::error!("Saving {} failed: {}", CLOUD_CONFIG_PATH, e);
                self.notify(Notification::error(t!(
                    "editor.save_failed",
                    reason = e.to_string()
                )));
            }
        }
    }

    fn notify(&self, notification: Notification) {
        if self.notifications.send(notification).is_err() {
            tracing::warn!("Notification receiver dropped, discarding notification");
        }
    }
}
