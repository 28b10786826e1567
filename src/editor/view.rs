//! Render output — the serializable description of the editor view.
//!
//! The host panel owns widget construction and styling; the component
//! only describes what to show.

use serde::Serialize;

/// Description of the configuration editor view
#[derive(Debug, Clone, Serialize)]
pub struct ViewDescription {
    /// Section heading
    pub heading: String,
    /// Short description shown under the heading
    pub description: String,
    /// Link to the configuration format documentation
    pub doc_url: String,
    /// The single multi-line edit surface
    pub textarea: TextArea,
    /// Whether a save control is offered. Save-and-apply and reset are
    /// deliberately not offered; this editor saves raw text only.
    pub save_available: bool,
}

/// The multi-line text input presenting the configuration
#[derive(Debug, Clone, Serialize)]
pub struct TextArea {
    /// Full configuration text currently displayed
    pub value: String,
    /// Visible rows
    pub rows: u8,
    /// When true the surface displays content but accepts no input
    pub read_only: bool,
}
