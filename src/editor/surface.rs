//! Edit surface state.

/// Live state of the multi-line text input.
///
/// Owns the edited value: it starts equal to the loaded value and
/// diverges as the operator types. A read-only surface still displays
/// full content but ignores operator input, so the displayed text can
/// never drift from the baseline through the UI.
#[derive(Debug, Clone)]
pub struct EditSurface {
    value: String,
    read_only: bool,
}

impl EditSurface {
    pub(crate) fn new(read_only: bool) -> Self {
        Self {
            value: String::new(),
            read_only,
        }
    }

    /// Text currently displayed
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether operator input is disabled
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Operator input: replace the displayed text.
    ///
    /// Ignored when the surface is read-only.
    pub fn set_value(&mut self, value: impl Into<String>) {
        if self.read_only {
            tracing::debug!("Ignoring input on read-only edit surface");
            return;
        }
        self.value = value.into();
    }

    /// Replace the displayed text from the component itself (initial
    /// load and save confirmation), bypassing the read-only gate.
    pub(crate) fn display(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}
