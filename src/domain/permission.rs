//! View permission resolved from the host capability check.

/// Whether the current operator may modify configuration.
///
/// Resolved once when the view is constructed and immutable afterwards.
/// The host performs the actual capability check; only its boolean
/// outcome is consumed here — this component never interprets *why*
/// access was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPermission {
    can_modify: bool,
}

impl ViewPermission {
    /// Resolve the permission flag from a capability check outcome.
    ///
    /// `None` means the check could not be evaluated; edits stay
    /// disabled in that case.
    pub fn resolve(outcome: Option<bool>) -> Self {
        Self {
            can_modify: outcome.unwrap_or(false),
        }
    }

    /// Permission that allows editing
    pub fn read_write() -> Self {
        Self { can_modify: true }
    }

    /// Permission that forces a read-only presentation
    pub fn read_only() -> Self {
        Self { can_modify: false }
    }

    /// Whether the operator may modify configuration
    pub fn can_modify(&self) -> bool {
        self.can_modify
    }
}

impl Default for ViewPermission {
    /// Fail-closed: absent a definitive outcome, the view is read-only.
    fn default() -> Self {
        Self::read_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_allows_editing_only_on_definitive_yes() {
        assert!(ViewPermission::resolve(Some(true)).can_modify());
        assert!(!ViewPermission::resolve(Some(false)).can_modify());
    }

    #[test]
    fn resolve_fails_closed_without_an_outcome() {
        assert!(!ViewPermission::resolve(None).can_modify());
    }

    #[test]
    fn default_is_read_only() {
        assert!(!ViewPermission::default().can_modify());
    }
}
