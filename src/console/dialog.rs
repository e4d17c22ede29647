//! Modal dialog visibility.

/// Visibility of a modal dialog.
///
/// Opening is done by whoever creates the form or modal; closing happens on
/// cancel or when an action resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialog {
    visible: bool,
}

impl Dialog {
    /// Creates a dialog that is already showing.
    #[must_use]
    pub const fn opened() -> Self {
        Self { visible: true }
    }

    /// Returns `true` while the dialog is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.visible
    }

    /// Hides the dialog. Closing twice is a no-op.
    pub fn close(&mut self) {
        if self.visible {
            tracing::debug!("Dialog closed");
            self.visible = false;
        }
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::opened()
    }
}
