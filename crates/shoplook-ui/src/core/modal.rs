//! Products modal open/close state.
//!
//! # Design
//! - Open and close replace the whole state; fields never change one at a time.
//! - Closing is idempotent.

/// Which look the products modal is showing, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    /// Whether the modal is visible.
    pub is_open: bool,
    /// Look whose products are shown; empty while closed.
    pub current_look_id: String,
    /// Product ids of the current look, in look order.
    pub product_ids: Vec<String>,
}

impl ModalState {
    /// State for a modal showing the given look.
    #[must_use]
    pub fn open(look_id: impl Into<String>, product_ids: Vec<String>) -> Self {
        Self {
            is_open: true,
            current_look_id: look_id.into(),
            product_ids,
        }
    }

    /// State for a closed modal.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            is_open: false,
            current_look_id: String::new(),
            product_ids: Vec::new(),
        }
    }

    /// Look id while open.
    #[must_use]
    pub fn open_look(&self) -> Option<&str> {
        self.is_open.then_some(self.current_look_id.as_str())
    }
}

/// Keys that dismiss an open modal.
#[must_use]
pub fn closes_modal(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
