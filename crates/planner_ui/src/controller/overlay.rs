use crate::dom::{Display, Visible};

/// Shows the loading overlay while the planner form submits. The submission
/// itself is left to the browser.
pub struct SubmitOverlay<E> {
    overlay: E,
}

impl<E: Visible> SubmitOverlay<E> {
    pub fn new(overlay: E) -> Self {
        Self { overlay }
    }

    pub fn on_submit(&self) {
        self.overlay.set_display(Display::Flex);
    }
}
