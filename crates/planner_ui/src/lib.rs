//! Page controllers for the trip planner: traveler count, place details
//! modal, submit overlay, and the chat widget.
//!
//! Controllers only see the element handles they are constructed with (see
//! [`dom`]). The browser build wires them to `web-sys` elements; everything
//! else runs them against [`headless`] handles.

pub mod controller;
pub mod dom;
pub mod globals;
pub mod headless;
pub mod page;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;

pub use controller::{
    chat::{ChatWidget, PanelState, PendingReply, SendOutcome},
    modal::{ClickTarget, ModalState, PlaceModal, PlaceModalFields},
    overlay::SubmitOverlay,
    traveler::TravelerCountController,
};
pub use page::PlannerPage;
