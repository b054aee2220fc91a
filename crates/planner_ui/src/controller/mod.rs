//! Controller layer: one controller per page feature, each holding only the
//! handles it was built with.

pub mod chat;
pub mod modal;
pub mod overlay;
pub mod traveler;
