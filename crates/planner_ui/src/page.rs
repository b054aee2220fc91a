use client_core::ChatTransport;
use shared::{domain::TravelerSelection, protocol::ChatContext};
use tracing::{debug, info};

use crate::{
    controller::{
        chat::{ChatWidget, PendingReply, SendOutcome},
        modal::{ClickTarget, PlaceModal, PlaceModalFields},
        overlay::SubmitOverlay,
        traveler::TravelerCountController,
    },
    dom::{AttributeSource, PageDocument},
};

/// Element ids and selectors the planner templates use.
pub mod ids {
    pub const PLANNER_FORM: &str = "planner-form";
    pub const LOADING_OVERLAY: &str = "loading";

    pub const TRAVELERS_TYPE: &str = "travelers-type";
    pub const TRAVELER_COUNT_WRAPPER: &str = "traveler-count-wrapper";
    pub const TRAVELERS_COUNT: &str = "travelers-count";

    pub const PLACE_MODAL: &str = "placeModal";
    pub const CLOSE_MODAL_SELECTOR: &str = ".close-modal";
    pub const MODAL_TITLE: &str = "modal-title";
    pub const MODAL_DESCRIPTION: &str = "modal-desc";
    pub const MODAL_ADDRESS: &str = "modal-address";
    pub const MODAL_MAP: &str = "modal-map";

    pub const CHAT_WIDGET: &str = "chat-widget";
    pub const CHAT_TOGGLE: &str = "chat-toggle";
    pub const CLOSE_CHAT: &str = "close-chat";
    pub const CHAT_INPUT: &str = "chat-input";
    pub const SEND_BUTTON: &str = "send-btn";
    pub const CHAT_BODY: &str = "chat-body";
}

type Chat<D, T> = ChatWidget<<D as PageDocument>::Element, <D as PageDocument>::Log, T>;

/// Everything the page-ready initialization sets up. Each controller exists
/// only if the page carries its elements; operations on a missing one are
/// no-ops.
pub struct PlannerPage<D, T>
where
    D: PageDocument,
{
    travelers: Option<TravelerCountController<D::Element>>,
    overlay: Option<SubmitOverlay<D::Element>>,
    modal: Option<PlaceModal<D::Element>>,
    chat: Option<Chat<D, T>>,
}

impl<D, T> PlannerPage<D, T>
where
    D: PageDocument,
    T: ChatTransport,
{
    pub fn mount(document: &D, transport: T, context: ChatContext) -> Self {
        let page = Self {
            travelers: mount_travelers(document),
            overlay: mount_overlay(document),
            modal: mount_modal(document),
            chat: mount_chat(document, transport, context),
        };
        info!(
            travelers = page.travelers.is_some(),
            overlay = page.overlay.is_some(),
            modal = page.modal.is_some(),
            chat = page.chat.is_some(),
            "planner page mounted"
        );
        page
    }

    pub fn travelers(&self) -> Option<&TravelerCountController<D::Element>> {
        self.travelers.as_ref()
    }

    pub fn overlay(&self) -> Option<&SubmitOverlay<D::Element>> {
        self.overlay.as_ref()
    }

    pub fn modal(&self) -> Option<&PlaceModal<D::Element>> {
        self.modal.as_ref()
    }

    pub fn chat(&self) -> Option<&Chat<D, T>> {
        self.chat.as_ref()
    }

    pub fn toggle_traveler_count(&self) {
        if let Some(travelers) = &self.travelers {
            travelers.sync_with_selector();
        }
    }

    pub fn adjust_travelers(&self, delta: i64) {
        if let Some(travelers) = &self.travelers {
            travelers.adjust_count(delta);
        }
    }

    pub fn traveler_selection(&self) -> Option<TravelerSelection> {
        self.travelers.as_ref().map(|travelers| travelers.selection())
    }

    /// Shows the overlay and reports the traveler selection the form is
    /// about to submit.
    pub fn submit_form(&self) -> Option<TravelerSelection> {
        if let Some(overlay) = &self.overlay {
            overlay.on_submit();
        }
        let selection = self.traveler_selection();
        if let Some(selection) = &selection {
            info!(
                travelers = %selection.describe(),
                count = selection.count,
                "planner form submitted"
            );
        }
        selection
    }

    pub fn open_place_modal<A>(&self, source: &A)
    where
        A: AttributeSource + ?Sized,
    {
        if let Some(modal) = &self.modal {
            modal.open_detail(source);
        }
    }

    pub fn close_modal(&self) {
        if let Some(modal) = &self.modal {
            modal.close();
        }
    }

    pub fn handle_window_click(&self, target: ClickTarget) {
        if let Some(modal) = &self.modal {
            modal.handle_click(target);
        }
    }

    pub fn open_chat(&self) {
        if let Some(chat) = &self.chat {
            chat.open();
        }
    }

    pub fn close_chat(&self) {
        if let Some(chat) = &self.chat {
            chat.close();
        }
    }

    pub fn begin_chat_send(&self) -> Option<PendingReply> {
        self.chat.as_ref().and_then(|chat| chat.begin_send())
    }

    pub async fn complete_chat_send(&self, pending: PendingReply) -> SendOutcome {
        match &self.chat {
            Some(chat) => chat.complete_send(pending).await,
            None => SendOutcome::Skipped,
        }
    }

    pub async fn send_chat_message(&self) -> SendOutcome {
        match &self.chat {
            Some(chat) => chat.send_message().await,
            None => SendOutcome::Skipped,
        }
    }
}

fn mount_travelers<D: PageDocument>(document: &D) -> Option<TravelerCountController<D::Element>> {
    let Some(selector) = document.element_by_id(ids::TRAVELERS_TYPE) else {
        debug!("no traveler selector on page; traveler count stays inert");
        return None;
    };
    let wrapper = document.element_by_id(ids::TRAVELER_COUNT_WRAPPER);
    let count = document.element_by_id(ids::TRAVELERS_COUNT);
    let (Some(wrapper), Some(count)) = (wrapper, count) else {
        debug!("traveler count field missing; traveler count stays inert");
        return None;
    };

    let controller = TravelerCountController::new(selector, wrapper, count);
    controller.sync_with_selector();
    Some(controller)
}

fn mount_overlay<D: PageDocument>(document: &D) -> Option<SubmitOverlay<D::Element>> {
    document.element_by_id(ids::PLANNER_FORM)?;
    let Some(overlay) = document.element_by_id(ids::LOADING_OVERLAY) else {
        debug!("planner form has no loading overlay");
        return None;
    };
    Some(SubmitOverlay::new(overlay))
}

fn mount_modal<D: PageDocument>(document: &D) -> Option<PlaceModal<D::Element>> {
    let Some(root) = document.element_by_id(ids::PLACE_MODAL) else {
        debug!("no place modal on page; detail links stay inert");
        return None;
    };
    let fields = PlaceModalFields {
        title: document.element_by_id(ids::MODAL_TITLE)?,
        description: document.element_by_id(ids::MODAL_DESCRIPTION)?,
        address: document.element_by_id(ids::MODAL_ADDRESS)?,
        map: document.element_by_id(ids::MODAL_MAP)?,
    };
    Some(PlaceModal::new(root, fields))
}

fn mount_chat<D: PageDocument, T: ChatTransport>(
    document: &D,
    transport: T,
    context: ChatContext,
) -> Option<Chat<D, T>> {
    let panel = document.element_by_id(ids::CHAT_WIDGET);
    let input = document.element_by_id(ids::CHAT_INPUT);
    let log = document.message_log(ids::CHAT_BODY);
    let (Some(panel), Some(input), Some(log)) = (panel, input, log) else {
        debug!("chat widget elements missing; chat stays inert");
        return None;
    };
    Some(ChatWidget::new(panel, input, log, transport, context))
}

#[cfg(test)]
#[path = "tests/page_tests.rs"]
mod tests;
