use shared::domain::{
    adjusted_count, layout_for, parse_count, CountLayout, TravelerSelection, TravelerType,
};
use tracing::debug;

use crate::dom::{Display, ValueField, Visible};

pub struct TravelerCountController<E> {
    selector: E,
    wrapper: E,
    count: E,
}

impl<E> TravelerCountController<E>
where
    E: ValueField + Visible,
{
    pub fn new(selector: E, wrapper: E, count: E) -> Self {
        Self {
            selector,
            wrapper,
            count,
        }
    }

    /// Re-applies the rule for whatever the selector currently shows.
    pub fn sync_with_selector(&self) -> CountLayout {
        let value = self.selector.value();
        self.set_traveler_type(&value)
    }

    pub fn set_traveler_type(&self, value: &str) -> CountLayout {
        let kind = TravelerType::from_selector_value(value);
        let current = parse_count(&self.count.value());
        let layout = layout_for(kind, current);

        self.wrapper.set_display(if layout.count_visible {
            Display::Block
        } else {
            Display::None
        });
        if current != Some(i64::from(layout.count)) {
            self.count.set_value(&layout.count.to_string());
        }
        debug!(traveler_type = value, count = layout.count, "traveler type applied");
        layout
    }

    pub fn adjust_count(&self, delta: i64) -> u32 {
        let next = adjusted_count(parse_count(&self.count.value()), delta);
        self.count.set_value(&next.to_string());
        next
    }

    /// Current selection; unknown selector values read as `Solo`.
    pub fn selection(&self) -> TravelerSelection {
        let kind =
            TravelerType::from_selector_value(&self.selector.value()).unwrap_or(TravelerType::Solo);
        let count = adjusted_count(parse_count(&self.count.value()), 0);
        TravelerSelection { kind, count }
    }
}

#[cfg(test)]
#[path = "tests/traveler_tests.rs"]
mod tests;
