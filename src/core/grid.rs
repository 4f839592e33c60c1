//! Toggle-grid abstraction consumed by the streak controller.
//!
//! The controller never talks to a concrete UI. It only needs a set of 31
//! addressable slots (one per possible day of month) with checked/enabled
//! state, a tooltip and show/hide. `MonthGrid` is the in-memory
//! implementation used by the CLI renderer and by the tests.

/// Fixed slot count: the widest month has 31 days.
pub const GRID_SLOTS: u32 = 31;

/// Capability set of one month of day toggles, indexed 1..=31.
///
/// Out-of-range indexes are a caller bug; implementations may panic on them
/// the same way indexing a slice would.
pub trait ToggleGrid {
    fn is_checked(&self, day: u32) -> bool;
    fn set_checked(&mut self, day: u32, checked: bool);
    fn is_enabled(&self, day: u32) -> bool;
    fn set_enabled(&mut self, day: u32, enabled: bool);
    fn set_tooltip(&mut self, day: u32, text: &str);
    fn tooltip(&self, day: u32) -> &str;
    fn is_visible(&self, day: u32) -> bool;
    fn show(&mut self, day: u32);
    fn hide(&mut self, day: u32);
}

#[derive(Debug, Clone, Default)]
struct Slot {
    checked: bool,
    enabled: bool,
    visible: bool,
    tooltip: String,
}

/// In-memory grid of 31 day slots.
///
/// Fresh slots start unchecked, disabled and visible, matching a widget grid
/// before the controller initializes it.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    slots: Vec<Slot>,
}

impl Default for MonthGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MonthGrid {
    pub fn new() -> Self {
        let mut slots = vec![Slot::default(); GRID_SLOTS as usize];
        for s in &mut slots {
            s.visible = true;
        }
        Self { slots }
    }

    fn slot(&self, day: u32) -> &Slot {
        &self.slots[day as usize - 1]
    }

    fn slot_mut(&mut self, day: u32) -> &mut Slot {
        &mut self.slots[day as usize - 1]
    }
}

impl ToggleGrid for MonthGrid {
    fn is_checked(&self, day: u32) -> bool {
        self.slot(day).checked
    }

    fn set_checked(&mut self, day: u32, checked: bool) {
        self.slot_mut(day).checked = checked;
    }

    fn is_enabled(&self, day: u32) -> bool {
        self.slot(day).enabled
    }

    fn set_enabled(&mut self, day: u32, enabled: bool) {
        self.slot_mut(day).enabled = enabled;
    }

    fn set_tooltip(&mut self, day: u32, text: &str) {
        self.slot_mut(day).tooltip = text.to_string();
    }

    fn tooltip(&self, day: u32) -> &str {
        &self.slot(day).tooltip
    }

    fn is_visible(&self, day: u32) -> bool {
        self.slot(day).visible
    }

    fn show(&mut self, day: u32) {
        self.slot_mut(day).visible = true;
    }

    fn hide(&mut self, day: u32) {
        self.slot_mut(day).visible = false;
    }
}
