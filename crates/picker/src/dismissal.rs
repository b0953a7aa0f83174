//! Panel exclusivity and outside-interaction dismissal.

use serde::{Deserialize, Serialize};

/// The panels that can fill the open picker's body.
///
/// Exactly one is visible while the picker is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    /// The day grid for the viewed month.
    #[default]
    DayGrid,
    /// The twelve-month quick picker.
    MonthPicker,
    /// The year quick picker.
    YearPicker,
}

impl Panel {
    /// Returns the panel shown after pressing the label that toggles `target`.
    ///
    /// Pressing a label whose picker is already visible returns to the day
    /// grid; pressing it otherwise replaces whatever is visible.
    ///
    /// # Examples
    ///
    /// ```
    /// use creditsearch_picker::Panel;
    ///
    /// assert_eq!(Panel::DayGrid.toggle(Panel::MonthPicker), Panel::MonthPicker);
    /// assert_eq!(Panel::MonthPicker.toggle(Panel::MonthPicker), Panel::DayGrid);
    /// assert_eq!(Panel::YearPicker.toggle(Panel::MonthPicker), Panel::MonthPicker);
    /// ```
    #[must_use]
    pub fn toggle(self, target: Panel) -> Panel {
        if self == target { Panel::DayGrid } else { target }
    }
}

/// Where an interaction happened relative to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionOrigin {
    /// Inside the field or its popup.
    Inside,
    /// Anywhere else.
    Outside,
}

/// Tracks whether outside interactions should close the picker.
///
/// The policy is armed while the picker is open and disarmed once it
/// closes, so a closed picker ignores outside interactions entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DismissalPolicy {
    armed: bool,
}

impl DismissalPolicy {
    /// Starts listening for outside interactions.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Stops listening for outside interactions.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Returns whether an interaction from `origin` should close the picker.
    #[must_use]
    pub fn should_dismiss(&self, origin: InteractionOrigin) -> bool {
        self.armed && origin == InteractionOrigin::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_year_from_grid_and_back() {
        let panel = Panel::DayGrid.toggle(Panel::YearPicker);
        assert_eq!(panel, Panel::YearPicker);
        assert_eq!(panel.toggle(Panel::YearPicker), Panel::DayGrid);
    }

    #[test]
    fn toggling_one_picker_hides_the_other() {
        assert_eq!(Panel::MonthPicker.toggle(Panel::YearPicker), Panel::YearPicker);
        assert_eq!(Panel::YearPicker.toggle(Panel::MonthPicker), Panel::MonthPicker);
    }

    #[test]
    fn disarmed_policy_never_dismisses() {
        let policy = DismissalPolicy::default();
        assert!(!policy.should_dismiss(InteractionOrigin::Outside));
    }

    #[test]
    fn armed_policy_ignores_inside_interactions() {
        let mut policy = DismissalPolicy::default();
        policy.arm();
        assert!(!policy.should_dismiss(InteractionOrigin::Inside));
        assert!(policy.should_dismiss(InteractionOrigin::Outside));

        policy.disarm();
        assert!(!policy.should_dismiss(InteractionOrigin::Outside));
    }
}
