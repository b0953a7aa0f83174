//! Centralized layout measurements for the TUI.
//!
//! Rendering and click hit-testing both derive field positions from the
//! functions here, so a click always lands on what was drawn.

use creditsearch_protocol::FieldId;
use ratatui::layout::Rect;

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows per form field: the input row and a help/error row.
pub const FIELD_HEIGHT: u16 = 2;

/// Width of the label column, including the required marker.
pub const LABEL_WIDTH: u16 = 16;

/// Horizontal padding on each side of the form.
pub const FORM_PADDING: u16 = 2;

/// Width of the date picker popup, borders included.
///
/// Seven two-column day cells with one-column gaps, plus borders.
pub const POPUP_WIDTH: u16 = 23;

/// Height of the date picker popup, borders included.
///
/// Header, weekday labels, six week rows, two bound rows, plus borders.
pub const POPUP_HEIGHT: u16 = 12;

/// Minimum terminal height: header, every field and the status bar.
pub const MIN_HEIGHT: u16 =
    HEADER_HEIGHT + FIELD_HEIGHT * FieldId::ALL.len() as u16 + STATUS_BAR_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Fits the label column next to the date picker popup.
pub const MIN_WIDTH: u16 = 60;

/// The form area between the header and the status bar.
#[must_use]
pub fn form_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + HEADER_HEIGHT,
        width: area.width,
        height: area
            .height
            .saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT),
    }
}

/// The status bar row at the bottom of `area`.
#[must_use]
pub fn status_bar_area(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.bottom().saturating_sub(STATUS_BAR_HEIGHT),
        width: area.width,
        height: STATUS_BAR_HEIGHT.min(area.height),
    }
}

/// The rectangle of every field within the form area, in focus order.
///
/// Fields that do not fit are omitted.
#[must_use]
pub fn field_areas(form: Rect) -> Vec<(FieldId, Rect)> {
    let x = form.x + FORM_PADDING;
    let width = form.width.saturating_sub(FORM_PADDING * 2);
    FieldId::ALL
        .into_iter()
        .zip(0u16..)
        .map(|(field, index)| {
            let y = form.y + index * FIELD_HEIGHT;
            (field, Rect::new(x, y, width, FIELD_HEIGHT))
        })
        .filter(|(_, rect)| rect.bottom() <= form.bottom())
        .collect()
}

/// The value column of a field's input row.
#[must_use]
pub fn value_area(field: Rect) -> Rect {
    Rect {
        x: field.x + LABEL_WIDTH,
        y: field.y,
        width: field.width.saturating_sub(LABEL_WIDTH),
        height: 1,
    }
}

/// Places the date picker popup next to its field.
///
/// The popup opens below the input row when it fits, above it otherwise,
/// and is shifted left to stay inside `area`.
#[must_use]
pub fn popup_area(field: Rect, area: Rect) -> Rect {
    let anchor = value_area(field);
    let width = POPUP_WIDTH.min(area.width);
    let height = POPUP_HEIGHT.min(area.height);

    let below = anchor.y + 1;
    let y = if below + height <= area.bottom() {
        below
    } else {
        anchor.y.saturating_sub(height).max(area.y)
    };
    let x = anchor.x.min(area.right().saturating_sub(width)).max(area.x);
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_height_fits_every_field() {
        assert_eq!(MIN_HEIGHT, 24);
        let area = Rect::new(0, 0, MIN_WIDTH, MIN_HEIGHT);
        assert_eq!(field_areas(form_area(area)).len(), FieldId::ALL.len());
    }

    #[test]
    fn fields_stack_below_header() {
        let fields = field_areas(form_area(Rect::new(0, 0, 80, 30)));
        assert_eq!(fields[0], (FieldId::Title, Rect::new(2, 3, 76, 2)));
        assert_eq!(fields[4], (FieldId::DateOfBirth, Rect::new(2, 11, 76, 2)));
        assert_eq!(value_area(fields[4].1), Rect::new(18, 11, 60, 1));
    }

    #[test]
    fn short_form_drops_overflowing_fields() {
        let fields = field_areas(Rect::new(0, 0, 80, 5));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn popup_opens_below_when_room() {
        let area = Rect::new(0, 0, 80, 30);
        let popup = popup_area(Rect::new(2, 11, 76, 2), area);
        assert_eq!(popup, Rect::new(18, 12, POPUP_WIDTH, POPUP_HEIGHT));
    }

    #[test]
    fn popup_flips_above_near_bottom() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = popup_area(Rect::new(2, 18, 76, 2), area);
        assert_eq!(popup.y, 6);
        assert_eq!(popup.bottom(), 18);
    }

    #[test]
    fn popup_shifts_left_to_stay_visible() {
        let area = Rect::new(0, 0, 30, 30);
        let popup = popup_area(Rect::new(2, 3, 26, 2), area);
        assert_eq!(popup.right(), 30);
    }

    #[test]
    fn status_bar_is_last_row() {
        assert_eq!(status_bar_area(Rect::new(0, 0, 80, 24)), Rect::new(0, 23, 80, 1));
    }
}
