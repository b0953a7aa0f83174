//! End-to-end scenarios for the date-of-birth picker and the form around it.

use chrono::NaiveDate;
use creditsearch_picker::calendar::add_months;
use creditsearch_picker::{
    DateBounds, DateFieldProps, DatePicker, DisplayFormat, Panel, PickerMessage, PickerState,
    ViewedMonth,
};
use creditsearch_protocol::{FieldId, Message, Title};
use creditsearch_tui::{App, Status};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn dob_bounds() -> DateBounds {
    DateBounds::new(ymd(1920, 1, 1), ymd(2003, 12, 31)).unwrap()
}

fn dob_props() -> DateFieldProps {
    DateFieldProps::new("Date of Birth", "dateOfBirth", dob_bounds()).required(true)
}

fn today() -> NaiveDate {
    ymd(2026, 10, 19)
}

fn type_into(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.update(Message::Input { ch });
    }
}

#[test]
fn typed_dates_only_commit_when_real() {
    let format = DisplayFormat::default();
    assert!(format.parse("29-02-2003").is_err());
    assert_eq!(format.parse("29-02-2000"), Ok(ymd(2000, 2, 29)));

    let mut picker = DatePicker::new(dob_props(), today());
    let rejected = picker.update(PickerMessage::EditText {
        text: "29-02-2003".to_string(),
    });
    assert!(rejected.is_none());
    assert_eq!(picker.selected_date(), None);

    let commit = picker
        .update(PickerMessage::EditText {
            text: "29-02-2000".to_string(),
        })
        .unwrap();
    assert_eq!(commit.value, "2000-02-29");
    assert_eq!(commit.field_id, "dateOfBirth");
}

#[test]
fn navigation_stops_at_the_last_month() {
    let bounds = dob_bounds();
    let december = ViewedMonth::new(2003, 11).unwrap();

    assert_eq!(add_months(december, 1, &bounds), december);
    assert_eq!(
        add_months(december, -1, &bounds),
        ViewedMonth::new(2003, 10).unwrap()
    );

    let mut picker = DatePicker::new(dob_props(), today());
    picker.update(PickerMessage::Activate);
    for _ in 0..3 {
        picker.update(PickerMessage::NavigateMonth { delta: 1 });
    }
    assert_eq!(picker.viewed_month(), december);
}

#[test]
fn year_picker_lists_every_year_in_range() {
    let props = dob_props().initial_value("1995-06-15");
    let mut picker = DatePicker::new(props, today());
    picker.update(PickerMessage::Activate);
    picker.update(PickerMessage::ToggleYearPicker);
    assert_eq!(picker.state(), PickerState::Open(Panel::YearPicker));

    let years = picker.year_entries();
    assert_eq!(years.len(), 84);
    assert_eq!(years.first().map(|e| e.year), Some(1920));
    assert_eq!(years.last().map(|e| e.year), Some(2003));

    let current: Vec<i32> = years.iter().filter(|e| e.current).map(|e| e.year).collect();
    assert_eq!(current, vec![1995]);
}

#[test]
fn outside_interaction_closes_without_changing_value() {
    let props = dob_props().initial_value("1990-03-15");
    let mut picker = DatePicker::new(props, today());
    picker.update(PickerMessage::Activate);
    picker.update(PickerMessage::NavigateMonth { delta: -5 });

    let commit = picker.update(PickerMessage::Interaction {
        origin: creditsearch_picker::InteractionOrigin::Outside,
    });

    assert!(commit.is_none());
    assert!(!picker.is_open());
    assert_eq!(picker.selected_date(), Some(ymd(1990, 3, 15)));
    assert_eq!(picker.input_buffer(), "15-03-1990");
}

fn fill_form(app: &mut App) {
    app.update(Message::CycleOption { delta: 4 });
    app.update(Message::FocusNext);
    type_into(app, "Ada");
    app.update(Message::FocusNext);
    app.update(Message::FocusNext);
    type_into(app, "Lovelace");
    app.update(Message::FocusNext);
    type_into(app, "10-12-1985");
    app.update(Message::FocusNext);
    type_into(app, "+447123456789");
    app.update(Message::FocusNext);
    type_into(app, "ada@example.com");
    app.update(Message::FocusNext);
    type_into(app, "SW1A 2AA");
    app.update(Message::FocusNext);
    type_into(app, "10 Downing Street");
    app.update(Message::FocusNext);
    app.update(Message::ToggleCheckbox);
}

#[test]
fn completed_form_is_submitted() {
    let mut app = App::new(dob_props(), today());
    fill_form(&mut app);

    assert_eq!(app.state().focus, FieldId::Confirmation);
    app.update(Message::Submit);

    let values = app.submitted_values().expect("form should be submitted");
    assert_eq!(values.title, Some(Title::Dr));
    assert_eq!(values.date_of_birth.as_deref(), Some("1985-12-10"));
    assert_eq!(values.middle_name, "");

    let json = serde_json::to_value(values).unwrap();
    assert_eq!(json["dateOfBirth"], "1985-12-10");
}

#[test]
fn retyped_out_of_range_date_blocks_submit() {
    let mut app = App::new(dob_props(), today());
    fill_form(&mut app);

    // The earlier commit stays in the form values while the text is rejected.
    app.update(Message::Picker(PickerMessage::EditText {
        text: "10-12-2010".to_string(),
    }));
    app.update(Message::FocusNext);
    assert_eq!(app.state().values.date_of_birth.as_deref(), Some("1985-12-10"));

    app.update(Message::Submit);

    assert!(app.submitted_values().is_none());
    assert_eq!(app.state().focus, FieldId::DateOfBirth);
    assert_eq!(
        app.state().visible_error(FieldId::DateOfBirth),
        Some("Please enter a valid date")
    );
    assert!(matches!(app.state().status, Some(Status::Error(_))));
    assert!(app.picker().props().has_validation_error);

    app.update(Message::Picker(PickerMessage::EditText {
        text: "10-12-1985".to_string(),
    }));
    app.update(Message::Submit);
    assert!(app.submitted_values().is_some());
}

#[test]
fn incomplete_form_points_at_first_problem() {
    let mut app = App::new(dob_props(), today());
    app.update(Message::Input { ch: ' ' });
    app.update(Message::Submit);

    assert!(app.submitted_values().is_none());
    assert_eq!(app.state().focus, FieldId::FirstName);
    assert_eq!(
        app.state().visible_error(FieldId::DateOfBirth),
        Some("Date of birth is required")
    );
}
