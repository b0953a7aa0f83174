//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use std::sync::Arc;

use chrono::NaiveDate;
use creditsearch_lookup::{LookupClient, format_address_options};
use creditsearch_picker::{
    DateFieldProps, DatePicker, InteractionOrigin, PickerMessage, to_canonical,
};
use creditsearch_protocol::{FieldId, FieldKind, FormValues, Message};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

use crate::{
    FormState, Status,
    event::{event_to_message, poll_event},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, field_areas, form_area, popup_area, status_bar_area,
        value_area,
    },
    picker_cursor::PickerCursor,
    terminal::AppTerminal,
    widgets::{
        form::CALENDAR_BUTTON, hit_test, render_date_picker, render_form, render_help_overlay,
        render_status_bar, typed_date_rejected,
    },
};

/// Work the run loop performs outside of `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Look up the addresses for a postcode in the background.
    LookupAddresses {
        /// The trimmed postcode.
        postcode: String,
    },
}

/// The main application struct.
///
/// Owns the form state and the date picker, and routes messages between
/// them. Picker commits are the only way a date of birth reaches the form.
#[derive(Debug)]
pub struct App {
    state: FormState,
    picker: DatePicker,
    cursor: Option<PickerCursor>,
    today: NaiveDate,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    lookup: Option<Arc<Mutex<LookupClient>>>,
    tx: mpsc::UnboundedSender<Message>,
    rx: mpsc::UnboundedReceiver<Message>,
}

impl App {
    /// Creates a new application around the date-of-birth picker.
    ///
    /// A valid `initial_value` in the props pre-fills the form.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use creditsearch_picker::{DateBounds, DateFieldProps};
    /// use creditsearch_tui::App;
    ///
    /// let bounds = DateBounds::new(
    ///     NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2003, 12, 31).unwrap(),
    /// ).unwrap();
    /// let props = DateFieldProps::new("Date of Birth", "dateOfBirth", bounds);
    /// let app = App::new(props, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    /// assert!(!app.picker().is_open());
    /// ```
    #[must_use]
    pub fn new(props: DateFieldProps, today: NaiveDate) -> Self {
        let picker = DatePicker::new(props, today);
        let mut state = FormState::new(today);
        state.values.date_of_birth = picker.selected_date().map(to_canonical);
        state.revalidate(today);

        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            picker,
            cursor: None,
            today,
            should_quit: false,
            last_area: Rect::default(),
            lookup: None,
            tx,
            rx,
        }
    }

    /// Enables postcode lookup through `client`.
    #[must_use]
    pub fn with_lookup(mut self, client: LookupClient) -> Self {
        self.lookup = Some(Arc::new(Mutex::new(client)));
        self
    }

    /// Returns a reference to the form state.
    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns a reference to the date picker.
    #[must_use]
    pub fn picker(&self) -> &DatePicker {
        &self.picker
    }

    /// Returns the picker's keyboard cursor while it is open.
    #[must_use]
    pub fn cursor(&self) -> Option<&PickerCursor> {
        self.cursor.as_ref()
    }

    /// Returns whether the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The submitted values, once a submit attempt succeeded.
    #[must_use]
    pub fn submitted_values(&self) -> Option<&FormValues> {
        self.state.is_submitted().then_some(&self.state.values)
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, input messages only dismiss it.
    /// `Quit`, `ToggleHelp` and background results work normally.
    ///
    /// Returns an [`Effect`] when the message needs background work.
    pub fn update(&mut self, msg: Message) -> Option<Effect> {
        if self.state.help_visible {
            match msg {
                Message::Quit | Message::ToggleHelp | Message::AddressesLoaded { .. } => {}
                _ => {
                    self.state.dismiss_help();
                    return None;
                }
            }
        }

        let effect = match msg {
            Message::Quit => {
                self.should_quit = true;
                None
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
                None
            }
            Message::FocusNext => {
                self.focus(self.state.focus.next());
                None
            }
            Message::FocusPrev => {
                self.focus(self.state.focus.prev());
                None
            }
            Message::Input { ch } => {
                self.input(ch);
                None
            }
            Message::Backspace => {
                if self.state.focus_kind() == FieldKind::Date {
                    self.apply_picker(PickerMessage::Backspace);
                } else {
                    self.state.backspace();
                }
                None
            }
            Message::CycleOption { delta } => {
                self.state.cycle_option(delta);
                None
            }
            Message::ToggleCheckbox => {
                if self.state.focus_kind() == FieldKind::Checkbox {
                    self.state.toggle_confirmation();
                }
                None
            }
            Message::Activate => self.activate(),
            Message::Submit => {
                self.apply_picker(PickerMessage::Interaction {
                    origin: InteractionOrigin::Outside,
                });
                self.state
                    .set_date_text_rejected(typed_date_rejected(&self.picker));
                self.state.attempt_submit(self.today);
                None
            }
            Message::ClickAt { column, row } => self.handle_click(column, row),
            Message::Picker(picker_msg) => {
                self.state.move_focus(FieldId::DateOfBirth);
                self.apply_picker(picker_msg);
                None
            }
            Message::PickerCursor { dx, dy } => {
                let step = self
                    .cursor
                    .as_mut()
                    .and_then(|cursor| cursor.move_by(&self.picker, dx, dy));
                if let Some(picker_msg) = step {
                    self.apply_picker(picker_msg);
                }
                None
            }
            Message::PickerConfirm => {
                let selection = self
                    .cursor
                    .as_ref()
                    .and_then(|cursor| cursor.confirm(&self.picker));
                if let Some(picker_msg) = selection {
                    self.apply_picker(picker_msg);
                }
                None
            }
            Message::PickerDismiss => {
                if self.picker.is_open() {
                    self.apply_picker(PickerMessage::ToggleCalendar);
                }
                None
            }
            Message::AddressesLoaded { postcode, options } => {
                self.state.set_address_options(&postcode, options);
                None
            }
        };

        self.refresh_validation();
        effect
    }

    fn refresh_validation(&mut self) {
        self.state
            .set_date_text_rejected(typed_date_rejected(&self.picker));
        self.state.revalidate(self.today);
        let has_error = self.state.visible_error(FieldId::DateOfBirth).is_some();
        self.picker.set_validation_error(has_error);
    }

    /// Moves focus, dismissing the picker when the date field loses it.
    fn focus(&mut self, field: FieldId) {
        if field != FieldId::DateOfBirth {
            self.apply_picker(PickerMessage::Interaction {
                origin: InteractionOrigin::Outside,
            });
        }
        self.state.move_focus(field);
    }

    fn input(&mut self, ch: char) {
        match self.state.focus_kind() {
            FieldKind::Date => self.apply_picker(PickerMessage::InputChar { ch }),
            FieldKind::Checkbox if ch == ' ' => self.state.toggle_confirmation(),
            FieldKind::Select if ch == ' ' => self.state.cycle_option(1),
            FieldKind::Text => {
                self.state.input_char(ch);
            }
            FieldKind::Checkbox | FieldKind::Select => {}
        }
    }

    fn activate(&mut self) -> Option<Effect> {
        match self.state.focus_kind() {
            FieldKind::Date => self.apply_picker(PickerMessage::Activate),
            FieldKind::Checkbox => self.state.toggle_confirmation(),
            FieldKind::Select => self.state.cycle_option(1),
            FieldKind::Text if self.state.focus == FieldId::PostalCode => {
                return self.request_lookup();
            }
            FieldKind::Text => self.focus(self.state.focus.next()),
        }
        None
    }

    fn request_lookup(&mut self) -> Option<Effect> {
        let postcode = self.state.values.postal_code.trim().to_string();
        if postcode.is_empty() {
            self.state.status = Some(Status::Error("Enter a postal code first".to_string()));
            return None;
        }
        if self.lookup.is_none() {
            self.state.status = Some(Status::Error(
                "Address lookup is not configured".to_string(),
            ));
            return None;
        }

        debug!(%postcode, "requesting address lookup");
        self.state.status = Some(Status::Info(format!("Looking up {postcode}…")));
        self.state.pending_lookup = Some(postcode.clone());
        Some(Effect::LookupAddresses { postcode })
    }

    /// Forwards an interaction to the picker and stores any commit.
    fn apply_picker(&mut self, msg: PickerMessage) {
        let was_open = self.picker.is_open();
        if let Some(commit) = self.picker.update(msg) {
            if let Err(e) = self
                .state
                .values
                .set_field_value(&commit.field_id, &commit.value)
            {
                warn!(error = %e, field = %commit.field_id, "picker commit rejected by form");
            }
            self.state.touch(FieldId::DateOfBirth);
        }

        if !self.picker.is_open() {
            self.cursor = None;
        } else if was_open && let Some(cursor) = self.cursor.as_mut() {
            cursor.sync(&self.picker);
        } else {
            self.cursor = Some(PickerCursor::new(&self.picker));
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// Clicks inside the open popup go to the picker. Clicks elsewhere
    /// dismiss it and focus the field under the pointer.
    fn handle_click(&mut self, column: u16, row: u16) -> Option<Effect> {
        if self.last_area.width < MIN_WIDTH || self.last_area.height < MIN_HEIGHT {
            return None;
        }
        let fields = field_areas(form_area(self.last_area));
        let date_rect = fields
            .iter()
            .find(|(field, _)| *field == FieldId::DateOfBirth)
            .map(|(_, rect)| *rect);

        if self.picker.is_open()
            && let Some(date_rect) = date_rect
        {
            let popup = popup_area(date_rect, self.last_area);
            if let Some(hit) = hit_test(&self.picker, self.cursor.as_ref(), popup, column, row) {
                let msg = hit.to_message().unwrap_or(PickerMessage::Interaction {
                    origin: InteractionOrigin::Inside,
                });
                self.apply_picker(msg);
                return None;
            }
        }

        let position = Position::new(column, row);
        let clicked = fields.iter().find(|(_, rect)| rect.contains(position));
        let Some(&(field, rect)) = clicked else {
            self.apply_picker(PickerMessage::Interaction {
                origin: InteractionOrigin::Outside,
            });
            return None;
        };

        self.focus(field);
        let value = value_area(rect);
        if !value.contains(position) {
            return None;
        }
        match field.kind() {
            FieldKind::Date if self.picker.is_open() => {
                let msg = if self.on_calendar_button(value, column) {
                    PickerMessage::ToggleCalendar
                } else {
                    PickerMessage::Interaction {
                        origin: InteractionOrigin::Inside,
                    }
                };
                self.apply_picker(msg);
            }
            FieldKind::Date => self.apply_picker(PickerMessage::Activate),
            FieldKind::Checkbox => self.state.toggle_confirmation(),
            FieldKind::Select => self.state.cycle_option(1),
            FieldKind::Text => {}
        }
        None
    }

    fn on_calendar_button(&self, value: Rect, column: u16) -> bool {
        let buffer = self.picker.input_buffer();
        let shown = if buffer.is_empty() {
            self.picker.props().format.placeholder().chars().count()
        } else {
            buffer.chars().count()
        };
        let shown = u16::try_from(shown).unwrap_or(u16::MAX);
        let start = value.x.saturating_add(shown).saturating_add(1);
        let width = u16::try_from(CALENDAR_BUTTON.chars().count()).unwrap_or(u16::MAX);
        (start..start.saturating_add(width)).contains(&column)
    }

    /// Renders the application UI to the given frame.
    ///
    /// If the terminal is below the minimum dimensions, shows a "terminal
    /// too small" message instead.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, _] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
        self.render_header(frame, header_area);

        let form = form_area(area);
        let picker_open = self.picker.is_open();
        let buf = frame.buffer_mut();
        render_form(&self.state, &self.picker, form, buf);
        render_status_bar(
            self.state.status.as_ref(),
            picker_open,
            status_bar_area(area),
            buf,
        );

        if picker_open
            && let Some((_, date_rect)) = field_areas(form)
                .into_iter()
                .find(|(field, _)| *field == FieldId::DateOfBirth)
        {
            let popup = popup_area(date_rect, area);
            render_date_picker(&self.picker, self.cursor.as_ref(), popup, buf);
        }

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "Credit Search",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Check your eligibility", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Starts the background work for `effect`.
    ///
    /// Results come back through the app's message channel.
    pub fn perform(&self, effect: Effect) {
        match effect {
            Effect::LookupAddresses { postcode } => {
                let Some(client) = self.lookup.clone() else {
                    return;
                };
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let addresses = client.lock().await.lookup(&postcode).await;
                    let options = format_address_options(&addresses)
                        .into_iter()
                        .map(|option| option.label)
                        .collect();
                    if tx
                        .send(Message::AddressesLoaded { postcode, options })
                        .is_err()
                    {
                        debug!("app closed before lookup finished");
                    }
                });
            }
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use creditsearch_picker::{DateBounds, DateFieldProps};
    /// use creditsearch_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    ///     let bounds = DateBounds::new(NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(), today)?;
    ///     let props = DateFieldProps::new("Date of Birth", "dateOfBirth", bounds);
    ///
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(props, today);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.picker.is_open())
                && let Some(effect) = self.update(msg)
            {
                self.perform(effect);
            }

            while let Ok(msg) = self.rx.try_recv() {
                if let Some(effect) = self.update(msg) {
                    self.perform(effect);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
