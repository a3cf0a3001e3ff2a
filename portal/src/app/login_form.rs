use crate::form_fields;
use crossterm::event::{Event, KeyCode, KeyEvent};
use internships_core::login::{self, LoginFlow, Submitted};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

form_fields!(Field, Email => "Email", Password => "Password");

impl From<Field> for login::Field {
    fn from(field: Field) -> Self {
        match field {
            Field::Email => Self::Email,
            Field::Password => Self::Password,
        }
    }
}

/// The text boxes in front of a `LoginFlow`. The flow owns the values and
/// their validation; this just owns cursors and focus.
#[derive(Debug)]
pub struct LoginForm {
    /// Which field we're editing
    active: Field,

    /// Who are you?
    email: Input,

    /// What's your password? (Will be masked)
    password: Input,
}

impl LoginForm {
    /// Handle a key press, keeping the flow up to date with what's typed.
    /// Enter submits.
    pub fn handle_event(&mut self, key: KeyEvent, flow: &mut LoginFlow) -> Option<Submitted> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.active = self.active.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active = self.active.prev();
                None
            }
            KeyCode::Enter => Some(flow.submit()),
            _ => {
                let input = self.input_mut(self.active);

                if input.handle_event(&Event::Key(key)).is_some() {
                    let value = input.value().to_string();
                    flow.set(self.active.into(), value);
                }

                None
            }
        }
    }

    /// Draw the form, centered in `body_area`.
    #[expect(clippy::cast_possible_truncation)]
    pub fn render(&self, flow: &LoginFlow, body_area: Rect, frame: &mut Frame<'_>) {
        let popup_vert = Layout::vertical([Constraint::Length(12)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", flow.role().portal_title()))
            .title_bottom(Line::from(" enter: log in · tab: next field · esc: back ").right_aligned())
            .border_style(Style::default().fg(Color::Blue));
        let inner = outer.inner(popup_area);
        frame.render_widget(outer, popup_area);

        let rows = Layout::vertical(Constraint::from_lengths([3, 1, 3, 1, 1]));
        let [email_area, email_error_area, password_area, password_error_area, notice_area] =
            rows.areas(inner);

        let width = inner.width.saturating_sub(2 + 1); // -2 for the border, -1 for the cursor

        for (field, area, error_area, error) in [
            (Field::Email, email_area, email_error_area, &flow.errors().email),
            (
                Field::Password,
                password_area,
                password_error_area,
                &flow.errors().password,
            ),
        ] {
            let input = self.input(field);
            let scroll = input.visual_scroll(width as usize);

            let shown = match field {
                Field::Email => input.value().to_string(),
                Field::Password => "*".repeat(input.value().chars().count()),
            };

            let border_style = if error.is_some() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Blue)
            };

            let widget = Paragraph::new(shown).scroll((0, scroll as u16)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label())
                    .border_style(border_style),
            );
            frame.render_widget(widget, area);

            if let Some(error) = error {
                frame.render_widget(Paragraph::new(error.as_str()).red(), error_area);
            }

            if self.active == field {
                frame.set_cursor_position((
                    area.x
                        + (input.visual_cursor().max(scroll) - scroll) as u16 // current end of text
                        + 1, // just past the end of the text
                    area.y + 1, // +1 row for the border/title
                ));
            }
        }

        if flow.is_pending() {
            frame.render_widget(Paragraph::new("Logging in…").dark_gray(), notice_area);
        } else if let Some(notice) = flow.notice() {
            frame.render_widget(Paragraph::new(notice).red(), notice_area);
        }
    }

    /// The input for a field
    fn input(&self, field: Field) -> &Input {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// The input for a field, mutably
    fn input_mut(&mut self, field: Field) -> &mut Input {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            active: Field::Email,
            email: Input::default(),
            password: Input::default(),
        }
    }
}
