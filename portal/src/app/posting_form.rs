use crate::form_fields;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

form_fields!(
    Field,
    Title => "Internship Title",
    Description => "Description",
    Duration => "Duration (e.g. 3 months)",
    Location => "Location",
    Requirements => "Requirements",
);

/// The employer's "post a new internship" form. Nothing is validated and
/// nothing is sent anywhere yet.
#[derive(Debug, Default)]
pub struct PostingForm {
    /// Which field we're editing
    active: Option<Field>,

    /// One input per field, in `Field::FIELDS` order
    inputs: [Input; 5],
}

impl PostingForm {
    /// Handle a key press. Returns a message for the status line when the
    /// user tries to post.
    pub fn handle_event(&mut self, key: KeyEvent) -> Option<&'static str> {
        match (key.code, self.active) {
            (KeyCode::Tab, Some(field)) => self.active = Some(field.next()),
            (KeyCode::BackTab, Some(field)) => self.active = Some(field.prev()),
            (KeyCode::Tab | KeyCode::Char('p'), None) => self.active = Some(Field::Title),
            (KeyCode::Enter, Some(_)) => {
                tracing::debug!(title = self.inputs[0].value(), "tried to post internship");
                return Some("Posting internships is not connected to the server yet");
            }
            (_, Some(field)) => {
                self.inputs[field as usize].handle_event(&Event::Key(key));
            }
            (_, None) => {}
        }

        None
    }

    /// Is a field focused? If so, the form gets all the keys.
    pub fn is_editing(&self) -> bool {
        self.active.is_some()
    }

    /// Stop editing
    pub fn blur(&mut self) {
        self.active = None;
    }

    /// The current value of a field
    pub fn value(&self, field: Field) -> &str {
        self.inputs[field as usize].value()
    }

    /// Draw the form
    pub fn render(&self, area: Rect, frame: &mut Frame<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Post a New Internship (p to edit) ")
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([Constraint::Length(3); 5]).split(inner);

        for (field, row) in Field::FIELDS.iter().zip(rows.iter()) {
            let style = if self.active == Some(*field) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            frame.render_widget(
                Paragraph::new(self.value(*field)).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(field.label())
                        .border_style(style),
                ),
                *row,
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_goes_to_the_active_field() {
        let mut form = PostingForm::default();

        form.handle_event(key(KeyCode::Char('p')));
        form.handle_event(key(KeyCode::Char('x')));
        form.handle_event(key(KeyCode::Tab));
        form.handle_event(key(KeyCode::Char('y')));

        assert_eq!(form.value(Field::Title), "x");
        assert_eq!(form.value(Field::Description), "y");
    }

    #[test]
    fn posting_goes_nowhere() {
        let mut form = PostingForm::default();
        form.handle_event(key(KeyCode::Tab));

        assert!(form.handle_event(key(KeyCode::Enter)).is_some());
        assert_eq!(form.value(Field::Title), "");
    }
}
