//! Focus and input handling for the registration form widgets

use super::field::{FieldKind, FieldSpec, FIELDS};
use super::form_data::{ChangeEvent, FormData};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What a key press means for the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    /// A field value changed
    Change(ChangeEvent),
    /// The user asked to submit
    Submit,
    /// Handled locally (focus or dropdown movement) or ignored
    None,
}

/// Open dropdown of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropdown {
    pub highlighted: usize,
}

/// Widget-side state of the registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    /// Focused row; `FIELDS.len()` is the submit button
    pub active_field_index: usize,
    pub dropdown: Option<Dropdown>,
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FIELDS.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.dropdown = None;
        self.active_field_index = index.min(FIELDS.len());
    }
}

impl RegistrationForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = FIELDS.len();

    /// Metadata of the focused field, `None` on the submit row
    pub fn active_spec(&self) -> Option<&'static FieldSpec> {
        FIELDS.get(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// Move focus to a specific field
    pub fn focus(&mut self, spec: &FieldSpec) {
        self.set_active_field(spec.name as usize);
    }

    /// Translate a key press into a form input. `data` supplies current values.
    pub fn handle_key(&mut self, key: KeyEvent, data: &FormData) -> FormInput {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('s') {
            self.dropdown = None;
            return FormInput::Submit;
        }

        if self.dropdown.is_some() {
            return self.handle_dropdown_key(key);
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                return FormInput::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev_field();
                return FormInput::None;
            }
            _ => {}
        }

        let Some(spec) = self.active_spec() else {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => FormInput::Submit,
                _ => FormInput::None,
            };
        };

        let current = data.get(spec.name);
        match spec.kind {
            FieldKind::Text { multiline } => self.handle_text_key(key, spec, current, multiline),
            FieldKind::Select(options) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    let highlighted = options.iter().position(|o| *o == current).unwrap_or(0);
                    self.dropdown = Some(Dropdown { highlighted });
                }
                FormInput::None
            }
            FieldKind::Radio(options) => {
                let selected = options.iter().position(|(_, value)| *value == current);
                let next = match (key.code, selected) {
                    (KeyCode::Left, Some(i)) => Some((i + options.len() - 1) % options.len()),
                    (KeyCode::Right | KeyCode::Char(' '), Some(i)) => Some((i + 1) % options.len()),
                    (KeyCode::Left | KeyCode::Right | KeyCode::Char(' '), None) => Some(0),
                    (KeyCode::Enter, _) => {
                        self.next_field();
                        None
                    }
                    _ => None,
                };
                next.map_or(FormInput::None, |i| {
                    FormInput::Change(ChangeEvent::new(spec.name, options[i].1))
                })
            }
        }
    }

    fn handle_text_key(
        &mut self,
        key: KeyEvent,
        spec: &FieldSpec,
        current: &str,
        multiline: bool,
    ) -> FormInput {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let mut value = current.to_string();
        match key.code {
            KeyCode::Char('u') if ctrl => value.clear(),
            KeyCode::Char(_) if ctrl => return FormInput::None,
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Enter if multiline => value.push('\n'),
            KeyCode::Enter => {
                self.next_field();
                return FormInput::None;
            }
            _ => return FormInput::None,
        }

        if value == current {
            FormInput::None
        } else {
            FormInput::Change(ChangeEvent::new(spec.name, value))
        }
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) -> FormInput {
        let (Some(spec), Some(mut dropdown)) = (self.active_spec(), self.dropdown) else {
            self.dropdown = None;
            return FormInput::None;
        };
        let FieldKind::Select(options) = spec.kind else {
            self.dropdown = None;
            return FormInput::None;
        };

        match key.code {
            KeyCode::Up => {
                dropdown.highlighted = dropdown.highlighted.saturating_sub(1);
            }
            KeyCode::Down => {
                dropdown.highlighted = (dropdown.highlighted + 1).min(options.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dropdown = None;
                return FormInput::Change(ChangeEvent::new(
                    spec.name,
                    options[dropdown.highlighted],
                ));
            }
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                self.dropdown = None;
                return FormInput::None;
            }
            _ => return FormInput::None,
        }

        self.dropdown = Some(dropdown);
        FormInput::None
    }
}
