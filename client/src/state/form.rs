//! Draft state for the generation request form.
//!
//! DESIGN
//! ======
//! Every user interaction is a [`FormMsg`] fed through [`FormState::reduce`],
//! which returns the next state instead of mutating in place. The component
//! only writes the returned state back into its signal, so each re-render has
//! exactly one visible cause.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{GenerationSpec, ImageSpec};

/// Which draft collection a message targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Texts,
    Styles,
}

/// User intent on the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMsg {
    /// Input buffer edited.
    Input(Field, String),
    /// Commit the input buffer as a new entry.
    Add(Field),
    /// Remove the first entry equal to the value.
    Remove(Field, String),
    Submit,
    ToggleExpanded,
}

/// Result of applying one message.
#[derive(Clone, Debug, PartialEq)]
pub struct FormUpdate {
    pub state: FormState,
    /// Set only by [`FormMsg::Submit`]: the draft that was handed off.
    pub submitted: Option<ImageSpec>,
}

/// Form draft plus its two input buffers and collapse state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub spec: ImageSpec,
    pub text_input: String,
    pub style_input: String,
    pub expanded: bool,
}

impl FormState {
    /// Apply `msg` and return the resulting state.
    #[must_use]
    pub fn reduce(&self, msg: FormMsg) -> FormUpdate {
        let mut next = self.clone();
        let mut submitted = None;

        match msg {
            FormMsg::Input(field, value) => *next.input_mut(field) = value,
            FormMsg::Add(field) => {
                let value = next.input_mut(field).trim().to_owned();
                if !value.is_empty() {
                    next.entries_mut(field).push(value);
                    next.input_mut(field).clear();
                }
            }
            FormMsg::Remove(field, value) => {
                let entries = next.entries_mut(field);
                if let Some(pos) = entries.iter().position(|entry| *entry == value) {
                    entries.remove(pos);
                }
            }
            FormMsg::Submit => {
                submitted = Some(std::mem::take(&mut next.spec));
            }
            FormMsg::ToggleExpanded => next.expanded = !next.expanded,
        }

        FormUpdate { state: next, submitted }
    }

    /// Entries of one draft collection.
    #[must_use]
    pub fn entries(&self, field: Field) -> &[String] {
        match field {
            Field::Texts => &self.spec.texts,
            Field::Styles => &self.spec.styles,
        }
    }

    /// Current input buffer of one collection.
    #[must_use]
    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::Texts => &self.text_input,
            Field::Styles => &self.style_input,
        }
    }

    /// Pipeline steps the current draft would take once submitted.
    #[must_use]
    pub fn estimated_steps(&self) -> u64 {
        if self.spec.texts.is_empty() {
            return 0;
        }
        GenerationSpec::from_image(self.spec.clone()).total_steps()
    }

    fn entries_mut(&mut self, field: Field) -> &mut Vec<String> {
        match field {
            Field::Texts => &mut self.spec.texts,
            Field::Styles => &mut self.spec.styles,
        }
    }

    fn input_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Texts => &mut self.text_input,
            Field::Styles => &mut self.style_input,
        }
    }
}
