//! Contact form: live character count and a one-way submit lock.

use thqaf_config::ContactConfig;

use crate::surface::{NodeRef, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Locked until the page navigates away
    Sending,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    length: usize,
    submit: SubmitState,
    sending_label: String,
}

impl ContactForm {
    pub fn new(config: &ContactConfig) -> Self {
        Self {
            length: 0,
            submit: SubmitState::Idle,
            sending_label: config.sending_label.clone(),
        }
    }

    /// Record the message field's current value. Length is counted in UTF-16
    /// code units, the unit the browser uses for `value.length` and `maxlength`.
    pub fn sync_message(&mut self, value: &str) {
        self.length = value.encode_utf16().count();
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn submit(&mut self) {
        self.submit = SubmitState::Sending;
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn project(&self, surface: &mut impl Surface) {
        surface.set_text(NodeRef::MessageCount, &self.length.to_string());
        // The idle label belongs to the markup; only the lock is ours.
        if self.submit == SubmitState::Sending {
            surface.set_disabled(NodeRef::SendButton, true);
            surface.set_text(NodeRef::SendButton, &self.sending_label);
        }
    }
}
