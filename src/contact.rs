use thiserror::Error;

/// Simulated delivery time for a submitted message.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill all fields")]
    MissingFields,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        Ok(())
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal for the lifetime of the form.
    Submitted,
}

/// Identifies one in-flight submission. Completions carrying any other
/// ticket are stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    Edit(Field, String),
    Submit,
    Complete(Ticket),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: SubmitStatus,
    pub error: Option<ContactError>,
    pending: Option<(Ticket, ContactDraft)>,
    issued: u64,
}

impl ContactForm {
    pub fn pending(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }

    pub fn submit_disabled(&self) -> bool {
        self.status != SubmitStatus::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Submitting => "Sending...",
            SubmitStatus::Submitted => "Message Sent!",
        }
    }

    pub fn update(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => self.draft.set(field, value),
            ContactAction::Submit => self.begin_submit(),
            ContactAction::Complete(ticket) => self.complete(ticket),
        }
    }

    fn begin_submit(&mut self) {
        if self.status != SubmitStatus::Idle {
            log::debug!("contact.submit_ignored status={:?}", self.status);
            return;
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.status = SubmitStatus::Submitting;
        self.error = None;
        self.pending = Some((ticket, self.draft.clone()));
        log::info!("contact.submit_started ticket={}", ticket.0);
    }

    fn complete(&mut self, ticket: Ticket) {
        let Some((pending, snapshot)) = self.pending.take() else {
            log::debug!("contact.stale_completion ticket={}", ticket.0);
            return;
        };

        if pending != ticket {
            log::debug!("contact.stale_completion ticket={}", ticket.0);
            self.pending = Some((pending, snapshot));
            return;
        }

        match snapshot.validate() {
            Ok(()) => {
                self.draft = ContactDraft::default();
                self.status = SubmitStatus::Submitted;
                log::info!("contact.submitted ticket={}", ticket.0);
            }
            Err(error) => {
                self.error = Some(error);
                self.status = SubmitStatus::Idle;
                log::warn!("contact.rejected ticket={} reason={error}", ticket.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(ContactAction::Edit(Field::Name, "Ada".to_string()));
        form.update(ContactAction::Edit(Field::Email, "ada@example.com".to_string()));
        form.update(ContactAction::Edit(Field::Message, "Hello".to_string()));
        form
    }

    fn submit_and_finish(form: &mut ContactForm) {
        form.update(ContactAction::Submit);
        let ticket = form.pending().expect("submit issues a ticket");
        form.update(ContactAction::Complete(ticket));
    }

    #[test]
    fn field_names_map_to_fields() {
        assert_eq!(Field::from_name("email"), Some(Field::Email));
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn submit_moves_to_submitting_and_disables_button() {
        let mut form = filled();
        form.error = Some(ContactError::MissingFields);
        form.update(ContactAction::Submit);

        assert_eq!(form.status, SubmitStatus::Submitting);
        assert!(form.submit_disabled());
        assert_eq!(form.error, None);
        assert_eq!(form.button_label(), "Sending...");
    }

    #[test]
    fn complete_form_clears_fields_and_stays_submitted() {
        let mut form = filled();
        submit_and_finish(&mut form);

        assert_eq!(form.status, SubmitStatus::Submitted);
        assert_eq!(form.draft, ContactDraft::default());
        assert!(form.submit_disabled());
        assert_eq!(form.pending(), None);

        form.update(ContactAction::Edit(Field::Name, "Again".to_string()));
        form.update(ContactAction::Submit);
        assert_eq!(form.status, SubmitStatus::Submitted);
        assert_eq!(form.pending(), None);
        assert_eq!(form.button_label(), "Message Sent!");
    }

    #[test]
    fn any_empty_field_surfaces_error_and_reenables_submit() {
        for missing in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.update(ContactAction::Edit(missing, String::new()));
            submit_and_finish(&mut form);

            assert_eq!(form.status, SubmitStatus::Idle);
            assert!(!form.submit_disabled());
            assert_eq!(
                form.error.map(|error| error.to_string()).as_deref(),
                Some("Please fill all fields")
            );
        }
    }

    #[test]
    fn failed_submit_keeps_draft_and_can_retry() {
        let mut form = filled();
        form.update(ContactAction::Edit(Field::Message, String::new()));
        submit_and_finish(&mut form);
        assert_eq!(form.draft.name, "Ada");

        form.update(ContactAction::Edit(Field::Message, "Second try".to_string()));
        submit_and_finish(&mut form);
        assert_eq!(form.status, SubmitStatus::Submitted);
        assert_eq!(form.error, None);
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled();
        form.update(ContactAction::Edit(Field::Message, "  ".to_string()));
        submit_and_finish(&mut form);
        assert_eq!(form.status, SubmitStatus::Submitted);
    }

    #[test]
    fn validation_uses_the_draft_at_submit_time() {
        let mut form = filled();
        form.update(ContactAction::Submit);
        let ticket = form.pending().expect("ticket");
        form.update(ContactAction::Edit(Field::Name, String::new()));
        form.update(ContactAction::Complete(ticket));

        assert_eq!(form.status, SubmitStatus::Submitted);
    }

    #[test]
    fn repeated_submit_while_pending_is_ignored() {
        let mut form = filled();
        form.update(ContactAction::Submit);
        let first = form.pending();
        form.update(ContactAction::Submit);
        assert_eq!(form.pending(), first);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut form = filled();
        form.update(ContactAction::Edit(Field::Email, String::new()));
        submit_and_finish(&mut form);
        let old_ticket = Ticket(1);

        form.update(ContactAction::Edit(Field::Email, "ada@example.com".to_string()));
        form.update(ContactAction::Submit);
        let current = form.pending().expect("second ticket");
        assert_ne!(current, old_ticket);

        form.update(ContactAction::Complete(old_ticket));
        assert_eq!(form.status, SubmitStatus::Submitting);
        assert_eq!(form.pending(), Some(current));

        form.update(ContactAction::Complete(current));
        assert_eq!(form.status, SubmitStatus::Submitted);
    }

    #[test]
    fn completion_without_pending_submit_is_a_no_op() {
        let mut form = filled();
        let before = form.clone();
        form.update(ContactAction::Complete(Ticket(7)));
        assert_eq!(form, before);
    }
}
