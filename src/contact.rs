use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Company,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Company => self.company = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Company is optional; everything else must be non-blank.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    /// Values go out exactly as typed.
    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Request body for the contact endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub company: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SubmitError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("endpoint answered with status {0}")]
    Status(u16),
}

/// What a submit click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStart {
    /// Request `attempt` should go out.
    Started(u64),
    /// A required field was blank; `attempt` shows the error notice without a request.
    Rejected(u64),
    /// A request is already in flight.
    Busy,
}

/// Form state for the contact block. `attempt` identifies the submission in flight so
/// late completions and reset timers from an earlier one are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: SubmitStatus,
    pub attempt: u64,
}

impl ContactForm {
    pub fn edit(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
    }

    /// Starts a submission. Every click outside `Sending` takes a new attempt number so
    /// the auto-clear timer for it can run; a blank required field goes straight to `Error`.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.status == SubmitStatus::Sending {
            return SubmitStart::Busy;
        }
        self.attempt += 1;
        if !self.draft.is_complete() {
            self.status = SubmitStatus::Error;
            return SubmitStart::Rejected(self.attempt);
        }
        self.status = SubmitStatus::Sending;
        SubmitStart::Started(self.attempt)
    }

    /// Records the outcome of `attempt`. Returns false if it was stale.
    pub fn finish(&mut self, attempt: u64, result: &Result<(), SubmitError>) -> bool {
        if attempt != self.attempt || self.status != SubmitStatus::Sending {
            return false;
        }
        match result {
            Ok(()) => {
                self.status = SubmitStatus::Success;
                self.draft = ContactDraft::default();
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
        true
    }

    /// Auto-clear after a notice. Only the latest attempt's timer may clear it.
    pub fn clear_status(&mut self, attempt: u64) -> bool {
        let settled = matches!(self.status, SubmitStatus::Success | SubmitStatus::Error);
        if attempt != self.attempt || !settled {
            return false;
        }
        self.status = SubmitStatus::Idle;
        true
    }
}

pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

/// Posts the payload as JSON. One call, one request; no retry.
pub async fn send(endpoint: &str, payload: &ContactPayload) -> Result<(), SubmitError> {
    let request = Request::post(endpoint)
        .json(payload)
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    gloo_console::log!("Contact endpoint answered with status", response.status());
    check_status(response.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn started(form: &mut ContactForm) -> u64 {
        match form.begin_submit() {
            SubmitStart::Started(attempt) => attempt,
            other => panic!("expected a started submission, got {:?}", other),
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Анна".to_string());
        form.edit(Field::Email, "anna@example.com".to_string());
        form.edit(Field::Message, "Нужен сайт".to_string());
        form
    }

    #[test]
    fn success_clears_fields_then_resets_to_idle() {
        let mut form = filled();
        let SubmitStart::Started(attempt) = form.begin_submit() else {
            panic!("complete draft should start");
        };
        assert_eq!(form.status, SubmitStatus::Sending);

        assert!(form.finish(attempt, &Ok(())));
        assert_eq!(form.status, SubmitStatus::Success);
        assert_eq!(form.draft, ContactDraft::default());

        assert!(form.clear_status(attempt));
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn network_failure_keeps_fields() {
        let mut form = filled();
        let before = form.draft.clone();
        let attempt = started(&mut form);

        form.finish(attempt, &Err(SubmitError::Network("offline".into())));
        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.draft, before);

        form.clear_status(attempt);
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.draft, before);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit();
        assert_eq!(form.begin_submit(), SubmitStart::Busy);
        assert_eq!(first, SubmitStart::Started(1));
        assert_eq!(form.attempt, 1);
    }

    #[test]
    fn blank_required_field_shows_error_then_clears() {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "   ".to_string());
        form.edit(Field::Email, "anna@example.com".to_string());
        form.edit(Field::Message, "Привет".to_string());

        assert_eq!(form.begin_submit(), SubmitStart::Rejected(1));
        assert_eq!(form.status, SubmitStatus::Error);
        assert_eq!(form.draft.name, "   ");

        assert!(form.clear_status(1));
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn payload_keeps_values_as_typed() {
        let mut form = filled();
        form.edit(Field::Message, "  - сайт\n  - логотип\n".to_string());
        let payload = form.draft.to_payload();
        assert_eq!(payload.message, "  - сайт\n  - логотип\n");
    }

    #[test]
    fn stale_reset_timer_does_not_clear_newer_notice() {
        let mut form = filled();
        let first = started(&mut form);
        form.finish(first, &Err(SubmitError::Status(502)));
        let second = started(&mut form);

        assert!(!form.clear_status(first));
        assert_eq!(form.status, SubmitStatus::Sending);

        form.finish(second, &Err(SubmitError::Status(500)));
        assert!(!form.clear_status(first));
        assert_eq!(form.status, SubmitStatus::Error);
        assert!(form.clear_status(second));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut form = filled();
        let attempt = started(&mut form);
        assert!(!form.finish(attempt + 1, &Ok(())));
        assert_eq!(form.status, SubmitStatus::Sending);
    }

    #[test]
    fn status_codes_map_to_outcomes() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(302), Err(SubmitError::Status(302)));
        assert_eq!(check_status(500), Err(SubmitError::Status(500)));
    }

    #[test]
    fn payload_serializes_with_empty_company() {
        let form = filled();
        let body = serde_json::to_value(form.draft.to_payload()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Анна",
                "company": "",
                "email": "anna@example.com",
                "message": "Нужен сайт",
            })
        );
    }
}
