use std::rc::Rc;

use yew::prelude::*;

use crate::contact::{ContactForm, ContactPayload, Field, SubmitError, SubmitStart, SubmitStatus};
use crate::tracker::{Section, SectionTracker, VisibilityEntry};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

pub enum PageAction {
    SplashElapsed,
    ToggleTheme,
    Visibility(Vec<VisibilityEntry>),
    Edit(Field, String),
    Submit,
    Finished { attempt: u64, result: Result<(), SubmitError> },
    ClearStatus { attempt: u64 },
}

/// Everything the landing page mutates. Child views only see it through props.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub lifecycle: Lifecycle,
    pub theme: Theme,
    pub tracker: SectionTracker,
    pub contact: ContactForm,
}

impl PageState {
    pub fn new(visibility_threshold: f64) -> Self {
        Self {
            lifecycle: Lifecycle::Loading,
            theme: Theme::default(),
            tracker: SectionTracker::new(visibility_threshold),
            contact: ContactForm::default(),
        }
    }

    pub fn active_section(&self) -> Section {
        self.tracker.active()
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == Lifecycle::Loading
    }

    /// The request that attempt `attempt` should send, if that attempt is still in flight.
    pub fn pending_request(&self, attempt: u64) -> Option<ContactPayload> {
        let in_flight = attempt > 0
            && attempt == self.contact.attempt
            && self.contact.status == SubmitStatus::Sending;
        in_flight.then(|| self.contact.draft.to_payload())
    }

    /// Applies an action in place. Returns whether anything changed.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::SplashElapsed => {
                if self.lifecycle == Lifecycle::Ready {
                    return false;
                }
                self.lifecycle = Lifecycle::Ready;
                true
            }
            PageAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                true
            }
            PageAction::Visibility(batch) => {
                let before = self.tracker.active();
                before != self.tracker.observe(&batch)
            }
            PageAction::Edit(field, value) => {
                self.contact.edit(field, value);
                true
            }
            PageAction::Submit => match self.contact.begin_submit() {
                SubmitStart::Started(_) => true,
                SubmitStart::Rejected(attempt) => {
                    log::warn!("Contact submission {} refused: required field is blank", attempt);
                    true
                }
                SubmitStart::Busy => false,
            },
            PageAction::Finished { attempt, result } => {
                if let Err(e) = &result {
                    log::error!("Contact submission {} failed: {}", attempt, e);
                }
                self.contact.finish(attempt, &result)
            }
            PageAction::ClearStatus { attempt } => self.contact.clear_status(attempt),
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Rc<PageState>, action: PageAction) -> Rc<PageState> {
        state.reduce(action)
    }

    #[test]
    fn splash_moves_to_ready_once() {
        let state = Rc::new(PageState::new(0.35));
        assert!(state.is_loading());

        let ready = reduce(state, PageAction::SplashElapsed);
        assert_eq!(ready.lifecycle, Lifecycle::Ready);

        let again = reduce(ready.clone(), PageAction::SplashElapsed);
        assert!(Rc::ptr_eq(&ready, &again));
    }

    #[test]
    fn theme_toggle_twice_is_identity() {
        let state = Rc::new(PageState::new(0.35));
        let once = reduce(state.clone(), PageAction::ToggleTheme);
        assert_eq!(once.theme, Theme::Dark);
        let twice = reduce(once, PageAction::ToggleTheme);
        assert_eq!(*twice, *state);
    }

    #[test]
    fn visibility_updates_active_section() {
        let state = Rc::new(PageState::new(0.35));
        let state = reduce(
            state,
            PageAction::Visibility(vec![
                VisibilityEntry::new(Section::About, true, 0.4),
                VisibilityEntry::new(Section::Services, true, 0.7),
            ]),
        );
        assert_eq!(state.active_section(), Section::Services);

        let state = reduce(state, PageAction::Visibility(vec![]));
        assert_eq!(state.active_section(), Section::Services);
    }

    #[test]
    fn contact_round_trip_through_reducer() {
        let mut state = Rc::new(PageState::new(0.35));
        for (field, value) in [
            (Field::Name, "Игорь"),
            (Field::Company, "ООО Ромашка"),
            (Field::Email, "igor@example.com"),
            (Field::Message, "Лендинг под запуск"),
        ] {
            state = reduce(state, PageAction::Edit(field, value.to_string()));
        }

        state = reduce(state, PageAction::Submit);
        assert_eq!(state.contact.status, SubmitStatus::Sending);
        let attempt = state.contact.attempt;

        let unchanged = reduce(state.clone(), PageAction::Submit);
        assert!(Rc::ptr_eq(&state, &unchanged));

        state = reduce(state, PageAction::Finished { attempt, result: Ok(()) });
        assert_eq!(state.contact.status, SubmitStatus::Success);
        assert!(state.contact.draft.name.is_empty());

        state = reduce(state, PageAction::ClearStatus { attempt });
        assert_eq!(state.contact.status, SubmitStatus::Idle);
    }

    #[test]
    fn failure_through_reducer_keeps_draft() {
        let mut state = Rc::new(PageState::new(0.35));
        state = reduce(state, PageAction::Edit(Field::Name, "Игорь".into()));
        state = reduce(state, PageAction::Edit(Field::Email, "igor@example.com".into()));
        state = reduce(state, PageAction::Edit(Field::Message, "Привет".into()));
        state = reduce(state, PageAction::Submit);
        let attempt = state.contact.attempt;

        state = reduce(
            state,
            PageAction::Finished { attempt, result: Err(SubmitError::Network("offline".into())) },
        );
        assert_eq!(state.contact.status, SubmitStatus::Error);
        assert_eq!(state.contact.draft.name, "Игорь");

        state = reduce(state, PageAction::ClearStatus { attempt });
        assert_eq!(state.contact.status, SubmitStatus::Idle);
        assert_eq!(state.contact.draft.message, "Привет");
    }

    #[test]
    fn whitespace_name_submit_shows_error_notice() {
        let mut state = Rc::new(PageState::new(0.35));
        state = reduce(state, PageAction::Edit(Field::Name, "   ".into()));
        state = reduce(state, PageAction::Edit(Field::Email, "igor@example.com".into()));
        state = reduce(state, PageAction::Edit(Field::Message, "Привет".into()));

        let after = reduce(state.clone(), PageAction::Submit);
        assert!(!Rc::ptr_eq(&state, &after));
        assert_eq!(after.contact.status, SubmitStatus::Error);
        assert_eq!(after.contact.attempt, 1);
        assert_eq!(after.pending_request(1), None);

        let cleared = reduce(after, PageAction::ClearStatus { attempt: 1 });
        assert_eq!(cleared.contact.status, SubmitStatus::Idle);
    }

    #[test]
    fn pending_request_only_for_current_sending_attempt() {
        let mut state = Rc::new(PageState::new(0.35));
        assert_eq!(state.pending_request(0), None);
        state = reduce(state, PageAction::Edit(Field::Name, "Игорь".into()));
        state = reduce(state, PageAction::Edit(Field::Email, "igor@example.com".into()));
        state = reduce(state, PageAction::Edit(Field::Message, "Привет".into()));
        state = reduce(state, PageAction::Submit);

        let payload = state.pending_request(1).expect("attempt 1 is in flight");
        assert_eq!(payload.name, "Игорь");
        assert_eq!(state.pending_request(2), None);

        state = reduce(state, PageAction::Finished { attempt: 1, result: Ok(()) });
        assert_eq!(state.pending_request(1), None);
    }
}
