use log::{debug, info, warn};

use super::clock::Clock;
use super::form::{ContactForm, FormSubmission};
use super::relay::{Relay, SendError};
use crate::components::notification::NotificationKind;
use crate::config;
use crate::copy::FormMessages;

/// What the page has to do after a pipeline transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Notify { message: String, kind: NotificationKind },
    DisableSubmit { label: String },
    ResetForm,
    RestoreSubmit,
}

#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Pending {
        submission: FormSubmission,
        resolves_at: f64,
    },
}

/// Visible state of the submit button.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitControl {
    idle_label: String,
    pub label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            idle_label: label.clone(),
            label,
            disabled: false,
        }
    }

    pub fn disable(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.disabled = true;
    }

    pub fn restore(&mut self) {
        self.label = self.idle_label.clone();
        self.disabled = false;
    }
}

/// Contact form submission as a state machine.
///
/// `submit` validates and, if the form is acceptable, moves to pending.
/// The caller is expected to call `tick` once `due_in_ms` has elapsed; `tick`
/// hands the request to the relay and resolves back to idle. Nothing here
/// touches the DOM, every outcome comes back as a list of [`Effect`]s.
pub struct SubmissionPipeline<C: Clock, R: Relay> {
    clock: C,
    relay: R,
    messages: FormMessages,
    delay_ms: u32,
    phase: Phase,
}

impl<C: Clock, R: Relay> SubmissionPipeline<C, R> {
    pub fn new(clock: C, relay: R, messages: FormMessages) -> Self {
        Self {
            clock,
            relay,
            messages,
            delay_ms: config::SIMULATED_SEND_DELAY_MS,
            phase: Phase::Idle,
        }
    }

    #[cfg(test)]
    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Milliseconds until the pending send resolves, `None` when idle.
    pub fn due_in_ms(&self) -> Option<u32> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pending { resolves_at, .. } => {
                let left = (resolves_at - self.clock.now_ms()).ceil().max(0.0);
                Some(left as u32)
            }
        }
    }

    pub fn submit(&mut self, form: &ContactForm) -> Vec<Effect> {
        if self.is_pending() {
            warn!("Contact form submitted while a send is still pending, ignoring");
            return Vec::new();
        }

        match FormSubmission::parse(form) {
            Err(e) => {
                debug!("Contact form rejected: {}", e);
                vec![Effect::Notify {
                    message: self.messages.invalid.to_string(),
                    kind: NotificationKind::Error,
                }]
            }
            Ok(submission) => {
                let resolves_at = self.clock.now_ms() + f64::from(self.delay_ms);
                info!("Contact form accepted, sending in {} ms", self.delay_ms);
                self.phase = Phase::Pending {
                    submission,
                    resolves_at,
                };
                vec![Effect::DisableSubmit {
                    label: self.messages.sending.to_string(),
                }]
            }
        }
    }

    pub fn tick(&mut self) -> Vec<Effect> {
        let due = match &self.phase {
            Phase::Idle => return Vec::new(),
            Phase::Pending { resolves_at, .. } => self.clock.now_ms() >= *resolves_at,
        };
        if !due {
            return Vec::new();
        }

        let Phase::Pending { submission, .. } = std::mem::replace(&mut self.phase, Phase::Idle)
        else {
            return Vec::new();
        };

        match self.relay.deliver(&submission) {
            Ok(()) => vec![
                Effect::Notify {
                    message: self.messages.thank_you.to_string(),
                    kind: NotificationKind::Success,
                },
                Effect::ResetForm,
                Effect::RestoreSubmit,
            ],
            Err(e) => {
                warn!("Contact delivery failed: {}", e);
                vec![
                    Effect::Notify {
                        message: self.send_error_message(&e).to_string(),
                        kind: NotificationKind::Error,
                    },
                    Effect::RestoreSubmit,
                ]
            }
        }
    }

    fn send_error_message(&self, error: &SendError) -> &'static str {
        match error {
            SendError::Timeout => self.messages.send_timeout,
            SendError::Rejected { .. } => self.messages.send_rejected,
            SendError::Offline => self.messages.send_offline,
        }
    }
}
