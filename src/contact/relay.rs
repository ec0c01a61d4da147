use log::{debug, info};

use super::form::FormSubmission;
use crate::config;

/// Failures a real relay would report back to the form.
// Only constructed by relays that actually talk to the network.
#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("the contact endpoint did not answer in time")]
    Timeout,

    #[error("the contact endpoint rejected the request with status {status}")]
    Rejected { status: u16 },

    #[error("the browser is offline")]
    Offline,
}

/// Receiver of accepted contact requests.
pub trait Relay {
    fn deliver(&self, submission: &FormSubmission) -> Result<(), SendError>;
}

/// Stand-in for the contact endpoint. Every delivery succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedRelay;

impl Relay for SimulatedRelay {
    fn deliver(&self, submission: &FormSubmission) -> Result<(), SendError> {
        match serde_json::to_string(submission) {
            Ok(payload) => debug!("Simulated relay payload: {}", payload),
            Err(e) => debug!("Could not serialize contact payload: {}", e),
        }
        info!(
            "Simulated contact delivery to {} for pet {}",
            config::get_contact_endpoint(),
            submission.pet_name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::ContactForm;

    #[test]
    fn simulated_relay_always_succeeds() {
        let form = ContactForm {
            name: "Ann".into(),
            email: "ann@x.com".into(),
            pet_name: "Rex".into(),
            message: "Please call me back today".into(),
        };
        let submission = FormSubmission::parse(&form).unwrap();
        assert_eq!(SimulatedRelay.deliver(&submission), Ok(()));
    }

    #[test]
    fn rejected_error_names_the_status() {
        let err = SendError::Rejected { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}
