use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Anything but `@` and browser whitespace, which unlike Unicode White_Space
// includes U+FEFF and leaves out U+0085.
const EMAIL_PART: &str =
    r"[^@\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{p}@{p}\.{p}$", p = EMAIL_PART)).expect("email pattern is valid")
});

// Minimum lengths in UTF-16 code units, the unit browsers count string length in.
const NAME_MIN_LEN: usize = 2;
const PET_NAME_MIN_LEN: usize = 1;
const MESSAGE_MIN_LEN: usize = 10;

fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim_input(value: &str) -> &str {
    value.trim_matches(is_browser_whitespace)
}

fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// The contact form fields exactly as the visitor typed them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub pet_name: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.pet_name.is_empty()
            && self.message.is_empty()
    }
}

/// First rule a form broke. Only ever logged, the visitor sees one message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must be at least 2 characters")]
    NameTooShort,

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("pet name is required")]
    MissingPetName,

    #[error("message must be at least 10 characters")]
    MessageTooShort,
}

/// A trimmed contact request that passed every rule.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub pet_name: String,
    pub message: String,
}

impl FormSubmission {
    pub fn parse(form: &ContactForm) -> Result<Self, ValidationError> {
        let name = trim_input(&form.name);
        let email = trim_input(&form.email);
        let pet_name = trim_input(&form.pet_name);
        let message = trim_input(&form.message);

        if input_len(name) < NAME_MIN_LEN {
            return Err(ValidationError::NameTooShort);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if input_len(pet_name) < PET_NAME_MIN_LEN {
            return Err(ValidationError::MissingPetName);
        }
        if input_len(message) < MESSAGE_MIN_LEN {
            return Err(ValidationError::MessageTooShort);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            pet_name: pet_name.to_string(),
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
pub fn validate_form(form: &ContactForm) -> bool {
    FormSubmission::parse(form).is_ok()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, pet_name: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            pet_name: pet_name.to_string(),
            message: message.to_string(),
        }
    }

    fn valid() -> ContactForm {
        form("Ann", "ann@x.com", "Rex", "Please call me back today")
    }

    #[test]
    fn email_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("@c.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn name_needs_two_characters() {
        let mut f = valid();
        f.name = "A".into();
        assert_eq!(FormSubmission::parse(&f), Err(ValidationError::NameTooShort));
        f.name = "Al".into();
        assert!(validate_form(&f));
    }

    #[test]
    fn name_length_is_measured_after_trim() {
        let mut f = valid();
        f.name = "  A  ".into();
        assert!(!validate_form(&f));
    }

    #[test]
    fn message_boundary() {
        let mut f = valid();
        f.message = "123456789".into();
        assert_eq!(FormSubmission::parse(&f), Err(ValidationError::MessageTooShort));
        f.message = "1234567890".into();
        assert!(validate_form(&f));
    }

    #[test]
    fn accented_letters_count_once() {
        let mut f = valid();
        f.name = "Ñ".into();
        assert!(!validate_form(&f));
        f.message = "ñññññññññ".into();
        f.name = "Ño".into();
        assert!(!validate_form(&f));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        let mut f = valid();
        f.name = "🐕".into();
        assert!(validate_form(&f));
        f.message = "🐕🐕🐕🐕🐕".into();
        assert!(validate_form(&f));
        f.message = "🐕🐕🐕🐕".into();
        assert_eq!(FormSubmission::parse(&f), Err(ValidationError::MessageTooShort));
    }

    #[test]
    fn byte_order_mark_is_trimmed_like_whitespace() {
        let mut f = valid();
        f.name = "\u{FEFF}A".into();
        assert_eq!(FormSubmission::parse(&f), Err(ValidationError::NameTooShort));
        f.name = "\u{3000}Ann\u{A0}".into();
        assert_eq!(FormSubmission::parse(&f).unwrap().name, "Ann");
    }

    #[test]
    fn next_line_is_not_trimmed() {
        let mut f = valid();
        f.name = "\u{85}A".into();
        assert!(validate_form(&f));
    }

    #[test]
    fn email_rejects_byte_order_mark_inside() {
        assert!(!is_valid_email("a\u{FEFF}b@c.co"));
        assert!(is_valid_email("a\u{85}b@c.co"));
    }

    #[test]
    fn whitespace_only_pet_name_is_missing() {
        let mut f = valid();
        f.pet_name = "   ".into();
        assert_eq!(FormSubmission::parse(&f), Err(ValidationError::MissingPetName));
    }

    #[test]
    fn empty_name_is_rejected() {
        let f = form("", "ann@x.com", "Rex", "Please call me back today");
        assert!(!validate_form(&f));
    }

    #[test]
    fn parse_trims_every_field() {
        let f = form(" Ann ", " ann@x.com\t", "\nRex", "  Please call me back today  ");
        let submission = FormSubmission::parse(&f).unwrap();
        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "ann@x.com");
        assert_eq!(submission.pet_name, "Rex");
        assert_eq!(submission.message, "Please call me back today");
    }

    #[test]
    fn submission_serializes_with_pet_name_in_camel_case() {
        let submission = FormSubmission::parse(&valid()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["petName"], "Rex");
        assert_eq!(json["email"], "ann@x.com");
    }

    #[test]
    fn clear_empties_the_form() {
        let mut f = valid();
        assert!(!f.is_empty());
        f.clear();
        assert!(f.is_empty());
    }
}
