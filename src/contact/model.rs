use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

/// The four lead-capture fields, created fresh per page load and posted
/// as-is to the intake endpoint on a successful submit.
#[derive(Clone, PartialEq, Default, Debug, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
            Field::Company => None,
        }
    }

    // Editing a field clears its recorded error; the field is not
    // re-validated until the next submit.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
            Field::Company => {}
        }
    }
}

/// Submitting is held only while the request is in flight; it always
/// resolves to exactly one of Succeeded or Failed. Succeeded is terminal
/// for the form instance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    // Re-entrant submits while a request is in flight are a no-op.
    pub fn accepts_submit(self) -> bool {
        self != SubmissionState::Submitting
    }
}

pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.name = Some("Name is required");
    }

    if fields.email.trim().is_empty() {
        errors.email = Some("Email is required");
    } else if !email_shape_ok(&fields.email) {
        errors.email = Some("Please enter a valid email");
    }

    if fields.message.trim().is_empty() {
        errors.message = Some("Message is required");
    }

    errors
}

// Accepts addresses shaped like user@host.tld: no whitespace, a single
// "@", and a "." in the host part with at least one character on each
// side of it.
fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            email: email.to_string(),
            company: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn complete_fields_validate_clean() {
        let errors = validate(&fields("Jo", "a@b.co", "hi"));
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_name_flags_only_name() {
        let errors = validate(&fields("", "a@b.co", "hi"));
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, None);
    }

    #[test]
    fn malformed_email_flags_only_email() {
        let errors = validate(&fields("Jo", "not-an-email", "hi"));
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some("Please enter a valid email"));
        assert_eq!(errors.message, None);
    }

    #[test]
    fn empty_email_reports_required_not_invalid() {
        let errors = validate(&fields("Jo", "", "hi"));
        assert_eq!(errors.email, Some("Email is required"));
    }

    #[test]
    fn whitespace_only_message_counts_as_empty() {
        let errors = validate(&fields("Jo", "a@b.co", "   "));
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, Some("Message is required"));
    }

    #[test]
    fn company_is_never_validated() {
        let mut f = fields("Jo", "a@b.co", "hi");
        f.company = "   ".to_string();
        assert!(validate(&f).is_empty());
    }

    #[test]
    fn email_shapes() {
        assert!(email_shape_ok("a@b.co"));
        assert!(email_shape_ok("a@b.c.d"));
        assert!(!email_shape_ok("a b@c.d"));
        assert!(!email_shape_ok("a@b@c.d"));
        assert!(!email_shape_ok("@b.co"));
        assert!(!email_shape_ok("a@.co"));
        assert!(!email_shape_ok("a@b."));
        assert!(!email_shape_ok("a@bco"));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut errors = validate(&fields("", "nope", ""));
        assert_eq!(errors.email, Some("Please enter a valid email"));

        let mut current = fields("", "nope", "");
        current.set(Field::Email, "x".to_string());
        errors.clear(Field::Email);

        assert_eq!(current.email, "x");
        assert_eq!(errors.email, None);
        // The other errors stay until the next submit revalidates.
        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.message, Some("Message is required"));
    }

    #[test]
    fn clearing_company_is_a_no_op() {
        let mut errors = validate(&fields("", "", ""));
        let before = errors.clone();
        errors.clear(Field::Company);
        assert_eq!(errors, before);
    }

    #[test]
    fn only_an_in_flight_submission_blocks_submit() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(SubmissionState::Failed.accepts_submit());
        assert!(SubmissionState::Succeeded.accepts_submit());
        assert!(!SubmissionState::Submitting.accepts_submit());
    }

    // Drives the same transitions the form component performs, counting
    // dispatched requests.
    #[test]
    fn failed_submission_allows_a_fresh_request() {
        let current = fields("Jo", "a@b.co", "hi");
        let mut state = SubmissionState::Idle;
        let mut dispatched = 0;

        for outcome in [false, true] {
            assert!(state.accepts_submit());
            assert!(validate(&current).is_empty());
            state = SubmissionState::Submitting;
            dispatched += 1;

            // Re-entrant submit while in flight must not dispatch again.
            assert!(!state.accepts_submit());

            state = if outcome {
                SubmissionState::Succeeded
            } else {
                SubmissionState::Failed
            };
        }

        assert_eq!(dispatched, 2);
        assert_eq!(state, SubmissionState::Succeeded);
    }

    #[test]
    fn invalid_submit_stores_errors_without_dispatch() {
        let current = fields("Jo", "", "hi");
        let state = SubmissionState::Idle;

        assert!(state.accepts_submit());
        let errors = validate(&current);
        assert!(!errors.is_empty());
        // No dispatch, no state transition: the submit ends here.
        assert_eq!(state, SubmissionState::Idle);
    }

    #[test]
    fn payload_serializes_all_four_fields() {
        let mut f = fields("Jo", "a@b.co", "hi");
        f.company = "Acme".to_string();
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jo",
                "email": "a@b.co",
                "company": "Acme",
                "message": "hi"
            })
        );
    }
}
