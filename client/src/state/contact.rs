//! Contact form validation and submission state.
//!
//! DESIGN
//! ======
//! Validation is a fixed pattern table keyed by `Field`. A field starts
//! `Pristine` and is only validated once the user leaves it non-empty (blur)
//! or submits; after that, every input revalidates while it is `Invalid` so
//! the error clears as soon as the value is fixed.
//!
//! Submission is a two-phase machine. `begin_submit` validates everything and
//! hands back the relay payload; `finish` applies the relay outcome. The
//! submit button content is derived from the phase, so it is restored in
//! every outcome without remembering the previous markup.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Shortest accepted message.
pub const MESSAGE_MIN_CHARS: usize = 10;
/// Hard message length cap, matching the textarea's `maxlength`.
pub const MESSAGE_MAX_CHARS: usize = 2000;
/// Counter turns to the warning color past this many characters.
pub const MESSAGE_WARN_CHARS: usize = 1800;
/// Shown once when the relay rejects or cannot be reached.
pub const SUBMIT_FAILURE_NOTICE: &str = "Sorry, there was an error sending your message. Please try again.";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-zA-Z\s]{2,50}$"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\d\s\-\+\(\)]{10,20}$"));
static SUBJECT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"^.{3,100}$"));

#[allow(clippy::expect_used, reason = "patterns are fixed literals covered by tests")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static contact pattern")
}

/// Contact form inputs, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 5] = [Self::Name, Self::Email, Self::Phone, Self::Subject, Self::Message];

    /// Form control `name`, also the relay payload key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Please enter a valid name (2-50 characters)",
            Self::Email => "Please enter a valid email address",
            Self::Phone => "Please enter a valid phone number",
            Self::Subject => "Subject must be 3-100 characters",
            Self::Message => "Message must be 10-2000 characters",
        }
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Name => NAME_RE.is_match(value),
            Self::Email => EMAIL_RE.is_match(value),
            Self::Phone => PHONE_RE.is_match(value),
            Self::Subject => SUBJECT_RE.is_match(value),
            Self::Message => (MESSAGE_MIN_CHARS..=MESSAGE_MAX_CHARS).contains(&form_length(value)),
        }
    }

    /// Validate a raw value (trimmed before matching).
    ///
    /// # Errors
    ///
    /// Returns the field's inline error message when the value does not match.
    pub fn validate(self, value: &str) -> Result<(), &'static str> {
        if self.accepts(value.trim()) { Ok(()) } else { Err(self.error_message()) }
    }
}

/// Inline validation state for one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Valid,
    Invalid(&'static str),
}

impl FieldStatus {
    /// `success`/`error` class for the control.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Pristine => "",
            Self::Valid => "success",
            Self::Invalid(_) => "error",
        }
    }

    /// Text for the field's `.error-message` slot.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Invalid(msg) => msg,
            Self::Pristine | Self::Valid => "",
        }
    }

    #[must_use]
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Length as the browser counts it for `maxlength`: UTF-16 code units.
#[must_use]
pub fn form_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Live message length counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharCounter {
    pub count: usize,
}

impl CharCounter {
    #[must_use]
    pub fn for_message(message: &str) -> Self {
        Self { count: form_length(message) }
    }

    #[must_use]
    pub fn is_warning(self) -> bool {
        self.count > MESSAGE_WARN_CHARS
    }

    #[must_use]
    pub fn text(self) -> String {
        self.count.to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

/// Flat field-name to value mapping posted to the relay.
pub type RelayPayload = BTreeMap<String, String>;

/// Result of one relay round trip, as seen by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

/// Side effects the UI should perform after `finish`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FinishEffects {
    pub show_modal: bool,
    pub notice: Option<&'static str>,
}

#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    values: BTreeMap<Field, String>,
    statuses: BTreeMap<Field, FieldStatus>,
    pub counter: CharCounter,
    pub phase: SubmitPhase,
}

impl ContactFormState {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn status(&self, field: Field) -> FieldStatus {
        self.statuses.get(&field).copied().unwrap_or_default()
    }

    /// Record a keystroke; revalidates only while the field is invalid.
    pub fn on_input(&mut self, field: Field, value: String) {
        if field == Field::Message {
            self.counter = CharCounter::for_message(&value);
        }
        self.values.insert(field, value);
        if self.status(field).is_invalid() {
            self.validate(field);
        }
    }

    /// Validate on blur unless the field is still empty.
    pub fn on_blur(&mut self, field: Field) {
        if !self.value(field).trim().is_empty() {
            self.validate(field);
        }
    }

    /// Validate one field and record its status.
    pub fn validate(&mut self, field: Field) -> bool {
        let status = match field.validate(self.value(field)) {
            Ok(()) => FieldStatus::Valid,
            Err(msg) => FieldStatus::Invalid(msg),
        };
        self.statuses.insert(field, status);
        status == FieldStatus::Valid
    }

    /// Validate every field; all statuses are updated even after a failure.
    pub fn validate_all(&mut self) -> bool {
        Field::ALL
            .into_iter()
            .fold(true, |ok, field| self.validate(field) && ok)
    }

    /// Payload of raw values keyed by control name.
    #[must_use]
    pub fn payload(&self) -> RelayPayload {
        Field::ALL
            .into_iter()
            .map(|field| (field.name().to_owned(), self.value(field).to_owned()))
            .collect()
    }

    /// Start a submission. `None` when invalid or already sending.
    pub fn begin_submit(&mut self) -> Option<RelayPayload> {
        if self.phase == SubmitPhase::Sending {
            return None;
        }
        if !self.validate_all() {
            return None;
        }
        self.phase = SubmitPhase::Sending;
        Some(self.payload())
    }

    /// Apply the relay outcome and return to idle.
    pub fn finish(&mut self, outcome: &SubmissionOutcome) -> FinishEffects {
        self.phase = SubmitPhase::Idle;
        match outcome {
            SubmissionOutcome::Success => {
                self.reset();
                FinishEffects { show_modal: true, notice: None }
            }
            SubmissionOutcome::Failure(_) => FinishEffects { show_modal: false, notice: Some(SUBMIT_FAILURE_NOTICE) },
        }
    }

    /// Clear values, validation markers, and the counter.
    pub fn reset(&mut self) {
        self.values.clear();
        self.statuses.clear();
        self.counter = CharCounter::default();
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }
}
