// Contact form state - fields, validation, submission lifecycle
use serde::Serialize;

/// Body POSTed to the relay endpoint.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
    /// The request hit the client-side timeout.
    Timeout,
    /// Transport-level failure (DNS, refused connection, TLS).
    Network(String),
    /// The relay answered with a non-success HTTP status.
    BadStatus(u16),
    /// The relay answered 2xx but its `success` flag was false or missing.
    Declined,
}

impl SubmitError {
    pub fn describe(&self) -> String {
        match self {
            SubmitError::Timeout => "The request timed out. Please try again.".to_string(),
            SubmitError::Network(e) => format!("Could not reach the server: {e}"),
            SubmitError::BadStatus(code) => format!("The server answered with status {code}."),
            SubmitError::Declined => "The message was not accepted.".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(SubmitError),
}

pub struct ContactState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: SubmitStatus::Idle,
        }
    }

    /// Local validation before anything touches the network. Returns the
    /// payload to send, or a message to show the user.
    pub fn validate(&self) -> Result<ContactPayload, String> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() {
            return Err("Please enter your name.".to_string());
        }
        if !is_plausible_email(email) {
            return Err("Please enter a valid email address.".to_string());
        }
        if message.is_empty() {
            return Err("Please enter a message.".to_string());
        }
        Ok(ContactPayload {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Reset the fields after a successful send; keeps the status so the
    /// confirmation stays visible.
    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Loose shape check, not RFC validation: one `@` with a non-empty local
/// part and a dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    labels.clone().count() >= 2 && labels.all(|l| !l.is_empty())
}
