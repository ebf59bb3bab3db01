//! Two-submit request flow: the first submission validates and uploads
//! photos, the second hands the composed text to WhatsApp.
//!
//! [`transition`] holds every rule; the form component only performs the
//! [`Effect`] it returns and feeds results back in as events.

use crate::config;

pub const VALIDATION_MESSAGE: &str = "Please fill all required fields.";
pub const READY_MESSAGE: &str = "Ready to send!";
pub const HANDOFF_MESSAGE: &str = "Opening WhatsApp...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestFields {
    pub name: String,
    pub address: String,
    pub service: String,
    pub message: String,
}

/// Trimmed fields that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidRequest {
    pub name: String,
    pub address: String,
    pub service: String,
    pub message: String,
}

impl RequestFields {
    /// Name, service and message are required, address is optional.
    pub fn validate(&self) -> Option<ValidRequest> {
        let name = self.name.trim();
        let service = self.service.trim();
        let message = self.message.trim();
        if name.is_empty() || service.is_empty() || message.is_empty() {
            return None;
        }
        Some(ValidRequest {
            name: name.to_string(),
            address: self.address.trim().to_string(),
            service: service.to_string(),
            message: message.to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    AwaitingUpload,
    Uploading,
    ReadyToSend { message: String },
}

impl Step {
    pub fn action_label(&self) -> &'static str {
        match self {
            Step::AwaitingUpload => "Submit Request",
            Step::Uploading => "Uploading...",
            Step::ReadyToSend { .. } => "Send via WhatsApp",
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Step::Uploading)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submit(RequestFields),
    UploadFinished { request: ValidRequest, image_urls: Vec<String> },
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    ShowValidation,
    /// Upload the attached photos, then send back `UploadFinished`
    Upload(ValidRequest),
    /// Open the link in a new tab and close the form shortly after
    Handoff { link: String },
    ShowReady,
}

pub fn transition(step: Step, event: FormEvent) -> (Step, Effect) {
    match (step, event) {
        (_, FormEvent::Reset) => (Step::AwaitingUpload, Effect::None),

        (Step::AwaitingUpload, FormEvent::Submit(fields)) => match fields.validate() {
            Some(request) => (Step::Uploading, Effect::Upload(request)),
            None => (Step::AwaitingUpload, Effect::ShowValidation),
        },
        (Step::Uploading, FormEvent::Submit(_)) => (Step::Uploading, Effect::None),
        (Step::ReadyToSend { message }, FormEvent::Submit(_)) => (
            Step::AwaitingUpload,
            Effect::Handoff { link: whatsapp_link(config::WHATSAPP_NUMBER, &message) },
        ),

        (Step::Uploading, FormEvent::UploadFinished { request, image_urls }) => (
            Step::ReadyToSend { message: compose_message(&request, &image_urls) },
            Effect::ShowReady,
        ),
        // Stale completion after a reset
        (step, FormEvent::UploadFinished { .. }) => (step, Effect::None),
    }
}

pub fn compose_message(request: &ValidRequest, image_urls: &[String]) -> String {
    let mut text = format!(
        "New Service Request\nName: {}\nAddress: {}\nService: {}\nDescription: {}",
        request.name, request.address, request.service, request.message
    );
    if !image_urls.is_empty() {
        text.push_str("\n\nImages:\n");
        text.push_str(&image_urls.join("\n"));
    }
    text
}

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Keeps at most the first `MAX_UPLOAD_FILES` entries.
pub fn cap_files<T>(mut files: Vec<T>) -> Vec<T> {
    files.truncate(config::MAX_UPLOAD_FILES);
    files
}
