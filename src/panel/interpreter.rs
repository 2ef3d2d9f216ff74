//! # Response Interpreter
//!
//! Maps a finished request to the text shown to the user.
//!
//! | form     | status        | body         | shown                       |
//! |----------|---------------|--------------|-----------------------------|
//! | sign-in  | 200           | `id`         | the id, verbatim            |
//! | sign-in  | 200           | `msg_code`   | `msg_code{code}`            |
//! | sign-in  | 500           | `error_code` | `error_code{code}`          |
//! | sign-up  | 201           | `msg_code`   | `msg_code{code}`, clears    |
//! | sign-up  | 400, 422, 500 | `error_code` | `error_code{code}`          |
//! | any      | anything else |              | `unrecognized_response`     |

use crate::panel::models::{FormMode, StatusMessage};
use crate::panel::services::{
    RawResponse, RegistrationResponse, RequestError, SignInResponse, SignUpResponse,
};
use crate::panel::text_table::TextTable;

/// Message to show and whether the submitting form should be emptied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub message: StatusMessage,
    pub clear_fields: bool,
}

/// Footer text for the registration screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFeedback {
    pub text: String,
    pub clear_fields: bool,
}

/// Text for a request that never produced a response
pub fn request_error_text(error: &RequestError, texts: &TextTable) -> String {
    let key = match error {
        RequestError::NetworkUnavailable(_) => "network_unavailable",
        RequestError::Cancelled => "request_cancelled",
    };
    texts.get(key).to_string()
}

fn unrecognized_text(texts: &TextTable) -> String {
    texts.get("unrecognized_response").to_string()
}

/// Interpret a response to a sliding panel form submit
pub fn interpret(mode: FormMode, raw: &RawResponse, texts: &TextTable) -> Interpretation {
    let (text, clear_fields) = match mode {
        FormMode::SignIn => (sign_in_text(raw, texts), false),
        FormMode::SignUp => sign_up_text(raw, texts),
    };
    Interpretation {
        message: StatusMessage::new(text, mode),
        clear_fields,
    }
}

/// Interpret a reply that may have failed before a response arrived
pub fn interpret_reply(
    mode: FormMode,
    result: &Result<RawResponse, RequestError>,
    texts: &TextTable,
) -> Interpretation {
    match result {
        Ok(raw) => interpret(mode, raw, texts),
        Err(error) => {
            tracing::warn!("{:?} request failed: {}", mode, error);
            Interpretation {
                message: StatusMessage::new(request_error_text(error, texts), mode),
                clear_fields: false,
            }
        }
    }
}

fn sign_in_text(raw: &RawResponse, texts: &TextTable) -> String {
    match SignInResponse::decode(raw) {
        Ok(SignInResponse::Identified { id }) => {
            // Account identifiers are shown as-is until the API sends a msg_code here
            tracing::warn!("Sign-in answered with a raw account id; displaying it verbatim");
            id
        }
        Ok(SignInResponse::Message { msg_code }) => texts.code_text("msg_code", &msg_code),
        Ok(SignInResponse::Failed { error_code }) => texts.code_text("error_code", &error_code),
        Err(error) => {
            tracing::warn!("Sign-in response not understood: {}", error);
            unrecognized_text(texts)
        }
    }
}

fn sign_up_text(raw: &RawResponse, texts: &TextTable) -> (String, bool) {
    match SignUpResponse::decode(raw) {
        Ok(SignUpResponse::Created { msg_code }) => (texts.code_text("msg_code", &msg_code), true),
        Ok(SignUpResponse::Rejected { status, error_code }) => {
            tracing::debug!("Sign-up rejected with status {}", status);
            (texts.code_text("error_code", &error_code), false)
        }
        Err(error) => {
            tracing::warn!("Sign-up response not understood: {}", error);
            (unrecognized_text(texts), false)
        }
    }
}

/// Interpret a reply on the registration screen, which shows literal text
pub fn interpret_registration(
    result: &Result<RawResponse, RequestError>,
    texts: &TextTable,
) -> RegistrationFeedback {
    let raw = match result {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!("Registration request failed: {}", error);
            return RegistrationFeedback {
                text: request_error_text(error, texts),
                clear_fields: false,
            };
        }
    };

    match RegistrationResponse::decode(raw) {
        Ok(RegistrationResponse::Created { message }) => RegistrationFeedback {
            text: message,
            clear_fields: true,
        },
        Ok(RegistrationResponse::Rejected { error, .. }) => RegistrationFeedback {
            text: error,
            clear_fields: false,
        },
        Err(error) => {
            tracing::warn!("Registration response not understood: {}", error);
            RegistrationFeedback {
                text: unrecognized_text(texts),
                clear_fields: false,
            }
        }
    }
}
