use serde::{Deserialize, Serialize};

/// Request body for POST /emails.
#[derive(Debug, Serialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Successful response: the id of the accepted email.
#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub id: String,
}

/// Error payload returned by Resend on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ResendErrorResponse {
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
    pub name: Option<String>,
    pub message: Option<String>,
}
