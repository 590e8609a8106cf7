// Minimal client for the Resend transactional email API.
// https://resend.com/docs/api-reference/emails/send-email

pub mod models;
use reqwest::{header, Client};

use crate::models::{ResendErrorResponse, SendEmailRequest, SendEmailResponse};

#[derive(Debug, Clone)]
pub struct ResendOptions {
    pub api_key: String,
    pub from_address: String,
}

#[derive(Debug, Clone)]
pub struct ResendService {
    options: ResendOptions,
}

impl ResendService {
    pub fn new(options: ResendOptions) -> Self {
        Self { options }
    }

    pub async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        html: &str,
    ) -> Result<SendEmailResponse, &'static str> {
        let url = "https://api.resend.com/emails";

        let body = SendEmailRequest {
            from: self.options.from_address.clone(),
            to: vec![recipient.to_string()],
            subject: subject.to_string(),
            html: html.to_string(),
        };

        let client = Client::new();
        let res = client
            .post(url)
            .bearer_auth(&self.options.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await;

        match res {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    // Log the error response from Resend
                    let error_body = response.text().await.unwrap_or_default();
                    let message = serde_json::from_str::<ResendErrorResponse>(&error_body)
                        .ok()
                        .and_then(|e| e.message)
                        .unwrap_or(error_body);
                    eprintln!("Resend error ({}): {}", status, message);
                    return Err("Resend returned an error");
                }

                let result = response.json::<SendEmailResponse>().await;
                match result {
                    Ok(data) => Ok(data),
                    Err(e) => {
                        eprintln!("Failed to parse Resend response: {}", e);
                        Err("Error parsing send response")
                    }
                }
            }
            Err(e) => {
                eprintln!("Request to Resend failed: {}", e);
                Err("Error sending email")
            }
        }
    }
}
