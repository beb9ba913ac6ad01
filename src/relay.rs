use crate::config::Config;
use crate::errors::AppError;
use crate::export::{validate_recipient, REPORT_FILENAME};
use crate::models::SendResponse;
use axum::http::StatusCode;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{error, info};

const SUBJECT: &str = "Checklist history | Caring for a loved one";

const EMAIL_HTML: &str = r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <div style="background: linear-gradient(135deg, #0EA5E9 0%, #0284C7 100%); padding: 30px; text-align: center; border-radius: 8px 8px 0 0;">
    <h1 style="color: white; margin: 0;">Checklist history</h1>
    <p style="color: white; margin: 10px 0 0 0;">Notes for relatives of a patient with hypothyroidism</p>
  </div>
  <div style="padding: 30px; background-color: #f9fafb; border-radius: 0 0 8px 8px;">
    <p style="color: #374151; font-size: 16px; line-height: 1.6;">Hello!</p>
    <p style="color: #374151; font-size: 16px; line-height: 1.6;">
      Attached is a PDF with the daily checklist history and tips for supporting someone with hypothyroidism.
    </p>
    <div style="background-color: #D3E4FD; padding: 20px; border-radius: 8px; margin: 20px 0;">
      <p style="color: #0EA5E9; font-weight: bold; margin: 0 0 10px 0;">Important to remember</p>
      <p style="color: #374151; margin: 0; font-size: 14px;">
        Your support is half of the treatment's success. Patients whose families take part in treatment recover faster and follow their doctor's advice more closely.
      </p>
    </div>
    <p style="color: #6b7280; font-size: 14px; margin-top: 30px;">Best wishes,<br>The caregiver support team</p>
  </div>
</div>"#;

/// Forwards a report to the mail provider as an attachment.
#[derive(Debug, Clone)]
pub struct MailRelay {
    http: Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
}

impl MailRelay {
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.mail_timeout)
            .build()
            .map_err(AppError::internal)?;
        Ok(Self {
            http,
            api_url: config.resend_api_url.clone(),
            api_key: config.resend_api_key.clone(),
            from: config.mail_from.clone(),
        })
    }

    pub async fn send(&self, email: &str, pdf_base64: &str) -> Result<SendResponse, AppError> {
        let email = validate_recipient(email)?;
        if pdf_base64.is_empty() {
            return Err(AppError::bad_request("no PDF attached"));
        }
        let Some(api_key) = self.api_key.as_deref() else {
            error!("mail relay called without RESEND_API_KEY");
            return Err(AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "mail API key is not configured",
            ));
        };

        let payload = json!({
            "from": self.from,
            "to": [email],
            "subject": SUBJECT,
            "html": EMAIL_HTML,
            "attachments": [{ "filename": REPORT_FILENAME, "content": pdf_base64 }],
        });

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                error!("mail provider unreachable: {err}");
                AppError::new(StatusCode::BAD_GATEWAY, "mail provider unreachable")
            })?;

        let status = response.status();
        if status.is_success() {
            info!("report mailed to {email}");
            return Ok(SendResponse {
                success: true,
                message: format!("Email sent to {email}"),
            });
        }

        let details = response.json::<Value>().await.unwrap_or(Value::Null);
        error!("mail provider answered {status}");
        Err(AppError::new(status, "failed to send email").with_details(details))
    }
}
