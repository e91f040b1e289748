use serde::{Deserialize, Serialize};

/// Contact form submission as posted by the site's form.
///
/// Absent fields deserialize as empty strings and are then reported as required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub captcha: String,
    /// Hidden field; humans leave it empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
}

impl ContactReceipt {
    pub(crate) fn sent() -> Self {
        Self {
            success: true,
            message: "Message sent successfully!".to_string(),
        }
    }
}
