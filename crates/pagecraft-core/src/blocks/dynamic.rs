//! Payloads for blocks backed by dynamic data or time.

use serde::{Deserialize, Serialize};

/// Animated integer counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterData {
    /// Final value the animation reaches.
    pub target: u64,
    pub prefix: String,
    pub suffix: String,
    pub label: String,
    /// Animation duration in milliseconds.
    pub duration_ms: u32,
}

impl Default for CounterData {
    fn default() -> Self {
        Self {
            target: 100,
            prefix: String::new(),
            suffix: String::new(),
            label: String::new(),
            duration_ms: 2000,
        }
    }
}

/// What happens when a countdown reaches zero. Applied exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ExpiryPolicy {
    /// Replace the countdown with a message.
    #[default]
    Message,
    /// Remove the countdown from the page.
    Hide,
    /// Navigate to another URL.
    Redirect,
}

/// Ticking countdown to a target moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountdownData {
    /// Target moment as milliseconds since the Unix epoch.
    pub target_epoch_ms: i64,
    pub policy: ExpiryPolicy,
    /// Message shown under the `message` policy.
    pub expired_message: String,
    /// URL navigated to under the `redirect` policy.
    pub redirect_url: String,
    pub show_labels: bool,
}

impl Default for CountdownData {
    fn default() -> Self {
        Self {
            target_epoch_ms: 0,
            policy: ExpiryPolicy::Message,
            expired_message: "This offer has ended.".to_string(),
            redirect_url: String::new(),
            show_labels: true,
        }
    }
}

/// Contact form definition. Submission is an external collaborator's
/// concern; the block only declares the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormData {
    pub heading: String,
    pub show_phone_field: bool,
    pub show_subject_field: bool,
    pub submit_label: String,
}

impl Default for ContactFormData {
    fn default() -> Self {
        Self {
            heading: String::new(),
            show_phone_field: false,
            show_subject_field: true,
            submit_label: "Send".to_string(),
        }
    }
}

/// Company details block. The values come from the externally supplied
/// settings record, fetched once on mount; the payload only selects which
/// rows to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyInfoData {
    pub show_address: bool,
    pub show_phone: bool,
    pub show_email: bool,
    pub show_hours: bool,
}

impl Default for CompanyInfoData {
    fn default() -> Self {
        Self {
            show_address: true,
            show_phone: true,
            show_email: true,
            show_hours: false,
        }
    }
}

/// Embedded map centered on an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoogleMapData {
    pub address: String,
    pub zoom: u8,
    pub height_px: u32,
}

impl Default for GoogleMapData {
    fn default() -> Self {
        Self {
            address: String::new(),
            zoom: 14,
            height_px: 400,
        }
    }
}
