//! Display-status derivation for generation requests.
//!
//! The backend reports lifecycle as a set of nullable timestamps. This module
//! collapses them into one displayable status and derives the progress bar
//! values. The client never enforces transitions; it renders what it is given.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::net::types::GenerationRequest;

/// Lifecycle bucket used for styling (`queued → started → completed | failed`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Queued,
    Started,
    Completed,
    Failed,
}

impl StatusKind {
    /// CSS class applied to the status element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Started => "started",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Whether the backend may still make progress on the request.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Queued | Self::Started)
    }
}

/// Status as shown in a request summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayStatus {
    pub kind: StatusKind,
    pub readable: &'static str,
    pub datetime: String,
}

/// Classify a request by its most significant timestamp.
///
/// Precedence: cancelled, failed, completed, started, then queued (keyed on
/// `created`).
#[must_use]
pub fn display_status(request: &GenerationRequest) -> DisplayStatus {
    let (kind, readable, at) = if let Some(at) = &request.cancelled {
        (StatusKind::Failed, "Cancelled", Some(at))
    } else if let Some(at) = &request.failed {
        (StatusKind::Failed, "Failed", Some(at))
    } else if let Some(at) = &request.completed {
        (StatusKind::Completed, "Completed", Some(at))
    } else if let Some(at) = &request.started {
        (StatusKind::Started, "Started", Some(at))
    } else {
        (StatusKind::Queued, "Queued", request.created.as_ref())
    };

    DisplayStatus { kind, readable, datetime: at.map(|raw| format_datetime(raw)).unwrap_or_default() }
}

/// Progress bar fill in percent.
///
/// Zero when the total is absent or zero; clamped to 100 when the backend
/// reports more completed steps than it announced.
#[must_use]
pub fn progress_percent(completed: Option<u32>, total: Option<u32>) -> f64 {
    match total {
        Some(total) if total > 0 => {
            let completed = f64::from(completed.unwrap_or(0));
            (100.0 * completed / f64::from(total)).min(100.0)
        }
        _ => 0.0,
    }
}

/// Step counter label; unknown and zero counts render as `?`.
#[must_use]
pub fn steps_label(count: Option<u32>) -> String {
    match count {
        Some(n) if n > 0 => n.to_string(),
        _ => "?".to_owned(),
    }
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Fractional seconds and zone suffixes are dropped. Strings that do not look
/// like a date-time are returned trimmed but otherwise unchanged.
#[must_use]
pub fn format_datetime(raw: &str) -> String {
    let raw = raw.trim();
    let Some((date, time)) = raw.split_once('T').or_else(|| raw.split_once(' ')) else {
        return raw.to_owned();
    };
    let end = time.find(['.', '+', '-', 'Z']).unwrap_or(time.len());
    format!("{date} {}", &time[..end])
}
