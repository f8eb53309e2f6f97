use serde::{Deserialize, Serialize};

/// Visual variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Lifecycle status of an invoice or down-payment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Sent,
    PartiallyPaid,
    Paid,
    Overdue,
    Cancelled,
}

impl DocumentStatus {
    /// Parses the status code used by the API. Unknown codes fall back to `Draft`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "sent" => DocumentStatus::Sent,
            "partially_paid" => DocumentStatus::PartiallyPaid,
            "paid" => DocumentStatus::Paid,
            "overdue" => DocumentStatus::Overdue,
            "cancelled" | "canceled" => DocumentStatus::Cancelled,
            _ => DocumentStatus::Draft,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Sent => "Sent",
            DocumentStatus::PartiallyPaid => "Partially paid",
            DocumentStatus::Paid => "Paid",
            DocumentStatus::Overdue => "Overdue",
            DocumentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            DocumentStatus::Draft | DocumentStatus::Cancelled => BadgeVariant::Neutral,
            DocumentStatus::Sent => BadgeVariant::Primary,
            DocumentStatus::PartiallyPaid => BadgeVariant::Warning,
            DocumentStatus::Paid => BadgeVariant::Success,
            DocumentStatus::Overdue => BadgeVariant::Error,
        }
    }

    /// Whether a payment reminder can still be sent for this document.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            DocumentStatus::Sent | DocumentStatus::PartiallyPaid | DocumentStatus::Overdue
        )
    }
}

/// Escalation level of payment reminders sent for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderLevel {
    #[default]
    None,
    First,
    Second,
    Final,
}

impl ReminderLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderLevel::None => "No reminder",
            ReminderLevel::First => "1st reminder",
            ReminderLevel::Second => "2nd reminder",
            ReminderLevel::Final => "Final notice",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            ReminderLevel::None => BadgeVariant::Neutral,
            ReminderLevel::First => BadgeVariant::Primary,
            ReminderLevel::Second => BadgeVariant::Warning,
            ReminderLevel::Final => BadgeVariant::Error,
        }
    }

    /// Next escalation step; `Final` stays `Final`.
    pub fn escalate(&self) -> Self {
        match self {
            ReminderLevel::None => ReminderLevel::First,
            ReminderLevel::First => ReminderLevel::Second,
            ReminderLevel::Second | ReminderLevel::Final => ReminderLevel::Final,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_status_variants() {
        assert_eq!(DocumentStatus::Paid.badge_variant(), BadgeVariant::Success);
        assert_eq!(DocumentStatus::Overdue.badge_variant(), BadgeVariant::Error);
        assert_eq!(DocumentStatus::PartiallyPaid.badge_variant(), BadgeVariant::Warning);
        assert_eq!(DocumentStatus::Sent.badge_variant(), BadgeVariant::Primary);
        assert_eq!(DocumentStatus::Cancelled.badge_variant(), BadgeVariant::Neutral);
        assert_eq!(BadgeVariant::Error.css_class(), "badge--error");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(DocumentStatus::from_code("paid"), DocumentStatus::Paid);
        assert_eq!(DocumentStatus::from_code(" Overdue "), DocumentStatus::Overdue);
        assert_eq!(DocumentStatus::from_code("canceled"), DocumentStatus::Cancelled);
        assert_eq!(DocumentStatus::from_code("???"), DocumentStatus::Draft);
    }

    #[test]
    fn test_serde_codes_match_from_code() {
        let json = serde_json::to_string(&DocumentStatus::PartiallyPaid).unwrap();
        assert_eq!(json, "\"partially_paid\"");
        assert_eq!(DocumentStatus::from_code("partially_paid"), DocumentStatus::PartiallyPaid);
    }

    #[test]
    fn test_reminder_escalation() {
        assert_eq!(ReminderLevel::None.escalate(), ReminderLevel::First);
        assert_eq!(ReminderLevel::Second.escalate(), ReminderLevel::Final);
        assert_eq!(ReminderLevel::Final.escalate(), ReminderLevel::Final);
        assert_eq!(ReminderLevel::Final.badge_variant(), BadgeVariant::Error);
        assert!(DocumentStatus::Overdue.is_open());
        assert!(!DocumentStatus::Paid.is_open());
    }
}
