use crate::shared::status::{DocumentStatus, ReminderLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

/// Row of the invoice list. Amounts are whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: InvoiceId,
    pub number: String,
    pub customer: String,
    #[serde(rename = "issuedOn")]
    pub issued_on: NaiveDate,
    #[serde(rename = "totalAmount")]
    pub total_amount: u64,
    /// Advance payment already received, if one was agreed.
    #[serde(rename = "downPayment", default)]
    pub down_payment: Option<u64>,
    pub status: DocumentStatus,
    #[serde(default)]
    pub reminder: ReminderLevel,
}

impl InvoiceSummary {
    pub fn outstanding(&self) -> u64 {
        self.total_amount
            .saturating_sub(self.down_payment.unwrap_or(0))
    }

    /// Issue date as DD.MM.YYYY
    pub fn issued_on_display(&self) -> String {
        self.issued_on.format("%d.%m.%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(total: u64, down: Option<u64>) -> InvoiceSummary {
        InvoiceSummary {
            id: InvoiceId::new_v4(),
            number: "INV-0001".to_string(),
            customer: "Acme".to_string(),
            issued_on: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            total_amount: total,
            down_payment: down,
            status: DocumentStatus::Sent,
            reminder: ReminderLevel::None,
        }
    }

    #[test]
    fn test_outstanding() {
        assert_eq!(invoice(1000, None).outstanding(), 1000);
        assert_eq!(invoice(1000, Some(300)).outstanding(), 700);
        assert_eq!(invoice(1000, Some(5000)).outstanding(), 0);
    }

    #[test]
    fn test_issued_on_display() {
        assert_eq!(invoice(1, None).issued_on_display(), "05.03.2024");
    }

    #[test]
    fn test_deserialize_api_row() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "number": "INV-0042",
            "customer": "Solar GmbH",
            "issuedOn": "2024-11-02",
            "totalAmount": 1250000,
            "status": "partially_paid"
        }"#;
        let row: InvoiceSummary = serde_json::from_str(json).unwrap();
        assert_eq!(row.down_payment, None);
        assert_eq!(row.reminder, ReminderLevel::None);
        assert_eq!(row.status, DocumentStatus::PartiallyPaid);
    }
}
