//! In-memory invoice rows for the list page.

use chrono::{Days, NaiveDate};
use contracts::domain::invoice::{InvoiceId, InvoiceSummary};
use contracts::shared::status::{DocumentStatus, ReminderLevel};

const CUSTOMERS: [&str; 6] = [
    "Bakker Solar BV",
    "Nordlicht Energie GmbH",
    "Costa Instalaciones SL",
    "Helios Dakwerken",
    "Verde Casa Srl",
    "Atelier Moreau",
];

const STATUSES: [DocumentStatus; 6] = [
    DocumentStatus::Draft,
    DocumentStatus::Sent,
    DocumentStatus::PartiallyPaid,
    DocumentStatus::Paid,
    DocumentStatus::Overdue,
    DocumentStatus::Cancelled,
];

pub fn sample_invoices(count: usize) -> Vec<InvoiceSummary> {
    let first_day = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or(NaiveDate::MIN);

    (0..count)
        .map(|i| {
            let status = STATUSES[(i * 7 + i / 3) % STATUSES.len()];
            let total_amount = 1_200 + (i as u64 * 7_919) % 48_000 * 25;
            let down_payment = match status {
                DocumentStatus::PartiallyPaid => Some(total_amount / 3),
                _ if i % 4 == 0 => Some(total_amount / 5),
                _ => None,
            };
            let reminder = match status {
                DocumentStatus::Overdue if i % 2 == 0 => ReminderLevel::Second,
                DocumentStatus::Overdue => ReminderLevel::First,
                _ => ReminderLevel::None,
            };

            InvoiceSummary {
                id: InvoiceId::new_v4(),
                number: format!("INV-{:04}", i + 1),
                customer: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
                issued_on: first_day
                    .checked_add_days(Days::new(i as u64 * 2))
                    .unwrap_or(first_day),
                total_amount,
                down_payment,
                status,
                reminder,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_invoices() {
        let rows = sample_invoices(40);
        assert_eq!(rows.len(), 40);
        assert_eq!(rows[0].number, "INV-0001");
        assert_eq!(rows[39].number, "INV-0040");
        assert!(rows.iter().all(|r| r.down_payment.unwrap_or(0) <= r.total_amount));
        assert!(rows
            .iter()
            .filter(|r| r.reminder != ReminderLevel::None)
            .all(|r| r.status == DocumentStatus::Overdue));
        assert!(STATUSES.iter().all(|s| rows.iter().any(|r| r.status == *s)));
    }
}
