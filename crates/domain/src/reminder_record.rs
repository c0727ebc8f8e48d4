use crate::shared::entity::{Entity, ID};
use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::str::FromStr;
use thiserror::Error;

/// A `ReminderRecord` tracks a product or license purchase deadline for a
/// partner. A daily job notifies `recipient_email` and creates a follow up
/// task for the responsible `User` when the deadline is `reminder_lead`
/// days away.
#[derive(Debug, Clone)]
pub struct ReminderRecord {
    pub id: ID,
    /// Identifier of the partner/customer this reminder belongs to.
    /// (`partner_number`, `product_name`) is unique across all records.
    pub partner_number: String,
    pub product_name: String,
    pub quantity: f64,
    pub price: Decimal,
    /// ISO 4217 code, e.g. "USD"
    pub currency: String,
    pub purchase_deadline: Option<NaiveDate>,
    /// Where the deadline reminder mail goes
    pub recipient_email: String,
    pub reminder_lead: ReminderLead,
    /// The responsible `User`, who gets the follow up task
    pub user_id: ID,
    pub state: RecordState,
}

impl ReminderRecord {
    pub fn new(
        partner_number: String,
        product_name: String,
        price: Decimal,
        purchase_deadline: NaiveDate,
        user_id: &ID,
    ) -> Self {
        Self {
            id: Default::default(),
            partner_number,
            product_name,
            quantity: 1.0,
            price,
            currency: String::new(),
            purchase_deadline: Some(purchase_deadline),
            recipient_email: String::new(),
            reminder_lead: Default::default(),
            user_id: user_id.clone(),
            state: Default::default(),
        }
    }

    /// Human readable label, shown instead of the raw record id
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.product_name, self.partner_number)
    }

    /// Whole days from `today` until the purchase deadline, negative once
    /// the deadline has passed and 0 when no deadline is set.
    pub fn days_to_deadline(&self, today: NaiveDate) -> i64 {
        match self.purchase_deadline {
            Some(deadline) => (deadline - today).num_days(),
            None => 0,
        }
    }

    pub fn total_value(&self) -> Decimal {
        Decimal::from_f64(self.quantity).unwrap_or_default() * self.price
    }

    /// Kanban color coding. First match wins:
    /// 1 (red) cancelled or past deadline, 2 (orange) deadline within 7
    /// days, 7 (green) confirmed, 9 (blue) draft, 0 otherwise.
    pub fn color(&self, today: NaiveDate) -> i32 {
        if self.state == RecordState::Cancelled {
            1
        } else if matches!(self.purchase_deadline, Some(deadline) if deadline < today) {
            1
        } else if matches!(self.purchase_deadline, Some(deadline) if (deadline - today).num_days() <= 7)
        {
            2
        } else if self.state == RecordState::Confirmed {
            7
        } else if self.state == RecordState::Draft {
            9
        } else {
            0
        }
    }

    /// The single day on which this record's reminder fires
    pub fn target_reminder_date(&self) -> Option<NaiveDate> {
        self.purchase_deadline
            .map(|deadline| deadline - Duration::days(self.reminder_lead.days()))
    }

    pub fn confirm(&mut self) {
        self.state = RecordState::Confirmed;
    }

    /// Cancellation is irreversible: a cancelled record can never go back
    /// to draft.
    pub fn reset_to_draft(&mut self) -> Result<(), StateTransitionError> {
        if self.state == RecordState::Cancelled {
            return Err(StateTransitionError::CancelledIsTerminal);
        }
        self.state = RecordState::Draft;
        Ok(())
    }
}

impl Entity for ReminderRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum StateTransitionError {
    #[error("Cannot reset a cancelled reminder to Draft. Please create a new record instead.")]
    CancelledIsTerminal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordState {
    Draft,
    Confirmed,
    Cancelled,
}

impl Default for RecordState {
    fn default() -> Self {
        Self::Draft
    }
}

impl RecordState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Error, Debug)]
pub enum InvalidRecordStateError {
    #[error("Invalid record state: {0}")]
    Unknown(String),
}

impl FromStr for RecordState {
    type Err = InvalidRecordStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(InvalidRecordStateError::Unknown(s.to_string())),
        }
    }
}

/// How many days before the purchase deadline the reminder fires. Only
/// these lead times are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum ReminderLead {
    Days7,
    Days15,
    Days30,
    Days60,
    Days90,
}

impl Default for ReminderLead {
    fn default() -> Self {
        Self::Days30
    }
}

impl ReminderLead {
    pub fn days(&self) -> i64 {
        match self {
            Self::Days7 => 7,
            Self::Days15 => 15,
            Self::Days30 => 30,
            Self::Days60 => 60,
            Self::Days90 => 90,
        }
    }
}

impl From<ReminderLead> for i64 {
    fn from(lead: ReminderLead) -> Self {
        lead.days()
    }
}

#[derive(Error, Debug)]
pub enum InvalidReminderLeadError {
    #[error("Invalid reminder lead: {0} days. Allowed values are 7, 15, 30, 60 and 90.")]
    Unsupported(i64),
}

impl TryFrom<i64> for ReminderLead {
    type Error = InvalidReminderLeadError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(Self::Days7),
            15 => Ok(Self::Days15),
            30 => Ok(Self::Days30),
            60 => Ok(Self::Days60),
            90 => Ok(Self::Days90),
            _ => Err(InvalidReminderLeadError::Unsupported(days)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record_with_deadline(deadline: NaiveDate) -> ReminderRecord {
        ReminderRecord::new(
            "P-1001".into(),
            "Antivirus License".into(),
            Decimal::new(4999, 2),
            deadline,
            &Default::default(),
        )
    }

    #[test]
    fn display_name_combines_product_and_partner() {
        let record = record_with_deadline(ymd(2025, 6, 1));
        assert_eq!(record.display_name(), "Antivirus License (P-1001)");
    }

    #[test]
    fn total_value_is_quantity_times_price() {
        let mut record = record_with_deadline(ymd(2025, 6, 1));
        assert_eq!(record.total_value(), Decimal::new(4999, 2));

        record.quantity = 3.0;
        assert_eq!(record.total_value(), Decimal::new(14997, 2));

        record.price = Decimal::new(1050, 2);
        assert_eq!(record.total_value(), Decimal::new(3150, 2));
    }

    #[test]
    fn days_to_deadline_counts_whole_days() {
        let today = ymd(2025, 1, 10);
        let mut record = record_with_deadline(ymd(2025, 1, 30));
        assert_eq!(record.days_to_deadline(today), 20);

        record.purchase_deadline = Some(ymd(2025, 1, 8));
        assert_eq!(record.days_to_deadline(today), -2);

        record.purchase_deadline = None;
        assert_eq!(record.days_to_deadline(today), 0);
    }

    #[test]
    fn color_cancelled_dominates_future_deadline() {
        let today = ymd(2025, 1, 1);
        let mut record = record_with_deadline(ymd(2025, 3, 1));
        record.state = RecordState::Cancelled;
        assert_eq!(record.color(today), 1);
    }

    #[test]
    fn color_past_deadline_is_red() {
        let today = ymd(2025, 1, 10);
        let mut record = record_with_deadline(ymd(2025, 1, 9));
        record.confirm();
        assert_eq!(record.color(today), 1);
    }

    #[test]
    fn color_deadline_within_a_week_is_orange() {
        let today = ymd(2025, 1, 10);
        let record = record_with_deadline(ymd(2025, 1, 17));
        assert_eq!(record.color(today), 2);
    }

    #[test]
    fn color_confirmed_and_on_track_is_green() {
        let today = ymd(2025, 1, 10);
        let mut record = record_with_deadline(ymd(2025, 3, 1));
        record.confirm();
        assert_eq!(record.color(today), 7);
    }

    #[test]
    fn color_draft_is_blue() {
        let today = ymd(2025, 1, 10);
        let record = record_with_deadline(ymd(2025, 3, 1));
        assert_eq!(record.color(today), 9);
    }

    #[test]
    fn color_missing_deadline_falls_back_to_state() {
        let today = ymd(2025, 1, 10);
        let mut record = record_with_deadline(ymd(2025, 3, 1));
        record.purchase_deadline = None;
        assert_eq!(record.color(today), 9);
        record.confirm();
        assert_eq!(record.color(today), 7);
    }

    #[test]
    fn confirm_is_allowed_from_any_state() {
        let mut record = record_with_deadline(ymd(2025, 6, 1));
        record.confirm();
        assert_eq!(record.state, RecordState::Confirmed);

        record.state = RecordState::Cancelled;
        record.confirm();
        assert_eq!(record.state, RecordState::Confirmed);
    }

    #[test]
    fn reset_to_draft_rejects_cancelled_records() {
        let mut record = record_with_deadline(ymd(2025, 6, 1));
        record.state = RecordState::Cancelled;

        let res = record.reset_to_draft();
        assert_eq!(res, Err(StateTransitionError::CancelledIsTerminal));
        assert_eq!(record.state, RecordState::Cancelled);
    }

    #[test]
    fn reset_to_draft_reopens_confirmed_records() {
        let mut record = record_with_deadline(ymd(2025, 6, 1));
        record.confirm();
        assert!(record.reset_to_draft().is_ok());
        assert_eq!(record.state, RecordState::Draft);
    }

    #[test]
    fn target_reminder_date_subtracts_the_lead() {
        let mut record = record_with_deadline(ymd(2025, 3, 31));
        assert_eq!(record.target_reminder_date(), Some(ymd(2025, 3, 1)));

        record.reminder_lead = ReminderLead::Days7;
        assert_eq!(record.target_reminder_date(), Some(ymd(2025, 3, 24)));

        record.purchase_deadline = None;
        assert_eq!(record.target_reminder_date(), None);
    }

    #[test]
    fn reminder_lead_only_accepts_the_supported_values() {
        for days in [7, 15, 30, 60, 90].iter() {
            let lead = ReminderLead::try_from(*days).unwrap();
            assert_eq!(lead.days(), *days);
        }
        assert!(ReminderLead::try_from(14).is_err());
        assert!(ReminderLead::try_from(0).is_err());
    }
}
