//! Core record domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

use crate::Error;

/// Identifier assigned to a record by the [RecordStore](crate::record::RecordStore).
pub type RecordId = i64;

/// A validated, non-empty concept label, e.g. "Compra de supermercado".
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConceptName(String);

impl ConceptName {
    /// Create a concept name from `name` with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyConceptName] if `name` is empty or only
    /// whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyConceptName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create a concept name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl AsRef<str> for ConceptName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ConceptName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConceptName::new(s)
    }
}

impl TryFrom<String> for ConceptName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ConceptName::new(&value)
    }
}

impl From<ConceptName> for String {
    fn from(value: ConceptName) -> Self {
        value.0
    }
}

impl Display for ConceptName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a record was paid for or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid or received in cash.
    #[serde(alias = "Efectivo")]
    Cash,
    /// Paid or received by card, transfer or any other non-cash means.
    #[serde(alias = "No efectivo")]
    NonCash,
}

/// Whether money left or entered the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    /// Money spent.
    #[serde(alias = "Pago")]
    Payment,
    /// Money earned.
    #[serde(alias = "Ingreso")]
    Income,
}

/// How often a record is expected to occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Day to day spending or earning with no fixed schedule.
    #[serde(alias = "Orgánico")]
    Organic,
    /// Recurs every month, e.g. rent.
    #[serde(alias = "Mensual")]
    Monthly,
    /// A one-off.
    #[serde(alias = "Excepcional")]
    Exceptional,
}

impl PaymentMethod {
    /// All payment methods in display order.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::NonCash];

    /// The value used for this variant in forms and CSV files.
    pub fn form_value(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::NonCash => "non_cash",
        }
    }

    /// The human readable label.
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::NonCash => "Non-cash",
        }
    }
}

impl RecordType {
    /// All record types in display order.
    pub const ALL: [RecordType; 2] = [RecordType::Payment, RecordType::Income];

    /// The value used for this variant in forms and CSV files.
    pub fn form_value(self) -> &'static str {
        match self {
            RecordType::Payment => "payment",
            RecordType::Income => "income",
        }
    }

    /// The human readable label.
    pub fn label(self) -> &'static str {
        match self {
            RecordType::Payment => "Payment",
            RecordType::Income => "Income",
        }
    }
}

impl Period {
    /// All periods in display order.
    pub const ALL: [Period; 3] = [Period::Organic, Period::Monthly, Period::Exceptional];

    /// The value used for this variant in forms and CSV files.
    pub fn form_value(self) -> &'static str {
        match self {
            Period::Organic => "organic",
            Period::Monthly => "monthly",
            Period::Exceptional => "exceptional",
        }
    }

    /// The human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Period::Organic => "Organic",
            Period::Monthly => "Monthly",
            Period::Exceptional => "Exceptional",
        }
    }
}

/// One financial transaction, e.g. a supermarket purchase or a freelance payment.
///
/// Records are only created by the [RecordStore](crate::record::RecordStore), which assigns
/// the ID. To describe a new record use [RecordDraft].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The ID assigned by the store.
    pub id: RecordId,
    /// When the transaction happened.
    pub date: Date,
    /// What the transaction was for.
    pub concept: ConceptName,
    /// The amount of money that changed hands.
    pub amount: f64,
    /// Cash or non-cash.
    pub method: PaymentMethod,
    /// Payment or income.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// How often the transaction recurs.
    pub period: Period,
}

impl Record {
    /// The day of the week of [Record::date].
    ///
    /// The weekday is always derived from the date and is never stored.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub(crate) fn from_draft(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            date: draft.date,
            concept: draft.concept,
            amount: draft.amount,
            method: draft.method,
            record_type: draft.record_type,
            period: draft.period,
        }
    }
}

/// Every field of a [Record] except its ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RecordDraft {
    pub date: Date,
    pub concept: ConceptName,
    pub amount: f64,
    pub method: PaymentMethod,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub period: Period,
}

impl RecordDraft {
    /// Start a draft with the remaining fields set to cash, payment and organic.
    pub fn build(date: Date, concept: ConceptName, amount: f64) -> Self {
        Self {
            date,
            concept,
            amount,
            method: PaymentMethod::Cash,
            record_type: RecordType::Payment,
            period: Period::Organic,
        }
    }

    /// Set the payment method.
    pub fn method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the record type.
    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    /// Set the period.
    pub fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }
}

impl From<Record> for RecordDraft {
    fn from(record: Record) -> Self {
        Self {
            date: record.date,
            concept: record.concept,
            amount: record.amount,
            method: record.method,
            record_type: record.record_type,
            period: record.period,
        }
    }
}
