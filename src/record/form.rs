//! The record form shared by the create and edit pages.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error, endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
    record::{ConceptName, PaymentMethod, Period, RecordDraft, RecordType},
};

/// The ID of the element that wraps the concept select, swapped when a concept is added.
pub const CONCEPT_FIELD_ID: &str = "concept-field";

/// Form data for creating and editing records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordFormData {
    pub date: Date,
    pub concept: String,
    /// The amount as typed. It is parsed by [RecordFormData::into_draft] so a blank or
    /// malformed amount is reported in the form instead of rejected by the extractor.
    pub amount: String,
    pub method: PaymentMethod,
    pub type_: RecordType,
    pub period: Period,
}

impl RecordFormData {
    /// Check the required fields and build a [RecordDraft].
    ///
    /// # Errors
    ///
    /// Returns an [Error::EmptyConceptName] if no concept was chosen, an
    /// [Error::EmptyAmount] if the amount is blank, or an [Error::InvalidAmount] if the
    /// amount is not a finite number.
    pub fn into_draft(self) -> Result<RecordDraft, Error> {
        let concept = ConceptName::new(&self.concept)?;
        let amount = parse_amount(&self.amount)?;

        Ok(RecordDraft::build(self.date, concept, amount)
            .method(self.method)
            .record_type(self.type_)
            .period(self.period))
    }
}

/// Parse a form amount such as "12.30" or " -5 ".
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::EmptyAmount);
    }

    match text.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

/// The values a record form starts with.
pub struct RecordFormDefaults<'a> {
    pub date: Date,
    pub concept: Option<&'a str>,
    pub amount: Option<f64>,
    pub method: PaymentMethod,
    pub record_type: RecordType,
    pub period: Period,
}

impl<'a> RecordFormDefaults<'a> {
    /// Defaults for a brand new record on `date`.
    pub fn new_record(date: Date) -> Self {
        Self {
            date,
            concept: None,
            amount: None,
            method: PaymentMethod::Cash,
            record_type: RecordType::Payment,
            period: Period::Organic,
        }
    }

    /// Defaults taken from an existing record.
    pub fn from_draft(draft: &'a RecordDraft) -> Self {
        Self {
            date: draft.date,
            concept: Some(draft.concept.as_ref()),
            amount: Some(draft.amount),
            method: draft.method,
            record_type: draft.record_type,
            period: draft.period,
        }
    }
}

pub fn record_form_fields(defaults: &RecordFormDefaults<'_>, concepts: &[String]) -> Markup {
    let amount_str = defaults.amount.map(|amount| format!("{amount:.2}"));

    html! {
        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        (concept_field(concepts, defaults.concept, None))

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            div class="input-wrapper w-full"
            {
                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    required
                    value=[amount_str.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }
        }

        (radio_group(
            "Method",
            "method",
            PaymentMethod::ALL
                .iter()
                .map(|method| (method.form_value(), method.label(), *method == defaults.method)),
        ))

        (radio_group(
            "Type",
            "type_",
            RecordType::ALL.iter().map(|record_type| {
                (
                    record_type.form_value(),
                    record_type.label(),
                    *record_type == defaults.record_type,
                )
            }),
        ))

        (radio_group(
            "Period",
            "period",
            Period::ALL
                .iter()
                .map(|period| (period.form_value(), period.label(), *period == defaults.period)),
        ))
    }
}

/// The concept select plus the inline input for registering a new concept.
///
/// The whole field is replaced by the response of the concept endpoint, so it must stay
/// wrapped in the element with the ID [CONCEPT_FIELD_ID].
pub fn concept_field(
    concepts: &[String],
    selected: Option<&str>,
    error_message: Option<&str>,
) -> Markup {
    html! {
        div id=(CONCEPT_FIELD_ID)
        {
            label
                for="concept"
                class=(FORM_LABEL_STYLE)
            {
                "Concept"
            }

            select
                name="concept"
                id="concept"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Select a concept" }

                @for concept in concepts {
                    @if Some(concept.as_str()) == selected {
                        option value=(concept) selected { (concept) }
                    } @else {
                        option value=(concept) { (concept) }
                    }
                }
            }

            div class="flex gap-2 mt-2"
            {
                input
                    name="new_concept"
                    id="new_concept"
                    type="text"
                    placeholder="New concept"
                    class=(FORM_TEXT_INPUT_STYLE);

                button
                    type="button"
                    hx-post=(endpoints::CONCEPTS_API)
                    hx-include="#new_concept"
                    hx-target={ "#" (CONCEPT_FIELD_ID) }
                    hx-swap="outerHTML"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Add Concept"
                }
            }

            @if let Some(error_message) = error_message {
                p class="text-red-600 dark:text-red-400" { (error_message) }
            }
        }
    }
}

fn radio_group<'a>(
    legend: &str,
    name: &str,
    options: impl Iterator<Item = (&'a str, &'a str, bool)>,
) -> Markup {
    html! {
        fieldset class="space-y-2"
        {
            legend class=(FORM_LABEL_STYLE) { (legend) }

            div class=(FORM_RADIO_GROUP_STYLE)
            {
                @for (value, label, checked) in options {
                    @let id = format!("{name}-{value}");

                    div class="flex items-center gap-3"
                    {
                        input
                            name=(name)
                            id=(id)
                            type="radio"
                            value=(value)
                            checked[checked]
                            required
                            class=(FORM_RADIO_INPUT_STYLE);

                        label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (label) }
                    }
                }
            }
        }
    }
}
