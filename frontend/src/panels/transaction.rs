use std::fmt::Display;

use chrono::TimeZone;

use crate::api::ApiCall;
use crate::dates;
use crate::models::{Transaction, TransactionPayload, TransactionType};

use super::{format_money, parse_amount, parse_id, FormMode, SelectOption};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionField {
    Amount,
    Kind,
    Date,
    Category,
    Description,
}

/// Raw input values, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionForm {
    pub mode: FormMode,
    pub amount: String,
    pub kind: TransactionType,
    /// `datetime-local` value in the browser's zone.
    pub date: String,
    /// Selected category id, empty for the placeholder option.
    pub category_id: String,
    pub description: String,
}

impl TransactionForm {
    pub fn new(date: String) -> Self {
        Self {
            date,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub kind: String,
    pub amount: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionPanelView {
    pub rows: Vec<TransactionRow>,
    pub amount: String,
    pub kind: TransactionType,
    pub date: String,
    pub category_id: String,
    pub description: String,
    pub kind_options: Vec<SelectOption>,
    pub category_options: Vec<SelectOption>,
    pub submit_label: String,
    pub show_cancel: bool,
    pub error: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionPanel {
    pub items: Vec<Transaction>,
    pub form: TransactionForm,
    pub error: String,
}

impl TransactionPanel {
    pub fn new(date: String) -> Self {
        Self {
            form: TransactionForm::new(date),
            ..Default::default()
        }
    }

    pub fn set_field(&mut self, field: TransactionField, value: String) {
        let form = &mut self.form;
        match field {
            TransactionField::Amount => form.amount = value,
            TransactionField::Kind => {
                if let Ok(kind) = value.parse() {
                    form.kind = kind;
                }
            }
            TransactionField::Date => form.date = value,
            TransactionField::Category => form.category_id = value,
            TransactionField::Description => form.description = value,
        }
    }

    pub fn begin_edit<Tz>(&mut self, id: i64, tz: &Tz) -> bool
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(tx) = self.items.iter().find(|tx| tx.id == id) else {
            return false;
        };
        self.form = TransactionForm {
            mode: FormMode::Update(tx.id),
            amount: tx.amount.to_string(),
            kind: tx.kind,
            date: dates::timestamp_to_local_input(&tx.date, tz),
            category_id: tx.category_id.to_string(),
            description: tx.description.clone().unwrap_or_default(),
        };
        true
    }

    pub fn reset_form(&mut self, date: String) {
        self.form = TransactionForm::new(date);
        self.error.clear();
    }

    /// Builds the create or update call. The only local check is that the
    /// date input holds a real wall-clock time in `tz`.
    pub fn submit_call<Tz: TimeZone>(&self, tz: &Tz) -> Result<ApiCall, String> {
        let form = &self.form;
        let date = dates::local_input_to_iso(&form.date, tz)
            .ok_or_else(|| "Please enter a valid date.".to_string())?;
        let description = form.description.trim();

        let body = TransactionPayload {
            amount: parse_amount(&form.amount),
            kind: form.kind,
            date,
            category_id: parse_id(&form.category_id),
            description: (!description.is_empty()).then(|| description.to_string()),
        };

        Ok(match form.mode {
            FormMode::Create => ApiCall::CreateTransaction(body),
            FormMode::Update(id) => ApiCall::UpdateTransaction(id, body),
        })
    }

    pub fn rows<Tz>(&self, tz: &Tz) -> Vec<TransactionRow>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.items
            .iter()
            .map(|tx| TransactionRow {
                id: tx.id,
                date: dates::display_datetime(&tx.date, tz),
                category: tx.category.name.clone(),
                kind: tx.kind.to_string(),
                amount: format_money(tx.amount),
                description: tx.description.clone().unwrap_or_default(),
            })
            .collect()
    }

    pub fn view<Tz>(&self, category_options: Vec<SelectOption>, tz: &Tz) -> TransactionPanelView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let form = &self.form;
        TransactionPanelView {
            rows: self.rows(tz),
            amount: form.amount.clone(),
            kind: form.kind,
            date: form.date.clone(),
            category_id: form.category_id.clone(),
            description: form.description.clone(),
            kind_options: kind_options(),
            category_options,
            submit_label: form.mode.submit_label("Transaction"),
            show_cancel: form.mode.is_editing(),
            error: self.error.clone(),
        }
    }
}

fn kind_options() -> Vec<SelectOption> {
    TransactionType::ALL
        .iter()
        .map(|kind| SelectOption {
            value: kind.as_str().to_string(),
            label: kind.label().to_string(),
        })
        .collect()
}
