//! The three CRUD panels of the dashboard.
//!
//! Each panel keeps the last list it fetched, its form state and its error
//! line, and maps them to a plain view model. Nothing in here touches the DOM.

pub mod category;
pub mod goal;
pub mod transaction;

pub use category::{CategoryField, CategoryPanel, CategoryPanelView};
pub use goal::{ContributionError, GoalField, GoalPanel, GoalPanelView};
pub use transaction::{TransactionField, TransactionPanel, TransactionPanelView};

use crate::api::ApiCall;

/// Dashboard panels, in the order they are refreshed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Categories,
    Transactions,
    Goals,
}

impl Panel {
    pub const DASHBOARD: [Panel; 3] = [Panel::Categories, Panel::Transactions, Panel::Goals];

    pub fn refresh_call(&self) -> ApiCall {
        match self {
            Panel::Categories => ApiCall::ListCategories,
            Panel::Transactions => ApiCall::ListTransactions,
            Panel::Goals => ApiCall::ListGoals,
        }
    }
}

/// A create/update form is in update mode exactly when it holds the id of
/// the record being edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Update(i64),
}

impl FormMode {
    pub fn submit_label(&self, noun: &str) -> String {
        match self {
            FormMode::Create => format!("Add {noun}"),
            FormMode::Update(_) => format!("Update {noun}"),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Update(_))
    }
}

/// One `<option>` of a `<select>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Parses a numeric form field. Non-finite values count as unparseable.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

pub fn parse_id(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

pub(crate) fn format_money(amount: f64) -> String {
    format!("{amount:.2}")
}
