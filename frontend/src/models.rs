//! Client-side projections of the API resources and the request bodies sent
//! back. The server owns all of these; nothing here outlives a render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Token {
    pub access_token: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Expense, TransactionType::Income];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!("unknown transaction type: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// ISO-8601, with or without an offset.
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category_id: i64,
    /// Denormalized copy of the referenced category.
    pub category: Category,
}

/// Body for creating or replacing a transaction.
///
/// `None` numbers go out as `null`; the server rejects them with a
/// validation message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionPayload {
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: String,
    pub category_id: Option<i64>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default)]
    pub target_date: Option<String>,
    /// Server-computed, 0 to 100.
    #[serde(default)]
    pub progress_percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoalCreate {
    pub name: String,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub target_date: Option<String>,
}

/// Update body. The API treats a missing `target_date` as "leave as is", so
/// clearing it needs the explicit flag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoalUpdate {
    pub name: String,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub target_date: Option<String>,
    pub clear_target_date: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Contribution {
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_with_nested_category() {
        let value = json!({
            "id": 7,
            "amount": 42.5,
            "type": "expense",
            "date": "2024-03-05T14:30:00",
            "description": null,
            "category_id": 2,
            "user_id": 1,
            "category": {"id": 2, "name": "Groceries", "user_id": 1}
        });
        let tx: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.category.name, "Groceries");
        assert_eq!(tx.description, None);
    }

    #[test]
    fn test_goal_without_optional_fields() {
        let value = json!({
            "id": 1,
            "name": "Holiday",
            "target_amount": 1000.0,
            "current_amount": 0.0
        });
        let goal: Goal = serde_json::from_value(value).unwrap();
        assert_eq!(goal.target_date, None);
        assert_eq!(goal.progress_percentage, 0.0);
    }

    #[test]
    fn test_goal_update_sends_clear_flag_and_null_date() {
        let body = serde_json::to_value(GoalUpdate {
            name: "Car".to_string(),
            target_amount: Some(5000.0),
            current_amount: Some(250.0),
            target_date: None,
            clear_target_date: true,
        })
        .unwrap();
        assert_eq!(body["target_date"], serde_json::Value::Null);
        assert_eq!(body["clear_target_date"], json!(true));
    }

    #[test]
    fn test_transaction_type_from_form_value() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert!("refund".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_token_ignores_token_type() {
        let token: Token =
            serde_json::from_value(json!({"access_token": "abc", "token_type": "bearer"})).unwrap();
        assert_eq!(token.access_token, "abc");
    }
}
