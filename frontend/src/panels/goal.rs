use std::collections::HashMap;
use std::fmt::Display;

use chrono::TimeZone;
use thiserror::Error;

use crate::api::ApiCall;
use crate::dates;
use crate::models::{Contribution, Goal, GoalCreate, GoalUpdate};

use super::{format_money, parse_amount, FormMode};

/// Above this fill the percentage label sits on the bar colour and needs the
/// light text.
const LIGHT_LABEL_ABOVE: f64 = 40.0;

/// Why a contribution box did not produce a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContributionError {
    #[error("Invalid amount for contribution.")]
    NotANumber,
    #[error("Please enter a valid positive amount to contribute.")]
    NotPositive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalField {
    Name,
    TargetAmount,
    CurrentAmount,
    TargetDate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalForm {
    pub mode: FormMode,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    /// `datetime-local` value, empty for "no target date".
    pub target_date: String,
}

impl Default for GoalForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            target_amount: String::new(),
            current_amount: "0".to_string(),
            target_date: String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelColor {
    Light,
    Dark,
}

impl LabelColor {
    pub fn css(&self) -> &'static str {
        match self {
            LabelColor::Light => "white",
            LabelColor::Dark => "black",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressBar {
    /// Fill width in percent, clamped to 0..=100.
    pub fill_percent: f64,
    pub label: String,
    pub label_color: LabelColor,
}

impl ProgressBar {
    pub fn new(progress_percentage: f64) -> Self {
        let fill_percent = if progress_percentage.is_finite() {
            progress_percentage.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let label_color = if progress_percentage > LIGHT_LABEL_ABOVE {
            LabelColor::Light
        } else {
            LabelColor::Dark
        };
        Self {
            fill_percent,
            label: format!("{progress_percentage}%"),
            label_color,
        }
    }

    pub fn fill_style(&self) -> String {
        format!("width: {}%;", self.fill_percent)
    }

    pub fn label_style(&self) -> String {
        format!("color: {};", self.label_color.css())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalRow {
    pub id: i64,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub progress: ProgressBar,
    pub target_date: String,
    /// What the user has typed into this row's contribution box.
    pub contribution: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GoalPanelView {
    pub rows: Vec<GoalRow>,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: String,
    pub submit_label: String,
    pub show_cancel: bool,
    pub error: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GoalPanel {
    pub items: Vec<Goal>,
    pub form: GoalForm,
    pub error: String,
    contributions: HashMap<i64, String>,
}

impl GoalPanel {
    pub fn set_field(&mut self, field: GoalField, value: String) {
        let form = &mut self.form;
        match field {
            GoalField::Name => form.name = value,
            GoalField::TargetAmount => form.target_amount = value,
            GoalField::CurrentAmount => form.current_amount = value,
            GoalField::TargetDate => form.target_date = value,
        }
    }

    pub fn set_contribution(&mut self, id: i64, value: String) {
        self.contributions.insert(id, value);
    }

    pub fn contribution(&self, id: i64) -> &str {
        self.contributions.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn clear_contribution(&mut self, id: i64) {
        self.contributions.remove(&id);
    }

    /// Validates a row's contribution box. Only a finite, positive amount
    /// produces a call.
    pub fn contribute_call(&self, id: i64) -> Result<ApiCall, ContributionError> {
        let amount = self
            .contribution(id)
            .trim()
            .parse::<f64>()
            .map_err(|_| ContributionError::NotANumber)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ContributionError::NotPositive);
        }
        Ok(ApiCall::Contribute(id, Contribution { amount }))
    }

    pub fn begin_edit<Tz>(&mut self, id: i64, tz: &Tz) -> bool
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(goal) = self.items.iter().find(|goal| goal.id == id) else {
            return false;
        };
        self.form = GoalForm {
            mode: FormMode::Update(goal.id),
            name: goal.name.clone(),
            target_amount: goal.target_amount.to_string(),
            current_amount: goal.current_amount.to_string(),
            target_date: goal
                .target_date
                .as_deref()
                .map(|date| dates::timestamp_to_local_input(date, tz))
                .unwrap_or_default(),
        };
        true
    }

    pub fn reset_form(&mut self) {
        self.form = GoalForm::default();
        self.error.clear();
    }

    /// Create sends the plain goal; update also says whether the target date
    /// should be cleared, which is the case whenever no date is entered.
    pub fn submit_call<Tz: TimeZone>(&self, tz: &Tz) -> ApiCall {
        let form = &self.form;
        let target_date = dates::local_input_to_iso(&form.target_date, tz);
        let name = form.name.clone();
        let target_amount = parse_amount(&form.target_amount);
        let current_amount = parse_amount(&form.current_amount);

        match form.mode {
            FormMode::Create => ApiCall::CreateGoal(GoalCreate {
                name,
                target_amount,
                current_amount,
                target_date,
            }),
            FormMode::Update(id) => ApiCall::UpdateGoal(
                id,
                GoalUpdate {
                    name,
                    target_amount,
                    current_amount,
                    clear_target_date: target_date.is_none(),
                    target_date,
                },
            ),
        }
    }

    pub fn rows<Tz>(&self, tz: &Tz) -> Vec<GoalRow>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.items
            .iter()
            .map(|goal| GoalRow {
                id: goal.id,
                name: goal.name.clone(),
                target_amount: format_money(goal.target_amount),
                current_amount: format_money(goal.current_amount),
                progress: ProgressBar::new(goal.progress_percentage),
                target_date: goal
                    .target_date
                    .as_deref()
                    .map(|date| dates::display_date(date, tz))
                    .unwrap_or_else(|| "N/A".to_string()),
                contribution: self.contribution(goal.id).to_string(),
            })
            .collect()
    }

    pub fn view<Tz>(&self, tz: &Tz) -> GoalPanelView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let form = &self.form;
        GoalPanelView {
            rows: self.rows(tz),
            name: form.name.clone(),
            target_amount: form.target_amount.clone(),
            current_amount: form.current_amount.clone(),
            target_date: form.target_date.clone(),
            submit_label: form.mode.submit_label("Goal"),
            show_cancel: form.mode.is_editing(),
            error: self.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn goal(id: i64, progress: f64, target_date: Option<&str>) -> Goal {
        Goal {
            id,
            name: "Holiday".to_string(),
            target_amount: 1000.0,
            current_amount: progress * 10.0,
            target_date: target_date.map(str::to_string),
            progress_percentage: progress,
        }
    }

    #[test]
    fn test_label_contrast_switches_above_forty() {
        assert_eq!(ProgressBar::new(45.0).label_color, LabelColor::Light);
        assert_eq!(ProgressBar::new(30.0).label_color, LabelColor::Dark);
        assert_eq!(ProgressBar::new(40.0).label_color, LabelColor::Dark);
        assert_eq!(ProgressBar::new(45.0).label_style(), "color: white;");
    }

    #[test]
    fn test_fill_is_clamped() {
        assert_eq!(ProgressBar::new(130.0).fill_percent, 100.0);
        assert_eq!(ProgressBar::new(-5.0).fill_percent, 0.0);
        assert_eq!(ProgressBar::new(62.5).fill_style(), "width: 62.5%;");
        assert_eq!(ProgressBar::new(62.5).label, "62.5%");
        assert_eq!(ProgressBar::new(45.0).label, "45%");
    }

    #[test]
    fn test_rows() {
        let panel = GoalPanel {
            items: vec![goal(1, 25.0, Some("2025-06-01T00:00:00")), goal(2, 0.0, None)],
            ..Default::default()
        };
        let rows = panel.rows(&Utc);
        assert_eq!(rows[0].target_amount, "1000.00");
        assert_eq!(rows[0].current_amount, "250.00");
        assert_eq!(rows[0].target_date, "2025-06-01");
        assert_eq!(rows[1].target_date, "N/A");
    }

    #[test]
    fn test_contribution_validation() {
        let mut panel = GoalPanel::default();

        panel.set_contribution(1, "ten".to_string());
        assert_eq!(panel.contribute_call(1), Err(ContributionError::NotANumber));

        panel.set_contribution(1, "0".to_string());
        assert_eq!(panel.contribute_call(1), Err(ContributionError::NotPositive));
        assert_eq!(
            ContributionError::NotPositive.to_string(),
            "Please enter a valid positive amount to contribute."
        );

        panel.set_contribution(1, "-3".to_string());
        assert_eq!(panel.contribute_call(1), Err(ContributionError::NotPositive));

        panel.set_contribution(1, "inf".to_string());
        assert_eq!(panel.contribute_call(1), Err(ContributionError::NotPositive));

        panel.set_contribution(1, "12.5".to_string());
        assert_eq!(
            panel.contribute_call(1),
            Ok(ApiCall::Contribute(1, Contribution { amount: 12.5 }))
        );
    }

    #[test]
    fn test_update_without_date_clears_it() {
        let mut panel = GoalPanel {
            items: vec![goal(3, 50.0, Some("2025-06-01T00:00:00"))],
            ..Default::default()
        };
        assert!(panel.begin_edit(3, &Utc));
        assert_eq!(panel.form.target_date, "2025-06-01T00:00");

        panel.set_field(GoalField::TargetDate, String::new());
        let ApiCall::UpdateGoal(id, body) = panel.submit_call(&Utc) else {
            panic!("expected an update call");
        };
        assert_eq!(id, 3);
        assert_eq!(body.target_date, None);
        assert!(body.clear_target_date);
        assert_eq!(body.target_amount, Some(1000.0));
        assert_eq!(body.current_amount, Some(500.0));
    }

    #[test]
    fn test_update_with_date_keeps_it() {
        let mut panel = GoalPanel {
            items: vec![goal(3, 50.0, None)],
            ..Default::default()
        };
        panel.begin_edit(3, &Utc);
        panel.set_field(GoalField::TargetDate, "2026-01-15T08:00".to_string());
        let ApiCall::UpdateGoal(_, body) = panel.submit_call(&Utc) else {
            panic!("expected an update call");
        };
        assert_eq!(body.target_date.as_deref(), Some("2026-01-15T08:00:00.000Z"));
        assert!(!body.clear_target_date);
    }

    #[test]
    fn test_create_payload_and_reset() {
        let mut panel = GoalPanel::default();
        panel.set_field(GoalField::Name, "Bike".to_string());
        panel.set_field(GoalField::TargetAmount, "800".to_string());

        assert_eq!(
            panel.submit_call(&Utc),
            ApiCall::CreateGoal(GoalCreate {
                name: "Bike".to_string(),
                target_amount: Some(800.0),
                current_amount: Some(0.0),
                target_date: None,
            })
        );

        panel.reset_form();
        assert_eq!(panel.form.current_amount, "0");
        assert_eq!(panel.view(&Utc).submit_label, "Add Goal");
    }
}
