use crate::api::ApiCall;
use crate::models::{Category, CategoryPayload};

use super::{FormMode, SelectOption};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryField {
    Name,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryForm {
    pub mode: FormMode,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPanelView {
    pub rows: Vec<CategoryRow>,
    pub name: String,
    pub submit_label: String,
    pub show_cancel: bool,
    pub error: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryPanel {
    pub items: Vec<Category>,
    pub form: CategoryForm,
    pub error: String,
}

impl CategoryPanel {
    pub fn set_field(&mut self, field: CategoryField, value: String) {
        match field {
            CategoryField::Name => self.form.name = value,
        }
    }

    /// Copies the category into the form and switches it to update mode.
    /// Returns `false` if the id is not in the current list.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(category) = self.items.iter().find(|category| category.id == id) else {
            return false;
        };
        self.form = CategoryForm {
            mode: FormMode::Update(category.id),
            name: category.name.clone(),
        };
        true
    }

    pub fn reset_form(&mut self) {
        self.form = CategoryForm::default();
        self.error.clear();
    }

    pub fn submit_call(&self) -> ApiCall {
        let body = CategoryPayload {
            name: self.form.name.clone(),
        };
        match self.form.mode {
            FormMode::Create => ApiCall::CreateCategory(body),
            FormMode::Update(id) => ApiCall::UpdateCategory(id, body),
        }
    }

    /// Options for the transaction form's category picker.
    pub fn options(&self) -> Vec<SelectOption> {
        let placeholder = SelectOption {
            value: String::new(),
            label: "Select Category".to_string(),
        };
        std::iter::once(placeholder)
            .chain(self.items.iter().map(|category| SelectOption {
                value: category.id.to_string(),
                label: category.name.clone(),
            }))
            .collect()
    }

    pub fn view(&self) -> CategoryPanelView {
        CategoryPanelView {
            rows: self
                .items
                .iter()
                .map(|category| CategoryRow {
                    id: category.id,
                    name: category.name.clone(),
                })
                .collect(),
            name: self.form.name.clone(),
            submit_label: self.form.mode.submit_label("Category"),
            show_cancel: self.form.mode.is_editing(),
            error: self.error.clone(),
        }
    }
}
