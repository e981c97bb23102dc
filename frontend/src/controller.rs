//! The dashboard controller.
//!
//! All state lives on [`Controller`]. [`Controller::update`] handles one
//! message to completion and returns the requests to issue; their outcomes
//! come back later as [`Msg::Response`]. The Yew host only ferries requests
//! and re-renders from [`Controller::view`].

use chrono::Local;
use log::{debug, info, warn};
use serde_json::Value;

use crate::api::{decode, ApiCall, ApiRequest};
use crate::dates;
use crate::error::ApiError;
use crate::models::{Category, Credentials, Goal, Token, Transaction};
use crate::panels::{
    CategoryField, CategoryPanel, CategoryPanelView, ContributionError, GoalField, GoalPanel,
    GoalPanelView, Panel, TransactionField, TransactionPanel, TransactionPanelView,
};
use crate::session::{Session, SessionStore};
use crate::view::{NavLinks, View};

/// Shown until the API grows a "who am I" endpoint.
pub const PLACEHOLDER_USER_LABEL: &str = "User";

/// Blocking browser dialogs.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
    pub error: String,
}

impl AuthForm {
    fn set_field(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Username => self.username = value,
            AuthField::Password => self.password = value,
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    Navigate(View),
    Logout,

    LoginInput(AuthField, String),
    SubmitLogin,
    RegisterInput(AuthField, String),
    SubmitRegister,

    CategoryInput(CategoryField, String),
    SubmitCategory,
    EditCategory(i64),
    CancelCategoryEdit,
    DeleteCategory(i64),

    TransactionInput(TransactionField, String),
    SubmitTransaction,
    EditTransaction(i64),
    CancelTransactionEdit,
    DeleteTransaction(i64),

    GoalInput(GoalField, String),
    SubmitGoal,
    EditGoal(i64),
    CancelGoalEdit,
    DeleteGoal(i64),
    ContributionInput(i64, String),
    Contribute(i64),

    /// `token` is the one the request was sent with.
    Response {
        call: ApiCall,
        token: Option<String>,
        result: Result<Option<Value>, ApiError>,
    },
}

/// Everything the page renders, computed from controller state.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub view: View,
    pub nav: NavLinks,
    pub username: String,
    pub login: AuthForm,
    pub register: AuthForm,
    pub categories: CategoryPanelView,
    pub transactions: TransactionPanelView,
    pub goals: GoalPanelView,
}

pub struct Controller {
    session: Session,
    store: Box<dyn SessionStore>,
    prompt: Box<dyn Prompt>,
    view: View,
    /// Refreshed in this order whenever the dashboard loads.
    panels: Vec<Panel>,
    login: AuthForm,
    register: AuthForm,
    categories: CategoryPanel,
    transactions: TransactionPanel,
    goals: GoalPanel,
}

impl Controller {
    pub fn new(store: Box<dyn SessionStore>, prompt: Box<dyn Prompt>) -> Self {
        let session = Session::restore(store.as_ref());
        Self {
            session,
            store,
            prompt,
            view: View::Welcome,
            panels: Panel::DASHBOARD.to_vec(),
            login: AuthForm::default(),
            register: AuthForm::default(),
            categories: CategoryPanel::default(),
            transactions: TransactionPanel::new(dates::now_local_input()),
            goals: GoalPanel::default(),
        }
    }

    /// Picks the first view from the restored session. A stored token is
    /// taken at face value.
    pub fn init(&mut self) -> Vec<ApiRequest> {
        if self.session.is_authenticated() {
            info!("restored session from storage");
            self.show(Some(View::Dashboard));
            self.load_dashboard()
        } else {
            self.show(None);
            Vec::new()
        }
    }

    pub fn update(&mut self, msg: Msg) -> Vec<ApiRequest> {
        match msg {
            Msg::Navigate(View::Dashboard) => {
                if self.session.is_authenticated() {
                    self.show(Some(View::Dashboard));
                }
                self.load_dashboard()
            }
            Msg::Navigate(target) => {
                self.show(Some(target));
                Vec::new()
            }
            Msg::Logout => {
                self.logout();
                Vec::new()
            }

            Msg::LoginInput(field, value) => {
                self.login.set_field(field, value);
                Vec::new()
            }
            Msg::SubmitLogin => {
                self.login.error.clear();
                vec![self.request(ApiCall::Login(self.login.credentials()))]
            }
            Msg::RegisterInput(field, value) => {
                self.register.set_field(field, value);
                Vec::new()
            }
            Msg::SubmitRegister => {
                self.register.error.clear();
                vec![self.request(ApiCall::Register(self.register.credentials()))]
            }

            Msg::CategoryInput(field, value) => {
                self.categories.set_field(field, value);
                Vec::new()
            }
            Msg::SubmitCategory => {
                self.categories.error.clear();
                vec![self.request(self.categories.submit_call())]
            }
            Msg::EditCategory(id) => {
                if !self.categories.begin_edit(id) {
                    warn!("category {id} is not in the current list");
                }
                Vec::new()
            }
            Msg::CancelCategoryEdit => {
                self.categories.reset_form();
                Vec::new()
            }
            Msg::DeleteCategory(id) => {
                self.confirmed_delete("category", ApiCall::DeleteCategory(id))
            }

            Msg::TransactionInput(field, value) => {
                self.transactions.set_field(field, value);
                Vec::new()
            }
            Msg::SubmitTransaction => {
                self.transactions.error.clear();
                match self.transactions.submit_call(&Local) {
                    Ok(call) => vec![self.request(call)],
                    Err(message) => {
                        self.transactions.error = message;
                        Vec::new()
                    }
                }
            }
            Msg::EditTransaction(id) => {
                if !self.transactions.begin_edit(id, &Local) {
                    warn!("transaction {id} is not in the current list");
                }
                Vec::new()
            }
            Msg::CancelTransactionEdit => {
                self.transactions.reset_form(dates::now_local_input());
                Vec::new()
            }
            Msg::DeleteTransaction(id) => {
                self.confirmed_delete("transaction", ApiCall::DeleteTransaction(id))
            }

            Msg::GoalInput(field, value) => {
                self.goals.set_field(field, value);
                Vec::new()
            }
            Msg::SubmitGoal => {
                self.goals.error.clear();
                vec![self.request(self.goals.submit_call(&Local))]
            }
            Msg::EditGoal(id) => {
                if !self.goals.begin_edit(id, &Local) {
                    warn!("goal {id} is not in the current list");
                }
                Vec::new()
            }
            Msg::CancelGoalEdit => {
                self.goals.reset_form();
                Vec::new()
            }
            Msg::DeleteGoal(id) => self.confirmed_delete("goal", ApiCall::DeleteGoal(id)),
            Msg::ContributionInput(id, value) => {
                self.goals.set_contribution(id, value);
                Vec::new()
            }
            Msg::Contribute(id) => self.contribute(id),

            Msg::Response {
                call,
                token,
                result,
            } => self.handle_response(call, token, result),
        }
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            view: self.view,
            nav: NavLinks::for_session(self.session.is_authenticated()),
            username: self.session.display_name().to_string(),
            login: self.login.clone(),
            register: self.register.clone(),
            categories: self.categories.view(),
            transactions: self.transactions.view(self.categories.options(), &Local),
            goals: self.goals.view(&Local),
        }
    }

    fn request(&self, call: ApiCall) -> ApiRequest {
        ApiRequest::new(call, self.session.token().map(str::to_string))
    }

    fn show(&mut self, target: Option<View>) {
        self.view = View::or_welcome(target);
    }

    /// Sets the user label and asks every panel to refresh. Panels handle
    /// their own responses, so one failing list leaves the others alone.
    fn load_dashboard(&mut self) -> Vec<ApiRequest> {
        if !self.session.is_authenticated() {
            return Vec::new();
        }
        self.session.set_display_name(PLACEHOLDER_USER_LABEL);
        self.panels
            .iter()
            .map(|panel| self.request(panel.refresh_call()))
            .collect()
    }

    fn logout(&mut self) {
        info!("signing out");
        self.session.sign_out(self.store.as_ref());
        self.categories = CategoryPanel::default();
        self.transactions = TransactionPanel::new(dates::now_local_input());
        self.goals = GoalPanel::default();
        self.show(None);
    }

    fn confirmed_delete(&self, noun: &str, call: ApiCall) -> Vec<ApiRequest> {
        if !self.session.is_authenticated() {
            return Vec::new();
        }
        let question = format!("Are you sure you want to delete this {noun}?");
        if !self.prompt.confirm(&question) {
            debug!("delete {noun} cancelled");
            return Vec::new();
        }
        vec![self.request(call)]
    }

    /// Any numeric attempt empties the row's box, valid or not.
    fn contribute(&mut self, id: i64) -> Vec<ApiRequest> {
        let attempt = self.goals.contribute_call(id);
        if attempt != Err(ContributionError::NotANumber) {
            self.goals.clear_contribution(id);
        }
        match attempt {
            Ok(call) if self.session.is_authenticated() => {
                self.goals.error.clear();
                vec![self.request(call)]
            }
            Ok(_) => {
                self.goals.error = ContributionError::NotPositive.to_string();
                Vec::new()
            }
            Err(err) => {
                self.goals.error = err.to_string();
                Vec::new()
            }
        }
    }

    fn handle_response(
        &mut self,
        call: ApiCall,
        token: Option<String>,
        result: Result<Option<Value>, ApiError>,
    ) -> Vec<ApiRequest> {
        if call.requires_session() && token.as_deref() != self.session.token() {
            debug!(
                "dropping {} {} response from an earlier session",
                call.method().as_str(),
                call.path()
            );
            return Vec::new();
        }

        match call {
            ApiCall::Login(_) => match result.and_then(decode::<Token>) {
                Ok(token) => {
                    info!("signed in");
                    self.session.sign_in(token.access_token, self.store.as_ref());
                    self.login = AuthForm::default();
                    self.show(Some(View::Dashboard));
                    self.load_dashboard()
                }
                Err(err) => {
                    self.login.error = err.to_string();
                    Vec::new()
                }
            },
            ApiCall::Register(_) => {
                match result {
                    Ok(_) => {
                        self.register = AuthForm::default();
                        self.prompt.alert("Registration successful! Please login.");
                        self.show(Some(View::Login));
                    }
                    Err(err) => self.register.error = err.to_string(),
                }
                Vec::new()
            }

            ApiCall::ListCategories => {
                match result.and_then(decode::<Vec<Category>>) {
                    Ok(items) => self.categories.items = items,
                    Err(err) => {
                        self.categories.error = format!("Error loading categories: {err}")
                    }
                }
                Vec::new()
            }
            ApiCall::CreateCategory(_) | ApiCall::UpdateCategory(..) => match result {
                Ok(_) => {
                    self.categories.reset_form();
                    vec![self.request(ApiCall::ListCategories)]
                }
                Err(err) => {
                    self.categories.error = err.to_string();
                    Vec::new()
                }
            },
            ApiCall::DeleteCategory(_) => match result {
                Ok(_) => vec![self.request(ApiCall::ListCategories)],
                Err(err) => {
                    self.categories.error = format!("Error deleting category: {err}");
                    Vec::new()
                }
            },

            ApiCall::ListTransactions => {
                match result.and_then(decode::<Vec<Transaction>>) {
                    Ok(items) => self.transactions.items = items,
                    Err(err) => {
                        self.transactions.error = format!("Error loading transactions: {err}")
                    }
                }
                Vec::new()
            }
            ApiCall::CreateTransaction(_) | ApiCall::UpdateTransaction(..) => match result {
                Ok(_) => {
                    self.transactions.reset_form(dates::now_local_input());
                    vec![self.request(ApiCall::ListTransactions)]
                }
                Err(err) => {
                    self.transactions.error = err.to_string();
                    Vec::new()
                }
            },
            ApiCall::DeleteTransaction(_) => match result {
                Ok(_) => vec![self.request(ApiCall::ListTransactions)],
                Err(err) => {
                    self.transactions.error = format!("Error deleting transaction: {err}");
                    Vec::new()
                }
            },

            ApiCall::ListGoals => {
                match result.and_then(decode::<Vec<Goal>>) {
                    Ok(items) => self.goals.items = items,
                    Err(err) => self.goals.error = format!("Error loading goals: {err}"),
                }
                Vec::new()
            }
            ApiCall::CreateGoal(_) | ApiCall::UpdateGoal(..) => match result {
                Ok(_) => {
                    self.goals.reset_form();
                    vec![self.request(ApiCall::ListGoals)]
                }
                Err(err) => {
                    self.goals.error = err.to_string();
                    Vec::new()
                }
            },
            ApiCall::DeleteGoal(_) => match result {
                Ok(_) => vec![self.request(ApiCall::ListGoals)],
                Err(err) => {
                    self.goals.error = format!("Error deleting goal: {err}");
                    Vec::new()
                }
            },
            ApiCall::Contribute(..) => match result {
                Ok(_) => vec![self.request(ApiCall::ListGoals)],
                Err(err) => {
                    self.goals.error = format!("Error contributing to goal: {err}");
                    Vec::new()
                }
            },
        }
    }
}
