use yew::prelude::*;

use crate::controller::Msg;
use crate::panels::{CategoryPanelView, GoalPanelView, TransactionPanelView};

use super::categories::CategoriesPanel;
use super::goals::GoalsPanel;
use super::transactions::TransactionsPanel;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub username: String,
    pub categories: CategoryPanelView,
    pub transactions: TransactionPanelView,
    pub goals: GoalPanelView,
    pub on_msg: Callback<Msg>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    html! {
        <div id="dashboard-view">
            <h2>{"Welcome, "}<span id="dash-username">{ props.username.clone() }</span></h2>
            <CategoriesPanel view={props.categories.clone()} on_msg={props.on_msg.clone()} />
            <TransactionsPanel view={props.transactions.clone()} on_msg={props.on_msg.clone()} />
            <GoalsPanel view={props.goals.clone()} on_msg={props.on_msg.clone()} />
        </div>
    }
}
