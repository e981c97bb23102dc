use yew::prelude::*;

use crate::controller::Msg;
use crate::panels::goal::{GoalRow, ProgressBar};
use crate::panels::{GoalField, GoalPanelView};

use super::{click_callback, error_line, input_callback, submit_callback};

#[derive(Properties, PartialEq)]
pub struct GoalsPanelProps {
    pub view: GoalPanelView,
    pub on_msg: Callback<Msg>,
}

#[function_component(GoalsPanel)]
pub fn goals_panel(props: &GoalsPanelProps) -> Html {
    let view = &props.view;
    let on_msg = &props.on_msg;
    let field = |field: GoalField| move |value: String| Msg::GoalInput(field, value);

    html! {
        <section id="goals-panel">
            <h3>{"Savings Goals"}</h3>
            <form onsubmit={submit_callback(on_msg, || Msg::SubmitGoal)}>
                <input
                    type="text"
                    placeholder="Goal name"
                    required=true
                    value={view.name.clone()}
                    oninput={input_callback(on_msg, field(GoalField::Name))}
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="Target amount"
                    required=true
                    value={view.target_amount.clone()}
                    oninput={input_callback(on_msg, field(GoalField::TargetAmount))}
                />
                <input
                    type="number"
                    step="0.01"
                    placeholder="Current amount"
                    value={view.current_amount.clone()}
                    oninput={input_callback(on_msg, field(GoalField::CurrentAmount))}
                />
                <input
                    type="datetime-local"
                    value={view.target_date.clone()}
                    oninput={input_callback(on_msg, field(GoalField::TargetDate))}
                />
                <button type="submit">{ view.submit_label.clone() }</button>
                if view.show_cancel {
                    <button type="button" onclick={click_callback(on_msg, || Msg::CancelGoalEdit)}>{"Cancel Edit"}</button>
                }
            </form>
            { error_line(&view.error) }
            <table>
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Target"}</th>
                        <th>{"Current"}</th>
                        <th>{"Progress"}</th>
                        <th>{"Target Date"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for view.rows.iter().map(|row| goal_row(row, on_msg)) }
                </tbody>
            </table>
        </section>
    }
}

fn goal_row(row: &GoalRow, on_msg: &Callback<Msg>) -> Html {
    let id = row.id;
    html! {
        <tr key={id}>
            <td>{ row.name.clone() }</td>
            <td>{ row.target_amount.clone() }</td>
            <td>{ row.current_amount.clone() }</td>
            <td>{ progress_bar(&row.progress) }</td>
            <td>{ row.target_date.clone() }</td>
            <td>
                <button onclick={click_callback(on_msg, move || Msg::EditGoal(id))}>{"Edit"}</button>
                <button class="danger" onclick={click_callback(on_msg, move || Msg::DeleteGoal(id))}>{"Delete"}</button>
                <input
                    type="number"
                    step="0.01"
                    placeholder="Amount"
                    class="contribute-input"
                    value={row.contribution.clone()}
                    oninput={input_callback(on_msg, move |value| Msg::ContributionInput(id, value))}
                />
                <button class="contribute-btn" onclick={click_callback(on_msg, move || Msg::Contribute(id))}>{"Save"}</button>
            </td>
        </tr>
    }
}

fn progress_bar(progress: &ProgressBar) -> Html {
    html! {
        <div class="progress">
            <div class="progress-fill" style={progress.fill_style()}></div>
            <span class="progress-label" style={progress.label_style()}>{ progress.label.clone() }</span>
        </div>
    }
}
