use yew::prelude::*;

use crate::controller::Msg;
use crate::panels::{TransactionField, TransactionPanelView};

use super::select::Select;
use super::{click_callback, error_line, input_callback, submit_callback};

#[derive(Properties, PartialEq)]
pub struct TransactionsPanelProps {
    pub view: TransactionPanelView,
    pub on_msg: Callback<Msg>,
}

#[function_component(TransactionsPanel)]
pub fn transactions_panel(props: &TransactionsPanelProps) -> Html {
    let view = &props.view;
    let on_msg = &props.on_msg;
    let field = |field: TransactionField| move |value: String| Msg::TransactionInput(field, value);

    html! {
        <section id="transactions-panel">
            <h3>{"Transactions"}</h3>
            <form onsubmit={submit_callback(on_msg, || Msg::SubmitTransaction)}>
                <input
                    type="number"
                    step="0.01"
                    placeholder="Amount"
                    required=true
                    value={view.amount.clone()}
                    oninput={input_callback(on_msg, field(TransactionField::Amount))}
                />
                <Select
                    value={view.kind.as_str()}
                    options={view.kind_options.clone()}
                    onchange={on_msg.reform(field(TransactionField::Kind))}
                />
                <input
                    type="datetime-local"
                    required=true
                    value={view.date.clone()}
                    oninput={input_callback(on_msg, field(TransactionField::Date))}
                />
                <Select
                    value={view.category_id.clone()}
                    options={view.category_options.clone()}
                    required=true
                    onchange={on_msg.reform(field(TransactionField::Category))}
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    value={view.description.clone()}
                    oninput={input_callback(on_msg, field(TransactionField::Description))}
                />
                <button type="submit">{ view.submit_label.clone() }</button>
                if view.show_cancel {
                    <button type="button" onclick={click_callback(on_msg, || Msg::CancelTransactionEdit)}>{"Cancel Edit"}</button>
                }
            </form>
            { error_line(&view.error) }
            <table>
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Category"}</th>
                        <th>{"Type"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Description"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for view.rows.iter().map(|row| {
                        let id = row.id;
                        html! {
                            <tr key={id}>
                                <td>{ row.date.clone() }</td>
                                <td>{ row.category.clone() }</td>
                                <td>{ row.kind.clone() }</td>
                                <td>{ row.amount.clone() }</td>
                                <td>{ row.description.clone() }</td>
                                <td>
                                    <button onclick={click_callback(on_msg, move || Msg::EditTransaction(id))}>{"Edit"}</button>
                                    <button class="danger" onclick={click_callback(on_msg, move || Msg::DeleteTransaction(id))}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </section>
    }
}
