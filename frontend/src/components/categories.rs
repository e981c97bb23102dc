use yew::prelude::*;

use crate::controller::Msg;
use crate::panels::{CategoryField, CategoryPanelView};

use super::{click_callback, error_line, input_callback, submit_callback};

#[derive(Properties, PartialEq)]
pub struct CategoriesPanelProps {
    pub view: CategoryPanelView,
    pub on_msg: Callback<Msg>,
}

#[function_component(CategoriesPanel)]
pub fn categories_panel(props: &CategoriesPanelProps) -> Html {
    let view = &props.view;
    let on_msg = &props.on_msg;

    html! {
        <section id="categories-panel">
            <h3>{"Categories"}</h3>
            <form onsubmit={submit_callback(on_msg, || Msg::SubmitCategory)}>
                <input
                    type="text"
                    placeholder="Category name"
                    required=true
                    value={view.name.clone()}
                    oninput={input_callback(on_msg, |value| Msg::CategoryInput(CategoryField::Name, value))}
                />
                <button type="submit">{ view.submit_label.clone() }</button>
                if view.show_cancel {
                    <button type="button" onclick={click_callback(on_msg, || Msg::CancelCategoryEdit)}>{"Cancel Edit"}</button>
                }
            </form>
            { error_line(&view.error) }
            <table>
                <thead>
                    <tr><th>{"Name"}</th><th>{"Actions"}</th></tr>
                </thead>
                <tbody>
                    { for view.rows.iter().map(|row| {
                        let id = row.id;
                        html! {
                            <tr key={id}>
                                <td>{ row.name.clone() }</td>
                                <td>
                                    <button onclick={click_callback(on_msg, move || Msg::EditCategory(id))}>{"Edit"}</button>
                                    <button class="danger" onclick={click_callback(on_msg, move || Msg::DeleteCategory(id))}>{"Delete"}</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </section>
    }
}
