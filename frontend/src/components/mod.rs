pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod goals;
pub mod nav;
mod select;
pub mod transactions;

pub use auth::{AuthMode, CredentialsForm};
pub use dashboard::Dashboard;
pub use nav::Nav;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::controller::Msg;

fn input_callback(
    on_msg: &Callback<Msg>,
    to_msg: impl Fn(String) -> Msg + 'static,
) -> Callback<InputEvent> {
    on_msg.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        to_msg(input.value())
    })
}

fn submit_callback(on_msg: &Callback<Msg>, to_msg: impl Fn() -> Msg + 'static) -> Callback<SubmitEvent> {
    on_msg.reform(move |e: SubmitEvent| {
        e.prevent_default();
        to_msg()
    })
}

fn click_callback(on_msg: &Callback<Msg>, to_msg: impl Fn() -> Msg + 'static) -> Callback<MouseEvent> {
    on_msg.reform(move |e: MouseEvent| {
        e.prevent_default();
        to_msg()
    })
}

fn error_line(message: &str) -> Html {
    html! { <p class="error">{ message.to_string() }</p> }
}
