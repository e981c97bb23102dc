use yew::prelude::*;

use crate::controller::Msg;
use crate::view::{NavLinks, View};

use super::click_callback;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: NavLinks,
    pub on_msg: Callback<Msg>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let links = props.links;
    let on_msg = &props.on_msg;

    html! {
        <nav>
            <a href="#" onclick={click_callback(on_msg, || Msg::Navigate(View::Welcome))}>{"Budget Planner"}</a>
            if links.login {
                <a id="nav-login" href="#" onclick={click_callback(on_msg, || Msg::Navigate(View::Login))}>{"Login"}</a>
            }
            if links.register {
                <a id="nav-register" href="#" onclick={click_callback(on_msg, || Msg::Navigate(View::Register))}>{"Register"}</a>
            }
            if links.dashboard {
                <a id="nav-dashboard" href="#" onclick={click_callback(on_msg, || Msg::Navigate(View::Dashboard))}>{"Dashboard"}</a>
            }
            if links.logout {
                <a id="nav-logout" href="#" onclick={click_callback(on_msg, || Msg::Logout)}>{"Logout"}</a>
            }
        </nav>
    }
}
