use yew::prelude::*;

use crate::controller::{AuthField, AuthForm, Msg};

use super::{error_line, input_callback, submit_callback};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    fn input_msg(self, field: AuthField) -> impl Fn(String) -> Msg {
        move |value| match self {
            AuthMode::Login => Msg::LoginInput(field, value),
            AuthMode::Register => Msg::RegisterInput(field, value),
        }
    }

    fn submit_msg(self) -> Msg {
        match self {
            AuthMode::Login => Msg::SubmitLogin,
            AuthMode::Register => Msg::SubmitRegister,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CredentialsFormProps {
    pub mode: AuthMode,
    pub form: AuthForm,
    pub on_msg: Callback<Msg>,
}

#[function_component(CredentialsForm)]
pub fn credentials_form(props: &CredentialsFormProps) -> Html {
    let mode = props.mode;
    let on_msg = &props.on_msg;

    html! {
        <section>
            <h2>{ mode.title() }</h2>
            <form onsubmit={submit_callback(on_msg, move || mode.submit_msg())}>
                <label>{"Username"}
                    <input
                        type="text"
                        required=true
                        value={props.form.username.clone()}
                        oninput={input_callback(on_msg, mode.input_msg(AuthField::Username))}
                    />
                </label>
                <label>{"Password"}
                    <input
                        type="password"
                        required=true
                        value={props.form.password.clone()}
                        oninput={input_callback(on_msg, mode.input_msg(AuthField::Password))}
                    />
                </label>
                <button type="submit">{ mode.title() }</button>
            </form>
            { error_line(&props.form.error) }
        </section>
    }
}
