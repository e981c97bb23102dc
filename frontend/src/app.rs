use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{ApiClient, ApiRequest};
use crate::components::{AuthMode, CredentialsForm, Dashboard, Nav};
use crate::config::Config;
use crate::controller::{Controller, Msg, Prompt};
use crate::session::LocalStorageStore;
use crate::view::View;

/// `window.confirm` / `window.alert`.
struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Config,
}

/// Hosts the controller and carries its requests to the API.
pub struct App {
    controller: Controller,
    api: ApiClient,
}

impl App {
    fn dispatch(&self, ctx: &Context<Self>, requests: Vec<ApiRequest>) {
        for request in requests {
            let api = self.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.send(&request).await;
                link.send_message(Msg::Response {
                    call: request.call,
                    token: request.token,
                    result,
                });
            });
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut controller = Controller::new(
            Box::new(LocalStorageStore::new()),
            Box::new(BrowserPrompt),
        );
        let requests = controller.init();
        let app = Self {
            controller,
            api: ApiClient::new(&ctx.props().config.api_base_url),
        };
        app.dispatch(ctx, requests);
        app
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let requests = self.controller.update(msg);
        self.dispatch(ctx, requests);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_msg = ctx.link().callback(|msg: Msg| msg);
        let page = self.controller.view();

        let content = match page.view {
            View::Welcome => html! {
                <section id="app-content">
                    <h2>{"Welcome to Budget Planner"}</h2>
                    <p>{"Track spending by category, record transactions and save towards goals."}</p>
                </section>
            },
            View::Login => html! {
                <CredentialsForm mode={AuthMode::Login} form={page.login} on_msg={on_msg.clone()} />
            },
            View::Register => html! {
                <CredentialsForm mode={AuthMode::Register} form={page.register} on_msg={on_msg.clone()} />
            },
            View::Dashboard => html! {
                <Dashboard
                    username={page.username}
                    categories={page.categories}
                    transactions={page.transactions}
                    goals={page.goals}
                    on_msg={on_msg.clone()}
                />
            },
        };

        html! {
            <>
                <Nav links={page.nav} on_msg={on_msg} />
                <main>{ content }</main>
            </>
        }
    }
}
