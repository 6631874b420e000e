use dioxus::prelude::*;

use crate::domain::entities::account::NewAccountRequest;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::TextField;
use crate::ui::state::{AppServices, AppState};
use crate::ui::style::{form_grid_style, section_title_style};

#[component]
pub fn LoginPage() -> Element {
    let services = use_context::<AppServices>();
    let state = use_context::<AppState>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_request = use_signal(|| false);

    let services_for_sign_in = services.clone();

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 12px; max-width: 640px;",
            div { style: "{section_title_style()}", "Sign in" }
            div { style: "{form_grid_style()}",
                TextField { label: "Email", value: email(), on_input: move |value| email.set(value) }
                TextField {
                    label: "Password",
                    kind: "password",
                    value: password(),
                    on_input: move |value| password.set(value),
                }
            }
            div { style: "display: flex; gap: 8px;",
                button {
                    onclick: move |_| {
                        let result = run_blocking(|| {
                            services_for_sign_in.auth.sign_in(&email(), &password())
                        });
                        match result {
                            Ok(session) => {
                                password.set(String::new());
                                state.sign_in(&services_for_sign_in, session);
                            }
                            Err(err) => state.report(format!("Sign-in failed: {err}")),
                        }
                    },
                    "Sign in"
                }
                button {
                    onclick: move |_| show_request.set(!show_request()),
                    if show_request() { "Hide account request" } else { "Request an account" }
                }
            }

            if show_request() {
                RequestAccountForm { on_done: move |_| show_request.set(false) }
            }
        }
    }
}

#[component]
fn RequestAccountForm(on_done: EventHandler<()>) -> Element {
    let services = use_context::<AppServices>();
    let state = use_context::<AppState>();
    let mut form = use_signal(NewAccountRequest::default);

    let current = form();

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 8px;",
            div { style: "{section_title_style()}", "Request an account" }
            div { style: "{form_grid_style()}",
                TextField { label: "First name", value: current.first_name.clone(), on_input: move |v| form.write().first_name = v }
                TextField { label: "Middle initial", value: current.middle_initial.clone(), on_input: move |v| form.write().middle_initial = v }
                TextField { label: "Last name", value: current.last_name.clone(), on_input: move |v| form.write().last_name = v }
                TextField { label: "Contact number", value: current.contact_number.clone(), on_input: move |v| form.write().contact_number = v }
                TextField { label: "Email", value: current.email.clone(), on_input: move |v| form.write().email = v }
                TextField { label: "Address", value: current.address.clone(), on_input: move |v| form.write().address = v }
                TextField { label: "Password", kind: "password", value: current.password.clone(), on_input: move |v| form.write().password = v }
                TextField { label: "Confirm password", kind: "password", value: current.confirm_password.clone(), on_input: move |v| form.write().confirm_password = v }
            }
            div {
                button {
                    onclick: move |_| {
                        let request = form();
                        match run_blocking(|| services.accounts.request_account(&request)) {
                            Ok(_) => {
                                form.set(NewAccountRequest::default());
                                state.report("Request submitted. An administrator will review it.");
                                on_done.call(());
                            }
                            Err(err) => state.report(format!("Request failed: {err}")),
                        }
                    },
                    "Submit request"
                }
            }
        }
    }
}
