use chrono::Utc;
use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::session::Session;
use crate::domain::routing::{ADMIN_DASHBOARD_PATH, DASHBOARD_PATH};
use crate::ui::pages::{AdminDashboard, LoginPage, ResidentDashboard};
use crate::ui::state::{AppServices, AppState};
use crate::ui::style::root_container_style;
use crate::ui::tables::TableSet;

/// What the window shows for a resolved route.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    Resident(Session),
    Admin(Session),
}

/// Picks the screen for a route the guard already let through. A missing
/// session always lands on the login screen.
pub fn screen_for(route: &str, session: Option<Session>) -> Screen {
    match session {
        Some(session) if route == ADMIN_DASHBOARD_PATH => Screen::Admin(session),
        Some(session) if route == DASHBOARD_PATH => Screen::Resident(session),
        _ => Screen::Login,
    }
}

fn boot() -> Result<(AppServices, TableSet), String> {
    let config = AppConfig::from_env().map_err(|err| format!("{err:#}"))?;
    let services = AppServices::open(&config).map_err(|err| format!("{err:#}"))?;
    let tables = TableSet::new(config.page_size).map_err(|err| err.to_string())?;
    Ok((services, tables))
}

#[component]
pub fn App() -> Element {
    let state = AppState::new();
    use_context_provider(|| state);
    let booted = use_hook(boot);

    let (services, tables) = match booted {
        Ok(parts) => parts,
        Err(err) => {
            tracing::error!(error = err.as_str(), "startup failed");
            return rsx! {
                div {
                    p { "Could not start the record system: {err}" }
                }
            };
        }
    };
    use_context_provider(|| services.clone());
    use_context_provider(|| tables);

    let route = state.route.read().clone();
    let session = state.session.read().clone();
    let decision = services.auth.check_route(&route, session.as_ref());
    let live = Session::active(session.as_ref(), Utc::now()).cloned();
    let screen = screen_for(decision.destination(&route), live);
    let status = state.status.read().clone();
    let services_for_sign_out = services.clone();

    rsx! {
        div { style: "{root_container_style()}",
            div { style: "display: flex; align-items: center; gap: 12px;",
                span { style: "font-weight: 700; font-size: 18px;", "Subdivision Records" }
                if screen != Screen::Login {
                    button {
                        style: "margin-left: auto;",
                        onclick: move |_| state.sign_out(&services_for_sign_out),
                        "Sign out"
                    }
                }
            }
            div { style: "color: #555;", "{status}" }
            {match screen {
                Screen::Login => rsx! { LoginPage {} },
                Screen::Resident(session) => rsx! { ResidentDashboard { session } },
                Screen::Admin(session) => rsx! { AdminDashboard { session } },
            }}
        }
    }
}
