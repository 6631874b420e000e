use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::confirmation::{AdminAction, Confirmation};
use crate::domain::entities::account::{AccountRequest, Role, UserProfile};
use crate::domain::entities::feedback::Feedback;
use crate::domain::entities::form_file::FormFile;
use crate::domain::entities::incident::IncidentReport;
use crate::domain::entities::session::Session;
use crate::domain::stats::DashboardStats;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::{
    ConfirmDialog, PaginatedTable, ReportDetail, RowAction, RowEvent, SelectField, TextField,
};
use crate::ui::pages::forms::save_form_copy;
use crate::ui::state::{AppServices, AppState};
use crate::ui::style::{form_grid_style, page_scroll_style, section_title_style, tab_button_style};
use crate::ui::tables::TableSet;
use crate::usecase::error::ServiceResult;
use crate::usecase::services::account_service::NewUserForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Overview,
    Reports,
    Feedback,
    Requests,
    Users,
    Forms,
}

const DELETE: RowAction = RowAction {
    key: "delete",
    label: "Delete",
};
const APPROVE: RowAction = RowAction {
    key: "approve",
    label: "Approve",
};
const REJECT: RowAction = RowAction {
    key: "reject",
    label: "Reject",
};
const DOWNLOAD: RowAction = RowAction {
    key: "download",
    label: "Download",
};
const VIEW: RowAction = RowAction {
    key: "view",
    label: "View",
};

/// Maps a row button to the action it stands for and the question asked
/// before running it. Views and downloads are not destructive and map to
/// nothing.
pub fn admin_action_for(table: &str, event: &RowEvent) -> Option<(String, AdminAction)> {
    let id = event.id.clone();
    let pair = match (table, event.action) {
        ("requests", "approve") => (
            "Approve this account request?".to_string(),
            AdminAction::ApproveRequest(id),
        ),
        ("requests", "reject") => (
            "Reject this account request?".to_string(),
            AdminAction::RejectRequest(id),
        ),
        ("users", "delete") => (
            "Delete this user? This cannot be undone.".to_string(),
            AdminAction::DeleteUser(id),
        ),
        ("feedback", "delete") => (
            "Delete this feedback?".to_string(),
            AdminAction::DeleteFeedback(id),
        ),
        ("reports", "delete") => (
            "Delete this incident report?".to_string(),
            AdminAction::DeleteReport(id),
        ),
        ("forms", "delete") => (format!("Delete the form {id}?"), AdminAction::DeleteForm(id)),
        _ => return None,
    };
    Some(pair)
}

/// Runs a confirmed admin action and returns the status line to show.
pub fn perform_admin_action(services: &AppServices, action: &AdminAction) -> ServiceResult<String> {
    match action {
        AdminAction::ApproveRequest(id) => {
            let user = services.accounts.approve(id)?;
            Ok(format!("Approved {}", user.email))
        }
        AdminAction::RejectRequest(id) => {
            services.accounts.reject(id)?;
            Ok("Request rejected".to_string())
        }
        AdminAction::DeleteUser(id) => {
            services.accounts.delete_user(id)?;
            Ok("User deleted".to_string())
        }
        AdminAction::DeleteFeedback(id) => {
            services.feedback.delete(id)?;
            Ok("Feedback deleted".to_string())
        }
        AdminAction::DeleteReport(id) => {
            services.reports.delete(id)?;
            Ok("Report deleted".to_string())
        }
        AdminAction::DeleteForm(name) => {
            services.forms.delete(name)?;
            Ok(format!("Deleted {name}"))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct AdminData {
    stats: DashboardStats,
    reports: Vec<IncidentReport>,
    feedback: Vec<Feedback>,
    requests: Vec<AccountRequest>,
    users: Vec<UserProfile>,
    forms: Vec<FormFile>,
}

fn load_admin_data(services: &AppServices) -> ServiceResult<AdminData> {
    Ok(AdminData {
        stats: services.dashboard.stats()?,
        reports: services.reports.list_all()?,
        feedback: services.feedback.list()?,
        requests: services.accounts.list_requests()?,
        users: services.accounts.list_users()?,
        forms: services.forms.list()?,
    })
}

#[component]
pub fn AdminDashboard(session: Session) -> Element {
    let services = use_context::<AppServices>();
    let tables = use_context::<TableSet>();
    let state = use_context::<AppState>();
    let mut tab = use_signal(|| AdminTab::Overview);
    let mut data = use_signal(AdminData::default);
    let mut confirmation = use_signal(Confirmation::<AdminAction>::default);
    let mut viewing = use_signal(|| None::<IncidentReport>);

    let reload = {
        let services = services.clone();
        move || match run_blocking(|| load_admin_data(&services)) {
            Ok(loaded) => data.set(loaded),
            Err(err) => state.report(format!("Could not load dashboard data: {err}")),
        }
    };
    let mut reload_on_mount = reload.clone();
    use_effect(move || reload_on_mount());

    let on_row = {
        let services = services.clone();
        let session = session.clone();
        move |table: &'static str| {
            let services = services.clone();
            let session = session.clone();
            move |event: RowEvent| {
                if event.action == DOWNLOAD.key {
                    save_form_copy(&services, state, &event.id);
                    return;
                }
                if event.action == VIEW.key {
                    match run_blocking(|| services.reports.get(&session, &event.id)) {
                        Ok(report) => viewing.set(Some(report)),
                        Err(err) => state.report(format!("Could not open report: {err}")),
                    }
                    return;
                }
                if let Some((prompt, action)) = admin_action_for(table, &event) {
                    confirmation.write().request(prompt, action);
                }
            }
        }
    };

    let resolve = {
        let services = services.clone();
        let reload = reload.clone();
        move |accepted: bool| {
            let Some(action) = confirmation.write().resolve(accepted) else {
                return;
            };
            match run_blocking(|| perform_admin_action(&services, &action)) {
                Ok(message) => {
                    tracing::info!(?action, "admin action completed");
                    state.report(message);
                }
                Err(err) => state.report(format!("Action failed: {err}")),
            }
            let mut reload = reload.clone();
            reload();
        }
    };

    let export_csv = {
        let services = services.clone();
        move |_: MouseEvent| {
            let Some(target) = FileDialog::new()
                .add_filter("CSV", &["csv"])
                .set_file_name("feedback.csv")
                .save_file()
            else {
                return;
            };
            let result = run_blocking(|| services.feedback.export_csv_file(&target));
            match result {
                Ok(rows) => {
                    state.report(format!("Exported {rows} feedback rows to {}", target.display()))
                }
                Err(err) => state.report(format!("Export failed: {err}")),
            }
        }
    };

    let upload_form = {
        let services = services.clone();
        let reload = reload.clone();
        move |_: MouseEvent| {
            let Some(source) = FileDialog::new().pick_file() else {
                return;
            };
            let file_name = source
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let bytes = match std::fs::read(&source) {
                Ok(bytes) => bytes,
                Err(err) => {
                    state.report(format!("Cannot read {}: {err}", source.display()));
                    return;
                }
            };
            match run_blocking(|| services.forms.upload(&file_name, &bytes)) {
                Ok(_) => state.report(format!("Uploaded {file_name}")),
                Err(err) => state.report(format!("Upload failed: {err}")),
            }
            let mut reload = reload.clone();
            reload();
        }
    };

    let current_tab = tab();
    let snapshot = data();
    let prompt = confirmation.read().prompt().map(str::to_string);
    let opened = viewing();

    rsx! {
        div { style: "display: flex; gap: 8px; align-items: center;",
            for (label, value) in [
                ("Overview", AdminTab::Overview),
                ("Reports", AdminTab::Reports),
                ("Feedback", AdminTab::Feedback),
                ("Account requests", AdminTab::Requests),
                ("Users", AdminTab::Users),
                ("Forms", AdminTab::Forms),
            ] {
                button {
                    style: "{tab_button_style(current_tab == value)}",
                    onclick: move |_| tab.set(value),
                    "{label}"
                }
            }
            span { style: "margin-left: auto; color: #555;", "Administrator: {session.email}" }
        }

        div { style: "{page_scroll_style()}",
            {match current_tab {
                AdminTab::Overview => rsx! { StatsPanel { stats: snapshot.stats.clone() } },
                AdminTab::Reports => rsx! {
                    PaginatedTable {
                        title: "Incident reports".to_string(),
                        records: snapshot.reports.clone(),
                        config: tables.all_reports.clone(),
                        actions: vec![VIEW, DELETE],
                        on_action: on_row("reports"),
                    }
                },
                AdminTab::Feedback => rsx! {
                    div {
                        button { onclick: export_csv, "Export CSV" }
                    }
                    PaginatedTable {
                        title: "Feedback".to_string(),
                        records: snapshot.feedback.clone(),
                        config: tables.feedback.clone(),
                        actions: vec![DELETE],
                        on_action: on_row("feedback"),
                    }
                },
                AdminTab::Requests => rsx! {
                    PaginatedTable {
                        title: "Pending account requests".to_string(),
                        records: snapshot.requests.clone(),
                        config: tables.requests.clone(),
                        actions: vec![APPROVE, REJECT],
                        on_action: on_row("requests"),
                    }
                },
                AdminTab::Users => rsx! {
                    CreateUserForm {
                        on_created: {
                            let reload = reload.clone();
                            move |_: ()| {
                                let mut reload = reload.clone();
                                reload();
                            }
                        },
                    }
                    PaginatedTable {
                        title: "Users".to_string(),
                        records: snapshot.users.clone(),
                        config: tables.users.clone(),
                        actions: vec![DELETE],
                        on_action: on_row("users"),
                    }
                },
                AdminTab::Forms => rsx! {
                    div {
                        button { onclick: upload_form, "Upload form" }
                    }
                    PaginatedTable {
                        title: "Forms".to_string(),
                        records: snapshot.forms.clone(),
                        config: tables.forms.clone(),
                        actions: vec![DOWNLOAD, DELETE],
                        on_action: on_row("forms"),
                    }
                },
            }}
        }

        if let Some(report) = opened {
            ReportDetail { report, on_close: move |_: ()| viewing.set(None) }
        }
        if let Some(prompt) = prompt {
            ConfirmDialog { prompt, on_resolve: resolve }
        }
    }
}

#[component]
fn StatsPanel(stats: DashboardStats) -> Element {
    let shares: Vec<(String, usize, String)> = stats
        .type_shares()
        .into_iter()
        .map(|(kind, count, share)| (kind, count, format!("{share:.1}")))
        .collect();

    rsx! {
        div { style: "{section_title_style()}", "Total incident reports: {stats.report_count}" }
        div { style: "display: flex; flex-direction: column; gap: 4px; max-width: 520px;",
            for (kind, count, share) in shares.into_iter() {
                div { style: "display: grid; grid-template-columns: 180px 1fr 60px; gap: 8px; align-items: center;",
                    span { "{kind}" }
                    div { style: "background: #eee; height: 12px;",
                        div { style: "background: #4a7bd0; height: 12px; width: {share}%;" }
                    }
                    span { "{count}" }
                }
            }
        }
        div { style: "{section_title_style()}", "Latest feedback" }
        if stats.latest_feedback.is_empty() {
            div { style: "color: #777;", "No feedback yet." }
        }
        for entry in stats.latest_feedback.iter() {
            div { style: "border-bottom: 1px solid #eee; padding: 4px 0;",
                div { style: "font-weight: 600;", "{entry.author_label()} · {entry.feedback_type}" }
                div { "{entry.message}" }
                div { style: "color: #777; font-size: 12px;", "{entry.created_at}" }
            }
        }
    }
}

#[component]
fn CreateUserForm(on_created: EventHandler<()>) -> Element {
    let services = use_context::<AppServices>();
    let state = use_context::<AppState>();
    let mut form = use_signal(NewUserForm::default);
    let current = form();

    rsx! {
        div { style: "{section_title_style()}", "Create user" }
        div { style: "{form_grid_style()}",
            TextField { label: "Email", value: current.email.clone(), on_input: move |v| form.write().email = v }
            TextField { label: "Password", kind: "password", value: current.password.clone(), on_input: move |v| form.write().password = v }
            TextField { label: "First name", value: current.first_name.clone(), on_input: move |v| form.write().first_name = v }
            TextField { label: "Middle initial", value: current.middle_initial.clone(), on_input: move |v| form.write().middle_initial = v }
            TextField { label: "Last name", value: current.last_name.clone(), on_input: move |v| form.write().last_name = v }
            TextField { label: "Contact number", value: current.contact_number.clone(), on_input: move |v| form.write().contact_number = v }
            TextField { label: "Address", value: current.address.clone(), on_input: move |v| form.write().address = v }
            SelectField {
                label: "Role",
                options: vec![Role::Resident.as_str(), Role::Admin.as_str()],
                selected: current.role.as_str().to_string(),
                on_select: move |v: String| form.write().role = v.parse().unwrap_or(Role::Resident),
            }
        }
        div {
            button {
                onclick: move |_| {
                    let request = form();
                    match run_blocking(|| services.accounts.create_user(&request)) {
                        Ok(user) => {
                            form.set(NewUserForm::default());
                            state.report(format!("Created {}", user.email));
                            on_created.call(());
                        }
                        Err(err) => state.report(format!("Could not create user: {err}")),
                    }
                },
                "Create user"
            }
        }
    }
}
