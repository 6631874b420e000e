use dioxus::prelude::*;

use crate::domain::entities::feedback::{NewFeedback, FEEDBACK_TYPES};
use crate::domain::entities::form_file::FormFile;
use crate::domain::entities::incident::{
    IncidentReport, NewIncidentReport, INCIDENT_TYPES, OTHER_CHOICE, PREFERRED_ACTIONS,
};
use crate::domain::entities::session::Session;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::{
    CheckField, PaginatedTable, ReportDetail, RowAction, RowEvent, SelectField, TextField,
};
use crate::ui::pages::forms::save_form_copy;
use crate::ui::state::{AppServices, AppState};
use crate::ui::style::{form_grid_style, page_scroll_style, section_title_style, tab_button_style};
use crate::ui::tables::TableSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResidentTab {
    Report,
    MyReports,
    Feedback,
    Forms,
}

const DOWNLOAD: RowAction = RowAction {
    key: "download",
    label: "Download",
};
const VIEW: RowAction = RowAction {
    key: "view",
    label: "View",
};

#[component]
pub fn ResidentDashboard(session: Session) -> Element {
    let services = use_context::<AppServices>();
    let tables = use_context::<TableSet>();
    let state = use_context::<AppState>();
    let mut tab = use_signal(|| ResidentTab::Report);
    let mut my_reports = use_signal(Vec::<IncidentReport>::new);
    let mut forms = use_signal(Vec::<FormFile>::new);
    let mut viewing = use_signal(|| None::<IncidentReport>);

    let reload = {
        let services = services.clone();
        let session = session.clone();
        move || {
            match run_blocking(|| services.reports.list_for(&session)) {
                Ok(list) => my_reports.set(list),
                Err(err) => state.report(format!("Could not load your reports: {err}")),
            }
            match run_blocking(|| services.forms.list()) {
                Ok(list) => forms.set(list),
                Err(err) => state.report(format!("Could not load forms: {err}")),
            }
        }
    };

    let mut reload_on_mount = reload.clone();
    use_effect(move || reload_on_mount());

    let services_for_download = services.clone();
    let open_report = {
        let services = services.clone();
        let session = session.clone();
        move |event: RowEvent| match run_blocking(|| services.reports.get(&session, &event.id)) {
            Ok(report) => viewing.set(Some(report)),
            Err(err) => state.report(format!("Could not open report: {err}")),
        }
    };
    let current_tab = tab();
    let opened = viewing();

    rsx! {
        div { style: "display: flex; gap: 8px;",
            for (label, value) in [
                ("Report an incident", ResidentTab::Report),
                ("My reports", ResidentTab::MyReports),
                ("Feedback", ResidentTab::Feedback),
                ("Forms", ResidentTab::Forms),
            ] {
                button {
                    style: "{tab_button_style(current_tab == value)}",
                    onclick: move |_| tab.set(value),
                    "{label}"
                }
            }
        }

        div { style: "{page_scroll_style()}",
            {match current_tab {
                ResidentTab::Report => rsx! {
                    IncidentForm {
                        session: session.clone(),
                        on_submitted: move |_| {
                            let mut reload = reload.clone();
                            reload();
                        },
                    }
                },
                ResidentTab::MyReports => rsx! {
                    PaginatedTable {
                        title: "My reports".to_string(),
                        records: my_reports(),
                        config: tables.my_reports.clone(),
                        actions: vec![VIEW],
                        on_action: open_report,
                    }
                },
                ResidentTab::Feedback => rsx! { FeedbackForm {} },
                ResidentTab::Forms => rsx! {
                    PaginatedTable {
                        title: "Downloadable forms".to_string(),
                        records: forms(),
                        config: tables.forms.clone(),
                        actions: vec![DOWNLOAD],
                        on_action: move |event: RowEvent| {
                            save_form_copy(&services_for_download, state, &event.id);
                        },
                    }
                },
            }}
        }

        if let Some(report) = opened {
            ReportDetail { report, on_close: move |_: ()| viewing.set(None) }
        }
    }
}

#[component]
fn IncidentForm(session: Session, on_submitted: EventHandler<()>) -> Element {
    let services = use_context::<AppServices>();
    let state = use_context::<AppState>();
    let mut form = use_signal(NewIncidentReport::default);
    let current = form();

    rsx! {
        div { style: "{section_title_style()}", "Report an incident" }
        div { style: "{form_grid_style()}",
            TextField { label: "Full name", value: current.full_name.clone(), on_input: move |v| form.write().full_name = v }
            TextField { label: "Address", value: current.address.clone(), on_input: move |v| form.write().address = v }
            TextField { label: "Contact number", value: current.contact_number.clone(), on_input: move |v| form.write().contact_number = v }
            TextField { label: "Date and time", kind: "datetime-local", value: current.datetime.clone(), on_input: move |v| form.write().datetime = v }
            TextField { label: "Location", value: current.location.clone(), on_input: move |v| form.write().location = v }
            SelectField {
                label: "Type of incident",
                options: INCIDENT_TYPES.to_vec(),
                selected: current.incident_type.clone(),
                allow_blank: true,
                on_select: move |v| form.write().incident_type = v,
            }
            if current.incident_type == OTHER_CHOICE {
                TextField { label: "Other type", value: current.other_type.clone(), on_input: move |v| form.write().other_type = v }
            }
            TextField { label: "Description", value: current.description.clone(), on_input: move |v| form.write().description = v }
            TextField { label: "Suspects", value: current.suspects.clone(), on_input: move |v| form.write().suspects = v }
            CheckField { label: "Were there witnesses?", checked: current.has_witnesses, on_toggle: move |v| form.write().has_witnesses = v }
            if current.has_witnesses {
                TextField { label: "Witness details", value: current.witness_info.clone(), on_input: move |v| form.write().witness_info = v }
            }
            CheckField { label: "Reported to authorities?", checked: current.reported_to_authorities, on_toggle: move |v| form.write().reported_to_authorities = v }
            if current.reported_to_authorities {
                TextField { label: "Authority details", value: current.authorities_info.clone(), on_input: move |v| form.write().authorities_info = v }
            }
            CheckField { label: "Damages or injuries?", checked: current.damages_or_injuries, on_toggle: move |v| form.write().damages_or_injuries = v }
            if current.damages_or_injuries {
                TextField { label: "Damage details", value: current.damages_description.clone(), on_input: move |v| form.write().damages_description = v }
            }
            CheckField { label: "Evidence available?", checked: current.has_evidence, on_toggle: move |v| form.write().has_evidence = v }
            if current.has_evidence {
                TextField { label: "Evidence details", value: current.evidence_description.clone(), on_input: move |v| form.write().evidence_description = v }
            }
            SelectField {
                label: "Preferred action",
                options: PREFERRED_ACTIONS.to_vec(),
                selected: current.preferred_action.clone(),
                allow_blank: true,
                on_select: move |v| form.write().preferred_action = v,
            }
            if current.preferred_action == OTHER_CHOICE {
                TextField { label: "Describe the action", value: current.preferred_action_detail.clone(), on_input: move |v| form.write().preferred_action_detail = v }
            }
        }
        div {
            button {
                onclick: move |_| {
                    let report = form();
                    match run_blocking(|| services.reports.submit(&session, &report)) {
                        Ok(_) => {
                            form.set(NewIncidentReport::default());
                            state.report("Report submitted.");
                            on_submitted.call(());
                        }
                        Err(err) => state.report(format!("Report not submitted: {err}")),
                    }
                },
                "Submit report"
            }
        }
    }
}

#[component]
pub fn FeedbackForm() -> Element {
    let services = use_context::<AppServices>();
    let state = use_context::<AppState>();
    let mut form = use_signal(NewFeedback::default);
    let current = form();

    rsx! {
        div { style: "{section_title_style()}", "Send feedback" }
        div { style: "{form_grid_style()}",
            TextField { label: "Name (optional)", value: current.name.clone(), on_input: move |v| form.write().name = v }
            TextField { label: "Email (optional)", value: current.email.clone(), on_input: move |v| form.write().email = v }
            SelectField {
                label: "Type",
                options: FEEDBACK_TYPES.to_vec(),
                selected: current.feedback_type.clone(),
                on_select: move |v| form.write().feedback_type = v,
            }
            TextField { label: "Message", value: current.message.clone(), on_input: move |v| form.write().message = v }
        }
        div {
            button {
                onclick: move |_| {
                    let feedback = form();
                    match run_blocking(|| services.feedback.submit(&feedback)) {
                        Ok(_) => {
                            form.set(NewFeedback::default());
                            state.report("Thank you for your feedback.");
                        }
                        Err(err) => state.report(format!("Feedback not sent: {err}")),
                    }
                },
                "Send"
            }
        }
    }
}
