use dioxus::prelude::*;

use crate::domain::entities::incident::IncidentReport;
use crate::ui::style::{modal_backdrop_style, modal_card_style};

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

/// Every stored field of a report, labelled in display order.
pub fn report_detail_rows(report: &IncidentReport) -> Vec<(&'static str, String)> {
    vec![
        ("Submitted", report.created_at.clone()),
        ("Full name", report.full_name.clone()),
        ("Address", report.address.clone()),
        ("Contact number", report.contact_number.clone()),
        ("Date and time", report.datetime.clone()),
        ("Location", report.location.clone()),
        ("Type of incident", report.incident_type.clone()),
        ("Description", report.description.clone()),
        ("Suspects", report.suspects.clone()),
        ("Witnesses", yes_no(report.has_witnesses)),
        ("Witness details", report.witness_info.clone()),
        ("Reported to authorities", yes_no(report.reported_to_authorities)),
        ("Authority details", report.authorities_info.clone()),
        ("Damages or injuries", yes_no(report.damages_or_injuries)),
        ("Damage details", report.damages_description.clone()),
        ("Evidence", yes_no(report.has_evidence)),
        ("Evidence details", report.evidence_description.clone()),
        ("Preferred action", report.preferred_action.clone()),
    ]
}

#[component]
pub fn ReportDetail(report: IncidentReport, on_close: EventHandler<()>) -> Element {
    let rows = report_detail_rows(&report);

    rsx! {
        div { style: "{modal_backdrop_style()}",
            div { style: "{modal_card_style()} max-width: 640px; max-height: 80vh; overflow: auto;",
                div { style: "font-weight: 600; margin-bottom: 8px;", "Incident report" }
                div { style: "display: grid; grid-template-columns: 180px 1fr; gap: 4px 12px;",
                    for (label, value) in rows.into_iter() {
                        span { style: "color: #555;", "{label}" }
                        span { style: "white-space: pre-wrap;", "{value}" }
                    }
                }
                div { style: "margin-top: 12px; text-align: right;",
                    button { onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    }
}
