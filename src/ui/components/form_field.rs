use dioxus::prelude::*;

#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] kind: &'static str,
) -> Element {
    rsx! {
        label { "{label}" }
        input {
            r#type: "{kind}",
            value: "{value}",
            oninput: move |event| on_input.call(event.value()),
        }
    }
}

#[component]
pub fn CheckField(label: &'static str, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        label { "{label}" }
        input {
            r#type: "checkbox",
            checked,
            onclick: move |_| on_toggle.call(!checked),
        }
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    options: Vec<&'static str>,
    selected: String,
    on_select: EventHandler<String>,
    #[props(default)] allow_blank: bool,
) -> Element {
    rsx! {
        label { "{label}" }
        select {
            value: "{selected}",
            onchange: move |event| on_select.call(event.value()),
            if allow_blank {
                option { value: "", "" }
            }
            for opt in options.iter().copied() {
                option { value: "{opt}", selected: selected == opt, "{opt}" }
            }
        }
    }
}
