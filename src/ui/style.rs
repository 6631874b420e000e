pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; box-sizing: border-box; padding: 12px; gap: 8px; font-family: sans-serif; overflow: hidden;"
}

pub fn page_scroll_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; display: flex; flex-direction: column; gap: 16px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

pub fn table_header_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 8px; background: #f2f2f2; position: sticky; top: 0; text-align: left; cursor: pointer; white-space: nowrap;"
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 8px; vertical-align: top;"
}

pub fn modal_backdrop_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1200;"
}

pub fn modal_card_style() -> &'static str {
    "background: #fff; padding: 16px; border: 1px solid #999; min-width: 300px;"
}

pub fn form_grid_style() -> &'static str {
    "display: grid; grid-template-columns: 160px 1fr; gap: 6px; max-width: 640px;"
}

pub fn section_title_style() -> &'static str {
    "font-weight: 600; margin: 4px 0;"
}

pub fn tab_button_style(active: bool) -> String {
    let background = if active { "#eef4ff" } else { "#fff" };
    format!(
        "border: 1px solid #bbb; background: {background}; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    )
}
