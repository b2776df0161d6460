use crate::state::Inspection;
use crate::util::format_point;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InspectPanelProps {
    pub inspection: Option<Inspection>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn InspectPanel(props: &InspectPanelProps) -> Html {
    let Some(info) = &props.inspection else {
        return html! {};
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let panel_style = "position:absolute; right:12px; top:50%; transform:translateY(-50%); \
        background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; \
        padding:12px 16px; min-width:220px; font-size:13px; color:#c9d1d9;";
    let stat_row_style =
        "display:flex; justify-content:space-between; margin:4px 0; font-size:12px;";
    let stat_label_style = "color:#8b949e;";
    let stat_value_style = "font-weight:500;";

    let rows = [
        ("Type", info.category.label().to_string()),
        ("Label", info.label.clone()),
        ("Position", format_point(info.position)),
        ("Size", format!("{:.2}", info.size)),
    ];
    html! {<div style={panel_style}>
        <div style="font-weight:600; font-size:15px; margin-bottom:8px; display:flex; justify-content:space-between; align-items:center; gap:8px;">
            <span>{ format!("{}: {}", info.category.label(), info.label) }</span>
            <button onclick={close_cb} style="padding:0 6px;">{"×"}</button>
        </div>
        { for rows.into_iter().map(|(k, v)| html!{
            <div style={stat_row_style}>
                <span style={stat_label_style}>{ k }</span>
                <span style={stat_value_style}>{ v }</span>
            </div>
        }) }
    </div>}
}
