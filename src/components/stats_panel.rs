use crate::model::MapSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub summary: Option<MapSummary>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let Some(s) = props.summary else {
        return html! {};
    };
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; bottom:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#2ea043;", label_style)}>{"Resources"}</span>
                <span style={format!("{} color:#2ea043;", value_style)}>{ s.resources.to_string() }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f0883e;", label_style)}>{"Obstacles"}</span>
                <span style={format!("{} color:#f0883e;", value_style)}>{ s.obstacles.to_string() }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Odometer"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format!("{:.2}", s.odometer) }</span>
            </div>
        </div>
    }
}
