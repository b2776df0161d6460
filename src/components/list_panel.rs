use crate::state::PanelKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ListPanelProps {
    pub kind: PanelKind,
    pub open: bool,
    pub rows: Vec<String>,
    pub on_toggle: Callback<()>,
    /// Emits the zero-based row index.
    pub on_select: Callback<usize>,
    /// CSS `top` of the panel, so both lists can be open at once.
    pub top: &'static str,
}

#[function_component]
pub fn ListPanel(props: &ListPanelProps) -> Html {
    if !props.open {
        return html! {};
    }
    let close_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let body = if props.rows.is_empty() {
        html! { <div style="font-size:12px; color:#8b949e;">{ props.kind.placeholder() }</div> }
    } else {
        props
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cb = props.on_select.clone();
                let onclick = Callback::from(move |_| cb.emit(i));
                html! { <li key={i} {onclick} style="cursor:pointer; padding:2px 4px; border-radius:4px;">{ row.clone() }</li> }
            })
            .collect::<Html>()
    };
    html! {<div style={format!("position:absolute; left:12px; top:{}; background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:220px; max-height:35vh; overflow-y:auto; font-size:13px;", props.top)}>
        <div style="display:flex; justify-content:space-between; align-items:center; font-weight:600; margin-bottom:6px;">
            <span>{ props.kind.title() }</span>
            <button onclick={close_cb} style="padding:0 6px;">{"×"}</button>
        </div>
        { if props.rows.is_empty() { body } else { html!{ <ul style="list-style:none; margin:0; padding:0;">{ body }</ul> } } }
    </div>}
}
