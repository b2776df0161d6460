use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub replaying: bool,
    pub on_show_start: Callback<()>,
    pub on_show_end: Callback<()>,
    pub on_replay: Callback<()>,
    pub on_toggle_resources: Callback<()>,
    pub on_toggle_obstacles: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_show_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let end_cb = {
        let cb = props.on_show_end.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let replay_cb = {
        let cb = props.on_replay.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let resources_cb = {
        let cb = props.on_toggle_resources.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let obstacles_cb = {
        let cb = props.on_toggle_obstacles.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let replay_label = if props.replaying { "Restart replay" } else { "Replay route" };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:160px; display:flex; flex-direction:column; gap:6px;">
        <button onclick={start_cb}>{"Show start"}</button>
        <button onclick={end_cb}>{"Show end"}</button>
        <button onclick={replay_cb}>{ replay_label }</button>
        <span style="height:4px;"></span>
        <button onclick={resources_cb}>{"Resources"}</button>
        <button onclick={obstacles_cb}>{"Obstacles"}</button>
        <div style="font-size:11px; opacity:0.7;">{"Drag or arrow keys to pan"}</div>
    </div>}
}
