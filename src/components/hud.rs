use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub text: String,
}

#[function_component(Hud)]
pub fn hud(props: &HudProps) -> Html {
    html! {<div id="hud" style="position:absolute; top:12px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:6px 12px; font-size:14px; font-variant-numeric:tabular-nums; white-space:nowrap;">
        { props.text.clone() }
    </div>}
}
