use super::legend::LegendRow;
use crate::config::{
    HEADING_COLOR, MAST_COLOR, OBSTACLE_COLOR, PATH_COLOR, RESOURCE_COLOR, ROVER_COLOR,
};
use crate::model::ObjectCategory;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    /// Category of the hover target, if any.
    pub hovered: Option<ObjectCategory>,
    pub hover_text: Option<String>,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    let hl = |c: ObjectCategory| props.hovered == Some(c);
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        { if let Some(t) = &props.hover_text { html!{<div style="font-size:11px; color:#8b949e; margin-bottom:6px;">{t}</div>} } else { html!{} } }
        <LegendRow color={PATH_COLOR} label="Path" />
        <LegendRow color={RESOURCE_COLOR} label="Resource" highlight={hl(ObjectCategory::Resource)} />
        <LegendRow color={OBSTACLE_COLOR} label="Obstacle" highlight={hl(ObjectCategory::Obstacle)} />
        <LegendRow color={ROVER_COLOR} label="Rover" />
        <LegendRow color={HEADING_COLOR} label="Heading" />
        <LegendRow color={MAST_COLOR} label="Mast" />
    </div>}
}
