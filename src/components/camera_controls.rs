use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    /// Emits the (dx, dy) to add to the view offset.
    pub on_pan: Callback<(f64, f64)>,
    pub on_center_rover: Callback<()>,
    pub step: f64,
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let pan = |dx: f64, dy: f64| {
        let cb = props.on_pan.clone();
        Callback::from(move |_: MouseEvent| cb.emit((dx, dy)))
    };
    let s = props.step;
    let cc = {
        let cb = props.on_center_rover.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; left:50%; bottom:12px; transform:translateX(-50%); background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button onclick={pan(s, 0.0)}> {"←"} </button>
        <button onclick={pan(0.0, s)}> {"↑"} </button>
        <button onclick={pan(0.0, -s)}> {"↓"} </button>
        <button onclick={pan(-s, 0.0)}> {"→"} </button>
        <span style="width:8px;"></span>
        <button onclick={cc}> {"Center rover"} </button>
    </div>}
}
