use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use super::{
    camera_controls::CameraControls, controls_panel::ControlsPanel, hud::Hud,
    inspect_panel::InspectPanel, legend_panel::LegendPanel, list_panel::ListPanel,
    stats_panel::StatsPanel,
};
use crate::config::{FALLBACK_HEIGHT, FALLBACK_WIDTH, FLASH_MS, PAN_STEP};
use crate::model::{MapSnapshot, Point};
use crate::render::{build_frame, hud_text, paint};
use crate::state::{HoverTarget, Inspection, ListPanels, PanelKind, Replay, ReplayStep, ViewState};
use crate::util::{clog, cwarn, format_point};

type DrawFn = Rc<dyn Fn()>;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub snapshot: Option<Rc<MapSnapshot>>,
}

fn canvas_size(canvas_ref: &NodeRef) -> (f64, f64) {
    canvas_ref
        .cast::<HtmlCanvasElement>()
        .map(|c| (c.width() as f64, c.height() as f64))
        .unwrap_or((FALLBACK_WIDTH, FALLBACK_HEIGHT))
}

// Clone the closure out first so drawing never overlaps a borrow of the cell.
fn redraw(draw_ref: &RefCell<Option<DrawFn>>) {
    let f = draw_ref.borrow().clone();
    if let Some(f) = f {
        f();
    }
}

// Applies `f` to the view and mirrors a hover change into the overlay state.
fn update_view<R>(
    view: &RefCell<ViewState>,
    hovered: &UseStateHandle<Option<HoverTarget>>,
    f: impl FnOnce(&mut ViewState) -> R,
) -> R {
    let (out, change) = {
        let mut v = view.borrow_mut();
        let before = v.hovered.clone();
        let out = f(&mut v);
        let change = (v.hovered != before).then(|| v.hovered.clone());
        (out, change)
    };
    if let Some(h) = change {
        hovered.set(h);
    }
    out
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let view = use_mut_ref(ViewState::default);
    let replay = use_mut_ref(Replay::default);
    let snapshot_ref = use_mut_ref(|| props.snapshot.clone());
    let draw_ref = use_mut_ref(|| None::<DrawFn>);
    let replay_kick = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let flash_timer = use_mut_ref(|| None::<Timeout>);
    let panels = use_state(ListPanels::default);
    // Mirrors of view state that the overlay components render from
    let hovered = use_state(|| None::<HoverTarget>);
    let inspected = use_state(|| None::<Inspection>);
    let replaying = use_state(|| false);

    // Main mount effect (canvas, events, replay frame loop)
    {
        let canvas_ref = canvas_ref.clone();
        let view = view.clone();
        let replay = replay.clone();
        let snapshot_ref = snapshot_ref.clone();
        let draw_ref_setup = draw_ref.clone();
        let replay_kick = replay_kick.clone();
        let hovered_handle = hovered.clone();
        let inspected_handle = inspected.clone();
        let replaying_handle = replaying.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement = canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(FALLBACK_WIDTH);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(FALLBACK_HEIGHT);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            apply_canvas_size();

            // Draw closure
            let draw_closure: DrawFn = {
                let canvas = canvas.clone();
                let view = view.clone();
                let snapshot_ref = snapshot_ref.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        return;
                    };
                    let snap = snapshot_ref.borrow().clone();
                    let frame = build_frame(
                        snap.as_deref(),
                        &view.borrow(),
                        canvas.width() as f64,
                        canvas.height() as f64,
                    );
                    paint(&ctx, &frame);
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();

            // Replay frame loop: one path point per animation frame
            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let frame_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            {
                let frame_cell_loop = frame_cell.clone();
                let raf_id_loop = raf_id.clone();
                let window_loop = window.clone();
                let canvas = canvas.clone();
                let view = view.clone();
                let replay = replay.clone();
                let snapshot_ref = snapshot_ref.clone();
                let draw_ref = draw_ref_setup.clone();
                let hovered_handle = hovered_handle.clone();
                let replaying_handle = replaying_handle.clone();
                *frame_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    *raf_id_loop.borrow_mut() = None;
                    let snap = snapshot_ref.borrow().clone();
                    let path: &[Point] = snap.as_deref().map(|s| s.path.as_slice()).unwrap_or(&[]);
                    let step = replay.borrow_mut().tick(path);
                    match step {
                        ReplayStep::Visit(p) => {
                            let (w, h) = (canvas.width() as f64, canvas.height() as f64);
                            update_view(&view, &hovered_handle, |v| {
                                v.center_on(p, snap.as_deref(), w, h)
                            });
                            redraw(&draw_ref);
                            if let Some(cb) = frame_cell_loop.borrow().as_ref() {
                                if let Ok(id) =
                                    window_loop.request_animation_frame(cb.as_ref().unchecked_ref())
                                {
                                    *raf_id_loop.borrow_mut() = Some(id);
                                }
                            }
                        }
                        ReplayStep::Finished => {
                            clog(&format!("replay finished after {} points", path.len()));
                            replaying_handle.set(false);
                        }
                        ReplayStep::Idle => {}
                    }
                }) as Box<dyn FnMut()>));
            }
            let kick: Rc<dyn Fn()> = {
                let frame_cell = frame_cell.clone();
                let raf_id = raf_id.clone();
                let window = window.clone();
                Rc::new(move || {
                    // a pending frame will pick up the (re)started replay
                    if raf_id.borrow().is_some() {
                        return;
                    }
                    if let Some(cb) = frame_cell.borrow().as_ref() {
                        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id.borrow_mut() = Some(id);
                        }
                    }
                })
            };
            *replay_kick.borrow_mut() = Some(kick);

            // Mouse down
            let mousedown_cb = {
                let view = view.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let p = Point::new(e.offset_x() as f64, e.offset_y() as f64);
                    view.borrow_mut().pointer_down(p);
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Mouse move: pan while dragging, hit-test otherwise
            let mousemove_cb = {
                let view = view.clone();
                let snapshot_ref = snapshot_ref.clone();
                let draw_ref = draw_ref_setup.clone();
                let hovered_handle = hovered_handle.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    let p = Point::new(e.offset_x() as f64, e.offset_y() as f64);
                    let snap = snapshot_ref.borrow().clone();
                    let needs_draw =
                        update_view(&view, &hovered_handle, |v| v.pointer_move(p, snap.as_deref()));
                    if needs_draw {
                        redraw(&draw_ref);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Mouse up anywhere ends a drag
            let mouseup_cb = {
                let view = view.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    view.borrow_mut().pointer_up();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref())
                .ok();

            // Leaving the canvas ends a drag and drops the hover target
            let mouseleave_cb = {
                let view = view.clone();
                let draw_ref = draw_ref_setup.clone();
                let hovered_handle = hovered_handle.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    if update_view(&view, &hovered_handle, ViewState::pointer_leave) {
                        redraw(&draw_ref);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                )
                .ok();

            // Click: inspect the hover target
            let click_cb = {
                let view = view.clone();
                let snapshot_ref = snapshot_ref.clone();
                let inspected_handle = inspected_handle.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    let snap = snapshot_ref.borrow().clone();
                    let inspection = view.borrow_mut().click(snap.as_deref());
                    if let Some(i) = inspection {
                        clog(&format!(
                            "inspect {} '{}' at {} size {:.2}",
                            i.category.label(),
                            i.label,
                            format_point(i.position),
                            i.size
                        ));
                        inspected_handle.set(Some(i));
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                .ok();

            // Keyboard panning
            let keydown_cb = {
                let view = view.clone();
                let snapshot_ref = snapshot_ref.clone();
                let draw_ref = draw_ref_setup.clone();
                let hovered_handle = hovered_handle.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let (dx, dy) = match e.key().as_str() {
                        "ArrowLeft" => (PAN_STEP, 0.0),
                        "ArrowRight" => (-PAN_STEP, 0.0),
                        "ArrowUp" => (0.0, PAN_STEP),
                        "ArrowDown" => (0.0, -PAN_STEP),
                        _ => return,
                    };
                    e.prevent_default();
                    let snap = snapshot_ref.borrow().clone();
                    update_view(&view, &hovered_handle, |v| v.pan(dx, dy, snap.as_deref()));
                    redraw(&draw_ref);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .ok();

            // Resize
            let resize_cb = {
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    apply_canvas_size();
                    redraw(&draw_ref);
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .ok();

            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = canvas.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "mouseleave",
                    mouseleave_cb.as_ref().unchecked_ref(),
                );
                let _ = canvas.remove_event_listener_with_callback(
                    "click",
                    click_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                replay.borrow_mut().cancel();
                if let Some(id) = raf_id.borrow_mut().take() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                // breaks the frame closure's reference to its own cell
                frame_cell.borrow_mut().take();
                replay_kick.borrow_mut().take();
                draw_ref_setup.borrow_mut().take();
            }
        });
    }

    // Effect: new snapshot arrives
    {
        let canvas_ref = canvas_ref.clone();
        let view = view.clone();
        let replay = replay.clone();
        let snapshot_ref = snapshot_ref.clone();
        let draw_ref = draw_ref.clone();
        let panels = panels.clone();
        let hovered = hovered.clone();
        let replaying = replaying.clone();
        use_effect_with(props.snapshot.clone(), move |snap| {
            *snapshot_ref.borrow_mut() = snap.clone();
            let (w, h) = canvas_size(&canvas_ref);
            update_view(&view, &hovered, |v| {
                // object indices refer to the previous snapshot
                v.flash = None;
                match snap {
                    Some(s) if !v.initialized => v.center_initial(s, w, h),
                    _ => {
                        v.hovered = None;
                        v.refresh_hover(snap.as_deref());
                    }
                }
            });
            if replay.borrow().is_running() {
                cwarn(&format!(
                    "snapshot replaced during replay; stopping at point {}",
                    replay.borrow().index()
                ));
                replay.borrow_mut().cancel();
                replaying.set(false);
            }
            let mut p = (*panels).clone();
            p.refresh(snap.as_deref());
            if p != *panels {
                panels.set(p);
            }
            redraw(&draw_ref);
            || ()
        });
    }

    // View mutations triggered by buttons; redraw only when the offset changed
    let view_action = |action: fn(&mut ViewState, Option<&MapSnapshot>, f64, f64) -> bool| {
        let view = view.clone();
        let snapshot_ref = snapshot_ref.clone();
        let canvas_ref = canvas_ref.clone();
        let draw_ref = draw_ref.clone();
        let hovered = hovered.clone();
        Callback::from(move |_: ()| {
            let snap = snapshot_ref.borrow().clone();
            let (w, h) = canvas_size(&canvas_ref);
            let changed = update_view(&view, &hovered, |v| action(v, snap.as_deref(), w, h));
            if changed {
                redraw(&draw_ref);
            }
        })
    };
    let on_show_start = view_action(ViewState::show_start);
    let on_show_end = view_action(ViewState::show_end);
    let on_center_rover = view_action(ViewState::center_rover);

    let on_pan = {
        let view = view.clone();
        let snapshot_ref = snapshot_ref.clone();
        let draw_ref = draw_ref.clone();
        let hovered = hovered.clone();
        Callback::from(move |(dx, dy): (f64, f64)| {
            let snap = snapshot_ref.borrow().clone();
            update_view(&view, &hovered, |v| v.pan(dx, dy, snap.as_deref()));
            redraw(&draw_ref);
        })
    };

    let on_replay = {
        let replay = replay.clone();
        let snapshot_ref = snapshot_ref.clone();
        let replay_kick = replay_kick.clone();
        let replaying = replaying.clone();
        Callback::from(move |_: ()| {
            let Some(snap) = snapshot_ref.borrow().clone() else {
                return;
            };
            replay.borrow_mut().start();
            replaying.set(true);
            clog(&format!("replay started over {} points", snap.path.len()));
            let kick = replay_kick.borrow().clone();
            if let Some(kick) = kick {
                kick();
            }
        })
    };

    let toggle = |kind: PanelKind| {
        let panels = panels.clone();
        let snapshot_ref = snapshot_ref.clone();
        Callback::from(move |_: ()| {
            let snap = snapshot_ref.borrow().clone();
            let mut p = (*panels).clone();
            p.toggle(kind, snap.as_deref());
            panels.set(p);
        })
    };

    // Row click: recenter, redraw, then flash the object briefly
    let select = |kind: PanelKind| {
        let view = view.clone();
        let snapshot_ref = snapshot_ref.clone();
        let canvas_ref = canvas_ref.clone();
        let draw_ref = draw_ref.clone();
        let flash_timer = flash_timer.clone();
        let hovered = hovered.clone();
        Callback::from(move |index: usize| {
            let snap = snapshot_ref.borrow().clone();
            let (w, h) = canvas_size(&canvas_ref);
            let selected = update_view(&view, &hovered, |v| {
                v.select(snap.as_deref(), kind.category(), index, w, h)
            });
            if !selected {
                return;
            }
            redraw(&draw_ref);
            let view = view.clone();
            let draw_ref = draw_ref.clone();
            // replacing the handle drops (cancels) any earlier timeout
            *flash_timer.borrow_mut() = Some(Timeout::new(FLASH_MS, move || {
                view.borrow_mut().flash = None;
                redraw(&draw_ref);
            }));
        })
    };

    let on_close_inspect = {
        let view = view.clone();
        let inspected = inspected.clone();
        Callback::from(move |_: ()| {
            view.borrow_mut().inspected = None;
            inspected.set(None);
        })
    };

    let hover_text = (*hovered).as_ref().and_then(|h| {
        let obj = props.snapshot.as_ref()?.object(h.category, h.index)?;
        Some(format!(
            "{} {} at {}",
            h.category.label(),
            obj.object,
            format_point(obj.position)
        ))
    });

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
        <canvas ref={canvas_ref.clone()} style="display:block; cursor:grab;"></canvas>
        <Hud text={hud_text(props.snapshot.as_deref())} />
        <ControlsPanel
            replaying={*replaying}
            on_show_start={on_show_start}
            on_show_end={on_show_end}
            on_replay={on_replay}
            on_toggle_resources={toggle(PanelKind::Resources)}
            on_toggle_obstacles={toggle(PanelKind::Obstacles)}
        />
        <ListPanel
            kind={PanelKind::Resources}
            open={panels.get(PanelKind::Resources).open}
            rows={panels.get(PanelKind::Resources).rows.clone()}
            on_toggle={toggle(PanelKind::Resources)}
            on_select={select(PanelKind::Resources)}
            top="12px"
        />
        <ListPanel
            kind={PanelKind::Obstacles}
            open={panels.get(PanelKind::Obstacles).open}
            rows={panels.get(PanelKind::Obstacles).rows.clone()}
            on_toggle={toggle(PanelKind::Obstacles)}
            on_select={select(PanelKind::Obstacles)}
            top="calc(35vh + 40px)"
        />
        <StatsPanel summary={props.snapshot.as_ref().map(|s| s.summary())} />
        <LegendPanel hovered={(*hovered).as_ref().map(|h| h.category)} hover_text={hover_text} />
        <CameraControls on_pan={on_pan} on_center_rover={on_center_rover} step={PAN_STEP} />
        <InspectPanel inspection={(*inspected).clone()} on_close={on_close_inspect} />
    </div>}
}
