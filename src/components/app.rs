use std::rc::Rc;

use yew::prelude::*;

use super::map_view::MapView;
use crate::config::MAP_URL;
use crate::loader::fetch_snapshot;
use crate::model::MapSnapshot;
use crate::util::{cerror, clog};

#[function_component(App)]
pub fn app() -> Html {
    let snapshot = use_state(|| None::<Rc<MapSnapshot>>);

    // One-shot load; a failure leaves the view on "Loading map data..."
    {
        let snapshot = snapshot.clone();
        use_effect_with((), move |_| {
            clog(&format!("fetching {}", MAP_URL));
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_snapshot(MAP_URL).await {
                    Ok(snap) => {
                        let s = snap.summary();
                        clog(&format!(
                            "map loaded: {} path points, {} resources, {} obstacles",
                            snap.path.len(),
                            s.resources,
                            s.obstacles
                        ));
                        snapshot.set(Some(Rc::new(snap)));
                    }
                    Err(e) => cerror(&format!("Error loading map data: {}", e)),
                }
            });
            || ()
        });
    }

    html! { <MapView snapshot={(*snapshot).clone()} /> }
}
