use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tripcast_core::{GeoPoint, MapConfig, MapSelection, Pick};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

use crate::dom;
use crate::leaflet::{self, LatLng, Map, Marker, MouseEvent, TileLayer};

/// Owns the Leaflet map, the markers placed on it and the departure/arrival
/// selection. Built once when the map page mounts.
#[derive(Clone)]
pub struct MapController {
    map: Map,
    markers: Rc<RefCell<Vec<Marker>>>,
    selection: RwSignal<MapSelection>,
}

impl MapController {
    pub fn mount(container_id: &str, config: &MapConfig, selection: RwSignal<MapSelection>) -> Self {
        let map = Map::new(container_id);
        map.set_view(&LatLng::from(config.center), config.zoom);

        TileLayer::new(
            &config.tile_url,
            &leaflet::options(&[
                ("attribution", JsValue::from_str(&config.attribution)),
                ("maxZoom", JsValue::from(19)),
            ]),
        )
        .add_to(&map);

        let controller = Self {
            map,
            markers: Rc::new(RefCell::new(Vec::with_capacity(2))),
            selection,
        };

        let handler = controller.clone();
        let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
            handler.handle_click(GeoPoint::from(&e.latlng()));
        }) as Box<dyn FnMut(MouseEvent)>);

        controller.map.on("click", on_click.as_ref().unchecked_ref());
        on_click.forget();

        controller
    }

    fn handle_click(&self, point: GeoPoint) {
        let mut selection = self.selection.get_untracked();

        match selection.click(point) {
            Ok(pick) => {
                self.selection.set(selection);
                self.place_marker(pick);
            }
            Err(e) => dom::alert(&e.to_string()),
        }
    }

    fn place_marker(&self, pick: Pick) {
        let marker = Marker::new(&LatLng::from(pick.point()));
        marker.bind_tooltip(
            pick.label(),
            &leaflet::options(&[
                ("permanent", JsValue::TRUE),
                ("direction", JsValue::from_str("top")),
            ]),
        );
        marker.add_to(&self.map);
        dom::log_info(&format!("{} set to {}", pick.label(), pick.point()));
        self.markers.borrow_mut().push(marker);
    }
}
