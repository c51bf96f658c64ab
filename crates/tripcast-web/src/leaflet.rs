//! Minimal bindings to the Leaflet global `L`, loaded by a `<script>` tag in
//! `index.html`. Only what the map page touches is bound.

use js_sys::{Function, Object, Reflect};
use tripcast_core::GeoPoint;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L)]
    #[derive(Debug, Clone)]
    pub type Map;

    /// `new L.Map(id)` on the element with that ID.
    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &LatLng, zoom: u8) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &Function) -> Map;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L)]
    #[derive(Debug, Clone)]
    pub type LatLng;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L)]
    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L)]
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new(at: &LatLng) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    pub fn bind_tooltip(this: &Marker, content: &str, options: &JsValue) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    /// Leaflet's mouse event; only the clicked position is read.
    #[derive(Debug, Clone)]
    pub type MouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MouseEvent) -> LatLng;
}

impl From<GeoPoint> for LatLng {
    fn from(p: GeoPoint) -> Self {
        LatLng::new(p.lat, p.lng)
    }
}

impl From<&LatLng> for GeoPoint {
    fn from(ll: &LatLng) -> Self {
        GeoPoint::new(ll.lat(), ll.lng())
    }
}

/// Builds a plain JS options object from key/value pairs.
pub fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}
