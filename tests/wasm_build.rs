//! WASM build test
//!
//! Checks that the module loads in a browser and the exported API works.

use masonry_gallery_wasm::api::{columns_for_viewport, compute_grid_js};
use masonry_gallery_wasm::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn items_js() -> JsValue {
    let items = vec![
        GalleryItem::new("1", "data:,", "https://example.com/1", 400.0),
        GalleryItem::new("2", "data:,", "https://example.com/2", 250.0),
        GalleryItem::new("3", "data:,", "https://example.com/3", 600.0),
    ];
    serde_wasm_bindgen::to_value(&items).unwrap()
}

fn container(id: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    element.set_attribute("style", "width: 900px; position: relative").unwrap();
    document.body().unwrap().append_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn test_columns_for_width() {
    assert_eq!(columns_for_viewport(1600.0), 3);
    assert_eq!(columns_for_viewport(700.0), 2);
    assert_eq!(columns_for_viewport(320.0), 1);
}

#[wasm_bindgen_test]
fn test_compute_grid_export() {
    let result = compute_grid_js(items_js(), 2, 1000.0).unwrap();
    let max_height = js_sys::Reflect::get(&result, &JsValue::from_str("maxHeight")).unwrap();
    assert_eq!(max_height.as_f64(), Some(850.0));
}

#[wasm_bindgen_test]
fn test_compute_grid_rejects_bad_items() {
    let bad = serde_wasm_bindgen::to_value(&vec![GalleryItem::new("1", "a.jpg", "", -5.0)]).unwrap();
    assert!(compute_grid_js(bad, 2, 1000.0).is_err());
}

#[wasm_bindgen_test]
fn test_compute_grid_rejects_unusable_width() {
    assert!(compute_grid_js(items_js(), 2, 0.0).is_err());
    assert!(compute_grid_js(items_js(), 2, -10.0).is_err());
    assert!(compute_grid_js(items_js(), 2, f64::NAN).is_err());
}

#[wasm_bindgen_test]
fn test_gallery_requires_container() {
    let options = js_sys::JSON::parse(r#"{"animator":"builtin"}"#).unwrap();
    assert!(MasonryGallery::new("no-such-gallery", items_js(), options).is_err());
}

#[wasm_bindgen_test]
fn test_gsap_gallery_requires_gsap() {
    container("gsap-gallery");
    assert!(MasonryGallery::new("gsap-gallery", items_js(), JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn test_builtin_gallery_lifecycle() {
    container("builtin-gallery");
    let options = js_sys::JSON::parse(r#"{"animator":"builtin","stagger":0}"#).unwrap();
    let mut gallery = MasonryGallery::new("builtin-gallery", items_js(), options).unwrap();
    assert_eq!(gallery.phase().unwrap().as_string().as_deref(), Some("loading"));

    gallery.destroy();
    assert!(gallery.phase().unwrap().is_null());
}

#[wasm_bindgen_test]
fn test_init_gallery_ignores_missing_container() {
    assert!(init_gallery("not-on-this-page".to_string(), items_js(), JsValue::UNDEFINED).is_ok());
}
