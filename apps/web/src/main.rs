use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use outing_web::app::{actions, App};
use outing_web::ui::dom::DomSurfaces;
use outing_web::{geo, net};

fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let app = Rc::new(RefCell::new(App::new()));
    let surfaces = Rc::new(DomSurfaces::new(&document)?);

    let on_locate = {
        let app = Rc::clone(&app);
        let surfaces = Rc::clone(&surfaces);
        Closure::<dyn FnMut()>::new(move || match geo::device_geolocation() {
            Some(geolocation) => {
                let app = Rc::clone(&app);
                let surfaces = Rc::clone(&surfaces);
                spawn_local(async move {
                    let position = geo::request_position(&geolocation);
                    actions::run_locate(app, surfaces, position).await;
                });
            }
            None => actions::geolocation_unsupported(surfaces.as_ref()),
        })
    };
    surfaces
        .locate_button()
        .add_event_listener_with_callback("click", on_locate.as_ref().unchecked_ref())?;
    on_locate.forget();

    let on_submit = {
        let app = Rc::clone(&app);
        let surfaces = Rc::clone(&surfaces);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let form = surfaces.read_form();
            spawn_local(actions::run_submit(
                Rc::clone(&app),
                Rc::clone(&surfaces),
                form,
                net::post_suggest,
            ));
        })
    };
    surfaces
        .form()
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}
