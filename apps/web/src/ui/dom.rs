//! DOM-backed implementation of the [`SuggestUi`] contract. Binds the
//! element ids supplied by `index.html` and owns the toast dismiss timer.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, FormData, HtmlButtonElement, HtmlFormElement};

use crate::domain::{Candidate, Card};
use crate::payload::FormSnapshot;
use crate::ui::{NoticeKind, SuggestUi};

/// Notifications auto-dismiss after this long.
pub const TOAST_DISMISS_MS: i32 = 4_000;

const HIDDEN_CLASS: &str = "hidden";

pub struct DomSurfaces {
    document: Document,
    cards: Element,
    toast: Element,
    geo_status: Element,
    addr_fallback: Element,
    global_loading: Element,
    locate_button: HtmlButtonElement,
    submit_button: HtmlButtonElement,
    form: HtmlFormElement,
    toast_timer: RefCell<Option<DismissTimer>>,
}

/// Pending auto-dismiss. The closure has to stay alive until the timeout
/// fires or the timer is replaced.
struct DismissTimer {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl DomSurfaces {
    pub fn new(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            cards: lookup(document, "cards")?,
            toast: lookup(document, "toast")?,
            geo_status: lookup(document, "geoStatus")?,
            addr_fallback: lookup(document, "addrFallback")?,
            global_loading: lookup(document, "globalLoading")?,
            locate_button: lookup(document, "btnLocate")?.dyn_into()?,
            submit_button: lookup(document, "btnSubmit")?.dyn_into()?,
            form: lookup(document, "planForm")?.dyn_into()?,
            toast_timer: RefCell::new(None),
        })
    }

    pub fn locate_button(&self) -> &HtmlButtonElement {
        &self.locate_button
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Raw field values as the user typed them; parsing happens in the
    /// payload builder.
    pub fn read_form(&self) -> FormSnapshot {
        match FormData::new_with_form(&self.form) {
            Ok(data) => FormSnapshot {
                mood: field(&data, "mood"),
                radius_km: field(&data, "radius_km"),
                indoor: field(&data, "indoor"),
                budget: field(&data, "budget"),
                lat: field(&data, "lat"),
                lon: field(&data, "lon"),
            },
            Err(error) => {
                console::error_1(&error);
                FormSnapshot::default()
            }
        }
    }

    fn make_card(&self, card: &Card) -> Result<Element, JsValue> {
        let root = self.document.create_element("div")?;
        root.set_class_name("card");

        let title = self.document.create_element("h2")?;
        title.set_class_name("card__title");
        title.set_text_content(Some(&card.title));

        let body = self.document.create_element("div")?;
        body.set_class_name("card__body");
        body.set_text_content(Some(&card.body));

        let meta = self.document.create_element("div")?;
        meta.set_class_name("card__meta");
        meta.set_text_content(Some(&format!("#{}", card.index)));

        root.append_child(&title)?;
        root.append_child(&body)?;
        root.append_child(&meta)?;
        Ok(root)
    }

    fn try_render_cards(&self, cards: &[Card], banner: Option<&str>) -> Result<(), JsValue> {
        self.cards.set_inner_html("");
        if let Some(hint) = banner {
            let notice = self.document.create_element("div")?;
            notice.set_class_name("fallback-notice");
            notice.set_text_content(Some(hint));
            self.cards.append_child(&notice)?;
        }
        for card in cards {
            self.cards.append_child(&self.make_card(card)?.into())?;
        }
        Ok(())
    }

    fn try_render_candidates(&self, candidates: &[Candidate]) -> Result<(), JsValue> {
        let section = self.document.create_element("div")?;
        section.set_class_name("places-section");

        let heading = self.document.create_element("h3")?;
        heading.set_text_content(Some("Nearby places"));
        section.append_child(&heading)?;

        for candidate in candidates {
            let block = self.document.create_element("div")?;
            block.set_class_name("places-candidate");

            let name = self.document.create_element("div")?;
            name.set_class_name("places-candidate__name");
            name.set_text_content(Some(&candidate.name));
            block.append_child(&name)?;

            for place in candidate.places() {
                let row = self.document.create_element("div")?;
                row.set_class_name("place");

                let label = self.document.create_element("span")?;
                label.set_text_content(Some(&place.name));

                let distance = self.document.create_element("span")?;
                distance.set_class_name("place__distance");
                distance.set_text_content(Some(&format!("({} km)", place.distance_km)));

                let link = self.document.create_element("a")?;
                link.set_attribute("href", &place.osm_url)?;
                link.set_attribute("target", "_blank")?;
                link.set_attribute("rel", "noopener")?;
                link.set_text_content(Some("map"));

                row.append_child(&label)?;
                row.append_child(&distance)?;
                row.append_child(&link)?;
                block.append_child(&row)?;
            }
            section.append_child(&block)?;
        }
        self.cards.append_child(&section)?;
        Ok(())
    }

    fn try_render_skeleton(&self, count: usize) -> Result<(), JsValue> {
        self.cards.set_inner_html("");
        for _ in 0..count {
            let placeholder = self.document.create_element("div")?;
            placeholder.set_class_name("card skeleton");
            self.cards.append_child(&placeholder)?;
        }
        Ok(())
    }

    /// Replaces any pending dismiss timer with a fresh one.
    fn arm_dismiss_timer(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        if let Some(previous) = self.toast_timer.borrow_mut().take() {
            window.clear_timeout_with_handle(previous.handle);
        }

        let toast = self.toast.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let _ = toast.class_list().add_1(HIDDEN_CLASS);
        });
        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TOAST_DISMISS_MS,
        )?;
        *self.toast_timer.borrow_mut() = Some(DismissTimer {
            handle,
            _closure: closure,
        });
        Ok(())
    }
}

impl SuggestUi for DomSurfaces {
    fn render_skeleton(&self, count: usize) {
        if let Err(error) = self.try_render_skeleton(count) {
            console::error_1(&error);
        }
    }

    fn clear_cards(&self) {
        self.cards.set_inner_html("");
    }

    fn render_cards(&self, cards: &[Card], banner: Option<&str>) {
        if let Err(error) = self.try_render_cards(cards, banner) {
            console::error_1(&error);
        }
    }

    fn render_candidates(&self, candidates: &[Candidate]) {
        if let Err(error) = self.try_render_candidates(candidates) {
            console::error_1(&error);
        }
    }

    fn set_loading(&self, visible: bool) {
        set_visible(&self.global_loading, visible);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_button.set_disabled(!enabled);
    }

    fn set_locate_enabled(&self, enabled: bool) {
        self.locate_button.set_disabled(!enabled);
    }

    fn show_geo_status(&self, visible: bool) {
        set_visible(&self.geo_status, visible);
    }

    fn show_addr_fallback(&self, visible: bool) {
        set_visible(&self.addr_fallback, visible);
    }

    fn notify(&self, message: &str, kind: NoticeKind) {
        self.toast.set_text_content(Some(message));
        // Setting the class also drops `hidden`, which shows the toast.
        self.toast.set_class_name(match kind {
            NoticeKind::Error => "toast toast--error",
            NoticeKind::Info => "toast",
        });
        if let Err(error) = self.arm_dismiss_timer() {
            console::error_1(&error);
        }
    }
}

fn lookup(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

fn field(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

fn set_visible(element: &Element, visible: bool) {
    let class_list = element.class_list();
    let result = if visible {
        class_list.remove_1(HIDDEN_CLASS)
    } else {
        class_list.add_1(HIDDEN_CLASS)
    };
    if let Err(error) = result {
        console::error_1(&error);
    }
}
