use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlInputElement};

use super::render::RenderContext;
use crate::bridge::{Control, ControlId};

/// Hook every control present on the page to the render context. Missing
/// controls are skipped; each present one is applied once up front so the
/// shader starts from the page's initial values.
pub fn bind(document: &Document, ctx: &Rc<RefCell<RenderContext>>) -> Result<(), JsValue> {
    for id in ControlId::ALL {
        let Some(element) = document.get_element_by_id(id.element_id()) else {
            log::debug!("no #{} control on page", id.element_id());
            continue;
        };
        let input = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => input,
            Err(_) => {
                log::warn!("#{} is not an <input>, ignoring", id.element_id());
                continue;
            }
        };

        apply(ctx, id, &input.value());

        let closure = {
            let ctx = ctx.clone();
            let input = input.clone();
            Closure::wrap(Box::new(move || apply(&ctx, id, &input.value())) as Box<dyn FnMut()>)
        };
        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn apply(ctx: &RefCell<RenderContext>, id: ControlId, raw: &str) {
    match Control::parse(id, raw) {
        Ok(control) => ctx.borrow_mut().on_control(control),
        Err(e) => log::warn!("{e}"),
    }
}
