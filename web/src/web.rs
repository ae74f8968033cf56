use std::cell::RefCell;
use std::rc::Rc;

use bookmark_core::{CoreError, DomError, Page, PageEvent, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ResizeObserver, ResizeObserverEntry};

mod console;
mod document;

use console::Console;
use document::WebDocument;

type SharedPage = Rc<RefCell<Page<WebDocument>>>;

#[wasm_bindgen(start)]
pub fn start() {
    bookmark_core::init_logging(Console);

    if let Err(e) = mount() {
        tracing::error!(error = %e, "Page mount failed");
        wasm_bindgen::throw_str(&e.to_string());
    }
}

fn mount() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| host_error("no window"))?;
    let document = window.document().ok_or_else(|| host_error("no document"))?;
    let body = document.body().ok_or_else(|| host_error("no body"))?;

    let page = Page::mount(WebDocument::new(document))?;
    let trigger = page.menu().trigger().clone();
    let tabs: Vec<Element> = page.tabs().tabs().cloned().collect();
    let page: SharedPage = Rc::new(RefCell::new(page));

    on_click(&trigger, &page, |_| PageEvent::MenuClick)?;
    for tab in &tabs {
        on_click(tab, &page, PageEvent::TabClick)?;
    }
    observe_width(&body, &page)?;

    tracing::debug!(tabs = tabs.len(), "Listeners wired");
    Ok(())
}

fn host_error(message: impl Into<String>) -> CoreError {
    CoreError::Dom(DomError::Host(message.into()))
}

fn dispatch(page: &SharedPage, event: PageEvent<Element>) {
    // Handlers run to completion; a re-entrant event has nothing consistent to act on
    let Ok(mut page) = page.try_borrow_mut() else {
        tracing::warn!(?event, "Re-entrant event dropped");
        return;
    };

    match page.dispatch(event) {
        Ok(outcome) => tracing::trace!(?outcome, "Event handled"),
        Err(e) => tracing::warn!(error = %e, "Event ignored"),
    }
}

fn on_click<F>(element: &Element, page: &SharedPage, event: F) -> Result<()>
where
    F: Fn(Element) -> PageEvent<Element> + 'static,
{
    let page = Rc::clone(page);
    let handler = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        dispatch(&page, event(target));
    }) as Box<dyn FnMut(_)>);

    element
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| host_error(format!("click listener: {e:?}")))?;
    handler.forget();
    Ok(())
}

fn observe_width(root: &HtmlElement, page: &SharedPage) -> Result<()> {
    let page = Rc::clone(page);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: ResizeObserver| {
            let Ok(entry) = entries.get(0).dyn_into::<ResizeObserverEntry>() else {
                return;
            };
            let width = u32::try_from(entry.target().client_width()).unwrap_or(0);
            dispatch(&page, PageEvent::Resize { width });
        },
    ) as Box<dyn FnMut(js_sys::Array, ResizeObserver)>);

    let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|e| host_error(format!("resize observer: {e:?}")))?;
    observer.observe(root);
    callback.forget();
    Ok(())
}
