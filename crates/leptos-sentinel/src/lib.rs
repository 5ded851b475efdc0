//! Leptos Sentinel Utilities
//!
//! Infinite-scroll helper for Leptos: watches a sentinel node with an
//! `IntersectionObserver` and fires a callback when it scrolls into view.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Margin below the viewport that already counts as visible
const ROOT_MARGIN: &str = "0px 0px 200px 0px";

/// Observe `sentinel` and call `on_visible` each time it enters the viewport.
///
/// The observer is re-armed whenever `rearm` changes (for example the number
/// of rendered rows), so a sentinel that is still on screen after a page
/// was appended reports again. It is disconnected when the calling component
/// unmounts.
pub fn use_sentinel<F>(sentinel: NodeRef<leptos::html::Div>, rearm: Signal<usize>, on_visible: F)
where
    F: Fn() + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                on_visible();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(ROOT_MARGIN);
    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            tracing::error!("IntersectionObserver unavailable: {:?}", err);
            return;
        }
    };

    // The callback must outlive every notification, so it is dropped only
    // after the observer is disconnected.
    let watch = StoredValue::new_local(Some(Watch { observer, _callback: callback }));

    Effect::new(move |_| {
        let _ = rearm.get();
        let Some(node) = sentinel.get() else { return };
        watch.with_value(|watch| {
            if let Some(watch) = watch {
                watch.observer.disconnect();
                watch.observer.observe(&node);
            }
        });
    });

    on_cleanup(move || {
        if let Some(Some(watch)) = watch.try_update_value(Option::take) {
            watch.observer.disconnect();
        }
    });
}

struct Watch {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}
