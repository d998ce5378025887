use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::tracker::{Section, VisibilityEntry};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Keeps the observer and the JS closure it calls alive together.
struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(targets: &[Element], threshold: f64, callback: ObserverCallback) -> Option<Observation> {
    if targets.is_empty() {
        return None;
    }
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    for target in targets {
        observer.observe(target);
    }
    Some(Observation { observer, _callback: callback })
}

/// Reports visibility batches for every section anchor present in the document.
/// The observer is disconnected when the calling component unmounts.
#[hook]
pub fn use_section_observer(threshold: f64, on_batch: Callback<Vec<VisibilityEntry>>) {
    use_effect_with_deps(
        move |threshold| {
            let document = web_sys::window().and_then(|w| w.document());
            let targets: Vec<Element> = document
                .map(|doc| {
                    Section::ALL
                        .iter()
                        .filter_map(|s| doc.get_element_by_id(s.id()))
                        .collect()
                })
                .unwrap_or_default();
            if targets.is_empty() {
                log::warn!("No section anchors found, nav highlight stays static");
            }

            let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
                let batch: Vec<VisibilityEntry> = entries
                    .iter()
                    .filter_map(|value| {
                        let entry: IntersectionObserverEntry = value.dyn_into().ok()?;
                        let section = Section::from_id(&entry.target().id())?;
                        Some(VisibilityEntry::new(
                            section,
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                        ))
                    })
                    .collect();
                on_batch.emit(batch);
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let observation = observe(&targets, *threshold, callback);
            move || drop(observation)
        },
        threshold,
    );
}

/// Fades in `.reveal` blocks the first time they are `threshold` visible.
#[hook]
pub fn use_reveal_on_view(threshold: f64) {
    use_effect_with_deps(
        move |threshold| {
            let mut targets = Vec::new();
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Ok(nodes) = doc.query_selector_all(".reveal") {
                    for i in 0..nodes.length() {
                        if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                            targets.push(el);
                        }
                    }
                }
            }

            let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
                for value in entries.iter() {
                    let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(e) = target.class_list().add_1("is-visible") {
                        log::warn!("Could not reveal #{}: {:?}", target.id(), e);
                    }
                    observer.unobserve(&target);
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>);

            let observation = observe(&targets, *threshold, callback);
            move || drop(observation)
        },
        threshold,
    );
}
