//! Browser host: mounts the widget into the page and wires DOM events to
//! [`WidgetCore`].
//!
//! ARCHITECTURE
//! ============
//! Everything the event closures need sits in one `Shared` value behind an
//! `Rc`. The closures and the mutation observer live in `Bindings`, stored
//! inside `Shared`; that cycle is what keeps the widget alive after
//! `inject()` returns, and destroy breaks it by taking the bindings out.
//! Closures are dropped on the next microtask rather than inline, because
//! destroy usually runs from inside one of them (the close button).

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Date;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlScriptElement, MouseEvent, MutationObserver, MutationObserverInit};

use crate::chat::latest_message;
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::gesture::Point;
use crate::panel::Panel;
use crate::session::QueueSession;
use crate::sync::SyncClient;
use crate::widget::{Action, WidgetCore};

type EventCallback = Closure<dyn FnMut(Event)>;
type MutationCallback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: EventCallback,
}

impl Listener {
    fn detach(&self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::debug!("failed to remove {} listener: {err:?}", self.event);
        }
    }
}

#[derive(Default)]
struct Bindings {
    observer: Option<(MutationObserver, MutationCallback)>,
    listeners: Vec<Listener>,
}

struct Shared {
    core: RefCell<WidgetCore>,
    panel: Panel,
    sync: SyncClient,
    bindings: RefCell<Option<Bindings>>,
}

impl Shared {
    fn run(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Render => self.panel.render(self.core.borrow().session().queue()),
                Action::ScrollToBottom => self.panel.scroll_to_bottom(),
                Action::Push(snapshot) => self.sync.push(snapshot),
                Action::Copy(id) => copy_to_clipboard(&id),
                Action::MovePanel(update) => self.panel.apply(update),
            }
        }
    }

    fn destroy(&self) {
        if !self.core.borrow_mut().destroy() {
            return;
        }
        let bindings = self.bindings.borrow_mut().take();
        if let Some(bindings) = bindings {
            if let Some((observer, _)) = &bindings.observer {
                observer.disconnect();
            }
            for listener in &bindings.listeners {
                listener.detach();
            }
            wasm_bindgen_futures::spawn_local(async move { drop(bindings) });
        }
        self.panel.remove();
        log::info!("queue widget destroyed");
    }
}

fn copy_to_clipboard(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(clipboard) = window.navigator().clipboard() {
        let promise = clipboard.write_text(id);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::debug!("clipboard write failed: {err:?}");
            }
        });
    }
}

fn pointer(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Listener, WidgetError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    Ok(Listener { target: target.clone(), event, callback })
}

fn current_script_src(document: &Document) -> Option<String> {
    document
        .current_script()
        .and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
        .map(|script| script.src())
}

/// Handle to a mounted queue widget.
#[wasm_bindgen]
pub struct QueueWidget {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl QueueWidget {
    /// Tear the widget down, same as the close button. Safe to call twice.
    pub fn destroy(&self) {
        self.shared.destroy();
    }

    /// The current queue as snapshot text.
    #[must_use]
    pub fn snapshot(&self) -> String {
        self.shared.core.borrow().session().snapshot()
    }

    /// Number of queued entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.core.borrow().session().queue().len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[wasm_bindgen(js_name = isDestroyed)]
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.shared.core.borrow().is_destroyed()
    }
}

/// Mount the widget.
///
/// `script_src` is the URL the widget script was loaded from; its query
/// parameters configure the widget. When omitted, `document.currentScript`
/// is used.
///
/// # Errors
///
/// Returns a JS `Error` if the page has no document, head or body, or the
/// panel cannot be built.
#[wasm_bindgen]
pub fn inject(script_src: Option<String>) -> Result<QueueWidget, JsValue> {
    mount(script_src).map_err(JsValue::from)
}

fn mount(script_src: Option<String>) -> Result<QueueWidget, WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
    let document = window.document().ok_or(WidgetError::NoDocument)?;

    let src = script_src.or_else(|| current_script_src(&document));
    let config = WidgetConfig::from_script_src(src.as_deref());
    if console_log::init_with_level(config.log_level).is_err() {
        log::debug!("console logger already installed");
    }

    let core = WidgetCore::new(QueueSession::new()?);
    let panel = Panel::mount(&document)?;
    let sync = SyncClient::new(config.endpoint.clone());
    if !sync.is_configured() {
        log::warn!("no `worker` endpoint configured; queue will not be saved");
    }

    let shared = Rc::new(Shared { core: RefCell::new(core), panel, sync, bindings: RefCell::new(None) });
    let bindings = match bind(&shared, &document, &config) {
        Ok(bindings) => bindings,
        Err(err) => {
            shared.panel.remove();
            return Err(err);
        }
    };
    *shared.bindings.borrow_mut() = Some(bindings);

    if shared.sync.is_configured() {
        let loader = Rc::clone(&shared);
        wasm_bindgen_futures::spawn_local(async move {
            match loader.sync.pull().await {
                Ok(snapshot) => {
                    let actions = loader.core.borrow_mut().on_snapshot_loaded(&snapshot);
                    loader.run(actions);
                }
                Err(err) => log::warn!("failed to load saved queue: {err}"),
            }
        });
    }

    log::info!("queue widget injected (endpoint: {:?})", config.endpoint);
    Ok(QueueWidget { shared })
}

fn bind(shared: &Rc<Shared>, document: &Document, config: &WidgetConfig) -> Result<Bindings, WidgetError> {
    let mut bindings = Bindings::default();

    // Chat observer.
    match document.query_selector(&config.container_selector)? {
        Some(container) => bindings.observer = Some(observe_chat(shared, container)?),
        None => log::warn!("chat container {:?} not found; not watching chat", config.container_selector),
    }

    // Title bar drag.
    let s = Rc::clone(shared);
    bindings.listeners.push(listen(&shared.panel.title_bar, "mousedown", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let rect = s.panel.rect();
        if s.core.borrow_mut().on_title_pointer_down(pointer(mouse), rect) {
            event.prevent_default();
        }
    })?);

    // Corner resize.
    let s = Rc::clone(shared);
    bindings.listeners.push(listen(&shared.panel.resize_handle, "mousedown", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let rect = s.panel.rect();
        if s.core.borrow_mut().on_resize_pointer_down(pointer(mouse), rect) {
            event.prevent_default();
        }
    })?);

    // Document-wide move and release.
    let s = Rc::clone(shared);
    bindings.listeners.push(listen(document, "mousemove", move |event| {
        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let actions = s.core.borrow().on_pointer_move(pointer(mouse));
        s.run(actions);
    })?);

    let s = Rc::clone(shared);
    bindings.listeners.push(listen(document, "mouseup", move |_| {
        s.core.borrow_mut().on_pointer_up();
    })?);

    // Row controls, delegated to the list.
    let s = Rc::clone(shared);
    bindings.listeners.push(listen(&shared.panel.list, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some((action, key)) = Panel::row_action_at(&target) else {
            return;
        };
        let actions = s.core.borrow_mut().on_row_action(action, key);
        s.run(actions);
    })?);

    // Close button.
    let s = Rc::clone(shared);
    bindings.listeners.push(listen(&shared.panel.close_button, "click", move |_| s.destroy())?);

    Ok(bindings)
}

fn observe_chat(shared: &Rc<Shared>, container: Element) -> Result<(MutationObserver, MutationCallback), WidgetError> {
    let s = Rc::clone(shared);
    let watched = container.clone();
    let callback = Closure::wrap(Box::new(move |_records: js_sys::Array, _observer: MutationObserver| {
        let latest = latest_message(&watched);
        let actions = s.core.borrow_mut().on_chat_mutation(latest.as_ref(), Date::now());
        s.run(actions);
    }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
    let init = MutationObserverInit::new();
    init.set_child_list(true);
    observer.observe_with_options(&container, &init)?;
    Ok((observer, callback))
}
