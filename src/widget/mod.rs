//! The grid widget: orchestrating state and the host-facing handle.
//!
//! `GridCore` is target-independent and holds everything one widget
//! instance owns; the wasm-only `GridWidget` wraps it in
//! `Rc<RefCell<_>>`, builds the DOM subtree and wires the event
//! listeners.

mod input;

pub use input::HitTarget;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::{Rc, Weak};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{
    Document, Event, HtmlCanvasElement, HtmlDivElement, KeyboardEvent, MouseEvent, Window,
};

use crate::collaborator::GridCollaborator;
use crate::layout::Viewport;
use crate::render::{draw_frame, DrawSurface};
use crate::scroll::ScrollEngine;
use crate::store::CellStore;
use crate::task::TickScheduler;
use crate::types::{Address, CellRef, GridConfig};

#[cfg(target_arch = "wasm32")]
use crate::collaborator::NoopCollaborator;
#[cfg(target_arch = "wasm32")]
use crate::registry;
#[cfg(target_arch = "wasm32")]
use crate::render::CanvasSurface;
#[cfg(target_arch = "wasm32")]
use crate::task::IntervalScheduler;

/// Everything one widget instance owns: grid math, cell storage, scroll
/// state, the injected capabilities, and the interaction flags the event
/// handlers drive.
pub struct GridCore {
    pub viewport: Viewport,
    pub store: CellStore,
    pub scroll: ScrollEngine,
    pub(crate) scheduler: Box<dyn TickScheduler>,
    pub(crate) surface: Box<dyn DrawSurface>,
    pub(crate) collaborator: Box<dyn GridCollaborator>,
    id: String,
    /// Pointer is inside the widget; keyboard scrolling is gated on this.
    pub active: bool,
    /// Primary button is down; drag-selection is gated on this.
    pub pointer_down: bool,
    /// The next printable keystroke replaces the edit value.
    pub replace_on_input: bool,
    /// A host-scroll sample is already scheduled for the next frame.
    pub raf_pending: bool,
    /// Host scroll position at the last wheel sample.
    pub last_scroll: i32,
}

impl GridCore {
    /// Build a core from a normalized config and injected capabilities.
    pub fn new(
        config: &GridConfig,
        scheduler: Box<dyn TickScheduler>,
        surface: Box<dyn DrawSurface>,
        collaborator: Box<dyn GridCollaborator>,
    ) -> Self {
        Self {
            viewport: Viewport::new(
                config.width,
                config.height,
                config.cell_width,
                config.cell_height,
            ),
            store: CellStore::new(),
            scroll: ScrollEngine::new(config.scroll_speed),
            scheduler,
            surface,
            collaborator,
            id: config.id.clone(),
            active: false,
            pointer_down: false,
            replace_on_input: false,
            raf_pending: false,
            last_scroll: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Render one frame through the drawing surface.
    pub fn draw(&mut self) {
        draw_frame(
            &mut *self.surface,
            &self.viewport,
            &self.store,
            &*self.collaborator,
        );
    }

    /// Write a committed value and notify the collaborator.
    pub fn add_data(&mut self, row: u32, col: u32, value: &str) {
        let (x, y) = self.viewport.address_to_coords(row, col);
        let cell = self
            .store
            .upsert_committed(Address::new(row, col), value, x, y);
        self.collaborator.on_cell_added(&cell.borrow());
    }

    /// Select the cell at `addr`, creating a provisional record if needed.
    pub fn select_address(&mut self, addr: Address) -> CellRef {
        let (x, y) = self.viewport.address_to_coords(addr.row, addr.col);
        self.store.select(addr, x, y)
    }

    pub fn select_cells(&mut self, addresses: &[Address]) {
        for addr in addresses {
            self.select_address(*addr);
        }
    }

    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    pub fn is_editing(&self) -> bool {
        self.store.edit_cell().is_some()
    }

    pub fn edit_cell_address(&self) -> Option<Address> {
        self.store.edit_cell().map(|cell| cell.borrow().address())
    }

    /// One scroll-timer tick. Returns whether a redraw is needed.
    pub fn scroll_tick(&mut self) -> bool {
        self.scroll.tick(&mut self.viewport, &mut *self.scheduler)
    }
}

// ============================================================================
// WASM32 host handle
// ============================================================================

/// The host-facing widget handle exported to JavaScript.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct GridWidget {
    core: Rc<RefCell<GridCore>>,
    root: HtmlDivElement,
    #[allow(dead_code)]
    mouse_closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    key_closures: Vec<Closure<dyn FnMut(KeyboardEvent)>>,
    #[allow(dead_code)]
    scroll_closure: Option<Closure<dyn FnMut(Event)>>,
    #[allow(dead_code)]
    raf_closure: Option<Rc<Closure<dyn FnMut(f64)>>>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridWidget {
    /// Create a widget from a host config object, build its DOM subtree,
    /// wire the event handlers, register it by id and draw the first
    /// frame.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GridWidget, JsValue> {
        console_error_panic_hook::set_once();
        let config: GridConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(config.normalized().map_err(JsValue::from)?)
    }

    /// The host element to insert into the page.
    pub fn root_element(&self) -> HtmlDivElement {
        self.root.clone()
    }

    pub fn draw(&self) {
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.draw();
        }
    }

    pub fn add_data(&self, row: u32, col: u32, value: &str) {
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.add_data(row, col, value);
            core.draw();
        }
    }

    /// Select a list of `{row, col}` addresses and redraw.
    pub fn select_cells(&self, addresses: JsValue) -> Result<(), JsValue> {
        let addresses: Vec<Address> = serde_wasm_bindgen::from_value(addresses)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.select_cells(&addresses);
            core.draw();
        }
        Ok(())
    }

    pub fn clear_selection(&self) {
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.clear_selection();
        }
    }

    /// Address of the cell being edited, as `{row, col}` or `null`.
    pub fn edit_cell_address(&self) -> JsValue {
        let addr = self
            .core
            .try_borrow()
            .ok()
            .and_then(|core| core.edit_cell_address());
        serde_wasm_bindgen::to_value(&addr).unwrap_or(JsValue::NULL)
    }

    pub fn id(&self) -> String {
        self.core
            .try_borrow()
            .map(|core| core.id().to_string())
            .unwrap_or_default()
    }

    pub fn cell_width(&self) -> i32 {
        self.core
            .try_borrow()
            .map(|core| core.viewport.cell_width)
            .unwrap_or_default()
    }

    pub fn cell_height(&self) -> i32 {
        self.core
            .try_borrow()
            .map(|core| core.viewport.cell_height)
            .unwrap_or_default()
    }

    pub fn origin_x(&self) -> i32 {
        self.core
            .try_borrow()
            .map(|core| core.viewport.x)
            .unwrap_or_default()
    }

    pub fn origin_y(&self) -> i32 {
        self.core
            .try_borrow()
            .map(|core| core.viewport.y)
            .unwrap_or_default()
    }
}

#[cfg(target_arch = "wasm32")]
impl GridWidget {
    pub(crate) fn with_config(config: GridConfig) -> Result<GridWidget, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let root: HtmlDivElement = document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("element is not a div"))?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;
        root.append_child(&canvas)?;
        if let Some(style) = registry::style_for_class(&config.visual_class) {
            canvas.style().set_css_text(&style);
        }

        let surface = CanvasSurface::new(
            &document,
            &canvas,
            config.width,
            config.height,
            config.cell_width,
            config.cell_height,
        )
        .map_err(JsValue::from)?;

        let core = Rc::new_cyclic(|weak: &Weak<RefCell<GridCore>>| {
            let weak = weak.clone();
            let tick: Box<dyn FnMut()> = Box::new(move || {
                let Some(core) = weak.upgrade() else {
                    return;
                };
                // A tick that lands while the previous one is still on
                // the stack is skipped: one in-flight tick per widget.
                if let Ok(mut core) = core.try_borrow_mut() {
                    if core.scroll_tick() {
                        core.draw();
                    }
                }
            });
            RefCell::new(GridCore::new(
                &config,
                Box::new(IntervalScheduler::new(tick)),
                Box::new(surface),
                Box::new(NoopCollaborator),
            ))
        });

        let mut widget = GridWidget {
            core: Rc::clone(&core),
            root,
            mouse_closures: Vec::new(),
            key_closures: Vec::new(),
            scroll_closure: None,
            raf_closure: None,
        };
        widget.wire_events(&window, &document, &canvas)?;
        registry::register_widget(&config.id, core);
        widget.draw();
        Ok(widget)
    }

    fn wire_events(
        &mut self,
        window: &Window,
        document: &Document,
        canvas: &HtmlCanvasElement,
    ) -> Result<(), JsValue> {
        self.wire_mouse(window, canvas, "mousedown", |core, x, y| {
            core.on_pointer_down(x, y)
        })?;
        self.wire_mouse(window, canvas, "mousemove", |core, x, y| {
            core.on_pointer_move(x, y)
        })?;
        self.wire_mouse(window, canvas, "dblclick", |core, x, y| {
            core.on_double_click(x, y)
        })?;
        self.wire_mouse(window, canvas, "mouseup", |core, _, _| core.on_pointer_up())?;
        self.wire_mouse(window, canvas, "mouseenter", |core, _, _| {
            core.on_pointer_enter()
        })?;
        self.wire_mouse(window, canvas, "mouseleave", |core, _, _| {
            core.on_pointer_leave()
        })?;

        // Keyboard and host scroll are document-level, like the rest of
        // the page chrome the widget floats in.
        let core = Rc::clone(&self.core);
        let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let Ok(mut core) = core.try_borrow_mut() else {
                return;
            };
            if core.is_editing() {
                event.prevent_default();
            }
            if core.on_key_down(&event.key()) {
                core.draw();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
        self.key_closures.push(keydown);

        let core = Rc::clone(&self.core);
        let keyup = Closure::wrap(Box::new(move |_event: KeyboardEvent| {
            if let Ok(mut core) = core.try_borrow_mut() {
                if core.on_key_up() {
                    core.draw();
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        document.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
        self.key_closures.push(keyup);

        let core = Rc::clone(&self.core);
        let raf_document = document.clone();
        let raf = Rc::new(Closure::wrap(Box::new(move |_timestamp: f64| {
            let top = host_scroll_top(&raf_document);
            if let Ok(mut core) = core.try_borrow_mut() {
                if core.on_host_scroll(top) {
                    core.draw();
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let core = Rc::clone(&self.core);
        let raf_handle = Rc::clone(&raf);
        let scroll_window = window.clone();
        let scroll = Closure::wrap(Box::new(move |_event: Event| {
            let schedule = core
                .try_borrow_mut()
                .map(|mut core| core.on_scroll_event())
                .unwrap_or(false);
            if schedule {
                let _ = scroll_window
                    .request_animation_frame((*raf_handle).as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut(Event)>);
        document.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())?;
        self.scroll_closure = Some(scroll);
        self.raf_closure = Some(raf);

        Ok(())
    }

    fn wire_mouse(
        &mut self,
        window: &Window,
        canvas: &HtmlCanvasElement,
        event: &str,
        handler: fn(&mut GridCore, i32, i32) -> bool,
    ) -> Result<(), JsValue> {
        let core = Rc::clone(&self.core);
        let target = canvas.clone();
        let window = window.clone();
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let (x, y) = local_coords(&window, &target, &event);
            if let Ok(mut core) = core.try_borrow_mut() {
                if handler(&mut core, x, y) {
                    core.draw();
                }
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.mouse_closures.push(closure);
        Ok(())
    }
}

/// Element-local pointer coordinates: page position minus the element's
/// bounding offset minus the host scroll offset.
#[cfg(target_arch = "wasm32")]
fn local_coords(window: &Window, canvas: &HtmlCanvasElement, event: &MouseEvent) -> (i32, i32) {
    let rect = canvas.get_bounding_client_rect();
    let scroll_x = window.scroll_x().unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let x = f64::from(event.page_x()) - rect.left() - scroll_x;
    let y = f64::from(event.page_y()) - rect.top() - scroll_y;
    (x.floor() as i32, y.floor() as i32)
}

/// Host scroll position, whichever of body or root element carries it.
#[cfg(target_arch = "wasm32")]
fn host_scroll_top(document: &Document) -> i32 {
    let body = document.body().map(|b| b.scroll_top()).unwrap_or(0);
    let root = document
        .document_element()
        .map(|e| e.scroll_top())
        .unwrap_or(0);
    body.max(root)
}
