//! WebAssembly entry point and DOM wiring.

use crate::canvas_surface::CanvasSurface;
use crate::config::AppConfig;
use crate::toolbar::{TOOL_GROUP, radio_id, tool_for_radio};
use kurbo::Point;
use roughboard_core::{PointerEvent, RenderError, ToolKind, Whiteboard};
use roughboard_render::RoughRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    MouseEvent,
};

type Board = Whiteboard<RoughRenderer<CanvasSurface>>;

fn render_error(e: RenderError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("Starting Roughboard (WASM)");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let location = window.location();
    let config = AppConfig::default()
        .with_query(&location.search().unwrap_or_default())
        .with_query(&location.hash().unwrap_or_default());

    // Sized once to the viewport; later resizes are not tracked
    let width = window.inner_width()?.as_f64().unwrap_or(800.0);
    let height = window.inner_height()?.as_f64().unwrap_or(600.0);
    let canvas = canvas_element(&document, &config.canvas_id)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("Missing 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let renderer =
        RoughRenderer::new(CanvasSurface::new(context, width, height), config.render).map_err(render_error)?;
    let board = Rc::new(RefCell::new(
        Whiteboard::new(renderer).with_tool(config.initial_tool),
    ));
    board.borrow_mut().repaint().map_err(render_error)?;

    build_toolbar(&document, &board, config.initial_tool)?;

    listen(&canvas, "mousedown", &board, |position| PointerEvent::Down { position })?;
    listen(&canvas, "mousemove", &board, |position| PointerEvent::Move { position })?;
    listen(&canvas, "mouseup", &board, |position| PointerEvent::Up { position })?;

    log::info!(
        "Canvas {}x{} ready, tool: {}",
        width,
        height,
        config.initial_tool
    );
    Ok(())
}

/// Find the canvas by id, or create it at the end of the body.
fn canvas_element(document: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
    if let Some(element) = document.get_element_by_id(id) {
        return element.dyn_into::<HtmlCanvasElement>().map_err(|_| {
            JsValue::from_str(&format!("Element #{id} is not a canvas"))
        });
    }
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Missing body"))?;
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id(id);
    canvas.style().set_property("display", "block")?;
    body.append_child(&canvas)?;
    Ok(canvas)
}

/// Three mutually exclusive radio buttons pinned to the top-left corner.
fn build_toolbar(document: &Document, board: &Rc<RefCell<Board>>, selected: ToolKind) -> Result<(), JsValue> {
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("Missing body"))?;
    let toolbar = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    let style = toolbar.style();
    style.set_property("position", "fixed")?;
    style.set_property("top", "10px")?;
    style.set_property("left", "10px")?;

    for tool in ToolKind::ALL {
        let id = radio_id(tool);
        let input = document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()?;
        input.set_type("radio");
        input.set_id(&id);
        input.set_name(TOOL_GROUP);
        input.set_checked(tool == selected);

        let label = document.create_element("label")?;
        label.set_attribute("for", &id)?;
        label.set_text_content(Some(tool.label()));

        toolbar.append_child(&input)?;
        toolbar.append_child(&label)?;
    }

    // One listener on the container; change events bubble up from the radios
    let onchange = {
        let board = board.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(tool) = tool_for_radio(&input.id()) {
                board.borrow_mut().set_tool(tool);
            }
        })
    };
    toolbar.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
    onchange.forget();

    body.append_child(&toolbar)?;
    Ok(())
}

/// Forward a mouse event on the canvas to the board.
fn listen(
    canvas: &HtmlCanvasElement,
    event_name: &str,
    board: &Rc<RefCell<Board>>,
    to_pointer: fn(Point) -> PointerEvent,
) -> Result<(), JsValue> {
    let board = board.clone();
    let handler = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let position = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        if let Err(e) = board.borrow_mut().handle(to_pointer(position)) {
            log::error!("Repaint failed: {e}");
        }
    });
    canvas.add_event_listener_with_callback(event_name, handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
