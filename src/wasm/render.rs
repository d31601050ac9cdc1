use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, HtmlCanvasElement, WebGl2RenderingContext as GL};

use super::controls;
use super::gl::{self, GpuResources};
use crate::bridge::{Control, Uniform, FRAME_UNIFORMS};
use crate::clock::AnimationClock;
use crate::config::{Config, Interaction, Modes};
use crate::cycle::ClickCycle;
use crate::error::VizError;
use crate::field::{BlobFieldParameters, RadiusFractions, Viewport};
use crate::shader::ShaderAssets;

/// State shared by every page callback. Callbacks run one at a time on the
/// browser's event loop, so each borrows this only for its own duration.
pub struct RenderContext {
    gl: GL,
    canvas: HtmlCanvasElement,
    root: Element,
    gpu: GpuResources,
    modes: Modes,
    params: BlobFieldParameters,
    clock: AnimationClock,
    cycle: Option<ClickCycle>,
}

impl RenderContext {
    fn new(
        gl: GL,
        canvas: HtmlCanvasElement,
        root: Element,
        gpu: GpuResources,
        config: &Config,
    ) -> Self {
        let viewport = Viewport::new(canvas.width() as f32, canvas.height() as f32);
        let mut params = BlobFieldParameters::new(viewport, RadiusFractions::default());
        params.set_drift(config.drift);

        let cycle = match config.variant.interaction() {
            Interaction::Clicks => {
                let cycle = ClickCycle::new();
                params.set_blob_count(cycle.blob_count());
                params.spin_speed = cycle.spin_speed();
                Some(cycle)
            }
            Interaction::Controls => None,
        };

        Self {
            gl,
            canvas,
            root,
            gpu,
            modes: config.variant.modes(),
            params,
            clock: AnimationClock::new(),
            cycle,
        }
    }

    fn push(&self, uniforms: &[Uniform]) {
        self.gpu.uniforms.push_all(&self.gl, &self.params, uniforms);
    }

    /// Match the canvas to the document's client area and re-derive geometry.
    pub fn fit_canvas(&mut self) {
        let (w, h) = (self.root.client_width().max(0), self.root.client_height().max(0));
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        self.gl.viewport(0, 0, w, h);
        let dirty = self.params.apply_viewport(Viewport::new(w as f32, h as f32));
        self.push(dirty);
    }

    pub fn on_control(&mut self, control: Control) {
        let dirty = self.params.apply(control);
        self.push(dirty);
    }

    pub fn on_click(&mut self) {
        let Some(cycle) = self.cycle.as_mut() else { return };
        cycle.advance();
        let (count, spin) = (cycle.blob_count(), cycle.spin_speed());
        log::debug!("click cycle: {count} blobs at {spin:.1} rev/s");
        self.params.set_blob_count(count);
        self.params.spin_speed = spin;
        self.push(&[Uniform::BlobCount, Uniform::SpinSpeed]);
    }

    pub fn frame(&mut self, timestamp: f64) {
        let dt = self.clock.tick(timestamp) as f32;
        self.params.advance(self.clock.elapsed_seconds(), dt, &self.modes);
        self.push(FRAME_UNIFORMS);

        let bg = self.modes.background.color();
        self.gl.clear_color(bg.x, bg.y, bg.z, bg.w);
        self.gl.clear(GL::COLOR_BUFFER_BIT);
        self.gpu.quad.draw(&self.gl);
    }
}

/// Acquire the GPU, wire up the page's callbacks and start the render loop.
pub fn start(canvas: HtmlCanvasElement, config: &Config) -> Result<(), JsValue> {
    let window = window().ok_or(VizError::MissingElement("window"))?;
    let document = window.document().ok_or(VizError::MissingElement("document"))?;
    let root = document
        .document_element()
        .ok_or(VizError::MissingElement("document element"))?;

    let gl = match gl::context(&canvas) {
        Ok(gl) => gl,
        Err(e) => {
            window.alert_with_message(&e.to_string()).ok();
            return Err(e.into());
        }
    };

    let modes = config.variant.modes();
    let gpu = GpuResources::new(&gl, &ShaderAssets::load(&modes))?;
    let ctx = Rc::new(RefCell::new(RenderContext::new(gl, canvas, root, gpu, config)));
    {
        let mut ctx = ctx.borrow_mut();
        ctx.fit_canvas();
        ctx.push(&Uniform::ALL);
    }

    // Resize canvas to fit the document
    let resize_closure = {
        let ctx = ctx.clone();
        Closure::wrap(Box::new(move || ctx.borrow_mut().fit_canvas()) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    match config.variant.interaction() {
        Interaction::Controls => controls::bind(&document, &ctx)?,
        Interaction::Clicks => {
            let click_closure = {
                let ctx = ctx.clone();
                Closure::wrap(Box::new(move || ctx.borrow_mut().on_click()) as Box<dyn FnMut()>)
            };
            document.add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())?;
            click_closure.forget();
        }
    }

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let loop_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        ctx.borrow_mut().frame(timestamp);

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = loop_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame: {e:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }

    Ok(())
}
