//! WebGL2 resources: context, program, quad geometry and uniform locations.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::bridge::Uniform;
use crate::error::{ShaderStage, VizError};
use crate::field::BlobFieldParameters;
use crate::shader::{ShaderAssets, POSITION_ATTRIBUTE, QUAD_VERTICES};

pub fn context(canvas: &HtmlCanvasElement) -> Result<GL, VizError> {
    canvas
        .get_context("webgl2")
        .map_err(|e| VizError::ContextUnavailable(format!("{e:?}")))?
        .ok_or_else(|| VizError::ContextUnavailable("WebGL2 not supported".to_owned()))?
        .dyn_into::<GL>()
        .map_err(|_| VizError::ContextUnavailable("unexpected context type".to_owned()))
}

pub fn compile_shader(gl: &GL, stage: ShaderStage, source: &str) -> Result<WebGlShader, VizError> {
    let kind = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl.create_shader(kind).ok_or(VizError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        return Ok(shader);
    }

    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    log::error!("compiling {stage} shader: {log}");
    gl.delete_shader(Some(&shader));
    Err(VizError::ShaderCompile { stage, log })
}

pub fn link_program(gl: &GL, assets: &ShaderAssets) -> Result<WebGlProgram, VizError> {
    let vs = compile_shader(gl, ShaderStage::Vertex, &assets.vertex)?;
    let fs = match compile_shader(gl, ShaderStage::Fragment, &assets.fragment) {
        Ok(fs) => fs,
        Err(e) => {
            gl.delete_shader(Some(&vs));
            return Err(e);
        }
    };

    let Some(program) = gl.create_program() else {
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));
        return Err(VizError::Allocation("program"));
    };
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);
    // Attached shaders stay alive until the program goes away.
    gl.delete_shader(Some(&vs));
    gl.delete_shader(Some(&fs));

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        log::debug!("linked shader assets v{}", assets.version);
        return Ok(program);
    }

    let log = gl.get_program_info_log(&program).unwrap_or_default();
    log::error!("linking shader program: {log}");
    gl.delete_program(Some(&program));
    Err(VizError::ProgramLink(log))
}

/// The full-screen quad, uploaded once.
pub struct Quad {
    _buffer: WebGlBuffer,
    vao: WebGlVertexArrayObject,
}

impl Quad {
    pub fn new(gl: &GL, program: &WebGlProgram) -> Result<Self, VizError> {
        let location = gl.get_attrib_location(program, POSITION_ATTRIBUTE);
        if location < 0 {
            return Err(VizError::ProgramLink(format!(
                "attribute {POSITION_ATTRIBUTE} not found"
            )));
        }
        let location = location as u32;

        let vao = gl
            .create_vertex_array()
            .ok_or(VizError::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        let buffer = gl.create_buffer().ok_or(VizError::Allocation("buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let vertices = js_sys::Float32Array::from(&QUAD_VERTICES[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_with_i32(location, 2, GL::FLOAT, false, 0, 0);
        gl.bind_vertex_array(None);

        Ok(Self {
            _buffer: buffer,
            vao,
        })
    }

    pub fn draw(&self, gl: &GL) {
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, (QUAD_VERTICES.len() / 2) as i32);
    }
}

/// Locations of every [`Uniform`]. A location is `None` when the compiler
/// dropped an unused uniform; writes to it are no-ops.
pub struct UniformLocations([Option<WebGlUniformLocation>; Uniform::ALL.len()]);

impl UniformLocations {
    pub fn lookup(gl: &GL, program: &WebGlProgram) -> Self {
        Self(Uniform::ALL.map(|u| gl.get_uniform_location(program, u.name())))
    }

    pub fn push(&self, gl: &GL, p: &BlobFieldParameters, uniform: Uniform) {
        let loc = self.0[uniform.index()].as_ref();
        match uniform {
            Uniform::Center => gl.uniform2f(loc, p.center.x, p.center.y),
            Uniform::RadiusRange => gl.uniform2f(loc, p.radius_range.x, p.radius_range.y),
            Uniform::Time => gl.uniform1f(loc, p.time),
            Uniform::SpinSpeed => gl.uniform1f(loc, p.spin_speed),
            Uniform::OuterRadius => gl.uniform1f(loc, p.outer_radius),
            Uniform::BlobCount => gl.uniform1f(loc, p.blob_count() as f32),
            Uniform::View => gl.uniform2f(loc, p.viewport.width, p.viewport.height),
            Uniform::ColorA => {
                let c = p.color_a;
                gl.uniform4f(loc, c.x, c.y, c.z, c.w)
            }
            Uniform::ColorB => {
                let c = p.color_b;
                gl.uniform4f(loc, c.x, c.y, c.z, c.w)
            }
            Uniform::ColorMod => gl.uniform1f(loc, p.color_mod),
            Uniform::SizePhase => gl.uniform1f(loc, p.size_phase),
        }
    }

    pub fn push_all(&self, gl: &GL, p: &BlobFieldParameters, uniforms: &[Uniform]) {
        for &u in uniforms {
            self.push(gl, p, u);
        }
    }
}

/// Everything uploaded to the device at startup. Lives as long as the page.
pub struct GpuResources {
    pub program: WebGlProgram,
    pub quad: Quad,
    pub uniforms: UniformLocations,
}

impl GpuResources {
    pub fn new(gl: &GL, assets: &ShaderAssets) -> Result<Self, VizError> {
        let program = link_program(gl, assets)?;
        gl.use_program(Some(&program));
        let quad = Quad::new(gl, &program)?;
        let uniforms = UniformLocations::lookup(gl, &program);
        Ok(Self {
            program,
            quad,
            uniforms,
        })
    }
}
