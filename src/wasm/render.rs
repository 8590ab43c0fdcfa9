use glam::Mat4;
use js_sys::{Float32Array, Uint32Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlContextAttributes,
    WebGlProgram, WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::camera::PerspectiveCamera;
use crate::geometry::{Geometry, Topology};
use crate::scene::{Material, Scene};

const POSITION: u32 = 0;
const NORMAL: u32 = 1;

const FLAT_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_proj;
uniform float u_point_size;
uniform float u_point_scale;
void main() {
    vec4 eye = u_view * u_model * vec4(a_position, 1.0);
    gl_Position = u_proj * eye;
    gl_PointSize = u_point_size * (u_point_scale / -eye.z);
}
"#;

const FLAT_FS: &str = r#"#version 300 es
precision mediump float;
uniform vec4 u_color;
out vec4 frag;
void main() {
    frag = u_color;
}
"#;

const LIT_VS: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_proj;
out vec3 v_world;
out vec3 v_normal;
void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_world = world.xyz;
    v_normal = mat3(u_model) * a_normal;
    gl_Position = u_proj * u_view * world;
}
"#;

const LIT_FS: &str = r#"#version 300 es
precision mediump float;
in vec3 v_world;
in vec3 v_normal;
uniform vec3 u_color;
uniform vec3 u_emissive;
uniform float u_emissive_intensity;
uniform float u_opacity;
uniform vec3 u_ambient;
uniform vec3 u_light_pos;
uniform vec3 u_light_color;
uniform float u_light_range;
out vec4 frag;
void main() {
    vec3 n = normalize(v_normal);
    vec3 to_light = u_light_pos - v_world;
    float dist = length(to_light);
    float falloff = u_light_range > 0.0 ? clamp(1.0 - dist / u_light_range, 0.0, 1.0) : 1.0;
    float diffuse = max(dot(n, to_light / max(dist, 1e-4)), 0.0);
    vec3 rgb = u_color * (u_ambient + u_light_color * diffuse * falloff)
        + u_emissive * u_emissive_intensity;
    frag = vec4(rgb, u_opacity);
}
"#;

/// Geometry uploaded once; only transforms and materials change per frame.
pub struct GpuMesh {
    vao: WebGlVertexArrayObject,
    mode: u32,
    count: i32,
    indexed: bool,
}

struct Uniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    proj: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn locate(gl: &GL, program: &WebGlProgram) -> Self {
        Self {
            model: gl.get_uniform_location(program, "u_model"),
            view: gl.get_uniform_location(program, "u_view"),
            proj: gl.get_uniform_location(program, "u_proj"),
        }
    }
}

/// A WebGL2 canvas inside a container, cleared to transparent each frame.
pub struct Renderer {
    canvas: HtmlCanvasElement,
    gl: GL,
    flat: WebGlProgram,
    flat_uniforms: Uniforms,
    lit: WebGlProgram,
    lit_uniforms: Uniforms,
}

impl Renderer {
    /// Creates a canvas, appends it to `container` and sizes it.
    pub fn new(document: &Document, container: &web_sys::Element, width: u32, height: u32) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        container.append_child(&canvas)?;

        let attrs = WebGlContextAttributes::new();
        attrs.set_alpha(true);
        attrs.set_antialias(true);
        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &attrs)?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let flat = link(&gl, FLAT_VS, FLAT_FS)?;
        let lit = link(&gl, LIT_VS, LIT_FS)?;
        let flat_uniforms = Uniforms::locate(&gl, &flat);
        let lit_uniforms = Uniforms::locate(&gl, &lit);

        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.enable(GL::DEPTH_TEST);
        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        let renderer = Self { canvas, gl, flat, flat_uniforms, lit, lit_uniforms };
        renderer.set_size(width, height)?;
        Ok(renderer)
    }

    pub fn set_size(&self, width: u32, height: u32) -> Result<(), JsValue> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let style = self.canvas.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;
        self.gl.viewport(0, 0, width as i32, height as i32);
        Ok(())
    }

    pub fn upload(&self, geometry: &Geometry) -> Result<GpuMesh, JsValue> {
        let gl = &self.gl;
        let vao = gl.create_vertex_array().ok_or("failed to create vertex array")?;
        gl.bind_vertex_array(Some(&vao));

        attribute(gl, POSITION, &geometry.positions)?;
        if !geometry.normals.is_empty() {
            attribute(gl, NORMAL, &geometry.normals)?;
        }

        let indexed = geometry.topology != Topology::Points;
        if indexed {
            let buffer = gl.create_buffer().ok_or("failed to create index buffer")?;
            gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&buffer));
            let data = Uint32Array::from(geometry.indices.as_slice());
            gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &data, GL::STATIC_DRAW);
        }
        gl.bind_vertex_array(None);

        let mode = match geometry.topology {
            Topology::Triangles => GL::TRIANGLES,
            Topology::Lines => GL::LINES,
            Topology::Points => GL::POINTS,
        };
        Ok(GpuMesh { vao, mode, count: geometry.element_count() as i32, indexed })
    }

    /// Draws every mesh of `scene`; `meshes` is parallel to `scene.meshes`.
    pub fn render(&self, scene: &Scene, meshes: &[GpuMesh], camera: &PerspectiveCamera) {
        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let view = camera.view();
        let proj = camera.projection();
        let light = scene.point_lights.first();

        for (object, gpu) in scene.meshes.iter().zip(meshes) {
            let model = object.transform.matrix();
            match object.material {
                Material::Basic { color, opacity } => {
                    self.use_program(&self.flat, &self.flat_uniforms, model, view, proj);
                    uniform4(gl, &self.flat, "u_color", color.extend(opacity).to_array());
                }
                Material::Points { color, size } => {
                    self.use_program(&self.flat, &self.flat_uniforms, model, view, proj);
                    uniform4(gl, &self.flat, "u_color", color.extend(1.0).to_array());
                    uniform1(gl, &self.flat, "u_point_size", size);
                    uniform1(gl, &self.flat, "u_point_scale", self.canvas.height() as f32 / 2.0);
                }
                Material::Standard { color, emissive, emissive_intensity, opacity } => {
                    self.use_program(&self.lit, &self.lit_uniforms, model, view, proj);
                    uniform3(gl, &self.lit, "u_color", color.to_array());
                    uniform3(gl, &self.lit, "u_emissive", emissive.to_array());
                    uniform1(gl, &self.lit, "u_emissive_intensity", emissive_intensity);
                    uniform1(gl, &self.lit, "u_opacity", opacity);
                    uniform3(gl, &self.lit, "u_ambient", scene.ambient.to_array());
                    match light {
                        Some(l) => {
                            uniform3(gl, &self.lit, "u_light_pos", l.position.to_array());
                            uniform3(gl, &self.lit, "u_light_color", (l.color * l.intensity).to_array());
                            uniform1(gl, &self.lit, "u_light_range", l.range);
                        }
                        None => uniform3(gl, &self.lit, "u_light_color", [0.0; 3]),
                    }
                }
            }

            gl.bind_vertex_array(Some(&gpu.vao));
            if gpu.indexed {
                gl.draw_elements_with_i32(gpu.mode, gpu.count, GL::UNSIGNED_INT, 0);
            } else {
                gl.draw_arrays(gpu.mode, 0, gpu.count);
            }
        }
        gl.bind_vertex_array(None);
    }

    fn use_program(&self, program: &WebGlProgram, u: &Uniforms, model: Mat4, view: Mat4, proj: Mat4) {
        let gl = &self.gl;
        gl.use_program(Some(program));
        gl.uniform_matrix4fv_with_f32_array(u.model.as_ref(), false, &model.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(u.view.as_ref(), false, &view.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(u.proj.as_ref(), false, &proj.to_cols_array());
    }
}

fn attribute(gl: &GL, location: u32, data: &[f32]) -> Result<(), JsValue> {
    let buffer = gl.create_buffer().ok_or("failed to create vertex buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let view = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &view, GL::STATIC_DRAW);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, 3, GL::FLOAT, false, 0, 0);
    Ok(())
}

fn uniform1(gl: &GL, program: &WebGlProgram, name: &str, v: f32) {
    gl.uniform1f(gl.get_uniform_location(program, name).as_ref(), v);
}

fn uniform3(gl: &GL, program: &WebGlProgram, name: &str, v: [f32; 3]) {
    gl.uniform3fv_with_f32_array(gl.get_uniform_location(program, name).as_ref(), &v);
}

fn uniform4(gl: &GL, program: &WebGlProgram, name: &str, v: [f32; 4]) {
    gl.uniform4fv_with_f32_array(gl.get_uniform_location(program, name).as_ref(), &v);
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("failed to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(JsValue::from_str(&format!("shader compile failed: {log}")))
    }
}

fn link(gl: &GL, vs: &str, fs: &str) -> Result<WebGlProgram, JsValue> {
    let vs = compile(gl, GL::VERTEX_SHADER, vs)?;
    let fs = compile(gl, GL::FRAGMENT_SHADER, fs)?;
    let program = gl.create_program().ok_or("failed to create program")?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        Err(JsValue::from_str(&format!("program link failed: {log}")))
    }
}
