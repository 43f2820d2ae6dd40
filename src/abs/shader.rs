//! OpenGL Shaders
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs for managing OpenGL
//! shaders. Shader sources can be compiled from a string or read from a file on disk.

use std::path::Path;
use std::sync::Arc;

use glow::HasContext;

use crate::errors::TriangleError;

/// Readable name of a shader stage.
pub fn shader_kind_name(shader_type: u32) -> &'static str {
    match shader_type {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        glow::GEOMETRY_SHADER => "geometry",
        glow::COMPUTE_SHADER => "compute",
        _ => "unknown",
    }
}

/// Represents an individual OpenGL shader.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
    shader_type: u32,
}

impl Shader {
    /// Compiles a new shader from the given source code.
    pub fn new(
        gl: &Arc<glow::Context>,
        shader_type: u32,
        source: &str,
    ) -> Result<Self, TriangleError> {
        unsafe {
            let shader = gl
                .create_shader(shader_type)
                .map_err(TriangleError::Shader)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(TriangleError::Shader(format!(
                    "{} shader failed to compile: {}",
                    shader_kind_name(shader_type),
                    log
                )));
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
                shader_type,
            })
        }
    }

    /// Reads the file at `path` and compiles it.
    pub fn from_file(
        gl: &Arc<glow::Context>,
        shader_type: u32,
        path: &Path,
    ) -> Result<Self, TriangleError> {
        let source = read_source(path)?;
        log::info!(
            "compiling {} shader {} ({} bytes)",
            shader_kind_name(shader_type),
            path.display(),
            source.len()
        );
        Self::new(gl, shader_type, &source)
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// Reads a shader source file.
pub fn read_source(path: &Path) -> Result<String, TriangleError> {
    std::fs::read_to_string(path).map_err(|e| {
        TriangleError::Shader(format!("could not read {}: {}", path.display(), e))
    })
}

/// Represents an OpenGL shader program composed of multiple shaders.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links a new shader program from the given shaders.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, TriangleError> {
        unsafe {
            let program = gl.create_program().map_err(TriangleError::Program)?;

            let stages: Vec<&str> = shaders
                .iter()
                .map(|s| shader_kind_name(s.shader_type))
                .collect();
            log::info!("linking program from {} shaders", stages.join(" + "));

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(TriangleError::Program(log));
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Binds the shader program for use.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}
