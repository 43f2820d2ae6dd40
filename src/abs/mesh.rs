//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for vertex data stored on the GPU side.
//! Vertices should implement the [`Vertex`] trait.

use std::sync::Arc;

use glam::Vec3;
use glow::HasContext;

use crate::errors::TriangleError;

/// Trait that defines the necessary methods for a vertex.
pub trait Vertex {
    /// Sets up the vertex attribute pointers for the vertex.
    fn vertex_attribs(gl: &glow::Context);
}

impl Vertex for Vec3 {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            // Position attribute
            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 0, 0);
        }
    }
}

/// Views a vertex slice as raw bytes for upload.
pub fn vertex_bytes<V>(vertices: &[V]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            vertices.as_ptr() as *const u8,
            std::mem::size_of_val(vertices),
        )
    }
}

/// Represents non-indexed vertex data stored on the GPU side.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    vertex_count: usize,
}

impl Mesh {
    /// Uploads `vertices` into a new buffer and records their layout in a vertex array.
    pub fn new<V: Vertex>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        draw_mode: u32,
    ) -> Result<Self, TriangleError> {
        unsafe {
            let vbo = gl.create_buffer().map_err(TriangleError::Buffer)?;
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                vertex_bytes(vertices),
                glow::STATIC_DRAW,
            );

            let vao = match gl.create_vertex_array() {
                Ok(vao) => vao,
                Err(e) => {
                    gl.bind_buffer(glow::ARRAY_BUFFER, None);
                    gl.delete_buffer(vbo);
                    return Err(TriangleError::Buffer(e));
                }
            };
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            V::vertex_attribs(gl);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                draw_mode,
                vao,
                vbo,
                vertex_count: vertices.len(),
            })
        }
    }

    /// Draws the mesh.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl
                .draw_arrays(self.draw_mode, 0, self.vertex_count as i32);
            self.gl.bind_vertex_array(None);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_vertex_array(self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vec3>(), 3 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_vertex_bytes_covers_every_float() {
        let points = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let bytes = vertex_bytes(&points);
        assert_eq!(bytes.len(), 24);
        let first = f32::from_ne_bytes(bytes[0..4].try_into().unwrap());
        let last = f32::from_ne_bytes(bytes[20..24].try_into().unwrap());
        assert_eq!(first, 1.0);
        assert_eq!(last, 6.0);
    }
}
