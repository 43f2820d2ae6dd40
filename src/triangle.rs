//! The demo scene: four points drawn as a triangle strip with one shader program.

use std::sync::Arc;

use glam::Vec3;

use crate::{
    abs::{Mesh, Shader, ShaderProgram},
    errors::TriangleError,
    settings::ShaderPaths,
};

/// A diamond made of two triangles.
pub const TRIANGLE_STRIP: [Vec3; 4] = [
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
];

pub struct Triangle {
    mesh: Mesh,
    program: ShaderProgram,
}

impl Triangle {
    pub fn new(gl: &Arc<glow::Context>, shaders: &ShaderPaths) -> Result<Self, TriangleError> {
        let mesh = Mesh::new(gl, &TRIANGLE_STRIP, glow::TRIANGLE_STRIP)?;
        log::info!(
            "uploaded {} vertices ({} bytes)",
            mesh.vertex_count(),
            std::mem::size_of_val(&TRIANGLE_STRIP)
        );

        let vert = Shader::from_file(gl, glow::VERTEX_SHADER, &shaders.vertex)?;
        let frag = Shader::from_file(gl, glow::FRAGMENT_SHADER, &shaders.fragment)?;
        let program = ShaderProgram::new(gl, &[&frag, &vert])?;

        Ok(Self { mesh, program })
    }

    pub fn draw(&self) {
        self.program.use_program();
        self.mesh.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_is_twelve_floats() {
        assert_eq!(
            std::mem::size_of_val(&TRIANGLE_STRIP),
            12 * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn test_strip_lies_in_clip_space() {
        for point in TRIANGLE_STRIP {
            assert_eq!(point.z, 0.0);
            assert!(point.x.abs() <= 1.0 && point.y.abs() <= 1.0);
        }
    }

    #[test]
    fn test_strip_triangles_not_degenerate() {
        for window in TRIANGLE_STRIP.windows(3) {
            let area = (window[1] - window[0]).cross(window[2] - window[0]).z;
            assert!(area.abs() > 0.0);
        }
    }
}
