//! Queries and logs what the current OpenGL implementation supports.

use std::fmt;

use glow::HasContext;

use crate::errors::TriangleError;

/// Integer limits worth knowing about when writing shaders for this context.
const INT_PARAMS: [(u32, &str); 10] = [
    (
        glow::MAX_COMBINED_TEXTURE_IMAGE_UNITS,
        "GL_MAX_COMBINED_TEXTURE_IMAGE_UNITS",
    ),
    (glow::MAX_CUBE_MAP_TEXTURE_SIZE, "GL_MAX_CUBE_MAP_TEXTURE_SIZE"),
    (glow::MAX_DRAW_BUFFERS, "GL_MAX_DRAW_BUFFERS"),
    (
        glow::MAX_FRAGMENT_UNIFORM_COMPONENTS,
        "GL_MAX_FRAGMENT_UNIFORM_COMPONENTS",
    ),
    (glow::MAX_TEXTURE_IMAGE_UNITS, "GL_MAX_TEXTURE_IMAGE_UNITS"),
    (glow::MAX_TEXTURE_SIZE, "GL_MAX_TEXTURE_SIZE"),
    (
        glow::MAX_VERTEX_OUTPUT_COMPONENTS,
        "GL_MAX_VERTEX_OUTPUT_COMPONENTS",
    ),
    (glow::MAX_VERTEX_ATTRIBS, "GL_MAX_VERTEX_ATTRIBS"),
    (
        glow::MAX_VERTEX_TEXTURE_IMAGE_UNITS,
        "GL_MAX_VERTEX_TEXTURE_IMAGE_UNITS",
    ),
    (
        glow::MAX_VERTEX_UNIFORM_COMPONENTS,
        "GL_MAX_VERTEX_UNIFORM_COMPONENTS",
    ),
];

/// Upper bound on `glGetError` calls per check. A lost context can report errors forever.
const MAX_QUEUED_ERRORS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue {
    Int(i32),
    Pair(i32, i32),
    Flag(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Pair(a, b) => write!(f, "{} {}", a, b),
            ParamValue::Flag(v) => write!(f, "{}", *v as i32),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlParam {
    pub name: &'static str,
    pub value: ParamValue,
}

/// Logs the vendor, renderer and version strings.
pub fn log_gl_info(gl: &glow::Context) {
    unsafe {
        log::info!("Renderer: {}", gl.get_parameter_string(glow::RENDERER));
        log::info!("Vendor: {}", gl.get_parameter_string(glow::VENDOR));
        log::info!("Version: {}", gl.get_parameter_string(glow::VERSION));
        log::info!(
            "Shading language version: {}",
            gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION)
        );
    }
}

/// Reads the implementation limits listed in [`INT_PARAMS`] plus viewport and stereo.
pub fn query_gl_params(gl: &glow::Context) -> Vec<GlParam> {
    let mut params = Vec::with_capacity(INT_PARAMS.len() + 2);
    unsafe {
        for (parameter, name) in INT_PARAMS {
            params.push(GlParam {
                name,
                value: ParamValue::Int(gl.get_parameter_i32(parameter)),
            });
        }

        let mut dims = [0i32; 2];
        gl.get_parameter_i32_slice(glow::MAX_VIEWPORT_DIMS, &mut dims);
        params.push(GlParam {
            name: "GL_MAX_VIEWPORT_DIMS",
            value: ParamValue::Pair(dims[0], dims[1]),
        });

        params.push(GlParam {
            name: "GL_STEREO",
            value: ParamValue::Flag(gl.get_parameter_i32(glow::STEREO) != 0),
        });
    }
    params
}

pub fn format_gl_params(params: &[GlParam]) -> String {
    let mut report = String::from("GL Context Params:\n");
    for param in params {
        report.push_str(&format!("{} {}\n", param.name, param.value));
    }
    report
}

/// Logs the parameter report, one record per line.
pub fn log_gl_params(gl: &glow::Context) {
    let report = format_gl_params(&query_gl_params(gl));
    for line in report.lines() {
        log::info!("{}", line);
    }
    if let Err(e) = check_gl_error(gl) {
        log::warn!("querying context parameters raised {}", e);
    }
}

pub fn gl_error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "GL_NO_ERROR",
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "unknown GL error",
    }
}

/// Joins queued error codes into one message, or `None` if there were none.
pub fn describe_gl_errors(codes: &[u32]) -> Option<String> {
    if codes.is_empty() {
        return None;
    }
    let names: Vec<String> = codes
        .iter()
        .map(|&code| format!("{} (0x{:04X})", gl_error_name(code), code))
        .collect();
    Some(names.join(", "))
}

/// Drains the GL error queue.
pub fn check_gl_error(gl: &glow::Context) -> Result<(), TriangleError> {
    let mut codes = Vec::new();
    unsafe {
        while codes.len() < MAX_QUEUED_ERRORS {
            let code = gl.get_error();
            if code == glow::NO_ERROR {
                break;
            }
            codes.push(code);
        }
    }
    match describe_gl_errors(&codes) {
        Some(message) => Err(TriangleError::Gl(message)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format() {
        let params = [
            GlParam {
                name: "GL_MAX_TEXTURE_SIZE",
                value: ParamValue::Int(16384),
            },
            GlParam {
                name: "GL_MAX_VIEWPORT_DIMS",
                value: ParamValue::Pair(16384, 8192),
            },
            GlParam {
                name: "GL_STEREO",
                value: ParamValue::Flag(false),
            },
        ];
        assert_eq!(
            format_gl_params(&params),
            "GL Context Params:\n\
             GL_MAX_TEXTURE_SIZE 16384\n\
             GL_MAX_VIEWPORT_DIMS 16384 8192\n\
             GL_STEREO 0\n"
        );
    }

    #[test]
    fn test_empty_report_has_header() {
        assert_eq!(format_gl_params(&[]), "GL Context Params:\n");
    }

    #[test]
    fn test_param_table_has_unique_entries() {
        for (i, (code, name)) in INT_PARAMS.iter().enumerate() {
            assert!(name.starts_with("GL_MAX_"));
            assert!(INT_PARAMS[i + 1..].iter().all(|(c, _)| c != code), "{}", name);
        }
    }

    #[test]
    fn test_error_names() {
        assert_eq!(gl_error_name(glow::INVALID_ENUM), "GL_INVALID_ENUM");
        assert_eq!(gl_error_name(glow::OUT_OF_MEMORY), "GL_OUT_OF_MEMORY");
        assert_eq!(gl_error_name(0xDEAD), "unknown GL error");
    }

    #[test]
    fn test_describe_errors() {
        assert_eq!(describe_gl_errors(&[]), None);
        assert_eq!(
            describe_gl_errors(&[glow::INVALID_ENUM, glow::INVALID_OPERATION]).unwrap(),
            "GL_INVALID_ENUM (0x0500), GL_INVALID_OPERATION (0x0502)"
        );
    }
}
