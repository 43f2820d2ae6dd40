//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which owns the SDL2 window, the OpenGL
//! context made current on it and the event pump.

use std::sync::Arc;

use crate::{errors::TriangleError, settings::WindowSettings};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a window with a 3.3 core context made current on it.
    /// The width and height are ignored if `fullscreen` is set.
    pub fn new(settings: &WindowSettings) -> Result<Self, TriangleError> {
        let sdl = sdl2::init()
            .map_err(|e| TriangleError::Window(format!("could not start SDL2: {}", e)))?;
        let video_subsystem = sdl
            .video()
            .map_err(|e| TriangleError::Window(format!("could not start video subsystem: {}", e)))?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        gl_attr.set_depth_size(24);
        gl_attr.set_double_buffer(true);

        let (width, height) = if settings.fullscreen {
            let display_mode = video_subsystem
                .current_display_mode(0)
                .map_err(TriangleError::Window)?;
            (display_mode.w as u32, display_mode.h as u32)
        } else {
            (settings.width, settings.height)
        };

        let mut builder = video_subsystem.window(&settings.title, width, height);
        builder.opengl().position_centered();
        if settings.resizable {
            builder.resizable();
        }
        let mut window = builder
            .build()
            .map_err(|e| TriangleError::Window(format!("could not open window: {}", e)))?;

        if settings.fullscreen {
            window
                .set_fullscreen(sdl2::video::FullscreenType::Desktop)
                .map_err(TriangleError::Window)?;
        }

        let gl_context = window
            .gl_create_context()
            .map_err(|e| TriangleError::Context(format!("could not create context: {}", e)))?;
        window
            .gl_make_current(&gl_context)
            .map_err(|e| TriangleError::Context(format!("could not make context current: {}", e)))?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let interval = if settings.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("could not set swap interval: {}", e);
        }

        let event_pump = sdl.event_pump().map_err(TriangleError::Window)?;
        let gl = Arc::new(gl);

        log::info!(
            "opened {}x{} window \"{}\"",
            width,
            height,
            settings.title
        );

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }

    /// Size of the default framebuffer in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    /// Presents the back buffer.
    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    pub fn set_title(&mut self, title: &str) {
        if let Err(e) = self.window.set_title(title) {
            log::warn!("could not set window title: {}", e);
        }
    }
}
