use std::time::Instant;

use glow::HasContext;

use crate::{
    abs::App,
    errors::TriangleError,
    input::FrameAction,
    settings::Settings,
    timing::FrameStats,
    triangle::Triangle,
};

mod abs;
mod capabilities;
mod errors;
mod input;
mod logging;
mod settings;
mod timing;
mod triangle;

fn main() {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    // Nothing is logged to file before this succeeds.
    if let Err(e) = logging::init(&settings.log) {
        eprintln!("ERROR: {}", e);
        std::process::exit(e.exit_code());
    }
    log::info!(
        "starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run(&settings) {
        log::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(settings: &Settings) -> Result<(), TriangleError> {
    let mut app = App::new(&settings.window)?;

    capabilities::log_gl_info(&app.gl);
    capabilities::log_gl_params(&app.gl);

    let (width, height) = app.drawable_size();
    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
        app.gl.depth_func(glow::LESS);
        app.gl.viewport(0, 0, width as i32, height as i32);
    }

    let triangle = Triangle::new(&app.gl, &settings.shaders)?;
    capabilities::check_gl_error(&app.gl)?;

    let [r, g, b, a] = settings.clear_color;
    let mut stats = FrameStats::default();
    let mut last_frame_time = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f64();
        last_frame_time = now;

        for event in app.event_pump.poll_iter() {
            match input::action_for(&event) {
                FrameAction::Quit => break 'running,
                FrameAction::Resize(width, height) => {
                    let (fb_width, fb_height) = app.window.drawable_size();
                    unsafe {
                        app.gl.viewport(0, 0, fb_width as i32, fb_height as i32);
                    }
                    log::info!(
                        "window resized to {}x{} (framebuffer {}x{})",
                        width,
                        height,
                        fb_width,
                        fb_height
                    );
                }
                FrameAction::Continue => {}
            }
        }

        unsafe {
            app.gl.clear_color(r, g, b, a);
            app.gl
                .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        triangle.draw();

        if let Err(e) = capabilities::check_gl_error(&app.gl) {
            log::error!("{}", e);
        }

        if let Some(report) = stats.tick(delta_time) {
            log::debug!(
                "{:.2} fps, {:.3} ms per frame",
                report.fps,
                report.frame_ms
            );
            app.set_title(&timing::window_title(&settings.window.title, &report));
        }

        app.swap();
    }

    log::info!("window closed, shutting down");
    Ok(())
}
