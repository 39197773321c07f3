//! Windowed slideshow driver: advance/pause timer plus key handling.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use image::RgbaImage;
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::layout::scaled_size;
use crate::loader;
use crate::playlist::Playlist;
use crate::render::Gpu;

/// How often the slideshow timer is polled.
const TICK: Duration = Duration::from_millis(300);

/// Options controlling the viewer loop.
#[derive(Debug, Clone, Copy)]
pub struct ViewerOptions {
    /// How long each image stays on screen before auto-advance.
    pub interval: Duration,
}

/// Auto-advance state machine: playing unless paused, due once the interval
/// since the last shown image has elapsed.
#[derive(Debug)]
struct SlideClock {
    interval: Duration,
    last_view: Instant,
    paused: bool,
}

impl SlideClock {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_view: Instant::now(),
            paused: false,
        }
    }

    /// Flip the pause flag; returns the new state.
    fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    fn mark_viewed(&mut self, now: Instant) {
        self.last_view = now;
    }

    fn should_advance(&self, now: Instant) -> bool {
        !self.paused && now.duration_since(self.last_view) > self.interval
    }
}

struct SlideshowApp {
    playlist: Playlist,
    clock: SlideClock,
    fullscreen: bool,
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    // current image: decoded original plus the dimensions of the fitted copy
    // living on the GPU (None until fitted)
    original: Option<RgbaImage>,
    fitted: Option<(u32, u32)>,
    fatal: Option<anyhow::Error>,
}

impl SlideshowApp {
    fn new(playlist: Playlist, options: ViewerOptions) -> Self {
        Self {
            playlist,
            clock: SlideClock::new(options.interval),
            fullscreen: true,
            window: None,
            gpu: None,
            original: None,
            fitted: None,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:?}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn show_next(&mut self, event_loop: &ActiveEventLoop) {
        let next = self.playlist.next().map(Path::to_path_buf);
        if let Some(path) = next {
            self.show_image(event_loop, path);
        }
    }

    fn show_previous(&mut self, event_loop: &ActiveEventLoop) {
        let prev = self.playlist.previous().map(Path::to_path_buf);
        if let Some(path) = prev {
            self.show_image(event_loop, path);
        }
    }

    fn show_image(&mut self, event_loop: &ActiveEventLoop, path: PathBuf) {
        info!(path = %path.display(), "showing image");
        match loader::decode_image(&path) {
            Ok(img) => {
                self.original = Some(img);
                self.fitted = None;
                self.fit_to_window(event_loop);
                self.clock.mark_viewed(Instant::now());
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    /// Re-fit the current image to the display box, skipping the resample
    /// while the fitted copy still matches the box on either axis.
    fn fit_to_window(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = self.gpu.as_mut() else { return };
        let Some(original) = self.original.as_ref() else {
            return;
        };
        let (box_w, box_h) = gpu.box_size();
        // the surface is a clamped 1x1 until the window is laid out
        if box_w <= 1 || box_h <= 1 {
            return;
        }
        if let Some((w, h)) = self.fitted
            && (w == box_w || h == box_h)
        {
            return;
        }
        let (target_w, target_h) = scaled_size(original.width(), original.height(), box_w, box_h);
        match loader::resize_exact(original, target_w, target_h) {
            Ok(resized) => {
                gpu.set_image(&resized);
                self.fitted = Some((target_w, target_h));
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn toggle_fullscreen(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        self.fullscreen = !self.fullscreen;
        if self.fullscreen {
            window.set_maximized(false);
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        } else {
            window.set_fullscreen(None);
            window.set_maximized(true);
        }
        debug!(fullscreen = self.fullscreen, "presentation toggled");
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: PhysicalKey) {
        match key {
            PhysicalKey::Code(KeyCode::Enter | KeyCode::ArrowRight) => self.show_next(event_loop),
            PhysicalKey::Code(KeyCode::ArrowLeft) => self.show_previous(event_loop),
            PhysicalKey::Code(KeyCode::Space) => {
                let paused = self.clock.toggle_pause();
                debug!(paused, "pause toggled");
            }
            PhysicalKey::Code(KeyCode::Escape | KeyCode::KeyQ) => event_loop.exit(),
            PhysicalKey::Code(KeyCode::KeyF) => self.toggle_fullscreen(),
            _ => {}
        }
    }
}

impl ApplicationHandler for SlideshowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("slideshow")
            .with_fullscreen(Some(Fullscreen::Borderless(None)));
        let window = match event_loop
            .create_window(attrs)
            .context("failed to create window")
        {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err),
        };
        window.set_cursor_visible(false);
        self.window = Some(window.clone());

        match Gpu::new(window) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(err) => return self.fail(event_loop, err),
        }

        self.show_next(event_loop);
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + TICK));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("window close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.resize(width, height);
                }
                self.fit_to_window(event_loop);
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu) = self.gpu.as_mut()
                    && let Err(err) = gpu.draw()
                {
                    self.fail(event_loop, err);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.handle_key(event_loop, event.physical_key);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }
        let now = Instant::now();
        if self.clock.should_advance(now) {
            self.show_next(event_loop);
        }
        self.fit_to_window(event_loop);
        event_loop.set_control_flow(ControlFlow::WaitUntil(now + TICK));
    }
}

/// Run the slideshow until the user quits.
///
/// # Errors
/// Returns an error if the event loop cannot be built or a fatal display or
/// decode failure stops the show.
pub fn run(playlist: Playlist, options: ViewerOptions) -> Result<()> {
    info!(
        count = playlist.len(),
        interval = ?options.interval,
        "starting slideshow"
    );
    let event_loop = EventLoop::new().context("failed to build event loop")?;
    let mut app = SlideshowApp::new(playlist, options);
    event_loop
        .run_app(&mut app)
        .context("event loop failed")?;
    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_only_after_the_interval() {
        let mut clock = SlideClock::new(Duration::from_secs(4));
        let start = Instant::now();
        clock.mark_viewed(start);
        assert!(!clock.should_advance(start + Duration::from_secs(3)));
        assert!(clock.should_advance(start + Duration::from_secs(5)));
    }

    #[test]
    fn pausing_gates_the_advance() {
        let mut clock = SlideClock::new(Duration::from_secs(4));
        let start = Instant::now();
        clock.mark_viewed(start);
        assert!(clock.toggle_pause());
        assert!(!clock.should_advance(start + Duration::from_secs(10)));
        assert!(!clock.toggle_pause());
        assert!(clock.should_advance(start + Duration::from_secs(10)));
    }

    #[test]
    fn viewing_resets_the_countdown() {
        let mut clock = SlideClock::new(Duration::from_secs(4));
        let start = Instant::now();
        clock.mark_viewed(start);
        let later = start + Duration::from_secs(5);
        assert!(clock.should_advance(later));
        clock.mark_viewed(later);
        assert!(!clock.should_advance(later + Duration::from_secs(1)));
    }
}
