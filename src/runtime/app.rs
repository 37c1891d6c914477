use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Result;
use softbuffer::{Context, Surface as BufferSurface};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::Window;

use slidepanel::gesture::GestureSample;
use slidepanel::geometry::{PanelState, Rect};
use slidepanel::host::{FrameSurface, PanelHost, Surface};
use slidepanel::PanelConfig;

// Demo colors (ARGB)
const BACKGROUND_COLOR: u32 = 0xFF1A1B26;
const PANEL_COLOR: u32 = 0xFF24283B;
const PANEL_BORDER_COLOR: u32 = 0xFF414868;
const GRAB_HANDLE_COLOR: u32 = 0xFF7AA2F7;

const GRAB_HANDLE_WIDTH: usize = 48;
const GRAB_HANDLE_HEIGHT: usize = 4;
const GRAB_HANDLE_TOP_MARGIN: usize = 8;

pub struct App {
    config: PanelConfig,
    initial_state: PanelState,
    host: PanelHost<FrameSurface>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    surface: Option<BufferSurface<Rc<Window>, Rc<Window>>>,
    width: u32,
    height: u32,
    mouse_position: Option<(f64, f64)>,
    dragging: bool,
    last_drag_y: f64,
}

impl App {
    pub fn new(config: PanelConfig, initial_state: PanelState) -> Self {
        let host_frame = Rect::new(
            0.0,
            0.0,
            config.window_width as f32,
            config.window_height as f32,
        );
        let host = PanelHost::new(host_frame)
            .with_duration(std::time::Duration::from_millis(config.slide_duration_ms));

        let width = config.window_width;
        let height = config.window_height;
        Self {
            config,
            initial_state,
            host,
            window: None,
            context: None,
            surface: None,
            width,
            height,
            mouse_position: None,
            dragging: false,
            last_drag_y: 0.0,
        }
    }

    fn send_gesture(&mut self, sample: GestureSample) {
        if let Err(e) = self.host.handle_gesture_event(sample, Instant::now()) {
            tracing::warn!("Dropping gesture sample: {}", e);
        }
    }

    fn point_in_panel(&self, x: f64, y: f64) -> bool {
        self.host
            .child()
            .map(|child| child.frame().contains(x as f32, y as f32))
            .unwrap_or(false)
    }

    fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Resized(size) => {
                self.width = size.width;
                self.height = size.height;
                self.host
                    .set_host_frame(Rect::new(0.0, 0.0, size.width as f32, size.height as f32));
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                if self.dragging {
                    let dy = position.y - self.last_drag_y;
                    self.last_drag_y = position.y;
                    self.send_gesture(GestureSample::changed(dy as f32));
                    return true;
                }
                false
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if let Some((x, y)) = self.mouse_position {
                    if self.point_in_panel(x, y) {
                        self.dragging = true;
                        self.last_drag_y = y;
                        self.send_gesture(GestureSample::began(0.0));
                    }
                }
                false
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                if self.dragging {
                    self.dragging = false;
                    self.send_gesture(GestureSample::ended(0.0));
                    return true;
                }
                false
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    eprintln!("Render error: {}", e);
                }
                false
            }
            _ => false,
        }
    }

    fn render(&mut self) -> Result<()> {
        let Some(surface) = &mut self.surface else {
            return Ok(());
        };
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        surface
            .resize(
                NonZeroU32::new(self.width).unwrap(),
                NonZeroU32::new(self.height).unwrap(),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let width = self.width as usize;
        let height = self.height as usize;

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        buffer.fill(BACKGROUND_COLOR);

        if let Some(child) = self.host.child() {
            let frame = child.frame();
            let panel_x = frame.x.max(0.0) as usize;
            let panel_y = frame.y.max(0.0) as usize;
            let panel_w = frame.width as usize;
            let panel_h = frame.height as usize;

            for py in panel_y..(panel_y + panel_h).min(height) {
                for px in panel_x..(panel_x + panel_w).min(width) {
                    buffer[py * width + px] = PANEL_COLOR;
                }
            }

            // Top border line
            if panel_y < height {
                for px in panel_x..(panel_x + panel_w).min(width) {
                    buffer[panel_y * width + px] = PANEL_BORDER_COLOR;
                }
            }

            // Centered grab handle near the panel's top edge
            let handle_x = panel_x + panel_w.saturating_sub(GRAB_HANDLE_WIDTH) / 2;
            let handle_y = panel_y + GRAB_HANDLE_TOP_MARGIN;
            for py in handle_y..(handle_y + GRAB_HANDLE_HEIGHT).min(height) {
                for px in handle_x..(handle_x + GRAB_HANDLE_WIDTH).min(width) {
                    buffer[py * width + px] = GRAB_HANDLE_COLOR;
                }
            }
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title("Slide Panel")
                .with_inner_size(LogicalSize::new(
                    self.config.window_width,
                    self.config.window_height,
                ));

            let window = Rc::new(event_loop.create_window(window_attributes).unwrap());
            let context = Context::new(Rc::clone(&window)).unwrap();
            let surface = BufferSurface::new(&context, Rc::clone(&window)).unwrap();

            let size = window.inner_size();
            self.width = size.width;
            self.height = size.height;
            self.host
                .set_host_frame(Rect::new(0.0, 0.0, size.width as f32, size.height as f32));
            self.host.set_interactable(self.config.interactable);
            if let Err(e) = self.host.attach(FrameSurface::default(), self.initial_state) {
                tracing::error!("Failed to attach panel: {}", e);
            }

            self.window = Some(window);
            self.context = Some(context);
            self.surface = Some(surface);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                self.handle_event(&event)
            } else {
                false
            }
        } else {
            false
        };

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Poll so in-flight slide animations advance without input
        event_loop.set_control_flow(ControlFlow::Poll);

        if self.host.tick(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}
