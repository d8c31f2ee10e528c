use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use fontdue::Font;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{Fullscreen, Window};

use plotwidgets::cli::StartupConfig;
use plotwidgets::host::{Canvas, InputEvent, PointerEvent, Rect, Surface, WidgetHost};
use plotwidgets::keymap::{shortcuts, HostAction, Keymap};
use plotwidgets::metrics::{FontdueMetrics, TextMetrics};
use plotwidgets::view::Renderer;
use plotwidgets::widget::{ComboBox, Label, LineEdit};

use super::input::input_from_winit;
use super::mouse::ClickTracker;

/// Caret blink and other timers are polled at this interval
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// The demo window as a widget canvas
pub struct WindowCanvas {
    window: Rc<Window>,
    metrics: Rc<dyn TextMetrics>,
}

impl Canvas for WindowCanvas {
    fn attach(&mut self, region: Rect) -> Surface {
        Surface {
            region,
            metrics: Rc::clone(&self.metrics),
        }
    }

    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }
}

pub struct App {
    startup: StartupConfig,
    font: Rc<Font>,
    keymap: Rc<Keymap>,
    host: Option<WidgetHost<WindowCanvas>>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    modifiers: ModifiersState,
    cursor: (f32, f32),
    clicks: ClickTracker,
}

impl App {
    pub fn new(startup: StartupConfig, font: Font) -> Self {
        Self {
            startup,
            font: Rc::new(font),
            keymap: Rc::new(Keymap::load_default()),
            host: None,
            renderer: None,
            window: None,
            context: None,
            modifiers: ModifiersState::empty(),
            cursor: (0.0, 0.0),
            clicks: ClickTracker::default(),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("plotwidgets")
            .with_inner_size(LogicalSize::new(400, 320));
        let window = Rc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;

        let scale = window.scale_factor() as f32;
        let px = self.startup.widgets.font_size * scale;
        let metrics = FontdueMetrics::new(Rc::clone(&self.font), px)?;

        let mut host = WidgetHost::new(WindowCanvas {
            window: Rc::clone(&window),
            metrics: Rc::new(metrics),
        });
        self.build_widgets(&mut host, scale)?;

        let background = self.startup.widgets.colors.canvas.to_argb_u32();
        let renderer = Renderer::new(
            Rc::clone(&window),
            &context,
            Rc::clone(&self.font),
            px,
            background,
        )?;

        tracing::info!(
            "Window ready: scale {}, font {}px, {} widgets",
            scale,
            px,
            host.widget_count()
        );

        self.host = Some(host);
        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    /// Caption, line edit and combo box in a column, with a status label
    /// reporting commits and choices
    fn build_widgets(&self, host: &mut WidgetHost<WindowCanvas>, scale: f32) -> Result<()> {
        let config = &self.startup.widgets;
        let row_height = (config.font_size * 2.0).round() * scale;
        let x = 20.0 * scale;
        let width = 300.0 * scale;
        let gap = 12.0 * scale;
        let row = |i: usize| Rect::new(x, 20.0 * scale + i as f32 * (row_height + gap), width, row_height);

        let style = config.line_edit_style();
        let blink = config.caret_blink();

        // Added first so the combo box list draws over it
        let status = host.add(Label::with_style(
            row(3),
            "Enter commits, Escape reverts",
            config.label_style(),
        )?);

        host.add(Label::with_style(row(0), &self.startup.label, config.label_style())?);

        let edit_status = Rc::clone(&status);
        let edit = LineEdit::with_style(row(1), &self.startup.text, style)?
            .with_keymap(Rc::clone(&self.keymap))
            .with_caret_blink(blink)
            .on_commit(move |text| set_status(&edit_status, format!("Committed: {}", text)));
        host.add(edit);

        let items: Vec<&str> = self.startup.items.iter().map(String::as_str).collect();
        let select_status = Rc::clone(&status);
        let commit_status = Rc::clone(&status);
        let combo = ComboBox::with_style(row(2), &items, style)?
            .with_keymap(Rc::clone(&self.keymap))
            .with_caret_blink(blink)
            .on_select(move |index, text| {
                set_status(&select_status, format!("Chose item {}: {}", index, text))
            })
            .on_commit(move |text| set_status(&commit_status, format!("Edited: {}", text)));
        host.add(combo);

        Ok(())
    }

    fn dispatch(&mut self, event: InputEvent) {
        if let Some(host) = &mut self.host {
            host.dispatch(&event);
        }
    }

    /// Run the host action bound to a key press, if the table is not captured
    fn handle_host_shortcut(&mut self, event: &InputEvent, event_loop: &ActiveEventLoop) {
        let InputEvent::KeyDown(key) = event else {
            return;
        };
        let action = shortcuts::lock(&shortcuts::global()).lookup(&key.stroke);
        let Some(action) = action else {
            return;
        };
        tracing::debug!("Host shortcut {} -> {}", key.stroke, action);
        match action {
            HostAction::Quit => event_loop.exit(),
            HostAction::FullScreen => {
                if let Some(window) = &self.window {
                    let next = match window.fullscreen() {
                        Some(_) => None,
                        None => Some(Fullscreen::Borderless(None)),
                    };
                    window.set_fullscreen(next);
                }
            }
            HostAction::Save => {
                if let Err(e) = self.startup.widgets.save() {
                    tracing::warn!("Failed to save config: {}", e);
                }
            }
            other => tracing::info!("Host action {} has no effect in the demo", other),
        }
    }

    fn render(&mut self) {
        if let (Some(renderer), Some(host)) = (&mut self.renderer, &self.host) {
            if let Err(e) = renderer.render(host) {
                tracing::error!("Render failed: {:#}", e);
            }
        }
    }
}

fn set_status(status: &Rc<RefCell<Label>>, text: String) {
    status.borrow_mut().set_text(&text);
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                tracing::error!("Failed to initialize window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::warn!("Resize failed: {:#}", e);
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.render(),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let Some(input) = input_from_winit(&event, self.modifiers) else {
                    tracing::trace!("Unmapped key {:?}", event.logical_key);
                    return;
                };
                self.handle_host_shortcut(&input, event_loop);
                self.dispatch(input);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                self.dispatch(InputEvent::PointerMove(PointerEvent::at(
                    self.cursor.0,
                    self.cursor.1,
                )));
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.cursor;
                let input = match state {
                    ElementState::Pressed => {
                        if self.clicks.track_click(x, y) >= 2 {
                            InputEvent::PointerDown(PointerEvent::double(x, y))
                        } else {
                            InputEvent::PointerDown(PointerEvent::at(x, y))
                        }
                    }
                    ElementState::Released => InputEvent::PointerUp(PointerEvent::at(x, y)),
                };
                self.dispatch(input);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if let Some(host) = &mut self.host {
            host.tick(now);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(now + TICK_INTERVAL));
    }
}
