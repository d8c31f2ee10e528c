//! View module - software rendering of hosted widgets
//!
//! `Renderer` owns the softbuffer surface of the demo window and a back
//! buffer; widgets draw into a `Frame` over the back buffer with a
//! `TextPainter`, then the buffer is presented.

pub mod frame;
pub mod text_field;

pub use frame::{BlockPainter, Frame, TextPainter, TextRenderer};

use anyhow::Result;
use fontdue::Font;
use softbuffer::Surface;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use crate::host::{Canvas, WidgetHost};

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer doesn't guarantee buffer contents are preserved between
    /// frames, so we keep our own buffer and copy it on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    painter: TextPainter,
    background: u32,
}

impl Renderer {
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font: Rc<Font>,
        font_size: f32,
        background: u32,
    ) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        resize_surface(&mut surface, width, height)?;

        Ok(Self {
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
            painter: TextPainter::new(font, font_size),
            background,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        resize_surface(&mut self.surface, width, height)
    }

    /// Draw every widget of `host` and present the frame
    pub fn render<C: Canvas>(&mut self, host: &WidgetHost<C>) -> Result<()> {
        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            frame.clear(self.background);
            host.render(&mut frame, &mut self.painter);
        }

        tracing::trace!(
            "Rendered frame {}x{} ({} cached glyphs)",
            self.width,
            self.height,
            self.painter.glyph_cache_size()
        );

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        buffer.copy_from_slice(&self.back_buffer);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

fn resize_surface(
    surface: &mut Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        anyhow::bail!("Surface size must be non-zero, got {}x{}", width, height);
    };
    surface
        .resize(w, h)
        .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
}
