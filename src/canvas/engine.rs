//! The pattern canvas: pointer input in, raster mutations out.

use super::export::encode_data_uri;
use super::stroke::{DrawingState, StampShape};
use super::{CanvasError, CanvasSettings};
use crate::draw::{Color, Overlay, OverlayState, OverlayStyle, RasterSnapshot, render_grid, render_ruler};
use crate::input::{Point, PointerEvent, Tool};
use log::{debug, error, warn};

/// Smallest accepted brush size.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest accepted brush size.
pub const MAX_BRUSH_SIZE: u32 = 20;

/// Interactive drawing surface.
///
/// Drawn content lives on its own transparent layer, so background and
/// overlays are composed beneath it on every [`render`](Self::render) and
/// toggling an overlay never touches drawn pixels. Content only changes through
/// strokes, stamps, and [`clear`](Self::clear).
pub struct PatternCanvas {
    content: cairo::ImageSurface,
    width: i32,
    height: i32,
    background: Color,
    tool: Tool,
    color: Color,
    brush_size: u32,
    stamp_size: f64,
    overlays: OverlayState,
    overlay_style: OverlayStyle,
    state: DrawingState,
    needs_redraw: bool,
}

impl std::fmt::Debug for PatternCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tool", &self.tool)
            .field("color", &self.color.to_hex())
            .field("brush_size", &self.brush_size)
            .field("overlays", &self.overlays)
            .field("state", &self.state)
            .finish()
    }
}

impl PatternCanvas {
    /// Allocates a blank surface of the configured size.
    pub fn new(settings: CanvasSettings) -> Result<Self, CanvasError> {
        if settings.width == 0 || settings.height == 0 {
            return Err(CanvasError::InvalidSize {
                width: settings.width,
                height: settings.height,
            });
        }
        let width = i32::try_from(settings.width).map_err(|_| CanvasError::InvalidSize {
            width: settings.width,
            height: settings.height,
        })?;
        let height = i32::try_from(settings.height).map_err(|_| CanvasError::InvalidSize {
            width: settings.width,
            height: settings.height,
        })?;

        let content = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        debug!("Created {}x{} pattern canvas", width, height);

        let mut canvas = Self {
            content,
            width,
            height,
            background: settings.background,
            tool: Tool::default(),
            color: settings.color,
            brush_size: MIN_BRUSH_SIZE,
            stamp_size: settings.stamp_size,
            overlays: settings.overlays,
            overlay_style: settings.overlay_style,
            state: DrawingState::Idle,
            needs_redraw: true,
        };
        canvas.set_brush_size(settings.brush_size);
        Ok(canvas)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn overlays(&self) -> OverlayState {
        self.overlays
    }

    pub fn drawing_state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Returns and resets the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ------------------------------------------------------------------
    // Tool and style
    // ------------------------------------------------------------------

    /// Selects the tool for the next stroke. A stroke already in progress keeps
    /// the tool it began with.
    pub fn select_tool(&mut self, tool: Tool) {
        if let Some(active) = self.state.tool()
            && active != tool
        {
            debug!("Tool switched to {} mid-stroke; current {} stroke keeps its tool", tool, active);
        }
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the brush size, clamping into [1, 20]. Returns the applied size.
    pub fn set_brush_size(&mut self, size: u32) -> u32 {
        let clamped = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        if clamped != size {
            warn!(
                "Brush size {} out of range, clamping to {}-{}",
                size, MIN_BRUSH_SIZE, MAX_BRUSH_SIZE
            );
        }
        self.brush_size = clamped;
        clamped
    }

    /// Shows or hides an overlay. Drawn content is untouched.
    pub fn set_overlay(&mut self, overlay: Overlay, visible: bool) {
        if self.overlays.is_visible(overlay) != visible {
            self.overlays.set(overlay, visible);
            self.needs_redraw = true;
        }
    }

    // ------------------------------------------------------------------
    // Pointer gestures
    // ------------------------------------------------------------------

    /// Dispatches a host pointer event to the matching stroke operation.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(point) => self.begin_stroke(point),
            PointerEvent::Move(point) => self.continue_stroke(point),
            PointerEvent::Up(point) => self.end_stroke(point),
            PointerEvent::Leave => self.leave(),
        }
    }

    /// Starts a stroke with the currently selected tool.
    ///
    /// A second pointer-down while drawing first ends the prior stroke at its
    /// last position.
    pub fn begin_stroke(&mut self, point: Point) {
        if let DrawingState::Drawing { current, .. } = self.state {
            debug!("Pointer-down while drawing; ending previous stroke first");
            self.end_stroke(current);
        }

        let anchor = self.clamp_to_surface(point);
        self.state = DrawingState::begin(self.tool, point, anchor);
    }

    /// Extends a brush or eraser stroke to `point`. Other tools only track the
    /// pointer position.
    pub fn continue_stroke(&mut self, point: Point) {
        let in_bounds = self.contains(point);
        let DrawingState::Drawing {
            tool,
            current,
            last_in_bounds,
            ..
        } = &mut self.state
        else {
            return;
        };

        let tool = *tool;
        let from = *current;
        *current = point;
        if in_bounds {
            *last_in_bounds = point;
        }

        match tool {
            Tool::Brush => self.paint_segment(from, point),
            Tool::Eraser => self.erase_segment(from, point),
            Tool::Square | Tool::Circle | Tool::Triangle | Tool::Line => {}
        }
    }

    /// Finishes the current gesture at `point`.
    ///
    /// Without an active stroke, shape tools still stamp at `point` so a bare
    /// release acts as a click; brush, eraser, and line need a press first.
    pub fn end_stroke(&mut self, point: Point) {
        match std::mem::take(&mut self.state) {
            DrawingState::Drawing { tool, start, .. } => match tool {
                Tool::Line => {
                    if let Some(start) = start {
                        self.draw_line(start, point);
                    }
                }
                Tool::Square | Tool::Circle | Tool::Triangle => self.stamp(tool, point),
                Tool::Brush | Tool::Eraser => {}
            },
            DrawingState::Idle => {
                if self.tool.is_shape() {
                    self.stamp(self.tool, point);
                }
            }
        }
    }

    /// Handles the pointer leaving the surface: an active stroke ends at its
    /// last in-bounds position.
    pub fn leave(&mut self) {
        if let DrawingState::Drawing { last_in_bounds, .. } = self.state {
            self.end_stroke(last_in_bounds);
        }
    }

    /// Wipes all drawn content. Overlays and background reappear on the next
    /// render. There is no undo.
    pub fn clear(&mut self) {
        self.with_content("clear", |ctx| {
            ctx.set_operator(cairo::Operator::Clear);
            let _ = ctx.paint();
        });
    }

    // ------------------------------------------------------------------
    // Rendering and export
    // ------------------------------------------------------------------

    /// Composes background, visible overlays, and drawn content onto `ctx`.
    pub fn render(&self, ctx: &cairo::Context) -> Result<(), CanvasError> {
        let width = self.width as f64;
        let height = self.height as f64;

        ctx.save()?;
        ctx.set_operator(cairo::Operator::Source);
        self.background.apply(ctx);
        ctx.rectangle(0.0, 0.0, width, height);
        ctx.fill()?;
        ctx.set_operator(cairo::Operator::Over);

        if self.overlays.grid {
            render_grid(ctx, width, height, self.overlay_style.grid_spacing);
        }
        if self.overlays.ruler {
            render_ruler(
                ctx,
                width,
                height,
                self.overlay_style.ruler_thickness,
                self.overlay_style.ruler_tick_spacing,
            );
        }

        ctx.set_source_surface(&self.content, 0.0, 0.0)?;
        ctx.paint()?;
        ctx.restore()?;
        Ok(())
    }

    /// Renders the full composition into a fresh image surface.
    pub fn composite_surface(&self) -> Result<cairo::ImageSurface, CanvasError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, self.width, self.height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            self.render(&ctx)?;
        }
        surface.flush();
        Ok(surface)
    }

    /// Encodes the composed canvas as PNG. Does not change any state.
    pub fn export_png(&self) -> Result<Vec<u8>, CanvasError> {
        let surface = self.composite_surface()?;
        let mut buffer = Vec::new();
        surface.write_to_png(&mut buffer)?;
        debug!("Exported pattern PNG ({} bytes)", buffer.len());
        Ok(buffer)
    }

    /// Exports the composed canvas as a `data:image/png;base64,` URI.
    pub fn export_data_uri(&self) -> Result<String, CanvasError> {
        Ok(encode_data_uri(&self.export_png()?))
    }

    /// Pixels of the drawn-content layer only (transparent where nothing is drawn).
    pub fn content_snapshot(&self) -> Result<RasterSnapshot, CanvasError> {
        self.content.flush();
        Ok(RasterSnapshot::capture(&self.content)?)
    }

    /// Pixels of the full composition as it would be exported.
    pub fn composite_snapshot(&self) -> Result<RasterSnapshot, CanvasError> {
        Ok(RasterSnapshot::capture(&self.composite_surface()?)?)
    }

    // ------------------------------------------------------------------
    // Raster mutations
    // ------------------------------------------------------------------

    fn paint_segment(&mut self, from: Point, to: Point) {
        let color = self.color;
        let width = self.brush_size as f64;
        self.with_content("brush", |ctx| {
            ctx.set_operator(cairo::Operator::Over);
            color.apply(ctx);
            stroke_segment(ctx, from, to, width);
        });
    }

    fn erase_segment(&mut self, from: Point, to: Point) {
        let width = self.brush_size as f64 * 2.0;
        self.with_content("eraser", |ctx| {
            ctx.set_operator(cairo::Operator::DestOut);
            ctx.set_source_rgba(0.0, 0.0, 0.0, 1.0);
            stroke_segment(ctx, from, to, width);
        });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let color = self.color;
        let width = self.brush_size as f64;
        self.with_content("line", |ctx| {
            ctx.set_operator(cairo::Operator::Over);
            color.apply(ctx);
            stroke_segment(ctx, from, to, width);
        });
    }

    fn stamp(&mut self, tool: Tool, center: Point) {
        let Some(shape) = StampShape::for_tool(tool) else {
            return;
        };
        let color = self.color;
        let half = self.stamp_size / 2.0;
        let size = self.stamp_size;
        self.with_content(tool.name(), |ctx| {
            ctx.set_operator(cairo::Operator::Over);
            color.apply(ctx);
            match shape {
                StampShape::Square => ctx.rectangle(center.x - half, center.y - half, size, size),
                StampShape::Circle => {
                    ctx.arc(center.x, center.y, half, 0.0, std::f64::consts::PI * 2.0);
                }
                StampShape::Triangle => {
                    ctx.move_to(center.x, center.y - half);
                    ctx.line_to(center.x - half, center.y + half);
                    ctx.line_to(center.x + half, center.y + half);
                    ctx.close_path();
                }
            }
            let _ = ctx.fill();
        });
    }

    /// Runs `draw` against a fresh context on the content layer.
    ///
    /// Context creation only fails when Cairo itself is out of memory; that is
    /// logged and the mutation is skipped.
    fn with_content<F>(&mut self, what: &str, draw: F)
    where
        F: FnOnce(&cairo::Context),
    {
        match cairo::Context::new(&self.content) {
            Ok(ctx) => {
                draw(&ctx);
                self.needs_redraw = true;
            }
            Err(err) => error!("Failed to draw {} on pattern canvas: {}", what, err),
        }
    }

    fn contains(&self, point: Point) -> bool {
        point.is_within(self.width as f64, self.height as f64)
    }

    fn clamp_to_surface(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0.0, self.width as f64),
            point.y.clamp(0.0, self.height as f64),
        )
    }
}

fn stroke_segment(ctx: &cairo::Context, from: Point, to: Point, width: f64) {
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
}
