//! Reference overlays (grid and ruler) painted beneath pattern content.

use super::color::Color;

/// Grid line color (#e5e7eb).
pub const GRID_COLOR: Color = Color::new(229.0 / 255.0, 231.0 / 255.0, 235.0 / 255.0, 1.0);
/// Ruler band fill (#f3f4f6).
pub const RULER_BAND: Color = Color::new(243.0 / 255.0, 244.0 / 255.0, 246.0 / 255.0, 1.0);
/// Ruler tick color (#9ca3af).
pub const RULER_TICK: Color = Color::new(156.0 / 255.0, 163.0 / 255.0, 175.0 / 255.0, 1.0);
/// Ruler label color (#374151).
pub const RULER_LABEL: Color = Color::new(55.0 / 255.0, 65.0 / 255.0, 81.0 / 255.0, 1.0);

const GRID_LINE_WIDTH: f64 = 0.5;
const TICK_LENGTH: f64 = 5.0;
const LABEL_FONT_SIZE: f64 = 10.0;

/// Which reference overlay to toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overlay {
    Grid,
    Ruler,
}

/// Visibility flags for the overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayState {
    pub grid: bool,
    pub ruler: bool,
}

impl OverlayState {
    pub fn is_visible(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Grid => self.grid,
            Overlay::Ruler => self.ruler,
        }
    }

    pub fn set(&mut self, overlay: Overlay, visible: bool) {
        match overlay {
            Overlay::Grid => self.grid = visible,
            Overlay::Ruler => self.ruler = visible,
        }
    }
}

/// Overlay geometry taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Distance between grid lines in pixels
    pub grid_spacing: f64,
    /// Width of the ruler bands in pixels
    pub ruler_thickness: f64,
    /// Distance between labelled ruler ticks in pixels
    pub ruler_tick_spacing: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            grid_spacing: 20.0,
            ruler_thickness: 20.0,
            ruler_tick_spacing: 50.0,
        }
    }
}

/// Draws the reference grid: thin lines every `spacing` pixels, edges included.
pub fn render_grid(ctx: &cairo::Context, width: f64, height: f64, spacing: f64) {
    if spacing <= 0.0 {
        return;
    }

    let _ = ctx.save();
    GRID_COLOR.apply(ctx);
    ctx.set_line_width(GRID_LINE_WIDTH);

    let mut x = 0.0;
    while x <= width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        x += spacing;
    }

    let mut y = 0.0;
    while y <= height {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        y += spacing;
    }

    let _ = ctx.stroke();
    let _ = ctx.restore();
}

/// Draws the top and left rulers with tick marks and coordinate labels.
///
/// Vertical ruler labels are rotated a quarter turn counter-clockwise.
pub fn render_ruler(ctx: &cairo::Context, width: f64, height: f64, thickness: f64, tick: f64) {
    if tick <= 0.0 || thickness <= 0.0 {
        return;
    }

    let _ = ctx.save();

    RULER_BAND.apply(ctx);
    ctx.rectangle(0.0, 0.0, width, thickness);
    ctx.rectangle(0.0, 0.0, thickness, height);
    let _ = ctx.fill();

    RULER_TICK.apply(ctx);
    ctx.set_line_width(1.0);
    let tick_start = (thickness - TICK_LENGTH).max(0.0);

    let mut x = 0.0;
    while x <= width {
        ctx.move_to(x, tick_start);
        ctx.line_to(x, thickness);
        x += tick;
    }
    let mut y = 0.0;
    while y <= height {
        ctx.move_to(tick_start, y);
        ctx.line_to(thickness, y);
        y += tick;
    }
    let _ = ctx.stroke();

    RULER_LABEL.apply(ctx);
    let layout = pangocairo::functions::create_layout(ctx);
    let font = pango::FontDescription::from_string(&format!("Sans {}px", LABEL_FONT_SIZE));
    layout.set_font_description(Some(&font));

    let mut x = tick;
    while x <= width {
        show_label(ctx, &layout, &format!("{}", x as i64), x + 2.0, thickness - 8.0, 0.0);
        x += tick;
    }

    let mut y = tick;
    while y <= height {
        show_label(
            ctx,
            &layout,
            &format!("{}", y as i64),
            thickness - 12.0,
            y - 2.0,
            -std::f64::consts::FRAC_PI_2,
        );
        y += tick;
    }

    let _ = ctx.restore();
}

/// Draws `text` with its baseline starting at (`x`, `y`), rotated by `angle`.
fn show_label(ctx: &cairo::Context, layout: &pango::Layout, text: &str, x: f64, y: f64, angle: f64) {
    layout.set_text(text);
    // Pango positions from the top-left corner, labels are placed by baseline
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;

    let _ = ctx.save();
    ctx.translate(x, y);
    ctx.rotate(angle);
    ctx.move_to(0.0, -baseline);
    pangocairo::functions::show_layout(ctx, layout);
    let _ = ctx.restore();
}
