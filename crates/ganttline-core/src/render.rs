//! Raster rendering of a computed timeline.
//!
//! Paints the layout engine's output into an RGBA bitmap: header bands,
//! day grid with weekend shading and today highlight, month separators,
//! and status-colored task bars. The renderer is the capture target for
//! the export adapter -- capture is synchronous and deterministic, a
//! plain function of the computed layout.
//!
//! No font rasterization happens here; the PDF title block carries the
//! text.

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::Timeline;
use crate::task::TaskStatus;

/// Height of the month header row, in CSS pixels.
pub const MONTH_ROW_HEIGHT: f32 = 22.0;
/// Height of the day header row, in CSS pixels.
pub const DAY_ROW_HEIGHT: f32 = 22.0;
/// Total header band height.
pub const HEADER_HEIGHT: f32 = MONTH_ROW_HEIGHT + DAY_ROW_HEIGHT;
/// Height of one task row.
pub const ROW_HEIGHT: f32 = 28.0;
/// Vertical inset of a bar within its row.
pub const BAR_INSET: f32 = 5.0;
/// Padding below the last row.
pub const FOOTER_PAD: f32 = 8.0;
/// Capture resolution multiplier used for export quality.
pub const EXPORT_OVERSAMPLE: f32 = 2.0;

/// RGBA color, straight-alpha.
pub type Color = [u8; 4];

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub fn parse_hex_color(value: &str) -> Result<Color, ConfigError> {
    let hex = value.trim_start_matches('#');
    let invalid = || ConfigError::InvalidValue {
        key: "color".to_string(),
        message: format!("'{value}' is not a #RRGGBB or #RRGGBBAA color"),
    };

    if hex.len() != 6 && hex.len() != 8 {
        return Err(invalid());
    }
    let mut parts = [0u8; 4];
    parts[3] = 255;
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let chunk = std::str::from_utf8(chunk).map_err(|_| invalid())?;
        parts[i] = u8::from_str_radix(chunk, 16).map_err(|_| invalid())?;
    }
    Ok(parts)
}

/// Colors used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Color,
    pub header_fill: Color,
    pub grid: Color,
    pub weekend_fill: Color,
    pub today_fill: Color,
    pub today_line: Color,
    pub month_line: Color,
    pub pending: Color,
    pub in_progress: Color,
    pub completed: Color,
    pub cancelled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: [255, 255, 255, 255],
            header_fill: [248, 250, 252, 255],
            grid: [226, 232, 240, 255],
            weekend_fill: [241, 245, 249, 255],
            today_fill: [254, 242, 242, 255],
            today_line: [239, 68, 68, 255],
            month_line: [148, 163, 184, 255],
            pending: [245, 158, 11, 255],
            in_progress: [59, 130, 246, 255],
            completed: [34, 197, 94, 255],
            cancelled: [148, 163, 184, 255],
        }
    }
}

impl Theme {
    /// Bar fill color for a status.
    pub fn bar_color(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
            TaskStatus::Cancelled => self.cancelled,
        }
    }
}

/// A captured bitmap of the rendered timeline plus its CSS-pixel size.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub image: RgbaImage,
    pub css_width: f32,
    pub css_height: f32,
    /// Oversampling factor the bitmap was captured at
    pub scale: f32,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// True when there is nothing to export.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Timeline rasterizer.
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    /// Create a renderer with the default theme.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Create with a custom theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Chart height in CSS pixels for a given layout.
    pub fn css_height(&self, timeline: &Timeline) -> f32 {
        HEADER_HEIGHT + timeline.bars.len() as f32 * ROW_HEIGHT + FOOTER_PAD
    }

    /// Paint the timeline at `scale` times CSS resolution.
    ///
    /// Export uses [`EXPORT_OVERSAMPLE`] for print quality; interactive
    /// previews can pass 1.0.
    pub fn snapshot(&self, timeline: &Timeline, scale: f32) -> Snapshot {
        let css_width = timeline.css_width();
        let css_height = self.css_height(timeline);
        let width = (css_width * scale).ceil().max(0.0) as u32;
        let height = (css_height * scale).ceil().max(0.0) as u32;

        let mut image = RgbaImage::from_pixel(width, height, Rgba(self.theme.background));
        if width == 0 || height == 0 {
            return Snapshot {
                image,
                css_width,
                css_height,
                scale,
            };
        }

        let t = &self.theme;
        let day_width = timeline.day_width;
        let body_top = HEADER_HEIGHT;

        // Header band
        fill_rect(&mut image, scale, 0.0, 0.0, css_width, HEADER_HEIGHT, t.header_fill);

        // Per-column shading in the body
        for column in &timeline.columns {
            let x = column.offset as f32 * day_width;
            if column.is_weekend {
                fill_rect(
                    &mut image,
                    scale,
                    x,
                    body_top,
                    day_width,
                    css_height - body_top,
                    t.weekend_fill,
                );
            }
            if column.is_today {
                fill_rect(
                    &mut image,
                    scale,
                    x,
                    body_top,
                    day_width,
                    css_height - body_top,
                    t.today_fill,
                );
            }
        }

        // Day gridlines from the day row down
        for column in &timeline.columns {
            let x = column.offset as f32 * day_width;
            fill_rect(
                &mut image,
                scale,
                x,
                MONTH_ROW_HEIGHT,
                1.0,
                css_height - MONTH_ROW_HEIGHT,
                t.grid,
            );
        }

        // Month separators span the full height
        for group in &timeline.months {
            let x = group.start_offset as f32 * day_width;
            fill_rect(&mut image, scale, x, 0.0, 1.0, css_height, t.month_line);
        }

        // Header/body divider and month/day divider
        fill_rect(&mut image, scale, 0.0, MONTH_ROW_HEIGHT, css_width, 1.0, t.grid);
        fill_rect(&mut image, scale, 0.0, HEADER_HEIGHT, css_width, 1.0, t.month_line);

        // Today marker line at the column's left edge
        if let Some(today) = timeline.columns.iter().find(|c| c.is_today) {
            let x = today.offset as f32 * day_width;
            fill_rect(
                &mut image,
                scale,
                x,
                body_top,
                2.0,
                css_height - body_top,
                t.today_line,
            );
        }

        // Task bars, one row each, drawn over the grid
        for (row, bar) in timeline.bars.iter().enumerate() {
            let y = HEADER_HEIGHT + row as f32 * ROW_HEIGHT + BAR_INSET;
            let h = ROW_HEIGHT - 2.0 * BAR_INSET;
            fill_rect(
                &mut image,
                scale,
                bar.left,
                y,
                bar.width,
                h,
                t.bar_color(bar.status),
            );
        }

        Snapshot {
            image,
            css_width,
            css_height,
            scale,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill an axis-aligned rectangle given in CSS pixels, scaled and
/// clipped to the image bounds.
fn fill_rect(image: &mut RgbaImage, scale: f32, x: f32, y: f32, w: f32, h: f32, color: Color) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    let x0 = (x * scale).round().max(0.0) as u32;
    let y0 = (y * scale).round().max(0.0) as u32;
    let x1 = (((x + w) * scale).round() as u32).min(image.width());
    let y1 = (((y + h) * scale).round() as u32).min(image.height());

    for py in y0..y1 {
        for px in x0..x1 {
            let dst = image.get_pixel_mut(px, py);
            *dst = Rgba(blend(dst.0, color));
        }
    }
}

/// Source-over blend of straight-alpha colors.
fn blend(dst: Color, src: Color) -> Color {
    if src[3] == 255 {
        return src;
    }
    let a = src[3] as u32;
    let inv = 255 - a;
    let mut out = [0u8; 4];
    for i in 0..3 {
        out[i] = ((src[i] as u32 * a + dst[i] as u32 * inv) / 255) as u8;
    }
    out[3] = 255u8.max(dst[3]);
    out
}
