//! PNG rasterizer for the code card.
//!
//! Paints the same layers the webview shows: gradient background, padded
//! code window with a title bar, and the highlighted source. Glyphs come
//! from a monospace font rasterized with fontdue.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fontdue::{Font, FontSettings, Metrics};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use parking_lot::Mutex;

use crate::error::{ExportError, ExportResult};
use crate::export::{CardImage, CardSnapshot, Rasterizer};
use crate::highlight::{HighlightedCode, Highlighter};
use crate::style::{Background, Rgb};

/// Monospace fonts tried in order when none is configured.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "/Library/Fonts/Courier New.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

pub const CARD_RADIUS: u32 = 6;
pub const TITLE_BAR_HEIGHT: u32 = 32;
pub const BORDER_WIDTH: u32 = 2;
pub const LINE_HEIGHT_FACTOR: f32 = 1.45;
const TITLE_FONT_SIZE: f32 = 14.0;
const CODE_INSET_X: f32 = 12.0;
const CODE_INSET_Y: f32 = 10.0;
const WINDOW_OPACITY: f32 = 0.85;
const BORDER_COLOR: Rgb = Rgb(0x9c, 0xa3, 0xaf);
const DOT_COLOR: Rgb = Rgb(0xd1, 0xd5, 0xdb);
const DOT_RADIUS: f32 = 6.0;

/// Axis-aligned pixel rectangle, right/bottom exclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub fn inset(self, by: u32) -> Rect {
        Rect {
            left: self.left + by,
            top: self.top + by,
            right: self.right.saturating_sub(by).max(self.left + by),
            bottom: self.bottom.saturating_sub(by).max(self.top + by),
        }
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.left as i64 && x < self.right as i64 && y >= self.top as i64 && y < self.bottom as i64
    }
}

/// The code window inside a card of the given size and padding.
pub fn window_rect(width: u32, height: u32, padding: u32) -> Rect {
    let padding = padding.min(width / 2).min(height / 2);
    Rect {
        left: padding,
        top: padding,
        right: width - padding,
        bottom: height - padding,
    }
}

fn blend(pixel: &mut Rgba<u8>, color: Rgb, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |dst: u8, src: u8| (dst as f32 + (src as f32 - dst as f32) * alpha).round() as u8;
    pixel.0[0] = mix(pixel.0[0], color.0);
    pixel.0[1] = mix(pixel.0[1], color.1);
    pixel.0[2] = mix(pixel.0[2], color.2);
}

/// Fill the whole image with the left-to-right background gradient.
pub fn paint_background(img: &mut RgbaImage, background: Background) {
    let (from, to) = background.stops();
    let span = img.width().saturating_sub(1).max(1) as f32;
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        let color = from.lerp(to, x as f32 / span);
        *pixel = Rgba([color.0, color.1, color.2, 255]);
    }
}

/// Blend `color` over every pixel of `rect`.
pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgb, alpha: f32) {
    for y in rect.top..rect.bottom.min(img.height()) {
        for x in rect.left..rect.right.min(img.width()) {
            blend(img.get_pixel_mut(x, y), color, alpha);
        }
    }
}

/// Draw a border of `thickness` just inside `rect`.
pub fn stroke_rect(img: &mut RgbaImage, rect: Rect, thickness: u32, color: Rgb) {
    let inner = rect.inset(thickness);
    for y in rect.top..rect.bottom.min(img.height()) {
        for x in rect.left..rect.right.min(img.width()) {
            if !inner.contains(x as i64, y as i64) {
                blend(img.get_pixel_mut(x, y), color, 1.0);
            }
        }
    }
}

fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgb) {
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as u32).min(img.width());
    let y1 = ((cy + radius).ceil() as u32).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            // One pixel of coverage falloff for a soft edge.
            let coverage = (radius - (dx * dx + dy * dy).sqrt() + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                blend(img.get_pixel_mut(x, y), color, coverage);
            }
        }
    }
}

/// Make everything outside a rounded rectangle of `radius` transparent.
pub fn round_corners(img: &mut RgbaImage, radius: u32) {
    let (width, height) = img.dimensions();
    let r = radius.min(width / 2).min(height / 2) as f32;
    if r == 0.0 {
        return;
    }
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let cx = px.clamp(r, width as f32 - r);
        let cy = py.clamp(r, height as f32 - r);
        let distance = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
        let coverage = (r - distance + 0.5).clamp(0.0, 1.0);
        pixel.0[3] = (pixel.0[3] as f32 * coverage).round() as u8;
    }
}

/// Glyph painter with a per-render bitmap cache.
struct TextPainter<'f> {
    font: &'f Font,
    cache: HashMap<(char, u32), (Metrics, Vec<u8>)>,
}

impl<'f> TextPainter<'f> {
    fn new(font: &'f Font) -> Self {
        Self {
            font,
            cache: HashMap::new(),
        }
    }

    fn ascent(&self, size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(size)
            .map(|m| m.ascent)
            .unwrap_or(size * 0.8)
    }

    fn advance(&self, ch: char, size: f32) -> f32 {
        self.font.metrics(ch, size).advance_width
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }

    /// Draw one glyph with its pen position at `x` on `baseline`.
    /// Returns the advance.
    fn draw_char(
        &mut self,
        img: &mut RgbaImage,
        ch: char,
        size: f32,
        x: f32,
        baseline: f32,
        color: Rgb,
        clip: Rect,
    ) -> f32 {
        let font = self.font;
        let (metrics, bitmap) = self
            .cache
            .entry((ch, size.to_bits()))
            .or_insert_with(|| font.rasterize(ch, size));

        let origin_x = (x + metrics.xmin as f32).round() as i64;
        let origin_y = (baseline - metrics.height as f32 - metrics.ymin as f32).round() as i64;
        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let coverage = bitmap[row * metrics.width + col];
                if coverage == 0 {
                    continue;
                }
                let px = origin_x + col as i64;
                let py = origin_y + row as i64;
                if clip.contains(px, py) && px < img.width() as i64 && py < img.height() as i64 {
                    blend(img.get_pixel_mut(px as u32, py as u32), color, coverage as f32 / 255.0);
                }
            }
        }
        metrics.advance_width
    }
}

/// Text area of the code window, in pixels.
#[derive(Clone, Copy, Debug)]
struct CodeFrame {
    left: f32,
    right: f32,
    first_baseline: f32,
    bottom: f32,
    ascent: f32,
    line_height: f32,
    tab_width: f32,
    wrap: bool,
}

impl CodeFrame {
    fn overflows(&self, baseline: f32) -> bool {
        baseline - self.ascent > self.bottom
    }
}

/// Pen position of one visible glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GlyphPos {
    ch: char,
    x: f32,
    baseline: f32,
    color: Rgb,
}

/// Lay out the highlighted lines inside `frame`.
///
/// Layout stops at the first row below the window, wrapped rows included.
/// Without wrapping, the rest of a line past the right edge is dropped.
fn layout_code(
    code: &HighlightedCode,
    frame: &CodeFrame,
    advance: impl Fn(char) -> f32,
) -> Vec<GlyphPos> {
    let mut glyphs = Vec::new();
    let mut baseline = frame.first_baseline;

    'lines: for spans in &code.lines {
        if frame.overflows(baseline) {
            break;
        }
        let mut pen = frame.left;
        let chars = spans
            .iter()
            .flat_map(|span| span.text.chars().map(move |ch| (ch, span.color)));
        for (ch, color) in chars {
            let width = if ch == '\t' { frame.tab_width } else { advance(ch) };
            if pen + width > frame.right && pen > frame.left {
                if !frame.wrap {
                    break;
                }
                pen = frame.left;
                baseline += frame.line_height;
                if frame.overflows(baseline) {
                    break 'lines;
                }
            }
            if ch != '\t' {
                glyphs.push(GlyphPos {
                    ch,
                    x: pen,
                    baseline,
                    color,
                });
            }
            pen += width;
        }
        baseline += frame.line_height;
    }
    glyphs
}

/// Rasterizes card snapshots with syntect highlighting and a monospace font.
pub struct CardRasterizer {
    font_path: Option<PathBuf>,
    font: Mutex<Option<Arc<Font>>>,
}

impl CardRasterizer {
    /// `font_path` overrides the platform candidate list.
    pub fn new(font_path: Option<PathBuf>) -> Self {
        Self {
            font_path,
            font: Mutex::new(None),
        }
    }

    fn read_font(path: &Path) -> ExportResult<Font> {
        let bytes = std::fs::read(path).map_err(|e| {
            ExportError::FontUnavailable(format!("failed to read {}: {}", path.display(), e))
        })?;
        Font::from_bytes(bytes, FontSettings::default()).map_err(|e| {
            ExportError::FontUnavailable(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    fn font(&self) -> ExportResult<Arc<Font>> {
        let mut slot = self.font.lock();
        if let Some(font) = slot.as_ref() {
            return Ok(font.clone());
        }

        let font = match &self.font_path {
            Some(path) => Self::read_font(path)?,
            None => FONT_CANDIDATES
                .iter()
                .map(Path::new)
                .filter(|path| path.exists())
                .find_map(|path| match Self::read_font(path) {
                    Ok(font) => {
                        tracing::debug!("Using font {:?}", path);
                        Some(font)
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        None
                    }
                })
                .ok_or_else(|| {
                    ExportError::FontUnavailable("no monospace font found; pass --font".to_string())
                })?,
        };

        let font = Arc::new(font);
        *slot = Some(font.clone());
        Ok(font)
    }

    /// Paint a card into a pixel buffer.
    pub fn paint(&self, card: &CardSnapshot, code: &HighlightedCode) -> ExportResult<RgbaImage> {
        if card.width == 0 || card.height == 0 {
            return Err(ExportError::Capture(format!(
                "card has no area ({}x{})",
                card.width, card.height
            )));
        }
        let font = self.font()?;
        let mut painter = TextPainter::new(&font);
        let mut img = RgbaImage::new(card.width, card.height);

        paint_background(&mut img, card.background);

        let window = window_rect(card.width, card.height, card.padding);
        fill_rect(&mut img, window, code.background, WINDOW_OPACITY);
        stroke_rect(&mut img, window, BORDER_WIDTH, BORDER_COLOR);

        // Title bar: divider, three dots, centred filename.
        let bar = Rect {
            bottom: (window.top + TITLE_BAR_HEIGHT).min(window.bottom),
            ..window
        };
        let divider = Rect {
            top: bar.bottom.saturating_sub(BORDER_WIDTH).max(bar.top),
            ..bar
        };
        fill_rect(&mut img, divider, BORDER_COLOR, 1.0);

        let dot_y = bar.top as f32 + TITLE_BAR_HEIGHT as f32 / 2.0;
        for i in 0..3 {
            let dot_x = bar.left as f32 + 8.0 + DOT_RADIUS + i as f32 * (2.0 * DOT_RADIUS + 8.0);
            fill_circle(&mut img, dot_x, dot_y, DOT_RADIUS, DOT_COLOR);
        }

        let title_clip = bar.inset(BORDER_WIDTH);
        let title_width = painter.text_width(&card.filename, TITLE_FONT_SIZE);
        let mut pen = (bar.left + bar.right) as f32 / 2.0 - title_width / 2.0;
        let title_baseline = dot_y + painter.ascent(TITLE_FONT_SIZE) / 2.0 - 1.0;
        let title_color = code.foreground.lerp(code.background, 0.2);
        for ch in card.filename.chars() {
            pen += painter.draw_char(&mut img, ch, TITLE_FONT_SIZE, pen, title_baseline, title_color, title_clip);
        }

        // Code body.
        let body = Rect {
            top: bar.bottom,
            ..window.inset(BORDER_WIDTH)
        };
        let size = card.font_size.max(1.0);
        let ascent = painter.ascent(size);
        let frame = CodeFrame {
            left: body.left as f32 + CODE_INSET_X,
            right: body.right as f32 - CODE_INSET_X,
            first_baseline: body.top as f32 + CODE_INSET_Y + ascent,
            bottom: body.bottom as f32,
            ascent,
            line_height: (size * LINE_HEIGHT_FACTOR).round(),
            tab_width: painter.advance(' ', size) * 4.0,
            wrap: card.word_wrap,
        };
        for glyph in layout_code(code, &frame, |ch| painter.advance(ch, size)) {
            painter.draw_char(&mut img, glyph.ch, size, glyph.x, glyph.baseline, glyph.color, body);
        }

        round_corners(&mut img, CARD_RADIUS);
        Ok(img)
    }
}

impl Rasterizer for CardRasterizer {
    fn snapshot(&self, card: &CardSnapshot) -> ExportResult<CardImage> {
        let code = Highlighter::shared().highlight(&card.source, card.language, card.theme)?;
        let img = self.paint(card, &code)?;

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(img).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        Ok(CardImage {
            width: card.width,
            height: card.height,
            png,
        })
    }
}
