//! PDF document assembly.
//!
//! One A4 landscape page: a header band with title and generation
//! timestamp, then the captured bitmap scaled to fit the usable area and
//! centered horizontally. The scale only ever shrinks -- a small chart is
//! embedded at its natural size rather than blown up.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::Local;
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image as PdfImage, ImageTransform, ImageXObject, Mm,
    PdfDocument, Px,
};

use crate::error::ExportError;
use crate::render::Snapshot;

/// A4 landscape page size.
pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;
/// Side margins.
pub const MARGIN_X_MM: f32 = 8.5;
/// Top and bottom margins.
pub const MARGIN_Y_MM: f32 = 5.0;
/// Reserved band for the title and timestamp.
pub const HEADER_BAND_MM: f32 = 20.0;

/// Usable image area after margins and the header band.
pub const USABLE_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_X_MM;
pub const USABLE_HEIGHT_MM: f32 = PAGE_HEIGHT_MM - HEADER_BAND_MM - 2.0 * MARGIN_Y_MM;

/// Millimeters per CSS pixel at 96 dpi.
pub const PX_TO_MM: f32 = 25.4 / 96.0;

/// Uniform shrink-to-fit factor for a bitmap of the given pixel size.
/// Never exceeds 1.0.
pub fn fit_scale(px_width: u32, px_height: u32) -> f32 {
    if px_width == 0 || px_height == 0 {
        return 1.0;
    }
    let width_mm = px_width as f32 * PX_TO_MM;
    let height_mm = px_height as f32 * PX_TO_MM;
    (USABLE_WIDTH_MM / width_mm)
        .min(USABLE_HEIGHT_MM / height_mm)
        .min(1.0)
}

pub(super) fn write_pdf(snapshot: &Snapshot, title: &str, path: &Path) -> Result<(), ExportError> {
    let (width, height) = snapshot.image.dimensions();
    let scale = fit_scale(width, height);

    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "timeline");
    let layer = doc.get_page(page).get_layer(layer);

    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(encode_err)?;
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(encode_err)?;

    layer.use_text(
        title,
        16.0,
        Mm(MARGIN_X_MM),
        Mm(PAGE_HEIGHT_MM - MARGIN_Y_MM - 7.0),
        &title_font,
    );
    let stamp = Local::now().format("Generated %Y-%m-%d %H:%M").to_string();
    layer.use_text(
        stamp,
        10.0,
        Mm(MARGIN_X_MM),
        Mm(PAGE_HEIGHT_MM - MARGIN_Y_MM - 13.0),
        &body_font,
    );

    // Strip alpha; the chart is painted on an opaque background.
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in snapshot.image.pixels() {
        rgb.extend_from_slice(&pixel.0[..3]);
    }

    let xobject = ImageXObject {
        width: Px(width as usize),
        height: Px(height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb,
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    };
    let pdf_image = PdfImage::from(xobject);

    let image_width_mm = width as f32 * PX_TO_MM * scale;
    let image_height_mm = height as f32 * PX_TO_MM * scale;
    let x = (PAGE_WIDTH_MM - image_width_mm) / 2.0;
    let y = (PAGE_HEIGHT_MM - HEADER_BAND_MM - MARGIN_Y_MM - image_height_mm).max(MARGIN_Y_MM);

    pdf_image.add_to_layer(
        layer,
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(96.0),
            ..Default::default()
        },
    );

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file)).map_err(encode_err)
}

fn encode_err(error: impl std::fmt::Display) -> ExportError {
    ExportError::Encode {
        format: "pdf",
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_scale_shrinks_oversized_captures() {
        // 3000x1000 px at 0.2646 mm/px: width is the binding constraint
        let scale = fit_scale(3000, 1000);
        let expected = (USABLE_WIDTH_MM / (3000.0 * PX_TO_MM))
            .min(USABLE_HEIGHT_MM / (1000.0 * PX_TO_MM));
        assert!((scale - expected).abs() < 1e-6);
        assert!(scale < 1.0);
    }

    #[test]
    fn test_fit_scale_never_upscales() {
        assert_eq!(fit_scale(100, 50), 1.0);
        for &(w, h) in &[(1u32, 1u32), (500, 500), (10_000, 200), (200, 10_000)] {
            assert!(fit_scale(w, h) <= 1.0);
        }
    }
}
