//! QR symbol rendering and rasterization.
//!
//! The Matrix Renderer collaborator: takes an assembled [`WifiPayload`] and
//! produces a scannable symbol as SVG markup or PNG bytes. Error correction
//! is pinned to the highest level - WiFi codes are scanned from paper across
//! the room, so scan reliability wins over symbol density.

use std::io::Cursor;

use image::{GrayImage, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::error::Result;
use crate::payload::WifiPayload;

/// Pixel value for dark modules.
const DARK: Luma<u8> = Luma([0u8]);

/// Pixel value for light modules and the quiet zone.
const LIGHT: Luma<u8> = Luma([255u8]);

/// Rasterization options for symbol export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module.
    pub scale: u32,

    /// Quiet-zone width in modules on each side.
    pub border: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 10,
            border: 4,
        }
    }
}

/// Encodes the payload into a QR symbol at the highest error correction level.
///
/// # Errors
///
/// Returns `QrEncodingFailed` if the payload does not fit any QR version at
/// level H. That takes a payload far beyond any real credential set, so a
/// failure here is unexpected rather than a validation outcome.
pub fn encode_symbol(payload: &WifiPayload) -> Result<QrCode> {
    let code = QrCode::with_error_correction_level(payload.as_str(), EcLevel::H)?;
    debug!(
        payload_len = payload.as_str().len(),
        modules = code.width(),
        "encoded QR symbol"
    );
    Ok(code)
}

/// Renders the payload as a standalone SVG document.
///
/// # Errors
///
/// Returns `QrEncodingFailed` if the payload cannot be encoded.
pub fn to_svg(payload: &WifiPayload, options: &RenderOptions) -> Result<String> {
    let code = encode_symbol(payload)?;
    let scale = options.scale.max(1);

    let svg = code
        .render::<svg::Color<'_>>()
        .module_dimensions(scale, scale)
        .quiet_zone(options.border > 0)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    Ok(svg)
}

/// Renders the payload as PNG bytes.
///
/// The module grid is rasterized directly so the quiet zone is exactly
/// `border` modules wide on every side, at `scale` pixels per module.
///
/// # Errors
///
/// Returns `QrEncodingFailed` if the payload cannot be encoded, or
/// `ImageEncodingFailed` if PNG encoding fails.
pub fn to_png(payload: &WifiPayload, options: &RenderOptions) -> Result<Vec<u8>> {
    let code = encode_symbol(payload)?;
    let scale = options.scale.max(1);
    let border = options.border;

    let modules = u32::try_from(code.width()).unwrap_or(u32::MAX);
    let side = (modules + 2 * border) * scale;

    let colors = code.to_colors();
    let mut img = GrayImage::from_pixel(side, side, LIGHT);
    for (i, color) in colors.iter().enumerate() {
        if *color == qrcode::Color::Dark {
            let i = u32::try_from(i).unwrap_or(u32::MAX);
            let (mx, my) = (i % modules, i / modules);
            let (x0, y0) = ((mx + border) * scale, (my + border) * scale);
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x0 + dx, y0 + dy, DARK);
                }
            }
        }
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{SecurityMode, WifiCredentials};

    fn payload() -> WifiPayload {
        let creds = WifiCredentials::new(
            "HomeNet",
            SecurityMode::Wpa,
            Some("password123".into()),
            false,
        )
        .unwrap();
        WifiPayload::assemble(&creds)
    }

    #[test]
    fn test_encode_symbol_succeeds_for_typical_payload() {
        let code = encode_symbol(&payload()).unwrap();
        assert!(code.width() >= 21, "smallest QR symbol is 21 modules");
    }

    #[test]
    fn test_svg_output_is_svg_markup() {
        let svg = to_svg(&payload(), &RenderOptions::default()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_png_output_has_png_signature() {
        let png = to_png(&payload(), &RenderOptions::default()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_png_dimensions_match_scale_and_border() {
        let options = RenderOptions { scale: 3, border: 2 };
        let png = to_png(&payload(), &options).unwrap();

        let img = image::load_from_memory(&png).unwrap();
        let modules = u32::try_from(encode_symbol(&payload()).unwrap().width()).unwrap();
        let expected = (modules + 2 * options.border) * options.scale;
        assert_eq!(img.width(), expected);
        assert_eq!(img.height(), expected);
    }

    #[test]
    fn test_zero_border_shrinks_image() {
        let with_border = to_png(&payload(), &RenderOptions { scale: 2, border: 4 }).unwrap();
        let without = to_png(&payload(), &RenderOptions { scale: 2, border: 0 }).unwrap();

        let a = image::load_from_memory(&with_border).unwrap();
        let b = image::load_from_memory(&without).unwrap();
        assert_eq!(a.width(), b.width() + 2 * 4 * 2);
    }

    #[test]
    fn test_scale_is_clamped_to_at_least_one() {
        let png = to_png(&payload(), &RenderOptions { scale: 0, border: 0 }).unwrap();
        let img = image::load_from_memory(&png).unwrap();
        assert!(img.width() >= 21);
    }
}
