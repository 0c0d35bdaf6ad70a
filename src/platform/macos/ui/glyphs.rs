//! SF Symbol rasterization for egui.
//!
//! Symbols are drawn by AppKit (`NSImage imageWithSystemSymbolName:`) into a
//! bitmap, and only the alpha channel is kept: the texture is white and gets
//! tinted by the caller, like a template image.

use std::collections::HashMap;

use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions};

use crate::platform::macos::ffi::bridge::{autoreleasepool, class, id, msg_send, nil, nsstring};

/// `NSAlphaFirstBitmapFormat`.
const ALPHA_FIRST: usize = 1 << 0;

/// Lazily rendered symbol textures for one pixel size.
#[derive(Default)]
pub struct GlyphCache {
    pixels: u32,
    textures: HashMap<String, Option<TextureHandle>>,
}

impl GlyphCache {
    /// Texture for `name` at `pixels` square, rendering it on first use.
    ///
    /// Returns `None` for names AppKit does not know.
    pub fn get(&mut self, ctx: &egui::Context, name: &str, pixels: u32) -> Option<&TextureHandle> {
        if pixels != self.pixels {
            self.textures.clear();
            self.pixels = pixels;
        }
        if !self.textures.contains_key(name) {
            let texture = rasterize(name, pixels).map(|image| {
                ctx.load_texture(format!("sf:{}", name), image, TextureOptions::LINEAR)
            });
            if texture.is_none() {
                log::debug!("No glyph for {}", name);
            }
            self.textures.insert(name.to_string(), texture);
        }
        self.textures.get(name).and_then(Option::as_ref)
    }
}

fn rasterize(name: &str, pixels: u32) -> Option<ColorImage> {
    autoreleasepool(|_| unsafe { rasterize_in_pool(name, pixels) })
}

unsafe fn rasterize_in_pool(name: &str, pixels: u32) -> Option<ColorImage> {
    let ns_name = nsstring(name);
    let image: id = msg_send![
        class!(NSImage),
        imageWithSystemSymbolName: &*ns_name,
        accessibilityDescription: nil
    ];
    if image.is_null() {
        return None;
    }

    // Symbol point size is roughly 3/4 of the glyph box.
    let points = f64::from(pixels) * 0.75;
    let config: id = msg_send![
        class!(NSImageSymbolConfiguration),
        configurationWithPointSize: points,
        weight: 0.0f64
    ];
    let image: id = msg_send![image, imageWithSymbolConfiguration: config];
    if image.is_null() {
        return None;
    }

    let tiff: id = msg_send![image, TIFFRepresentation];
    if tiff.is_null() {
        return None;
    }
    let rep: id = msg_send![class!(NSBitmapImageRep), imageRepWithData: tiff];
    if rep.is_null() {
        return None;
    }

    let width: isize = msg_send![rep, pixelsWide];
    let height: isize = msg_send![rep, pixelsHigh];
    let samples: isize = msg_send![rep, samplesPerPixel];
    let bits: isize = msg_send![rep, bitsPerSample];
    let row_bytes: isize = msg_send![rep, bytesPerRow];
    let planar: bool = msg_send![rep, isPlanar];
    let has_alpha: bool = msg_send![rep, hasAlpha];
    let format: usize = msg_send![rep, bitmapFormat];
    let data: *mut u8 = msg_send![rep, bitmapData];

    if data.is_null() || planar || !has_alpha || bits != 8 || width <= 0 || height <= 0 {
        return None;
    }
    let alpha_offset = match (samples, format & ALPHA_FIRST != 0) {
        (4, false) => 3,
        (2, false) => 1,
        (4 | 2, true) => 0,
        _ => return None,
    };

    let (width, height) = (width as usize, height as usize);
    let samples = samples as usize;
    let mut rgba = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row = std::slice::from_raw_parts(data.add(y * row_bytes as usize), width * samples);
        for x in 0..width {
            let alpha = row[x * samples + alpha_offset];
            rgba.extend_from_slice(&Color32::from_white_alpha(alpha).to_array());
        }
    }

    Some(ColorImage::from_rgba_premultiplied([width, height], &rgba))
}
