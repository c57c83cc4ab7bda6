//! PNG export of rendered SVG markup
//!
//! Rasterization needs the `png` feature (resvg + image). Without it every
//! export request fails with `GenError::RasterUnavailable`, which callers
//! report as a diagnostic while the vector output still succeeds.

use std::path::Path;

use crate::core::error::{GenError, Result};

/// Whether this build can rasterize at all
pub fn is_available() -> bool {
    cfg!(feature = "png")
}

/// Pixel size of the raster image. A forced width keeps the view box aspect
/// ratio; otherwise the view box dimensions are used directly.
pub fn target_size(view_width: f64, view_height: f64, width: Option<u32>) -> (u32, u32) {
    match width {
        Some(w) if view_width > 0.0 => {
            let h = (w as f64 * view_height / view_width) as u32;
            (w.max(1), h.max(1))
        }
        _ => (
            (view_width.ceil() as u32).max(1),
            (view_height.ceil() as u32).max(1),
        ),
    }
}

/// Rasterize SVG markup and write it as a PNG file
#[cfg(feature = "png")]
pub fn rasterize(markup: &str, width: Option<u32>, path: &Path) -> Result<()> {
    use resvg::{tiny_skia, usvg};

    let tree = usvg::Tree::from_str(markup, &usvg::Options::default())
        .map_err(|e| GenError::RasterFailed(format!("SVG parse: {}", e)))?;
    let size = tree.size();
    let (w, h) = target_size(size.width() as f64, size.height() as f64, width);

    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| GenError::RasterFailed(format!("cannot allocate {}x{} pixmap", w, h)))?;
    let transform = tiny_skia::Transform::from_scale(
        w as f32 / size.width(),
        h as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut canvas = image::RgbaImage::new(w, h);
    for (dst, src) in canvas.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    canvas
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| GenError::RasterFailed(format!("{:?}: {}", path, e)))?;

    tracing::info!("Wrote {}x{} PNG to {:?}", w, h, path);
    Ok(())
}

/// Rasterize SVG markup and write it as a PNG file
#[cfg(not(feature = "png"))]
pub fn rasterize(_markup: &str, _width: Option<u32>, _path: &Path) -> Result<()> {
    Err(GenError::RasterUnavailable(
        "this build was compiled without the `png` feature".into(),
    ))
}
