use crate::foundation::core::Rgba8;
use crate::render::raster::Raster;

/// Top-left paste position in canvas pixels. May be negative; out-of-canvas pixels are dropped.
pub type Position = (i64, i64);

/// Blend one straight-alpha source pixel over a destination pixel.
///
/// `rgb = (1 - a) * dst + a * src` and `alpha = dst_a + a * (1 - dst_a)` on normalized alpha,
/// each scaled back to 0..=255 and truncated.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let a = f64::from(sa) / 255.0;
            let inv = 1.0 - a;
            let mut out = [0u8; 4];
            for i in 0..3 {
                out[i] = (inv * f64::from(dst[i]) + a * f64::from(src[i])) as u8;
            }
            let da = f64::from(dst[3]) / 255.0;
            out[3] = ((da + a * (1.0 - da)) * 255.0) as u8;
            out
        }
    }
}

/// Overwrite `canvas` with `source` at `pos`, no blending.
pub fn paste(canvas: &mut Raster, source: &Raster, pos: Position) {
    let Some(r) = overlap(canvas, source, pos) else {
        return;
    };
    let row_bytes = r.w * 4;
    for row in 0..r.h {
        let dst = ((r.dst_y + row) * canvas.width as usize + r.dst_x) * 4;
        let src = ((r.src_y + row) * source.width as usize + r.src_x) * 4;
        canvas.data[dst..dst + row_bytes].copy_from_slice(&source.data[src..src + row_bytes]);
    }
}

/// Alpha-blend `source` into `canvas` at `pos` using [`over`].
pub fn paste_over(canvas: &mut Raster, source: &Raster, pos: Position) {
    let Some(r) = overlap(canvas, source, pos) else {
        return;
    };
    for row in 0..r.h {
        let dst_row = ((r.dst_y + row) * canvas.width as usize + r.dst_x) * 4;
        let src_row = ((r.src_y + row) * source.width as usize + r.src_x) * 4;
        let dst = &mut canvas.data[dst_row..dst_row + r.w * 4];
        let src = &source.data[src_row..src_row + r.w * 4];
        for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
}

struct Overlap {
    dst_x: usize,
    dst_y: usize,
    src_x: usize,
    src_y: usize,
    w: usize,
    h: usize,
}

fn overlap(canvas: &Raster, source: &Raster, (x, y): Position) -> Option<Overlap> {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(source.width)).min(i64::from(canvas.width));
    let y1 = (y + i64::from(source.height)).min(i64::from(canvas.height));
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some(Overlap {
        dst_x: x0 as usize,
        dst_y: y0 as usize,
        src_x: (x0 - x) as usize,
        src_y: (y0 - y) as usize,
        w: (x1 - x0) as usize,
        h: (y1 - y0) as usize,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
