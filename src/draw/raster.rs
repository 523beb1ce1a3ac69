//! Pixel snapshots of Cairo image surfaces.

/// A single pixel with straight (non-premultiplied) 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// Owned copy of an ARGB32 surface's pixel buffer.
///
/// Cairo stores premultiplied native-endian `0xAARRGGBB` words; [`pixel`](Self::pixel)
/// undoes the premultiplication so callers can compare colors directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    width: i32,
    height: i32,
    stride: usize,
    data: Vec<u8>,
}

impl RasterSnapshot {
    /// Flushes `surface` and copies its pixels.
    pub fn capture(surface: &cairo::ImageSurface) -> Result<Self, cairo::BorrowError> {
        let mut data = Vec::new();
        surface.with_data(|bytes| data.extend_from_slice(bytes))?;
        Ok(Self {
            width: surface.width(),
            height: surface.height(),
            stride: surface.stride().max(0) as usize,
            data,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the pixel at (x, y); out-of-range coordinates read as transparent.
    pub fn pixel(&self, x: i32, y: i32) -> Rgba {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Rgba::default();
        }
        let offset = y as usize * self.stride + x as usize * 4;
        let Some(bytes) = self.data.get(offset..offset + 4) else {
            return Rgba::default();
        };
        let word = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let a = (word >> 24) as u8;
        if a == 0 {
            return Rgba::default();
        }
        let unpremultiply = |c: u32| ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8;
        Rgba {
            r: unpremultiply((word >> 16) & 0xff),
            g: unpremultiply((word >> 8) & 0xff),
            b: unpremultiply(word & 0xff),
            a,
        }
    }

    /// Iterates over every pixel as `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Rgba)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Counts pixels whose alpha is strictly above `threshold`.
    pub fn count_opaque(&self, threshold: u8) -> usize {
        self.pixels().filter(|(_, _, p)| p.a > threshold).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_straight_color() {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 4, 4).unwrap();
        {
            let ctx = cairo::Context::new(&surface).unwrap();
            ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
            ctx.rectangle(0.0, 0.0, 2.0, 2.0);
            ctx.fill().unwrap();
        }
        let snap = RasterSnapshot::capture(&surface).unwrap();
        assert_eq!(
            snap.pixel(1, 1),
            Rgba {
                r: 255,
                g: 0,
                b: 0,
                a: 255
            }
        );
        assert!(snap.pixel(3, 3).is_transparent());
        assert!(snap.pixel(10, 10).is_transparent());
        assert_eq!(snap.count_opaque(0), 4);
    }
}
