//! Frame read-back: one display color per cell.
//!
//! Hosts draw each cell as a filled square of its material's color.
//! [`Frame::capture`] produces those colors in row-major order, dimmed
//! while a modal UI is open or with the hovered cell highlighted.

use grain_core::{CellAccess, Rgba};

/// Per-cell color adjustment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shade {
    /// Base material color.
    #[default]
    Normal,
    /// Darkened by 25 per channel.
    Dimmed,
    /// Brightened by 50 per channel.
    Highlighted,
}

/// Apply `shade` to `color`.
///
/// Adjusted channels are clamped to `[0, 254]`; alpha is left alone.
pub fn shade(color: Rgba, shade: Shade) -> Rgba {
    let delta: i16 = match shade {
        Shade::Normal => return color,
        Shade::Dimmed => -25,
        Shade::Highlighted => 50,
    };
    let adjust = |c: u8| (i16::from(c) + delta).clamp(0, 254) as u8;
    Rgba {
        r: adjust(color.r),
        g: adjust(color.g),
        b: adjust(color.b),
        a: color.a,
    }
}

/// How a frame is shaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOptions {
    /// Dim every cell. Takes precedence over `highlight`.
    pub dimmed: bool,
    /// Cell under the pointer, brightened when not dimmed.
    pub highlight: Option<(i32, i32)>,
}

/// Row-major cell colors for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Frame {
    /// Capture the colors of every cell in `view`.
    ///
    /// A cell whose material is missing from the registry is drawn in the
    /// Vacuum color.
    pub fn capture<G>(view: &G, options: FrameOptions) -> Self
    where
        G: CellAccess + ?Sized,
    {
        let registry = view.registry();
        let fallback = registry.vacuum().color;
        let highlighted = options
            .highlight
            .and_then(|(x, y)| view.checked_index(x, y));
        let len = view.width() as usize * view.height() as usize;

        let pixels = (0..len)
            .map(|i| {
                let base = view
                    .cell(i)
                    .and_then(|c| registry.get(c.material).ok())
                    .map_or(fallback, |m| m.color);
                let s = if options.dimmed {
                    Shade::Dimmed
                } else if highlighted == Some(i) {
                    Shade::Highlighted
                } else {
                    Shade::Normal
                };
                shade(base, s)
            })
            .collect();

        Self {
            width: view.width(),
            height: view.height(),
            pixels,
        }
    }

    /// Columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All colors, row-major.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Color of cell `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        self.pixels
            .get(x as usize + y as usize * self.width as usize)
            .copied()
    }

    /// Flatten to `[r, g, b, a, r, g, b, a, ...]` for texture upload.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }
}
