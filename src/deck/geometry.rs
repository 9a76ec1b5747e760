//! Page-relative rectangles and their resolution to EMU frames.

use crate::common::unit::Length;
use crate::common::{Error, Result};
use crate::deck::model::SlideLayout;

/// Position and size of an element, in page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: Length,
    pub y: Length,
    pub w: Length,
    pub h: Length,
}

impl Rect {
    pub fn new(
        x: impl Into<Length>,
        y: impl Into<Length>,
        w: impl Into<Length>,
        h: impl Into<Length>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            w: w.into(),
            h: h.into(),
        }
    }

    /// Shorthand for a rect given entirely in inches.
    pub fn inches(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, w, h)
    }

    /// The rect shrunk by `dx` on the left and right and `dy` on top and bottom.
    pub fn inset(&self, dx: f64, dy: f64) -> Result<Self> {
        Ok(Self {
            x: self.x.offset(dx)?,
            y: self.y.offset(dy)?,
            w: self.w.offset(-2.0 * dx)?,
            h: self.h.offset(-2.0 * dy)?,
        })
    }

    /// Resolve against the page size.
    ///
    /// A width or height that does not come out strictly positive, or a
    /// negative position, is a layout error; nothing is clamped.
    pub fn resolve(&self, layout: SlideLayout) -> Result<Frame> {
        let page_w = layout.width_emu();
        let page_h = layout.height_emu();

        let frame = Frame {
            x: self.x.resolve(page_w)?,
            y: self.y.resolve(page_h)?,
            cx: self.w.resolve(page_w)?,
            cy: self.h.resolve(page_h)?,
        };

        if frame.cx <= 0 || frame.cy <= 0 {
            return Err(Error::layout(format!(
                "rect {} x {} at ({}, {}) has a non-positive dimension",
                self.w, self.h, self.x, self.y
            )));
        }

        if frame.x < 0 || frame.y < 0 {
            return Err(Error::layout(format!(
                "rect at ({}, {}) lies before the page origin",
                self.x, self.y
            )));
        }

        Ok(frame)
    }
}

/// A resolved rectangle in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Frame {
    pub fn right(&self) -> i64 {
        self.x + self.cx
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.cy
    }

    pub fn contains(&self, other: &Frame) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::EMUS_PER_INCH;

    #[test]
    fn test_resolve_inches() {
        let frame = Rect::inches(0.4, 0.3, 9.2, 0.6)
            .resolve(SlideLayout::Wide16x9)
            .unwrap();
        assert_eq!(frame.x, 365_760);
        assert_eq!(frame.cx, 8_412_480);
    }

    #[test]
    fn test_full_width_percentage() {
        let frame = Rect::new(0.0, 0.0, Length::Pct(100.0), 0.15)
            .resolve(SlideLayout::Wide16x9)
            .unwrap();
        assert_eq!(frame.cx, 10 * EMUS_PER_INCH);
    }

    #[test]
    fn test_non_positive_dimension_is_error() {
        let layout = SlideLayout::Wide16x9;
        assert!(matches!(
            Rect::inches(1.0, 1.0, 0.0, 1.0).resolve(layout),
            Err(Error::InvalidLayout(_))
        ));
        assert!(Rect::inches(1.0, 1.0, 2.0, -0.5).resolve(layout).is_err());
    }

    #[test]
    fn test_negative_position_is_error() {
        let layout = SlideLayout::Wide16x9;
        assert!(matches!(
            Rect::inches(-1.0, -2.0, 2.0, 1.0).resolve(layout),
            Err(Error::InvalidLayout(_))
        ));
        assert!(Rect::inches(0.5, -0.01, 2.0, 1.0).resolve(layout).is_err());

        let origin = Rect::inches(0.0, 0.0, 2.0, 1.0).resolve(layout).unwrap();
        assert_eq!((origin.x, origin.y), (0, 0));
    }

    #[test]
    fn test_inset() {
        let inner = Rect::inches(0.4, 1.55, 4.5, 1.4).inset(0.15, 0.1).unwrap();
        let layout = SlideLayout::Wide16x9;
        let outer = Rect::inches(0.4, 1.55, 4.5, 1.4).resolve(layout).unwrap();
        let inner_frame = inner.resolve(layout).unwrap();
        assert!(outer.contains(&inner_frame));
        assert!(matches!(inner.w, Length::In(w) if (w - 4.2).abs() < 1e-9));
    }

    #[test]
    fn test_inset_collapse_is_error() {
        let inner = Rect::inches(0.0, 0.0, 0.2, 0.2).inset(0.15, 0.1).unwrap();
        assert!(inner.resolve(SlideLayout::Wide16x9).is_err());
    }
}
