use crate::math::{Point3, Vector3};
use crate::operations::query::FrenetFrame;

/// An arrow drawn at the curve position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowIndicator {
    pub origin: Point3,
    /// Unit direction.
    pub direction: Vector3,
    pub length: f64,
    /// `0xRRGGBB`.
    pub color: u32,
}

impl ArrowIndicator {
    fn new(length: f64, color: u32) -> Self {
        Self {
            origin: Point3::origin(),
            direction: Vector3::z(),
            length,
            color,
        }
    }

    /// World-space tip of the arrow.
    #[must_use]
    pub fn tip(&self) -> Point3 {
        self.origin + self.direction * self.length
    }
}

/// Scene objects visualizing the current frame: one arrow per frame vector
/// and a marker where the ride camera sits.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameIndicators {
    /// Tangent arrow (red).
    pub tangent: ArrowIndicator,
    /// Normal arrow (green).
    pub normal: ArrowIndicator,
    /// Binormal arrow (blue).
    pub binormal: ArrowIndicator,
    /// Ride camera marker position.
    pub marker: Point3,
}

impl FrameIndicators {
    /// Creates indicators with arrows of the given length.
    #[must_use]
    pub fn new(length: f64) -> Self {
        Self {
            tangent: ArrowIndicator::new(length, 0xff_00_00),
            normal: ArrowIndicator::new(length, 0x00_ff_00),
            binormal: ArrowIndicator::new(length, 0x00_00_ff),
            marker: Point3::origin(),
        }
    }

    /// Moves all arrows and the marker onto `frame`.
    pub fn update(&mut self, frame: &FrenetFrame) {
        for (arrow, direction) in [
            (&mut self.tangent, frame.tangent),
            (&mut self.normal, frame.normal),
            (&mut self.binormal, frame.binormal),
        ] {
            arrow.origin = frame.position;
            arrow.direction = direction;
        }
        self.marker = frame.position;
    }
}

impl Default for FrameIndicators {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::TwistedCubic;
    use crate::operations::query::FrenetFrameQuery;
    use approx::assert_relative_eq;

    #[test]
    fn arrows_follow_frame() {
        let frame = FrenetFrameQuery::new(1.0).execute(&TwistedCubic).unwrap();
        let mut ind = FrameIndicators::default();
        ind.update(&frame);
        assert_eq!(ind.tangent.origin, frame.position);
        assert_eq!(ind.marker, frame.position);
        assert_eq!(ind.normal.direction, frame.normal);
        assert_eq!(ind.binormal.direction, frame.binormal);
        assert_relative_eq!(ind.tangent.tip(), frame.position + frame.tangent, epsilon = 1e-12);
    }

    #[test]
    fn colors() {
        let ind = FrameIndicators::new(2.0);
        assert_eq!(ind.tangent.color, 0xff_00_00);
        assert_eq!(ind.normal.color, 0x00_ff_00);
        assert_eq!(ind.binormal.color, 0x00_00_ff);
        assert!((ind.binormal.length - 2.0).abs() < f64::EPSILON);
    }
}
