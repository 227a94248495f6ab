//! Integer pixel geometry.
//!
//! Rectangles follow the toolkit convention of an inclusive last row: a rect at `y = 10`
//! with `height = 5` covers rows `10..=14`, so [`Rect::bottom`] returns `14`.

use crate::math::IVec2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<i32> {
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Last row covered by the rect (inclusive).
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    /// Last column covered by the rect (inclusive).
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Vertical center, rounded toward the top.
    pub fn center_y(&self) -> i32 {
        (self.top() + self.bottom()) / 2
    }

    pub fn size(&self) -> Size<i32> {
        Size::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Move each edge by the given amounts (`dy1` on the top edge, `dy2` on the bottom edge).
    pub fn adjusted(&self, dx1: i32, dy1: i32, dx2: i32, dy2: i32) -> Self {
        Self::new(
            self.x + dx1,
            self.y + dy1,
            self.width - dx1 + dx2,
            self.height - dy1 + dy2,
        )
    }

    /// Interpolate every component toward `to`, rounding to the nearest pixel.
    pub fn lerp(&self, to: &Self, t: f32) -> Self {
        let mix = |a: i32, b: i32| a + ((b - a) as f32 * t).round() as i32;
        Self::new(
            mix(self.x, to.x),
            mix(self.y, to.y),
            mix(self.width, to.width),
            mix(self.height, to.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_edges() {
        let r = Rect::new(0, 10, 100, 5);
        assert_eq!(r.top(), 10);
        assert_eq!(r.bottom(), 14);
        assert_eq!(r.right(), 99);
        assert_eq!(r.center_y(), 12);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(0, 10, 100, 5);
        assert!(r.contains(IVec2::new(0, 14)));
        assert!(!r.contains(IVec2::new(0, 15)));
        assert!(!r.contains(IVec2::new(100, 12)));
    }

    #[test]
    fn test_adjusted_grows_both_edges() {
        let r = Rect::new(0, 20, 50, 1).adjusted(0, -2, 0, 2);
        assert_eq!(r, Rect::new(0, 18, 50, 5));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rect::new(0, 0, 10, 0);
        let b = Rect::new(0, 20, 10, 100);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), Rect::new(0, 10, 10, 50));
    }
}
