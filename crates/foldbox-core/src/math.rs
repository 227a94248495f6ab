/// Vector math re-exported from [`glam`].
///
/// Pointer positions are integer pixels, so most of the toolbox works with [`IVec2`];
/// [`Vec2`] is available for hosts that report fractional coordinates.
///
/// ```
/// use foldbox_core::math::{IVec2, manhattan_length};
///
/// let press = IVec2::new(10, 10);
/// let now = IVec2::new(14, 3);
/// assert_eq!(manhattan_length(now - press), 11);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub use glam::{IVec2, Vec2};

/// Sum of the absolute components, the distance metric used for drag thresholds.
pub fn manhattan_length(v: IVec2) -> i32 {
    v.abs().element_sum()
}

/// Round a fractional position to the nearest pixel.
pub fn to_pixel(v: Vec2) -> IVec2 {
    v.round().as_ivec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_length() {
        assert_eq!(manhattan_length(IVec2::new(-3, 4)), 7);
        assert_eq!(manhattan_length(IVec2::ZERO), 0);
    }

    #[test]
    fn test_to_pixel() {
        assert_eq!(to_pixel(Vec2::new(1.4, 2.6)), IVec2::new(1, 3));
    }
}
