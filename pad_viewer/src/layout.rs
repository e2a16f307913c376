use glam::Vec2;
use winit::dpi::PhysicalSize;

pub const BOTTOM_MARGIN: f32 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Window coordinates to control-local coordinates.
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.x, point.y - self.y)
    }
}

/// Square joystick rect, horizontally centered near the bottom edge. The
/// side shrinks for windows smaller than the requested diameter.
pub fn pad_rect(window: PhysicalSize<u32>, diameter: f32) -> Rect {
    let width = window.width.max(1) as f32;
    let height = window.height.max(1) as f32;
    let side = diameter.min(width).min(height).max(1.0);
    let y = (height - side - BOTTOM_MARGIN).max(0.0);
    Rect {
        x: (width - side) / 2.0,
        y,
        width: side,
        height: side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_rect_is_horizontally_centered_above_the_bottom_edge() {
        let rect = pad_rect(PhysicalSize::new(1280, 720), 100.0);
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 100.0);
        assert_eq!(rect.x, 590.0);
        assert_eq!(rect.y, 720.0 - 100.0 - BOTTOM_MARGIN);
    }

    #[test]
    fn pad_rect_shrinks_to_fit_tiny_windows() {
        let rect = pad_rect(PhysicalSize::new(60, 40), 100.0);
        assert_eq!(rect.width, 40.0);
        assert_eq!(rect.height, 40.0);
        assert!(rect.y >= 0.0);
    }

    #[test]
    fn contains_and_to_local_agree_on_the_rect_origin() {
        let rect = pad_rect(PhysicalSize::new(1280, 720), 100.0);
        let origin = Vec2::new(rect.x, rect.y);
        assert!(rect.contains(origin));
        assert_eq!(rect.to_local(origin), Vec2::ZERO);

        let center = Vec2::new(rect.x + 50.0, rect.y + 50.0);
        assert!(rect.contains(center));
        assert_eq!(rect.to_local(center), Vec2::new(50.0, 50.0));

        assert!(!rect.contains(Vec2::new(rect.x - 1.0, rect.y)));
    }
}
