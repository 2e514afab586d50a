//! Conversions between egui screen coordinates and pad-local coordinates.

use eframe::egui;
use rtouchpad::{Extent, Offset, Point};

/// Screen position to pad-local pixels (origin at the pad's top-left corner).
pub fn pad_local(pos: egui::Pos2, pad_rect: egui::Rect) -> Point {
    Point::new(pos.x - pad_rect.min.x, pos.y - pad_rect.min.y)
}

/// Screen position of a cursor offset measured from the pad center.
pub fn to_screen(offset: Offset, pad_rect: egui::Rect) -> egui::Pos2 {
    pad_rect.center() + egui::vec2(offset.x, offset.y)
}

pub fn extent_of(rect: egui::Rect) -> Extent {
    Extent::new(rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_center() {
        let rect = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(300.0, 300.0));

        assert_eq!(pad_local(egui::pos2(100.0, 50.0), rect), Point::new(0.0, 0.0));
        assert_eq!(pad_local(rect.center(), rect), Point::new(150.0, 150.0));
        assert_eq!(to_screen(Offset::new(-20.0, 10.0), rect), egui::pos2(230.0, 210.0));
        assert_eq!(extent_of(rect), Extent::square(300.0));
    }
}
