//! Tick ring drawn around the knob.

use crate::config::{
    MAJOR_TICK_EVERY, MAJOR_TICK_SIZE_PX, MINOR_TICK_SIZE_PX, TICK_COUNT, TICK_RADIUS_PX,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub index: usize,
    pub angle_degrees: f64,
    pub major: bool,
    pub width_px: f64,
    pub height_px: f64,
}

impl Tick {
    /// Inline style placing the tick on the ring, pointing at the center.
    pub fn style(&self) -> String {
        format!(
            "width: {}px; height: {}px; transform: rotate({}deg) translateY(-{}px) translateY({}px);",
            self.width_px,
            self.height_px,
            self.angle_degrees,
            TICK_RADIUS_PX,
            -self.height_px / 2.0,
        )
    }
}

/// All ticks of the ring, evenly spaced, with every `MAJOR_TICK_EVERY`th one
/// drawn larger.
pub fn ticks() -> Vec<Tick> {
    let step = 360.0 / TICK_COUNT as f64;
    (0..TICK_COUNT)
        .map(|index| {
            let major = index % MAJOR_TICK_EVERY == 0;
            let (width_px, height_px) = if major { MAJOR_TICK_SIZE_PX } else { MINOR_TICK_SIZE_PX };
            Tick {
                index,
                angle_degrees: index as f64 * step,
                major,
                width_px,
                height_px,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_ticks_six_degrees_apart() {
        let ring = ticks();
        assert_eq!(ring.len(), 60);
        assert_eq!(ring[1].angle_degrees, 6.0);
        assert_eq!(ring[59].angle_degrees, 354.0);
    }

    #[test]
    fn every_fifth_tick_is_major() {
        let ring = ticks();
        assert_eq!(ring.iter().filter(|t| t.major).count(), 12);
        assert!(ring[0].major && ring[5].major && !ring[4].major);
        assert_eq!((ring[0].width_px, ring[0].height_px), (3.0, 14.0));
        assert_eq!((ring[1].width_px, ring[1].height_px), (2.0, 8.0));
    }

    #[test]
    fn style_offsets_by_half_height() {
        let style = ticks()[5].style();
        assert_eq!(
            style,
            "width: 3px; height: 14px; transform: rotate(30deg) translateY(-128px) translateY(-7px);"
        );
    }
}
