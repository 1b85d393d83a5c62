use super::surface::NodeSpec;
use crate::constants::*;
use rand::Rng;

/// Decorative heart floating around the timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingHeart {
    pub size_px: f32,
    pub period_sec: f32,
    pub top_percent: f32,
    pub left_percent: f32,
}

impl FloatingHeart {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: FLOATING_HEART_SIZE_BASE_PX + rng.gen::<f32>() * FLOATING_HEART_SIZE_SPAN_PX,
            period_sec: FLOATING_HEART_PERIOD_BASE_SEC
                + rng.gen::<f32>() * FLOATING_HEART_PERIOD_SPAN_SEC,
            top_percent: rng.gen::<f32>() * 100.0,
            left_percent: rng.gen::<f32>() * 100.0,
        }
    }

    pub fn node_spec(&self) -> NodeSpec {
        NodeSpec::new("floating-heart", "❤️")
            .style("position", "absolute")
            .style("font-size", format!("{}px", self.size_px))
            .style("opacity", FLOATING_HEART_OPACITY.to_string())
            .style(
                "animation",
                format!("float {}s ease-in-out infinite", self.period_sec),
            )
            .style("top", format!("{}%", self.top_percent))
            .style("left", format!("{}%", self.left_percent))
            .style("z-index", "1")
    }
}
