//! Star and seller heatmap rendering rules

/// Number of stars and of heatmap segments
pub const SLOTS: usize = 5;

/// Filled state of each star. Slot `i` is filled when `i < rating`,
/// so 4.2 fills five slots and NaN fills none.
pub fn star_slots(rating: f64) -> [bool; SLOTS] {
    let mut slots = [false; SLOTS];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = (i as f64) < rating;
    }
    slots
}

pub fn filled_stars(rating: f64) -> usize {
    star_slots(rating).iter().filter(|filled| **filled).count()
}

/// Seller reputation palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    VeryPoor,
    Poor,
    Fair,
    Good,
    VeryGood,
    Excellent,
}

impl HeatLevel {
    pub fn color(self) -> &'static str {
        match self {
            HeatLevel::VeryPoor => "#F5F5F5",
            HeatLevel::Poor => "#E74C3C",
            HeatLevel::Fair => "#FF6B35",
            HeatLevel::Good => "#FFE600",
            HeatLevel::VeryGood => "#00C650",
            HeatLevel::Excellent => "#00A650",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatSegment {
    pub level: HeatLevel,
    pub active: bool,
}

fn heat_levels(rating: f64) -> [HeatLevel; SLOTS] {
    use HeatLevel::*;
    if rating >= 4.5 {
        [Poor, Fair, Good, VeryGood, Excellent]
    } else if rating >= 4.0 {
        [Poor, Fair, Good, VeryGood, VeryGood]
    } else if rating >= 3.5 {
        [Poor, Fair, Good, VeryGood, Good]
    } else if rating >= 3.0 {
        [Poor, Fair, Good, Good, VeryPoor]
    } else if rating >= 2.5 {
        [Poor, Fair, VeryPoor, VeryPoor, VeryPoor]
    } else if rating >= 2.0 {
        [Poor, VeryPoor, VeryPoor, VeryPoor, VeryPoor]
    } else {
        [VeryPoor; SLOTS]
    }
}

/// Five segments for the seller card. Segment `i` is active when
/// `i < floor(rating)`; out of range ratings are not clamped.
pub fn heatmap(rating: f64) -> [HeatSegment; SLOTS] {
    let levels = heat_levels(rating);
    let whole = rating.floor();
    let mut segments = [HeatSegment {
        level: HeatLevel::VeryPoor,
        active: false,
    }; SLOTS];
    for (i, segment) in segments.iter_mut().enumerate() {
        segment.level = levels[i];
        segment.active = (i as f64) < whole;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_slots_direct_comparison() {
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(filled_stars(0.1), 1);
        assert_eq!(filled_stars(3.0), 3);
        assert_eq!(filled_stars(4.2), 5);
        assert_eq!(filled_stars(4.5), 5);
        assert_eq!(star_slots(2.5), [true, true, true, false, false]);
    }

    #[test]
    fn test_star_slots_out_of_range() {
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(7.0), 5);
        assert_eq!(filled_stars(f64::NAN), 0);
    }

    #[test]
    fn test_heatmap_ladder_boundaries() {
        use HeatLevel::*;
        let levels = |r: f64| heatmap(r).map(|s| s.level);
        assert_eq!(levels(4.5), [Poor, Fair, Good, VeryGood, Excellent]);
        assert_eq!(levels(4.49), [Poor, Fair, Good, VeryGood, VeryGood]);
        assert_eq!(levels(4.0), [Poor, Fair, Good, VeryGood, VeryGood]);
        assert_eq!(levels(3.5), [Poor, Fair, Good, VeryGood, Good]);
        assert_eq!(levels(3.0), [Poor, Fair, Good, Good, VeryPoor]);
        assert_eq!(levels(2.5), [Poor, Fair, VeryPoor, VeryPoor, VeryPoor]);
        assert_eq!(levels(2.0), [Poor, VeryPoor, VeryPoor, VeryPoor, VeryPoor]);
        assert_eq!(levels(1.99), [VeryPoor; SLOTS]);
        assert_eq!(levels(f64::NAN), [VeryPoor; SLOTS]);
    }

    #[test]
    fn test_heatmap_active_segments() {
        let active = |r: f64| heatmap(r).iter().filter(|s| s.active).count();
        assert_eq!(active(4.6), 4);
        assert_eq!(active(5.0), 5);
        assert_eq!(active(0.9), 0);
        assert_eq!(active(9.0), 5);
        assert!(heatmap(3.2)[2].active);
        assert!(!heatmap(3.2)[3].active);
    }

    #[test]
    fn test_palette_colors() {
        assert_eq!(HeatLevel::Excellent.color(), "#00A650");
        assert_eq!(HeatLevel::VeryPoor.color(), "#F5F5F5");
    }
}
