//! Scroll geometry shared by the sticky nav, the step tracker and anchor links.

use crate::config;

/// The sticky nav slides in once the hero has almost scrolled out of view.
pub fn nav_visible(scroll_y: f64, hero_top: f64, hero_height: f64) -> bool {
    scroll_y > hero_top + hero_height - config::NAV_REVEAL_OFFSET_PX
}

/// Where an in-page link should land, leaving room for the nav when shown.
pub fn anchor_top(target_top: f64, nav_visible: bool) -> f64 {
    if nav_visible {
        target_top - config::NAV_HEIGHT_PX
    } else {
        target_top
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepExtent {
    pub top: f64,
    pub height: f64,
}

impl StepExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub fn trigger_point(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height * config::STEP_TRIGGER_RATIO
}

/// 1-based number of the last section containing `trigger`.
pub fn active_step(sections: &[StepExtent], trigger: f64) -> Option<u32> {
    sections
        .iter()
        .rposition(|section| section.contains(trigger))
        .map(|index| index as u32 + 1)
}

/// `step-4` -> 4. Ids that don't name a step yield `None`.
pub fn step_number(section_id: &str) -> Option<u32> {
    section_id.strip_prefix("step-")?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> Vec<StepExtent> {
        vec![
            StepExtent::new(0.0, 500.0),
            StepExtent::new(500.0, 500.0),
            StepExtent::new(1000.0, 500.0),
        ]
    }

    #[test]
    fn nav_appears_past_hero_bottom_minus_offset() {
        // hero spans 0..800, so the threshold is 700
        assert!(!nav_visible(0.0, 0.0, 800.0));
        assert!(!nav_visible(700.0, 0.0, 800.0));
        assert!(nav_visible(700.5, 0.0, 800.0));
        assert!(nav_visible(2000.0, 0.0, 800.0));
    }

    #[test]
    fn scrolling_through_the_hero_flips_visibility_once() {
        let readings: Vec<bool> = (0..=160)
            .map(|step| nav_visible(f64::from(step) * 10.0, 0.0, 800.0))
            .collect();
        let flips = readings.windows(2).filter(|pair| pair[0] != pair[1]).count();
        assert_eq!(flips, 1);
    }

    #[test]
    fn anchor_leaves_room_for_visible_nav() {
        assert_eq!(anchor_top(1200.0, true), 1140.0);
        assert_eq!(anchor_top(1200.0, false), 1200.0);
    }

    #[test]
    fn trigger_sits_thirty_percent_down_the_viewport() {
        assert_eq!(trigger_point(1000.0, 800.0), 1240.0);
    }

    #[test]
    fn resolves_section_containing_trigger() {
        let sections = three_sections();
        assert_eq!(active_step(&sections, 600.0), Some(2));
        assert_eq!(active_step(&sections, 0.0), Some(1));
        assert_eq!(active_step(&sections, 1499.0), Some(3));
    }

    #[test]
    fn section_top_is_inclusive_and_bottom_exclusive() {
        let sections = three_sections();
        assert_eq!(active_step(&sections, 500.0), Some(2));
        assert_eq!(active_step(&sections, 1500.0), None);
        assert_eq!(active_step(&sections, -1.0), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_last() {
        let sections = vec![StepExtent::new(0.0, 1000.0), StepExtent::new(400.0, 200.0)];
        assert_eq!(active_step(&sections, 450.0), Some(2));
        assert_eq!(active_step(&sections, 700.0), Some(1));
    }

    #[test]
    fn step_numbers_come_from_section_ids() {
        assert_eq!(step_number("step-3"), Some(3));
        assert_eq!(step_number("hero"), None);
        assert_eq!(step_number("step-"), None);
        assert_eq!(step_number("step-x"), None);
    }
}
