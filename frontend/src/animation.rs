//! Open/close state machine for the book illustration in the hero.
//!
//! The machine never touches the DOM. Every event yields a list of
//! [`BookStep`]s (inline styles to paint, reflows to force, timers to arm)
//! that `components::book` plays back against the real elements. The
//! stylesheet owns the opening keyframes; inline styles only ever pause them
//! or drive the quick close.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookEvent {
    Click,
    /// The entrance animation that plays on page load has finished.
    IntroFinished,
    CoverDue,
    OpenSettled,
    CloseSettled,
}

/// Inline overrides for one layer. `None` means no inline value, so the
/// stylesheet decides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayerStyle {
    pub animation: Option<String>,
    pub transition: Option<String>,
    pub transform: Option<String>,
}

impl LayerStyle {
    fn frozen(&mut self) {
        self.animation = Some("none".into());
        self.transition = Some("none".into());
    }

    fn swing_shut(&mut self, transition: String) {
        self.transition = Some(transition);
        self.transform = Some("rotateY(0deg)".into());
    }

    fn release_motion(&mut self) {
        self.transition = None;
        self.transform = None;
    }

    #[cfg(test)]
    pub fn has_motion_override(&self) -> bool {
        self.transition.is_some() || self.transform.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookStyles {
    pub closing: bool,
    pub cover: LayerStyle,
    /// In DOM order, back page first.
    pub pages: Vec<LayerStyle>,
}

impl BookStyles {
    pub fn untouched(page_count: usize) -> Self {
        Self {
            closing: false,
            cover: LayerStyle::default(),
            pages: vec![LayerStyle::default(); page_count],
        }
    }

    fn layers_mut(&mut self) -> impl Iterator<Item = &mut LayerStyle> {
        std::iter::once(&mut self.cover).chain(self.pages.iter_mut())
    }

    #[cfg(test)]
    pub fn layers(&self) -> impl Iterator<Item = &LayerStyle> {
        std::iter::once(&self.cover).chain(self.pages.iter())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BookStep {
    Paint(BookStyles),
    /// Read layout so the next paint starts a fresh transition.
    Reflow,
    Wait { ms: u32, then: BookEvent },
}

#[derive(Debug)]
pub struct BookMachine {
    phase: BookPhase,
    styles: BookStyles,
}

impl BookMachine {
    pub fn new(page_count: usize) -> Self {
        Self {
            phase: BookPhase::Closed,
            styles: BookStyles::untouched(page_count),
        }
    }

    pub fn phase(&self) -> BookPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn styles(&self) -> &BookStyles {
        &self.styles
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, BookPhase::Opening | BookPhase::Closing)
    }

    pub fn handle(&mut self, event: BookEvent) -> Vec<BookStep> {
        match (self.phase, event) {
            (BookPhase::Open, BookEvent::Click) => self.begin_close(),
            (BookPhase::Closed, BookEvent::Click) => self.begin_open(),
            (BookPhase::Closed, BookEvent::IntroFinished) => {
                self.phase = BookPhase::Open;
                Vec::new()
            }
            (BookPhase::Opening, BookEvent::OpenSettled) => {
                self.phase = BookPhase::Open;
                Vec::new()
            }
            (BookPhase::Closing, BookEvent::CoverDue) => {
                self.styles.cover.swing_shut(format!(
                    "transform {}s ease-out",
                    secs(config::COVER_CLOSE_SECS)
                ));
                vec![BookStep::Paint(self.styles.clone())]
            }
            (BookPhase::Closing, BookEvent::CloseSettled) => {
                self.phase = BookPhase::Closed;
                self.styles.closing = false;
                self.styles.layers_mut().for_each(LayerStyle::release_motion);
                vec![BookStep::Paint(self.styles.clone())]
            }
            // clicks mid-transition and stray timers
            _ => Vec::new(),
        }
    }

    fn begin_close(&mut self) -> Vec<BookStep> {
        self.phase = BookPhase::Closing;
        let page_count = self.styles.pages.len();

        self.styles.closing = true;
        self.styles.layers_mut().for_each(LayerStyle::frozen);
        let frozen = self.styles.clone();

        // Top page first so the stack folds down onto the cover
        for (order, page) in self.styles.pages.iter_mut().rev().enumerate() {
            page.swing_shut(format!(
                "transform {}s ease-in {}s",
                secs(config::PAGE_CLOSE_SECS),
                secs(order as f64 * config::PAGE_STAGGER_SECS)
            ));
        }

        let cover_delay = page_count as f64 * config::PAGE_STAGGER_SECS + config::COVER_LEAD_SECS;
        vec![
            BookStep::Paint(frozen),
            BookStep::Reflow,
            BookStep::Paint(self.styles.clone()),
            BookStep::Wait {
                ms: millis(cover_delay),
                then: BookEvent::CoverDue,
            },
            BookStep::Wait {
                ms: millis(cover_delay + config::CLOSE_SETTLE_SECS),
                then: BookEvent::CloseSettled,
            },
        ]
    }

    fn begin_open(&mut self) -> Vec<BookStep> {
        self.phase = BookPhase::Opening;

        for layer in self.styles.layers_mut() {
            layer.animation = Some("none".into());
            layer.release_motion();
        }
        let paused = self.styles.clone();

        self.styles.layers_mut().for_each(|layer| layer.animation = None);
        vec![
            BookStep::Paint(paused),
            BookStep::Reflow,
            BookStep::Paint(self.styles.clone()),
            BookStep::Wait {
                ms: config::BOOK_OPEN_MS,
                then: BookEvent::OpenSettled,
            },
        ]
    }
}

fn millis(secs: f64) -> u32 {
    (secs * 1000.0).round() as u32
}

/// Seconds without float noise, 0.06 rather than 0.060000000000000005.
/// The caller appends the CSS unit.
fn secs(value: f64) -> String {
    format!("{}", f64::from(millis(value)) / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened(page_count: usize) -> BookMachine {
        let mut machine = BookMachine::new(page_count);
        assert!(machine.handle(BookEvent::IntroFinished).is_empty());
        assert_eq!(machine.phase(), BookPhase::Open);
        machine
    }

    fn waits(steps: &[BookStep]) -> Vec<(u32, BookEvent)> {
        steps
            .iter()
            .filter_map(|step| match step {
                BookStep::Wait { ms, then } => Some((*ms, *then)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn starts_closed_and_idle() {
        let machine = BookMachine::new(4);
        assert_eq!(machine.phase(), BookPhase::Closed);
        assert!(!machine.is_busy());
        assert_eq!(machine.styles(), &BookStyles::untouched(4));
    }

    #[test]
    fn close_staggers_pages_from_the_top() {
        let mut machine = opened(3);
        let steps = machine.handle(BookEvent::Click);
        assert_eq!(machine.phase(), BookPhase::Closing);
        assert!(machine.is_busy());

        assert!(matches!(&steps[0], BookStep::Paint(frozen)
            if frozen.closing && frozen.layers().all(|l| l.transition.as_deref() == Some("none"))));
        assert_eq!(steps[1], BookStep::Reflow);

        let BookStep::Paint(styles) = &steps[2] else {
            panic!("expected paint, got {:?}", steps[2]);
        };
        let transitions: Vec<_> = styles
            .pages
            .iter()
            .map(|p| p.transition.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(
            transitions,
            vec![
                "transform 0.08s ease-in 0.04s",
                "transform 0.08s ease-in 0.02s",
                "transform 0.08s ease-in 0s",
            ]
        );
        assert!(styles
            .pages
            .iter()
            .all(|p| p.transform.as_deref() == Some("rotateY(0deg)")));

        // cover after 3 * 0.02 + 0.05 s, done 0.3 s later
        assert_eq!(
            waits(&steps),
            vec![(110, BookEvent::CoverDue), (410, BookEvent::CloseSettled)]
        );
    }

    #[test]
    fn transition_durations_carry_a_single_unit() {
        assert_eq!(secs(0.0), "0");
        assert_eq!(secs(3.0 * config::PAGE_STAGGER_SECS), "0.06");

        let mut machine = opened(5);
        let mut painted = Vec::new();
        for step in machine.handle(BookEvent::Click) {
            if let BookStep::Paint(styles) = step {
                painted.push(styles);
            }
        }
        if let Some(BookStep::Paint(styles)) = machine.handle(BookEvent::CoverDue).pop() {
            painted.push(styles);
        }

        let transitions: Vec<String> = painted
            .iter()
            .flat_map(|styles| styles.layers())
            .filter_map(|layer| layer.transition.clone())
            .filter(|t| t != "none")
            .collect();
        assert!(!transitions.is_empty());
        for transition in transitions {
            assert!(!transition.contains("ss"), "bad duration in {transition:?}");
            assert!(transition.starts_with("transform 0."), "{transition:?}");
        }
    }

    #[test]
    fn clicks_while_busy_are_ignored() {
        let mut machine = opened(2);
        machine.handle(BookEvent::Click);
        let before = machine.styles().clone();

        assert!(machine.handle(BookEvent::Click).is_empty());
        assert_eq!(machine.phase(), BookPhase::Closing);
        assert!(machine.is_busy());
        assert_eq!(machine.styles(), &before);

        let mut machine = BookMachine::new(2);
        machine.handle(BookEvent::Click);
        assert_eq!(machine.phase(), BookPhase::Opening);
        assert!(machine.handle(BookEvent::Click).is_empty());
        assert_eq!(machine.phase(), BookPhase::Opening);
    }

    #[test]
    fn full_close_cycle_releases_motion_overrides() {
        let mut machine = opened(4);
        machine.handle(BookEvent::Click);

        let cover = machine.handle(BookEvent::CoverDue);
        let BookStep::Paint(styles) = &cover[0] else {
            panic!("expected paint");
        };
        assert_eq!(
            styles.cover.transition.as_deref(),
            Some("transform 0.25s ease-out")
        );

        let settled = machine.handle(BookEvent::CloseSettled);
        assert_eq!(settled.len(), 1);
        assert_eq!(machine.phase(), BookPhase::Closed);
        assert!(!machine.is_busy());
        assert!(!machine.styles().closing);
        assert!(machine.styles().layers().all(|l| !l.has_motion_override()));
    }

    #[test]
    fn reopening_replays_stylesheet_animation() {
        let mut machine = opened(2);
        machine.handle(BookEvent::Click);
        machine.handle(BookEvent::CoverDue);
        machine.handle(BookEvent::CloseSettled);

        let steps = machine.handle(BookEvent::Click);
        assert_eq!(machine.phase(), BookPhase::Opening);
        assert!(matches!(&steps[0], BookStep::Paint(paused)
            if paused.layers().all(|l| l.animation.as_deref() == Some("none"))));
        assert_eq!(steps[1], BookStep::Reflow);
        assert_eq!(steps[2], BookStep::Paint(BookStyles::untouched(2)));
        assert_eq!(waits(&steps), vec![(10_000, BookEvent::OpenSettled)]);

        machine.handle(BookEvent::OpenSettled);
        assert_eq!(machine.phase(), BookPhase::Open);
        assert!(!machine.is_busy());
    }

    #[test]
    fn intro_timer_does_not_cut_a_replay_short() {
        let mut machine = BookMachine::new(2);
        machine.handle(BookEvent::Click);
        assert!(machine.handle(BookEvent::IntroFinished).is_empty());
        assert_eq!(machine.phase(), BookPhase::Opening);
    }

    #[test]
    fn stray_timers_are_ignored() {
        let mut machine = BookMachine::new(2);
        assert!(machine.handle(BookEvent::CloseSettled).is_empty());
        assert!(machine.handle(BookEvent::CoverDue).is_empty());
        assert!(machine.handle(BookEvent::OpenSettled).is_empty());
        assert_eq!(machine.phase(), BookPhase::Closed);
    }
}
