use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::preference::PreferenceStore;

/// Visitor segment the page copy is framed for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Audience {
    #[default]
    Public,
    Commercial,
    Startup,
}

impl Audience {
    /// Slider order, left to right.
    pub const ALL: [Audience; 3] = [Audience::Public, Audience::Commercial, Audience::Startup];

    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Public => "public",
            Audience::Commercial => "commercial",
            Audience::Startup => "startup",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Audience::Public => "Public sector",
            Audience::Commercial => "Commercial",
            Audience::Startup => "Startup",
        }
    }

    /// 1-based slot used by the slider highlight's `data-position`.
    pub fn position(self) -> usize {
        match self {
            Audience::Public => 1,
            Audience::Commercial => 2,
            Audience::Startup => 3,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAudience(pub String);

impl FromStr for Audience {
    type Err = UnknownAudience;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Audience::Public),
            "commercial" => Ok(Audience::Commercial),
            "startup" => Ok(Audience::Startup),
            other => Err(UnknownAudience(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Applied(Audience),
    Ignored,
}

/// Handles a click on a slider option carrying `data-audience = tag`.
///
/// A recognized tag is persisted and returned so the caller can re-render both
/// sliders with it. Anything else leaves the store untouched.
pub fn select_audience(store: &dyn PreferenceStore, tag: Option<&str>) -> Selection {
    match tag.map(str::parse::<Audience>) {
        Some(Ok(audience)) => {
            store.set(audience);
            Selection::Applied(audience)
        }
        _ => Selection::Ignored,
    }
}

/// The audience both sliders should show after a click on either of them.
pub fn apply_selection(
    store: &dyn PreferenceStore,
    current: Audience,
    tag: Option<&str>,
) -> Audience {
    match select_audience(store, tag) {
        Selection::Applied(choice) => {
            info!("Audience switched to {}", choice);
            choice
        }
        Selection::Ignored => {
            debug!("Ignoring slider click with tag {:?}", tag);
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::MemoryPreferenceStore;

    #[test]
    fn parses_only_the_three_segments() {
        assert_eq!("public".parse(), Ok(Audience::Public));
        assert_eq!("commercial".parse(), Ok(Audience::Commercial));
        assert_eq!("startup".parse(), Ok(Audience::Startup));
        assert!("Startup".parse::<Audience>().is_err());
        assert!("".parse::<Audience>().is_err());
    }

    #[test]
    fn positions_follow_slider_order() {
        let positions: Vec<usize> = Audience::ALL.iter().map(|a| a.position()).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn selecting_known_tag_persists_it() {
        let store = MemoryPreferenceStore::default();
        assert_eq!(
            select_audience(&store, Some("startup")),
            Selection::Applied(Audience::Startup)
        );
        assert_eq!(store.get(), Audience::Startup);
    }

    #[test]
    fn selecting_unknown_or_missing_tag_changes_nothing() {
        let store = MemoryPreferenceStore::with_value("commercial");
        assert_eq!(select_audience(&store, Some("enterprise")), Selection::Ignored);
        assert_eq!(select_audience(&store, None), Selection::Ignored);
        assert_eq!(store.raw(), Some("commercial".to_string()));
    }

    #[test]
    fn apply_selection_keeps_current_on_bad_tag() {
        let store = MemoryPreferenceStore::with_value("public");
        assert_eq!(
            apply_selection(&store, Audience::Public, Some("")),
            Audience::Public
        );
        assert_eq!(
            apply_selection(&store, Audience::Public, Some("commercial")),
            Audience::Commercial
        );
        assert_eq!(store.raw(), Some("commercial".to_string()));
    }
}
