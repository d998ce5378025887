/// Page regions in document order. Each one is an anchor target for nav links.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Services,
    Cases,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Cases,
        Section::Contacts,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Cases => "cases",
            Section::Contacts => "contacts",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Главная",
            Section::About => "О нас",
            Section::Services => "Услуги",
            Section::Cases => "Кейсы",
            Section::Contacts => "Связаться",
        }
    }
}

/// One region's visibility as reported in an observer batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub section: Section,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl VisibilityEntry {
    pub fn new(section: Section, is_intersecting: bool, ratio: f64) -> Self {
        Self { section, is_intersecting, ratio }
    }
}

/// Folds visibility batches into a single "most visible" section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    threshold: f64,
    active: Section,
}

impl SectionTracker {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, active: Section::default() }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Applies one batch and returns the active section. The highest ratio at or above the
    /// threshold wins; on a tie the earlier entry in the batch wins. A batch with nothing
    /// qualifying leaves the previous section active.
    pub fn observe(&mut self, batch: &[VisibilityEntry]) -> Section {
        let mut best: Option<&VisibilityEntry> = None;
        for entry in batch {
            if !entry.is_intersecting || entry.ratio < self.threshold {
                continue;
            }
            match best {
                Some(b) if b.ratio >= entry.ratio => {}
                _ => best = Some(entry),
            }
        }
        if let Some(entry) = best {
            self.active = entry.section;
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(section: Section, ratio: f64) -> VisibilityEntry {
        VisibilityEntry::new(section, true, ratio)
    }

    #[test]
    fn starts_on_hero() {
        assert_eq!(SectionTracker::new(0.35).active(), Section::Hero);
    }

    #[test]
    fn picks_higher_ratio_of_two_visible() {
        let mut tracker = SectionTracker::new(0.35);
        let active = tracker.observe(&[seen(Section::About, 0.4), seen(Section::Services, 0.8)]);
        assert_eq!(active, Section::Services);
    }

    #[test]
    fn ignores_entries_below_threshold() {
        let mut tracker = SectionTracker::new(0.35);
        tracker.observe(&[seen(Section::Cases, 0.6)]);
        let active = tracker.observe(&[seen(Section::About, 0.2)]);
        assert_eq!(active, Section::Cases);
    }

    #[test]
    fn keeps_last_section_when_nothing_intersects() {
        let mut tracker = SectionTracker::new(0.35);
        tracker.observe(&[seen(Section::Contacts, 0.9)]);
        let active = tracker.observe(&[
            VisibilityEntry::new(Section::Contacts, false, 0.0),
            VisibilityEntry::new(Section::Cases, false, 0.0),
        ]);
        assert_eq!(active, Section::Contacts);
        assert_eq!(tracker.observe(&[]), Section::Contacts);
    }

    #[test]
    fn ties_go_to_first_entry_in_batch() {
        let mut tracker = SectionTracker::new(0.35);
        let active = tracker.observe(&[seen(Section::Cases, 0.5), seen(Section::About, 0.5)]);
        assert_eq!(active, Section::Cases);
    }

    #[test]
    fn non_intersecting_entry_with_ratio_is_ignored() {
        let mut tracker = SectionTracker::new(0.35);
        let active = tracker.observe(&[VisibilityEntry::new(Section::Services, false, 0.9)]);
        assert_eq!(active, Section::Hero);
    }

    #[test]
    fn active_is_always_a_known_section() {
        let mut tracker = SectionTracker::new(0.35);
        let ratios = [0.1, 0.5, 0.0, 0.9, 0.36, 0.34, 1.0];
        for (i, ratio) in ratios.iter().enumerate() {
            let section = Section::ALL[i % Section::ALL.len()];
            let active = tracker.observe(&[seen(section, *ratio)]);
            assert!(Section::ALL.contains(&active));
        }
    }

    #[test]
    fn ids_round_trip_and_unknown_is_none() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("pricing"), None);
        assert_eq!(Section::Cases.href(), "#cases");
    }
}
