//! Which section the navigation should highlight.

#[derive(Debug, Clone, PartialEq)]
pub struct SectionObservation {
    pub id: String,
    pub is_intersecting: bool,
    /// Distance in px between the section's vertical centre and the
    /// viewport midline.
    pub center_distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSection {
    id: String,
}

impl ActiveSection {
    pub fn new(initial: &str) -> Self {
        Self {
            id: initial.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Applies one observer batch. Among intersecting entries the one
    /// closest to the midline wins, later entries win ties. Returns true
    /// when the active id changed.
    pub fn apply_batch(&mut self, batch: &[SectionObservation]) -> bool {
        let winner = batch
            .iter()
            .filter(|entry| entry.is_intersecting && !entry.id.is_empty())
            .fold(None::<&SectionObservation>, |best, entry| match best {
                Some(best) if best.center_distance < entry.center_distance => Some(best),
                _ => Some(entry),
            });

        match winner {
            Some(entry) if entry.id != self.id => {
                self.id = entry.id.clone();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Section geometry in document coordinates.
    #[derive(Debug, Clone, PartialEq)]
    struct SectionBounds {
        id: String,
        top: f64,
        height: f64,
    }

    /// Builds the batch an observer with a midline-only root band would report
    /// for the given scroll position.
    fn observe_midline(sections: &[SectionBounds], scroll_y: f64, viewport_height: f64) -> Vec<SectionObservation> {
        let midline = scroll_y + viewport_height / 2.0;
        sections
            .iter()
            .map(|section| {
                let bottom = section.top + section.height;
                SectionObservation {
                    id: section.id.clone(),
                    is_intersecting: section.top <= midline && midline < bottom,
                    center_distance: (section.top + section.height / 2.0 - midline).abs(),
                }
            })
            .collect()
    }

    fn page() -> Vec<SectionBounds> {
        ["about", "services", "projects", "news", "contact"]
            .iter()
            .enumerate()
            .map(|(i, id)| SectionBounds {
                id: id.to_string(),
                top: 900.0 + i as f64 * 1000.0,
                height: 1000.0,
            })
            .collect()
    }

    #[test]
    fn midline_section_becomes_active() {
        let mut active = ActiveSection::new("about");

        // Midline at 2400 + 450 = 2850, inside services (1900..2900)
        assert!(active.apply_batch(&observe_midline(&page(), 2400.0, 900.0)));
        assert_eq!(active.id(), "services");

        // Midline at 4050, inside news (3900..4900)
        active.apply_batch(&observe_midline(&page(), 3600.0, 900.0));
        assert_eq!(active.id(), "news");
    }

    #[test]
    fn hero_keeps_previous_section() {
        let mut active = ActiveSection::new("about");
        assert!(!active.apply_batch(&observe_midline(&page(), 0.0, 900.0)));
        assert_eq!(active.id(), "about");
    }

    #[test]
    fn leaving_entries_are_ignored() {
        let mut active = ActiveSection::new("about");
        let batch = vec![
            SectionObservation { id: "projects".into(), is_intersecting: true, center_distance: 10.0 },
            SectionObservation { id: "services".into(), is_intersecting: false, center_distance: 990.0 },
        ];
        active.apply_batch(&batch);
        assert_eq!(active.id(), "projects");
    }

    #[test]
    fn closest_to_midline_wins_then_last() {
        let mut active = ActiveSection::new("about");
        let batch = vec![
            SectionObservation { id: "news".into(), is_intersecting: true, center_distance: 20.0 },
            SectionObservation { id: "contact".into(), is_intersecting: true, center_distance: 480.0 },
        ];
        active.apply_batch(&batch);
        assert_eq!(active.id(), "news");

        let tie = vec![
            SectionObservation { id: "services".into(), is_intersecting: true, center_distance: 50.0 },
            SectionObservation { id: "projects".into(), is_intersecting: true, center_distance: 50.0 },
        ];
        active.apply_batch(&tie);
        assert_eq!(active.id(), "projects");
    }
}
