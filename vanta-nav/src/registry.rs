use crate::section::SectionId;

/// Total mapping from [`SectionId`] to a view value `V`.
///
/// The home view is supplied at construction, so lookups always resolve:
/// a section without a registered view, or an ordinal that does not decode
/// to a section, renders home. The registry stores views only; it never
/// holds per-section runtime state.
pub struct SectionRegistry<V> {
    home: V,
    views: [Option<V>; SectionId::ALL.len()],
}

impl<V> SectionRegistry<V> {
    pub fn new(home: V) -> Self {
        Self {
            home,
            views: std::array::from_fn(|_| None),
        }
    }

    /// Register the view for `section`. Registering home replaces the
    /// fallback view as well.
    pub fn register(mut self, section: SectionId, view: V) -> Self {
        if section == SectionId::Home {
            self.home = view;
        } else {
            self.views[section.ordinal()] = Some(view);
        }
        self
    }

    pub fn resolve(&self, section: SectionId) -> &V {
        match self.views.get(section.ordinal()) {
            Some(Some(view)) => view,
            _ => {
                if section != SectionId::Home {
                    log::debug!(
                        "no view registered for `{section}`, rendering home"
                    );
                }
                &self.home
            },
        }
    }

    /// Resolve a raw, possibly corrupted, section ordinal.
    pub fn resolve_ordinal(&self, raw: usize) -> &V {
        match SectionId::from_ordinal(raw) {
            Some(section) => self.resolve(section),
            None => {
                log::debug!("section ordinal {raw} out of range, rendering home");
                &self.home
            },
        }
    }

    /// Whether every section has its own view.
    pub fn is_complete(&self) -> bool {
        SectionId::ALL
            .into_iter()
            .filter(|section| *section != SectionId::Home)
            .all(|section| self.views[section.ordinal()].is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::SectionRegistry;
    use crate::section::SectionId;

    fn full_registry() -> SectionRegistry<&'static str> {
        SectionId::ALL.into_iter().fold(
            SectionRegistry::new("fallback"),
            |registry, section| registry.register(section, section.fragment()),
        )
    }

    #[test]
    fn given_full_registry_when_resolving_known_ids_then_views_are_distinct() {
        let registry = full_registry();
        assert!(registry.is_complete());

        let mut seen = HashSet::new();
        for section in SectionId::ALL {
            let view = *registry.resolve(section);
            assert_eq!(view, section.fragment());
            assert!(seen.insert(view));
        }
    }

    #[test]
    fn given_out_of_range_ordinal_when_resolved_then_returns_home_view() {
        let registry = full_registry();
        let home = *registry.resolve(SectionId::Home);

        assert_eq!(*registry.resolve_ordinal(8), home);
        assert_eq!(*registry.resolve_ordinal(usize::MAX), home);
        assert_eq!(*registry.resolve_ordinal(4), "protection");
    }

    #[test]
    fn given_partial_registry_when_resolving_missing_id_then_returns_home_view()
    {
        let registry = SectionRegistry::new("home")
            .register(SectionId::Verify, "verify");

        assert!(!registry.is_complete());
        assert_eq!(*registry.resolve(SectionId::Verify), "verify");
        assert_eq!(*registry.resolve(SectionId::Analytics), "home");
    }
}
