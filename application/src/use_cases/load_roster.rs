//! Load roster use case
//!
//! Loads the roster once at startup and cross-checks it against the group
//! menu. A menu group with no children is not an error (the roster may
//! simply be empty for it today) but every report for it would fail, so
//! it is surfaced as a warning.

use crate::ports::roster_source::{LoadError, RosterSource};
use absence_domain::{GroupOptions, Roster};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of loading the roster
#[derive(Debug, Clone)]
pub struct LoadRosterOutput {
    pub roster: Arc<Roster>,
    /// Menu group ids that no roster child belongs to
    pub empty_groups: Vec<String>,
    /// Roster group ids that the menu does not offer
    pub unreachable_groups: Vec<String>,
}

/// Use case for loading the roster at startup
pub struct LoadRosterUseCase<S: RosterSource> {
    source: S,
}

impl<S: RosterSource> LoadRosterUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self, groups: &GroupOptions) -> Result<LoadRosterOutput, LoadError> {
        let origin = self.source.describe();
        let roster = self.source.load()?;
        info!("Loaded {} children from {}", roster.len(), origin);

        let roster_groups = roster.groups();
        let empty_groups: Vec<String> = groups
            .options()
            .iter()
            .filter(|option| !roster_groups.contains(&option.id.as_str()))
            .map(|option| option.id.clone())
            .collect();
        let unreachable_groups: Vec<String> = roster_groups
            .iter()
            .filter(|group| !groups.options().iter().any(|option| option.id == **group))
            .map(|group| group.to_string())
            .collect();

        for group in &empty_groups {
            warn!("Menu group {} has no children in {}", group, origin);
        }
        for group in &unreachable_groups {
            warn!(
                "Roster group {} is not offered in the group menu; its children cannot be reported",
                group
            );
        }

        Ok(LoadRosterOutput {
            roster: Arc::new(roster),
            empty_groups,
            unreachable_groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::roster_source::StaticRosterSource;
    use absence_domain::Child;

    #[test]
    fn test_load_reports_group_mismatches() {
        let source = StaticRosterSource::new(Roster::new(vec![
            Child::new("1", "Lee", "Min", "01.02.19"),
            Child::new("3", "Park", "Ji", "03.04.20"),
        ]));

        let output = LoadRosterUseCase::new(source)
            .execute(&GroupOptions::default())
            .unwrap();

        assert_eq!(output.roster.len(), 2);
        assert_eq!(output.empty_groups, vec!["2"]);
        assert_eq!(output.unreachable_groups, vec!["3"]);
    }

    #[test]
    fn test_load_propagates_errors() {
        struct BrokenSource;

        impl RosterSource for BrokenSource {
            fn load(&self) -> Result<Roster, LoadError> {
                Err(LoadError::Empty {
                    origin: "children.csv".to_string(),
                })
            }

            fn describe(&self) -> String {
                "children.csv".to_string()
            }
        }

        let result = LoadRosterUseCase::new(BrokenSource).execute(&GroupOptions::default());
        assert!(matches!(result, Err(LoadError::Empty { .. })));
    }
}
