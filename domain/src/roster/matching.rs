//! Absence record validation against the roster
//!
//! Each predicate checks one more field than the previous one. Comparison
//! is exact: case-sensitive, no trimming, no normalization. A predicate
//! whose fields are not all set on the candidate never matches.
//!
//! There is deliberately no group-only check; the group is always checked
//! together with the last name.

use super::entities::{Child, Roster};
use crate::absence::entities::CandidateRecord;

impl Roster {
    /// True iff some child shares the candidate's group and last name.
    pub fn matches_group_and_last_name(&self, candidate: &CandidateRecord) -> bool {
        let (Some(group), Some(last_name)) = (&candidate.group, &candidate.last_name) else {
            return false;
        };
        self.any(|child| child.group == *group && child.last_name == *last_name)
    }

    /// True iff some child shares the candidate's group, last name and first name.
    pub fn matches_group_and_last_name_and_first_name(&self, candidate: &CandidateRecord) -> bool {
        let (Some(group), Some(last_name), Some(first_name)) =
            (&candidate.group, &candidate.last_name, &candidate.first_name)
        else {
            return false;
        };
        self.any(|child| {
            child.group == *group && child.last_name == *last_name && child.first_name == *first_name
        })
    }

    /// True iff some child equals the candidate on the whole identity tuple.
    pub fn matches_full_tuple(&self, candidate: &CandidateRecord) -> bool {
        match candidate.to_child() {
            Some(wanted) => self.any(|child| *child == wanted),
            None => false,
        }
    }

    fn any(&self, predicate: impl Fn(&Child) -> bool) -> bool {
        self.children().iter().any(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            Child::new("1", "Lee", "Min", "01.02.19"),
            Child::new("1", "Lee", "Min", "15.08.19"),
            Child::new("2", "Park", "Ji", "03.04.20"),
            Child::new("2", "Lee", "Ha", "05.06.19"),
        ])
    }

    fn candidate(
        group: Option<&str>,
        last: Option<&str>,
        first: Option<&str>,
        birth: Option<&str>,
    ) -> CandidateRecord {
        CandidateRecord {
            group: group.map(String::from),
            last_name: last.map(String::from),
            first_name: first.map(String::from),
            birth_date: birth.map(String::from),
        }
    }

    // ==================== Group + last name ====================

    #[test]
    fn last_name_matches_within_group() {
        let c = candidate(Some("2"), Some("Lee"), None, None);
        assert!(roster().matches_group_and_last_name(&c));
    }

    #[test]
    fn last_name_from_other_group_does_not_match() {
        let c = candidate(Some("1"), Some("Park"), None, None);
        assert!(!roster().matches_group_and_last_name(&c));
    }

    #[test]
    fn last_name_is_case_sensitive_and_untrimmed() {
        let r = roster();
        assert!(!r.matches_group_and_last_name(&candidate(Some("1"), Some("lee"), None, None)));
        assert!(!r.matches_group_and_last_name(&candidate(Some("1"), Some(" Lee"), None, None)));
        assert!(!r.matches_group_and_last_name(&candidate(Some("1"), Some("Lee "), None, None)));
    }

    #[test]
    fn unset_fields_never_match() {
        let r = roster();
        assert!(!r.matches_group_and_last_name(&candidate(None, Some("Lee"), None, None)));
        assert!(!r.matches_group_and_last_name(&candidate(Some("1"), None, None, None)));
        assert!(
            !r.matches_group_and_last_name_and_first_name(&candidate(
                Some("1"),
                Some("Lee"),
                None,
                None
            ))
        );
        assert!(!r.matches_full_tuple(&candidate(Some("1"), Some("Lee"), Some("Min"), None)));
    }

    // ==================== + first name ====================

    #[test]
    fn first_name_must_belong_to_same_group_and_last_name() {
        let r = roster();
        assert!(r.matches_group_and_last_name_and_first_name(&candidate(
            Some("1"),
            Some("Lee"),
            Some("Min"),
            None
        )));
        // "Ha" is a Lee, but in group 2
        assert!(!r.matches_group_and_last_name_and_first_name(&candidate(
            Some("1"),
            Some("Lee"),
            Some("Ha"),
            None
        )));
    }

    // ==================== Full tuple ====================

    #[test]
    fn full_tuple_is_exact() {
        let r = roster();
        for child in r.children() {
            let c = candidate(
                Some(&child.group),
                Some(&child.last_name),
                Some(&child.first_name),
                Some(&child.birth_date),
            );
            assert!(r.matches_full_tuple(&c), "expected {child:?} to match");
        }
        assert!(!r.matches_full_tuple(&candidate(
            Some("1"),
            Some("Lee"),
            Some("Min"),
            Some("02.02.19")
        )));
        assert!(!r.matches_full_tuple(&candidate(
            Some("2"),
            Some("Lee"),
            Some("Min"),
            Some("01.02.19")
        )));
    }

    #[test]
    fn birth_date_is_compared_as_text() {
        // Same calendar day, different spelling
        let c = candidate(Some("1"), Some("Lee"), Some("Min"), Some("1.2.19"));
        assert!(!roster().matches_full_tuple(&c));
    }

    #[test]
    fn narrowing_is_monotonic() {
        let r = roster();
        let names = [
            ("1", "Lee", "Min"),
            ("1", "Lee", "Ha"),
            ("2", "Park", "Ji"),
            ("2", "Park", "Min"),
            ("3", "Lee", "Min"),
        ];
        let dates = ["01.02.19", "15.08.19", "03.04.20", "05.06.19", "31.12.99"];

        for (group, last, first) in names {
            let partial = candidate(Some(group), Some(last), Some(first), None);
            let looser = r.matches_group_and_last_name_and_first_name(&partial);
            for date in dates {
                let full = candidate(Some(group), Some(last), Some(first), Some(date));
                if r.matches_full_tuple(&full) {
                    assert!(looser, "{group}/{last}/{first}/{date} matched only the stricter check");
                    assert!(r.matches_group_and_last_name(&full));
                }
            }
        }
    }

    #[test]
    fn duplicate_names_stay_ambiguous_until_birth_date() {
        let r = roster();
        let partial = candidate(Some("1"), Some("Lee"), Some("Min"), None);
        assert!(r.matches_group_and_last_name_and_first_name(&partial));
        assert!(r.matches_full_tuple(&candidate(
            Some("1"),
            Some("Lee"),
            Some("Min"),
            Some("15.08.19")
        )));
    }

    #[test]
    fn empty_roster_matches_nothing() {
        let r = Roster::default();
        let c = candidate(Some("1"), Some("Lee"), Some("Min"), Some("01.02.19"));
        assert!(!r.matches_group_and_last_name(&c));
        assert!(!r.matches_group_and_last_name_and_first_name(&c));
        assert!(!r.matches_full_tuple(&c));
    }
}
