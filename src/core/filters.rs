use crate::models::UserProfile;

/// A profile is usable for matching only if it carries an id
#[inline]
pub fn is_well_formed(profile: &UserProfile) -> bool {
    !profile.id.trim().is_empty()
}

/// Check if the candidate is the subject itself
#[inline]
pub fn is_self(subject: &UserProfile, candidate: &UserProfile) -> bool {
    subject.id == candidate.id
}

/// Check if the two users list at least one identical interest
///
/// Interests are free text and compared exactly.
#[inline]
pub fn shares_interest(subject: &UserProfile, candidate: &UserProfile) -> bool {
    subject
        .interests
        .iter()
        .any(|interest| candidate.interests.contains(interest))
}

/// Check if both users list exactly the same department
///
/// Two empty departments are equal and count as a match.
#[inline]
pub fn same_department(subject: &UserProfile, candidate: &UserProfile) -> bool {
    subject.department == candidate.department
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profile(id: &str, interests: &[&str], department: &str) -> UserProfile {
        UserProfile {
            interests: interests.iter().map(|s| s.to_string()).collect(),
            department: department.to_string(),
            ..UserProfile::new(id)
        }
    }

    #[test]
    fn test_blank_id_is_malformed() {
        assert!(is_well_formed(&UserProfile::new("u1")));
        assert!(!is_well_formed(&UserProfile::new("")));
        assert!(!is_well_formed(&UserProfile::new("   ")));
    }

    #[test]
    fn test_is_self() {
        let subject = create_test_profile("u1", &[], "CS");
        assert!(is_self(&subject, &create_test_profile("u1", &["chess"], "Math")));
        assert!(!is_self(&subject, &create_test_profile("u2", &[], "CS")));
    }

    #[test]
    fn test_interest_match_is_case_sensitive() {
        let subject = create_test_profile("u1", &["chess", "hiking"], "CS");

        assert!(shares_interest(&subject, &create_test_profile("u2", &["hiking"], "")));
        assert!(!shares_interest(&subject, &create_test_profile("u3", &["Chess"], "")));
        assert!(!shares_interest(&subject, &create_test_profile("u4", &[], "")));
    }

    #[test]
    fn test_department_match() {
        let subject = create_test_profile("u1", &[], "CS");

        assert!(same_department(&subject, &create_test_profile("u2", &[], "CS")));
        assert!(!same_department(&subject, &create_test_profile("u3", &[], "cs")));
    }

    #[test]
    fn test_empty_departments_match() {
        let subject = create_test_profile("u1", &[], "");
        assert!(same_department(&subject, &create_test_profile("u2", &[], "")));
        assert!(!same_department(&subject, &create_test_profile("u3", &[], "CS")));
    }
}
