use std::collections::HashSet;

/// Skills from `offered` that someone wants, per `wanted`
///
/// Comparison is case-insensitive; the returned tags keep the spelling and
/// order they have in `offered`.
pub fn overlap(offered: &[String], wanted: &[String]) -> Vec<String> {
    if offered.is_empty() || wanted.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<String> = wanted.iter().map(|s| s.to_lowercase()).collect();

    offered
        .iter()
        .filter(|skill| wanted.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Ordered union of two tag lists with exact duplicates removed
///
/// Entries of `first` come first, followed by entries of `second` that are
/// not already present.
pub fn merge_unique(first: &[String], second: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(first.len() + second.len());
    let mut merged = Vec::with_capacity(first.len() + second.len());

    for tag in first.iter().chain(second) {
        if seen.insert(tag.as_str()) {
            merged.push(tag.clone());
        }
    }

    merged
}

/// Tags present in both lists, compared exactly, in the order of `a`
pub fn shared_exact(a: &[String], b: &[String]) -> Vec<String> {
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    a.iter()
        .filter(|tag| b.contains(tag.as_str()) && seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_overlap_ignores_case() {
        let offered = tags(&["Python", "Rust", "guitar"]);
        let wanted = tags(&["python", "GUITAR"]);

        assert_eq!(overlap(&offered, &wanted), tags(&["Python", "guitar"]));
    }

    #[test]
    fn test_overlap_requires_whole_tag() {
        let offered = tags(&["Python 3", "Java"]);
        let wanted = tags(&["python", "javascript"]);

        assert!(overlap(&offered, &wanted).is_empty());
    }

    #[test]
    fn test_overlap_with_empty_side() {
        assert!(overlap(&[], &tags(&["python"])).is_empty());
        assert!(overlap(&tags(&["python"]), &[]).is_empty());
    }

    #[test]
    fn test_merge_unique_keeps_first_appearance() {
        let merged = merge_unique(&tags(&["Python", "SQL"]), &tags(&["SQL", "Piano", "Python"]));
        assert_eq!(merged, tags(&["Python", "SQL", "Piano"]));
    }

    #[test]
    fn test_merge_unique_is_case_sensitive() {
        let merged = merge_unique(&tags(&["Python"]), &tags(&["python"]));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_shared_exact() {
        let shared = shared_exact(&tags(&["chess", "Chess", "chess", "go"]), &tags(&["chess", "go"]));
        assert_eq!(shared, tags(&["chess", "go"]));
    }
}
