/// Joins a containing-directory path and an entry name into one path string.
///
/// Identical parent and child collapse to the parent alone, which keeps the
/// start path unchanged when it is re-examined as its own entry. A separator
/// already present at the seam is never doubled.
#[must_use]
pub fn join_path(parent: &str, child: &str) -> String {
    if parent == child {
        return parent.to_string();
    }

    let mut joined = String::with_capacity(parent.len() + 1 + child.len());
    joined.push_str(parent);
    if !parent.ends_with('/') && !child.starts_with('/') {
        joined.push('/');
    }
    joined.push_str(child);
    joined
}
