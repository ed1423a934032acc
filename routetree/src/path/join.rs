//! Path fragment joining.

/// Join path fragments into a single normalized path.
///
/// Fragments are concatenated with `/`, runs of `/` are collapsed, leading
/// and trailing `/` are stripped, and a single `/` is prefixed. Empty
/// fragments contribute nothing, so joining no fragments (or only empty
/// ones) yields `/`.
///
/// # Examples
///
/// ```
/// use routetree::path::merge_paths;
///
/// assert_eq!(merge_paths(["hello", "world"]), "/hello/world");
/// assert_eq!(merge_paths(["/dashboard/", "//users"]), "/dashboard/users");
/// assert_eq!(merge_paths(["/dashboard", ""]), "/dashboard");
/// assert_eq!(merge_paths(["", "/"]), "/");
/// ```
#[must_use]
pub fn merge_paths<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::from("/");

    for fragment in fragments {
        for segment in fragment.as_ref().split('/').filter(|s| !s.is_empty()) {
            if out.len() > 1 {
                out.push('/');
            }
            out.push_str(segment);
        }
    }

    out
}
