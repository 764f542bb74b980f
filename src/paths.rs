/// Longest common directory prefix of a set of absolute paths, kept to
/// whole segments and ending in `/`.
///
/// Any path that is not absolute poisons the whole set and the result is
/// the empty string, as is an empty input slice. Paths sharing only the
/// root yield `"/"`.
pub fn common_directory_path(paths: &[&str]) -> String {
    if paths.is_empty() || !paths.iter().all(|p| p.starts_with('/')) {
        return String::new();
    }

    let first = paths[0];
    let common = first
        .char_indices()
        .take_while(|&(i, c)| paths[1..].iter().all(|p| p[i..].chars().next() == Some(c)))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    // Cut the shared prefix back to the last complete segment.
    match first[..common].rfind('/') {
        Some(slash) => first[..=slash].to_string(),
        None => String::new(),
    }
}
