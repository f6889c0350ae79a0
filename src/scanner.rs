use regex::Regex;

/// Scans forward from `start` (the byte just past an opening `{`) and returns
/// the offset of the matching `}`.
///
/// Unbalanced input is not an error: the scan runs to the end of `text` and
/// returns `text.len()`, so the caller gets whatever span was covered.
pub fn balanced_end(text: &str, start: usize) -> usize {
    let mut depth = 1usize;
    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return start + offset;
                }
            }
            _ => {}
        }
    }
    text.len()
}

/// Byte offset just past the `{` of the first `<name> {` in `text`.
pub fn find_block_open(text: &str, name: &str) -> Option<usize> {
    let pattern = Regex::new(&format!(r"{}\s*\{{", regex::escape(name))).ok()?;
    pattern.find(text).map(|m| m.end())
}

/// Body of the first `<name> { ... }` block, without the outer braces.
pub fn find_block_body<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let open = find_block_open(text, name)?;
    let close = balanced_end(text, open);
    Some(&text[open..close])
}
