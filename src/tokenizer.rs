use regex::Regex;
use std::sync::LazyLock;

// The interior may itself contain `>`/`<` pairs (e.g. a trailing
// `sensor-bindings = <...>` in the same span); the capture spans them.
static BINDINGS_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"bindings\s*=\s*<([^>]*(?:>[^<]*<[^>]*)*)>").expect("bindings pattern")
});

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern"));

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*$").expect("line comment pattern"));

// `&behavior arg arg ...` or, failing that, any stray non-`&` run.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&\w+(?:\s+[^&\s]+)*|[^&\s]+").expect("token pattern"));

/// Interior of the first `bindings = < ... >` in a layer span.
pub fn extract_bindings_text(span: &str) -> Option<&str> {
    BINDINGS_BLOCK
        .captures(span)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(text, "");
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

/// Splits a bindings interior into raw tokens, in source order.
pub fn tokenize(bindings_text: &str) -> Vec<String> {
    let clean = strip_comments(bindings_text);
    TOKEN
        .find_iter(&clean)
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple() {
        let span = "base {\n bindings = <\n &kp A &kp B\n >;\n};";
        assert_eq!(extract_bindings_text(span), Some("\n &kp A &kp B\n "));
    }

    #[test]
    fn test_extract_missing() {
        assert!(extract_bindings_text("base { label = \"x\"; };").is_none());
    }

    #[test]
    fn test_tokens_keep_arguments() {
        let tokens = tokenize("&mt LEFT_SHIFT Z  &kp LS(LG(S))\n&trans");
        assert_eq!(tokens, vec!["&mt LEFT_SHIFT Z", "&kp LS(LG(S))", "&trans"]);
    }

    #[test]
    fn test_comments_removed() {
        let text = "&kp A /* &kp HIDDEN */ &kp B // &kp GONE\n&kp C";
        assert_eq!(tokenize(text), vec!["&kp A", "&kp B", "&kp C"]);
    }

    #[test]
    fn test_stray_fragments_are_tokens() {
        assert_eq!(tokenize("junk &kp A"), vec!["junk", "&kp A"]);
    }
}
