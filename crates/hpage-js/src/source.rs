//! Script source helpers

const JAVASCRIPT_SCHEME: &str = "javascript:";

/// Prefix of synthesized handler wrappers. Author code cannot be expected to
/// avoid every name, but nothing sane starts with this.
pub const WRAPPER_PREFIX: &str = "__hpageHandlerWrapper";

/// Strip a leading `javascript:` (any case). A bare prefix with nothing after
/// it is left alone.
pub fn strip_javascript_prefix(source: &str) -> &str {
    let len = JAVASCRIPT_SCHEME.len();
    match source.get(..len) {
        Some(head) if source.len() > len && head.eq_ignore_ascii_case(JAVASCRIPT_SCHEME) => &source[len..],
        _ => source,
    }
}

/// Name of the `count`-th wrapper function of a page
pub fn wrapper_name(count: u64) -> String {
    format!("{WRAPPER_PREFIX}{count}")
}

/// Zero-argument function definition around `source`, so intrinsic event
/// handler code may `return`.
pub fn wrap_in_function(name: &str, source: &str) -> String {
    format!("function {name}() {{{source}\n}}")
}

/// Decide whether a `<script>` element holds JavaScript.
///
/// `language` wins over `type`; with neither, the script is JavaScript.
pub fn is_javascript(type_attr: Option<&str>, language_attr: Option<&str>) -> bool {
    match (type_attr.filter(|t| !t.is_empty()), language_attr.filter(|l| !l.is_empty())) {
        (_, Some(language)) => language
            .get(..10)
            .is_some_and(|head| head.eq_ignore_ascii_case("javascript")),
        (Some(ty), None) => ty.trim().eq_ignore_ascii_case("text/javascript"),
        (None, None) => true,
    }
}
