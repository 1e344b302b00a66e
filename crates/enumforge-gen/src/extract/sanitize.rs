use convert_case::{Case, Casing};
use std::collections::HashSet;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

// fns every synthesized impl carries; an item accessor may not shadow them
const SURFACE_FNS: &[&str] = &[
    "get", "items", "map", "map_with", "new", "switch", "switch_with", "try_get", "validate",
];

/// Seed the taken-name set with the functions the synthesizer always emits
/// on the type, plus the key/member getter names.
pub fn reserved_names<'a>(getters: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    SURFACE_FNS
        .iter()
        .copied()
        .chain(getters)
        .map(ToString::to_string)
        .collect()
}

/// Sanitize an item ident into a valid, unique parameter identifier.
///
/// Snake-cases the ident, sidesteps keywords with a trailing underscore, and
/// resolves collisions against `taken` with an increasing integer suffix.
pub fn sanitize_arg_name(ident: &str, taken: &mut HashSet<String>) -> String {
    let mut name = ident.to_case(Case::Snake);
    if name.is_empty() {
        name = "item".to_string();
    }
    if KEYWORDS.contains(&name.as_str()) {
        name.push('_');
    }

    if taken.contains(&name) {
        let mut n = 1;
        name = loop {
            let candidate = format!("{name}{n}");
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
    }

    taken.insert(name.clone());
    name
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn snake_cases_item_idents() {
        let mut taken = HashSet::new();

        assert_eq!(sanitize_arg_name("Red", &mut taken), "red");
        assert_eq!(sanitize_arg_name("DarkRed", &mut taken), "dark_red");
    }

    #[test]
    fn keywords_get_a_trailing_underscore() {
        let mut taken = HashSet::new();

        assert_eq!(sanitize_arg_name("Loop", &mut taken), "loop_");
        assert_eq!(sanitize_arg_name("Match", &mut taken), "match_");
    }

    #[test]
    fn generated_surface_names_are_reserved() {
        let mut taken = reserved_names(["code", "hex"]);

        assert_eq!(sanitize_arg_name("Get", &mut taken), "get1");
        assert_eq!(sanitize_arg_name("Items", &mut taken), "items1");
        assert_eq!(sanitize_arg_name("New", &mut taken), "new1");
        assert_eq!(sanitize_arg_name("Code", &mut taken), "code1");
        assert_eq!(sanitize_arg_name("Blue", &mut taken), "blue");
    }

    #[test]
    fn collisions_are_suffixed_with_an_increasing_integer() {
        let mut taken = HashSet::new();

        assert_eq!(sanitize_arg_name("Red", &mut taken), "red");
        assert_eq!(sanitize_arg_name("RED", &mut taken), "red1");
        assert_eq!(sanitize_arg_name("Red", &mut taken), "red2");
    }
}
