/// Convert a component name into the kebab-case slug used for routing.
///
/// A `-` goes in between an ASCII lowercase letter and a directly following
/// ASCII uppercase letter, then the whole string is lowercased. Digits,
/// existing separators and non-ASCII characters never introduce a separator:
///
/// - `SwitchRouterButton` -> `switch-router-button`
/// - `Foo2Bar` -> `foo2bar`
/// - `HTMLParser` -> `htmlparser`
pub fn to_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            slug.push('-');
        }
        slug.push(c);
        prev = Some(c);
    }

    slug.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_boundaries() {
        assert_eq!(to_slug("SwitchRouterButton"), "switch-router-button");
        assert_eq!(to_slug("BarBaz"), "bar-baz");
        assert_eq!(to_slug("Foo"), "foo");
        assert_eq!(to_slug("textInput"), "text-input");
    }

    #[test]
    fn runs_of_capitals_stay_together() {
        assert_eq!(to_slug("HTMLParser"), "htmlparser");
        assert_eq!(to_slug("MyURLField"), "my-urlfield");
    }

    #[test]
    fn digits_and_separators_pass_through() {
        assert_eq!(to_slug("Foo2Bar"), "foo2bar");
        assert_eq!(to_slug("Foo-Bar"), "foo-bar");
        assert_eq!(to_slug("foo_Bar"), "foo_bar");
        assert_eq!(to_slug(""), "");
    }

    #[test]
    fn non_ascii_never_splits() {
        assert_eq!(to_slug("ÉtatBouton"), "état-bouton");
        assert_eq!(to_slug("éÉ"), "éé");
    }

    #[test]
    fn idempotent_and_lowercase() {
        for name in ["SwitchRouterButton", "aBcDeF", "AlbumCard", "X", "already-slugged"] {
            let once = to_slug(name);
            assert_eq!(to_slug(&once), once, "not idempotent for {name}");
            assert!(!once.chars().any(|c| c.is_uppercase()));
        }
    }

    #[test]
    fn separator_count_matches_transitions() {
        let name = "OneTwoThreeFour";
        let transitions = name
            .as_bytes()
            .windows(2)
            .filter(|w| w[0].is_ascii_lowercase() && w[1].is_ascii_uppercase())
            .count();
        assert_eq!(to_slug(name).matches('-').count(), transitions);
    }
}
