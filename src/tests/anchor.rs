use super::{slugify, SlugRegistry};

#[test]
fn test_slugify_basic() {
    assert_eq!(slugify("Where am I?"), "where-am-i");
    assert_eq!(slugify("  Web is the medium  "), "web-is-the-medium");
    assert_eq!(slugify("a__b"), "a-b", "underscores collapse");
    assert_eq!(slugify("-a-b-"), "a-b", "trim separators");
    assert_eq!(slugify("\ta*/+()b"), "a-b", "symbol runs collapse");
}

#[test]
fn test_slugify_is_ascii() {
    let slug = slugify("Café α-ω");
    assert!(slug.is_ascii(), "slug should be ascii: {slug}");
    assert_eq!(slug, slug.to_lowercase());
}

#[test]
fn test_slugify_deterministic() {
    for text in ["URL as an identifier", "Intro", "", "¿Qué?", "Rich human interaction"] {
        assert_eq!(slugify(text), slugify(text));
    }
}

#[test]
fn test_slugify_empty_and_symbols() {
    assert_eq!(slugify(""), "");
    assert_eq!(slugify("   "), "");
    assert_eq!(slugify("*** !!! ---"), "");
}

#[test]
fn test_registry_suffixes_in_order() {
    let mut registry = SlugRegistry::new();
    let slugs: Vec<String> = ["Intro", "Intro", "Intro"]
        .iter()
        .map(|t| registry.claim(t))
        .collect();
    assert_eq!(slugs, vec!["intro", "intro-2", "intro-3"]);
    assert_eq!(registry.claimed.len(), 3);
}

#[test]
fn test_registry_skips_naturally_claimed_suffix() {
    let mut registry = SlugRegistry::new();
    assert_eq!(registry.claim("Intro"), "intro");
    assert_eq!(registry.claim("Intro 2"), "intro-2");
    assert_eq!(registry.claim("Intro"), "intro-3");
    assert_eq!(registry.claim("intro 2"), "intro-2-2");
}

#[test]
fn test_registry_ignores_empty_slugs() {
    let mut registry = SlugRegistry::new();
    assert_eq!(registry.claim(""), "");
    assert_eq!(registry.claim("???"), "");
    assert!(registry.claimed.is_empty());
}
