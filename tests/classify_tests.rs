use lithoview::core::classify::classify;
use lithoview::models::{LITHOLOGIES, UNKNOWN};

#[test]
fn test_keyword_match_is_case_insensitive() {
    assert_eq!(classify(Some("Brown CLAY with stones")).name, "Clay");
    assert_eq!(classify(Some("fine SaNd, wet")).name, "Sand");
    assert_eq!(classify(Some("GRAVEL and pebbles")).name, "Gravel");
    assert_eq!(classify(Some("dark peat layer")).name, "Organic material");
    assert_eq!(classify(Some("grey marl")).name, "Marl");
}

#[test]
fn test_stems_match_inside_words() {
    // Substring matching, not whole-word.
    assert_eq!(classify(Some("clayey deposits")).name, "Clay");
    assert_eq!(classify(Some("argillaceous layer")).name, "Clay");
    assert_eq!(classify(Some("silty horizon")).name, "Silt");
    assert_eq!(classify(Some("pebbly bed")).name, "Gravel");
}

#[test]
fn test_first_listed_category_wins() {
    // Clay precedes Sand in the table, so a mixed description is Clay.
    assert_eq!(classify(Some("sandy clay")).name, "Clay");
    assert_eq!(classify(Some("clay with sand lenses")).name, "Clay");
    // Sand precedes Silt.
    assert_eq!(classify(Some("silty sand")).name, "Sand");
}

#[test]
fn test_every_table_keyword_reaches_its_category() {
    for lith in LITHOLOGIES {
        for kw in lith.keywords {
            let desc = kw.to_uppercase();
            assert_eq!(
                classify(Some(&desc)).name,
                lith.name,
                "keyword '{}' must classify as {}",
                kw,
                lith.name
            );
        }
    }
}

#[test]
fn test_unmatched_and_empty_inputs_are_unknown() {
    assert_eq!(classify(Some("basalt")).name, UNKNOWN.name);
    assert_eq!(classify(Some("")).name, UNKNOWN.name);
    assert_eq!(classify(Some("   ")).name, UNKNOWN.name);
    assert_eq!(classify(None).name, UNKNOWN.name);
}
