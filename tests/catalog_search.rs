use majal_storefront::catalog::{self, CategoryFilter, SERVICES};
use majal_storefront::i18n::{is_wildcard, wildcard, Language};
use majal_storefront::models::Category;

#[test]
fn filtered_list_is_a_subset_matching_query_and_category() {
    let cases = [
        ("", "الكل"),
        ("توثيق", "الكل"),
        ("الحسابات", "التوثيق والفك"),
        ("شحن", "شحن الألعاب"),
        ("لا يوجد شيء بهذا الاسم", "الكل"),
    ];

    for (query, raw_category) in cases {
        let filter = CategoryFilter::parse(raw_category);
        let hits = catalog::filter_services(Language::Ar, filter, query);
        for service in &hits {
            assert!(SERVICES.iter().any(|s| s.id == service.id));
            assert!(
                service.title.ar.contains(query) || service.description.ar.contains(query),
                "{} does not match {query}",
                service.id
            );
            if let Some(category) = Category::parse(raw_category) {
                assert_eq!(service.category, category);
            } else {
                assert!(is_wildcard(raw_category));
            }
        }
    }
}

#[test]
fn search_is_case_sensitive_in_english() {
    let upper = catalog::filter_services(Language::En, CategoryFilter::All, "Verification");
    assert!(!upper.is_empty());
    // No English title or description carries the lowercase form, so the
    // case-sensitive contains check must find nothing.
    let lower = catalog::filter_services(Language::En, CategoryFilter::All, "verification");
    assert!(lower.is_empty());
}

#[test]
fn unknown_category_matches_nothing() {
    let hits = catalog::filter_services(Language::Ar, CategoryFilter::parse("قسم غير معروف"), "");
    assert!(hits.is_empty());
}

#[test]
fn suggestions_cap_at_five_and_blank_query_yields_none() {
    assert!(catalog::suggest_services(Language::Ar, "").is_empty());
    assert!(catalog::suggest_services(Language::Ar, "   ").is_empty());
    assert!(catalog::suggest_services(Language::En, "\t\n").is_empty());

    // "ال" appears in nearly every Arabic title/description.
    let broad = catalog::suggest_services(Language::Ar, "ال");
    assert!(broad.len() <= 5);
    assert!(!broad.is_empty());

    // Catalog order is preserved.
    let positions: Vec<usize> = broad
        .iter()
        .map(|s| SERVICES.iter().position(|c| c.id == s.id).expect("in catalog"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn wildcard_selection_survives_a_language_toggle() {
    // The same stored selection string is re-parsed after the toggle; both
    // language literals resolve to the wildcard.
    for literal in ["الكل", "All"] {
        assert_eq!(CategoryFilter::parse(literal), CategoryFilter::All);
    }
    assert_eq!(wildcard(Language::Ar), "الكل");
    assert_eq!(wildcard(Language::En), "All");

    // A concrete category keeps its meaning too: the Arabic label parses to
    // the same member as the English one.
    assert_eq!(
        CategoryFilter::parse("شحن الألعاب"),
        CategoryFilter::parse("Game Topup")
    );
}

#[test]
fn category_list_is_derived_distinct_and_wildcard_first() {
    for lang in [Language::Ar, Language::En] {
        let list = catalog::categories(lang);
        assert_eq!(list[0], wildcard(lang));
        // Distinct entries only.
        for (i, label) in list.iter().enumerate() {
            assert!(!list[i + 1..].contains(label));
        }
        // Every derived label belongs to a catalog service.
        for label in &list[1..] {
            assert!(SERVICES.iter().any(|s| s.category.label(lang) == *label));
        }
    }
}
