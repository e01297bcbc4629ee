#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use instrumeter_core::category::resolve;
use instrumeter_core::names;
use instrumeter_core::{Attributes, Category, Instrumented};

struct Tagged(Option<Category>);

impl Instrumented for Tagged {
    fn category(&self) -> Option<Category> {
        self.0
    }
}

/// Claims both the intentless and endpoint roles.
struct TwoRoles;

impl Instrumented for TwoRoles {
    fn category(&self) -> Option<Category> {
        Some(Category::Endpoint)
    }
    fn belongs_to(&self, category: Category) -> bool {
        matches!(category, Category::IntentlessPolicy | Category::Endpoint)
    }
}

#[test]
fn every_category_resolves_to_itself() {
    for c in Category::PRIORITY {
        assert_eq!(resolve(&Tagged(Some(c))), Some(c));
    }
}

#[test]
fn untagged_component_resolves_to_nothing() {
    assert_eq!(resolve(&Tagged(None)), None);
}

#[test]
fn first_category_in_priority_order_wins() {
    assert_eq!(resolve(&TwoRoles), Some(Category::IntentlessPolicy));
}

#[test]
fn duration_instruments_are_distinct_and_known() {
    let mut seen = Vec::new();
    for c in Category::PRIORITY {
        let name = c.duration_instrument();
        assert!(names::known(name).is_some(), "{name} not in known set");
        assert!(!seen.contains(&name));
        seen.push(name);
    }
}

#[test]
fn endpoint_attributes_carry_url_only() {
    let kwargs = Attributes::new()
        .with("url", "https://api.example.com")
        .with("method", "POST");
    let attrs = Category::Endpoint.duration_attributes(&kwargs);
    assert_eq!(attrs.len(), 1);
    assert_eq!(
        attrs.get("url").and_then(|v| v.as_str()),
        Some("https://api.example.com")
    );

    assert!(Category::Endpoint
        .duration_attributes(&Attributes::new())
        .is_empty());
    assert!(Category::CommandGenerator
        .duration_attributes(&kwargs)
        .is_empty());
}
