//! Closed set of component categories eligible for duration instrumentation.
//!
//! Components opt in by implementing [`Instrumented`]; the dispatcher matches
//! on the declared tag and never inspects concrete types.

use crate::attributes::Attributes;
use crate::names;

/// Component category. Declaration order is resolution priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CommandGenerator,
    EnterpriseSearchPolicy,
    IntentlessPolicy,
    ContextualResponseRephraser,
    Endpoint,
}

impl Category {
    /// Resolution order used when a component belongs to more than one category.
    pub const PRIORITY: [Category; 5] = [
        Category::CommandGenerator,
        Category::EnterpriseSearchPolicy,
        Category::IntentlessPolicy,
        Category::ContextualResponseRephraser,
        Category::Endpoint,
    ];

    /// Duration instrument fed for this category.
    pub fn duration_instrument(self) -> &'static str {
        match self {
            Category::CommandGenerator => names::LLM_COMMAND_GENERATOR_LLM_RESPONSE_DURATION,
            Category::EnterpriseSearchPolicy => {
                names::ENTERPRISE_SEARCH_POLICY_LLM_RESPONSE_DURATION
            }
            Category::IntentlessPolicy => names::INTENTLESS_POLICY_LLM_RESPONSE_DURATION,
            Category::ContextualResponseRephraser => {
                names::CONTEXTUAL_RESPONSE_REPHRASER_LLM_RESPONSE_DURATION
            }
            Category::Endpoint => names::CLIENT_REQUEST_DURATION,
        }
    }

    /// Attributes recorded with a duration sample, extracted from call kwargs.
    ///
    /// Only endpoints carry attributes (`url`). A missing url yields an empty bag.
    pub fn duration_attributes(self, kwargs: &Attributes) -> Attributes {
        match self {
            Category::Endpoint => match kwargs.get(names::URL_ATTR) {
                Some(url) => Attributes::new().with(names::URL_ATTR, url.clone()),
                None => Attributes::new(),
            },
            _ => Attributes::new(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::CommandGenerator => "command_generator",
            Category::EnterpriseSearchPolicy => "enterprise_search_policy",
            Category::IntentlessPolicy => "intentless_policy",
            Category::ContextualResponseRephraser => "contextual_response_rephraser",
            Category::Endpoint => "endpoint",
        }
    }
}

/// Capability implemented by components whose calls can be timed.
pub trait Instrumented {
    /// Declared category, or `None` for components outside the closed set.
    fn category(&self) -> Option<Category>;

    /// Membership test used by the resolver. Override for multi-role components.
    fn belongs_to(&self, category: Category) -> bool {
        self.category() == Some(category)
    }
}

/// Resolve the first category, in [`Category::PRIORITY`] order, that `instance` belongs to.
pub fn resolve(instance: &(impl Instrumented + ?Sized)) -> Option<Category> {
    Category::PRIORITY
        .into_iter()
        .find(|c| instance.belongs_to(*c))
}
