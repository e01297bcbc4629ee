//! Stable instrument names and well-known attribute keys.
//!
//! These strings are the contract with registry setup code and every
//! downstream dashboard. Do not rename without a migration.

pub const LLM_COMMAND_GENERATOR_CPU_USAGE: &str = "llm_command_generator_cpu_usage";
pub const LLM_COMMAND_GENERATOR_MEMORY_USAGE: &str = "llm_command_generator_memory_usage";
pub const LLM_COMMAND_GENERATOR_PROMPT_TOKEN_USAGE: &str =
    "llm_command_generator_prompt_token_usage";

pub const LLM_COMMAND_GENERATOR_LLM_RESPONSE_DURATION: &str =
    "llm_command_generator_llm_response_duration";
pub const ENTERPRISE_SEARCH_POLICY_LLM_RESPONSE_DURATION: &str =
    "enterprise_search_policy_llm_response_duration";
pub const INTENTLESS_POLICY_LLM_RESPONSE_DURATION: &str =
    "intentless_policy_llm_response_duration";
pub const CONTEXTUAL_RESPONSE_REPHRASER_LLM_RESPONSE_DURATION: &str =
    "contextual_nlg_llm_response_duration";

pub const CLIENT_REQUEST_DURATION: &str = "rasa_client_request_duration";
pub const CLIENT_REQUEST_BODY_SIZE: &str = "rasa_client_request_body_size";

/// Attribute carrying the prompt token count of an LLM call.
pub const PROMPT_TOKEN_LENGTH_ATTR: &str = "len_prompt_tokens";
/// Attribute carrying an outbound request body size in bytes.
pub const REQUEST_BODY_SIZE_IN_BYTES_ATTR: &str = "request_body_size_in_bytes";
/// Attribute carrying the outbound request url.
pub const URL_ATTR: &str = "url";

/// Unit of measurement attached to an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Milliseconds,
    Bytes,
    Tokens,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Milliseconds => "ms",
            Unit::Bytes => "By",
            Unit::Tokens => "1",
        }
    }
}

/// Static description of a known instrument.
#[derive(Debug, Clone, Copy)]
pub struct InstrumentSpec {
    pub name: &'static str,
    pub unit: Unit,
    pub description: &'static str,
}

/// Every instrument the dispatcher knows how to feed.
pub static KNOWN_INSTRUMENTS: [InstrumentSpec; 9] = [
    InstrumentSpec {
        name: LLM_COMMAND_GENERATOR_CPU_USAGE,
        unit: Unit::Percent,
        description: "CPU percentage for LLMCommandGenerator",
    },
    InstrumentSpec {
        name: LLM_COMMAND_GENERATOR_MEMORY_USAGE,
        unit: Unit::Percent,
        description: "RAM memory usage for LLMCommandGenerator",
    },
    InstrumentSpec {
        name: LLM_COMMAND_GENERATOR_PROMPT_TOKEN_USAGE,
        unit: Unit::Tokens,
        description: "LLMCommandGenerator prompt token length",
    },
    InstrumentSpec {
        name: LLM_COMMAND_GENERATOR_LLM_RESPONSE_DURATION,
        unit: Unit::Milliseconds,
        description: "The duration of LLMCommandGenerator's LLM call",
    },
    InstrumentSpec {
        name: ENTERPRISE_SEARCH_POLICY_LLM_RESPONSE_DURATION,
        unit: Unit::Milliseconds,
        description: "The duration of EnterpriseSearchPolicy's LLM call",
    },
    InstrumentSpec {
        name: INTENTLESS_POLICY_LLM_RESPONSE_DURATION,
        unit: Unit::Milliseconds,
        description: "The duration of IntentlessPolicy's LLM call",
    },
    InstrumentSpec {
        name: CONTEXTUAL_RESPONSE_REPHRASER_LLM_RESPONSE_DURATION,
        unit: Unit::Milliseconds,
        description: "The duration of ContextualResponseRephraser's LLM call",
    },
    InstrumentSpec {
        name: CLIENT_REQUEST_DURATION,
        unit: Unit::Milliseconds,
        description: "The duration of the client's outbound HTTP request",
    },
    InstrumentSpec {
        name: CLIENT_REQUEST_BODY_SIZE,
        unit: Unit::Bytes,
        description: "The size of the client's outbound HTTP request body",
    },
];

/// Look up the static description of a known instrument.
pub fn known(name: &str) -> Option<&'static InstrumentSpec> {
    KNOWN_INSTRUMENTS.iter().find(|s| s.name == name)
}
