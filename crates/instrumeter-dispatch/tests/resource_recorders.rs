#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use common::{registry_with, CountingSampler};
use instrumeter_core::names;
use instrumeter_core::Attributes;
use instrumeter_dispatch::dispatch;

const ALL_AGGREGATE: [&str; 3] = [
    names::LLM_COMMAND_GENERATOR_CPU_USAGE,
    names::LLM_COMMAND_GENERATOR_MEMORY_USAGE,
    names::LLM_COMMAND_GENERATOR_PROMPT_TOKEN_USAGE,
];

#[test]
fn cpu_and_memory_record_sampled_percentages_without_attributes() {
    let (registry, h) = registry_with(&ALL_AGGREGATE);
    let sampler = CountingSampler::new(42.5, 63.0);

    dispatch::record_cpu_usage(&registry, sampler.as_ref());
    dispatch::record_memory_usage(&registry, sampler.as_ref());

    let cpu = h[names::LLM_COMMAND_GENERATOR_CPU_USAGE].samples();
    let mem = h[names::LLM_COMMAND_GENERATOR_MEMORY_USAGE].samples();
    assert_eq!(cpu, vec![(42.5, Attributes::new())]);
    assert_eq!(mem, vec![(63.0, Attributes::new())]);
}

#[test]
fn unregistered_resource_instrument_skips_sampling() {
    let (registry, h) = registry_with(&[names::LLM_COMMAND_GENERATOR_MEMORY_USAGE]);
    let sampler = CountingSampler::new(10.0, 20.0);

    dispatch::record_cpu_usage(&registry, sampler.as_ref());
    assert_eq!(sampler.cpu_calls(), 0);

    dispatch::record_memory_usage(&registry, sampler.as_ref());
    assert_eq!(sampler.memory_calls(), 1);
    assert_eq!(h[names::LLM_COMMAND_GENERATOR_MEMORY_USAGE].samples().len(), 1);
}

#[test]
fn token_length_records_integer_without_passthrough() {
    let (registry, h) = registry_with(&ALL_AGGREGATE);
    let attrs = Attributes::new()
        .with(names::PROMPT_TOKEN_LENGTH_ATTR, 1234i64)
        .with("model", "gpt");

    dispatch::record_prompt_token_length(&registry, &attrs);

    assert_eq!(
        h[names::LLM_COMMAND_GENERATOR_PROMPT_TOKEN_USAGE].samples(),
        vec![(1234.0, Attributes::new())]
    );
}

#[test]
fn token_length_without_key_records_nothing() {
    let (registry, h) = registry_with(&ALL_AGGREGATE);
    dispatch::record_prompt_token_length(&registry, &Attributes::new().with("model", "gpt"));
    assert!(h[names::LLM_COMMAND_GENERATOR_PROMPT_TOKEN_USAGE]
        .samples()
        .is_empty());
}

#[test]
fn token_length_non_integer_is_not_applicable() {
    let (registry, h) = registry_with(&ALL_AGGREGATE);
    let attrs = Attributes::new().with(names::PROMPT_TOKEN_LENGTH_ATTR, "many");
    dispatch::record_prompt_token_length(&registry, &attrs);
    assert!(h[names::LLM_COMMAND_GENERATOR_PROMPT_TOKEN_USAGE]
        .samples()
        .is_empty());
}

#[test]
fn aggregate_with_only_cpu_registered_records_one_sample() {
    let (registry, h) = registry_with(&[names::LLM_COMMAND_GENERATOR_CPU_USAGE]);
    let sampler = CountingSampler::new(12.0, 34.0);

    dispatch::record_command_generator_metrics(&registry, sampler.as_ref(), &Attributes::new());

    assert_eq!(
        h[names::LLM_COMMAND_GENERATOR_CPU_USAGE].samples(),
        vec![(12.0, Attributes::new())]
    );
    assert_eq!(sampler.cpu_calls(), 1);
    assert_eq!(sampler.memory_calls(), 0);
}

#[test]
fn aggregate_records_all_three_when_registered() {
    let (registry, h) = registry_with(&ALL_AGGREGATE);
    let sampler = CountingSampler::new(1.0, 2.0);
    let attrs = Attributes::new().with(names::PROMPT_TOKEN_LENGTH_ATTR, 77i64);

    dispatch::record_command_generator_metrics(&registry, sampler.as_ref(), &attrs);

    for name in ALL_AGGREGATE {
        assert_eq!(h[name].samples().len(), 1, "{name}");
    }
    assert_eq!(h[names::LLM_COMMAND_GENERATOR_PROMPT_TOKEN_USAGE].samples()[0].0, 77.0);
}

#[test]
fn empty_registry_never_samples_the_host() {
    let (registry, _) = registry_with(&[]);
    assert!(!registry.has_any());
    let sampler = CountingSampler::new(1.0, 2.0);
    let attrs = Attributes::new().with(names::PROMPT_TOKEN_LENGTH_ATTR, 5i64);

    dispatch::record_command_generator_metrics(&registry, sampler.as_ref(), &attrs);
    dispatch::record_cpu_usage(&registry, sampler.as_ref());
    dispatch::record_memory_usage(&registry, sampler.as_ref());

    assert_eq!(sampler.cpu_calls(), 0);
    assert_eq!(sampler.memory_calls(), 0);
}
