#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Events;
use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

/// Asserts that `contract_id` emitted `topics` and `data` as the event at `index`.
/// A negative `index` counts back from the most recent event.
///
/// Every top-level invocation clears the recorded events, so assert events before making any
/// further call on the client, including read-only ones such as a token balance.
pub fn assert_emitted_event<U, V>(env: &Env, index: i32, contract_id: &Address, topics: U, data: V)
where
    U: IntoVal<Env, Vec<Val>>,
    V: IntoVal<Env, Val>,
{
    let events = env.events().all();
    let count = events.len() as i32;
    let position = if index < 0 { count + index } else { index };

    let Some((emitter, emitted_topics, emitted_data)) = u32::try_from(position)
        .ok()
        .and_then(|position| events.get(position))
    else {
        panic!("no event at index {index}, {count} events were emitted");
    };

    assert_eq!(emitter, *contract_id, "emitter of event {index}");
    assert_eq!(emitted_topics, topics.into_val(env), "topics of event {index}");

    // `Val` has no equality of its own, compare through a host vector
    let expected: Val = data.into_val(env);
    assert_eq!(
        Vec::<Val>::from_array(env, [emitted_data]),
        Vec::<Val>::from_array(env, [expected]),
        "data of event {index}"
    );
}

pub fn assert_last_emitted_event<U, V>(env: &Env, contract_id: &Address, topics: U, data: V)
where
    U: IntoVal<Env, Vec<Val>>,
    V: IntoVal<Env, Val>,
{
    assert_emitted_event(env, -1, contract_id, topics, data);
}
