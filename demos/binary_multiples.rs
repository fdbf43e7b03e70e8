//! Recognize binary multiples of three with a three-state automaton.
//!
//! The machine tracks the running remainder of the bits read so far; the
//! context accumulates the full value purely for reporting.

use lockstep::{BlueprintBuilder, ContextMap, Machine};
use serde_json::json;

fn main() {
    let blueprint = BlueprintBuilder::new()
        .valid_states([0, 1, 2])
        .alphabet([0, 1])
        .initial_state(0)
        .accepted_states([0])
        .initial_context(ContextMap::from_iter([
            ("divisor".to_string(), json!(3)),
            ("value".to_string(), json!(0)),
        ]))
        .transition(|context: &mut ContextMap, event: &i64| {
            let divisor = context["divisor"].as_i64().unwrap();
            let value = (context["value"].as_i64().unwrap() << 1) | event;
            context.insert("value".to_string(), json!(value));
            value % divisor
        })
        .build()
        .expect("blueprint is well-formed");

    for input in ["110", "101", "1111", "0", "1001"] {
        let mut machine = Machine::new(blueprint.clone());

        for bit in input.chars() {
            let event = i64::from(bit == '1');
            machine
                .transition(event)
                .expect("events are drawn from the alphabet");
        }

        let value = machine.context()["value"].as_i64().unwrap();
        println!("{input} = {value}: {machine}");
    }
}
