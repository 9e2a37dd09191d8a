//! Two-state toggle counter driven by a `Behavior`.
//!
//! Run with `RUST_LOG=trace cargo run --example toggle_counter` to watch
//! the dispatch log.

use turnstile::{behavior, StateId};

struct Counter {
    flag: bool,
    count: u32,
}

fn toggle(ctx: &mut Counter) -> StateId {
    ctx.flag = !ctx.flag;
    if ctx.flag {
        StateId::of(&toggle)
    } else {
        StateId::of(&increment)
    }
}

fn increment(ctx: &mut Counter) -> StateId {
    ctx.count += 1;
    if ctx.flag {
        StateId::of(&toggle)
    } else {
        StateId::of(&increment)
    }
}

fn main() {
    env_logger::init();

    let mut behavior = behavior![toggle, increment].expect("two distinct states");
    let mut ctx = Counter {
        flag: false,
        count: 0,
    };

    for step in 1..=10 {
        behavior.invoke(&mut ctx);
        println!(
            "step {:2}: flag={:5} count={} next={}",
            step,
            ctx.flag,
            ctx.count,
            behavior.state_name(behavior.state()).unwrap_or("<none>"),
        );
    }
}
