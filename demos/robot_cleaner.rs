//! Simulated cleaning robot sweeping a one-dimensional grid.
//!
//! The automaton has three states: `scan` looks at the current cell and
//! decides, `clean` scrubs it, and `done` signals termination by handing
//! back the sentinel. The trace of the whole run is printed as JSON at
//! the end.
//!
//! Run with `RUST_LOG=trace cargo run --example robot_cleaner`.

use turnstile::{Behavior, StateId};

struct Grid {
    cells: Vec<bool>,
    pos: usize,
}

fn scan(grid: &mut Grid) -> StateId {
    if grid.cells[grid.pos] {
        StateId::of(&clean)
    } else if grid.cells.iter().all(|dirty| !dirty) {
        StateId::of(&done)
    } else {
        grid.pos = (grid.pos + 1) % grid.cells.len();
        StateId::of(&scan)
    }
}

fn clean(grid: &mut Grid) -> StateId {
    log::info!("cleaning cell {}", grid.pos);
    grid.cells[grid.pos] = false;
    grid.pos = (grid.pos + 1) % grid.cells.len();
    StateId::of(&scan)
}

fn done(_grid: &mut Grid) -> StateId {
    StateId::sentinel()
}

fn main() {
    env_logger::init();

    let mut grid = Grid {
        cells: vec![true, false, true, true, false, true],
        pos: 2,
    };
    let mut robot = Behavior::builder()
        .state(scan)
        .state(clean)
        .state(done)
        .traced()
        .build()
        .expect("three distinct states");

    let done_id = StateId::of(&done);
    while robot.state() != done_id {
        robot.invoke(&mut grid);
    }

    println!("grid clean after {} steps", robot.trace().map_or(0, |t| t.len()));
    if let Some(trace) = robot.trace() {
        match serde_json::to_string_pretty(trace) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("trace serialization failed: {err}"),
        }
    }
}
