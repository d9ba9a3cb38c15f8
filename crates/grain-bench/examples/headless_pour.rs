//! Headless pour example.
//!
//! Demonstrates: build a simulation → pour sand and water from two
//! spouts while the pointer sweeps → let it settle → print the grid as
//! ASCII with per-tick transfer counts.

use std::sync::Arc;

use grain_core::{MaterialId, Registry};
use grain_engine::{Pointer, PointerButton, SimConfig, Simulation, TickInput};

const CELL: u32 = 16;

fn render(sim: &Simulation) -> String {
    let mut out = String::new();
    for y in 0..sim.height() as i32 {
        for x in 0..sim.width() as i32 {
            let c = sim.cell_at(x, y).unwrap();
            out.push(match c.material {
                MaterialId::VACUUM => ' ',
                MaterialId::WATER if c.quantity < 0.5 => '~',
                MaterialId::WATER => 'W',
                MaterialId::SAND => 'S',
                MaterialId::STONE => '#',
                _ => '?',
            });
        }
        out.push('\n');
    }
    out
}

fn main() {
    println!("=== Grain Headless Pour ===\n");

    let config = SimConfig::for_grid(40, 20, CELL, 42);
    let mut sim = Simulation::new(config, Arc::new(Registry::standard())).unwrap();

    // A stone shelf with a gap for material to spill through.
    sim.set_selected_material(MaterialId::STONE).unwrap();
    sim.tick(&TickInput::stroke(
        Pointer::at_cell(5, 12, CELL),
        Pointer::at_cell(30, 12, CELL),
        PointerButton::Place,
    ))
    .unwrap();
    sim.tick(&TickInput::stroke(
        Pointer::at_cell(18, 12, CELL),
        Pointer::at_cell(18, 12, CELL),
        PointerButton::Erase,
    ))
    .unwrap();

    // Alternate sand and water spouts, sweeping the pointer each tick.
    for tick in 0..120 {
        let (material, x) = if tick % 2 == 0 {
            (MaterialId::SAND, 10 + (tick / 2) % 8)
        } else {
            (MaterialId::WATER, 24 + (tick / 2) % 8)
        };
        sim.set_selected_material(material).unwrap();
        let now = Pointer::at_cell(x, 0, CELL);
        let m = sim
            .tick(&TickInput::stroke(now, now, PointerButton::Place))
            .unwrap();

        if tick % 40 == 0 {
            println!(
                "tick {:>4}: {:>3} proposed, {:>3} applied, {:>3} contested ({} us)",
                sim.current_tick(),
                m.commit.proposed,
                m.commit.applied(),
                m.commit.contested_discarded,
                m.total_us
            );
        }
    }

    println!("\nSettling...");
    for _ in 0..400 {
        sim.tick(&TickInput::idle()).unwrap();
    }

    println!("\nFinal state at tick {}:", sim.current_tick());
    println!("+{}+", "-".repeat(sim.width() as usize));
    for line in render(&sim).lines() {
        println!("|{line}|");
    }
    println!("+{}+", "-".repeat(sim.width() as usize));

    let m = sim.last_metrics();
    println!(
        "\nLast tick: {} us total, {} us update, {} us commit",
        m.total_us, m.update_us, m.commit_us
    );
}
