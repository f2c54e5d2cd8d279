use std::error::Error;
use std::fs;

use stepwise_astar::{IncrementalSearch, SearchStatus, StepwiseAstar, TagGrid};

// Replays a search one expansion at a time, printing the grid after every step.
// Without arguments the following grid is used, otherwise the grid is read from the
// file given as the first argument.
// S....
// .###.
// ....E
// o marks cells waiting in the frontier, x expanded cells and * the final route.
const DEFAULT_GRID: &str = "S....\n.###.\n....E";

fn main() -> Result<(), Box<dyn Error>> {
    let text = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => DEFAULT_GRID.to_string(),
    };
    let cells: TagGrid = text.parse()?;
    println!("Initial grid:\n{cells}");

    let mut search = StepwiseAstar::new();
    search.initialize(cells)?;
    let mut steps = 0;
    loop {
        let (snapshot, running) = search.step()?;
        steps += 1;
        println!("Step {steps}:\n{snapshot}");
        if !running {
            break;
        }
    }

    match search.status() {
        SearchStatus::Found => {
            println!(
                "Found a route of cost {} after {} expansions:",
                search.path_cost().unwrap_or_default(),
                search.expansions()
            );
            for p in search.path().unwrap_or_default() {
                println!("{:?}", p);
            }
        }
        status => println!("Search ended with {:?} after {} expansions", status, search.expansions()),
    }
    Ok(())
}
