use ascii_pathfinding::{Outcome, Pathfinder};

// In this example a path is found on the map
// ##########
// #S...#...#
// #.##.#.#.#
// #........#
// #.####.#G#
// ##########
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Nodes have a 4-neighborhood

const MAP: &str = "
##########
#S...#...#
#.##.#.#.#
#........#
#.####.#G#
##########
";

fn main() -> ascii_pathfinding::Result<()> {
    let pathfinder = Pathfinder::parse(MAP)?;
    println!("{}\n", pathfinder.grid);
    match pathfinder.solve()? {
        Outcome::Found { path, rendered } => {
            println!("A path of {} steps has been found:", path.len() - 1);
            println!("{}", rendered);
            for p in path {
                println!("{}", p);
            }
        }
        Outcome::NoPath => println!("No path to the goal exists."),
    }
    Ok(())
}
