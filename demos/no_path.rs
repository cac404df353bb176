use ascii_pathfinding::{solve, Error, Outcome};

// The goal is walled in, so the search reports that no path exists. A map without a goal marker
// is rejected before any search takes place.
fn main() {
    let enclosed = "
#######
#S....#
#..####
#..#G.#
#..####
#######
";
    match solve(enclosed) {
        Ok(Outcome::NoPath) => println!("No path to the goal exists."),
        Ok(Outcome::Found { rendered, .. }) => println!("{}", rendered),
        Err(err) => println!("Invalid map: {}", err),
    }

    match solve("S...\n.##.\n....") {
        Err(Error::MarkerNotFound { marker }) => println!("Map has no {:?} marker.", marker),
        other => println!("{:?}", other),
    }
}
