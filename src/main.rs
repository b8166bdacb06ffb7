use clap::Parser;
use env_logger::Env;

use terrain_pathfinding::config::Config;
use terrain_pathfinding::grid::Grid;
use terrain_pathfinding::path::{path_cost, reconstruct};
use terrain_pathfinding::render::render;
use terrain_pathfinding::search::search;

fn main() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
    let config = Config::parse();

    let mut grid = match Grid::load(&config.board) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to load board {}: {}", config.board.display(), e);
            std::process::exit(1);
        }
    };

    log::info!(
        "loaded {}x{} board, start {} goal {}",
        grid.width,
        grid.height,
        grid.start,
        grid.goal
    );

    let result = search(&grid);
    match reconstruct(&result.came_from, grid.start, grid.goal) {
        Ok(mut path) => {
            path.reverse();
            let steps = path.len() - 1;
            let total_cost = path_cost(&grid, &path);
            grid.set_path(path);

            if !config.quiet {
                print!("{}", render(&grid));
                println!();
            }
            println!("Path found: {} steps, total cost {}", steps, total_cost);
        }
        Err(e) => {
            // A walled-off goal is a valid outcome, not a crash.
            println!("No path found: {}", e);
        }
    }
}
