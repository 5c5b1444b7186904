//! Categories command: the front-end's built-in category list.

use anyhow::Result;

/// Default categories of the web front-end, by id.
pub const DEFAULT_CATEGORIES: [(u32, &str); 7] = [
    (1, "J-POP"),
    (2, "Anime"),
    (3, "Vocaloid™"),
    (4, "Variety"),
    (5, "Classical"),
    (6, "Game music"),
    (7, "Namco Original"),
];

pub fn run() -> Result<()> {
    println!("Every song of a batch is imported into a single category.");
    println!("The front-end ships with the following categories:");
    for (id, name) in DEFAULT_CATEGORIES {
        println!("{}. {}", id, name);
    }
    Ok(())
}
