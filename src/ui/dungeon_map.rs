//! Colored rendering of the glyph map carried in every status snapshot.

use crossterm::style::{StyledContent, Stylize};

/// Color for a single map glyph.
fn styled_glyph(glyph: char) -> StyledContent<char> {
    match glyph {
        '@' => glyph.bold().yellow(),
        '#' => glyph.dark_grey(),
        '?' => glyph.grey(),
        'B' => glyph.bold().red(),
        'E' => glyph.red(),
        'K' | '!' | '/' => glyph.cyan(),
        '$' => glyph.yellow(),
        '^' => glyph.magenta(),
        '*' | '&' => glyph.blue(),
        'X' => glyph.bold().green(),
        _ => glyph.white(),
    }
}

/// Prints the map with one space between cells.
pub fn print_map(rows: &[String]) {
    for row in rows {
        let mut line = String::from("  ");
        for glyph in row.chars() {
            line.push_str(&format!("{} ", styled_glyph(glyph)));
        }
        println!("{}", line.trim_end());
    }
}

pub fn print_legend() {
    println!(
        "  {} you  {} wall  {} unexplored  {} enemy  {} boss  {} loot  {} exit",
        styled_glyph('@'),
        styled_glyph('#'),
        styled_glyph('?'),
        styled_glyph('E'),
        styled_glyph('B'),
        styled_glyph('!'),
        styled_glyph('X'),
    );
}
