//! Terminal output helpers

use babel_core::{page, Library, Location};

/// Print a page with its address and navigation hints
pub fn print_page(location: &Location, content: &str) {
    println!("Location: {location}");
    println!();
    println!("{}", page::layout(content));
    println!();
    println!("Next:     {}", location.next());
    println!("Previous: {}", location.previous());
}

/// Print a numbered run of search results
pub fn print_locations(locations: &[Location], offset: i64) {
    for (i, location) in locations.iter().enumerate() {
        println!("{:>4}. {location}", offset + i as i64 + 1);
    }
}

/// Print the search summary line
pub fn print_search_summary(library: &Library, text: &str, shown: usize) {
    let total = library.occurrence_count(text);
    println!();
    println!("{shown} of {total} claimed occurrences");
}
