//! Terminal output of rendered fragments.

use crate::models::{ConfigFragment, FragmentKind, Fragments, PrefixPair};
use crate::Result;
use itertools::Itertools;

/// Format fragments grouped by target file, each group under a comment header.
pub fn format_fragments(fragments: &Fragments) -> String {
    [FragmentKind::Interfaces, FragmentKind::RouterAdvertisement]
        .iter()
        .map(|kind| {
            let body = fragments
                .iter()
                .filter(|f| f.kind == *kind)
                .map(ConfigFragment::to_string)
                .join("\n");
            format!("# {}\n{body}", kind.target_file())
        })
        .join("\n")
}

/// Print fragments to stdout.
pub fn print_fragments(fragments: &Fragments) {
    print!("{}", format_fragments(fragments));
}

/// Print the selected pair as JSON to stdout.
pub fn print_pair_json(pair: &PrefixPair) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(pair)?);
    Ok(())
}
