use clap::Subcommand;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Load the planet list and print the gallery and vote options
    Gallery,
    /// Show the info panel text for a planet tile
    Hover { name: String },
    /// Toggle the vote controls twice and print their visibility
    Toggle,
    /// Vote for a planet through the dropdown
    Vote { name: String },
    /// Look up a single planet
    Describe { name: String },
    /// Leave a comment on a planet
    Comment { name: String, text: String },
    /// Register a voter account
    Register { username: String, password: String },
}
