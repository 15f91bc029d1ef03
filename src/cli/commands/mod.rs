//! One module per subcommand, matching the `Commands` enum.

pub mod add;
pub mod completions;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod get;
pub mod list;
