//! CLI domain: parse, route, output, and presentation only.
//! No resolution logic; the route table dispatches to the library.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_apps, format_apps_json, format_apps_text, AppsFormat};
pub use route::RunContext;
