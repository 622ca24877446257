use crate::commands::{CommandResult, Context};
use rolodex_core::SearchQuery;

const NO_MATCHES: &str = "No matches found";

/// `show all`: one summary per line. Extra text after the keyword is ignored.
pub fn show_all(ctx: &mut Context<'_>, _args: &str) -> CommandResult {
    let lines: Vec<String> = ctx.book.summaries(ctx.today).collect();
    Ok(lines.join("\n"))
}

pub fn search(ctx: &mut Context<'_>, query: &str) -> CommandResult {
    let query = SearchQuery::parse(query)?;
    let hits: Vec<String> = ctx.book.search(&query, ctx.today).collect();
    if hits.is_empty() {
        return Ok(NO_MATCHES.to_string());
    }
    Ok(hits.join("\n"))
}
