//! Markdown rendering of a parse result.

use anyhow::Result;
use chatlift_parser::ParseResult;
use std::io::Write;

/// Render the transcript as a printable markdown document.
pub(crate) fn write_markdown(out: &mut impl Write, result: &ParseResult) -> Result<()> {
    writeln!(out, "# {}", result.title)?;
    if let Some(platform) = &result.platform {
        writeln!(out, "\n*Imported from {platform}*")?;
    }

    for message in &result.messages {
        writeln!(out, "\n---\n")?;
        writeln!(out, "**{}:**", message.role.label())?;
        writeln!(out, "\n{}", message.content)?;
    }

    Ok(())
}
