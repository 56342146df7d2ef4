use std::io::Write;

use crossterm::{queue, style};

/// Print a key hint, bolding any text inside `[...]` brackets.
/// Text outside brackets is printed dim.
pub fn print_menu_item(out: &mut impl Write, item: &str) -> anyhow::Result<()> {
    let mut rest = item;
    while !rest.is_empty() {
        let Some(open) = rest.find('[') else {
            print_dim(out, rest)?;
            break;
        };
        if open > 0 {
            print_dim(out, &rest[..open])?;
        }
        rest = &rest[open..];
        let Some(close) = rest.find(']') else {
            queue!(out, style::Print(rest))?;
            break;
        };
        queue!(
            out,
            style::SetAttribute(style::Attribute::Bold),
            style::Print(&rest[..=close]),
            style::SetAttribute(style::Attribute::Reset),
        )?;
        rest = &rest[close + 1..];
    }
    Ok(())
}

fn print_dim(out: &mut impl Write, text: &str) -> anyhow::Result<()> {
    queue!(
        out,
        style::SetAttribute(style::Attribute::Dim),
        style::Print(text),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn printed(item: &str) -> anyhow::Result<String> {
        let mut out = Vec::new();
        print_menu_item(&mut out, item)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn brackets_are_bold_and_rest_dim() -> anyhow::Result<()> {
        let out = printed("[Space] interact")?;
        let bold = out.find("\x1b[1m[Space]").expect("bold key");
        let dim = out.find("\x1b[2m interact").expect("dim label");
        assert!(bold < dim);
        Ok(())
    }

    #[test]
    fn unclosed_bracket_is_printed_as_is() -> anyhow::Result<()> {
        assert!(printed("[Esc quit")?.ends_with("[Esc quit"));
        Ok(())
    }
}
