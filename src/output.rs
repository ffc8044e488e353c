//! Output formatting for search results

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print words to stdout, one per line
pub fn print_words(words: &[String], color: ColorChoice, heading: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    write_words(&mut stdout, words, heading)
}

/// Write words, one per line.
///
/// With `heading`, each run of equal-length words is preceded by a
/// `N letters` line, matching the longest-first result order.
pub fn write_words<W: WriteColor>(out: &mut W, words: &[String], heading: bool) -> io::Result<()> {
    let mut last_len: Option<usize> = None;

    for word in words {
        if heading && last_len != Some(word.len()) {
            if last_len.is_some() {
                writeln!(out)?;
            }
            out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(out, "{} letters", word.len())?;
            out.reset()?;
            last_len = Some(word.len());
        }

        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", word)?;
        out.reset()?;
        writeln!(out)?;
    }

    out.flush()
}

/// Print words as they arrive, returning how many were printed
pub fn print_stream<I>(words: I, color: ColorChoice) -> io::Result<usize>
where
    I: IntoIterator<Item = String>,
{
    let mut stdout = StandardStream::stdout(color);
    write_stream(&mut stdout, words)
}

pub fn write_stream<W, I>(out: &mut W, words: I) -> io::Result<usize>
where
    W: WriteColor,
    I: IntoIterator<Item = String>,
{
    let mut count = 0;
    for word in words {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", word)?;
        out.reset()?;
        writeln!(out)?;
        // flush per word
        out.flush()?;
        count += 1;
    }
    Ok(count)
}
