use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use tracing::Level;
use unicode_charlist_prepare::generate;
use unicode_charlist_prepare::output::TableFormat;

/// UnicodeData.txt из stdin, таблица в stdout, ход работы в stderr
fn main() -> anyhow::Result<()>
{
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_target(false)
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    let mut data = String::new();
    io::stdin()
        .read_to_string(&mut data)
        .context("reading UnicodeData.txt from standard input")?;

    let mut output = BufWriter::new(io::stdout().lock());

    generate(&data, &TableFormat::default(), &mut output)?;
    output.flush().context("flushing standard output")?;

    Ok(())
}
