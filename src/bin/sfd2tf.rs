use std::io::{self, BufWriter, Read};

use anyhow::Context;

use tinyfont::{sfd, FontWriter};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read outline description from stdin")?;

    let font = sfd::parse(&input)?;
    let em = font.em()?;

    log::debug!("compiling {} glyphs", font.glyphs.len());

    let stdout = io::stdout();
    let mut writer = FontWriter::new(BufWriter::new(stdout.lock()));
    writer.write_font(&font.copyright, em, &font.glyphs)?;

    Ok(())
}
