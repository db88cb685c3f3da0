use std::{
    env,
    fs::File,
    io::{BufReader, BufWriter},
    process,
};

use anyhow::Context;

use tinyfont::{farbfeld, FontFile, Rasterizer};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let [_, font_path, px, text] = args.as_slice() else {
        eprintln!("usage: txt2ff fontfile px string");
        process::exit(1);
    };

    let px: u16 = px.parse().context("px must be a positive integer")?;

    let reader = BufReader::new(
        File::open(font_path).with_context(|| format!("failed to open {}", font_path))?,
    );
    let font = FontFile::open(reader)?;

    let mut rasterizer = Rasterizer::new(font, px);
    let canvas = rasterizer.rasterize(text)?;

    let mut out = BufWriter::new(File::create("out.ff").context("failed to open out.ff")?);
    farbfeld::write(&mut out, &canvas)?;

    Ok(())
}
