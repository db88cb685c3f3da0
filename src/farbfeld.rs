//! farbfeld image serialization: magic, big-endian width and height, then
//! one RGBA16 big-endian record per pixel, row-major, top to bottom.

use std::io::{self, Write};

use crate::raster::Canvas;

const MAGIC: &[u8; 8] = b"farbfeld";

const BLACK: [u16; 4] = [0, 0, 0, u16::MAX];
const WHITE: [u16; 4] = [u16::MAX; 4];

pub fn write<W: Write>(writer: &mut W, canvas: &Canvas) -> io::Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_all(&(canvas.width() as u32).to_be_bytes())?;
    writer.write_all(&(canvas.height() as u32).to_be_bytes())?;

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let color = if canvas.get(x, y) { BLACK } else { WHITE };

            for channel in color {
                writer.write_all(&channel.to_be_bytes())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_and_pixel_records() {
        let mut canvas = Canvas::new(2, 1);
        canvas.set(1, 0);

        let mut bytes = Vec::new();
        write(&mut bytes, &canvas).unwrap();

        assert_eq!(&bytes[..8], b"farbfeld");
        assert_eq!(&bytes[8..12], &2u32.to_be_bytes());
        assert_eq!(&bytes[12..16], &1u32.to_be_bytes());

        // unfilled pixel is opaque white, filled is opaque black
        assert_eq!(&bytes[16..24], [0xff; 8]);
        assert_eq!(&bytes[24..32], [0, 0, 0, 0, 0, 0, 0xff, 0xff]);

        assert_eq!(bytes.len(), 16 + 2 * 8);
    }
}
