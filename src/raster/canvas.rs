/// Monochrome coverage grid. Row-major, row 0 at the top of the image.
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<bool>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Marks a pixel filled. Writes outside the grid are dropped.
    pub fn set(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }

        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = true;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.buffer[y * self.width + x]
    }
}
