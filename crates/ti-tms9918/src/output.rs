//! Sequential writer over one row of pixels.

/// A caller-owned row with a write cursor.
///
/// Renderers emit pixels strictly left to right through [`RowOutput::push`].
/// [`RowOutput::origin`] exposes the whole row for the two after-the-fact
/// edits the hardware makes: sprites overlaid on already-drawn background,
/// and the Sega left-column blank.
pub struct RowOutput<'a> {
    pixels: &'a mut [u32],
    cursor: usize,
}

impl<'a> RowOutput<'a> {
    #[must_use]
    pub fn new(pixels: &'a mut [u32]) -> Self {
        Self { pixels, cursor: 0 }
    }

    /// Resume writing a row at `position`.
    #[must_use]
    pub fn resume(pixels: &'a mut [u32], position: usize) -> Self {
        debug_assert!(position <= pixels.len());
        Self {
            pixels,
            cursor: position,
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn push(&mut self, colour: u32) {
        self.pixels[self.cursor] = colour;
        self.cursor += 1;
    }

    pub fn fill(&mut self, colour: u32, count: usize) {
        let end = self.cursor + count;
        self.pixels[self.cursor..end].fill(colour);
        self.cursor = end;
    }

    /// The whole row, for retroactive edits. Leaves the cursor alone.
    pub fn origin(&mut self) -> &mut [u32] {
        &mut *self.pixels
    }

    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &*self.pixels
    }
}
