/// Position within one experience's ordered frame sequence.  Navigation is
/// circular and can never index outside `[0, len - 1]`.
#[derive(Debug)]
pub struct Navigator {
    len: usize,
    position: usize,
}

impl Navigator {
    /// `len` is at least 1; the catalog loader drops frameless records
    /// before they can reach a session.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            len: len.max(1),
            position: 0,
        }
    }

    pub fn skip_to_next(&mut self) {
        self.position = (self.position + 1) % self.len;
    }

    pub fn skip_to_previous(&mut self) {
        self.position = (self.position + self.len - 1) % self.len;
    }

    /// Out-of-range jumps are rejected as a no-op, never a panic.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.position = index;
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn frame_count(&self) -> usize {
        self.len
    }
}
