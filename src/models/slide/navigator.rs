use super::Slide;

/// Position within one deck.
///
/// Every transition is total: moving past either end or jumping to an index
/// outside the deck leaves the position unchanged. An empty deck has no
/// current slide and ignores all transitions.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    slides: &'a [Slide],
    current_index: usize,
}

impl<'a> Navigator<'a> {
    pub fn new(slides: &'a [Slide]) -> Self {
        Self {
            slides,
            current_index: 0,
        }
    }

    /// Advance one slide. Returns `false` when already on the last slide.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.slides.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Step back one slide. Returns `false` when already on the first slide.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a zero-based index. Out-of-range requests are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    pub fn current_slide(&self) -> Option<&'a Slide> {
        self.slides.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_count(&self) -> usize {
        self.slides.len()
    }

    /// Full deck, for the jump-to menu.
    pub fn slides(&self) -> &'a [Slide] {
        self.slides
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.slides.len()
    }
}
