// Carousel state - one-at-a-time certification display with wrapping
pub struct CarouselState {
    pub index: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 { len - 1 } else { self.index - 1 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_at_end() {
        let mut c = CarouselState::new();
        c.next(3);
        c.next(3);
        assert_eq!(c.index, 2);
        c.next(3);
        assert_eq!(c.index, 0);
    }

    #[test]
    fn test_prev_wraps_at_start() {
        let mut c = CarouselState::new();
        c.prev(3);
        assert_eq!(c.index, 2);
        c.prev(3);
        assert_eq!(c.index, 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = CarouselState::new();
        c.next(0);
        c.prev(0);
        assert_eq!(c.index, 0);
    }
}
