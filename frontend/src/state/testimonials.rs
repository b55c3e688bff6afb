use std::rc::Rc;

use yew::Reducible;

pub enum TestimonialAction {
    /// Fired by the rotation timer.
    Tick,
    /// Fired by an indicator dot.
    Select(usize),
    /// The list of entries changed length.
    Reset(usize),
}

/// Carousel position. `current` stays in `[0, len)` whenever `len > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestimonialState {
    current: usize,
    len: usize,
}

impl TestimonialState {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    fn advanced(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            current: (self.current + 1) % self.len,
            ..self
        }
    }

    fn resized(self, len: usize) -> Self {
        if len == self.len {
            self
        } else {
            Self::new(len)
        }
    }

    fn selected(self, index: usize) -> Self {
        if index >= self.len {
            log::warn!("Ignoring testimonial selection {} of {}", index, self.len);
            return self;
        }
        Self {
            current: index,
            ..self
        }
    }
}

impl Reducible for TestimonialState {
    type Action = TestimonialAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            TestimonialAction::Tick => self.advanced(),
            TestimonialAction::Select(index) => self.selected(index),
            TestimonialAction::Reset(len) => self.resized(len),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
