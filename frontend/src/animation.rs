//! Animation state machines. Nothing in here touches the DOM; the hooks
//! feed browser events in and push the results out through [`StyleSink`].

pub mod banner;
pub mod carousel;
pub mod cursor;
pub mod gesture;
pub mod intro;
pub mod scroll_lock;
pub mod sections;
pub mod transition;
pub mod visibility;

/// Imperative style writes that skip the Yew render cycle. Implemented by
/// [`crate::dom::AnimationHandle`] for per-frame hot paths.
pub trait StyleSink {
    fn set_transform(&self, value: &str);
    fn set_position(&self, x: f64, y: f64);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::StyleSink;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct Recorder {
        transforms: RefCell<Vec<String>>,
        positions: RefCell<Vec<(f64, f64)>>,
    }

    impl Recorder {
        pub fn transforms(&self) -> Vec<String> {
            self.transforms.borrow().clone()
        }

        pub fn positions(&self) -> Vec<(f64, f64)> {
            self.positions.borrow().clone()
        }
    }

    impl StyleSink for Recorder {
        fn set_transform(&self, value: &str) {
            self.transforms.borrow_mut().push(value.to_string());
        }

        fn set_position(&self, x: f64, y: f64) {
            self.positions.borrow_mut().push((x, y));
        }
    }
}
