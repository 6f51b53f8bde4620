use std::cell::Cell;
use std::rc::Rc;

use gesturekit_core::GestureTarget;
use gesturekit_geometry::Size;

/// Target with a size that tests can change mid-interaction.
#[derive(Debug, Default)]
pub struct TestSurface {
    size: Cell<Size>,
}

impl TestSurface {
    pub fn new(width: f32, height: f32) -> Rc<Self> {
        Rc::new(Self {
            size: Cell::new(Size::new(width, height)),
        })
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.size.set(Size::new(width, height));
    }
}

impl GestureTarget for TestSurface {
    fn width(&self) -> f32 {
        self.size.get().width
    }

    fn height(&self) -> f32 {
        self.size.get().height
    }
}
