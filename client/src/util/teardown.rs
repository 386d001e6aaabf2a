//! Deferred cleanup steps for a component's browser resources.
//!
//! Window listeners outlive the component that registered them unless their
//! handles are removed explicitly. Components push a step per resource and
//! hand the whole set to `on_cleanup`.

#[cfg(test)]
#[path = "teardown_test.rs"]
mod teardown_test;

type Step = Box<dyn FnOnce() + Send + Sync>;

#[derive(Default)]
pub struct Teardown {
    steps: Vec<Step>,
}

impl Teardown {
    pub fn add(&mut self, step: impl FnOnce() + Send + Sync + 'static) {
        self.steps.push(Box::new(step));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step once, in registration order.
    pub fn run(self) {
        for step in self.steps {
            step();
        }
    }
}
