use std::fmt;

use crate::types::Colour;

type Listener = Box<dyn FnMut(Colour)>;

/// Observer list for a `colorSelected` style output.
#[derive(Default)]
pub struct Emitter {
    listeners: Vec<Listener>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners are called in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(Colour) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notify every listener and hand the colour back to the caller.
    pub fn emit(&mut self, colour: Colour) -> Colour {
        for listener in &mut self.listeners {
            listener(colour);
        }
        colour
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_listeners_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = Emitter::new();

        let first = Rc::clone(&seen);
        emitter.subscribe(move |c| first.borrow_mut().push((1, c)));
        let second = Rc::clone(&seen);
        emitter.subscribe(move |c| second.borrow_mut().push((2, c)));

        assert_eq!(emitter.emit(Colour::RED), Colour::RED);
        assert_eq!(emitter.len(), 2);
        assert_eq!(*seen.borrow(), vec![(1, Colour::RED), (2, Colour::RED)]);
    }

    #[test]
    fn test_emit_without_listeners() {
        let mut emitter = Emitter::new();
        assert!(emitter.is_empty());
        assert_eq!(emitter.emit(Colour::BLUE), Colour::BLUE);
    }
}
