use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// Name bindings for one level of nesting, chained to the enclosing level.
pub struct Scope {
    bindings: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Scope>>,
}

impl Default for Scope {
    fn default() -> Self {
        Scope::new()
    }
}

impl Scope {
    pub fn new() -> Scope {
        Scope { bindings: RefCell::new(HashMap::new()), outer: None }
    }

    pub fn nested(outer: Rc<Scope>) -> Scope {
        Scope { bindings: RefCell::new(HashMap::new()), outer: Some(outer) }
    }

    pub fn with_bindings<I>(bindings: I, outer: Option<Rc<Scope>>) -> Scope
        where I: IntoIterator<Item = (String, Value)>
    {
        Scope { bindings: RefCell::new(bindings.into_iter().collect()), outer }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Binds `name` in this scope, shadowing any outer binding.
    pub fn define<S: Into<String>>(&self, name: S, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Updates the innermost existing binding, false if `name` is unbound.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.bindings.borrow_mut().get_mut(name) {
            *slot = value;
            return true;
        }
        match self.outer {
            Some(ref outer) => outer.assign(name, value),
            None => false,
        }
    }
}
