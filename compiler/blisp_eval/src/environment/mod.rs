//! Environment chain for name resolution.
//!
//! An `Environment` is a handle to one `Scope`; scopes link to their parent,
//! and lookups walk the chain innermost-first. Scopes are reference counted,
//! so a scope lives as long as the longest-lived environment that reaches it.
//!
//! Every saturated closure call adds a scope whose parent is the caller, so a
//! recursive function at depth N sits on a chain N scopes long. Walking the
//! chain (lookup, root search, teardown) is therefore a loop, never native
//! recursion.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use blisp_value::{Bindings, EvalError, Value};

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// This type wraps `Rc<RefCell<T>>` and enforces that all scope allocations
/// go through the `LocalScope::new()` factory method.
///
/// # Thread Safety
/// `LocalScope<T>` is NOT thread-safe. It uses `Rc` internally; the
/// interpreter runs single-threaded.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    /// Create a new `LocalScope` wrapping the given value.
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Borrow the inner value immutably.
    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the inner value mutably.
    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// The inner value, if this is the last handle to it.
    fn into_inner(self) -> Option<T> {
        Rc::try_unwrap(self.0).ok().map(RefCell::into_inner)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// A single scope containing variable bindings.
#[derive(Debug)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    /// Parent scope (the enclosing environment).
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a scope seeded with `bindings` under `parent`.
    pub fn with_bindings(bindings: Bindings, parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings,
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any previous value.
    #[inline]
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up `name` here, then along the parent chain. Returns a copy.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }

        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            next = scope.parent.clone();
        }
        None
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Scope {
    // Unlink the chain one scope at a time; the default drop would recurse
    // once per ancestor that has no other holder.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(parent) = next {
            next = parent.into_inner().and_then(|mut scope| scope.parent.take());
        }
    }
}

/// Handle to a scope and, through it, its whole parent chain.
///
/// Cloning an `Environment` shares the scope; it does not copy bindings.
#[derive(Clone, Debug)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create a root environment with no bindings.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// Create the scope for a closure call: the closure's bindings, whose
    /// parent is `parent`.
    #[must_use]
    pub fn with_bindings(bindings: Bindings, parent: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_bindings(bindings, parent.scope.clone())),
        }
    }

    /// Resolve `name` through the chain.
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        let found = self.scope.borrow().lookup(name);
        tracing::trace!(name, found = found.is_some(), "lookup");
        found.ok_or_else(|| EvalError::unbound(name))
    }

    /// Bind `name` in this environment's own scope.
    #[inline]
    pub fn bind(&self, name: impl Into<String>, value: Value) {
        self.scope.borrow_mut().bind(name, value);
    }

    /// Bind `name` in the root of the chain.
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        let name = name.into();
        tracing::debug!(name = %name, "define global");
        self.root().bind(name, value);
    }

    /// The outermost environment of the chain.
    #[must_use]
    pub fn root(&self) -> Environment {
        let mut scope = self.scope.clone();
        loop {
            let parent = scope.borrow().parent.clone();
            match parent {
                Some(parent) => scope = parent,
                None => return Environment { scope },
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
