//! Lexical environments.
//!
//! An environment is a scope of bindings plus an optional enclosing scope.
//! Handles are reference counted: closures keep their defining scope alive
//! after the call that created it returns.
//!
//! A closure bound by `let` into the very scope it captured is stored as
//! its bare literal and rebuilt on lookup, so recursive definitions do not
//! form `Rc` cycles with their scope.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use monkey_ir::FunctionLiteral;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{FunctionObject, Object};

thread_local! {
    static NEXT_SCOPE_ID: Cell<u64> = const { Cell::new(0) };
}

/// A bound value.
enum Binding {
    Value(Object),
    /// A closure over the scope holding this binding.
    OwnClosure(Rc<FunctionLiteral>),
}

/// A single scope of bindings.
struct Scope {
    /// Creation order; a scope can only reach scopes older than itself
    /// through its `outer` chain.
    id: u64,
    bindings: FxHashMap<String, Binding>,
    outer: Option<Environment>,
}

/// Shared handle to a scope chain. Cloning shares the scope.
#[derive(Clone)]
pub struct Environment(Rc<RefCell<Scope>>);

/// Non-owning handle to a scope.
#[derive(Clone)]
pub struct WeakEnvironment(Weak<RefCell<Scope>>);

impl Environment {
    /// Create a root environment.
    pub fn new() -> Self {
        Self::with_outer(None)
    }

    /// Create an empty scope chained to `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        Self::with_outer(Some(outer.clone()))
    }

    fn with_outer(outer: Option<Environment>) -> Self {
        let id = NEXT_SCOPE_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        Environment(Rc::new(RefCell::new(Scope {
            id,
            bindings: FxHashMap::default(),
            outer,
        })))
    }

    /// Look up `name`, searching this scope then each enclosing scope.
    pub fn get(&self, name: &str) -> Option<Object> {
        let mut current = self.clone();
        loop {
            let outer = {
                let scope = current.0.borrow();
                match scope.bindings.get(name) {
                    Some(Binding::Value(value)) => return Some(value.clone()),
                    Some(Binding::OwnClosure(literal)) => {
                        let func = FunctionObject::new(Rc::clone(literal), current.clone());
                        return Some(Object::Function(Rc::new(func)));
                    }
                    None => scope.outer.clone(),
                }
            };
            current = outer?;
        }
    }

    /// Bind `name` in this scope only, shadowing any outer binding.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        let binding = match value {
            Object::Function(func) if func.env().ptr_eq(self) => {
                Binding::OwnClosure(Rc::clone(func.literal()))
            }
            value => Binding::Value(value),
        };
        self.0.borrow_mut().bindings.insert(name.into(), binding);
    }

    /// Whether `name` is bound in this scope, ignoring enclosing scopes.
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn downgrade(&self) -> WeakEnvironment {
        WeakEnvironment(Rc::downgrade(&self.0))
    }

    /// Whether this is the only handle to the scope.
    pub(crate) fn is_unshared(&self) -> bool {
        Rc::strong_count(&self.0) == 1
    }

    /// Drop every binding in this scope.
    pub(crate) fn clear(&self) {
        let bindings = std::mem::take(&mut self.0.borrow_mut().bindings);
        drop(bindings);
    }

    /// Whether `value` holds a handle to this scope, directly or through
    /// nested arrays, hashes, closures and their scopes.
    pub(crate) fn is_reachable_from(&self, value: &Object) -> bool {
        let own_id = self.0.borrow().id;
        let mut values = vec![value.clone()];
        let mut scopes: Vec<Environment> = Vec::new();
        let mut visited: FxHashSet<*const RefCell<Scope>> = FxHashSet::default();

        loop {
            if let Some(value) = values.pop() {
                match value {
                    Object::Array(elements) => values.extend(elements.iter().cloned()),
                    Object::Hash(hash) => values.extend(hash.iter().map(|pair| pair.value.clone())),
                    Object::Function(func) => scopes.push(func.env().clone()),
                    Object::ReturnValue(inner) => values.push(Rc::unwrap_or_clone(inner)),
                    _ => {}
                }
                continue;
            }

            let Some(env) = scopes.pop() else {
                return false;
            };
            if env.ptr_eq(self) {
                return true;
            }
            if !visited.insert(Rc::as_ptr(&env.0)) {
                continue;
            }
            let scope = env.0.borrow();
            // Older scopes were complete before this one existed.
            if scope.id < own_id {
                continue;
            }
            values.extend(scope.bindings.values().filter_map(|binding| match binding {
                Binding::Value(value) => Some(value.clone()),
                Binding::OwnClosure(_) => None,
            }));
            scopes.extend(scope.outer.clone());
        }
    }
}

impl WeakEnvironment {
    pub fn upgrade(&self) -> Option<Environment> {
        self.0.upgrade().map(Environment)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Only local names: bindings may hold closures that capture this scope.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("enclosed", &scope.outer.is_some())
            .finish()
    }
}
