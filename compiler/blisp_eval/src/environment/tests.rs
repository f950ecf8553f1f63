use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_scope_bind_lookup() {
    let mut scope = Scope::new();
    scope.bind("x", Value::Integer(42));
    assert_eq!(scope.lookup("x"), Some(Value::Integer(42)));
    assert_eq!(scope.lookup("y"), None);
}

#[test]
fn test_scope_bind_replaces() {
    let mut scope = Scope::new();
    scope.bind("x", Value::Integer(1));
    scope.bind("x", Value::Integer(2));
    assert_eq!(scope.lookup("x"), Some(Value::Integer(2)));
}

#[test]
fn test_scope_shadowing() {
    let parent = LocalScope::new(Scope::new());
    parent.borrow_mut().bind("x", Value::Integer(1));

    let mut bindings = Bindings::default();
    bindings.insert("x".into(), Value::Integer(2));
    let child = Scope::with_bindings(bindings, parent.clone());

    assert_eq!(child.lookup("x"), Some(Value::Integer(2)));
    assert_eq!(parent.borrow().lookup("x"), Some(Value::Integer(1)));
}

#[test]
fn test_lookup_walks_parent_chain() {
    let global = Environment::new();
    global.bind("x", Value::Integer(7));
    let local = Environment::with_bindings(Bindings::default(), &global);
    let inner = Environment::with_bindings(Bindings::default(), &local);

    assert_eq!(inner.lookup("x"), Ok(Value::Integer(7)));
}

#[test]
fn test_lookup_unbound() {
    let env = Environment::new();
    assert_eq!(env.lookup("nope"), Err(EvalError::unbound("nope")));
}

#[test]
fn test_lookup_returns_a_copy() {
    let env = Environment::new();
    env.bind("xs", Value::qexpr(vec![Value::Integer(1)]));

    let mut copy = env.lookup("xs").unwrap();
    if let Value::QExpr(items) = &mut copy {
        items.push(Value::Integer(2));
    }

    assert_eq!(env.lookup("xs"), Ok(Value::qexpr(vec![Value::Integer(1)])));
}

#[test]
fn test_bind_stays_local() {
    let global = Environment::new();
    let local = Environment::with_bindings(Bindings::default(), &global);
    local.bind("x", Value::Integer(1));

    assert_eq!(local.lookup("x"), Ok(Value::Integer(1)));
    assert!(global.lookup("x").is_err());
}

#[test]
fn test_define_global_reaches_root() {
    let global = Environment::new();
    let local = Environment::with_bindings(Bindings::default(), &global);
    let inner = Environment::with_bindings(Bindings::default(), &local);
    inner.define_global("x", Value::Integer(3));

    assert_eq!(global.lookup("x"), Ok(Value::Integer(3)));
    assert!(local.lookup("x").is_ok());

    inner.root().bind("y", Value::Integer(4));
    assert_eq!(global.lookup("y"), Ok(Value::Integer(4)));
}

#[test]
fn test_clone_shares_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.bind("x", Value::Integer(5));
    assert_eq!(env.lookup("x"), Ok(Value::Integer(5)));
}

#[test]
fn test_scope_outlives_creator() {
    let child = {
        let parent = Environment::new();
        parent.bind("x", Value::Integer(9));
        Environment::with_bindings(Bindings::default(), &parent)
    };
    assert_eq!(child.lookup("x"), Ok(Value::Integer(9)));
}

#[test]
fn test_long_chain_lookup_and_teardown() {
    let global = Environment::new();
    global.bind("g", Value::Integer(1));

    let mut env = global.clone();
    for _ in 0..20_000 {
        env = Environment::with_bindings(Bindings::default(), &env);
    }

    assert_eq!(env.lookup("g"), Ok(Value::Integer(1)));
    assert_eq!(env.lookup("missing"), Err(EvalError::unbound("missing")));
    env.define_global("h", Value::Integer(2));
    assert_eq!(global.lookup("h"), Ok(Value::Integer(2)));

    // Dropping the innermost handle releases every intermediate scope.
    drop(env);
    assert_eq!(global.lookup("g"), Ok(Value::Integer(1)));
}
