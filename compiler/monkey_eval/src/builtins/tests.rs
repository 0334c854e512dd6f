use super::*;
use crate::{buffer_handler, silent_handler};
use pretty_assertions::assert_eq;

fn call(builtin: Builtin, args: &[Object]) -> Object {
    builtin.call(args, &silent_handler())
}

fn ints(values: &[i64]) -> Object {
    Object::array(values.iter().copied().map(Object::Integer).collect())
}

#[test]
fn test_lookup() {
    assert_eq!(Builtin::lookup("len"), Some(Builtin::Len));
    assert_eq!(Builtin::lookup("push"), Some(Builtin::Push));
    assert_eq!(Builtin::lookup("print"), None);
    for builtin in Builtin::ALL {
        assert_eq!(Builtin::lookup(builtin.name()), Some(builtin));
    }
}

#[test]
fn test_len() {
    assert_eq!(call(Builtin::Len, &[Object::string("")]), Object::Integer(0));
    assert_eq!(call(Builtin::Len, &[Object::string("four")]), Object::Integer(4));
    assert_eq!(call(Builtin::Len, &[ints(&[1, 2, 3])]), Object::Integer(3));
    assert_eq!(
        call(Builtin::Len, &[Object::Integer(1)]),
        Object::error("argument to `len` not supported, got INTEGER")
    );
    assert_eq!(
        call(Builtin::Len, &[Object::string("one"), Object::string("two")]),
        Object::error("wrong number of arguments. got=2, want=1")
    );
}

#[test]
fn test_first_last_rest() {
    assert_eq!(call(Builtin::First, &[ints(&[1, 2, 3])]), Object::Integer(1));
    assert_eq!(call(Builtin::Last, &[ints(&[1, 2, 3])]), Object::Integer(3));
    assert_eq!(call(Builtin::Rest, &[ints(&[1, 2, 3])]), ints(&[2, 3]));
    assert_eq!(call(Builtin::Rest, &[ints(&[1])]), ints(&[]));

    for builtin in [Builtin::First, Builtin::Last, Builtin::Rest] {
        assert_eq!(call(builtin, &[ints(&[])]), Object::NULL);
    }
}

#[test]
fn test_array_argument_errors() {
    assert_eq!(
        call(Builtin::First, &[Object::Integer(1)]),
        Object::error("argument to `first` must be ARRAY, got INTEGER")
    );
    assert_eq!(
        call(Builtin::Last, &[Object::string("x")]),
        Object::error("argument to `last` must be ARRAY, got STRING")
    );
    assert_eq!(
        call(Builtin::Rest, &[]),
        Object::error("wrong number of arguments. got=0, want=1")
    );
    assert_eq!(
        call(Builtin::Push, &[Object::Integer(1), Object::Integer(1)]),
        Object::error("argument to `push` must be ARRAY, got INTEGER")
    );
    assert_eq!(
        call(Builtin::Push, &[ints(&[])]),
        Object::error("wrong number of arguments. got=1, want=2")
    );
}

#[test]
fn test_push_does_not_mutate() {
    let original = ints(&[]);
    let pushed = call(Builtin::Push, &[original.clone(), Object::Integer(1)]);
    assert_eq!(pushed, ints(&[1]));
    assert_eq!(original, ints(&[]));
}

#[test]
fn test_puts_writes_inspect_lines() {
    let printer = buffer_handler();
    let result = Builtin::Puts.call(
        &[Object::string("hello"), Object::Integer(5), ints(&[1, 2])],
        &printer,
    );
    assert_eq!(result, Object::NULL);
    assert_eq!(printer.get_output(), "hello\n5\n[1, 2]\n");
}
