use pretty_assertions::assert_eq;

use super::{assert_evaluates, eval_value};
use crate::Object;

fn ints(values: &[i64]) -> Object {
    Object::array(values.iter().copied().map(Object::Integer).collect())
}

#[test]
fn test_array_literal() {
    assert_eq!(eval_value("[1, 2 * 2, 3 + 3]"), ints(&[1, 4, 6]));
    assert_eq!(eval_value("[]"), ints(&[]));
    assert_eq!(eval_value("[1, \"a\", true]").to_string(), "[1, a, true]");
}

#[test]
fn test_array_index() {
    assert_evaluates(&[
        ("[1, 2, 3][0]", Object::Integer(1)),
        ("[1, 2, 3][1]", Object::Integer(2)),
        ("[1, 2, 3][2]", Object::Integer(3)),
        ("let i = 0; [1][i];", Object::Integer(1)),
        ("[1, 2, 3][1 + 1];", Object::Integer(3)),
        ("let myArray = [1, 2, 3]; myArray[2];", Object::Integer(3)),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            Object::Integer(6),
        ),
        (
            "let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]",
            Object::Integer(2),
        ),
        ("[1, 2, 3][3]", Object::NULL),
        ("[1, 2, 3][-1]", Object::NULL),
        ("[][0]", Object::NULL),
    ]);
}

#[test]
fn test_hash_literal() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    let Object::Hash(hash) = eval_value(source) else {
        panic!("expected a hash");
    };
    let expected = [
        (Object::string("one"), 1),
        (Object::string("two"), 2),
        (Object::string("three"), 3),
        (Object::Integer(4), 4),
        (Object::TRUE, 5),
        (Object::FALSE, 6),
    ];
    assert_eq!(hash.len(), expected.len());
    for (key, value) in expected {
        let pair = hash.get(&key.hash_key().unwrap()).unwrap();
        assert_eq!(pair.key, key);
        assert_eq!(pair.value, Object::Integer(value));
    }
}

#[test]
fn test_hash_index() {
    assert_evaluates(&[
        ("{\"foo\": 5}[\"foo\"]", Object::Integer(5)),
        ("{\"foo\": 5}[\"bar\"]", Object::NULL),
        ("let key = \"foo\"; {\"foo\": 5}[key]", Object::Integer(5)),
        ("{}[\"foo\"]", Object::NULL),
        ("{5: 5}[5]", Object::Integer(5)),
        ("{true: 5}[true]", Object::Integer(5)),
        ("{false: 5}[false]", Object::Integer(5)),
        ("{1: \"int\", true: \"bool\"}[true]", Object::string("bool")),
    ]);
}

#[test]
fn test_duplicate_hash_keys_last_write_wins() {
    let value = eval_value("{\"a\": 1, \"b\": 2, \"a\": 3}");
    assert_eq!(value.to_string(), "{a: 3, b: 2}");
}

#[test]
fn test_hash_inspect() {
    assert_eq!(
        eval_value("{\"name\": \"Monkey\", 1: [1, 2]}").to_string(),
        "{name: Monkey, 1: [1, 2]}"
    );
}
