use crate::ast::{Literal, Node};
use crate::parser::{parse, ParseError};
use proptest::prelude::*;

#[test]
fn test_atoms() {
    assert_eq!(parse(r#""hello world""#), Ok(Node::string("hello world")));
    assert_eq!(parse(r#""""#), Ok(Node::string("")));
    assert_eq!(parse("42"), Ok(Node::number(42.0)));
    assert_eq!(parse("  007 \n"), Ok(Node::number(7.0)));
    assert_eq!(parse("x"), Ok(Node::word("x")));
    assert_eq!(parse("+"), Ok(Node::word("+")));
    assert_eq!(parse("12ab"), Ok(Node::word("12ab")));
    assert_eq!(parse("true"), Ok(Node::word("true")));
}

#[test]
fn test_strings_have_no_escapes() {
    assert_eq!(parse(r#""a\b""#), Ok(Node::string(r"a\b")));
    assert!(parse(r#""a\"b""#).is_err());
}

#[test]
fn test_application() {
    let p = parse(r#"+(a, 10, "s")"#);
    let r = Node::apply(
        Node::word("+"),
        vec![Node::word("a"), Node::number(10.0), Node::string("s")],
    );
    assert_eq!(p, Ok(r));
    assert_eq!(parse("f()"), Ok(Node::apply(Node::word("f"), vec![])));
    assert_eq!(
        parse(" f ( 1 ,\n 2 ) "),
        Ok(Node::apply(Node::word("f"), vec![Node::number(1.0), Node::number(2.0)]))
    );
}

#[test]
fn test_chained_application() {
    let expected = Node::Apply {
        operator: Box::new(Node::Apply {
            operator: Box::new(Node::Value(Literal::Num(1.0))),
            args: vec![Node::Value(Literal::Num(2.0))],
        }),
        args: vec![Node::Value(Literal::Num(3.0))],
    };
    assert_eq!(parse("1(2)(3)"), Ok(expected));
    let curried = parse("f(a)(b)(c)").unwrap();
    assert_eq!(curried.to_string(), "f(a)(b)(c)");
}

#[test]
fn test_nested_program() {
    let program = r#"
        do(define(x, 10),
           if(>(x, 5),
              print("large"),
              print("small")))
    "#;
    let p = parse(program).unwrap();
    let r = Node::apply(Node::word("do"), vec![
        Node::apply(Node::word("define"), vec![Node::word("x"), Node::number(10.0)]),
        Node::apply(Node::word("if"), vec![
            Node::apply(Node::word(">"), vec![Node::word("x"), Node::number(5.0)]),
            Node::apply(Node::word("print"), vec![Node::string("large")]),
            Node::apply(Node::word("print"), vec![Node::string("small")]),
        ]),
    ]);
    assert_eq!(p, r);
}

#[test]
fn test_deep_nesting_on_small_stack() {
    let depth = 3000;
    let source = format!("{}1{}", "+(1, ".repeat(depth), ")".repeat(depth));
    let handle = std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(move || {
            let mut node = parse(&source)?;
            let mut levels = 0;
            while let Node::Apply { mut args, .. } = node {
                levels += 1;
                node = args.pop().unwrap_or(Node::word("missing"));
            }
            Ok::<_, ParseError>((levels, node))
        })
        .unwrap();
    assert_eq!(handle.join().unwrap(), Ok((depth, Node::number(1.0))));
}

#[test]
fn test_trailing_comma() {
    assert_eq!(parse("f(1,)"), Ok(Node::apply(Node::word("f"), vec![Node::number(1.0)])));
}

#[test]
fn test_errors() {
    assert_eq!(parse("a b"), Err(ParseError::TrailingText));
    assert_eq!(parse("f(1) )"), Err(ParseError::TrailingText));
    assert_eq!(parse("f(1 2)"), Err(ParseError::ExpectedSeparator));
    assert_eq!(parse("f(1"), Err(ParseError::ExpectedSeparator));
    assert_eq!(parse("f("), Err(ParseError::UnexpectedSyntax(String::new())));
    assert_eq!(parse(""), Err(ParseError::UnexpectedSyntax(String::new())));
    assert_eq!(parse("f(,)"), Err(ParseError::UnexpectedSyntax(",)".to_string())));
    assert_eq!(parse(r#"  "open"#), Err(ParseError::UnexpectedSyntax(r#""open"#.to_string())));
    assert_eq!(parse(")"), Err(ParseError::UnexpectedSyntax(")".to_string())));
}

#[test]
fn test_error_messages() {
    assert_eq!(parse("f(,)").unwrap_err().to_string(), "Unexpected syntax: ,)");
    assert_eq!(parse("a b").unwrap_err().to_string(), "Unexpected text after program");
    assert_eq!(parse("f(1 2)").unwrap_err().to_string(), "Expected ',' or ')'");
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_+*<>=!-][a-zA-Z0-9_+*<>=!.-]{0,8}").expect("valid regex")
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        prop::string::string_regex("[a-zA-Z0-9 _.,()]{0,12}")
            .expect("valid regex")
            .prop_map(Node::string),
        any::<u32>().prop_map(|n| Node::number(n as f64)),
        word_strategy().prop_map(Node::word),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (inner.clone(), prop::collection::vec(inner, 0..4))
            .prop_map(|(operator, args)| Node::apply(operator, args))
    })
}

proptest! {
    #[test]
    fn printed_nodes_parse_back(node in node_strategy()) {
        let printed = node.to_string();
        prop_assert_eq!(parse(&printed), Ok(node));
    }
}
