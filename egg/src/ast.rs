use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum Literal {
    Str(String),
    Num(f64),
}

#[derive(Clone, PartialEq, Debug)]
pub enum Node {
    Value(Literal),
    Word(String),
    Apply { operator: Box<Node>, args: Vec<Node> },
}

impl Node {
    pub fn string<S: Into<String>>(s: S) -> Node {
        Node::Value(Literal::Str(s.into()))
    }

    pub fn number(n: f64) -> Node {
        Node::Value(Literal::Num(n))
    }

    pub fn word<S: Into<String>>(name: S) -> Node {
        Node::Word(name.into())
    }

    pub fn apply(operator: Node, args: Vec<Node>) -> Node {
        Node::Apply { operator: Box::new(operator), args }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "\"{}\"", s),
            Literal::Num(n) => write!(f, "{}", n),
        }
    }
}

// Prints the minimal surface syntax that parses back to the same node
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Value(literal) => write!(f, "{}", literal),
            Node::Word(name) => write!(f, "{}", name),
            Node::Apply { operator, args } => {
                write!(f, "{}(", operator)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
