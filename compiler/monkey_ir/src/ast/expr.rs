//! Expression nodes.
//!
//! Every `Display` impl here produces the canonical rendering: infix and
//! prefix nodes are always parenthesized, so re-parsing a rendering yields
//! the same tree shape.

use std::fmt;
use std::rc::Rc;

use super::operators::{InfixOp, PrefixOp};
use super::stmt::{BlockStatement, Statement};
use crate::Span;

/// A name occurrence: variable reference, `let` target, or parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

/// Expression node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expression {
    Identifier(Identifier),
    Integer { value: i64, span: Span },
    /// String literal; `value` is the text between the quotes.
    String { value: String, span: Span },
    Boolean { value: bool, span: Span },
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    /// Shared so that function objects can hold the literal without
    /// copying its body.
    Function(Rc<FunctionLiteral>),
    Call(CallExpression),
    Array { elements: Vec<Expression>, span: Span },
    Index(IndexExpression),
    Hash(HashLiteral),
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier(ident) => ident.span,
            Expression::Integer { span, .. }
            | Expression::String { span, .. }
            | Expression::Boolean { span, .. }
            | Expression::Array { span, .. } => *span,
            Expression::Prefix(prefix) => prefix.span,
            Expression::Infix(infix) => infix.span,
            Expression::If(if_expr) => if_expr.span,
            Expression::Function(func) => func.span,
            Expression::Call(call) => call.span,
            Expression::Index(index) => index.span,
            Expression::Hash(hash) => hash.span,
        }
    }

    /// Whether the rendering already starts with `(` and ends with `)`
    /// around the whole expression.
    fn renders_parenthesized(&self) -> bool {
        matches!(
            self,
            Expression::Prefix(_) | Expression::Infix(_) | Expression::Index(_)
        )
    }
}

/// Dismantles the tree with an explicit worklist, so dropping a deeply
/// nested expression uses constant native stack.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expression {
    const DETACHED: Expression = Expression::Boolean {
        value: false,
        span: Span::DUMMY,
    };

    /// Move every direct subexpression into `out`, leaving leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Expression>) {
        match self {
            Expression::Identifier(_)
            | Expression::Integer { .. }
            | Expression::String { .. }
            | Expression::Boolean { .. } => {}
            Expression::Prefix(prefix) => out.push(detach(&mut prefix.operand)),
            Expression::Infix(infix) => {
                out.push(detach(&mut infix.left));
                out.push(detach(&mut infix.right));
            }
            Expression::If(if_expr) => {
                out.push(detach(&mut if_expr.condition));
                detach_block(&mut if_expr.consequence, out);
                if let Some(alternative) = &mut if_expr.alternative {
                    detach_block(alternative, out);
                }
            }
            // A shared literal is still owned by a function object.
            Expression::Function(func) => {
                if let Some(func) = Rc::get_mut(func) {
                    detach_block(&mut func.body, out);
                }
            }
            Expression::Call(call) => {
                out.push(detach(&mut call.function));
                out.append(&mut call.arguments);
            }
            Expression::Array { elements, .. } => out.append(elements),
            Expression::Index(index) => {
                out.push(detach(&mut index.left));
                out.push(detach(&mut index.index));
            }
            Expression::Hash(hash) => {
                for (key, value) in hash.pairs.drain(..) {
                    out.push(key);
                    out.push(value);
                }
            }
        }
    }
}

fn detach(expr: &mut Expression) -> Expression {
    std::mem::replace(expr, Expression::DETACHED)
}

fn detach_block(block: &mut BlockStatement, out: &mut Vec<Expression>) {
    for statement in block.statements.drain(..) {
        match statement {
            Statement::Let(let_stmt) => out.push(let_stmt.value),
            Statement::Return(return_stmt) => out.extend(return_stmt.value),
            Statement::Expression(expr) => out.push(expr),
        }
    }
}

/// `<op><operand>`, e.g. `-x` or `!ok`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PrefixExpression {
    pub op: PrefixOp,
    pub operand: Box<Expression>,
    pub span: Span,
}

/// `<left> <op> <right>`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct InfixExpression {
    pub op: InfixOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

/// `if (<condition>) { ... } else { ... }`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
    pub span: Span,
}

/// `fn(<params>) { ... }`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub span: Span,
}

/// `<function>(<arguments>)`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// `<left>[<index>]`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IndexExpression {
    pub left: Box<Expression>,
    pub index: Box<Expression>,
    pub span: Span,
}

/// `{<key>: <value>, ...}` with pairs kept in source order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
    pub span: Span,
}

/// Write `items` separated by `", "`.
pub(crate) fn write_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{ident}"),
            Expression::Integer { value, .. } => write!(f, "{value}"),
            Expression::String { value, .. } => write!(f, "\"{value}\""),
            Expression::Boolean { value, .. } => write!(f, "{value}"),
            Expression::Prefix(prefix) => write!(f, "{prefix}"),
            Expression::Infix(infix) => write!(f, "{infix}"),
            Expression::If(if_expr) => write!(f, "{if_expr}"),
            Expression::Function(func) => write!(f, "{func}"),
            Expression::Call(call) => write!(f, "{call}"),
            Expression::Array { elements, .. } => {
                f.write_str("[")?;
                write_comma_separated(f, elements)?;
                f.write_str("]")
            }
            Expression::Index(index) => write!(f, "{index}"),
            Expression::Hash(hash) => write!(f, "{hash}"),
        }
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.op, self.operand)
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.op, self.right)
    }
}

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The grammar requires `if (...)`; avoid doubling parens the
        // condition already carries.
        if self.condition.renders_parenthesized() {
            write!(f, "if {} {}", self.condition, self.consequence)?;
        } else {
            write!(f, "if ({}) {}", self.condition, self.consequence)?;
        }
        if let Some(alternative) = &self.alternative {
            write!(f, "else {alternative}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_comma_separated(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_comma_separated(f, &self.arguments)?;
        f.write_str(")")
    }
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}

impl fmt::Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}
