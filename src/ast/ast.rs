use std::{fmt, mem};

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::expressions::{BinaryExpr, NumberExpr};

/// Expression Types
///
/// Defines the kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    Binary,
}

/// An expression tree.
///
/// Leaves are integer literals; every other node is a `+`/`-` with exactly two
/// children. Trees are never mutated after construction.
///
/// A chain of `n` operators is `n` levels deep, so drop, clone, equality,
/// debug output and [`Expr::walk`] all use explicit work stacks instead of
/// recursion.
pub enum Expr {
    Number(NumberExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn number(token: Token) -> Self {
        Expr::Number(NumberExpr { token })
    }

    pub fn binary(operator: Token, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr::new(operator, left, right))
    }

    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Binary(_) => ExprType::Binary,
        }
    }

    /// The token this node was built from: the literal for a leaf, the
    /// operator for a binary node.
    pub fn token(&self) -> &Token {
        match self {
            Expr::Number(number) => &number.token,
            Expr::Binary(binary) => &binary.operator,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(number) => &number.token.span,
            Expr::Binary(binary) => &binary.span,
        }
    }

    pub fn left(&self) -> Option<&Expr> {
        match self {
            Expr::Number(_) => None,
            Expr::Binary(binary) => Some(&binary.left),
        }
    }

    pub fn right(&self) -> Option<&Expr> {
        match self {
            Expr::Number(_) => None,
            Expr::Binary(binary) => Some(&binary.right),
        }
    }

    /// Visits every node once, parent first, then left, then right.
    ///
    /// The visitor receives each node together with its depth (root is 0).
    pub fn walk<'a, F>(&'a self, visitor: &mut F)
    where
        F: FnMut(&'a Expr, usize),
    {
        let mut pending = vec![(self, 0)];

        while let Some((node, depth)) = pending.pop() {
            visitor(node, depth);

            if let Expr::Binary(binary) = node {
                pending.push((binary.right.as_ref(), depth + 1));
                pending.push((binary.left.as_ref(), depth + 1));
            }
        }
    }

    /// Swaps every binary child of a binary node for an empty leaf and hands
    /// it to `out`. Leaf children stay where they are.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        if let Expr::Binary(binary) = self {
            let span = binary.span.clone();
            let hollow = || {
                Expr::number(Token {
                    kind: TokenKind::EOF,
                    value: String::new(),
                    span: span.clone(),
                })
            };

            for child in [binary.left.as_mut(), binary.right.as_mut()] {
                if let Expr::Binary(_) = child {
                    out.push(mem::replace(child, hollow()));
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut detached = vec![];
        self.detach_children(&mut detached);

        // Each popped node is dropped with leaf children only.
        while let Some(mut node) = detached.pop() {
            node.detach_children(&mut detached);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Visit(&'a Expr),
            Join(&'a BinaryExpr),
        }

        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<Expr> = vec![];

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Number(number)) => built.push(Expr::Number(number.clone())),
                Step::Visit(Expr::Binary(binary)) => {
                    steps.push(Step::Join(binary));
                    steps.push(Step::Visit(binary.right.as_ref()));
                    steps.push(Step::Visit(binary.left.as_ref()));
                }
                Step::Join(binary) => {
                    let (Some(right), Some(left)) = (built.pop(), built.pop()) else {
                        unreachable!("both operands are built before their parent");
                    };

                    built.push(Expr::Binary(BinaryExpr {
                        operator: binary.operator.clone(),
                        left: Box::new(left),
                        right: Box::new(right),
                        span: binary.span.clone(),
                    }));
                }
            }
        }

        let Some(root) = built.pop() else {
            unreachable!("the root is always built");
        };
        root
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Expr::Number(a), Expr::Number(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Expr::Binary(a), Expr::Binary(b)) => {
                    if a.operator != b.operator || a.span != b.span {
                        return false;
                    }
                    pending.push((a.right.as_ref(), b.right.as_ref()));
                    pending.push((a.left.as_ref(), b.left.as_ref()));
                }
                _ => return false,
            }
        }

        true
    }
}

/// Prints the node literals in visiting order with their depth, e.g.
/// `Expr { preorder: ["-"@0, "+"@1, "10"@2, "5"@2, "3"@1] }`.
impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Visited<'a>(&'a str, usize);

        impl fmt::Debug for Visited<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}@{}", self.0, self.1)
            }
        }

        let mut visited = vec![];
        self.walk(&mut |node, depth| visited.push(Visited(&node.token().value, depth)));

        f.debug_struct("Expr").field("preorder", &visited).finish()
    }
}
