//! Indented tree rendering.

use super::ast::Expr;

const INDENT_WIDTH: usize = 2;

/// Renders one `Node: <literal>` line per node in pre-order, indented by depth.
pub fn render_tree(expr: &Expr) -> String {
    let mut out = String::new();

    expr.walk(&mut |node, depth| {
        out.push_str(&" ".repeat(depth * INDENT_WIDTH));
        out.push_str("Node: ");
        out.push_str(&node.token().value);
        out.push('\n');
    });

    out
}

/// Literals of every node in visiting order.
pub fn preorder_literals(expr: &Expr) -> Vec<String> {
    let mut literals = vec![];
    expr.walk(&mut |node, _| literals.push(node.token().value.clone()));
    literals
}
