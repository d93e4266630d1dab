/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` tree and its traversal
/// - expressions: Leaf and binary node payloads
/// - printer: Indented tree rendering
pub mod ast;
pub mod expressions;
pub mod printer;
