/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node enums, properties and the program root
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - printer: Connector-drawn debug rendering of a program
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
