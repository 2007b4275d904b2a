//! Debug rendering of a parsed program as a connector-drawn tree.
//!
//! The output is for humans inspecting what the parser built; the Lua
//! generator never reads it.

use super::{
    ast::{Expr, Node, Program, PropertyDef, Stmt},
    statements::{BlockStmt, ForHeader},
};

struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: impl Into<String>) -> Self {
        TreeNode {
            label: label.into(),
            children: vec![],
        }
    }

    fn new(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        TreeNode {
            label: label.into(),
            children,
        }
    }

    fn labelled(self, label: &str) -> Self {
        TreeNode {
            label: format!("{}: {}", label, self.label),
            children: self.children,
        }
    }
}

pub fn print_tree(program: &Program) -> String {
    let mut out = String::new();
    render(&program_node(program), "", true, &mut out);
    out
}

fn render(node: &TreeNode, prefix: &str, is_last: bool, out: &mut String) {
    out.push_str(prefix);
    out.push_str(if is_last { "└── " } else { "├── " });
    out.push_str(&node.label);
    out.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
    for (i, child) in node.children.iter().enumerate() {
        render(child, &child_prefix, i + 1 == node.children.len(), out);
    }
}

fn program_node(program: &Program) -> TreeNode {
    let mut children = vec![];
    for import in &program.imports {
        children.push(
            TreeNode::new(
                format!("ImportStmt {{ Path: {} }}", import.value.token_literal()),
                vec![expr_node(&import.value).labelled("exp")],
            )
            .labelled("import"),
        );
    }
    for stmt in &program.statements {
        children.push(stmt_node(stmt).labelled("statement"));
    }

    TreeNode::new(
        format!(
            "Program {{ Imports: {}, Statements: {} }}",
            program.imports.len(),
            program.statements.len()
        ),
        children,
    )
}

fn block_node(block: &BlockStmt) -> TreeNode {
    TreeNode::new(
        "BlockStmt",
        block
            .iter()
            .map(|stmt| stmt_node(stmt).labelled("statement"))
            .collect(),
    )
}

fn property_nodes(properties: &[PropertyDef]) -> Vec<TreeNode> {
    properties
        .iter()
        .map(|prop| match &prop.key {
            Some(key) => {
                expr_node(&prop.value).labelled(&format!("property '{}'", key.token_literal()))
            }
            None => expr_node(&prop.value).labelled("property"),
        })
        .collect()
}

fn stmt_node(stmt: &Stmt) -> TreeNode {
    match stmt {
        Stmt::Expression(stmt) => TreeNode::new(
            "ExpressionStmt",
            vec![expr_node(&stmt.expression).labelled("expression")],
        ),
        Stmt::Import(stmt) => TreeNode::new(
            format!("ImportStmt {{ Path: {} }}", stmt.value.token_literal()),
            vec![expr_node(&stmt.value).labelled("exp")],
        ),
        Stmt::VarDecl(stmt) => TreeNode::new(
            "VarDeclStmt",
            vec![
                TreeNode::leaf(format!("Symbol {{ Value: {} }}", stmt.identifier.value))
                    .labelled("var"),
                expr_node(&stmt.value).labelled("exp"),
            ],
        ),
        Stmt::If(stmt) => {
            let mut children = vec![TreeNode::new(
                "if",
                vec![
                    expr_node(&stmt.condition).labelled("condition"),
                    block_node(&stmt.consequence),
                ],
            )];
            for alternative in &stmt.alternatives {
                children.push(match &alternative.condition {
                    Some(condition) => TreeNode::new(
                        "else if",
                        vec![
                            expr_node(condition).labelled("condition"),
                            block_node(&alternative.consequence),
                        ],
                    ),
                    None => TreeNode::new("else", vec![block_node(&alternative.consequence)]),
                });
            }
            TreeNode::new("IfStmt", children)
        }
        Stmt::Return(stmt) => TreeNode::new(
            "ReturnStmt",
            stmt.value
                .iter()
                .map(|value| expr_node(value).labelled("value"))
                .collect(),
        ),
        Stmt::Comment(stmt) => TreeNode::leaf(format!("CommentStmt {{ Text: {} }}", stmt.value)),
        Stmt::Break(_) => TreeNode::leaf("BreakStmt"),
        Stmt::Continue(_) => TreeNode::leaf("ContinueStmt"),
        Stmt::For(stmt) => {
            let mut children = vec![];
            let label = match &stmt.header {
                ForHeader::Range {
                    key,
                    value,
                    iterable,
                } => {
                    if let Some(key) = key {
                        children.push(
                            TreeNode::leaf(format!("Symbol {{ Value: {} }}", key.value))
                                .labelled("key"),
                        );
                    }
                    children.push(
                        TreeNode::leaf(format!("Symbol {{ Value: {} }}", value.value))
                            .labelled("value"),
                    );
                    children.push(expr_node(iterable).labelled("range"));
                    "ForStmt (Range)"
                }
                ForHeader::Classic {
                    init,
                    condition,
                    post,
                } => {
                    if let Some(init) = init {
                        children.push(stmt_node(init).labelled("init"));
                    }
                    if let Some(condition) = condition {
                        children.push(expr_node(condition).labelled("condition"));
                    }
                    if let Some(post) = post {
                        children.push(expr_node(&post.expression).labelled("post"));
                    }
                    "ForStmt (Classic)"
                }
            };
            children.push(block_node(&stmt.body).labelled("body"));
            TreeNode::new(label, children)
        }
        Stmt::Skill(decl) => {
            let mut children = vec![
                TreeNode::leaf(format!("Symbol {{ Value: {} }}", decl.name.value)).labelled("name"),
            ];
            children.extend(property_nodes(&decl.properties));
            TreeNode::new("SkillDecl", children)
        }
        Stmt::State(decl) => {
            let mut children = vec![
                TreeNode::leaf(format!("Symbol {{ Value: {} }}", decl.name.value)).labelled("name"),
            ];
            children.extend(property_nodes(&decl.properties));
            TreeNode::new("StateDecl", children)
        }
    }
}

fn expr_node(expr: &Expr) -> TreeNode {
    match expr {
        Expr::Symbol(symbol) => TreeNode::leaf(format!("Symbol {{ Value: {} }}", symbol.value)),
        Expr::Integer(integer) => {
            TreeNode::leaf(format!("Integer {{ Value: {} }}", integer.value))
        }
        Expr::Float(float) => TreeNode::leaf(format!("Float {{ Value: {} }}", float.value)),
        Expr::String(string) => TreeNode::leaf(format!("String {{ Value: {} }}", string.value)),
        Expr::Boolean(boolean) => {
            TreeNode::leaf(format!("Boolean {{ Value: {} }}", boolean.value))
        }
        Expr::Prefix(prefix) => TreeNode::new(
            "PrefixExpr",
            vec![
                TreeNode::leaf(format!("operator '{}'", prefix.operator)),
                expr_node(&prefix.right).labelled("right"),
            ],
        ),
        Expr::Infix(infix) => TreeNode::new(
            "InfixExpr",
            vec![
                expr_node(&infix.left).labelled("left"),
                TreeNode::leaf(format!("operator '{}'", infix.operator)),
                expr_node(&infix.right).labelled("right"),
            ],
        ),
        Expr::Member(member) => TreeNode::new(
            "MemberExpr",
            vec![
                expr_node(&member.left).labelled("left"),
                expr_node(&member.member).labelled("right"),
            ],
        ),
        Expr::Call(call) => {
            let mut children = vec![expr_node(&call.callee).labelled("function")];
            for (i, argument) in call.arguments.iter().enumerate() {
                children.push(expr_node(argument).labelled(&format!("arg[{}]", i)));
            }
            TreeNode::new(format!("CallExpr {{ Args: {} }}", call.arguments.len()), children)
        }
        Expr::Table(table) => TreeNode::new("TableExpr", property_nodes(&table.properties)),
        Expr::Function(function) => {
            let mut children: Vec<TreeNode> = function
                .parameters
                .iter()
                .map(|param| {
                    TreeNode::leaf(format!("Symbol {{ Value: {} }}", param.value))
                        .labelled("parameter")
                })
                .collect();
            children.push(block_node(&function.body).labelled("body"));
            TreeNode::new("FunctionExpr", children)
        }
    }
}
