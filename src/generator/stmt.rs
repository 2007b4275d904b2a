use crate::ast::{
    ast::{find_property_by_name, Expr, PropertyDef, Stmt},
    statements::{BlockStmt, IfStmt, ImportStmt},
};

use super::{
    expr::{gen_entries, gen_expression, sanitize},
    loops::gen_for_statement,
    lua::LuaGenerator,
};

/// Writes one statement on its own line(s), at the current indentation.
pub fn gen_statement(generator: &mut LuaGenerator, statement: &Stmt) {
    match statement {
        Stmt::Expression(stmt) => {
            generator.write_indent();
            gen_expression(generator, &stmt.expression);
            generator.write("\n");
        }
        Stmt::Import(stmt) => gen_import(generator, stmt),
        Stmt::VarDecl(stmt) => {
            generator.write_indent();
            generator.write("local ");
            generator.write(&sanitize(&stmt.identifier.value));
            generator.write(" = ");
            gen_expression(generator, &stmt.value);
            generator.write("\n");
        }
        Stmt::If(stmt) => gen_if_statement(generator, stmt),
        Stmt::Return(stmt) => {
            generator.write_indent();
            generator.write("return");
            if let Some(value) = &stmt.value {
                generator.write(" ");
                gen_expression(generator, value);
            }
            generator.write("\n");
        }
        Stmt::Comment(stmt) => {
            generator.write_indent();
            generator.write("--");
            generator.write(&stmt.value);
            generator.write("\n");
        }
        Stmt::Break(_) => {
            generator.write_indent();
            generator.write("break\n");
        }
        Stmt::Continue(_) => {
            generator.write_indent();
            generator.write("continue\n");
        }
        Stmt::For(stmt) => gen_for_statement(generator, stmt),
        Stmt::Skill(decl) => {
            let name = sanitize(&decl.name.value);
            gen_declaration(generator, &name, &decl.properties);

            if let Some(tid) = find_property_by_name("tid", &decl.properties) {
                generator.record_skill_tid(tid, name);
            }
        }
        Stmt::State(decl) => {
            let name = sanitize(&decl.name.value);
            gen_declaration(generator, &name, &decl.properties);

            if let Some(tid) = find_property_by_name("tid", &decl.properties) {
                generator.record_state_tid(tid, name);
            }
        }
    }
}

pub fn gen_import(generator: &mut LuaGenerator, import: &ImportStmt) {
    generator.write_indent();
    generator.write("require ");
    gen_expression(generator, &import.value);
    generator.write("\n");
}

/// Body statements one level deeper than the current indentation.
pub fn gen_block(generator: &mut LuaGenerator, block: &BlockStmt) {
    generator.indent();
    for stmt in block.iter() {
        gen_statement(generator, stmt);
    }
    generator.dedent();
}

fn gen_if_statement(generator: &mut LuaGenerator, stmt: &IfStmt) {
    generator.write_indent();
    generator.write("if ");
    gen_expression(generator, &stmt.condition);
    generator.write(" then\n");
    gen_block(generator, &stmt.consequence);

    for alternative in &stmt.alternatives {
        generator.write_indent();
        match &alternative.condition {
            Some(condition) => {
                generator.write("elseif ");
                gen_expression(generator, condition);
                generator.write(" then\n");
            }
            None => generator.write("else\n"),
        }
        gen_block(generator, &alternative.consequence);
    }

    generator.write_indent();
    generator.write("end\n");
}

/// `local <name> = { ... }` for a skill or state. Function-valued
/// properties are emitted knowing the key they are bound to.
fn gen_declaration(generator: &mut LuaGenerator, name: &str, properties: &[PropertyDef]) {
    generator.write_indent();
    generator.write("local ");
    generator.write(name);
    generator.write(" = {\n");

    generator.indent();
    gen_entries(generator, properties, |property| {
        property.key.as_ref().and_then(Expr::as_symbol)
    });
    generator.dedent();

    generator.write_indent();
    generator.write("}\n");
}
