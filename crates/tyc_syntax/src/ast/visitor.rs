use super::*;

/// 只读遍历语法树；默认实现递归访问所有子节点，
/// 覆盖某个方法后可调用对应的 `walk_*` 继续向下
pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_decl(&mut self, decl: &Decl) {
        walk_decl(self, decl);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    for decl in &program.decls {
        visitor.visit_decl(decl);
    }
}

pub fn walk_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &Decl) {
    match decl {
        Decl::Struct(_) => {}
        Decl::Function(func) => {
            for stmt in &func.body {
                visitor.visit_stmt(stmt);
            }
        }
    }
}

fn walk_var_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &VarDecl) {
    if let Some(init) = &decl.init {
        visitor.visit_expr(init);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Block { stmts, .. } => {
            for stmt in stmts {
                visitor.visit_stmt(stmt);
            }
        }
        Stmt::VarDecl(decl) => walk_var_decl(visitor, decl),
        Stmt::Expression(expr) => visitor.visit_expr(expr),
        Stmt::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(then_branch);
            if let Some(else_branch) = else_branch {
                visitor.visit_stmt(else_branch);
            }
        }
        Stmt::While {
            condition, body, ..
        } => {
            visitor.visit_expr(condition);
            visitor.visit_stmt(body);
        }
        Stmt::For {
            init,
            condition,
            update,
            body,
            ..
        } => {
            match init {
                Some(ForInit::VarDecl(decl)) => walk_var_decl(visitor, decl),
                Some(ForInit::Expr(expr)) => visitor.visit_expr(expr),
                None => {}
            }
            if let Some(condition) = condition {
                visitor.visit_expr(condition);
            }
            if let Some(update) = update {
                visitor.visit_expr(update);
            }
            visitor.visit_stmt(body);
        }
        Stmt::Switch {
            scrutinee, arms, ..
        } => {
            visitor.visit_expr(scrutinee);
            for arm in arms {
                if let SwitchLabel::Case(value) = &arm.label {
                    visitor.visit_expr(value);
                }
                for stmt in &arm.body {
                    visitor.visit_stmt(stmt);
                }
            }
        }
        Stmt::Return { value, .. } => {
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
        Stmt::Break { .. } | Stmt::Continue { .. } => {}
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match &expr.kind {
        ExprKind::Literal(_) | ExprKind::Identifier(_) => {}
        ExprKind::Member { object, .. } => visitor.visit_expr(object),
        ExprKind::Call { args, .. } | ExprKind::StructLiteral(args) => {
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        ExprKind::Unary(_, operand) | ExprKind::Postfix(_, operand) => visitor.visit_expr(operand),
        ExprKind::Binary(lhs, _, rhs) => {
            visitor.visit_expr(lhs);
            visitor.visit_expr(rhs);
        }
        ExprKind::Assign { target, value } => {
            visitor.visit_expr(target);
            visitor.visit_expr(value);
        }
    }
}
