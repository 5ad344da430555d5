//! Dotted qualified names for callee expressions.

use swc_ecma_ast::{Expr, MemberProp};

/// Build the dotted qualified name of an expression, e.g. `goog.provide`.
///
/// Only plain identifier chains qualify: `a`, `this`, `a.b.c`, `this.a`.
/// Parentheses are transparent, so `(goog).provide` is `goog.provide`.
/// Computed members (`goog["provide"]`), private names, calls and
/// everything else yield `None`.
pub fn qualified_name(expr: &Expr) -> Option<String> {
    let mut name = String::new();
    push_qualified_name(expr, &mut name).then_some(name)
}

fn push_qualified_name(expr: &Expr, out: &mut String) -> bool {
    match expr {
        Expr::Ident(ident) => {
            out.push_str(ident.sym.as_str());
            true
        }
        Expr::Paren(paren) => push_qualified_name(&paren.expr, out),
        Expr::This(_) => {
            out.push_str("this");
            true
        }
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(prop) => {
                if !push_qualified_name(&member.obj, out) {
                    return false;
                }
                out.push('.');
                out.push_str(prop.sym.as_str());
                true
            }
            _ => false,
        },
        _ => false,
    }
}
