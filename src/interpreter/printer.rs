use crate::{
    ast::{Expr, ExprVisitor, LiteralValue},
    interpreter::{lexer::Token, value::Value},
};

/// Renders an expression tree in fully parenthesized prefix notation.
///
/// `1 + 2 * 3` renders as `(+ 1 (* 2 3))` and `(1 + 2) * 3` as
/// `(* (group (+ 1 2)) 3)`. Operators render by their lexeme and grouping
/// as `(group <expr>)`. The rendering is pure and total: reserved,
/// not-yet-executable variants render their tag name as a placeholder.
pub struct AstPrinter;

impl AstPrinter {
    /// Renders an expression as its parenthesized debug string.
    ///
    /// # Example
    /// ```
    /// use rlox::interpreter::{lexer::scan, parser::core::parse_expression, printer::AstPrinter};
    ///
    /// let (tokens, _) = scan("1 + 2 * 3");
    /// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
    ///
    /// assert_eq!(AstPrinter::render(&expr), "(+ 1 (* 2 3))");
    /// ```
    #[must_use]
    pub fn render(expr: &Expr) -> String {
        expr.accept(&mut Self)
    }

    /// Joins an operator name and its operands into one parenthesized form.
    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({name}");

        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }

        out.push(')');
        out
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_literal(&mut self, value: &LiteralValue) -> String {
        Value::from(value).to_string()
    }

    fn visit_grouping(&mut self, expr: &Expr) -> String {
        self.parenthesize("group", &[expr])
    }

    fn visit_unary(&mut self, op: &Token, right: &Expr) -> String {
        self.parenthesize(&op.lexeme, &[right])
    }

    fn visit_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> String {
        self.parenthesize(&op.lexeme, &[left, right])
    }

    fn visit_logical(&mut self, _left: &Expr, _op: &Token, _right: &Expr) -> String {
        "Logical".to_string()
    }

    fn visit_assign(&mut self, _name: &Token, _value: &Expr) -> String {
        "Assign".to_string()
    }

    fn visit_call(&mut self, _callee: &Expr, _paren: &Token, _arguments: &[Expr]) -> String {
        "Call".to_string()
    }

    fn visit_get(&mut self, _object: &Expr, _name: &Token) -> String {
        "Get".to_string()
    }

    fn visit_set(&mut self, _object: &Expr, _name: &Token, _value: &Expr) -> String {
        "Set".to_string()
    }

    fn visit_super(&mut self, _keyword: &Token, _method: &Token) -> String {
        "Super".to_string()
    }

    fn visit_this(&mut self, _keyword: &Token) -> String {
        "This".to_string()
    }

    fn visit_variable(&mut self, _name: &Token) -> String {
        "Variable".to_string()
    }
}
