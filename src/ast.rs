use crate::interpreter::lexer::Token;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constant values that can appear directly in
/// source code. It is used in the AST to represent literal expressions; the
/// evaluator converts it into a runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double-precision numeric literal.
    Number(f64),
    /// A string literal, quotes already stripped.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `nil` literal.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The first four variants form the executable subset: literals, grouping,
/// unary and binary operations. The remaining variants reserve the shapes of
/// the full language (logical operators, variables, assignment, calls,
/// classes) so the tree can represent them; the evaluator reports visiting
/// one as an unsupported-operation error rather than executing it.
///
/// Operator and name tokens are kept in the nodes so diagnostics can report
/// the offending line and lexeme. Ownership is strictly tree-shaped; once
/// built, a tree is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
    },
    /// A unary operation (`!` or `-`).
    Unary {
        /// The operator token.
        op:    Token,
        /// The operand expression.
        right: Box<Self>,
    },
    /// A binary operation (arithmetic, comparison, or equality).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator token.
        op:    Token,
        /// Right operand.
        right: Box<Self>,
    },
    /// A short-circuiting `and`/`or` operation. Reserved.
    Logical {
        /// Left operand.
        left:  Box<Self>,
        /// The operator token.
        op:    Token,
        /// Right operand.
        right: Box<Self>,
    },
    /// Assignment to a variable. Reserved.
    Assign {
        /// The variable name token.
        name:  Token,
        /// The value being assigned.
        value: Box<Self>,
    },
    /// A function or method call. Reserved.
    Call {
        /// The expression being called.
        callee:    Box<Self>,
        /// The closing parenthesis token, kept for error attribution.
        paren:     Token,
        /// The argument expressions.
        arguments: Vec<Self>,
    },
    /// Property access on an object. Reserved.
    Get {
        /// The object expression.
        object: Box<Self>,
        /// The property name token.
        name:   Token,
    },
    /// Property assignment on an object. Reserved.
    Set {
        /// The object expression.
        object: Box<Self>,
        /// The property name token.
        name:   Token,
        /// The value being assigned.
        value:  Box<Self>,
    },
    /// A superclass method reference. Reserved.
    Super {
        /// The `super` keyword token.
        keyword: Token,
        /// The method name token.
        method:  Token,
    },
    /// The `this` keyword. Reserved.
    This {
        /// The `this` keyword token.
        keyword: Token,
    },
    /// Reference to a variable by name. Reserved.
    Variable {
        /// The variable name token.
        name: Token,
    },
}

/// Represents a top-level statement.
///
/// Only the executable subset is present; declaration, block, control-flow,
/// function, and class statements are future extensions.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A `print` statement.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
    },
}

/// The expression half of the double-dispatch visitation contract.
///
/// A visitor produces a result of a caller-chosen type `R` for every
/// expression variant. [`Expr::accept`] dispatches to the method matching
/// the node's concrete variant; the exhaustive match there guarantees a
/// visitor handles every variant, reserved ones included.
pub trait ExprVisitor<R> {
    fn visit_literal(&mut self, value: &LiteralValue) -> R;
    fn visit_grouping(&mut self, expr: &Expr) -> R;
    fn visit_unary(&mut self, op: &Token, right: &Expr) -> R;
    fn visit_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> R;
    fn visit_logical(&mut self, left: &Expr, op: &Token, right: &Expr) -> R;
    fn visit_assign(&mut self, name: &Token, value: &Expr) -> R;
    fn visit_call(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> R;
    fn visit_get(&mut self, object: &Expr, name: &Token) -> R;
    fn visit_set(&mut self, object: &Expr, name: &Token, value: &Expr) -> R;
    fn visit_super(&mut self, keyword: &Token, method: &Token) -> R;
    fn visit_this(&mut self, keyword: &Token) -> R;
    fn visit_variable(&mut self, name: &Token) -> R;
}

/// The statement half of the double-dispatch visitation contract.
pub trait StmtVisitor<R> {
    fn visit_expression(&mut self, expr: &Expr) -> R;
    fn visit_print(&mut self, expr: &Expr) -> R;
}

impl Expr {
    /// Dispatches to the visitor method matching this node's variant.
    ///
    /// This is the only traversal mechanism the evaluator and the debug
    /// printer use; nodes carry no traversal logic of their own.
    pub fn accept<R>(&self, visitor: &mut impl ExprVisitor<R>) -> R {
        match self {
            Self::Literal { value } => visitor.visit_literal(value),
            Self::Grouping { expr } => visitor.visit_grouping(expr),
            Self::Unary { op, right } => visitor.visit_unary(op, right),
            Self::Binary { left, op, right } => visitor.visit_binary(left, op, right),
            Self::Logical { left, op, right } => visitor.visit_logical(left, op, right),
            Self::Assign { name, value } => visitor.visit_assign(name, value),
            Self::Call { callee,
                         paren,
                         arguments, } => visitor.visit_call(callee, paren, arguments),
            Self::Get { object, name } => visitor.visit_get(object, name),
            Self::Set { object, name, value } => visitor.visit_set(object, name, value),
            Self::Super { keyword, method } => visitor.visit_super(keyword, method),
            Self::This { keyword } => visitor.visit_this(keyword),
            Self::Variable { name } => visitor.visit_variable(name),
        }
    }
}

impl Stmt {
    /// Dispatches to the visitor method matching this statement's variant.
    pub fn accept<R>(&self, visitor: &mut impl StmtVisitor<R>) -> R {
        match self {
            Self::Expression { expr } => visitor.visit_expression(expr),
            Self::Print { expr } => visitor.visit_print(expr),
        }
    }
}
