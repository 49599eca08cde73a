/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is strict: every non-leaf node owns its children through a `Box`
/// and nothing is shared. The parser builds it bottom-up and the evaluator only
/// reads it, so a tree is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `2.5`.
    NumberLiteral {
        /// The literal value.
        value: f64,
    },
    /// Arithmetic negation of a factor (e.g. `-x`).
    UnaryNegate {
        /// The negated operand.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Creates a numeric literal node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::NumberLiteral { value }
    }

    /// Creates a negation node that owns `operand`.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::UnaryNegate { operand: Box::new(operand) }
    }

    /// Creates a binary operation node that owns both operands.
    ///
    /// ## Example
    /// ```
    /// use evalexp::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Sub, Expr::number(3.0), Expr::number(1.0));
    ///
    /// assert_eq!(expr.node_count(), 3);
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Counts every node in the tree, leaves included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }
        count
    }

    /// Length of the longest path from this node down to a leaf.
    ///
    /// A single literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// The direct children of this node, left to right.
    fn children(&self) -> impl Iterator<Item = &Self> {
        let (first, second) = match self {
            Self::NumberLiteral { .. } => (None, None),
            Self::UnaryNegate { operand } => (Some(&**operand), None),
            Self::BinaryOp { left, right, .. } => (Some(&**left), Some(&**right)),
        };
        first.into_iter().chain(second)
    }
}

// Operator chains fold into left-deep trees as deep as the chain is long, so
// the default recursive drop could exhaust the stack. Children are detached
// onto a work list and dropped one at a time instead.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

/// Moves the non-leaf children of `expr` into `pending`, leaving leaves in
/// their place.
fn detach_children(expr: &mut Expr, pending: &mut Vec<Box<Expr>>) {
    let mut detach = |child: &mut Box<Expr>| {
        if !matches!(**child, Expr::NumberLiteral { .. }) {
            pending.push(std::mem::replace(child, Box::new(Expr::number(0.0))));
        }
    };
    match expr {
        Expr::NumberLiteral { .. } => {},
        Expr::UnaryNegate { operand } => detach(operand),
        Expr::BinaryOp { left, right, .. } => {
            detach(left);
            detach(right);
        },
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Binding strength of the operator. Higher binds tighter.
    ///
    /// `*` and `/` share the higher level, `+` and `-` the lower one.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
