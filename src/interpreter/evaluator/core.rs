use std::collections::BTreeMap;

use crate::{
    ast::Ast,
    error::NameError,
    source::{Position, Source},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`NameError`], the only failure evaluation can produce.
pub type EvalResult<T> = Result<T, NameError>;

/// Tree-walking evaluator for one parsed program.
///
/// The interpreter holds the AST root, a reference to the source it was
/// parsed from (for rendering runtime diagnostics), and the global scope:
/// a single mapping from variable name to value that persists for the
/// lifetime of the instance. Running the same program concurrently
/// requires one interpreter per run — the scope is mutated in place.
///
/// The scope map is ordered by name, which gives embedders a
/// deterministic iteration order for printing bindings.
pub struct Interpreter<'src> {
    source: &'src Source,
    tree:   Ast,
    scope:  BTreeMap<String, f64>,
}

impl<'src> Interpreter<'src> {
    /// Creates an interpreter over a parsed program with an empty scope.
    #[must_use]
    pub const fn new(tree: Ast, source: &'src Source) -> Self {
        Self { source,
               tree,
               scope: BTreeMap::new() }
    }

    /// Evaluates the program once.
    ///
    /// Statements execute in source order; the populated scope is the
    /// observable result, readable afterwards through
    /// [`Interpreter::scope`] or [`Interpreter::into_scope`].
    ///
    /// # Errors
    /// A [`NameError`] if any expression reads a variable that has not
    /// been assigned at that point of execution.
    pub fn run(&mut self) -> EvalResult<()> {
        let tree = std::mem::take(&mut self.tree);
        let result = self.exec(&tree);
        self.tree = tree;
        result
    }

    /// The global scope: every binding the program has made so far.
    #[must_use]
    pub const fn scope(&self) -> &BTreeMap<String, f64> {
        &self.scope
    }

    /// Consumes the interpreter, handing the scope to the embedder.
    #[must_use]
    pub fn into_scope(self) -> BTreeMap<String, f64> {
        self.scope
    }

    /// Executes a statement node for its side effects.
    fn exec(&mut self, node: &Ast) -> EvalResult<()> {
        match node {
            Ast::NoOp => Ok(()),

            Ast::Compound { statements } => {
                for statement in statements {
                    self.exec(statement)?;
                }
                Ok(())
            },

            Ast::Assign { name, value, .. } => {
                let value = self.eval(value)?;
                self.scope.insert(name.clone(), value);
                Ok(())
            },

            // An expression in statement position evaluates for its value,
            // which is discarded. The grammar does not currently derive
            // this case.
            other => {
                self.eval(other)?;
                Ok(())
            },
        }
    }

    /// Evaluates an expression node to its numeric value.
    ///
    /// Binary operands evaluate left first, then right, matching the
    /// source's textual order.
    pub(in crate::interpreter::evaluator) fn eval(&mut self, node: &Ast) -> EvalResult<f64> {
        match node {
            Ast::Number { value, .. } => Ok(*value),
            Ast::Variable { name, position } => self.eval_variable(name, *position),
            Ast::UnaryOp { op, operand, .. } => self.eval_unary_op(*op, operand),
            Ast::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),

            // Statement nodes yield no value; the grammar keeps them out
            // of expression position.
            Ast::NoOp | Ast::Compound { .. } | Ast::Assign { .. } => Ok(0.0),
        }
    }

    /// Reads a variable from the global scope.
    fn eval_variable(&self, name: &str, position: Position) -> EvalResult<f64> {
        self.scope
            .get(name)
            .copied()
            .ok_or_else(|| NameError { name:     name.to_string(),
                                       location: self.source.location(position), })
    }
}
