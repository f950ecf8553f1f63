//! Closure application: argument binding, variadics and currying.

use std::collections::VecDeque;

use blisp_value::{Closure, EvalError, EvalResult, Formal, Value};

use super::Interpreter;
use crate::Environment;

impl Interpreter {
    /// Bind `args` to the closure's formals.
    ///
    /// Once every formal is bound the body runs in a scope built from the
    /// closure's bindings whose parent is the calling environment `env`.
    /// With formals left over the result is a new closure holding the
    /// bindings made so far.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(formals = closure.formals.len(), args = args.len())
    )]
    pub(super) fn apply_closure(
        &mut self,
        env: &Environment,
        closure: Closure,
        args: Vec<Value>,
    ) -> EvalResult {
        let Closure {
            formals,
            body,
            env: mut bindings,
        } = closure;
        let given = args.len();
        let total = formals.len();
        let mut formals = VecDeque::from(formals);
        let mut args = VecDeque::from(args);

        while let Some(arg) = args.pop_front() {
            let Some(formal) = formals.pop_front() else {
                return Err(EvalError::TooManyArguments {
                    got: given,
                    expected: total,
                });
            };

            match formal {
                Formal::Named(name) => {
                    bindings.insert(name, arg);
                }
                Formal::Variadic => {
                    let name = variadic_target(&mut formals)?;
                    args.push_front(arg);
                    bindings.insert(name, Value::QExpr(args.drain(..).collect()));
                }
            }
        }

        // All arguments consumed with only `& rest` left: `rest` is empty.
        if formals.front() == Some(&Formal::Variadic) {
            formals.pop_front();
            let name = variadic_target(&mut formals)?;
            bindings.insert(name, Value::qexpr(Vec::new()));
        }

        if formals.is_empty() {
            let scope = Environment::with_bindings(bindings, env);
            Ok(self.eval(&scope, Value::qexpr(body).into_sexpr()))
        } else {
            Ok(Value::closure(Closure {
                formals: formals.into(),
                body,
                env: bindings,
            }))
        }
    }
}

/// The single named formal that must follow `&`.
fn variadic_target(formals: &mut VecDeque<Formal>) -> Result<String, EvalError> {
    match formals.pop_front() {
        Some(Formal::Named(name)) if formals.is_empty() => Ok(name),
        _ => Err(EvalError::InvalidVariadicFormat),
    }
}
