//! Callable values: native builtins and user closures.

use rustc_hash::FxHashMap;

use super::Value;

/// Bindings captured by a closure (filled by partial application).
pub type Bindings = FxHashMap<String, Value>;

/// Spelling of the variadic marker in source.
const VARIADIC_MARKER: &str = "&";

/// A single formal parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formal {
    /// Binds one argument to this name.
    Named(String),
    /// The `&` marker: the following name receives all remaining arguments.
    Variadic,
}

impl Formal {
    /// Classify a formal parameter symbol.
    pub fn from_symbol(name: &str) -> Self {
        if name == VARIADIC_MARKER {
            Formal::Variadic
        } else {
            Formal::Named(name.to_owned())
        }
    }

    /// Source spelling of this formal.
    pub fn as_str(&self) -> &str {
        match self {
            Formal::Named(name) => name,
            Formal::Variadic => VARIADIC_MARKER,
        }
    }
}

/// User-defined function.
///
/// `env` holds the bindings accumulated by partial application; a freshly
/// built lambda has none. Equality ignores `env`: two closures with the same
/// formals and body are equal wherever they were built.
#[derive(Clone, Debug)]
pub struct Closure {
    pub formals: Vec<Formal>,
    pub body: Vec<Value>,
    pub env: Bindings,
}

impl Closure {
    /// Create a closure with no captured bindings.
    pub fn new(formals: Vec<Formal>, body: Vec<Value>) -> Self {
        Closure {
            formals,
            body,
            env: Bindings::default(),
        }
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.formals == other.formals && self.body == other.body
    }
}

/// Native operation provided by the interpreter.
///
/// Builtins compare equal iff they name the same operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Ordering
    Gt,
    Lt,
    Ge,
    Le,
    // Equality
    Eq,
    Ne,
    // Control flow
    If,
    // Lists
    List,
    Head,
    Tail,
    Eval,
    Join,
    // Binding
    Def,
    Put,
    Lambda,
    // Effects
    Print,
    Error,
    Load,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 22] = [
        Builtin::Print,
        Builtin::Error,
        Builtin::Load,
        Builtin::If,
        Builtin::Gt,
        Builtin::Lt,
        Builtin::Ge,
        Builtin::Le,
        Builtin::Eq,
        Builtin::Ne,
        Builtin::Lambda,
        Builtin::Def,
        Builtin::Put,
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
    ];

    /// Name the builtin is bound to in the global environment.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Gt => ">",
            Builtin::Lt => "<",
            Builtin::Ge => ">=",
            Builtin::Le => "<=",
            Builtin::Eq => "==",
            Builtin::Ne => "!=",
            Builtin::If => "if",
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Lambda => "\\",
            Builtin::Print => "print",
            Builtin::Error => "error",
            Builtin::Load => "load",
        }
    }
}

/// A callable value.
#[derive(Clone, Debug, PartialEq)]
pub enum Function {
    Builtin(Builtin),
    Closure(Closure),
}
