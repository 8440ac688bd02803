//! Ergonomic constructors for terms, predicates and lists.
//!
//! [atom!](../macro.atom.html) - Makes an atom from a string slice.<br>
//! [var!](../macro.var.html) - Makes a fresh logic variable.<br>
//! [func!](../macro.func.html) - Makes a compound function term.<br>
//! [pred!](../macro.pred.html) - Makes a predicate (goal or rule head).<br>
//! [plist!](../macro.plist.html) - Builds a list from a literal sequence of terms.<br>
//!
//! These mirror Suiron's `atom!`/`logic_var!`/`scomplex!`/`slist!` family,
//! retargeted at this crate's `Term`/`Predicate` types.
// Adapted from suiron-rust's macros.rs (Cleve Lendon, 2023).

/// Makes an atom from a string slice or `String`.
///
/// # Usage
/// ```
/// use hornet::atom;
/// use hornet::term::Term;
///
/// let a = atom!("harold");
/// assert_eq!(a, Term::Atom("harold".to_string()));
/// ```
#[macro_export]
macro_rules! atom {
    ($name:expr) => {
        $crate::term::Term::Atom($name.to_string())
    };
}

/// Makes a fresh logic variable term. Each invocation allocates a new
/// identity, even when called twice with the same display name.
///
/// # Usage
/// ```
/// use hornet::var;
///
/// let x = var!("X");
/// let y = var!("X");
/// assert_ne!(x, y);
/// ```
#[macro_export]
macro_rules! var {
    ($name:expr) => {
        $crate::term::Term::Variable($crate::term::Variable::fresh($name))
    };
}

/// Makes a compound function term, `name(arg1, .., argN)`.
///
/// # Usage
/// ```
/// use hornet::{atom, func};
///
/// let f = func!("point", vec![atom!("1"), atom!("2")]);
/// assert_eq!(f.to_string(), "point(1, 2)");
/// ```
#[macro_export]
macro_rules! func {
    ($name:expr, $args:expr) => {
        $crate::term::Term::Function($crate::term::Function::new($name, $args))
    };
}

/// Makes a predicate (a goal or rule head), `name(arg1, .., argN)`.
///
/// # Usage
/// ```
/// use hornet::{atom, pred};
///
/// let p = pred!("father", vec![atom!("alfred"), atom!("edward")]);
/// assert_eq!(p.to_string(), "father(alfred, edward)");
/// ```
#[macro_export]
macro_rules! pred {
    ($name:expr, $args:expr) => {
        $crate::predicate::Predicate::new($name, $args)
    };
}

/// Builds a `Term::List` from a literal sequence of terms (a proper,
/// right-associated spine terminating in the empty list).
///
/// # Usage
/// ```
/// use hornet::{atom, plist};
///
/// let l = plist!(atom!("a"), atom!("b"), atom!("c"));
/// assert_eq!(l.to_string(), "[a,b,c]");
/// ```
#[macro_export]
macro_rules! plist {
    ($($term:expr),* $(,)?) => {
        $crate::term::Term::List($crate::term::List::from_sequence(vec![$($term),*]))
    };
}
