//! Argument tuples and the callbacks that accept them.
//!
//! Every event key is bound to exactly one argument tuple type. Arity 0 is
//! `()`, arity 1 is `(T,)`, and so on up to four values. Plain closures of
//! the matching shape implement [`Callback`] for that tuple, so
//! `|hp: u32, name: String| { ... }` is a `Callback<(u32, String)>`.

use std::any::{TypeId, type_name};
use std::fmt;

use crate::error::HandlerError;

/// Result returned by a single handler invocation.
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// An argument tuple that can be delivered to listeners.
///
/// Arguments are cloned once per invoked listener, so payloads that are
/// expensive to clone should be wrapped in an `Arc`.
pub trait EventArgs: Clone + Send + 'static {
    /// Number of values in the tuple.
    const ARITY: usize;
}

/// The fixed argument shape shared by all listeners under one key.
#[derive(Clone, Copy)]
pub struct HandlerSignature {
    type_id: TypeId,
    arity: usize,
    type_name: &'static str,
}

impl HandlerSignature {
    /// Signature of the argument tuple `A`.
    pub fn of<A: EventArgs>() -> Self {
        Self {
            type_id: TypeId::of::<A>(),
            arity: A::ARITY,
            type_name: type_name::<A>(),
        }
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Readable name of the argument tuple.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this signature describes the tuple `A`.
    pub fn is<A: EventArgs>(&self) -> bool {
        self.type_id == TypeId::of::<A>()
    }
}

impl PartialEq for HandlerSignature {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for HandlerSignature {}

impl fmt::Debug for HandlerSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSignature")
            .field("arity", &self.arity)
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl fmt::Display for HandlerSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_name, self.arity)
    }
}

/// Conversion of a handler's return value into a [`HandlerResult`].
///
/// Implemented for `()` and for `Result<(), E>` with any displayable error.
pub trait IntoHandlerResult {
    fn into_handler_result(self) -> HandlerResult;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> HandlerResult {
        Ok(())
    }
}

impl<E: fmt::Display> IntoHandlerResult for std::result::Result<(), E> {
    fn into_handler_result(self) -> HandlerResult {
        self.map_err(|e| HandlerError::Failed(e.to_string()))
    }
}

/// A callable that accepts the argument tuple `A`.
pub trait Callback<A: EventArgs>: Send + Sync + 'static {
    fn call(&self, args: A) -> HandlerResult;
}

macro_rules! impl_arity {
    ($arity:expr; $($ty:ident => $arg:ident),*) => {
        impl<$($ty,)*> EventArgs for ($($ty,)*)
        where
            $($ty: Clone + Send + 'static,)*
        {
            const ARITY: usize = $arity;
        }

        impl<F, R, $($ty,)*> Callback<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> R + Send + Sync + 'static,
            R: IntoHandlerResult,
            $($ty: Clone + Send + 'static,)*
        {
            #[allow(non_snake_case, unused_variables)]
            fn call(&self, args: ($($ty,)*)) -> HandlerResult {
                let ($($arg,)*) = args;
                (self)($($arg),*).into_handler_result()
            }
        }
    };
}

impl_arity!(0;);
impl_arity!(1; T1 => a1);
impl_arity!(2; T1 => a1, T2 => a2);
impl_arity!(3; T1 => a1, T2 => a2, T3 => a3);
impl_arity!(4; T1 => a1, T2 => a2, T3 => a3, T4 => a4);
