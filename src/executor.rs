//! Executors and the executor accessor.
//!
//! An executor is the context asynchronous operations are issued against and
//! completions are delivered through. How it schedules work is its own
//! business; this crate only needs a handle to exist.

/// A handle to an execution context.
pub trait Executor: Clone {
    /// Submit `f` for execution.
    fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static;
}

/// Runs every submitted function immediately on the calling thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineExecutor;

impl Executor for InlineExecutor {
    #[inline]
    fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(task = core::any::type_name::<F>(), "inline executor running task");
        f()
    }
}

impl<E: Executor> Executor for &E {
    #[inline]
    fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        (**self).execute(f)
    }
}

/// Zero-argument executor accessor.
///
/// Half of every asynchronous capability: an asynchronous stream must say
/// where its completions run.
pub trait HasExecutor {
    type Executor: Executor;

    /// The executor associated with this object.
    fn executor(&self) -> Self::Executor;
}

/// The executor type of `T`.
pub type ExecutorType<T> = <T as HasExecutor>::Executor;

impl<T: HasExecutor + ?Sized> HasExecutor for &mut T {
    type Executor = T::Executor;

    #[inline]
    fn executor(&self) -> Self::Executor {
        (**self).executor()
    }
}

#[cfg(feature = "alloc")]
impl<T: HasExecutor + ?Sized> HasExecutor for alloc::boxed::Box<T> {
    type Executor = T::Executor;

    #[inline]
    fn executor(&self) -> Self::Executor {
        (**self).executor()
    }
}
