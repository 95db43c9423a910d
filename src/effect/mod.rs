//! Effect descriptors and their combinators
//!
//! An [`Effect`] is an inert description of a deferred host operation and
//! the pure transformations applied to its eventual result. Constructing a
//! descriptor performs no host interaction; nothing happens until the
//! descriptor is handed to the driver through [`crate::task::Task::attempt`].
//!
//! The descriptor set is a closed tagged union with one case per
//! combinator: `Constant`, `Primitive`, `Mapped`, `Sequenced`, `Repeated`.
//! Because `Mapped` and `Sequenced` hide an intermediate result type, the
//! union stores type-erased values internally; the phantom-typed [`Effect`]
//! facade restores static typing at the public API, which is what makes the
//! internal downcasts infallible.
//!
//! Combinators never inspect the content of results. Errors are ordinary
//! values flowing through `map` and `after` like any other; short-circuiting
//! is a policy of the task layer built on top, not of this layer.

mod driver;

use std::any::Any;
use std::convert::Infallible;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::env::HostOp;
use crate::outcome::Outcome;

/// Type-erased result value threaded through the driver.
pub(crate) type Value = Box<dyn Any>;

type MapFn = Box<dyn FnOnce(Value) -> Value>;
type ThenFn = Box<dyn FnOnce(Value) -> Node>;
type LoopFn = Box<dyn FnMut(Value) -> Node>;

/// The closed descriptor union. One case per combinator.
pub(crate) enum Node {
    /// Yield a value with no host interaction.
    Constant(Value),
    /// Perform an atomic host operation.
    Primitive(HostOp),
    /// Run the inner descriptor, then apply a pure function to its result.
    Mapped(Box<Node>, MapFn),
    /// Run the inner descriptor, then use its result to build the next one.
    Sequenced(Box<Node>, ThenFn),
    /// Run the step built from the current state, then either iterate with
    /// new state or yield the final value. The step's result arrives as a
    /// [`LoopSignal`].
    Repeated(LoopFn, Value),
}

/// Erased continue/done tag observed by the driver's loop frames.
pub(crate) enum LoopSignal {
    Continue(Value),
    Done(Value),
}

/// Tag returned by a [`repeat`] step: iterate with new state, or finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step<S, T> {
    /// Feed this state into another iteration of the step.
    Continue(S),
    /// Stop iterating and yield this value.
    Done(T),
}

/// An inert description of a deferred computation producing a `T`.
///
/// Descriptors are finite values. The driver takes ownership, so a driven
/// descriptor can never be executed a second time.
pub struct Effect<T> {
    pub(crate) node: Node,
    _result: PhantomData<fn() -> T>,
}

impl<T: 'static> Effect<T> {
    fn from_node(node: Node) -> Self {
        Effect {
            node,
            _result: PhantomData,
        }
    }

    /// Apply a total pure function to the eventual result.
    ///
    /// No error semantics at this layer: `f` sees whatever value the effect
    /// produces, embedded outcomes included.
    pub fn map<U: 'static>(self, f: impl FnOnce(T) -> U + 'static) -> Effect<U> {
        let apply: MapFn = Box::new(move |value| Box::new(f(downcast::<T>(value))) as Value);
        Effect::from_node(Node::Mapped(Box::new(self.node), apply))
    }

    /// Run this effect, then use its result to construct and run the next
    /// descriptor.
    ///
    /// This is the only combinator that lets the value produced by one
    /// effect influence which effect runs next; everything else derives
    /// from it.
    pub fn after<U: 'static>(self, k: impl FnOnce(T) -> Effect<U> + 'static) -> Effect<U> {
        let build: ThenFn = Box::new(move |value| k(downcast::<T>(value)).node);
        Effect::from_node(Node::Sequenced(Box::new(self.node), build))
    }

    /// Drive this descriptor to completion against a host.
    pub(crate) fn run(self, host: &mut dyn crate::env::HostEnv) -> T {
        downcast(driver::drive(self.node, host))
    }
}

/// Yield `value` with no host interaction. The pure injection into the
/// descriptor type.
pub fn always<T: 'static>(value: T) -> Effect<T> {
    Effect::from_node(Node::Constant(Box::new(value)))
}

/// The atomic host operation `op`, producing the host's reported outcome.
pub(crate) fn primitive(op: HostOp) -> Effect<Outcome<(), String>> {
    Effect::from_node(Node::Primitive(op))
}

/// Repeatedly drive the descriptor built by `step` from the current state.
///
/// `step` yields a [`Step`] tag: `Continue(state)` feeds a new state into
/// the next iteration, `Done(value)` stops the loop and yields the value.
/// Iteration counts are unbounded, so the driver executes this as an
/// explicit trampoline with constant stack usage.
///
/// `step` is a closure rather than a descriptor value because descriptors
/// are consumed exactly once: each iteration constructs a fresh descriptor.
pub fn repeat<S, T, F>(seed: S, mut step: F) -> Effect<T>
where
    S: 'static,
    T: 'static,
    F: FnMut(S) -> Effect<Step<S, T>> + 'static,
{
    let iterate: LoopFn = Box::new(move |state| {
        step(downcast::<S>(state))
            .map(|tag| match tag {
                Step::Continue(next) => LoopSignal::Continue(Box::new(next) as Value),
                Step::Done(value) => LoopSignal::Done(Box::new(value) as Value),
            })
            .node
    });
    Effect::from_node(Node::Repeated(iterate, Box::new(seed)))
}

/// Repeat the descriptor built by `step` indefinitely, discarding results.
///
/// Driving the returned descriptor never terminates unless the process
/// itself is torn down. This is a deliberate non-terminating construct for
/// indefinite host loops; no cancellation mechanism exists.
pub fn forever<T, F>(mut step: F) -> Effect<Infallible>
where
    T: 'static,
    F: FnMut() -> Effect<T> + 'static,
{
    repeat((), move |()| {
        step().map(|_| Step::<(), Infallible>::Continue(()))
    })
}

/// Recover the concrete value behind an erased one.
///
/// The phantom-typed facade is the only producer of erased values, so a
/// mismatch here is unreachable by construction.
pub(crate) fn downcast<T: 'static>(value: Value) -> T {
    match value.downcast::<T>() {
        Ok(boxed) => *boxed,
        Err(_) => unreachable!("driver produced a value of an unexpected type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{save, MockHostEnv};

    #[test]
    fn test_always_yields_its_value() {
        let mut host = MockHostEnv::new();
        assert_eq!(always(42).run(&mut host), 42);
    }

    #[test]
    fn test_map_applies_pure_function() {
        let mut host = MockHostEnv::new();
        let effect = always(2).map(|n| n * 21);
        assert_eq!(effect.run(&mut host), 42);
    }

    #[test]
    fn test_map_composes_left_to_right() {
        let mut host = MockHostEnv::new();
        let effect = always("ebb").map(str::len).map(|n| n + 1);
        assert_eq!(effect.run(&mut host), 4);
    }

    #[test]
    fn test_after_feeds_result_into_next_descriptor() {
        let mut host = MockHostEnv::new();
        let effect = always(2).after(|n| always(n + 40));
        assert_eq!(effect.run(&mut host), 42);
    }

    #[test]
    fn test_construction_performs_no_host_interaction() {
        let mut host = MockHostEnv::new();

        let effect = save("out.pdf")
            .map(|outcome| outcome.is_success())
            .after(|done| always(done));
        let _never = forever(|| save("loop.pdf"));
        assert_eq!(host.operations(), 0);

        effect.run(&mut host);
        assert_eq!(host.operations(), 1);
    }

    #[test]
    fn test_repeat_terminates_on_done() {
        let mut host = MockHostEnv::new();
        let effect = repeat(3, |n| {
            always(if n == 0 {
                Step::Done("landed")
            } else {
                Step::Continue(n - 1)
            })
        });
        assert_eq!(effect.run(&mut host), "landed");
    }

    #[test]
    fn test_repeat_threads_state_between_iterations() {
        let mut host = MockHostEnv::new();
        // Sum 1..=10 by threading (next, total) through the loop state.
        let effect = repeat((1u64, 0u64), |(n, total)| {
            always(if n > 10 {
                Step::Done(total)
            } else {
                Step::Continue((n + 1, total + n))
            })
        });
        assert_eq!(effect.run(&mut host), 55);
    }

    #[test]
    fn test_repeat_runs_deep_without_stack_growth() {
        let mut host = MockHostEnv::new();
        let effect = repeat(100_000u32, |n| {
            always(if n == 0 {
                Step::Done(())
            } else {
                Step::Continue(n - 1)
            })
        });
        effect.run(&mut host);
    }

    #[test]
    fn test_repeat_steps_may_perform_host_operations() {
        let mut host = MockHostEnv::new();
        let effect = repeat(3u32, |n| {
            save("again.pdf").map(move |_| {
                if n == 1 {
                    Step::Done(())
                } else {
                    Step::Continue(n - 1)
                }
            })
        });
        effect.run(&mut host);
        assert_eq!(host.operations(), 3);
    }
}
