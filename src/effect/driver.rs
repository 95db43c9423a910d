//! Trampoline driver for effect descriptors
//!
//! Drives a descriptor tree to a final value with an explicit frame stack
//! instead of recursion: stack usage stays constant regardless of how
//! deeply descriptors are nested or how many iterations a `Repeated` node
//! runs. This is the only place primitive operations cross the host
//! boundary, and the only loop in the runtime.

use tracing::trace;

use super::{downcast, LoopSignal, Node, Value};
use crate::env::{HostEnv, HostOp};

/// Continuation frames awaiting a value from the descriptor below them.
enum Frame {
    /// Apply a pure function to the value.
    Map(super::MapFn),
    /// Build the next descriptor from the value.
    Then(super::ThenFn),
    /// Inspect the value's continue/done tag and iterate or finish.
    Loop(super::LoopFn),
}

/// Drive `root` to completion, performing primitives against `host`.
pub(crate) fn drive(root: Node, host: &mut dyn HostEnv) -> Value {
    let mut frames: Vec<Frame> = Vec::new();
    let mut current = root;

    'drive: loop {
        // Descend into the current descriptor until it produces a value.
        let mut value = match current {
            Node::Constant(value) => value,
            Node::Primitive(op) => perform(op, host),
            Node::Mapped(inner, f) => {
                frames.push(Frame::Map(f));
                current = *inner;
                continue 'drive;
            }
            Node::Sequenced(inner, k) => {
                frames.push(Frame::Then(k));
                current = *inner;
                continue 'drive;
            }
            Node::Repeated(mut step, state) => {
                current = step(state);
                frames.push(Frame::Loop(step));
                continue 'drive;
            }
        };

        // Unwind frames with the value until one resumes descent.
        loop {
            match frames.pop() {
                None => return value,
                Some(Frame::Map(f)) => value = f(value),
                Some(Frame::Then(k)) => {
                    current = k(value);
                    continue 'drive;
                }
                Some(Frame::Loop(mut step)) => match downcast::<LoopSignal>(value) {
                    LoopSignal::Continue(state) => {
                        current = step(state);
                        frames.push(Frame::Loop(step));
                        continue 'drive;
                    }
                    LoopSignal::Done(inner) => value = inner,
                },
            }
        }
    }
}

/// Execute one atomic host operation and erase its result.
fn perform(op: HostOp, host: &mut dyn HostEnv) -> Value {
    match op {
        HostOp::Save { destination } => {
            trace!(destination = %destination.display(), "performing save");
            Box::new(host.save(&destination))
        }
    }
}
