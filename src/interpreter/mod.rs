// Groundspace: a minimal MeTTa/Atomese-style symbolic rewriting engine
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/interpreter/mod.rs
// Stepwise interpretation of space content against a knowledge base

pub mod control;

pub use control::{Continuation, IfMatch, Reduct};

use tracing::{debug, trace, warn};

use crate::atom::{Atom, ExecError, GroundedAtom, Var};
use crate::matching::unifier::{result_placeholder, RESULT_PLACEHOLDER};
use crate::space::GroundingSpace;

/// Sentinel returned when a step finds the content empty.
pub const EOS: &str = "eos";

/// Head symbol of knowledge-base equations.
pub const EQUATION: &str = "=";

/// Returned by [`interpret_step`] when content was empty at the start of the
/// step, and never otherwise.
pub fn eos() -> Atom {
    Atom::sym(EOS)
}

// ============================================================================
// Step driver
// ============================================================================

/// Performs one reduction step on `target`'s content, consulting `kb` for
/// equations.
///
/// Pops the last atom of content and interprets it; atoms scheduled for
/// later steps are pushed back onto content. Returns `Some(eos())` when
/// content was empty, `Some(atom)` when the popped atom reduced to a final
/// value within this step, and `None` when work was deferred into content
/// for a future step.
pub fn interpret_step(target: &mut GroundingSpace, kb: &GroundingSpace) -> Option<Atom> {
    let atom = match target.pop() {
        Some(atom) => atom,
        None => return Some(eos()),
    };
    debug!(atom = %atom, "interpret_step: atom on top");
    let mut queue = Vec::new();
    let result = interpret_atom(kb, false, &atom, &mut |atom| queue.push(atom));
    target.add_all(queue);
    result
}

/// Repeatedly steps `target` until a step yields a final atom, giving up
/// after `max_steps` steps. Rule sets that never reduce to a value make the
/// step sequence unbounded; the step limit is the caller's safety net.
pub fn interpret_until_result(
    target: &mut GroundingSpace,
    kb: &GroundingSpace,
    max_steps: usize,
) -> Option<Atom> {
    for _ in 0..max_steps {
        if let Some(result) = interpret_step(target, kb) {
            return Some(result);
        }
    }
    None
}

// ============================================================================
// Step algorithm
// ============================================================================

/// Interprets one atom. `reducted` marks an expression whose reducible
/// subexpression has already been reduced as far as it goes; such an
/// expression is final when the knowledge base has nothing for it, rather
/// than having its arguments scheduled again.
///
/// `enqueue` receives every atom the step wants processed in a future step.
fn interpret_atom(
    kb: &GroundingSpace,
    reducted: bool,
    atom: &Atom,
    enqueue: &mut dyn FnMut(Atom),
) -> Option<Atom> {
    if let Some(reduct) = atom.as_gnd::<Reduct>() {
        return interpret_reduct(kb, reduct, enqueue);
    }
    let children = match atom.as_expression() {
        Some(children) if !children.is_empty() => children,
        // Symbols, variables, grounded values and the empty expression are
        // already final.
        _ => return Some(atom.clone()),
    };
    match &children[0] {
        Atom::Grounded(op) => interpret_grounded(reducted, atom, children, op.as_ref(), enqueue),
        _ => interpret_symbolic(kb, reducted, atom, children, enqueue),
    }
}

/// Resumes a pending reduction popped from content.
fn interpret_reduct(
    kb: &GroundingSpace,
    reduct: &Reduct,
    enqueue: &mut dyn FnMut(Atom),
) -> Option<Atom> {
    match &reduct.cont {
        Continuation::Done => interpret_atom(kb, true, &reduct.sub, enqueue),
        Continuation::Resume { full, slot } => {
            let value = {
                let mut wrapped =
                    |atom: Atom| enqueue(Reduct::resume(atom, full.clone(), *slot));
                interpret_atom(kb, false, &reduct.sub, &mut wrapped)?
            };
            // The subexpression is final; substitute it into the parent and
            // schedule the parent for its own next step. A value identical
            // to the original child means the subexpression is irreducible,
            // and the parent must not schedule it again.
            let irreducible = full
                .as_expression()
                .map_or(false, |children| children[*slot] == value);
            let resumed = replace_child(full, *slot, value);
            trace!(atom = %resumed, irreducible, "interpret_reduct: resuming parent");
            if irreducible {
                enqueue(Reduct::done(resumed));
            } else {
                enqueue(resumed);
            }
            None
        }
    }
}

/// Dispatches an expression with a grounded head: either schedules reduction
/// of its first unreduced argument or executes the grounded operation.
fn interpret_grounded(
    reducted: bool,
    atom: &Atom,
    children: &[Atom],
    op: &dyn GroundedAtom,
    enqueue: &mut dyn FnMut(Atom),
) -> Option<Atom> {
    let sub_expr = children.iter().position(Atom::is_expression);
    if let Some(slot) = sub_expr {
        if !reducted && op.reduce_arguments() {
            trace!(atom = %atom, slot, "interpret_grounded: reducing argument");
            enqueue(Reduct::resume(children[slot].clone(), atom.clone(), slot));
            return None;
        }
    }
    // Operations that consume evaluated arguments cannot run with an
    // unresolved variable among them; the expression is left as-is.
    if op.reduce_arguments() && children.iter().any(Atom::is_variable) {
        trace!(atom = %atom, "interpret_grounded: unbound variable argument");
        return Some(atom.clone());
    }
    match op.execute(children) {
        Ok(results) => {
            trace!(atom = %atom, results = results.len(), "interpret_grounded: executed");
            for result in results {
                enqueue(result);
            }
            None
        }
        Err(ExecError::NotSupported(_)) => Some(atom.clone()),
        Err(ExecError::Failure(message)) => {
            warn!(atom = %atom, message = %message, "interpret_grounded: execution failed");
            None
        }
    }
}

/// Dispatches an expression with a symbolic head: rewrites it via knowledge
/// base equations, or schedules reduction of its first unreduced argument
/// when no equation applies yet.
fn interpret_symbolic(
    kb: &GroundingSpace,
    reducted: bool,
    atom: &Atom,
    children: &[Atom],
    enqueue: &mut dyn FnMut(Atom),
) -> Option<Atom> {
    let query = Atom::expr(vec![Atom::sym(EQUATION), atom.clone(), result_placeholder()]);
    let results = kb.unify(&query);
    if results.is_empty() {
        let sub_expr = children.iter().position(Atom::is_expression);
        return match sub_expr {
            Some(slot) if !reducted => {
                trace!(atom = %atom, slot, "interpret_symbolic: reducing argument");
                enqueue(Reduct::resume(children[slot].clone(), atom.clone(), slot));
                None
            }
            _ => Some(atom.clone()),
        };
    }
    let placeholder = Var::new(RESULT_PLACEHOLDER);
    for result in results {
        let value = match result.query_bindings.get(&placeholder) {
            Some(value) => value.clone(),
            None => continue,
        };
        // Each deferred pair becomes a runtime guard around the bound
        // result, first pair innermost, so the equation only fires once
        // every deferred structural equality holds.
        let mut templ = value;
        for (a, b) in result.unifications {
            templ = Atom::expr(vec![Atom::gnd(IfMatch), a, b, templ]);
        }
        trace!(atom = %templ, "interpret_symbolic: equation applied");
        enqueue(templ);
    }
    None
}

/// A copy of `expr` with child `slot` replaced by `value`. The original
/// expression may be aliased from the knowledge base and is never mutated.
fn replace_child(expr: &Atom, slot: usize, value: Atom) -> Atom {
    match expr.as_expression() {
        Some(children) => {
            let mut children = children.to_vec();
            children[slot] = value;
            Atom::expr(children)
        }
        None => expr.clone(),
    }
}
