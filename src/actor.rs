use crate::argument::Arguments;
use crate::operator::{BinaryOperator, Operator};

/// A node that can be evaluated against an environment of bound
/// arguments. `Output` is deduced from the node's type alone.
pub trait Evaluate<Env> {
    type Output;

    fn evaluate(&self, env: Env) -> Self::Output;
}

/// Marker for nodes that evaluate to assignable storage: placeholders,
/// references, and the assignments themselves.
///
/// Only lvalues may appear on the left of an assignment. A constant
/// captured by value is rejected when the expression is built:
/// ```compile_fail
/// # use deferred::prelude::*;
/// let expr = add_assign(5, _0);
/// ```
pub trait Lvalue {}

/// A deferred expression: an immutable handle around one root node.
///
/// Building an actor performs no work. The tree is evaluated afresh on
/// every [`call`](Actor::call).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Actor<Node> {
    node: Node,
}

impl<Node> Actor<Node> {
    pub const fn new(node: Node) -> Self { Self { node } }

    /// Bind `args` to storage slots and evaluate the tree against them.
    ///
    /// Assignments return the slot they wrote to, so the updated value can
    /// be read through the result and, once the call's borrow ends, through
    /// the arguments themselves.
    /// # Examples
    /// ```
    /// # use deferred::prelude::*;
    /// let expr = add_assign(_0, _1);
    /// let mut args = (5_i32, 3_i32);
    /// assert_eq!(expr.call(&mut args).get(), 8);
    /// assert_eq!(args, (8, 3));
    ///
    /// let (mut a, mut b) = (1_i32, 2_i32);
    /// expr.call((&mut a, &mut b));
    /// assert_eq!(a, 3);
    /// ```
    pub fn call<'a, Args>(&self, args: Args) -> <Node as Evaluate<Args::Slots>>::Output
    where
        Args: Arguments<'a>,
        Node: Evaluate<Args::Slots>,
    {
        self.node.evaluate(args.bind())
    }
}

impl<Env, Node> Evaluate<Env> for Actor<Node>
where
    Node: Evaluate<Env>,
{
    type Output = Node::Output;

    fn evaluate(&self, env: Env) -> Self::Output { self.node.evaluate(env) }
}

impl<Node> Lvalue for Actor<Node> where Node: Lvalue {}

/// Conversion of an operand into an expression leaf.
///
/// Actors convert to themselves, so expressions nest. Placeholder tokens
/// become placeholder leaves. Primitive values and [`Value`] are captured
/// by value; `&Cell<T>`, `&mut T` and [`Reference`] are captured by
/// reference.
///
/// [`Value`]: crate::value::Value
/// [`Reference`]: crate::value::Reference
pub trait IntoActor {
    type Node;

    fn into_actor(self) -> Actor<Self::Node>;
}

impl<Node> IntoActor for Actor<Node> {
    type Node = Node;

    fn into_actor(self) -> Self { self }
}

/// An operator applied to two child actors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Composite<Op, Lhs, Rhs> {
    op: Op,
    lhs: Lhs,
    rhs: Rhs,
}

impl<Op, Lhs, Rhs> Composite<Op, Lhs, Rhs> {
    pub const fn new(op: Op, lhs: Lhs, rhs: Rhs) -> Self { Self { op, lhs, rhs } }
}

impl<Env, Op, Lhs, Rhs> Evaluate<Env> for Composite<Op, Lhs, Rhs>
where
    Env: Copy,
    Lhs: Evaluate<Env>,
    Rhs: Evaluate<Env>,
    Op: BinaryOperator<Lhs::Output, Rhs::Output>,
{
    type Output = Op::Output;

    fn evaluate(&self, env: Env) -> Self::Output {
        let lhs = self.lhs.evaluate(env);
        let rhs = self.rhs.evaluate(env);
        self.op.apply(lhs, rhs)
    }
}

/// Build a new actor applying `op` to `lhs` and `rhs`.
pub fn compose<Op, Lhs, Rhs>(
    op: Op,
    lhs: Actor<Lhs>,
    rhs: Actor<Rhs>,
) -> Actor<Composite<Op, Actor<Lhs>, Actor<Rhs>>>
where
    Op: Operator,
{
    tracing::trace!(op = Op::SYMBOL, "compose");
    Actor::new(Composite::new(op, lhs, rhs))
}
