/// Class machinery.
///
/// Defines the `Class`, `Method`, and `ClassInstance` types: method tables
/// with single-parent lookup, per-instance field maps, and method dispatch
/// with a fresh call frame bound to `self`.
pub mod class;
/// Comparison rules.
///
/// Implements equality and ordering between runtime values, including the
/// dispatch of user-defined `__eq__` and `__lt__` methods and the four
/// comparators derived from them.
pub mod compare;

pub mod core;
