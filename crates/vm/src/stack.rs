//! The operand stack.

use crate::error::RuntimeError;

/// A last-in-first-out stack of 32-bit integers.
///
/// Only the top and the element below it are addressable; everything else
/// is reached through [`Stack::iter`], which walks from top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    /// Bottom first; the top is the last element.
    values: Vec<i32>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value on top.
    ///
    /// Growth is fallible rather than aborting so allocation exhaustion can
    /// be reported.
    pub fn push(&mut self, value: i32) -> Result<(), RuntimeError> {
        self.values
            .try_reserve(1)
            .map_err(|_| RuntimeError::OutOfMemory)?;
        self.values.push(value);
        Ok(())
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Option<i32> {
        self.values.pop()
    }

    pub fn peek_top(&self) -> Option<i32> {
        self.values.last().copied()
    }

    pub fn peek_second(&self) -> Option<i32> {
        let len = self.values.len();
        if len < 2 {
            return None;
        }
        Some(self.values[len - 2])
    }

    /// Mutable access to the top value.
    pub fn top_mut(&mut self) -> Option<&mut i32> {
        self.values.last_mut()
    }

    /// Exchange the top two values. Returns false, leaving the stack
    /// untouched, when there are fewer than two.
    pub fn swap_top(&mut self) -> bool {
        let len = self.values.len();
        if len < 2 {
            return false;
        }
        self.values.swap(len - 1, len - 2);
        true
    }

    /// Values from top to bottom. Each call starts again from the top.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().rev().copied()
    }

    /// Release every element.
    pub fn clear(&mut self) {
        self.values.clear();
        self.values.shrink_to_fit();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_of(values: &[i32]) -> Stack {
        let mut stack = Stack::new();
        for &v in values {
            stack.push(v).unwrap();
        }
        stack
    }

    #[test]
    fn new_stack_is_empty() {
        let stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek_top(), None);
        assert_eq!(stack.peek_second(), None);
    }

    #[test]
    fn push_then_pop_is_lifo() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn peek_does_not_mutate() {
        let stack = stack_of(&[10, 20]);
        assert_eq!(stack.peek_top(), Some(20));
        assert_eq!(stack.peek_second(), Some(10));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn peek_second_needs_two() {
        assert_eq!(stack_of(&[1]).peek_second(), None);
    }

    #[test]
    fn iter_top_to_bottom_and_restartable() {
        let stack = stack_of(&[1, 2, 3]);
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn swap_top_exchanges_values() {
        let mut stack = stack_of(&[1, 2, 3]);
        assert!(stack.swap_top());
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn swap_top_short_stack_untouched() {
        let mut stack = stack_of(&[7]);
        assert!(!stack.swap_top());
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn top_mut_writes_through() {
        let mut stack = stack_of(&[4, 5]);
        *stack.top_mut().unwrap() = 9;
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![9, 4]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut stack = stack_of(&[1, 2]);
        stack.clear();
        assert!(stack.is_empty());
        stack.clear();
        assert!(stack.is_empty());
    }
}
