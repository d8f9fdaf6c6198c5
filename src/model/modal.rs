//! Modal stack for managing overlays
//!
//! Dialogs are pushed on top of the results screen; only the top one
//! receives input. Dialog state lives in the dialog components.

/// A modal overlay displayed above the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Status select (Todos / Alive / Dead / unknown)
    StatusFilter,
    /// Keyboard shortcuts
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Modals from bottom to top, for drawing
    pub fn iter(&self) -> impl Iterator<Item = Modal> + '_ {
        self.stack.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.is_empty());

        stack.push(Modal::StatusFilter);
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.top(), Some(Modal::StatusFilter));
        assert_eq!(stack.pop(), Some(Modal::StatusFilter));
        assert!(stack.top().is_none());
        assert!(stack.pop().is_none());
    }

    #[test]
    fn test_modal_stack_iterates_bottom_up() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);

        let order: Vec<Modal> = stack.iter().collect();
        assert_eq!(order, vec![Modal::Help, Modal::QuitConfirm]);
    }
}
