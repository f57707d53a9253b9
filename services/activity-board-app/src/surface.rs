//! Board surface backed by Leptos signals

use activity_board::{BoardSurface, BoardView, Notice};
use leptos::prelude::*;

use crate::page;

/// The activities container and the email field as reactive state
#[derive(Debug, Clone, Copy)]
pub struct SignalSurface {
    pub view: RwSignal<BoardView>,
    pub email: RwSignal<String>,
}

impl SignalSurface {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(BoardView::Loading),
            email: RwSignal::new(String::new()),
        }
    }
}

impl Default for SignalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardSurface for SignalSurface {
    fn render(&self, view: BoardView) {
        self.view.set(view);
    }

    fn notify(&self, notice: Notice) {
        page::alert(&notice);
    }

    fn email(&self) -> String {
        self.email.get_untracked()
    }
}
