//! Presentation boundary.
//!
//! The cart never draws anything itself. After each mutation it hands a read-only
//! [`CartView`] to a [`Presenter`], which may be a terminal, a GUI or a recorder.

use rust_decimal::Decimal;

use storefront_core::format_money;

use crate::line_item::CartLineItem;
use crate::state::CartState;

/// What a presenter needs to draw the cart.
#[derive(Debug, Clone, Copy)]
pub struct CartView<'a> {
    pub lines: &'a [CartLineItem],
    pub item_count: u32,
    pub total: Decimal,
}

impl<'a> CartView<'a> {
    pub fn of(state: &'a CartState) -> Self {
        Self {
            lines: state.lines(),
            item_count: state.item_count(),
            total: state.total(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn formatted_total(&self) -> String {
        format_money(self.total)
    }
}

/// UI capabilities the cart calls into.
///
/// `confirm` and `acknowledge` block the calling operation until the user answers.
pub trait Presenter {
    /// Redraw line items, item count and total.
    fn render(&mut self, view: &CartView<'_>);

    /// Transient message (toast).
    fn notify(&mut self, message: &str);

    /// Yes/no gate.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Blocking informational message.
    fn acknowledge(&mut self, message: &str);

    /// Hide the cart surface.
    fn close_cart(&mut self);
}

/// Headless presenter that records every call.
///
/// Confirmation prompts are answered from a scripted queue; once the queue is
/// empty every prompt is answered with `default_answer`.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    /// `(item_count, total)` for every render.
    pub renders: Vec<(u32, Decimal)>,
    pub notifications: Vec<String>,
    pub prompts: Vec<String>,
    pub acknowledgments: Vec<String>,
    pub closes: usize,
    answers: Vec<bool>,
    default_answer: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every confirmation with `answer`.
    pub fn answering(answer: bool) -> Self {
        Self {
            default_answer: answer,
            ..Self::default()
        }
    }

    /// Queue answers for the next confirmations, in order.
    pub fn script_answers(&mut self, answers: impl IntoIterator<Item = bool>) {
        let mut queued: Vec<bool> = answers.into_iter().collect();
        queued.reverse();
        queued.append(&mut self.answers);
        self.answers = queued;
    }

    pub fn last_render(&self) -> Option<(u32, Decimal)> {
        self.renders.last().copied()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, view: &CartView<'_>) {
        self.renders.push((view.item_count, view.total));
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop().unwrap_or(self.default_answer)
    }

    fn acknowledge(&mut self, message: &str) {
        self.acknowledgments.push(message.to_string());
    }

    fn close_cart(&mut self) {
        self.closes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_answers_are_used_in_order_then_default() {
        let mut presenter = RecordingPresenter::answering(false);
        presenter.script_answers([true, false, true]);

        let answers: Vec<bool> = (0..4).map(|_| presenter.confirm("?")).collect();

        assert_eq!(answers, vec![true, false, true, false]);
        assert_eq!(presenter.prompts.len(), 4);
    }
}
