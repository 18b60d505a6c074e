//! Bill form state: the single source of truth behind the screen.
//!
//! Every user gesture lands here as one synchronous mutation. The state
//! validates or clamps the input, recomputes the derived tip amount and
//! per-person total, and hands the UI a fresh [`FormSnapshot`] to render.
//! There is no observer graph; the Yew layer dispatches [`FormAction`]s
//! through the [`Reducible`] impl and re-renders from the result.

use log::debug;
use std::rc::Rc;
use yew::prelude::Reducible;

use crate::{
    compute_per_person, compute_tip, defaults, format_currency, parse_bill_text,
    quantize_position, tip_percent_from_position,
};

/// Input events delivered by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// The bill text field changed (fires on every keystroke).
    BillTextChanged(String),
    /// The "+" stepper button was pressed.
    SplitIncrement,
    /// The "-" stepper button was pressed.
    SplitDecrement,
    /// The tip slider moved to a raw position in [0, 1].
    TipSliderChanged(f64),
}

/// Observable state exposed to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub bill_text: String,
    pub split_count: u32,
    pub tip_percent: u32,
    pub tip_amount: f64,
    pub per_person_total: f64,
    pub is_valid: bool,
}

impl FormSnapshot {
    /// Tip amount formatted for display.
    pub fn tip_amount_display(&self) -> String {
        format_currency(self.tip_amount)
    }

    /// Per-person total formatted for display.
    pub fn per_person_display(&self) -> String {
        format_currency(self.per_person_total)
    }
}

/// Mutable form state with synchronously recomputed derived values.
///
/// Invariants held after every mutation:
/// - `split_count` stays within `[split_min, split_max]`
/// - `slider_position` sits on one of the `slider_steps + 1` stops
/// - `tip_amount` and `per_person_total` reflect the current inputs,
///   with an unparseable bill treated as 0
#[derive(Debug, Clone, PartialEq)]
pub struct BillFormState {
    split_min: u32,
    split_max: u32,
    slider_steps: u32,

    bill_text: String,
    split_count: u32,
    slider_position: f64,

    tip_percent: u32,
    tip_amount: f64,
    per_person_total: f64,
    is_valid: bool,
}

impl BillFormState {
    /// Fresh form with the library default limits: empty bill, split of
    /// one, slider at zero.
    pub fn new() -> Self {
        Self::with_limits(
            defaults::SPLIT_MIN,
            defaults::SPLIT_MAX,
            defaults::SLIDER_STEPS,
        )
    }

    /// Fresh form with custom split bounds and slider step count.
    pub fn with_limits(split_min: u32, split_max: u32, slider_steps: u32) -> Self {
        let split_min = split_min.max(1);
        let mut state = Self {
            split_min,
            split_max: split_max.max(split_min),
            slider_steps,
            bill_text: String::new(),
            split_count: split_min,
            slider_position: 0.0,
            tip_percent: 0,
            tip_amount: 0.0,
            per_person_total: 0.0,
            is_valid: false,
        };
        state.recompute();
        state
    }

    /// Store new bill text and recompute.
    ///
    /// The text is trimmed before storing. Empty or unparseable text marks
    /// the form invalid and the derived outputs compute against a bill of
    /// zero.
    pub fn set_bill_text(&mut self, text: &str) {
        self.bill_text = text.trim().to_string();
        self.recompute();
    }

    /// Move the split count by `delta`, clamped to the configured bounds.
    ///
    /// A move that would leave the bounds is a no-op, not an error.
    pub fn adjust_split(&mut self, delta: i32) {
        let next = self
            .split_count
            .saturating_add_signed(delta)
            .clamp(self.split_min, self.split_max);
        if next == self.split_count {
            return;
        }
        self.split_count = next;
        self.recompute();
    }

    /// Move the tip slider to a raw position in [0, 1] and recompute.
    ///
    /// The position is quantized to the configured step count before it is
    /// stored, so reading it back always yields a stop.
    pub fn set_slider_position(&mut self, position: f64) {
        self.slider_position = quantize_position(position, self.slider_steps);
        self.recompute();
        debug!(
            "slider moved: tip {}%, per person {}",
            self.tip_percent,
            format_currency(self.per_person_total)
        );
    }

    /// Quantized slider position, for positioning the slider widget.
    pub fn slider_position(&self) -> f64 {
        self.slider_position
    }

    /// Configured slider step count.
    pub fn slider_steps(&self) -> u32 {
        self.slider_steps
    }

    /// Current observable state.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            bill_text: self.bill_text.clone(),
            split_count: self.split_count,
            tip_percent: self.tip_percent,
            tip_amount: self.tip_amount,
            per_person_total: self.per_person_total,
            is_valid: self.is_valid,
        }
    }

    // Derive everything from the three inputs. An unparseable bill counts
    // as zero; the parse error itself is only surfaced as is_valid.
    fn recompute(&mut self) {
        let parsed = parse_bill_text(&self.bill_text);
        self.is_valid = parsed.is_ok();
        let bill = parsed.unwrap_or(0.0);

        self.tip_percent = tip_percent_from_position(self.slider_position, self.slider_steps);
        self.tip_amount = compute_tip(bill, self.tip_percent);
        self.per_person_total = compute_per_person(bill, self.split_count, self.tip_percent);
    }
}

impl Default for BillFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducible for BillFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::BillTextChanged(text) => next.set_bill_text(&text),
            FormAction::SplitIncrement => next.adjust_split(1),
            FormAction::SplitDecrement => next.adjust_split(-1),
            FormAction::TipSliderChanged(position) => next.set_slider_position(position),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_fresh_form_is_invalid_and_zeroed() {
        let state = BillFormState::new();
        let snap = state.snapshot();
        assert!(!snap.is_valid);
        assert_eq!(snap.bill_text, "");
        assert_eq!(snap.split_count, 1);
        assert_eq!(snap.tip_percent, 0);
        assert!(approx(snap.tip_amount, 0.0));
        assert!(approx(snap.per_person_total, 0.0));
    }

    #[test]
    fn test_bill_entry_recomputes_outputs() {
        let mut state = BillFormState::new();
        state.set_bill_text("50.00");
        let snap = state.snapshot();
        assert!(snap.is_valid);
        assert!(approx(snap.tip_amount, 0.0));
        assert!(approx(snap.per_person_total, 50.0));
    }

    #[test]
    fn test_bill_text_is_stored_trimmed() {
        let mut state = BillFormState::new();
        state.set_bill_text("  42.50  ");
        assert_eq!(state.snapshot().bill_text, "42.50");
        assert!(state.snapshot().is_valid);
    }

    #[test]
    fn test_twenty_percent_split_two() {
        // Five slider steps make 20% reachable: one stop is 1/5
        let mut state = BillFormState::with_limits(1, 100, 5);
        state.set_bill_text("50.00");
        state.adjust_split(1);
        state.set_slider_position(0.2);

        let snap = state.snapshot();
        assert_eq!(snap.tip_percent, 20);
        assert!(approx(snap.tip_amount, 10.0));
        assert!(approx(snap.per_person_total, 30.0));
        assert_eq!(snap.tip_amount_display(), "$10.00");
        assert_eq!(snap.per_person_display(), "$30.00");
    }

    #[test]
    fn test_increment_five_times_from_one() {
        let mut state = BillFormState::new();
        state.set_bill_text("10");
        for _ in 0..5 {
            state.adjust_split(1);
        }
        assert_eq!(state.snapshot().split_count, 6);
    }

    #[test]
    fn test_decrement_never_drops_below_one() {
        let mut state = BillFormState::new();
        state.set_bill_text("10");
        for _ in 0..10 {
            state.adjust_split(-1);
        }
        assert_eq!(state.snapshot().split_count, 1);
    }

    #[test]
    fn test_increment_stops_at_upper_bound() {
        let mut state = BillFormState::with_limits(1, 3, 6);
        state.set_bill_text("99");
        for _ in 0..10 {
            state.adjust_split(1);
        }
        assert_eq!(state.snapshot().split_count, 3);

        // And the derived output reflects the clamped count
        assert!(approx(state.snapshot().per_person_total, 33.0));
    }

    #[test]
    fn test_split_change_rescales_per_person() {
        let mut state = BillFormState::new();
        state.set_bill_text("60");
        state.adjust_split(1);
        state.adjust_split(1);
        let snap = state.snapshot();
        assert_eq!(snap.split_count, 3);
        assert!(approx(snap.per_person_total, 20.0));
    }

    #[test]
    fn test_slider_endpoints_map_to_percent_bounds() {
        let mut state = BillFormState::new();
        state.set_bill_text("100");

        state.set_slider_position(0.0);
        assert_eq!(state.snapshot().tip_percent, 0);

        state.set_slider_position(1.0);
        let snap = state.snapshot();
        assert_eq!(snap.tip_percent, 100);
        assert!(approx(snap.tip_amount, 100.0));
        assert!(approx(snap.per_person_total, 200.0));
    }

    #[test]
    fn test_slider_position_reads_back_quantized() {
        let mut state = BillFormState::new();
        state.set_slider_position(0.4);
        // Nearest six-step stop to 0.4 is 2/6
        assert!(approx(state.slider_position(), 2.0 / 6.0));
    }

    #[test]
    fn test_unparseable_bill_computes_against_zero() {
        let mut state = BillFormState::new();
        state.set_bill_text("dinner");
        state.set_slider_position(1.0);
        state.adjust_split(1);

        let snap = state.snapshot();
        assert!(!snap.is_valid);
        assert!(approx(snap.tip_amount, 0.0));
        assert!(approx(snap.per_person_total, 0.0));
    }

    #[test]
    fn test_corrected_bill_recomputes_from_kept_inputs() {
        let mut state = BillFormState::new();
        state.set_slider_position(0.5);
        state.adjust_split(1);
        state.set_bill_text("oops");
        assert!(!state.snapshot().is_valid);

        // Fixing the text picks up the split and tip already chosen
        state.set_bill_text("80");
        let snap = state.snapshot();
        assert!(snap.is_valid);
        assert_eq!(snap.tip_percent, 50);
        assert!(approx(snap.tip_amount, 40.0));
        assert!(approx(snap.per_person_total, 60.0));
    }

    #[test]
    fn test_reduce_matches_direct_mutations() {
        let state = Rc::new(BillFormState::new());
        let state = state.reduce(FormAction::BillTextChanged("50.00".into()));
        let state = state.reduce(FormAction::SplitIncrement);
        let state = state.reduce(FormAction::TipSliderChanged(1.0));

        let snap = state.snapshot();
        assert!(snap.is_valid);
        assert_eq!(snap.split_count, 2);
        assert_eq!(snap.tip_percent, 100);
        assert!(approx(snap.per_person_total, 50.0));
    }

    #[test]
    fn test_reduce_decrement_at_floor_returns_equal_state() {
        let state = Rc::new(BillFormState::new());
        let next = state.clone().reduce(FormAction::SplitDecrement);
        assert_eq!(*state, *next);
    }
}
