use amount_keypad::{AmountEditor, Mode, Outcome};

fn type_str(eng: &mut AmountEditor, keys: &str) {
    for ch in keys.chars() {
        eng.insert_text(&ch.to_string());
    }
}

#[test]
fn fresh_editor_shows_zero() {
    let eng = AmountEditor::new();
    assert_eq!(eng.formatted_amount(), "$0");
    assert_eq!(eng.mode(), Mode::Whole);
    assert_eq!(eng.fractional_digit_count(), 0);
    assert!(eng.is_empty());
}

#[test]
fn digits_accumulate_with_grouping() {
    let mut eng = AmountEditor::new();
    let expected = [
        "$1",
        "$12",
        "$123",
        "$1,234",
        "$12,345",
        "$123,456",
        "$1,234,567",
        "$12,345,678",
        "$123,456,789",
    ];
    for (ch, want) in "123456789".chars().zip(expected) {
        assert_eq!(eng.insert_text(&ch.to_string()), Outcome::Changed);
        assert_eq!(eng.formatted_amount(), want);
        assert_eq!(eng.mode(), Mode::Whole);
    }
}

#[test]
fn leading_zeros_are_dropped() {
    let mut eng = AmountEditor::new();
    assert_eq!(eng.insert_text("0"), Outcome::Ignored);
    type_str(&mut eng, "007");
    assert_eq!(eng.formatted_amount(), "$7");
}

#[test]
fn backspace_drops_last_whole_digit() {
    let mut eng = AmountEditor::new();
    type_str(&mut eng, "1234");
    assert_eq!(eng.delete_backward(), Outcome::Changed);
    assert_eq!(eng.formatted_amount(), "$123");
    eng.delete_backward();
    eng.delete_backward();
    eng.delete_backward();
    assert_eq!(eng.formatted_amount(), "$0");
}

#[test]
fn backspace_on_empty_is_noop() {
    let mut eng = AmountEditor::new();
    assert_eq!(eng.delete_backward(), Outcome::Ignored);
    assert_eq!(eng.formatted_amount(), "$0");
    assert_eq!(eng, AmountEditor::new());
}

#[test]
fn non_numeric_input_is_ignored() {
    let mut eng = AmountEditor::new();
    type_str(&mut eng, "12");
    for junk in ["a", "-", ",", " ", "$", "", "34", "é"] {
        assert_eq!(eng.insert_text(junk), Outcome::Ignored, "{junk:?}");
        assert_eq!(eng.formatted_amount(), "$12");
    }
}

#[test]
fn decimal_mode_entry_and_exit() {
    let mut eng = AmountEditor::new();
    type_str(&mut eng, "123");
    assert_eq!(eng.mode(), Mode::Whole);
    assert_eq!(eng.formatted_amount(), "$123");

    eng.insert_text(".");
    assert_eq!(eng.mode(), Mode::FractionNoDigits);
    assert_eq!(eng.formatted_amount(), "$123.00");

    eng.delete_backward();
    assert_eq!(eng.mode(), Mode::Whole);
    assert_eq!(eng.formatted_amount(), "$123");
}

#[test]
fn whole_digits_stop_at_capacity() {
    let mut eng = AmountEditor::new();
    type_str(&mut eng, &amount_keypad::MAX_WHOLE.to_string());
    let full = eng.formatted_amount();
    assert_eq!(eng.insert_text("9"), Outcome::Ignored);
    assert_eq!(eng.formatted_amount(), full);

    // fraction digits still fit
    type_str(&mut eng, ".99");
    assert_eq!(eng.formatted_amount(), format!("{full}.99"));
}

#[test]
fn clear_resets_everything() {
    let mut eng = AmountEditor::new();
    type_str(&mut eng, "45.6");
    assert_eq!(eng.clear(), Outcome::Changed);
    assert_eq!(eng.formatted_amount(), "$0");
    assert_eq!(eng.mode(), Mode::Whole);
    assert_eq!(eng.clear(), Outcome::Ignored);
}
