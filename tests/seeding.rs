use amount_keypad::{
    Amount, AmountEditor, FractionDisplay, MAX_WHOLE, Mode, ParseAmountError, combine,
    digit_count, format_currency,
};

#[test]
fn parse_plain_and_formatted_amounts() {
    assert_eq!("12".parse::<Amount>(), Ok(Amount::from_cents(1200)));
    assert_eq!("12.5".parse::<Amount>(), Ok(Amount::from_cents(1250)));
    assert_eq!("12.05".parse::<Amount>(), Ok(Amount::from_cents(1205)));
    assert_eq!(".05".parse::<Amount>(), Ok(Amount::from_cents(5)));
    assert_eq!("$1,234.56".parse::<Amount>(), Ok(Amount::from_cents(123456)));
    assert_eq!("7.".parse::<Amount>(), Ok(Amount::from_cents(700)));
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Amount>(), Err(ParseAmountError::Empty));
    assert_eq!("$.".parse::<Amount>(), Err(ParseAmountError::Empty));
    assert_eq!(
        "12a".parse::<Amount>(),
        Err(ParseAmountError::UnexpectedCharacter { ch: 'a', index: 2 })
    );
    assert_eq!(
        "$1.2.3".parse::<Amount>(),
        Err(ParseAmountError::UnexpectedCharacter { ch: '.', index: 4 })
    );
    assert_eq!(
        "-5".parse::<Amount>(),
        Err(ParseAmountError::UnexpectedCharacter { ch: '-', index: 0 })
    );
    assert_eq!(
        "1.234".parse::<Amount>(),
        Err(ParseAmountError::TooManyFractionDigits { count: 3 })
    );
    assert_eq!(
        "99999999999999999999".parse::<Amount>(),
        Err(ParseAmountError::Overflow)
    );
}

#[test]
fn parse_error_messages() {
    assert_eq!(ParseAmountError::Empty.to_string(), "amount is empty");
    assert_eq!(
        ParseAmountError::TooManyFractionDigits { count: 4 }.to_string(),
        "at most two fractional digits are allowed, got 4"
    );
}

#[test]
fn amount_parts_and_display() {
    let amount = Amount::from_parts(1234, 5).expect("in range");
    assert_eq!(amount.whole(), 1234);
    assert_eq!(amount.fraction(), 5);
    assert_eq!(amount.to_string(), "$1,234.05");
    assert_eq!(Amount::from_parts(1, 100), None);
    assert_eq!(Amount::from_parts(u64::MAX, 0), None);
}

#[test]
fn formatting_helpers() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(u64::MAX), 20);

    assert_eq!(combine(12, 34), 1234);
    assert_eq!(combine(1, 0), 10);
    assert_eq!(combine(0, 7), 7);
    assert_eq!(combine(u64::MAX, 1), u64::MAX);

    assert_eq!(format_currency(Amount::ZERO, FractionDisplay::Hidden), "$0");
    assert_eq!(format_currency(Amount::ZERO, FractionDisplay::TwoDigits), "$0.00");
    assert_eq!(
        format_currency(Amount::from_cents(100_000_000), FractionDisplay::Hidden),
        "$1,000,000"
    );
}

#[test]
fn builder_seeds_reachable_states() {
    let cases = [
        (0, "$0", Mode::Whole),
        (1200, "$12", Mode::Whole),
        (1250, "$12.50", Mode::FractionOneDigit),
        (1205, "$12.05", Mode::FractionOneDigitTenths),
        (1234, "$12.34", Mode::FractionTwoDigits),
        (5, "$0.05", Mode::FractionOneDigitTenths),
    ];
    for (cents, text, mode) in cases {
        let eng = AmountEditor::builder()
            .amount(Amount::from_cents(cents))
            .build();
        assert_eq!(eng.formatted_amount(), text, "{cents}");
        assert_eq!(eng.mode(), mode, "{cents}");
        assert_eq!(eng.amount(), Amount::from_cents(cents));
    }
}

#[test]
fn seeded_editor_backspaces_normally() {
    let mut eng = AmountEditor::builder()
        .amount("$3.75".parse().expect("valid amount"))
        .build();
    eng.delete_backward();
    assert_eq!(eng.formatted_amount(), "$3.70");
    eng.delete_backward();
    eng.delete_backward();
    assert_eq!(eng.formatted_amount(), "$3");
}

#[test]
fn builder_clamps_huge_amounts() {
    let eng = AmountEditor::builder().amount(Amount::MAX).build();
    assert_eq!(eng.snapshot().whole_amount, MAX_WHOLE);
}
