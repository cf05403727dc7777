use super::*;

const REQUIRED: &str = "required";
const EMAIL: &str = "bad email";
const MIN: &str = "too short";
const DIGIT: &str = "needs digit";
const LOWER: &str = "needs lowercase";

const EMAIL_RULES: [Rule; 2] = [
    Rule::new(Check::Required, REQUIRED),
    Rule::new(Check::Email, EMAIL),
];

const PASSWORD_RULES: [Rule; 4] = [
    Rule::new(Check::Required, REQUIRED),
    Rule::new(Check::MinLen(8), MIN),
    Rule::new(Check::HasDigit, DIGIT),
    Rule::new(Check::HasLowercase, LOWER),
];

#[test]
fn first_error_reports_one_error_in_declared_order() {
    // Empty fails every rule, but only the first message is reported.
    assert_eq!(first_error("", &PASSWORD_RULES), Some(REQUIRED));
    // Short and digit-less: min-length wins over the digit rule.
    assert_eq!(first_error("abc", &PASSWORD_RULES), Some(MIN));
    // Long enough, no digit and no lowercase: digit rule is declared first.
    assert_eq!(first_error("ABCDEFGH", &PASSWORD_RULES), Some(DIGIT));
    assert_eq!(first_error("ABCDEFG1", &PASSWORD_RULES), Some(LOWER));
    assert_eq!(first_error("abc12345", &PASSWORD_RULES), None);
}

#[test]
fn password_rules_pass_iff_long_enough_with_digit_and_lowercase() {
    let cases = [
        ("abc12345", true),
        ("abcdefg1", true),
        ("Abcdefg1", true),
        ("abc1234", false),  // 7 chars
        ("abcdefgh", false), // no digit
        ("ABCD1234", false), // no lowercase
        ("12345678", false), // no lowercase
        ("", false),
    ];
    for (value, valid) in cases {
        assert_eq!(first_error(value, &PASSWORD_RULES).is_none(), valid, "value: {value:?}");
    }
}

#[test]
fn min_len_counts_characters_not_bytes() {
    // 8 accented characters, more than 8 bytes.
    assert!(passes("árvízgát", Check::MinLen(8)));
}

#[test]
fn email_shape_accepts_local_at_domain() {
    assert_eq!(first_error("a@b.com", &EMAIL_RULES), None);
    assert_eq!(first_error("first.last@mail.example.org", &EMAIL_RULES), None);
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    assert_eq!(first_error("", &EMAIL_RULES), Some(REQUIRED));
    for value in ["plainaddress", "a@b", "@b.com", "a@@b.com", "a b@c.com", "a@.com", "a@com."] {
        assert_eq!(first_error(value, &EMAIL_RULES), Some(EMAIL), "value: {value:?}");
    }
}
