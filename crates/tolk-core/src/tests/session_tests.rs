use tolk_types::{LanguageCode, SessionEvent, SessionState, TranslationOutcome, Warning};

use crate::session::{SessionContext, SessionEffect, apply_outcome, update};

fn state(source: &str, target: &str) -> SessionState {
    SessionState::new(source.into(), target.into())
}

#[test]
fn swap_twice_restores_selection() {
    let ctx = SessionContext::default();
    let pairs = [("en", "hi"), ("fr", "de"), ("ja", "ja"), ("ko", "zh")];

    for (source, target) in pairs {
        let mut s = state(source, target);

        assert_eq!(update(&mut s, SessionEvent::Swap, &ctx), None);
        assert_eq!(s.source, LanguageCode::from(target));
        assert_eq!(s.target, LanguageCode::from(source));

        update(&mut s, SessionEvent::Swap, &ctx);
        assert_eq!(s, state(source, target));
    }
}

#[test]
fn select_example_sets_mapped_sentence_or_key() {
    let ctx = SessionContext::default();
    let mut s = state("en", "hi");

    let effect = update(
        &mut s,
        SessionEvent::SelectExample {
            key: "❤️ Thank You".to_string(),
        },
        &ctx,
    );
    assert_eq!(effect, None);
    assert_eq!(s.input, "Thank you very much for your help!");

    update(
        &mut s,
        SessionEvent::SelectExample {
            key: "not an example".to_string(),
        },
        &ctx,
    );
    assert_eq!(s.input, "not an example");
}

#[test]
fn edit_only_touches_input() {
    let ctx = SessionContext::default();
    let mut s = state("en", "hi");
    s.output = Some(TranslationOutcome::Translated("old".to_string()));

    update(
        &mut s,
        SessionEvent::Edit {
            text: "Hello".to_string(),
        },
        &ctx,
    );

    assert_eq!(s.input, "Hello");
    assert_eq!(s.source, LanguageCode::from("en"));
    assert_eq!(s.target, LanguageCode::from("hi"));
    assert_eq!(s.output, Some(TranslationOutcome::Translated("old".to_string())));
}

#[test]
fn translate_and_submit_request_the_same_translation() {
    let ctx = SessionContext::default();
    let mut s = state("en", "fr");
    s.input = "Good morning".to_string();
    let before = s.clone();

    let from_button = update(&mut s, SessionEvent::Translate, &ctx);
    let from_enter = update(&mut s, SessionEvent::Submit, &ctx);

    assert_eq!(from_button, from_enter);
    assert_eq!(from_button, Some(SessionEffect::Translate(before.request())));
    // Requesting a translation does not change anything visible yet
    assert_eq!(s, before);
}

#[test]
fn unknown_language_selection_is_ignored() {
    let ctx = SessionContext::default();
    let mut s = state("en", "hi");

    update(
        &mut s,
        SessionEvent::SelectSource {
            code: "tlh".into(),
        },
        &ctx,
    );
    update(
        &mut s,
        SessionEvent::SelectTarget {
            code: "de".into(),
        },
        &ctx,
    );

    assert_eq!(s.source, LanguageCode::from("en"));
    assert_eq!(s.target, LanguageCode::from("de"));
}

#[test]
fn outcome_lands_in_output_slot() {
    let mut s = state("en", "en");
    apply_outcome(&mut s, TranslationOutcome::Warning(Warning::SameLanguage));

    assert_eq!(
        s.output.map(|o| o.to_string()),
        Some("⚠️ Source and target languages are the same".to_string())
    );
}
