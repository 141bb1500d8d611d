use gesture_core::{resolve, GestureDictionary, ResolutionError, StepKind};

fn letters(chars: &str, with_space: bool) -> GestureDictionary {
    let mut builder = GestureDictionary::builder();
    for c in chars.chars() {
        builder = builder.letter(c, &format!("/gestures/{}.png", c));
    }
    if with_space {
        builder = builder.space("/gestures/nothing.png");
    }
    builder.build().unwrap()
}

fn alphabet(with_space: bool) -> GestureDictionary {
    letters("ABCDEFGHIJKLMNOPQRSTUVWXYZ", with_space)
}

fn labels(steps: &[gesture_core::GestureStep]) -> Vec<&str> {
    steps.iter().map(|s| s.label.as_str()).collect()
}

#[test]
fn test_step_count_bounded_by_chars_plus_words() {
    let dict = GestureDictionary::builder()
        .sign("HELLO", None, "/gestures/hello.png")
        .letter('A', "/gestures/A.png")
        .letter('Z', "/gestures/Z.png")
        .letter('S', "/gestures/S.png")
        .sign("SS", None, "/gestures/SS.png")
        .space("/gestures/nothing.png")
        .build()
        .unwrap();

    for gloss in ["hello", "a b c", "zzz   aaa hello", "ÀÉ ?! hello-world", "x", "ßßß", "straße ŉ"] {
        let steps = resolve(gloss, Some(&dict)).unwrap();
        let words = gloss.split_whitespace().count();
        let chars: usize = gloss.split_whitespace().map(|w| w.chars().count()).sum();
        assert!(steps.len() <= chars + words, "bound violated for {:?}", gloss);

        let spaces = steps.iter().filter(|s| s.is_space).count();
        assert_eq!(spaces, words - 1);
    }
}

#[test]
fn test_idempotent() {
    let dict = alphabet(true);
    let first = resolve("the quick brown fox", Some(&dict)).unwrap();
    let second = resolve("the quick brown fox", Some(&dict)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_whole_word_precedence() {
    let dict = GestureDictionary::builder()
        .sign("HI", Some("hi"), "/gestures/hi.png")
        .letter('H', "/gestures/H.png")
        .letter('I', "/gestures/I.png")
        .build()
        .unwrap();

    let steps = resolve("hi", Some(&dict)).unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].kind, StepKind::Sign);
    assert_eq!(steps[0].image_ref, "/gestures/hi.png");
}

#[test]
fn test_fingerspell_fallback() {
    let dict = letters("ABC", false);
    let steps = resolve("ABC", Some(&dict)).unwrap();

    assert_eq!(labels(&steps), vec!["A", "B", "C"]);
    assert!(steps.iter().all(|s| s.kind == StepKind::Fingerspell && !s.is_space));
    assert_eq!(steps[1].image_ref, "/gestures/B.png");
}

#[test]
fn test_space_inserted_between_words_only() {
    let dict = alphabet(true);
    let steps = resolve("HELLO WORLD", Some(&dict)).unwrap();

    assert_eq!(steps.len(), 11);
    let space_positions: Vec<usize> = steps
        .iter()
        .enumerate()
        .filter(|(_, s)| s.kind == StepKind::Space)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(space_positions, vec![5]);

    let space = &steps[5];
    assert!(space.is_space);
    assert_eq!(space.label, "");
    assert_eq!(space.image_ref, "/gestures/nothing.png");
    assert_eq!(steps[4].label, "O");
    assert_eq!(steps[6].label, "W");
}

#[test]
fn test_space_omitted_without_sentinel() {
    let dict = alphabet(false);
    let steps = resolve("HELLO WORLD", Some(&dict)).unwrap();

    assert_eq!(steps.len(), 10);
    assert!(steps.iter().all(|s| !s.is_space));
    assert_eq!(labels(&steps).concat(), "HELLOWORLD");
}

#[test]
fn test_unmappable_characters_skipped() {
    let dict = alphabet(false);
    let steps = resolve("HE!LLO", Some(&dict)).unwrap();
    assert_eq!(labels(&steps), vec!["H", "E", "L", "L", "O"]);
}

#[test]
fn test_all_skipped_is_empty_not_error() {
    let dict = alphabet(true);
    assert_eq!(resolve("!?", Some(&dict)), Ok(vec![]));

    // Boundaries still get their space marker even when both sides vanish.
    let steps = resolve("!? #", Some(&dict)).unwrap();
    assert!(steps.iter().all(|s| s.is_space));

    let empty = GestureDictionary::builder().build().unwrap();
    assert_eq!(resolve("hello world", Some(&empty)), Ok(vec![]));
}

#[test]
fn test_blank_gloss_rejected() {
    let dict = alphabet(true);
    assert_eq!(resolve("", Some(&dict)), Err(ResolutionError::EmptyInput));
    assert_eq!(resolve("   ", Some(&dict)), Err(ResolutionError::EmptyInput));
}

#[test]
fn test_case_insensitive() {
    let dict = GestureDictionary::builder()
        .sign("hello", Some("Hello"), "/gestures/hello.png")
        .letter('w', "/gestures/W.png")
        .build()
        .unwrap();

    let upper = resolve("HELLO W", Some(&dict)).unwrap();
    assert_eq!(resolve("hello w", Some(&dict)).unwrap(), upper);
    assert_eq!(resolve("HeLLo w", Some(&dict)).unwrap(), upper);
    assert_eq!(upper[0].label, "Hello");
}
