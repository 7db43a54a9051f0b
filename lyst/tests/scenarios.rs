use insta::assert_snapshot;
use lyst::{lyst, Error, Kind, Lyst};

#[test]
fn test_pop_and_push_at_both_ends() {
    let list = lyst![i32, f32, f64, bool];
    let popped = list.pop_front();
    assert_eq!(popped, lyst![f32, f64, bool]);
    let popped = popped.pop_back();
    assert_eq!(popped, lyst![f32, f64]);
    let pushed = popped.push_front(Kind::of::<bool>());
    assert_eq!(pushed, lyst![bool, f32, f64]);
    let pushed = pushed.push_back(Kind::of::<i32>());
    assert_snapshot!(pushed, @"[bool, f32, f64, i32]");
    assert_eq!(list, lyst![i32, f32, f64, bool]);
}

#[test]
fn test_at() {
    let list = lyst![i32, f32, f64, bool];
    assert_eq!(list.at(2), Ok(&Kind::of::<f64>()));
    assert_eq!(list.at(4), Err(Error::OutOfRange { index: 4, len: 4 }));
}

#[test]
fn test_reverse_then_push_and_pop() {
    let list = lyst![bool, f32, f64, i32];
    let reversed = list.reverse();
    assert_eq!(reversed, lyst![i32, f64, f32, bool]);
    let pushed = reversed.push_front(Kind::of::<i64>());
    assert_eq!(pushed, lyst![i64, i32, f64, f32, bool]);
    assert_snapshot!(pushed.pop_back(), @"[i64, i32, f64, f32]");
}

#[test]
fn test_replace_then_search() {
    let list = lyst![i64, i32, f64, f32];
    let replaced = list.replace(2, Kind::of::<bool>()).unwrap();
    assert_eq!(replaced, lyst![i64, i32, bool, f32]);
    assert!(replaced.contains(&Kind::of::<i32>()));
    assert_eq!(replaced.index_of(&Kind::of::<i32>()), Ok(1));
}

#[test]
fn test_remove_all_and_remove_first() {
    let list = lyst![i32, f64, f32, f64, bool];
    assert_snapshot!(list.remove_all(&Kind::of::<f64>()), @"[i32, f32, bool]");
    assert_snapshot!(
        list.remove_first(&Kind::of::<f64>()).unwrap(),
        @"[i32, f32, f64, bool]"
    );
}

#[test]
fn test_remove_first_absent_propagates() {
    let list = lyst![i32, f64];
    assert_eq!(
        list.remove_first(&Kind::of::<u8>()),
        Err(Error::NotFound("Kind(u8)".to_string()))
    );
}

#[test]
fn test_empty_sequence() {
    let empty: Lyst = lyst![];
    assert_eq!(empty.pop_front(), empty);
    assert_eq!(empty.pop_back(), empty);
    assert_eq!(empty.front(), Err(Error::EmptySequence));
    assert_eq!(empty.back(), Err(Error::EmptySequence));
    assert!(empty.is_empty());
    assert_eq!(lyst::length(&empty), 0);
    assert_eq!(empty.clear(), empty);
}

#[test]
fn test_clear_ignores_contents() {
    assert_eq!(lyst![i32, i32, u8].clear(), lyst![]);
}

#[test]
fn test_custom_types() {
    struct Apple;
    struct Pear;

    let fruit = lyst![Apple, Pear, Apple];
    assert_eq!(fruit.count(&Kind::of::<Apple>()), 2);
    assert_eq!(fruit.index_of(&Kind::of::<Pear>()), Ok(1));
    assert_eq!(fruit.remove_all(&Kind::of::<Apple>()), lyst![Pear]);
}
