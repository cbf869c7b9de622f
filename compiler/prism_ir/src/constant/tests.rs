use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_constant_id_is_one_based() {
    assert_eq!(ConstantId::new(0), None);
    let Some(id) = ConstantId::new(3) else {
        panic!("3 is a valid id");
    };
    assert_eq!(id.get(), 3);
    assert_eq!(id.slot(), 2);
    assert_eq!(format!("{id:?}"), "ConstantId(3)");
}

#[test]
fn test_constants_lookup() {
    let constants = Constants::from_slots(vec![Some("foo".into()), None, Some("+".into())]);
    assert_eq!(constants.len(), 3);
    assert_eq!(ConstantId::new(1).and_then(|id| constants.get(id)), Some("foo"));
    assert_eq!(ConstantId::new(2).and_then(|id| constants.get(id)), None);
    assert_eq!(ConstantId::new(3).and_then(|id| constants.get(id)), Some("+"));
    assert_eq!(ConstantId::new(4).and_then(|id| constants.get(id)), None);
}

#[test]
fn test_constants_iter_skips_unresolved() {
    let constants = Constants::from_slots(vec![None, Some("a".into()), Some("b".into())]);
    let resolved: Vec<_> = constants.iter().map(|(id, text)| (id.get(), text)).collect();
    assert_eq!(resolved, vec![(2, "a"), (3, "b")]);
}

crate::static_assert_size!(ConstantId, 4);
