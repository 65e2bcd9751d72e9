//! Pack rotation tests

use proptest::prelude::*;

use codevs_client::core::Pack;
use codevs_client::types::{Block, Rotation};

fn pack2(rows: [[Block; 2]; 2]) -> Pack {
    Pack::from_rows(&rows).unwrap()
}

#[test]
fn test_rotation_examples() {
    let pack = pack2([[1, 2], [3, 4]]);
    assert_eq!(pack.rotate(1), pack2([[3, 1], [4, 2]]));
    assert_eq!(pack.rotate(2), pack2([[4, 3], [2, 1]]));
    assert_eq!(pack.rotate(3), pack2([[2, 4], [1, 3]]));
}

#[test]
fn test_typed_rotation_matches_count() {
    let pack = pack2([[1, 2], [3, 4]]);
    for rotation in Rotation::ALL {
        assert_eq!(pack.rotated(rotation), pack.rotate(rotation.count() as u32));
    }
}

#[test]
fn test_turn_count_is_taken_modulo_four() {
    let pack = pack2([[9, 5], [0, 3]]);
    assert_eq!(pack.rotate(5), pack.rotate(1));
    assert_eq!(pack.rotate(8), pack);
}

fn any_pack() -> impl Strategy<Value = Pack> {
    (1usize..=4).prop_flat_map(|size| {
        prop::collection::vec(0u8..=11, size * size)
            .prop_map(move |cells| Pack::new(size, &cells).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_four_turns_is_identity(pack in any_pack()) {
        prop_assert_eq!(pack.rotate(4), pack);
    }

    #[test]
    fn prop_k_then_inverse_is_identity(pack in any_pack(), k in 0u32..4) {
        prop_assert_eq!(pack.rotate(k).rotate(4 - k), pack.clone());
        let rotation = Rotation::from_count(k);
        prop_assert_eq!(pack.rotated(rotation).rotated(rotation.inverse()), pack);
    }

    #[test]
    fn prop_rotation_keeps_cells(pack in any_pack(), k in 0u32..4) {
        let mut before = pack.cells().to_vec();
        let mut after = pack.rotate(k).cells().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
        prop_assert_eq!(pack.rotate(k).size(), pack.size());
    }
}
