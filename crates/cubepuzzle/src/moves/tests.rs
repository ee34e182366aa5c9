use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

use super::*;
use crate::{FACELET_COUNT, Facelet, Slice};

const REFERENCE_CYCLES: &[(BaseMove, &str)] = &[
    (
        BaseMove::R,
        "(108 145 158 125)(109 146 161 120)(110 149 156 121)(111 147 159 123)\
         (112 148 160 124)(113 144 157 122)(114 127 152 143)(115 128 155 138)\
         (116 131 150 139)(117 129 153 141)(118 130 154 142)(119 126 151 140)",
    ),
    (
        BaseMove::U,
        "(0 112 122 15)(1 109 121 13)(2 111 120 16)(3 108 124 14)(4 110 123 12)\
         (5 113 125 17)(6 58 116 69)(7 55 115 67)(8 57 114 70)(9 54 118 68)\
         (10 56 117 66)(11 59 119 71)",
    ),
    (
        BaseMove::F,
        "(12 120 156 48)(13 123 161 52)(14 122 158 50)(15 125 160 49)\
         (16 121 159 53)(17 124 157 51)(30 66 138 102)(31 69 143 106)\
         (32 68 140 104)(33 71 142 103)(34 67 141 107)(35 70 139 105)",
    ),
    (
        BaseMove::M,
        "(54 71 104 91)(55 66 107 92)(56 67 102 95)(57 69 105 93)(58 70 106 94)\
         (59 68 103 90)(60 89 98 73)(61 84 101 74)(62 85 96 77)(63 87 99 75)\
         (64 88 100 76)(65 86 97 72)",
    ),
    (
        BaseMove::L,
        "(0 17 50 37)(1 12 53 38)(2 13 48 41)(3 15 51 39)(4 16 52 40)(5 14 49 36)\
         (6 35 44 19)(7 30 47 20)(8 31 42 23)(9 33 45 21)(10 34 46 22)(11 32 43 18)",
    ),
    (
        BaseMove::E,
        "(18 33 140 130)(19 31 139 127)(20 34 138 129)(21 32 142 126)\
         (22 30 141 128)(23 35 143 131)(24 87 134 76)(25 85 133 73)\
         (26 88 132 75)(27 86 136 72)(28 84 135 74)(29 89 137 77)",
    ),
];

/// Returns whether `cubicle` lies on the line through the cube center
/// parallel to `axis`.
fn is_on_axis(cubicle: Cubicle, axis: Axis) -> bool {
    let (j, k) = axis.others();
    let offset = cubicle.offset();
    offset[j.index()] == 0 && offset[k.index()] == 0
}

#[test]
fn test_base_move_table() {
    assert_eq!(BaseMove::iter().count(), 18);
    for base in BaseMove::iter() {
        assert_eq!(BaseMove::from_symbol(base.symbol()), Some(base));
        assert_eq!(base.permutation().len(), FACELET_COUNT);
        assert_eq!(base.permutation(), &base.twist().facelet_permutation());
    }
    assert_eq!(BaseMove::from_symbol('Q'), None);

    assert_eq!(BaseMove::R.twist().orders().collect::<Vec<_>>(), vec![(Slice::R, 1)]);
    assert_eq!(
        BaseMove::WideU.twist().orders().collect::<Vec<_>>(),
        vec![(Slice::U, -1), (Slice::E, -1)],
    );
    assert_eq!(BaseMove::Y.twist().size(), 27);
    assert_eq!(BaseMove::WideL.twist().size(), 18);
    assert_eq!(BaseMove::S.twist().size(), 9);
}

#[test]
fn test_matches_reference_cycles() {
    for &(base, cycles) in REFERENCE_CYCLES {
        let reference = Permutation::from_cycles(cycles, FACELET_COUNT).unwrap();
        let generated = base.permutation();
        let axis = base.twist().axis();
        for facelet in Facelet::all() {
            let i = facelet.index();
            if is_on_axis(facelet.cubicle, axis) {
                // The reference leaves the center of the turning slice in
                // place. Its facelets still turn, but stay in the cubicle.
                assert!(!reference.moves(i), "{base} {i}");
                let image = Facelet::from_index(generated.image(i)).unwrap();
                assert_eq!(image.cubicle, facelet.cubicle, "{base} {i}");
            } else {
                assert_eq!(generated.image(i), reference.image(i), "{base} {i}");
            }
        }
    }
}

#[test]
fn test_cross_consistency() {
    for base in BaseMove::iter() {
        for exponent in (-8..=8).chain([i32::MIN, i32::MIN + 1, i32::MAX]) {
            let m = Move::new(base, exponent);
            for cubicle in Cubicle::all() {
                let moved = cubicle.facelets().any(|f| m.permutation().moves(f.index()));
                assert_eq!(m.order(cubicle) != 0, moved, "{m} {cubicle:?}");
                assert_eq!(m.affects(cubicle), moved, "{m} {cubicle:?}");
            }
        }
    }
}

#[test]
fn test_full_turn_exponents_are_empty() {
    for base in BaseMove::iter() {
        for exponent in [0, 4, -4, 8, i32::MIN] {
            let m = Move::new(base, exponent);
            assert!(m.permutation().is_identity(), "{m}");
            assert_eq!(m.twist().size(), 0, "{m}");
            assert!(Cubicle::all().all(|c| !m.affects(c) && m.order(c) == 0), "{m}");
        }
    }
}

#[test]
fn test_extreme_exponents() {
    let m = Move::new(BaseMove::Y, i32::MIN);
    assert_eq!(m.to_string(), "y2147483648'");
    assert!(m.permutation().is_identity());
    let inverse = m.inverse();
    assert_eq!(inverse.exponent(), i32::MIN);
    assert!(inverse.permutation().is_identity());

    let m = Move::new(BaseMove::R, i32::MAX);
    assert_eq!(m.to_string(), "R2147483647");
    assert_eq!(m.permutation(), Move::new(BaseMove::R, -1).permutation());
    assert_eq!(m.inverse().to_string(), "R2147483647'");
    assert_eq!(m.inverse().permutation(), BaseMove::R.permutation());
    assert_eq!(Move::new(BaseMove::R, i32::MIN + 1).permutation(), BaseMove::R.permutation());
}

#[test]
fn test_exponent_matches_scaled_twist() {
    for base in BaseMove::iter() {
        for exponent in -3..=3 {
            let m = Move::new(base, exponent);
            assert_eq!(m.permutation(), &m.twist().facelet_permutation(), "{m}");
        }
    }
}

#[test]
fn test_group_closure() {
    for base in BaseMove::iter() {
        let p = base.permutation();
        assert_eq!(p.order(), 4, "{base}");

        let mut state = Permutation::identity(FACELET_COUNT);
        for _ in 0..4 {
            state = state.apply(p);
        }
        assert!(state.is_identity(), "{base}");

        let half = Move::new(base, 2);
        assert!(half.permutation().apply(half.permutation()).is_identity(), "{base}");
        assert!(Move::new(base, 4).permutation().is_identity(), "{base}");
    }

    // Sexy move has order 6.
    let sexy = ["R", "U", "R'", "U'"]
        .into_iter()
        .map(|s| s.parse::<Move>().unwrap())
        .fold(Permutation::identity(FACELET_COUNT), |p, m| p.apply(m.permutation()));
    assert_eq!(sexy.order(), 6);
}

#[test]
fn test_wide_moves_compose_slices() {
    let compose = |a: &Permutation, b: &Permutation| a.apply(b);
    let (r, u, f) = (BaseMove::R.permutation(), BaseMove::U.permutation(), BaseMove::F.permutation());
    let (l, d, b) = (BaseMove::L.permutation(), BaseMove::D.permutation(), BaseMove::B.permutation());
    let (m, e, s) = (BaseMove::M.permutation(), BaseMove::E.permutation(), BaseMove::S.permutation());

    assert_eq!(BaseMove::WideR.permutation(), &compose(r, &m.inverse()));
    assert_eq!(BaseMove::WideU.permutation(), &compose(u, &e.inverse()));
    assert_eq!(BaseMove::WideF.permutation(), &compose(f, s));
    assert_eq!(BaseMove::WideL.permutation(), &compose(l, m));
    assert_eq!(BaseMove::WideD.permutation(), &compose(d, e));
    assert_eq!(BaseMove::WideB.permutation(), &compose(b, &s.inverse()));

    // Parallel slices commute.
    assert_eq!(compose(r, m), compose(m, r));
    assert_eq!(compose(u, d), compose(d, u));
}

#[test]
fn test_rotations_match_face_turns() {
    let x = BaseMove::R
        .permutation()
        .apply(&BaseMove::M.permutation().inverse())
        .apply(&BaseMove::L.permutation().inverse());
    assert_eq!(BaseMove::X.permutation(), &x);

    let y = BaseMove::U
        .permutation()
        .apply(&BaseMove::E.permutation().inverse())
        .apply(&BaseMove::D.permutation().inverse());
    assert_eq!(BaseMove::Y.permutation(), &y);

    let z = BaseMove::F
        .permutation()
        .apply(BaseMove::S.permutation())
        .apply(&BaseMove::B.permutation().inverse());
    assert_eq!(BaseMove::Z.permutation(), &z);
}

#[test]
fn test_move_accessors() {
    let m = Move::new(BaseMove::U, -1);
    assert_eq!(m.base(), BaseMove::U);
    assert_eq!(m.exponent(), -1);
    assert_eq!(m.to_string(), "U'");
    assert_eq!(m.twist().order(Slice::U), Some(1));

    let corner = Cubicle::new([0, 0, 0]).unwrap();
    let bottom = Cubicle::new([0, 2, 0]).unwrap();
    assert_eq!(m.order(corner), 1);
    assert_eq!(m.order(bottom), 0);
    assert!(!m.affects(bottom));

    let inverse = m.inverse();
    assert_ne!(inverse.id(), m.id());
    assert_eq!(inverse.to_string(), "U");
    assert!(m.permutation().apply(inverse.permutation()).is_identity());

    let single = Move::from(BaseMove::M);
    assert_eq!(single.exponent(), 1);
    assert_eq!(single.permutation(), BaseMove::M.permutation());

    let clone = m.clone();
    assert_eq!(clone.id(), m.id());
    assert_ne!(Move::new(BaseMove::U, -1).id(), m.id());
}

#[test]
fn test_table_cycle_notation_roundtrip() {
    for base in BaseMove::iter() {
        let p = base.permutation();
        assert_eq!(&Permutation::from_cycles(&p.to_disjoint_cycles(), FACELET_COUNT).unwrap(), p);
    }
}
