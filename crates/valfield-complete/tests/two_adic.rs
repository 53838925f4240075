//! End-to-end scenario: completing ℚ under the 2-adic valuation to ℚ₂.
//!
//! Runs the whole pipeline — basis, inversion estimate, completability
//! witness, completion, inverse extension, valuation extension — on the
//! worked instances, and snapshots a deterministic report of the run.

use valfield_complete::{
    CauchyApprox, CompletionField, ExtendedValuation, Point, observe_apartness,
};
use valfield_order::Level;
use valfield_valuation::{NhdsZeroBasis, PAdic, Rational, Valuation, inversion_estimate};

fn q(num: i128, den: i128) -> Rational {
    Rational::new(num, den).unwrap()
}

fn two_adic() -> PAdic {
    PAdic::new(2).unwrap()
}

fn tolerances() -> impl Iterator<Item = Level> {
    (0..12).map(Level::Exp)
}

/// Partial sums of Σ 2ⁱ: s_n = 2ⁿ − 1, tending to −1 in ℚ₂.
fn geometric_sums() -> CauchyApprox<PAdic> {
    CauchyApprox::new(
        |n| Rational::from_int((1i128 << n.min(100)) - 1),
        |g: &Level| g.exponent().map(|e| (e + 1).max(0) as usize).unwrap_or(0),
    )
}

#[test]
fn worked_estimate_instance() {
    // x = 1, y = 3, γ = 1: v(x − y) = v(−2) = ε below
    // min(γ·v(3)², v(3)) = 1, so v(1 − 1/3) is guaranteed below 1 —
    // and equals v(2/3) = ε exactly.
    let v = two_adic();
    let bound = inversion_estimate(&v, &q(1, 1), &q(3, 1), &Level::Exp(0)).unwrap();
    assert_eq!(bound.exact, Level::Exp(1));
    assert_eq!(v.value(&q(2, 3)), bound.exact);
}

#[test]
fn one_third_embeds_and_inverts() {
    let k = CompletionField::new(two_adic());
    let third = k.embed(&q(1, 3));
    let inv = k.inv(&third);
    for g in tolerances() {
        assert!(k.eq_within(&inv, &k.embed(&q(3, 1)), &g));
        assert!(k.eq_within(&k.mul(&inv, &third), &k.one(), &g));
    }
}

#[test]
fn geometric_series_completes_to_minus_one() {
    let v = two_adic();
    let k = CompletionField::new(v);
    let p = Point::new(geometric_sums());

    // The point is −1: adding 1 vanishes at every tolerance.
    let minus_one = k.embed(&q(-1, 1));
    for g in tolerances() {
        assert!(k.eq_within(&p, &minus_one, &g));
        assert!(k.eq_within(&k.add(&p, &k.one()), &k.zero(), &g));
    }

    // Its inverse is again −1, through the completability witness.
    let apart = observe_apartness(&v, p.seq(), 8).unwrap();
    let p = k.attach_apartness(&p, apart).unwrap();
    let inv = k.inv(&p);
    for g in tolerances() {
        assert!(k.eq_within(&inv, &minus_one, &g));
    }
}

#[test]
fn extended_valuation_agrees_and_extends() {
    let v = two_adic();
    let k = CompletionField::new(v);
    let vhat = ExtendedValuation::new(v);

    for x in [q(0, 1), q(3, 1), q(2, 1), q(5, 8), q(-12, 7)] {
        assert_eq!(vhat.value(&k.embed(&x)), v.value(&x));
    }

    let apart = observe_apartness(&v, &geometric_sums(), 8).unwrap();
    let p = k
        .attach_apartness(&Point::new(geometric_sums()), apart)
        .unwrap();
    assert_eq!(vhat.value(&p), Level::Exp(0));
    assert_eq!(vhat.value(&k.inv(&p)), Level::Exp(0));
}

#[test]
fn zero_ball_is_the_closure_of_the_embedded_ball() {
    let v = two_adic();
    let k = CompletionField::new(v);
    let vhat = ExtendedValuation::new(v);
    let basis = NhdsZeroBasis::new(&v);
    let ball = basis.ball(Level::Exp(1)).unwrap();

    for x in [q(0, 1), q(2, 1), q(4, 3), q(1, 1), q(8, 5)] {
        let p = k.embed(&x);
        assert_eq!(vhat.in_ball(&p, ball.radius()), ball.contains(&x));
        if ball.contains(&x) {
            let w = vhat
                .closure_witness(&p, ball.radius(), &Level::Exp(6))
                .unwrap();
            assert!(ball.contains(&w));
        }
    }
}

#[test]
fn scenario_report() {
    let v = two_adic();
    let k = CompletionField::new(v);
    let vhat = ExtendedValuation::new(v);

    let bound = inversion_estimate(&v, &q(1, 1), &q(3, 1), &Level::Exp(0)).unwrap();

    let third = k.embed(&q(1, 3));
    let round_trip = tolerances().all(|g| k.eq_within(&k.inv(&third), &k.embed(&q(3, 1)), &g));

    let apart = observe_apartness(&v, &geometric_sums(), 8).unwrap();
    let series = k
        .attach_apartness(&Point::new(geometric_sums()), apart.clone())
        .unwrap();

    let zero_inv = k.inv(&k.zero());
    let zero_inv_is_zero =
        zero_inv.apartness().is_none() && tolerances().all(|g| k.eq_within(&zero_inv, &k.zero(), &g));

    let report = serde_json::json!({
        "estimate": { "below": bound.below, "exact": bound.exact },
        "prime": 2,
        "round_trip": round_trip,
        "series": { "apartness": apart, "value": vhat.value(&series) },
        "zero_inv_is_zero": zero_inv_is_zero,
    });
    insta::assert_json_snapshot!("scenario", report);
}
