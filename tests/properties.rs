use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use vect::Vec2;
use vect::math::ORIGIN;

const SAMPLES: usize = 2_000;

fn random_vec(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(rng.gen_range(-1e3..=1e3), rng.gen_range(-1e3..=1e3))
}

#[test]
fn add_and_dot_commute() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..SAMPLES {
        let a = random_vec(&mut rng);
        let b = random_vec(&mut rng);
        assert_eq!(a + b, b + a);
        assert_eq!(a.dot(b), b.dot(a));
    }
}

#[test]
fn identities() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..SAMPLES {
        let v = random_vec(&mut rng);
        assert_eq!(v + ORIGIN, v);
        assert_eq!(v * 1.0, v);
        assert_eq!(-(-v), v);
    }
}

#[test]
fn distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let a = random_vec(&mut rng);
        let b = random_vec(&mut rng);
        assert_eq!(a.distance(b), b.distance(a));
        assert_eq!(a.distance(a), 0.0);
    }
}

#[test]
fn unrotate_inverts_rotate() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..SAMPLES {
        let v = random_vec(&mut rng);
        let u = Vec2::for_angle(rng.gen_range(-10.0..=10.0));
        assert_relative_eq!(v.rotate(u).unrotate(u), v, epsilon = 1e-9);
    }
}

#[test]
fn normalize_gives_unit_length() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..SAMPLES {
        let v = random_vec(&mut rng);
        if v == ORIGIN {
            continue;
        }
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn clamp_length_is_bounded() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..SAMPLES {
        let v = random_vec(&mut rng);
        let max = rng.gen_range(0.0..=2e3);
        let c = v.clamp_length(max);
        assert!(c.length() <= max + 1e-9, "{v} clamped to {max} gave {c}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn codec_round_trips() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let v = random_vec(&mut rng);
        let text = vect::codec::to_string(v).unwrap();
        assert_eq!(vect::codec::from_str(&text).unwrap(), v);
    }
}
