use anyhow::{Result, ensure};
use ctor::ctor;
use rand::{Rng, SeedableRng, rngs::StdRng};
use squirrel_noise::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const SAMPLES: usize = 100_000;

#[ctor]
fn init_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn in_unit(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

fn in_signed_unit(v: f32) -> bool {
    (-1.0..=1.0).contains(&v)
}

#[test]
fn random_samples_stay_in_range() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
    let (mut min_unit, mut max_unit) = (f32::MAX, f32::MIN);
    let (mut min_signed, mut max_signed) = (f32::MAX, f32::MIN);

    for _ in 0..SAMPLES {
        let [x, y, z, t]: [i32; 4] = rng.random();
        let seed: u32 = rng.random();

        let unit = [
            get_1d_noise_zero_to_one(x, seed),
            get_2d_noise_zero_to_one(x, y, seed),
            get_3d_noise_zero_to_one(x, y, z, seed),
            get_4d_noise_zero_to_one(x, y, z, t, seed),
        ];
        let signed = [
            get_1d_noise_neg_one_to_one(x, seed),
            get_2d_noise_neg_one_to_one(x, y, seed),
            get_3d_noise_neg_one_to_one(x, y, z, seed),
            get_4d_noise_neg_one_to_one(x, y, z, t, seed),
        ];

        for v in unit {
            ensure!(in_unit(v), "{v} outside [0, 1] at ({x}, {y}, {z}, {t}) seed {seed}");
            min_unit = min_unit.min(v);
            max_unit = max_unit.max(v);
        }
        for v in signed {
            ensure!(
                in_signed_unit(v),
                "{v} outside [-1, 1] at ({x}, {y}, {z}, {t}) seed {seed}"
            );
            min_signed = min_signed.min(v);
            max_signed = max_signed.max(v);
        }
    }

    tracing::info!(min_unit, max_unit, min_signed, max_signed, "sampled noise bounds");
    // 400k samples should come close to both ends of each interval.
    ensure!(min_unit < 0.01 && max_unit > 0.99);
    ensure!(min_signed < -0.99 && max_signed > 0.99);
    Ok(())
}

#[test]
fn seeded_source_stays_in_range() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let noise = NoiseSource::new(rng.random()).derive(3);

    for _ in 0..SAMPLES {
        let position: [i32; 3] = rng.random();
        let unit = noise.zero_to_one(position);
        let signed = noise.neg_one_to_one(position);
        ensure!(in_unit(unit), "{unit} outside [0, 1] at {position:?}");
        ensure!(in_signed_unit(signed), "{signed} outside [-1, 1] at {position:?}");
    }
    Ok(())
}

#[test]
fn interval_endpoints_are_inclusive() {
    use squirrel_noise::range::{neg_one_to_one, zero_to_one};

    assert_eq!(zero_to_one(0), 0.0);
    assert_eq!(zero_to_one(u32::MAX), 1.0);
    assert_eq!(neg_one_to_one(i32::MAX as u32), 1.0);
    assert_eq!(neg_one_to_one(i32::MIN as u32), -1.0);
}
